//! Key-indexed scanning of whitespace-delimited records.
//!
//! Kernel-exposed records (`/proc/stat`, `/proc/<pid>/stat`, `/proc/meminfo`,
//! ...) are lines of whitespace-separated tokens. A reader names a key token
//! and receives the remainder of the first line containing it. A missing
//! source or key is not an error: the caller gets an exhausted stream.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<String>,
    pos: usize,
}

impl TokenStream {
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_rest<'a>(rest: impl Iterator<Item = &'a str>) -> Self {
        TokenStream {
            tokens: rest.map(str::to_string).collect(),
            pos: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.pos.min(self.tokens.len())..]
    }

    /// Consume the next token and parse it. `None` when exhausted or unparsable.
    pub fn next_value<T: FromStr>(&mut self) -> Option<T> {
        self.next()?.parse().ok()
    }
}

impl Iterator for TokenStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let token = self.tokens.get(self.pos)?.clone();
        self.pos += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.tokens.len().saturating_sub(self.pos);
        (n, Some(n))
    }
}

/// Scan the file at `path` for `key`.
pub fn locate(path: &Path, key: &str) -> TokenStream {
    match File::open(path) {
        Ok(file) => locate_in_reader(BufReader::new(file), key),
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "record unavailable");
            TokenStream::empty()
        }
    }
}

pub fn locate_in(text: &str, key: &str) -> TokenStream {
    locate_in_reader(text.as_bytes(), key)
}

/// Scan raw record bytes; invalid UTF-8 is replaced, not rejected.
pub fn locate_in_bytes(bytes: &[u8], key: &str) -> TokenStream {
    locate_in_reader(bytes, key)
}

pub fn locate_in_reader<R: BufRead>(reader: R, key: &str) -> TokenStream {
    for line in reader.split(b'\n') {
        // An I/O error ends the scan; undecodable bytes only affect their own tokens.
        let Ok(line) = line else {
            break;
        };
        let line = String::from_utf8_lossy(&line);
        let mut tokens = line.split_whitespace();
        if tokens.any(|token| token == key) {
            return TokenStream::from_rest(tokens);
        }
    }
    TokenStream::empty()
}
