use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use super::scanner;
use super::sources::ProcSources;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProcessInfo {
    pub pid: u32,
    pub user: String,
    pub command: String,
    pub ram_kb: u64,
    /// Lifetime-average share of one CPU, nominally 0.0..=1.0.
    pub cpu_utilization: f64,
    pub uptime_seconds: u64,
}

/// Full command line; kernel threads have none and show as `[comm]`.
pub fn command(sources: &ProcSources, pid: u32) -> String {
    let cmdline = fs::read(sources.process_cmdline(pid)).unwrap_or_default();
    let joined = cmdline
        .split(|&b| b == 0)
        .filter(|arg| !arg.is_empty())
        .map(String::from_utf8_lossy)
        .collect::<Vec<_>>()
        .join(" ");
    if !joined.is_empty() {
        return joined;
    }

    let comm = fs::read(sources.process_comm(pid)).unwrap_or_default();
    let comm = String::from_utf8_lossy(&comm);
    if comm.trim().is_empty() {
        String::new()
    } else {
        format!("[{}]", comm.trim())
    }
}

/// Virtual memory size in kB (`VmSize:`); 0 for kernel threads.
pub fn ram_kb(sources: &ProcSources, pid: u32) -> u64 {
    scanner::locate(&sources.process_status(pid), "VmSize:")
        .next_value()
        .unwrap_or(0)
}

/// Real uid from the `Uid:` line.
pub fn uid(sources: &ProcSources, pid: u32) -> Option<u32> {
    scanner::locate(&sources.process_status(pid), "Uid:").next_value()
}

/// uid → login name, read once from the password database.
#[derive(Clone, Debug, Default)]
pub struct UserTable {
    names: HashMap<u32, String>,
}

impl UserTable {
    pub fn load(passwd: &Path) -> Self {
        match fs::read_to_string(passwd) {
            Ok(contents) => Self::parse(&contents),
            Err(err) => {
                tracing::debug!(path = %passwd.display(), %err, "password database unavailable");
                Self::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Self {
        let mut names = HashMap::new();
        for line in contents.lines() {
            let mut fields = line.split(':');
            let (Some(name), Some(_), Some(uid)) = (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            if let Ok(uid) = uid.parse() {
                names.entry(uid).or_insert_with(|| name.to_string());
            }
        }
        UserTable { names }
    }

    /// Login name, or the numeric uid when it has no entry.
    pub fn name(&self, uid: u32) -> String {
        self.names
            .get(&uid)
            .cloned()
            .unwrap_or_else(|| uid.to_string())
    }
}
