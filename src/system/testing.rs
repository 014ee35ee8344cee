use std::fs;
use std::path::{Path, PathBuf};

use super::sources::ProcSources;

/// Synthetic `/proc` + `/etc` tree under the temp dir, removed on drop.
pub struct FakeProc {
    root: PathBuf,
}

impl FakeProc {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("jiffytop_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("proc")).unwrap();
        fs::create_dir_all(root.join("etc")).unwrap();
        FakeProc { root }
    }

    pub fn write(&self, rel: &str, contents: &str) {
        self.write_bytes(rel, contents.as_bytes());
    }

    pub fn write_bytes(&self, rel: &str, contents: &[u8]) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn sources(&self) -> ProcSources {
        ProcSources::rooted(&self.root)
    }
}

impl Drop for FakeProc {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}
