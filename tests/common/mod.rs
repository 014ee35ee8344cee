use std::fs;
use std::path::PathBuf;

use jiffytop::system::sources::ProcSources;

pub struct FakeProc {
    root: PathBuf,
}

impl FakeProc {
    pub fn new(name: &str) -> Self {
        let root = std::env::temp_dir().join(format!("jiffytop_it_{name}_{}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(root.join("proc")).unwrap();
        fs::create_dir_all(root.join("etc")).unwrap();
        FakeProc { root }
    }

    pub fn write(&self, rel: &str, contents: &str) {
        let path = self.root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
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

/// `/proc/<pid>/stat` line with the given active-time fields and start time.
pub fn stat_line(pid: u32, comm: &str, active: [u64; 4], start: u64) -> String {
    format!(
        "{pid} ({comm}) S 1 {pid} {pid} 0 -1 4194304 0 0 0 0 {} {} {} {} 20 0 1 0 {start} 0 0\n",
        active[0], active[1], active[2], active[3]
    )
}
