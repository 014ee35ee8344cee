use std::path::{Path, PathBuf};

/// Locations of the snapshot records read by the system layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcSources {
    pub proc_dir: PathBuf,
    pub os_release: PathBuf,
    pub passwd: PathBuf,
}

impl Default for ProcSources {
    fn default() -> Self {
        ProcSources {
            proc_dir: PathBuf::from("/proc"),
            os_release: PathBuf::from("/etc/os-release"),
            passwd: PathBuf::from("/etc/passwd"),
        }
    }
}

impl ProcSources {
    /// Same layout as the host, placed under `root` (`root/proc`, `root/etc/...`).
    pub fn rooted(root: &Path) -> Self {
        ProcSources {
            proc_dir: root.join("proc"),
            os_release: root.join("etc").join("os-release"),
            passwd: root.join("etc").join("passwd"),
        }
    }

    pub fn stat(&self) -> PathBuf {
        self.proc_dir.join("stat")
    }

    pub fn uptime(&self) -> PathBuf {
        self.proc_dir.join("uptime")
    }

    pub fn meminfo(&self) -> PathBuf {
        self.proc_dir.join("meminfo")
    }

    pub fn version(&self) -> PathBuf {
        self.proc_dir.join("version")
    }

    pub fn process_dir(&self, pid: u32) -> PathBuf {
        self.proc_dir.join(pid.to_string())
    }

    pub fn process_stat(&self, pid: u32) -> PathBuf {
        self.process_dir(pid).join("stat")
    }

    pub fn process_status(&self, pid: u32) -> PathBuf {
        self.process_dir(pid).join("status")
    }

    pub fn process_cmdline(&self, pid: u32) -> PathBuf {
        self.process_dir(pid).join("cmdline")
    }

    pub fn process_comm(&self, pid: u32) -> PathBuf {
        self.process_dir(pid).join("comm")
    }
}
