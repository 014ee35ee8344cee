use std::cmp::Ordering;

use serde::Serialize;

use super::info::MemoryInfo;
use super::process::ProcessInfo;

#[derive(Clone, Debug, Serialize)]
pub struct SystemSnapshot {
    pub operating_system: String,
    pub kernel: String,
    pub cpu_utilization: f64,
    pub memory_utilization: f64,
    pub memory: MemoryInfo,
    pub uptime_seconds: u64,
    pub total_processes: u64,
    pub running_processes: u64,
    pub processes: Vec<ProcessInfo>,
}

impl SystemSnapshot {
    pub fn top(&self, n: usize) -> &[ProcessInfo] {
        &self.processes[..n.min(self.processes.len())]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SortMode {
    #[default]
    Cpu,
    Memory,
    Pid,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::Cpu => "CPU",
            SortMode::Memory => "Memory",
            SortMode::Pid => "PID",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "mem" | "ram" => SortMode::Memory,
            "pid" => SortMode::Pid,
            _ => SortMode::Cpu,
        }
    }
}

/// CPU and memory sort descending; ties and `Pid` order by pid ascending.
pub fn sort_processes(processes: &mut [ProcessInfo], mode: SortMode) {
    processes.sort_by(|a, b| {
        let primary = match mode {
            SortMode::Cpu => b.cpu_utilization.total_cmp(&a.cpu_utilization),
            SortMode::Memory => b.ram_kb.cmp(&a.ram_kb),
            SortMode::Pid => Ordering::Equal,
        };
        primary.then(a.pid.cmp(&b.pid))
    });
}
