//! Single-field system records: OS name, kernel, memory, uptime, process counts.

use std::fs;

use serde::Serialize;

use super::scanner;
use super::sources::ProcSources;

pub fn operating_system(sources: &ProcSources) -> String {
    let Ok(contents) = fs::read_to_string(&sources.os_release) else {
        return String::new();
    };
    contents
        .lines()
        .find_map(|line| line.strip_prefix("PRETTY_NAME="))
        .map(|value| value.trim().trim_matches('"').to_string())
        .unwrap_or_default()
}

/// Release from `Linux version <release> ...`.
pub fn kernel(sources: &ProcSources) -> String {
    fs::read_to_string(sources.version())
        .ok()
        .and_then(|contents| contents.split_whitespace().nth(2).map(str::to_string))
        .unwrap_or_default()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub total_kb: u64,
    pub free_kb: u64,
}

impl MemoryInfo {
    pub fn used_kb(&self) -> u64 {
        self.total_kb.saturating_sub(self.free_kb)
    }

    pub fn utilization(&self) -> f64 {
        if self.total_kb == 0 {
            return 0.0;
        }
        self.used_kb() as f64 / self.total_kb as f64
    }
}

pub fn memory(sources: &ProcSources) -> MemoryInfo {
    let Ok(contents) = fs::read(sources.meminfo()) else {
        tracing::debug!("meminfo unavailable");
        return MemoryInfo::default();
    };
    MemoryInfo {
        total_kb: scanner::locate_in_bytes(&contents, "MemTotal:")
            .next_value()
            .unwrap_or(0),
        free_kb: scanner::locate_in_bytes(&contents, "MemFree:")
            .next_value()
            .unwrap_or(0),
    }
}

/// Whole seconds since boot.
pub fn uptime_seconds(sources: &ProcSources) -> u64 {
    fs::read_to_string(sources.uptime())
        .ok()
        .and_then(|contents| {
            contents
                .split_whitespace()
                .next()
                .and_then(|v| v.parse::<f64>().ok())
        })
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(|secs| secs as u64)
        .unwrap_or(0)
}

pub fn total_processes(sources: &ProcSources) -> u64 {
    scanner::locate(&sources.stat(), "processes")
        .next_value()
        .unwrap_or(0)
}

pub fn running_processes(sources: &ProcSources) -> u64 {
    scanner::locate(&sources.stat(), "procs_running")
        .next_value()
        .unwrap_or(0)
}

/// Numeric directory names under the proc root, ascending.
pub fn pids(sources: &ProcSources) -> Vec<u32> {
    let Ok(entries) = fs::read_dir(&sources.proc_dir) else {
        tracing::warn!(path = %sources.proc_dir.display(), "cannot enumerate processes");
        return Vec::new();
    };
    let mut pids: Vec<u32> = entries
        .flatten()
        .filter(|entry| entry.file_type().is_ok_and(|t| t.is_dir()))
        .filter_map(|entry| {
            let name = entry.file_name();
            let name = name.to_str()?;
            if name.bytes().all(|b| b.is_ascii_digit()) {
                name.parse().ok()
            } else {
                None
            }
        })
        .collect();
    pids.sort_unstable();
    pids
}
