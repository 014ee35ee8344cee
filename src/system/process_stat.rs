//! Per-process jiffy counters from `/proc/<pid>/stat`.

use super::error::{RowError, StatError, counter_at};
use super::scanner;
use super::sources::ProcSources;

// 0-based offsets counted from the command field, i.e. `stat(5)` field
// numbers minus two.
const UTIME: usize = 12;
const STIME: usize = 13;
const CUTIME: usize = 14;
const CSTIME: usize = 15;
const STARTTIME: usize = 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessStatRow {
    pub utime: u64,
    pub stime: u64,
    pub cutime: u64,
    pub cstime: u64,
    pub starttime: u64,
}

impl ProcessStatRow {
    /// Parse the fields following the pid. The command name is wrapped in
    /// parentheses and may itself contain spaces, so it is collapsed first.
    pub fn parse(fields: &[String]) -> Result<Self, RowError> {
        let comm_end = match fields.first() {
            Some(first) if first.starts_with('(') => fields
                .iter()
                .rposition(|token| token.ends_with(')'))
                .unwrap_or(0),
            _ => 0,
        };
        let row = &fields[comm_end.min(fields.len())..];

        Ok(ProcessStatRow {
            utime: counter_at(row, UTIME)?,
            stime: counter_at(row, STIME)?,
            cutime: counter_at(row, CUTIME)?,
            cstime: counter_at(row, CSTIME)?,
            starttime: counter_at(row, STARTTIME)?,
        })
    }

    /// Own and reaped-children time in user and kernel mode.
    pub fn active(&self) -> u64 {
        [self.utime, self.stime, self.cutime, self.cstime]
            .into_iter()
            .fold(0, u64::saturating_add)
    }

    pub fn sample(&self) -> ProcessJiffySample {
        ProcessJiffySample {
            active: self.active(),
            start_time: self.starttime,
        }
    }
}

/// Accumulated CPU time and start time of one process, in clock ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessJiffySample {
    pub active: u64,
    pub start_time: u64,
}

/// Read the counters of `pid`. A process that exited or a malformed row
/// yields a zero sample.
pub fn read(sources: &ProcSources, pid: u32) -> ProcessJiffySample {
    match try_read(sources, pid) {
        Ok(sample) => sample,
        Err(err @ StatError::Row { .. }) => {
            tracing::warn!(pid, %err, "ignoring process counters");
            ProcessJiffySample::default()
        }
        Err(err) => {
            tracing::debug!(pid, %err, "process counters unavailable");
            ProcessJiffySample::default()
        }
    }
}

pub fn try_read(sources: &ProcSources, pid: u32) -> Result<ProcessJiffySample, StatError> {
    let path = sources.process_stat(pid);
    let bytes = std::fs::read(&path).map_err(|source| StatError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let key = pid.to_string();
    let stream = scanner::locate_in_bytes(&bytes, &key);
    if stream.is_exhausted() {
        return Err(StatError::KeyNotFound {
            key,
            path: path.display().to_string(),
        });
    }

    ProcessStatRow::parse(stream.remaining())
        .map(|row| row.sample())
        .map_err(|source| StatError::Row {
            path: path.display().to_string(),
            source,
        })
}
