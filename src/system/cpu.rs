//! System-wide jiffy counters from the aggregate `cpu` row of `/proc/stat`.

use std::path::Path;

use super::error::{RowError, StatError, counter_at};
use super::scanner::{self, TokenStream};
use super::sources::ProcSources;

const CPU_KEY: &str = "cpu";

/// Positions of the per-state counters in the `cpu` row, after the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(usize)]
pub enum CpuState {
    User = 0,
    Nice,
    System,
    Idle,
    IoWait,
    Irq,
    SoftIrq,
    Steal,
    Guest,
    GuestNice,
}

impl CpuState {
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuRow {
    pub user: u64,
    pub nice: u64,
    pub system: u64,
    pub idle: u64,
    pub iowait: u64,
    pub irq: u64,
    pub softirq: u64,
    pub steal: u64,
    pub guest: u64,
    pub guest_nice: u64,
}

impl CpuRow {
    /// Parse the fields following the `cpu` key. Counters through `steal` are
    /// required; kernels predating guest accounting omit the last two.
    pub fn parse(fields: &[String]) -> Result<Self, RowError> {
        let required = |state: CpuState| counter_at(fields, state.index());
        let optional = |state: CpuState| match fields.get(state.index()) {
            Some(_) => counter_at(fields, state.index()),
            None => Ok(0),
        };

        Ok(CpuRow {
            user: required(CpuState::User)?,
            nice: required(CpuState::Nice)?,
            system: required(CpuState::System)?,
            idle: required(CpuState::Idle)?,
            iowait: required(CpuState::IoWait)?,
            irq: required(CpuState::Irq)?,
            softirq: required(CpuState::SoftIrq)?,
            steal: required(CpuState::Steal)?,
            guest: optional(CpuState::Guest)?,
            guest_nice: optional(CpuState::GuestNice)?,
        })
    }

    /// user + nice + system + irq + softirq + steal. Guest time is already
    /// folded into user/nice by the kernel, so it is not added again.
    pub fn active(&self) -> u64 {
        [self.user, self.nice, self.system, self.irq, self.softirq, self.steal]
            .into_iter()
            .fold(0, u64::saturating_add)
    }

    pub fn idle_total(&self) -> u64 {
        self.idle.saturating_add(self.iowait)
    }

    pub fn sample(&self) -> SystemJiffySample {
        SystemJiffySample {
            active: self.active(),
            idle: self.idle_total(),
        }
    }
}

/// Active and idle jiffies of the whole machine at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemJiffySample {
    pub active: u64,
    pub idle: u64,
}

impl SystemJiffySample {
    pub fn total(&self) -> u64 {
        self.active.saturating_add(self.idle)
    }

    /// Read the current counters; an unreadable or malformed source yields zeros.
    pub fn sample(sources: &ProcSources) -> Self {
        match Self::try_sample(sources) {
            Ok(sample) => sample,
            Err(err @ StatError::Row { .. }) => {
                tracing::warn!(%err, "ignoring cpu counters");
                Self::default()
            }
            Err(err) => {
                tracing::debug!(%err, "cpu counters unavailable");
                Self::default()
            }
        }
    }

    pub fn try_sample(sources: &ProcSources) -> Result<Self, StatError> {
        read_row(&sources.stat()).map(|row| row.sample())
    }
}

pub fn read_row(path: &Path) -> Result<CpuRow, StatError> {
    let bytes = std::fs::read(path).map_err(|source| StatError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;
    let stream = scanner::locate_in_bytes(&bytes, CPU_KEY);
    parse_stream(stream, path)
}

fn parse_stream(stream: TokenStream, path: &Path) -> Result<CpuRow, StatError> {
    if stream.is_exhausted() {
        return Err(StatError::KeyNotFound {
            key: CPU_KEY.to_string(),
            path: path.display().to_string(),
        });
    }
    CpuRow::parse(stream.remaining()).map_err(|source| StatError::Row {
        path: path.display().to_string(),
        source,
    })
}

pub fn read_active(sources: &ProcSources) -> u64 {
    SystemJiffySample::sample(sources).active
}

pub fn read_idle(sources: &ProcSources) -> u64 {
    SystemJiffySample::sample(sources).idle
}

pub fn total_jiffies(sources: &ProcSources) -> u64 {
    read_active(sources) + read_idle(sources)
}
