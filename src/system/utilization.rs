//! Utilization estimates from jiffy samples.
//!
//! System-wide utilization is a delta between two samples taken some time
//! apart; the caller decides how long to wait between [`SystemJiffySample::sample`]
//! calls. Per-process utilization is a single-sample lifetime average: CPU
//! time consumed divided by the time the process has existed.

use std::time::Duration;

use super::clock::ClockTicks;
use super::cpu::SystemJiffySample;
use super::info;
use super::process_stat::{self, ProcessJiffySample};
use super::sources::ProcSources;

/// Interval used by [`system_utilization`] between its two samples.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Estimate {
    Ratio(f64),
    /// The measurement window was empty or negative.
    Degenerate,
}

impl Estimate {
    pub fn value(self) -> f64 {
        match self {
            Estimate::Ratio(ratio) => ratio,
            Estimate::Degenerate => 0.0,
        }
    }

    pub fn is_degenerate(self) -> bool {
        matches!(self, Estimate::Degenerate)
    }
}

/// Fraction of the jiffies elapsed between `first` and `second` that were active.
pub fn estimate_system(first: SystemJiffySample, second: SystemJiffySample) -> Estimate {
    let delta_active = second.active.saturating_sub(first.active);
    let delta_total = second.total().saturating_sub(first.total());
    if delta_total == 0 {
        tracing::debug!(?first, ?second, "no jiffies elapsed between samples");
        return Estimate::Degenerate;
    }
    Estimate::Ratio(delta_active as f64 / delta_total as f64)
}

/// Lifetime-average utilization of a process given the machine uptime.
pub fn estimate_process(
    sample: ProcessJiffySample,
    uptime_seconds: f64,
    ticks: ClockTicks,
) -> Estimate {
    let active_seconds = ticks.to_seconds(sample.active);
    let elapsed_seconds = uptime_seconds - ticks.to_seconds(sample.start_time);
    if elapsed_seconds <= 0.0 || !elapsed_seconds.is_finite() {
        tracing::debug!(?sample, uptime_seconds, "process started at or after uptime snapshot");
        return Estimate::Degenerate;
    }
    Estimate::Ratio(active_seconds / elapsed_seconds)
}

/// Sample, block for `interval`, sample again and estimate.
pub fn system_utilization(sources: &ProcSources, interval: Duration) -> f64 {
    let first = SystemJiffySample::sample(sources);
    std::thread::sleep(interval);
    let second = SystemJiffySample::sample(sources);
    estimate_system(first, second).value()
}

pub fn process_utilization(sources: &ProcSources, pid: u32, ticks: ClockTicks) -> f64 {
    let uptime = info::uptime_seconds(sources);
    let sample = process_stat::read(sources, pid);
    estimate_process(sample, uptime as f64, ticks).value()
}
