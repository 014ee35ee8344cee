use super::clock::ClockTicks;
use super::cpu::SystemJiffySample;
use super::info;
use super::process::{self, ProcessInfo, UserTable};
use super::process_stat;
use super::snapshot::{SortMode, SystemSnapshot, sort_processes};
use super::sources::ProcSources;
use super::utilization::{estimate_process, estimate_system};

/// Two-phase sampler: construction takes the first system sample, each
/// `refresh` takes the next one and estimates against the previous.
pub struct Collector {
    sources: ProcSources,
    ticks: ClockTicks,
    sort_mode: SortMode,
    last_cpu: SystemJiffySample,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new(ProcSources::default(), ClockTicks::host())
    }
}

impl Collector {
    pub fn new(sources: ProcSources, ticks: ClockTicks) -> Self {
        let last_cpu = SystemJiffySample::sample(&sources);
        Collector {
            sources,
            ticks,
            sort_mode: SortMode::default(),
            last_cpu,
        }
    }

    pub fn with_sort_mode(mut self, sort_mode: SortMode) -> Self {
        self.sort_mode = sort_mode;
        self
    }

    pub fn sources(&self) -> &ProcSources {
        &self.sources
    }

    pub fn refresh(&mut self) -> SystemSnapshot {
        let _refresh_span = tracing::debug_span!("collector.refresh").entered();

        let current = SystemJiffySample::sample(&self.sources);
        let cpu_utilization = estimate_system(self.last_cpu, current).value();
        self.last_cpu = current;

        let memory = info::memory(&self.sources);
        let uptime_seconds = info::uptime_seconds(&self.sources);
        let mut processes = self.collect_processes(uptime_seconds);
        sort_processes(&mut processes, self.sort_mode);

        SystemSnapshot {
            operating_system: info::operating_system(&self.sources),
            kernel: info::kernel(&self.sources),
            cpu_utilization,
            memory_utilization: memory.utilization(),
            memory,
            uptime_seconds,
            total_processes: info::total_processes(&self.sources),
            running_processes: info::running_processes(&self.sources),
            processes,
        }
    }

    fn collect_processes(&self, uptime_seconds: u64) -> Vec<ProcessInfo> {
        let users = UserTable::load(&self.sources.passwd);
        let pids = info::pids(&self.sources);
        let mut processes = Vec::with_capacity(pids.len());

        for pid in pids {
            // Exited between enumeration and now.
            if !self.sources.process_dir(pid).exists() {
                tracing::debug!(pid, "process vanished during scan");
                continue;
            }

            let sample = process_stat::read(&self.sources, pid);
            let cpu_utilization =
                estimate_process(sample, uptime_seconds as f64, self.ticks).value();
            let user = process::uid(&self.sources, pid)
                .map(|uid| users.name(uid))
                .unwrap_or_default();

            processes.push(ProcessInfo {
                pid,
                user,
                command: process::command(&self.sources, pid),
                ram_kb: process::ram_kb(&self.sources, pid),
                cpu_utilization,
                uptime_seconds: uptime_seconds
                    .saturating_sub(self.ticks.whole_seconds(sample.start_time)),
            });
        }

        processes
    }
}
