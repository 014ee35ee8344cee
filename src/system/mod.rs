pub mod clock;
pub mod collector;
pub mod cpu;
pub mod error;
pub mod info;
pub mod platform;
pub mod process;
pub mod process_stat;
pub mod scanner;
pub mod snapshot;
pub mod sources;
pub mod utilization;

#[cfg(test)]
pub(crate) mod testing;
