//! Host queries that differ per target. Everything cfg-gated lives here.

/// Fallback when the host cannot report its tick rate.
pub const DEFAULT_CLOCK_TICKS: u64 = 100;

pub trait PlatformExtensions {
    fn clock_ticks_per_second() -> Option<u64>;
}

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod fallback;

#[cfg(unix)]
use unix as platform_impl;
#[cfg(not(unix))]
use fallback as platform_impl;

pub fn clock_ticks_per_second() -> u64 {
    platform_impl::Platform::clock_ticks_per_second().unwrap_or(DEFAULT_CLOCK_TICKS)
}
