use std::num::NonZeroU64;
use std::sync::OnceLock;

use super::platform;

const FALLBACK_HZ: NonZeroU64 = NonZeroU64::new(platform::DEFAULT_CLOCK_TICKS).unwrap();

/// Host clock ticks per second (`USER_HZ`), used to turn jiffies into seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockTicks(NonZeroU64);

impl ClockTicks {
    pub fn new(hz: u64) -> Option<Self> {
        NonZeroU64::new(hz).map(ClockTicks)
    }

    /// The host value, resolved on first call and reused afterwards.
    pub fn host() -> Self {
        static HOST: OnceLock<ClockTicks> = OnceLock::new();
        *HOST.get_or_init(|| {
            let hz = platform::clock_ticks_per_second();
            tracing::debug!(hz, "resolved clock ticks per second");
            ClockTicks::new(hz).unwrap_or(ClockTicks(FALLBACK_HZ))
        })
    }

    pub fn per_second(self) -> u64 {
        self.0.get()
    }

    pub fn to_seconds(self, ticks: u64) -> f64 {
        ticks as f64 / self.0.get() as f64
    }

    pub fn whole_seconds(self, ticks: u64) -> u64 {
        ticks / self.0.get()
    }
}
