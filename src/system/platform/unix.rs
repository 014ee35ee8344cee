use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn clock_ticks_per_second() -> Option<u64> {
        // sysconf returns -1 when the limit is indeterminate
        let hz = unsafe { libc::sysconf(libc::_SC_CLK_TCK) };
        if hz > 0 { Some(hz as u64) } else { None }
    }
}
