//! Wall-clock adapter for the [`Clock`] port.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::ports::Clock;

/// Clock backed by the system time, in unix milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        // Pre-epoch system time is not a case worth handling here.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
        // Sanity: past 2020-01-01.
        assert!(a > 1_577_836_800_000);
    }
}
