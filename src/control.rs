//! Pump decision function — the one piece of pure control logic.
//!
//! ```text
//!  mode    moisture < threshold   rain    →  pump
//!  auto            yes             no     →  On
//!  auto            yes             yes    →  Off
//!  auto            no              any    →  Off
//!  manual          any             any    →  unchanged
//! ```
//!
//! Total over its domain: no failure states, no I/O. Manual mode is sticky —
//! the operator's last toggle holds until the next explicit toggle.

use crate::env::{PumpMode, PumpStatus};

/// Compute the next pump status from the candidate moisture reading.
pub fn pump_decision(
    mode: PumpMode,
    moisture_pct: f32,
    threshold_pct: f32,
    rain_detected: bool,
    prev: PumpStatus,
) -> PumpStatus {
    match mode {
        PumpMode::Auto => {
            if moisture_pct < threshold_pct && !rain_detected {
                PumpStatus::On
            } else {
                PumpStatus::Off
            }
        }
        PumpMode::Manual => prev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f32 = 40.0;

    #[test]
    fn auto_dry_no_rain_turns_on() {
        let next = pump_decision(PumpMode::Auto, 35.0, THRESHOLD, false, PumpStatus::Off);
        assert_eq!(next, PumpStatus::On);
    }

    #[test]
    fn auto_wet_turns_off() {
        let next = pump_decision(PumpMode::Auto, 50.0, THRESHOLD, false, PumpStatus::On);
        assert_eq!(next, PumpStatus::Off);
    }

    #[test]
    fn auto_rain_overrides_dry_soil() {
        let next = pump_decision(PumpMode::Auto, 20.0, THRESHOLD, true, PumpStatus::On);
        assert_eq!(next, PumpStatus::Off);
    }

    #[test]
    fn auto_threshold_is_exclusive() {
        // Exactly at the threshold counts as wet enough.
        let next = pump_decision(PumpMode::Auto, THRESHOLD, THRESHOLD, false, PumpStatus::On);
        assert_eq!(next, PumpStatus::Off);
    }

    #[test]
    fn manual_is_sticky() {
        for prev in [PumpStatus::On, PumpStatus::Off] {
            assert_eq!(
                pump_decision(PumpMode::Manual, 5.0, THRESHOLD, false, prev),
                prev
            );
            assert_eq!(
                pump_decision(PumpMode::Manual, 95.0, THRESHOLD, true, prev),
                prev
            );
        }
    }
}
