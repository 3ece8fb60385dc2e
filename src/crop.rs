//! Crop season tracking.
//!
//! Maps days-since-sowing onto wheat growth stages and season progress.
//! The stage boundaries follow the standard 140-day wheat calendar used
//! on the dashboard's progress card.

use serde::{Deserialize, Serialize};
use std::fmt;

const MS_PER_DAY: u64 = 86_400_000;

/// Wheat growth stages over a 140-day season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthStage {
    Germination,
    Tillering,
    StemExtension,
    Heading,
    GrainFilling,
    Ripening,
}

impl GrowthStage {
    /// Inclusive day range the stage spans, 1-based from sowing.
    pub fn day_range(self) -> (u32, u32) {
        match self {
            GrowthStage::Germination => (1, 12),
            GrowthStage::Tillering => (13, 35),
            GrowthStage::StemExtension => (36, 65),
            GrowthStage::Heading => (66, 85),
            GrowthStage::GrainFilling => (86, 115),
            GrowthStage::Ripening => (116, 140),
        }
    }
}

impl fmt::Display for GrowthStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GrowthStage::Germination => "Germination",
            GrowthStage::Tillering => "Tillering",
            GrowthStage::StemExtension => "Stem extension",
            GrowthStage::Heading => "Heading",
            GrowthStage::GrainFilling => "Grain filling",
            GrowthStage::Ripening => "Ripening",
        };
        f.write_str(label)
    }
}

/// Stage for a 1-based day count. Days past the season end stay `Ripening`;
/// day 0 (not yet sown) reads as `Germination`.
pub fn stage_for_day(day: u32) -> GrowthStage {
    match day {
        0..=12 => GrowthStage::Germination,
        13..=35 => GrowthStage::Tillering,
        36..=65 => GrowthStage::StemExtension,
        66..=85 => GrowthStage::Heading,
        86..=115 => GrowthStage::GrainFilling,
        _ => GrowthStage::Ripening,
    }
}

/// Whole days elapsed since the season start. Zero if the clock reads
/// before the start.
pub fn days_since_start(start_ms: u64, now_ms: u64) -> u32 {
    let elapsed = now_ms.saturating_sub(start_ms) / MS_PER_DAY;
    u32::try_from(elapsed).unwrap_or(u32::MAX)
}

/// Season completion as a whole percentage, capped at 100.
pub fn percent_complete(days_passed: u32, season_days: u32) -> u8 {
    if season_days == 0 {
        return 100;
    }
    let pct = (u64::from(days_passed) * 100) / u64::from(season_days);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// NPK top-dressing reminders fall on the first day of the two
/// nutrient-hungry stages.
pub fn fertilizer_due(day: u32) -> bool {
    matches!(day, 13 | 66)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_boundaries() {
        assert_eq!(stage_for_day(1), GrowthStage::Germination);
        assert_eq!(stage_for_day(12), GrowthStage::Germination);
        assert_eq!(stage_for_day(13), GrowthStage::Tillering);
        assert_eq!(stage_for_day(35), GrowthStage::Tillering);
        assert_eq!(stage_for_day(36), GrowthStage::StemExtension);
        assert_eq!(stage_for_day(66), GrowthStage::Heading);
        assert_eq!(stage_for_day(86), GrowthStage::GrainFilling);
        assert_eq!(stage_for_day(116), GrowthStage::Ripening);
    }

    #[test]
    fn past_season_end_stays_ripening() {
        assert_eq!(stage_for_day(140), GrowthStage::Ripening);
        assert_eq!(stage_for_day(500), GrowthStage::Ripening);
    }

    #[test]
    fn stage_matches_its_own_day_range() {
        for stage in [
            GrowthStage::Germination,
            GrowthStage::Tillering,
            GrowthStage::StemExtension,
            GrowthStage::Heading,
            GrowthStage::GrainFilling,
            GrowthStage::Ripening,
        ] {
            let (lo, hi) = stage.day_range();
            assert_eq!(stage_for_day(lo), stage);
            assert_eq!(stage_for_day(hi), stage);
        }
    }

    #[test]
    fn days_since_start_floors_and_saturates() {
        assert_eq!(days_since_start(0, MS_PER_DAY - 1), 0);
        assert_eq!(days_since_start(0, MS_PER_DAY), 1);
        assert_eq!(days_since_start(0, 10 * MS_PER_DAY + 5), 10);
        // Clock behind the start never goes negative.
        assert_eq!(days_since_start(MS_PER_DAY, 0), 0);
    }

    #[test]
    fn percent_caps_at_hundred() {
        assert_eq!(percent_complete(0, 140), 0);
        assert_eq!(percent_complete(70, 140), 50);
        assert_eq!(percent_complete(140, 140), 100);
        assert_eq!(percent_complete(300, 140), 100);
        assert_eq!(percent_complete(5, 0), 100);
    }

    #[test]
    fn fertilizer_reminders_at_stage_entries() {
        assert!(fertilizer_due(13));
        assert!(fertilizer_due(66));
        assert!(!fertilizer_due(1));
        assert!(!fertilizer_due(36));
        assert!(!fertilizer_due(140));
    }
}
