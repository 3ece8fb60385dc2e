//! Simulated environment state — the blackboard every tick reads and writes.
//!
//! [`EnvironmentState`] is the single mutable record the drift generator and
//! decision function operate on. There is exactly one writer (the service,
//! called from the tick driver); everyone else observes [`EnvSnapshot`]
//! copies pushed through the event sink.
//!
//! Hard physical bounds are constants here, not configuration: the simulation
//! clamps every reading into its range on every tick, so out-of-range values
//! are unrepresentable in steady state.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Physical bounds
// ---------------------------------------------------------------------------

/// Soil moisture clamp range (%).
pub const SOIL_MOISTURE_RANGE: (f32, f32) = (15.0, 95.0);
/// Air temperature clamp range (Celsius).
pub const TEMPERATURE_RANGE: (f32, f32) = (18.0, 42.0);
/// Relative humidity clamp range (%).
pub const HUMIDITY_RANGE: (f32, f32) = (30.0, 95.0);
/// Battery never reports below this floor (%).
pub const BATTERY_FLOOR: f32 = 10.0;

// ---------------------------------------------------------------------------
// Pump enums
// ---------------------------------------------------------------------------

/// Whether the irrigation pump is energised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpStatus {
    On,
    Off,
}

impl PumpStatus {
    /// The opposite status, for manual toggling.
    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl fmt::Display for PumpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::On => write!(f, "on"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Who decides the pump status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PumpMode {
    /// Pump state fully determined by moisture/rain thresholds.
    Auto,
    /// Pump state controlled only by explicit operator toggle.
    Manual,
}

impl fmt::Display for PumpMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Manual => write!(f, "manual"),
        }
    }
}

// ---------------------------------------------------------------------------
// EnvironmentState
// ---------------------------------------------------------------------------

/// The live simulated field state. Created once with fixed defaults, mutated
/// on every sensor tick, never persisted.
#[derive(Debug, Clone)]
pub struct EnvironmentState {
    /// Soil moisture (%), within [`SOIL_MOISTURE_RANGE`].
    pub soil_moisture: f32,
    /// Air temperature (Celsius), within [`TEMPERATURE_RANGE`].
    pub temperature: f32,
    /// Relative humidity (%), within [`HUMIDITY_RANGE`].
    pub humidity: f32,
    /// Battery level (%), non-increasing, floored at [`BATTERY_FLOOR`].
    pub battery_level: f32,
    pub pump_status: PumpStatus,
    pub pump_mode: PumpMode,
    pub rain_detected: bool,
    /// Clock-port milliseconds at the last completed tick.
    pub last_updated_ms: u64,
}

impl Default for EnvironmentState {
    fn default() -> Self {
        // Fixed boot defaults: a healthy mid-range field on a dry day.
        Self {
            soil_moisture: 62.0,
            temperature: 28.0,
            humidity: 65.0,
            battery_level: 87.0,
            pump_status: PumpStatus::Off,
            pump_mode: PumpMode::Auto,
            rain_detected: false,
            last_updated_ms: 0,
        }
    }
}

impl EnvironmentState {
    /// Read-only copy for subscribers.
    pub fn snapshot(&self) -> EnvSnapshot {
        EnvSnapshot {
            soil_moisture: self.soil_moisture,
            temperature: self.temperature,
            humidity: self.humidity,
            battery_level: self.battery_level,
            pump_status: self.pump_status,
            pump_mode: self.pump_mode,
            rain_detected: self.rain_detected,
            last_updated_ms: self.last_updated_ms,
        }
    }
}

/// A point-in-time copy of [`EnvironmentState`] suitable for logging,
/// display, or transmission.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvSnapshot {
    pub soil_moisture: f32,
    pub temperature: f32,
    pub humidity: f32,
    pub battery_level: f32,
    pub pump_status: PumpStatus,
    pub pump_mode: PumpMode,
    pub rain_detected: bool,
    pub last_updated_ms: u64,
}

impl EnvSnapshot {
    /// True when every sensor reading sits inside its physical bounds.
    pub fn in_bounds(&self) -> bool {
        let (lo_m, hi_m) = SOIL_MOISTURE_RANGE;
        let (lo_t, hi_t) = TEMPERATURE_RANGE;
        let (lo_h, hi_h) = HUMIDITY_RANGE;
        (lo_m..=hi_m).contains(&self.soil_moisture)
            && (lo_t..=hi_t).contains(&self.temperature)
            && (lo_h..=hi_h).contains(&self.humidity)
            && self.battery_level >= BATTERY_FLOOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boot_defaults_are_in_bounds() {
        let state = EnvironmentState::default();
        assert!(state.snapshot().in_bounds());
        assert_eq!(state.pump_status, PumpStatus::Off);
        assert_eq!(state.pump_mode, PumpMode::Auto);
        assert!(!state.rain_detected);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(PumpStatus::On.toggled(), PumpStatus::Off);
        assert_eq!(PumpStatus::Off.toggled(), PumpStatus::On);
    }

    #[test]
    fn snapshot_serializes_lowercase_enums() {
        let json = serde_json::to_string(&EnvironmentState::default().snapshot()).unwrap();
        assert!(json.contains("\"pump_status\":\"off\""));
        assert!(json.contains("\"pump_mode\":\"auto\""));
    }

    #[test]
    fn in_bounds_rejects_out_of_range_moisture() {
        let mut snap = EnvironmentState::default().snapshot();
        snap.soil_moisture = 96.0;
        assert!(!snap.in_bounds());
        snap.soil_moisture = 14.9;
        assert!(!snap.in_bounds());
    }
}
