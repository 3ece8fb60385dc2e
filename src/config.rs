//! System configuration parameters
//!
//! All tunable parameters for the AgriSense simulation and control loop.
//! Hard physical bounds (sensor clamp ranges) are *not* configuration — they
//! live as constants in [`crate::env`].

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Irrigation ---
    /// Soil moisture (%) below which the pump activates in auto mode
    pub moisture_pump_threshold_pct: f32,

    // --- Drift magnitudes (per sensor tick) ---
    /// Max soil moisture perturbation per tick (+/- %)
    pub moisture_drift_pct: f32,
    /// Max air temperature perturbation per tick (+/- Celsius)
    pub temperature_drift_c: f32,
    /// Max humidity perturbation per tick (+/- %)
    pub humidity_drift_pct: f32,
    /// Max battery drain per tick (0..d %)
    pub battery_drain_pct: f32,
    /// Probability per tick that the rain flag flips
    pub rain_flip_probability: f32,

    // --- Alerts ---
    /// Battery level (%) below which a low-battery alert is raised
    pub low_battery_threshold_pct: f32,

    // --- Crop ---
    /// Total crop season length in days
    pub crop_season_days: u16,

    // --- Timing ---
    /// Sensor tick interval (milliseconds)
    pub sensor_interval_ms: u32,
    /// Weather tick interval (milliseconds)
    pub weather_interval_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Irrigation
            moisture_pump_threshold_pct: 40.0,

            // Drift
            moisture_drift_pct: 3.0,
            temperature_drift_c: 0.5,
            humidity_drift_pct: 2.0,
            battery_drain_pct: 0.1,
            rain_flip_probability: 0.03,

            // Alerts
            low_battery_threshold_pct: 30.0,

            // Crop
            crop_season_days: 140,

            // Timing
            sensor_interval_ms: 3000, // matches the dashboard refresh rate
            weather_interval_ms: 10_000,
        }
    }
}

impl SystemConfig {
    /// Range-check every field. Invalid configs are rejected, not clamped,
    /// so a bad runtime update cannot silently disable irrigation.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !(0.0..=100.0).contains(&self.moisture_pump_threshold_pct) {
            return Err("moisture_pump_threshold_pct must be within 0-100");
        }
        if self.moisture_drift_pct < 0.0
            || self.temperature_drift_c < 0.0
            || self.humidity_drift_pct < 0.0
            || self.battery_drain_pct < 0.0
        {
            return Err("drift magnitudes must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.rain_flip_probability) {
            return Err("rain_flip_probability must be within 0-1");
        }
        if !(0.0..=100.0).contains(&self.low_battery_threshold_pct) {
            return Err("low_battery_threshold_pct must be within 0-100");
        }
        if self.crop_season_days == 0 {
            return Err("crop_season_days must be positive");
        }
        if self.sensor_interval_ms == 0 || self.weather_interval_ms == 0 {
            return Err("tick intervals must be positive");
        }
        Ok(())
    }
}
