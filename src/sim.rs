//! Drift generator — bounded pseudo-random sensor evolution.
//!
//! Each sensor tick every raw field takes a uniform step `value + U(-d, +d)`
//! and is clamped back into its physical range, giving readings temporal
//! coherence without ever leaving bounds. Battery only drains (`U(0, d)`),
//! and the rain flag flips as a rare Bernoulli event.
//!
//! The RNG is owned and seedable, so tests can replay exact drift sequences.

use crate::config::SystemConfig;
use crate::env::{
    BATTERY_FLOOR, EnvironmentState, HUMIDITY_RANGE, SOIL_MOISTURE_RANGE, TEMPERATURE_RANGE,
};

/// Stateful generator of per-tick sensor perturbations.
pub struct DriftGenerator {
    rng: fastrand::Rng,
}

impl Default for DriftGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DriftGenerator {
    /// Generator with an entropy-derived seed.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Generator with a fixed seed — identical seeds replay identical drift.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }

    /// Advance every raw sensor field by one tick.
    ///
    /// Mutates moisture, temperature, humidity, battery, and the rain flag.
    /// Pump fields are untouched — actuation is the decision function's job.
    pub fn advance(&mut self, state: &mut EnvironmentState, config: &SystemConfig) {
        state.soil_moisture = clamp_step(
            state.soil_moisture,
            self.uniform_signed(config.moisture_drift_pct),
            SOIL_MOISTURE_RANGE,
        );
        state.temperature = clamp_step(
            state.temperature,
            self.uniform_signed(config.temperature_drift_c),
            TEMPERATURE_RANGE,
        );
        state.humidity = clamp_step(
            state.humidity,
            self.uniform_signed(config.humidity_drift_pct),
            HUMIDITY_RANGE,
        );

        // Battery is monotonic: drain only, floored.
        let drain = self.rng.f32() * config.battery_drain_pct;
        state.battery_level = (state.battery_level - drain).max(BATTERY_FLOOR);

        if self.rng.f32() < config.rain_flip_probability {
            state.rain_detected = !state.rain_detected;
        }
    }

    /// Uniform sample from `[-magnitude, +magnitude]`.
    fn uniform_signed(&mut self, magnitude: f32) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * magnitude
    }
}

fn clamp_step(value: f32, step: f32, (lo, hi): (f32, f32)) -> f32 {
    (value + step).clamp(lo, hi)
}
