//! Simulated ambient weather.
//!
//! Runs on its own slower cadence than the field sensors (default 10 s vs
//! 3 s) and drifts independently of them: the rain *forecast* here is a
//! chance percentage, distinct from the rain *detection* flag in
//! [`EnvironmentState`](crate::env::EnvironmentState).

use core::fmt;

use serde::{Deserialize, Serialize};

/// Humidity clamp range (%), same physical bounds as the field sensor.
const HUMIDITY_RANGE: (f32, f32) = (30.0, 95.0);
/// Rain chance clamp range (%).
const RAIN_CHANCE_RANGE: (f32, f32) = (0.0, 100.0);

// ---------------------------------------------------------------------------
// Condition label
// ---------------------------------------------------------------------------

/// Coarse sky condition, derived from the rain chance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    RainLikely,
}

impl Condition {
    /// Derive a label from a rain chance percentage.
    pub fn from_rain_chance(pct: f32) -> Self {
        if pct < 20.0 {
            Self::Sunny
        } else if pct < 50.0 {
            Self::PartlyCloudy
        } else if pct < 75.0 {
            Self::Cloudy
        } else {
            Self::RainLikely
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sunny => write!(f, "Sunny"),
            Self::PartlyCloudy => write!(f, "Partly Cloudy"),
            Self::Cloudy => write!(f, "Cloudy"),
            Self::RainLikely => write!(f, "Rain Likely"),
        }
    }
}

// ---------------------------------------------------------------------------
// Weather state + simulator
// ---------------------------------------------------------------------------

/// Point-in-time ambient weather reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f32,
    pub humidity: f32,
    /// Wind speed (km/h), never negative.
    pub wind_speed: f32,
    /// Rain probability forecast (%).
    pub rain_chance: f32,
    pub condition: Condition,
}

/// Drifting weather simulator with its own RNG stream.
pub struct WeatherSim {
    rng: fastrand::Rng,
    temperature: f32,
    humidity: f32,
    wind_speed: f32,
    rain_chance: f32,
}

impl Default for WeatherSim {
    fn default() -> Self {
        Self::new()
    }
}

impl WeatherSim {
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    fn from_rng(rng: fastrand::Rng) -> Self {
        // Boot defaults: a mild partly-cloudy day.
        Self {
            rng,
            temperature: 29.0,
            humidity: 68.0,
            wind_speed: 12.0,
            rain_chance: 25.0,
        }
    }

    /// Advance the weather by one tick and return the new reading.
    pub fn advance(&mut self) -> WeatherSnapshot {
        self.temperature += self.uniform_signed(0.5);
        self.humidity = {
            let (lo, hi) = HUMIDITY_RANGE;
            (self.humidity + self.uniform_signed(1.5)).clamp(lo, hi)
        };
        self.wind_speed = (self.wind_speed + self.uniform_signed(1.0)).max(0.0);
        self.rain_chance = {
            let (lo, hi) = RAIN_CHANCE_RANGE;
            (self.rain_chance + self.uniform_signed(2.5)).clamp(lo, hi)
        };
        self.snapshot()
    }

    /// Current reading without advancing.
    pub fn snapshot(&self) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            rain_chance: self.rain_chance,
            condition: Condition::from_rain_chance(self.rain_chance),
        }
    }

    fn uniform_signed(&mut self, magnitude: f32) -> f32 {
        (self.rng.f32() * 2.0 - 1.0) * magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_fields_hold_over_many_ticks() {
        let mut sim = WeatherSim::with_seed(11);
        for _ in 0..5000 {
            let w = sim.advance();
            assert!((30.0..=95.0).contains(&w.humidity));
            assert!(w.wind_speed >= 0.0);
            assert!((0.0..=100.0).contains(&w.rain_chance));
        }
    }

    #[test]
    fn condition_tracks_rain_chance() {
        assert_eq!(Condition::from_rain_chance(0.0), Condition::Sunny);
        assert_eq!(Condition::from_rain_chance(25.0), Condition::PartlyCloudy);
        assert_eq!(Condition::from_rain_chance(60.0), Condition::Cloudy);
        assert_eq!(Condition::from_rain_chance(90.0), Condition::RainLikely);
    }

    #[test]
    fn condition_display_labels() {
        assert_eq!(Condition::PartlyCloudy.to_string(), "Partly Cloudy");
        assert_eq!(Condition::RainLikely.to_string(), "Rain Likely");
    }

    #[test]
    fn snapshot_matches_last_advance() {
        let mut sim = WeatherSim::with_seed(5);
        let advanced = sim.advance();
        assert_eq!(advanced, sim.snapshot());
    }

    #[test]
    fn same_seed_replays() {
        let mut a = WeatherSim::with_seed(99);
        let mut b = WeatherSim::with_seed(99);
        for _ in 0..100 {
            assert_eq!(a.advance(), b.advance());
        }
    }
}
