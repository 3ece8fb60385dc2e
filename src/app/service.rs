//! Application service — the loop's single writer.
//!
//! [`IrrigationService`] owns the environment state, the drift generator,
//! the weather simulator, and the alert log. The tick driver calls into it
//! on a schedule; everything it tells the outside world flows through the
//! [`EventSink`](super::ports::EventSink) port.
//!
//! ```text
//!  TickDriver ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │    IrrigationService      │
//!  Command ─────▶ │  Drift · Decision · Alerts│
//!                 └──────────────────────────┘
//! ```

use log::{info, warn};

use crate::alerts::{AlertKind, AlertLog};
use crate::config::SystemConfig;
use crate::control::pump_decision;
use crate::env::{EnvSnapshot, EnvironmentState, PumpMode, PumpStatus};
use crate::error::CommandError;
use crate::sim::DriftGenerator;
use crate::weather::{WeatherSim, WeatherSnapshot};

use super::commands::Command;
use super::events::Event;
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// IrrigationService
// ───────────────────────────────────────────────────────────────

/// Orchestrates all domain logic: one sensor tick is
/// drift → decision → alerts → events.
pub struct IrrigationService {
    state: EnvironmentState,
    drift: DriftGenerator,
    weather: WeatherSim,
    alerts: AlertLog,
    config: SystemConfig,
    tick_count: u64,
    /// Low-battery alert fires once; battery is monotonic so no re-arm.
    battery_alerted: bool,
}

impl IrrigationService {
    /// Construct the service with entropy-seeded simulators.
    pub fn new(config: SystemConfig) -> Self {
        Self::build(config, DriftGenerator::new(), WeatherSim::new())
    }

    /// Construct with fixed seeds — identical seeds replay identical runs.
    pub fn with_seed(config: SystemConfig, seed: u64) -> Self {
        Self::build(
            config,
            DriftGenerator::with_seed(seed),
            WeatherSim::with_seed(seed.wrapping_add(1)),
        )
    }

    fn build(config: SystemConfig, drift: DriftGenerator, weather: WeatherSim) -> Self {
        Self {
            state: EnvironmentState::default(),
            drift,
            weather,
            alerts: AlertLog::new(),
            config,
            tick_count: 0,
            battery_alerted: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the initial state. Call once before the first tick.
    pub fn start(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.state.last_updated_ms = now_ms;
        sink.emit(&Event::Started(self.state.snapshot()));
        info!(
            "service started: moisture {:.1}%, pump {} ({})",
            self.state.soil_moisture, self.state.pump_status, self.state.pump_mode
        );
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full sensor cycle: drift sensors, derive the pump decision,
    /// raise alerts for transitions, publish telemetry.
    pub fn tick(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.tick_count += 1;

        let prev_pump = self.state.pump_status;
        let prev_rain = self.state.rain_detected;

        // 1. Drift every raw sensor field.
        self.drift.advance(&mut self.state, &self.config);

        // 2. Pump decision on the fresh readings. Manual mode passes the
        //    previous status through untouched.
        self.state.pump_status = pump_decision(
            self.state.pump_mode,
            self.state.soil_moisture,
            self.config.moisture_pump_threshold_pct,
            self.state.rain_detected,
            prev_pump,
        );
        self.state.last_updated_ms = now_ms;

        // 3. Transition events and alerts.
        if self.state.rain_detected != prev_rain {
            sink.emit(&Event::RainChanged(self.state.rain_detected));
            if self.state.rain_detected {
                self.raise(
                    AlertKind::Rain,
                    "Rain detected — irrigation paused to conserve water.",
                    now_ms,
                    sink,
                );
            } else {
                self.raise(AlertKind::Rain, "Rain cleared.", now_ms, sink);
            }
        }

        if self.state.pump_status != prev_pump {
            info!(
                "pump {} -> {} (moisture {:.1}%, rain {})",
                prev_pump, self.state.pump_status, self.state.soil_moisture,
                self.state.rain_detected
            );
            sink.emit(&Event::PumpChanged {
                from: prev_pump,
                to: self.state.pump_status,
            });
            if self.state.pump_mode == PumpMode::Auto {
                match self.state.pump_status {
                    PumpStatus::On => {
                        let msg = format!(
                            "Soil moisture dropped to {:.0}%. Auto-irrigation activated.",
                            self.state.soil_moisture
                        );
                        self.raise(AlertKind::LowMoisture, &msg, now_ms, sink);
                    }
                    PumpStatus::Off if !self.state.rain_detected => {
                        let msg = format!(
                            "Soil moisture back to {:.0}%. Irrigation stopped.",
                            self.state.soil_moisture
                        );
                        self.raise(AlertKind::LowMoisture, &msg, now_ms, sink);
                    }
                    PumpStatus::Off => {} // rain pause already alerted above
                }
            }
        }

        if !self.battery_alerted && self.state.battery_level < self.config.low_battery_threshold_pct
        {
            self.battery_alerted = true;
            let msg = format!(
                "Battery low ({:.0}%). Check the solar panel.",
                self.state.battery_level
            );
            self.raise(AlertKind::Fault, &msg, now_ms, sink);
        }

        // 4. Snapshot to every subscriber.
        sink.emit(&Event::Telemetry(self.state.snapshot()));
    }

    /// Run one weather cycle (slower cadence than the sensor tick).
    pub fn tick_weather(&mut self, sink: &mut impl EventSink) {
        let snapshot = self.weather.advance();
        sink.emit(&Event::WeatherUpdated(snapshot));
    }

    // ── Command handling ──────────────────────────────────────

    /// Process an external command. State is untouched on rejection.
    pub fn handle_command(
        &mut self,
        cmd: Command,
        now_ms: u64,
        sink: &mut impl EventSink,
    ) -> Result<(), CommandError> {
        match cmd {
            Command::SetMode(mode) => {
                let prev = self.state.pump_mode;
                if mode != prev {
                    // Auto->Manual keeps the current pump status; Auto takes
                    // over again from the next tick.
                    self.state.pump_mode = mode;
                    self.state.last_updated_ms = now_ms;
                    info!("pump mode {} -> {}", prev, mode);
                    sink.emit(&Event::ModeChanged { from: prev, to: mode });
                }
                Ok(())
            }
            Command::TogglePump => {
                if self.state.pump_mode != PumpMode::Manual {
                    warn!("pump toggle rejected: mode is {}", self.state.pump_mode);
                    return Err(CommandError::ManualOnly);
                }
                let from = self.state.pump_status;
                self.state.pump_status = from.toggled();
                self.state.last_updated_ms = now_ms;
                info!("pump toggled {} -> {}", from, self.state.pump_status);
                sink.emit(&Event::PumpChanged {
                    from,
                    to: self.state.pump_status,
                });
                Ok(())
            }
            Command::UpdateConfig(config) => {
                config.validate().map_err(CommandError::InvalidConfig)?;
                self.config = config;
                info!("configuration updated at runtime");
                Ok(())
            }
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Read-only copy of the current environment state.
    pub fn snapshot(&self) -> EnvSnapshot {
        self.state.snapshot()
    }

    /// Current ambient weather without advancing it.
    pub fn weather(&self) -> WeatherSnapshot {
        self.weather.snapshot()
    }

    /// Clone of the live configuration.
    pub fn current_config(&self) -> SystemConfig {
        self.config.clone()
    }

    /// Total sensor ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn alerts(&self) -> &AlertLog {
        &self.alerts
    }

    /// Mutable alert access for read/dismiss bookkeeping and for callers
    /// raising their own reminders (e.g. fertilizer schedules).
    pub fn alerts_mut(&mut self) -> &mut AlertLog {
        &mut self.alerts
    }

    // ── Internal ──────────────────────────────────────────────

    fn raise(&mut self, kind: AlertKind, message: &str, now_ms: u64, sink: &mut impl EventSink) {
        let id = self.alerts.raise(kind, message, now_ms);
        if let Some(alert) = self.alerts.get(id) {
            sink.emit(&Event::AlertRaised(alert.clone()));
        }
    }
}
