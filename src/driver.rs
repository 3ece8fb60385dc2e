//! Tick driver — deterministic scheduling for the irrigation loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                  Clock port                          │
//! │                     │ now_ms()                       │
//! │                     ▼                                │
//! │   Idle ──start──▶ Running ──stop──▶ Stopped          │
//! │                     │ poll()                         │
//! │          ┌──────────┴──────────┐                     │
//! │          ▼                     ▼                     │
//! │   service.tick()      service.tick_weather()         │
//! │    (every 3 s)           (every 10 s)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! The driver never sleeps and owns no thread: the caller polls it, and it
//! fires whatever deadlines have passed. Each stream fires at most once per
//! poll and the deadline is rebased to `now + period` — missed ticks are
//! skipped, not replayed, since every tick is independent.

use log::{info, warn};

use crate::app::commands::Command;
use crate::app::ports::{Clock, EventSink};
use crate::app::service::IrrigationService;
use crate::error::CommandError;

/// Lifecycle of the driver. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Stopped,
}

/// Polls a [`Clock`] and fires service ticks when their deadlines pass.
pub struct TickDriver<C: Clock> {
    service: IrrigationService,
    clock: C,
    state: DriverState,
    sensor_period_ms: u64,
    weather_period_ms: u64,
    next_sensor_ms: u64,
    next_weather_ms: u64,
}

impl<C: Clock> TickDriver<C> {
    pub fn new(service: IrrigationService, clock: C) -> Self {
        let config = service.current_config();
        Self {
            service,
            clock,
            state: DriverState::Idle,
            sensor_period_ms: u64::from(config.sensor_interval_ms),
            weather_period_ms: u64::from(config.weather_interval_ms),
            next_sensor_ms: 0,
            next_weather_ms: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Arm both deadline streams and announce the initial state.
    /// Only valid from `Idle`; anything else is a no-op.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        if self.state != DriverState::Idle {
            warn!("driver start ignored in state {:?}", self.state);
            return;
        }
        let now = self.clock.now_ms();
        self.service.start(now, sink);
        self.next_sensor_ms = now + self.sensor_period_ms;
        self.next_weather_ms = now + self.weather_period_ms;
        self.state = DriverState::Running;
        info!(
            "driver running: sensor every {}ms, weather every {}ms",
            self.sensor_period_ms, self.weather_period_ms
        );
    }

    /// Cancel all future firing. Terminal.
    pub fn stop(&mut self) {
        if self.state == DriverState::Running {
            info!("driver stopped after {} ticks", self.service.tick_count());
        }
        self.state = DriverState::Stopped;
    }

    /// Fire every deadline that has passed. Returns the number of service
    /// ticks fired (sensor + weather). Does nothing unless `Running`.
    pub fn poll(&mut self, sink: &mut impl EventSink) -> u32 {
        if self.state != DriverState::Running {
            return 0;
        }
        let now = self.clock.now_ms();
        let mut fired = 0;

        if now >= self.next_sensor_ms {
            self.service.tick(now, sink);
            self.next_sensor_ms = now + self.sensor_period_ms;
            fired += 1;
        }
        if now >= self.next_weather_ms {
            self.service.tick_weather(sink);
            self.next_weather_ms = now + self.weather_period_ms;
            fired += 1;
        }
        fired
    }

    // ── Commands ──────────────────────────────────────────────

    /// Route a command to the service, stamped with the driver's clock.
    /// Period changes from `UpdateConfig` take effect on the next firing.
    pub fn handle_command(
        &mut self,
        cmd: Command,
        sink: &mut impl EventSink,
    ) -> Result<(), CommandError> {
        let now = self.clock.now_ms();
        self.service.handle_command(cmd, now, sink)?;
        let config = self.service.current_config();
        self.sensor_period_ms = u64::from(config.sensor_interval_ms);
        self.weather_period_ms = u64::from(config.weather_interval_ms);
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn service(&self) -> &IrrigationService {
        &self.service
    }

    /// Mutable service access (alert bookkeeping, direct queries in tests).
    pub fn service_mut(&mut self) -> &mut IrrigationService {
        &mut self.service
    }
}
