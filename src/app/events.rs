//! Outbound application events.
//!
//! The [`IrrigationService`](super::service::IrrigationService) emits these
//! through the [`EventSink`](super::ports::EventSink) port. Adapters on the
//! other side decide what to do with them — log them, render them, forward
//! them to a display layer.

use crate::alerts::Alert;
use crate::env::{EnvSnapshot, PumpMode, PumpStatus};
use crate::weather::WeatherSnapshot;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum Event {
    /// Full environment snapshot, pushed on every sensor tick.
    Telemetry(EnvSnapshot),

    /// The pump changed status (tick decision or manual toggle).
    PumpChanged { from: PumpStatus, to: PumpStatus },

    /// The pump control mode changed.
    ModeChanged { from: PumpMode, to: PumpMode },

    /// The rain detection flag flipped.
    RainChanged(bool),

    /// Ambient weather snapshot, pushed on every weather tick.
    WeatherUpdated(WeatherSnapshot),

    /// A new operator alert was raised.
    AlertRaised(Alert),

    /// The service has started (carries the initial snapshot).
    Started(EnvSnapshot),
}
