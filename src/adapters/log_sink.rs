//! [`EventSink`] adapter that writes events to the log facade.
//!
//! Telemetry and weather snapshots go out as single-line JSON so they can
//! be grepped or piped into other tooling.

use log::{info, warn};

use crate::app::events::Event;
use crate::app::ports::EventSink;

#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &Event) {
        match event {
            Event::Started(snapshot) => match serde_json::to_string(snapshot) {
                Ok(json) => info!("started {json}"),
                Err(err) => warn!("started snapshot not serializable: {err}"),
            },
            Event::Telemetry(snapshot) => match serde_json::to_string(snapshot) {
                Ok(json) => info!("telemetry {json}"),
                Err(err) => warn!("telemetry not serializable: {err}"),
            },
            Event::WeatherUpdated(snapshot) => match serde_json::to_string(snapshot) {
                Ok(json) => info!("weather {json}"),
                Err(err) => warn!("weather not serializable: {err}"),
            },
            Event::PumpChanged { from, to } => info!("pump {from} -> {to}"),
            Event::ModeChanged { from, to } => info!("mode {from} -> {to}"),
            Event::RainChanged(raining) => info!("rain detected: {raining}"),
            Event::AlertRaised(alert) => {
                warn!("alert [{:?}] {}", alert.kind, alert.message);
            }
        }
    }
}
