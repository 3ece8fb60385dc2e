//! Shared test doubles: a recording event sink and a manually advanced
//! clock. Together they make whole-loop runs deterministic.

#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use agrisense::app::events::Event;
use agrisense::app::ports::{Clock, EventSink};
use agrisense::env::EnvSnapshot;

/// Sink that records every emitted event for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<Event>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All telemetry snapshots, in emission order.
    pub fn telemetry(&self) -> Vec<EnvSnapshot> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Telemetry(snap) => Some(*snap),
                _ => None,
            })
            .collect()
    }

    pub fn last_telemetry(&self) -> Option<EnvSnapshot> {
        self.telemetry().last().copied()
    }

    pub fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &Event) {
        self.events.push(event.clone());
    }
}

/// Clock the test advances by hand. Cheap to clone; clones share time.
#[derive(Clone, Default)]
pub struct ManualClock(Rc<Cell<u64>>);

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, ms: u64) {
        self.0.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.0.set(self.0.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.0.get()
    }
}
