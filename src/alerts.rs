//! Alert / notification log.
//!
//! A bounded in-memory ring of operator-facing alerts. When the ring is
//! full the oldest entry is evicted regardless of read state — the log is
//! a convenience surface, not an audit trail.

use serde::{Deserialize, Serialize};

/// Maximum retained alerts.
pub const ALERT_CAPACITY: usize = 16;

/// Maximum alert message length (characters beyond this are dropped).
const MESSAGE_CAPACITY: usize = 96;

/// Category of an alert, used by display layers for grouping and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertKind {
    /// Soil moisture crossed the irrigation threshold.
    LowMoisture,
    /// Rain detected or cleared.
    Rain,
    /// Fertilizer application due for the current crop stage.
    Fertilizer,
    /// System warning (sensor trouble, low battery).
    Fault,
}

/// A single operator notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub message: heapless::String<MESSAGE_CAPACITY>,
    /// Clock-port milliseconds when the alert was raised.
    pub raised_at_ms: u64,
    pub read: bool,
}

/// Bounded alert ring with read/dismiss bookkeeping.
#[derive(Default)]
pub struct AlertLog {
    entries: heapless::Vec<Alert, ALERT_CAPACITY>,
    next_id: u32,
}

impl AlertLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert, evicting the oldest entry when full.
    /// Returns the new alert's id. Messages are truncated to fit.
    pub fn raise(&mut self, kind: AlertKind, message: &str, now_ms: u64) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        let mut bounded = heapless::String::new();
        for ch in message.chars() {
            if bounded.push(ch).is_err() {
                break;
            }
        }

        let alert = Alert {
            id,
            kind,
            message: bounded,
            raised_at_ms: now_ms,
            read: false,
        };

        if self.entries.is_full() {
            self.entries.remove(0);
        }
        // Cannot fail: we just guaranteed a free slot.
        let _ = self.entries.push(alert);
        id
    }

    /// Mark one alert read. Returns `false` if the id is unknown.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.entries.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.read = true;
                true
            }
            None => false,
        }
    }

    /// Mark every alert read.
    pub fn mark_all_read(&mut self) {
        for alert in &mut self.entries {
            alert.read = true;
        }
    }

    /// Remove one alert. Returns `false` if the id is unknown.
    pub fn dismiss(&mut self, id: u32) -> bool {
        match self.entries.iter().position(|a| a.id == id) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|a| !a.read).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Oldest-first iteration.
    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.entries.iter()
    }

    pub fn get(&self, id: u32) -> Option<&Alert> {
        self.entries.iter().find(|a| a.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raise_and_read_lifecycle() {
        let mut log = AlertLog::new();
        let id = log.raise(AlertKind::LowMoisture, "Soil moisture dropped to 28%", 1000);
        assert_eq!(log.len(), 1);
        assert_eq!(log.unread_count(), 1);

        assert!(log.mark_read(id));
        assert_eq!(log.unread_count(), 0);
        assert!(log.get(id).unwrap().read);
    }

    #[test]
    fn unknown_ids_are_rejected() {
        let mut log = AlertLog::new();
        assert!(!log.mark_read(99));
        assert!(!log.dismiss(99));
    }

    #[test]
    fn dismiss_removes_entry() {
        let mut log = AlertLog::new();
        let a = log.raise(AlertKind::Rain, "Rain detected", 0);
        let b = log.raise(AlertKind::Fault, "Sensor warning", 1);
        assert!(log.dismiss(a));
        assert_eq!(log.len(), 1);
        assert_eq!(log.iter().next().unwrap().id, b);
    }

    #[test]
    fn ring_evicts_oldest() {
        let mut log = AlertLog::new();
        for i in 0..(ALERT_CAPACITY + 4) {
            log.raise(AlertKind::Fault, "x", i as u64);
        }
        assert_eq!(log.len(), ALERT_CAPACITY);
        // The four oldest entries (ids 0-3) must be gone.
        assert!(log.get(3).is_none());
        assert!(log.get(4).is_some());
    }

    #[test]
    fn mark_all_read_clears_unread() {
        let mut log = AlertLog::new();
        for _ in 0..5 {
            log.raise(AlertKind::Fertilizer, "NPK application due", 0);
        }
        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn long_messages_are_truncated_not_rejected() {
        let mut log = AlertLog::new();
        let long = "m".repeat(500);
        let id = log.raise(AlertKind::Fault, &long, 0);
        let stored = log.get(id).unwrap();
        assert!(stored.message.len() <= 96);
        assert!(!stored.message.is_empty());
    }

    #[test]
    fn iteration_is_oldest_first() {
        let mut log = AlertLog::new();
        log.raise(AlertKind::Rain, "first", 0);
        log.raise(AlertKind::Rain, "second", 1);
        let ids: Vec<u32> = log.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
