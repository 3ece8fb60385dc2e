//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IrrigationService (domain)
//! ```
//!
//! Driven adapters (event sinks, clocks, storage) implement these traits.
//! The service and driver consume them via generics, so the domain core
//! never touches wall-clock timers or a concrete store directly — which is
//! what makes the whole loop deterministic under test.

pub use crate::error::StorageError;

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → observers)
// ───────────────────────────────────────────────────────────────

/// The domain pushes structured [`Event`](super::events::Event)s through
/// this port on every tick. Adapters decide where they go — a log line, a
/// display layer, a channel.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::Event);
}

// ───────────────────────────────────────────────────────────────
// Clock port (time source for the tick driver)
// ───────────────────────────────────────────────────────────────

/// Monotonic time source. Production uses the system clock adapter; tests
/// inject a manually advanced clock to make firing deterministic.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin. Must never decrease.
    fn now_ms(&self) -> u64;
}

// ───────────────────────────────────────────────────────────────
// Storage port (domain ↔ persistent key/value store)
// ───────────────────────────────────────────────────────────────

/// Namespaced key/value persistence for the farmer profile and session
/// flag. Keys are namespaced to prevent collisions between subsystems;
/// writes are atomic per key.
pub trait StoragePort {
    /// Read a value. Returns the stored bytes.
    fn read(&self, namespace: &str, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Fails with [`StorageError::NotFound`] if it doesn't
    /// exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;

    /// Check whether a key exists without reading it.
    fn exists(&self, namespace: &str, key: &str) -> bool;
}
