//! Host-side implementations of the application ports.

pub mod clock;
pub mod log_sink;
pub mod memory_store;

pub use clock::SystemClock;
pub use log_sink::LogEventSink;
pub use memory_store::MemoryStore;
