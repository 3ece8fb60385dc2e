//! AgriSense — irrigation decision loop for a simulated smart farm.
//!
//! The crate is laid out hexagonally: a pure application core drives the
//! environment simulation and pump decisions, and talks to the outside
//! world only through ports.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                     application core                        │
//! │  env · sim · control · weather · alerts · crop · profile    │
//! │                        ▲        │                           │
//! │        Command ────────┘        └──────── Event             │
//! │                                                             │
//! │  ports: Clock · EventSink · StoragePort                     │
//! └───────┬───────────────────┬───────────────────┬────────────┘
//!         │                   │                   │
//!   SystemClock          LogEventSink        MemoryStore
//! ```
//!
//! Everything above the ports line is deterministic given a seed and a
//! clock, which is what makes the whole loop testable on the host.

pub mod adapters;
pub mod alerts;
pub mod app;
pub mod config;
pub mod control;
pub mod crop;
pub mod driver;
pub mod env;
pub mod error;
pub mod profile;
pub mod sim;
pub mod weather;

pub use config::SystemConfig;
pub use driver::{DriverState, TickDriver};
pub use error::{Error, Result};
