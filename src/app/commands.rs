//! Inbound commands to the irrigation service.
//!
//! These represent actions requested by the outside world (display layer,
//! CLI, scheduler) that the service interprets and acts upon.

use crate::config::SystemConfig;
use crate::env::PumpMode;

/// Commands that external callers can send into the application core.
#[derive(Debug, Clone)]
pub enum Command {
    /// Switch between auto and manual pump control.
    ///
    /// Switching to manual preserves the current pump status; switching to
    /// auto hands control back to the decision function from the next tick.
    SetMode(PumpMode),

    /// Flip the pump. Valid only in manual mode — rejected in auto.
    TogglePump,

    /// Hot-reload configuration. Validated before being applied.
    UpdateConfig(SystemConfig),
}
