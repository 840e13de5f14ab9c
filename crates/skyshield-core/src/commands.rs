//! Player commands sent from the host shell to the simulation.
//!
//! Commands take effect immediately on receipt; none are deferred to the
//! next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Begin a session from the menu.
    Start,
    /// Reinitialize the session after it ended (or at any time).
    Restart,
    /// Launch interceptors at a play-field point.
    Fire { x: f64, y: f64 },
    /// Freeze or resume the tick pipeline. Only honoured while playing.
    SetPaused { paused: bool },
    /// The host play field changed size.
    Resize { width: f64, height: f64 },
}
