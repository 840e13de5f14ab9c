//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Feedback events, drained into the next snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A fresh session began.
    SessionStarted,
    /// A battery fired a burst.
    InterceptorLaunched { battery: BatterySlot, burst: u32 },
    /// The last round left a battery.
    BatteryEmpty { battery: BatterySlot },
    /// An enemy projectile was caught by a blast.
    EnemyDestroyed { x: f64, y: f64, points: u32 },
    /// An enemy projectile reached its target.
    TargetStruck { kind: TargetKind, index: usize },
    GameWon { score: u32 },
    GameLost { score: u32 },
}
