//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level session state.
///
/// `Won` and `Lost` are terminal: only a restart leaves them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    #[default]
    Menu,
    Playing,
    Won,
    Lost,
}

/// Blast growth phase. Expanding flips to contracting once, never back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastPhase {
    #[default]
    Expanding,
    Contracting,
}

/// What created a blast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlastKind {
    /// Interceptor reached its aim point.
    Interceptor,
    /// Enemy projectile struck a city or battery.
    Impact,
    /// Debris flash left by a destroyed enemy. Visual only.
    Secondary,
}

/// Kind of ground target an enemy projectile is assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetKind {
    City,
    Battery,
}

/// Fixed battery emplacement slots, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BatterySlot {
    Left,
    Center,
    Right,
}

impl GameState {
    /// Whether the session has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Won | GameState::Lost)
    }
}

impl BlastKind {
    /// Whether blasts of this kind destroy enemies they overlap.
    pub fn is_damaging(&self) -> bool {
        !matches!(self, BlastKind::Secondary)
    }
}

impl BatterySlot {
    pub const ALL: [BatterySlot; 3] = [BatterySlot::Left, BatterySlot::Center, BatterySlot::Right];

    /// Layout index (left = 0).
    pub fn index(&self) -> usize {
        match self {
            BatterySlot::Left => 0,
            BatterySlot::Center => 1,
            BatterySlot::Right => 2,
        }
    }
}
