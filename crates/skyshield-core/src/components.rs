//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// Marks an entity as an enemy projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Marks an entity as a player interceptor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Interceptor {
    /// Battery that launched it.
    pub battery: BatterySlot,
}

/// Fixed start-to-target linear path shared by enemies and interceptors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Trajectory {
    pub start: Position,
    pub target: Position,
    /// Fraction of the path covered. Never decreases; may pass 1.0 within a tick.
    pub progress: f64,
    /// Progress gained per reference frame.
    pub speed: f64,
}

/// Ground target an enemy was assigned at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrikeTarget {
    pub kind: TargetKind,
    /// Index into the city or battery layout.
    pub index: usize,
}

/// Expanding-then-contracting blast volume.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Blast {
    pub kind: BlastKind,
    pub phase: BlastPhase,
    /// Current radius, always within `[0, max_radius]`.
    pub radius: f64,
    pub max_radius: f64,
    /// Radius gained per reference frame while expanding.
    pub growth_rate: f64,
    /// Milliseconds since creation.
    pub age_ms: f64,
}

/// A defended city. Never despawned, only flagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct City {
    pub index: usize,
    pub destroyed: bool,
}

/// A missile battery. Never despawned, only flagged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Battery {
    pub slot: BatterySlot,
    pub destroyed: bool,
    pub ammo: u32,
    pub max_ammo: u32,
    /// Visual muzzle kick, 1.0 right after firing, decays to 0.
    pub recoil: f64,
}

impl Trajectory {
    /// Current point along the path.
    pub fn position(&self) -> Position {
        self.start.lerp(&self.target, self.progress)
    }

    pub fn has_arrived(&self) -> bool {
        self.progress >= 1.0
    }
}

impl Battery {
    /// Whether this battery can launch right now.
    pub fn can_fire(&self) -> bool {
        !self.destroyed && self.ammo > 0
    }
}
