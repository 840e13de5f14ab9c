//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{PlayField, Position, SimTime};

/// Complete read-only view of the session, rebuilt once per tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub state: GameState,
    pub paused: bool,
    pub score: u32,
    pub field: PlayField,
    pub enemies: Vec<ProjectileView>,
    pub interceptors: Vec<ProjectileView>,
    pub blasts: Vec<BlastView>,
    pub cities: Vec<CityView>,
    pub batteries: Vec<BatteryView>,
    pub stats: SessionStats,
    pub events: Vec<SimEvent>,
}

/// An enemy or interceptor in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub position: Position,
    pub start: Position,
    pub target: Position,
    pub progress: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlastView {
    pub id: u64,
    pub position: Position,
    pub kind: BlastKind,
    pub phase: BlastPhase,
    pub radius: f64,
    pub max_radius: f64,
    pub age_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityView {
    pub index: usize,
    pub position: Position,
    pub destroyed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatteryView {
    pub slot: BatterySlot,
    pub position: Position,
    pub destroyed: bool,
    pub ammo: u32,
    pub max_ammo: u32,
    pub recoil: f64,
}

/// Running counters for the results screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub enemies_spawned: u32,
    pub enemies_destroyed: u32,
    pub enemies_impacted: u32,
    /// Fire actions that launched at least one interceptor.
    pub shots_fired: u32,
    pub interceptors_fired: u32,
}
