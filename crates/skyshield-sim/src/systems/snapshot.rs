//! Snapshot system: queries the ECS world and builds a GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use skyshield_core::components::*;
use skyshield_core::events::SimEvent;
use skyshield_core::state::*;
use skyshield_core::types::{PlayField, Position, SimTime};

use crate::session::Session;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    session: &Session,
    field: PlayField,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        state: session.state,
        paused: session.paused,
        score: session.score,
        field,
        enemies: build_projectiles::<Enemy>(world),
        interceptors: build_projectiles::<Interceptor>(world),
        blasts: build_blasts(world),
        cities: build_cities(world),
        batteries: build_batteries(world),
        stats: session.stats,
        events,
    }
}

/// Projectiles carrying marker component `M`, ordered by id.
fn build_projectiles<M: hecs::Component>(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&M, &Trajectory, &Position)>()
        .iter()
        .map(|(entity, (_, traj, pos))| ProjectileView {
            id: entity.to_bits().get(),
            position: *pos,
            start: traj.start,
            target: traj.target,
            progress: traj.progress,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_blasts(world: &World) -> Vec<BlastView> {
    let mut views: Vec<BlastView> = world
        .query::<(&Blast, &Position)>()
        .iter()
        .map(|(entity, (blast, pos))| BlastView {
            id: entity.to_bits().get(),
            position: *pos,
            kind: blast.kind,
            phase: blast.phase,
            radius: blast.radius,
            max_radius: blast.max_radius,
            age_ms: blast.age_ms,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_cities(world: &World) -> Vec<CityView> {
    let mut views: Vec<CityView> = world
        .query::<(&City, &Position)>()
        .iter()
        .map(|(_, (city, pos))| CityView {
            index: city.index,
            position: *pos,
            destroyed: city.destroyed,
        })
        .collect();

    views.sort_by_key(|c| c.index);
    views
}

fn build_batteries(world: &World) -> Vec<BatteryView> {
    let mut views: Vec<BatteryView> = world
        .query::<(&Battery, &Position)>()
        .iter()
        .map(|(_, (battery, pos))| BatteryView {
            slot: battery.slot,
            position: *pos,
            destroyed: battery.destroyed,
            ammo: battery.ammo,
            max_ammo: battery.max_ammo,
            recoil: battery.recoil,
        })
        .collect();

    views.sort_by_key(|b| b.slot.index());
    views
}
