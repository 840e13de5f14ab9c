//! Impact resolution: projectiles that reached the end of their path.
//!
//! Enemies with progress >= 1 strike their assigned target: an impact blast
//! is created at the target point and the referenced city or battery is
//! flagged destroyed. Interceptors with progress >= 1 detonate into a blast
//! whose size depends on how many batteries are already lost.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::constants::IMPACT_BLAST_RADIUS;
use skyshield_core::enums::{BlastKind, TargetKind};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::rules;
use crate::session::Session;
use crate::world_setup::{self, Layout};

/// Resolve enemies that reached their target.
pub fn run(
    world: &mut World,
    layout: &Layout,
    session: &mut Session,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();
    let mut strikes: Vec<(Position, StrikeTarget)> = Vec::new();

    for (entity, (_enemy, traj, strike)) in
        world.query_mut::<(&Enemy, &Trajectory, &StrikeTarget)>()
    {
        if traj.has_arrived() {
            strikes.push((traj.target, *strike));
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (point, strike) in strikes {
        world_setup::spawn_blast(world, point, BlastKind::Impact, IMPACT_BLAST_RADIUS);
        session.stats.enemies_impacted += 1;

        if mark_destroyed(world, layout, strike) {
            log::debug!("{:?} #{} destroyed", strike.kind, strike.index);
        }
        events.push(SimEvent::TargetStruck {
            kind: strike.kind,
            index: strike.index,
        });
    }
}

/// Detonate interceptors that reached their aim point.
pub fn detonate_interceptors(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let mut detonations: Vec<Position> = Vec::new();

    for (entity, (_interceptor, traj)) in world.query_mut::<(&Interceptor, &Trajectory)>() {
        if traj.has_arrived() {
            detonations.push(traj.target);
            despawn_buffer.push(entity);
        }
    }

    if detonations.is_empty() {
        return;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let max_radius = rules::interceptor_blast_radius(world_setup::destroyed_battery_count(world));
    for point in detonations {
        world_setup::spawn_blast(world, point, BlastKind::Interceptor, max_radius);
    }
}

/// Flag the struck city or battery. Returns true only on the first strike;
/// later strikes on the same target leave it unchanged.
fn mark_destroyed(world: &mut World, layout: &Layout, strike: StrikeTarget) -> bool {
    let Some(entity) = layout.resolve(strike) else {
        return false;
    };
    match strike.kind {
        TargetKind::City => match world.get::<&mut City>(entity) {
            Ok(mut city) if !city.destroyed => {
                city.destroyed = true;
                true
            }
            _ => false,
        },
        TargetKind::Battery => match world.get::<&mut Battery>(entity) {
            Ok(mut battery) if !battery.destroyed => {
                battery.destroyed = true;
                true
            }
            _ => false,
        },
    }
}
