//! Collision resolution: blasts destroy the enemies they overlap.

use hecs::{Entity, World};

use skyshield_core::components::{Blast, Enemy, Trajectory};
use skyshield_core::constants::{SECONDARY_BLAST_RADIUS, WIN_SCORE};
use skyshield_core::enums::{BlastKind, GameState};
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::rules;
use crate::session::Session;
use crate::world_setup;

/// Check every damaging blast against every enemy.
///
/// Kills are collected first and removed afterwards, so an enemy inside
/// several blasts is destroyed and scored exactly once. Crossing the win
/// score flips the session to `Won` inside this step.
pub fn run(
    world: &mut World,
    session: &mut Session,
    events: &mut Vec<SimEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let blasts: Vec<(Position, f64)> = world
        .query::<(&Blast, &Position)>()
        .iter()
        .filter(|(_, (blast, _))| blast.kind.is_damaging() && blast.radius > 0.0)
        .map(|(_, (blast, pos))| (*pos, blast.radius))
        .collect();

    if blasts.is_empty() {
        return;
    }

    let mut kills: Vec<Position> = Vec::new();
    for (entity, (_enemy, traj)) in world.query_mut::<(&Enemy, &Trajectory)>() {
        let pos = traj.position();
        let hit = blasts
            .iter()
            .any(|(center, radius)| center.distance_to(&pos) < *radius);
        if hit {
            kills.push(pos);
            despawn_buffer.push(entity);
        }
    }

    if kills.is_empty() {
        return;
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    let points = rules::kill_value(world_setup::destroyed_battery_count(world));
    for pos in kills {
        world_setup::spawn_blast(world, pos, BlastKind::Secondary, SECONDARY_BLAST_RADIUS);
        session.score = session.score.saturating_add(points);
        session.stats.enemies_destroyed += 1;
        events.push(SimEvent::EnemyDestroyed {
            x: pos.x(),
            y: pos.y(),
            points,
        });

        if session.state == GameState::Playing && session.score >= WIN_SCORE {
            session.state = GameState::Won;
            log::info!("score {} reached, session won", session.score);
            events.push(SimEvent::GameWon {
                score: session.score,
            });
        }
    }
}
