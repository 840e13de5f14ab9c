//! Spawner: releases enemy projectiles on a score-driven interval.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyshield_core::types::{PlayField, Position};

use crate::rules;
use crate::session::Session;
use crate::world_setup::{self, Layout};

/// Accumulate elapsed time and spawn at most one enemy once the interval is exceeded.
///
/// Missed intervals are not caught up: the accumulator resets to zero.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    session: &mut Session,
    layout: &Layout,
    field: PlayField,
    elapsed_ms: f64,
) {
    session.spawn_accumulator_ms += elapsed_ms;
    if session.spawn_accumulator_ms <= rules::spawn_interval_ms(session.score) {
        return;
    }
    session.spawn_accumulator_ms = 0.0;

    let targets = world_setup::surviving_targets(world, layout);
    let Some(&(strike, target_pos)) = targets.choose(rng) else {
        return;
    };

    let start = Position::new(rng.gen_range(0.0..field.width), 0.0);
    let speed = rules::enemy_speed(session.score);
    world_setup::spawn_enemy(world, start, target_pos, strike, speed);
    session.stats.enemies_spawned += 1;

    log::debug!(
        "enemy spawned at x={:.1} -> {:?} #{} (speed {:.5})",
        start.x(),
        strike.kind,
        strike.index,
        speed
    );
}
