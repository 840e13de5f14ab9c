//! Difficulty and scoring rules.
//!
//! Pure functions of score and battery losses. No ECS dependency.

use skyshield_core::constants::*;

/// Milliseconds between enemy spawns at the given score.
///
/// Shrinks by one step per 100 points, floored at [`SPAWN_INTERVAL_MIN_MS`].
pub fn spawn_interval_ms(score: u32) -> f64 {
    let steps = (score / SPAWN_SCORE_STEP) as f64;
    (SPAWN_INTERVAL_BASE_MS - steps * SPAWN_INTERVAL_STEP_MS).max(SPAWN_INTERVAL_MIN_MS)
}

/// Enemy progress per reference frame at the given score.
pub fn enemy_speed(score: u32) -> f64 {
    ENEMY_BASE_SPEED + score as f64 * ENEMY_SPEED_PER_POINT
}

/// Max radius of an interceptor blast. Shrinks as batteries are lost.
pub fn interceptor_blast_radius(destroyed_batteries: usize) -> f64 {
    (INTERCEPTOR_BLAST_BASE_RADIUS - destroyed_batteries as f64 * INTERCEPTOR_BLAST_PENALTY)
        .max(INTERCEPTOR_BLAST_MIN_RADIUS)
}

/// Points awarded per enemy kill. Shrinks as batteries are lost.
pub fn kill_value(destroyed_batteries: usize) -> u32 {
    let penalty = (destroyed_batteries as u32).saturating_mul(KILL_VALUE_PENALTY);
    KILL_VALUE_BASE.saturating_sub(penalty).max(KILL_VALUE_MIN)
}

/// Interceptors launched per fire action.
pub fn burst_count(destroyed_batteries: usize) -> usize {
    if destroyed_batteries > 0 {
        DEGRADED_BURST_COUNT
    } else {
        1
    }
}
