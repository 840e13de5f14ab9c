//! Motion integration system.
//!
//! Advances every projectile along its fixed path:
//! `progress += speed * time_scale`, `position = lerp(start, target, progress)`.
//! No clamping here; arrival is handled by the impact stage.

use hecs::World;

use skyshield_core::components::Trajectory;
use skyshield_core::types::{time_scale, Position};

/// Run linear motion for all entities with a Trajectory.
pub fn run(world: &mut World, elapsed_ms: f64) {
    let scale = time_scale(elapsed_ms);
    for (_entity, (traj, pos)) in world.query_mut::<(&mut Trajectory, &mut Position)>() {
        traj.progress += traj.speed * scale;
        *pos = traj.position();
    }
}
