//! Blast lifecycle: grow to max radius, then shrink to zero and despawn.

use hecs::{Entity, World};

use skyshield_core::components::Blast;
use skyshield_core::enums::BlastPhase;
use skyshield_core::types::time_scale;

/// Advance every blast one tick. Collapsed blasts are despawned.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, elapsed_ms: f64, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let scale = time_scale(elapsed_ms);

    for (entity, blast) in world.query_mut::<&mut Blast>() {
        blast.age_ms += elapsed_ms;
        if step(blast, scale) {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Advance a single blast by `scale` reference frames.
/// Returns true once the blast has fully collapsed.
pub fn step(blast: &mut Blast, scale: f64) -> bool {
    match blast.phase {
        BlastPhase::Expanding => {
            blast.radius += blast.growth_rate * scale;
            if blast.radius >= blast.max_radius {
                blast.radius = blast.max_radius;
                blast.phase = BlastPhase::Contracting;
            }
            false
        }
        BlastPhase::Contracting => {
            blast.radius -= blast.growth_rate * 0.5 * scale;
            if blast.radius <= 0.0 {
                blast.radius = 0.0;
                true
            } else {
                false
            }
        }
    }
}
