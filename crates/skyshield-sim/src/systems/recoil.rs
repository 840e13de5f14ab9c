//! Economy & recoil: decays battery muzzle kick toward zero.

use hecs::World;

use skyshield_core::components::Battery;
use skyshield_core::constants::RECOIL_DECAY_RATE;
use skyshield_core::types::time_scale;

pub fn run(world: &mut World, elapsed_ms: f64) {
    let decay = RECOIL_DECAY_RATE * time_scale(elapsed_ms);
    for (_entity, battery) in world.query_mut::<&mut Battery>() {
        battery.recoil = (battery.recoil - decay).max(0.0);
    }
}
