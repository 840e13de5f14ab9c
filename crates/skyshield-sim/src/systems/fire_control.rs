//! Fire control: turns a pointer coordinate into an interceptor launch.

use hecs::{Entity, World};

use skyshield_core::components::Battery;
use skyshield_core::constants::{BURST_OFFSETS, MUZZLE_HEIGHT};
use skyshield_core::enums::BatterySlot;
use skyshield_core::events::SimEvent;
use skyshield_core::types::Position;

use crate::rules;
use crate::session::Session;
use crate::world_setup::{self, Layout};

/// Fire from the nearest battery that can shoot.
///
/// Spends one round, kicks the battery's recoil to 1.0 and launches a burst
/// aimed at `aim`. Returns the firing slot, or `None` when no battery is
/// eligible (a silent no-op).
pub fn fire(
    world: &mut World,
    layout: &Layout,
    session: &mut Session,
    events: &mut Vec<SimEvent>,
    aim: Position,
) -> Option<BatterySlot> {
    let (entity, muzzle) = nearest_ready_battery(world, layout, aim)?;

    let (slot, remaining) = {
        let mut battery = world.get::<&mut Battery>(entity).ok()?;
        battery.ammo -= 1;
        battery.recoil = 1.0;
        (battery.slot, battery.ammo)
    };

    let burst = rules::burst_count(world_setup::destroyed_battery_count(world));
    for &(dx, dy) in BURST_OFFSETS.iter().take(burst) {
        world_setup::spawn_interceptor(world, slot, muzzle, aim.offset(dx, dy));
    }

    session.stats.shots_fired += 1;
    session.stats.interceptors_fired += burst as u32;
    events.push(SimEvent::InterceptorLaunched {
        battery: slot,
        burst: burst as u32,
    });
    if remaining == 0 {
        events.push(SimEvent::BatteryEmpty { battery: slot });
    }

    log::debug!(
        "{:?} battery fired x{} at ({:.1}, {:.1}), {} left",
        slot,
        burst,
        aim.x(),
        aim.y(),
        remaining
    );
    Some(slot)
}

/// Closest surviving battery with ammo, and its muzzle point.
/// Ties go to the first battery in layout order.
fn nearest_ready_battery(world: &World, layout: &Layout, aim: Position) -> Option<(Entity, Position)> {
    let mut best: Option<(Entity, Position, f64)> = None;

    for &entity in &layout.batteries {
        let Ok(mut query) = world.query_one::<(&Battery, &Position)>(entity) else {
            continue;
        };
        let Some((battery, pos)) = query.get() else {
            continue;
        };
        if !battery.can_fire() {
            continue;
        }
        let distance = pos.distance_to(&aim);
        if best.map_or(true, |(_, _, d)| distance < d) {
            best = Some((entity, pos.offset(0.0, -MUZZLE_HEIGHT), distance));
        }
    }

    best.map(|(entity, muzzle, _)| (entity, muzzle))
}
