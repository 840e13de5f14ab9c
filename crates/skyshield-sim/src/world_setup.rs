//! Entity spawn factories and ground layout.
//!
//! Creates cities, batteries, projectiles and blasts with the
//! appropriate component bundles.

use hecs::{Entity, World};

use skyshield_core::components::*;
use skyshield_core::constants::*;
use skyshield_core::enums::*;
use skyshield_core::types::{PlayField, Position};

/// City and battery entities in layout order.
///
/// Order matters: it is the tie-break for "first found" lookups.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub cities: Vec<Entity>,
    pub batteries: Vec<Entity>,
}

impl Layout {
    /// Entity referenced by a strike target, if the index is in range.
    pub fn resolve(&self, target: StrikeTarget) -> Option<Entity> {
        match target.kind {
            TargetKind::City => self.cities.get(target.index).copied(),
            TargetKind::Battery => self.batteries.get(target.index).copied(),
        }
    }
}

/// City positions for a play field: six slots of `width / 8`, skipping the
/// middle slot reserved for the center battery.
pub fn city_positions(field: PlayField) -> Vec<Position> {
    let spacing = field.width / LAYOUT_SLOTS;
    let y = field.height - CITY_GROUND_OFFSET;
    CITY_SLOTS
        .iter()
        .map(|slot| Position::new(slot * spacing, y))
        .collect()
}

/// Battery position for a slot.
pub fn battery_position(field: PlayField, slot: BatterySlot) -> Position {
    let y = field.height - BATTERY_GROUND_OFFSET;
    let x = match slot {
        BatterySlot::Left => BATTERY_EDGE_INSET,
        BatterySlot::Center => field.width / 2.0,
        BatterySlot::Right => field.width - BATTERY_EDGE_INSET,
    };
    Position::new(x, y)
}

/// Despawn everything and seed the fixed ground layout.
///
/// Handles, and the snapshot ids built from them, never repeat across sessions.
pub fn setup_session(world: &mut World, field: PlayField) -> Layout {
    let stale: Vec<Entity> = world.iter().map(|e| e.entity()).collect();
    for entity in stale {
        let _ = world.despawn(entity);
    }

    let cities = city_positions(field)
        .into_iter()
        .enumerate()
        .map(|(index, pos)| {
            world.spawn((
                City {
                    index,
                    destroyed: false,
                },
                pos,
            ))
        })
        .collect();

    let batteries = BatterySlot::ALL
        .iter()
        .map(|&slot| spawn_battery(world, field, slot))
        .collect();

    Layout { cities, batteries }
}

/// Spawn a fully stocked battery.
pub fn spawn_battery(world: &mut World, field: PlayField, slot: BatterySlot) -> Entity {
    let max_ammo = BATTERY_MAX_AMMO[slot.index()];
    world.spawn((
        Battery {
            slot,
            destroyed: false,
            ammo: max_ammo,
            max_ammo,
            recoil: 0.0,
        },
        battery_position(field, slot),
    ))
}

/// Move cities and batteries to the layout for a new play field.
/// Destroyed flags, ammo and recoil are kept.
pub fn relayout(world: &mut World, layout: &Layout, field: PlayField) {
    for (entity, pos) in layout.cities.iter().zip(city_positions(field)) {
        if let Ok(mut current) = world.get::<&mut Position>(*entity) {
            *current = pos;
        }
    }
    for (entity, slot) in layout.batteries.iter().zip(BatterySlot::ALL) {
        if let Ok(mut current) = world.get::<&mut Position>(*entity) {
            *current = battery_position(field, slot);
        }
    }
}

/// Spawn an enemy projectile headed for a ground target.
pub fn spawn_enemy(
    world: &mut World,
    start: Position,
    target_pos: Position,
    strike: StrikeTarget,
    speed: f64,
) -> Entity {
    world.spawn((
        Enemy,
        Trajectory {
            start,
            target: target_pos,
            progress: 0.0,
            speed,
        },
        start,
        strike,
    ))
}

/// Spawn an interceptor leaving a battery muzzle.
pub fn spawn_interceptor(
    world: &mut World,
    battery: BatterySlot,
    muzzle: Position,
    aim: Position,
) -> Entity {
    world.spawn((
        Interceptor { battery },
        Trajectory {
            start: muzzle,
            target: aim,
            progress: 0.0,
            speed: INTERCEPTOR_SPEED,
        },
        muzzle,
    ))
}

/// Spawn a blast at `center`. Secondary blasts start contracting from near
/// their max radius; all others grow from zero.
pub fn spawn_blast(world: &mut World, center: Position, kind: BlastKind, max_radius: f64) -> Entity {
    let blast = match kind {
        BlastKind::Secondary => Blast {
            kind,
            phase: BlastPhase::Contracting,
            radius: max_radius * SECONDARY_BLAST_START_FRACTION,
            max_radius,
            growth_rate: SECONDARY_BLAST_GROWTH_RATE,
            age_ms: 0.0,
        },
        BlastKind::Interceptor | BlastKind::Impact => Blast {
            kind,
            phase: BlastPhase::Expanding,
            radius: 0.0,
            max_radius,
            growth_rate: BLAST_GROWTH_RATE,
            age_ms: 0.0,
        },
    };
    world.spawn((blast, center))
}

/// Number of batteries flagged destroyed.
pub fn destroyed_battery_count(world: &World) -> usize {
    world
        .query::<&Battery>()
        .iter()
        .filter(|(_, battery)| battery.destroyed)
        .count()
}

/// Whether every battery is destroyed. False if there are no batteries.
pub fn all_batteries_destroyed(world: &World) -> bool {
    let mut query = world.query::<&Battery>();
    let mut any = false;
    for (_, battery) in query.iter() {
        if !battery.destroyed {
            return false;
        }
        any = true;
    }
    any
}

/// Surviving cities and batteries an enemy may be assigned to, in layout order.
pub fn surviving_targets(world: &World, layout: &Layout) -> Vec<(StrikeTarget, Position)> {
    let mut targets = Vec::with_capacity(layout.cities.len() + layout.batteries.len());

    for (index, &entity) in layout.cities.iter().enumerate() {
        let Ok(mut query) = world.query_one::<(&City, &Position)>(entity) else {
            continue;
        };
        if let Some((city, pos)) = query.get() {
            if !city.destroyed {
                targets.push((
                    StrikeTarget {
                        kind: TargetKind::City,
                        index,
                    },
                    *pos,
                ));
            }
        }
    }

    for (index, &entity) in layout.batteries.iter().enumerate() {
        let Ok(mut query) = world.query_one::<(&Battery, &Position)>(entity) else {
            continue;
        };
        if let Some((battery, pos)) = query.get() {
            if !battery.destroyed {
                targets.push((
                    StrikeTarget {
                        kind: TargetKind::Battery,
                        index,
                    },
                    *pos,
                ));
            }
        }
    }

    targets
}
