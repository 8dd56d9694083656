//! Auto-fire system — weapon cars and the engine's dominant-color weapon.
//!
//! Each firing source keeps its own cooldown. A source only fires (and
//! only restarts its cooldown) when an enemy is inside profile range, so
//! the first enemy to enter range is shot immediately.

use std::collections::HashMap;

use glam::Vec2;

use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::weapons::{self, BonusMultipliers, ResolvedWeapon};

use crate::registry::EntityRegistry;

pub fn run<T: TrainContract>(
    registry: &mut EntityRegistry,
    train: &T,
    bonus: &BonusMultipliers,
    car_cooldowns: &mut HashMap<u32, f32>,
    engine_cooldown: &mut f32,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let cars = train.weapon_cars();

    // Drop cooldown state for cars that no longer exist.
    car_cooldowns.retain(|id, _| cars.iter().any(|c| c.id == *id));

    for car in &cars {
        let Some(color) = car.color else { continue };
        let cooldown = car_cooldowns.entry(car.id).or_insert(0.0);
        *cooldown = (*cooldown - dt).max(0.0);
        if *cooldown > 0.0 {
            continue;
        }

        let weapon = weapons::car_weapon(color, car.tier, bonus);
        if let Some(interval) = fire(registry, car.pos, car.id, &weapon, events) {
            *cooldown = interval;
        }
    }

    // The engine's own weapon, derived from car composition.
    *engine_cooldown = (*engine_cooldown - dt).max(0.0);
    if *engine_cooldown <= 0.0 {
        if let Some(weapon) = weapons::engine_weapon(&cars, bonus) {
            let engine = train.engine();
            if let Some(interval) = fire(registry, engine.pos, engine.id, &weapon, events) {
                *engine_cooldown = interval;
            }
        }
    }
}

/// Fire at the nearest enemy in range, if any. Returns the new cooldown
/// interval on a successful shot.
fn fire(
    registry: &mut EntityRegistry,
    origin: Vec2,
    segment: u32,
    weapon: &ResolvedWeapon,
    events: &mut Vec<CombatEvent>,
) -> Option<f32> {
    let range_sq = weapon.profile.range * weapon.profile.range;
    let target = registry
        .enemies
        .iter()
        .filter(|e| e.pos.distance_squared(origin) <= range_sq)
        .min_by(|a, b| {
            a.pos
                .distance_squared(origin)
                .total_cmp(&b.pos.distance_squared(origin))
        })
        .map(|e| e.pos)?;

    registry.spawn_projectile(origin, target, weapon);
    events.push(CombatEvent::WeaponFired {
        color: weapon.color,
        source: weapon.source,
        tier: weapon.tier,
        segment,
    });
    Some(weapon.profile.shot_interval())
}
