//! Per-frame systems, run by the engine in a fixed order:
//! director -> enemies -> player projectiles -> enemy projectiles ->
//! mines -> auto-fire.
//!
//! Removal from any backing collection is immediate and done by
//! reverse-index iteration, so an enemy destroyed early in the frame can
//! never be touched by a later system.

pub mod director;
pub mod enemies;
pub mod enemy_projectiles;
pub mod firing;
pub mod mines;
pub mod projectiles;

use railstorm_core::entities::Enemy;
use railstorm_core::enums::{DestroyCause, TetherPhase};
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;

use crate::registry::EntityRegistry;

/// Armor-adjusted damage: `max(0, raw - armor * (1 - pierce))`.
pub fn armor_adjusted_damage(raw: f32, armor: f32, pierce: f32) -> f32 {
    let effective_armor = armor * (1.0 - pierce.clamp(0.0, 1.0));
    (raw - effective_armor).max(0.0)
}

/// Remove the enemy at `index`, releasing any in-flight tether drag and
/// emitting the death event. Must run after splash/on-death effects.
pub(crate) fn destroy_enemy_at<T: TrainContract>(
    registry: &mut EntityRegistry,
    index: usize,
    cause: DestroyCause,
    train: &mut T,
    events: &mut Vec<CombatEvent>,
) -> Enemy {
    let enemy = registry.remove_enemy_at(index);
    release_owned_effects(&enemy, train);
    events.push(CombatEvent::EnemyDestroyed {
        id: enemy.id,
        kind: enemy.kind,
        pos: enemy.pos,
        cause,
    });
    enemy
}

/// A dying harpooner must never leave its drag active on the train.
fn release_owned_effects<T: TrainContract>(enemy: &Enemy, train: &mut T) {
    if enemy.tether.phase == TetherPhase::Drag {
        if let Some(car) = enemy.tether.target_car {
            train.clear_drag(car);
        }
    }
}
