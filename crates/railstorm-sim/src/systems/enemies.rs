//! Enemy update system — behavior evaluation, movement, and melee
//! contact with the train.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use railstorm_core::enums::DestroyCause;
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::types::circles_overlap;

use railstorm_ai::archetypes;
use railstorm_ai::behavior::{self, BehaviorAction, BehaviorContext, TrainView};

use crate::registry::EntityRegistry;

/// Run the enemy system for one frame.
pub fn run<T: TrainContract>(
    registry: &mut EntityRegistry,
    train: &mut T,
    rng: &mut ChaCha8Rng,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    let segments = train.segments();
    let weapon_cars = train.weapon_cars();
    let engine = train.engine();
    let heading = train.heading();

    // Behavior pass: evaluate each enemy, apply movement and sub-state,
    // collect side-effect actions for the apply pass.
    let mut actions: Vec<(u32, BehaviorAction)> = Vec::new();
    for enemy in registry.enemies.iter_mut() {
        enemy.slow.tick(dt);

        let ctx = BehaviorContext {
            kind: enemy.kind,
            pos: enemy.pos,
            heading: enemy.heading,
            speed: enemy.speed,
            slow_multiplier: enemy.slow.multiplier,
            attack_cooldown: enemy.attack_cooldown,
            tether: enemy.tether,
            mine_timer: enemy.mine_timer,
            orbit_dir: enemy.orbit_dir,
            dt,
            train: TrainView {
                engine,
                heading,
                segments: &segments,
                weapon_cars: &weapon_cars,
            },
        };
        let update = behavior::evaluate(&ctx);

        enemy.pos += update.velocity * dt;
        enemy.heading = update.heading;
        enemy.attack_cooldown = update.attack_cooldown;
        enemy.tether = update.tether;
        enemy.mine_timer = update.mine_timer;
        if let Some(action) = update.action {
            actions.push((enemy.id, action));
        }
    }

    // Apply pass: actions touch the registry and the train, so they run
    // outside the iteration borrow.
    for (enemy_id, action) in actions {
        match action {
            BehaviorAction::FireAtEngine => {
                let Some(enemy) = registry.enemy_by_id(enemy_id).cloned() else {
                    continue;
                };
                let arch = archetypes::stats(enemy.kind);
                let spread = rng.gen_range(-arch.shot_spread..=arch.shot_spread);
                registry.spawn_enemy_projectile(&enemy, engine.pos, spread);
                events.push(CombatEvent::EnemyWeaponFired {
                    enemy: enemy.id,
                    kind: enemy.kind,
                });
            }
            BehaviorAction::DropMine => {
                let Some(enemy) = registry.enemy_by_id(enemy_id).cloned() else {
                    continue;
                };
                registry.spawn_mine(&enemy);
            }
            BehaviorAction::BeginDrag { car } => {
                let Some(enemy) = registry.enemy_by_id(enemy_id) else {
                    continue;
                };
                let arch = archetypes::stats(enemy.kind);
                train.apply_drag(car, enemy.pos, arch.drag_strength, arch.drag_secs);
            }
            BehaviorAction::ReleaseDrag { car } => {
                train.clear_drag(car);
            }
        }
    }

    // Contact pass: melee enemies explode on the first segment they
    // touch. Reverse index so removal never skips a neighbor.
    for i in (0..registry.enemies.len()).rev() {
        let enemy = &registry.enemies[i];
        if !behavior::is_contact_attacker(enemy.kind, &enemy.tether) {
            continue;
        }
        let hit = segments
            .iter()
            .find(|seg| circles_overlap(enemy.pos, enemy.radius, seg.pos, seg.radius))
            .copied();
        if let Some(seg) = hit {
            let damage = enemy.damage;
            let impact: Vec2 = enemy.pos;
            // The snapshot can hold a segment an earlier contact this
            // frame already destroyed; no damage landed, so the enemy
            // keeps living.
            let Some(outcome) = train.apply_damage(seg.id, damage) else {
                continue;
            };
            events.push(CombatEvent::SegmentHit {
                segment: seg.id,
                damage,
                remaining_hp: outcome.remaining_hp,
                destroyed: outcome.destroyed,
                impact,
            });
            super::destroy_enemy_at(registry, i, DestroyCause::Contact, train, events);
        }
    }
}
