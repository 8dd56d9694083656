//! Player projectile system — movement, range expiry, enemy and mine
//! hits, splash, and slow application.
//!
//! A projectile hits at most one enemy: the first one in registry order
//! whose hit circle overlaps. Splash damage is flat (no armor reduction)
//! and excludes the directly hit enemy.

use railstorm_core::entities::MineState;
use railstorm_core::enums::DestroyCause;
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::types::circles_overlap;

use crate::registry::EntityRegistry;

pub fn run<T: TrainContract>(
    registry: &mut EntityRegistry,
    train: &mut T,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    for pi in (0..registry.projectiles.len()).rev() {
        {
            let proj = &mut registry.projectiles[pi];
            proj.pos += proj.vel * dt;
            proj.traveled += proj.vel.length() * dt;
        }
        let proj = registry.projectiles[pi].clone();

        // First overlapping enemy in registry order is the unique target.
        let target = registry
            .enemies
            .iter()
            .position(|e| circles_overlap(proj.pos, proj.hit_radius, e.pos, e.radius));

        if let Some(ti) = target {
            let impact = proj.pos;
            let target_id = registry.enemies[ti].id;

            // Primary hit: armor-adjusted, then slow.
            {
                let enemy = &mut registry.enemies[ti];
                let dealt = super::armor_adjusted_damage(proj.damage, enemy.armor, proj.armor_pierce);
                enemy.hp = (enemy.hp - dealt).max(0.0);
                if proj.slow_percent > 0.0 {
                    enemy.slow.apply(proj.slow_percent, proj.slow_duration);
                }
            }

            // Splash: flat damage, armor ignored, primary target excluded.
            if proj.splash_radius > 0.0 {
                for enemy in registry.enemies.iter_mut() {
                    if enemy.id == target_id {
                        continue;
                    }
                    if circles_overlap(impact, proj.splash_radius, enemy.pos, enemy.radius) {
                        enemy.hp = (enemy.hp - proj.splash_damage).max(0.0);
                    }
                }
            }

            registry.projectiles.remove(pi);

            // Deaths resolve after all damage from this hit is applied.
            for ei in (0..registry.enemies.len()).rev() {
                if registry.enemies[ei].hp > 0.0 {
                    continue;
                }
                let cause = if registry.enemies[ei].id == target_id {
                    DestroyCause::Projectile
                } else {
                    DestroyCause::Splash
                };
                super::destroy_enemy_at(registry, ei, cause, train, events);
            }
            continue;
        }

        // Mines can be shot down.
        let mine_hit = registry
            .mines
            .iter()
            .position(|m| circles_overlap(proj.pos, proj.hit_radius, m.pos, m.radius));
        if let Some(mi) = mine_hit {
            let mine = registry.mines.remove(mi);
            if let MineState::Attached { .. } = mine.state {
                train.clear_turn_penalty(mine.id);
            }
            registry.projectiles.remove(pi);
            continue;
        }

        if proj.traveled >= proj.range {
            registry.projectiles.remove(pi);
        }
    }
}
