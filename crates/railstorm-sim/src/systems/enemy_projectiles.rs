//! Enemy projectile system — homing flight toward the engine, range
//! expiry, train segment hits.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use railstorm_core::constants::{ENEMY_PROJECTILE_RADIUS, ENEMY_PROJECTILE_TURN_RATE};
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
    let segments = train.segments();
    let engine = train.engine();

    for pi in (0..registry.enemy_projectiles.len()).rev() {
        let proj = &mut registry.enemy_projectiles[pi];

        // Homing: re-aim at the engine's current position each frame.
        // The turn rate is capped so the initial aim spread converges
        // over the flight instead of snapping on frame one.
        let to_engine = engine.pos - proj.pos;
        if to_engine != Vec2::ZERO {
            let current = proj.vel.to_angle();
            let delta = (to_engine.to_angle() - current + PI).rem_euclid(TAU) - PI;
            let max_turn = ENEMY_PROJECTILE_TURN_RATE * dt;
            proj.vel =
                Vec2::from_angle(current + delta.clamp(-max_turn, max_turn)) * proj.vel.length();
        }

        proj.pos += proj.vel * dt;
        proj.traveled += proj.vel.length() * dt;

        let pos = proj.pos;
        let damage = proj.damage;
        let expired = proj.traveled >= proj.range;

        let hit = segments
            .iter()
            .find(|seg| circles_overlap(pos, ENEMY_PROJECTILE_RADIUS, seg.pos, seg.radius))
            .copied();

        if let Some(seg) = hit {
            if let Some(outcome) = train.apply_damage(seg.id, damage) {
                events.push(CombatEvent::SegmentHit {
                    segment: seg.id,
                    damage,
                    remaining_hp: outcome.remaining_hp,
                    destroyed: outcome.destroyed,
                    impact: pos,
                });
            }
            registry.enemy_projectiles.remove(pi);
        } else if expired {
            registry.enemy_projectiles.remove(pi);
        }
    }
}
