//! Per-kind base stats and behavioral parameters.
//!
//! Consolidates everything the behavior FSM and the spawn path need to
//! know about an enemy kind. Wave scale factors multiply on top of these
//! at spawn time.

use railstorm_core::enums::EnemyKind;

/// Base stats and behavior tuning for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct Archetype {
    pub max_hp: f32,
    /// Movement speed (px/s).
    pub speed: f32,
    /// Contact or projectile damage.
    pub damage: f32,
    pub armor: f32,
    /// Hit circle radius.
    pub radius: f32,
    /// Ranged/tether attack trigger range (0 for pure melee).
    pub attack_range: f32,
    /// Cooldown between ranged/tether attacks.
    pub attack_cooldown: f32,
    /// Ranger: target orbital distance from the engine.
    pub orbit_distance: f32,
    /// Ranger: projectile speed.
    pub projectile_speed: f32,
    /// Ranger: max angular spread applied to a shot (radians).
    pub shot_spread: f32,
    /// Harpooner: telegraph duration before the pull.
    pub windup_secs: f32,
    /// Harpooner: drag duration.
    pub drag_secs: f32,
    /// Harpooner: drag pull strength handed to the train.
    pub drag_strength: f32,
    /// Minelayer: interval between mine drops.
    pub mine_interval: f32,
}

const MELEE_ONLY: Archetype = Archetype {
    max_hp: 0.0,
    speed: 0.0,
    damage: 0.0,
    armor: 0.0,
    radius: 0.0,
    attack_range: 0.0,
    attack_cooldown: 0.0,
    orbit_distance: 0.0,
    projectile_speed: 0.0,
    shot_spread: 0.0,
    windup_secs: 0.0,
    drag_secs: 0.0,
    drag_strength: 0.0,
    mine_interval: 0.0,
};

/// Get the base archetype for a kind.
pub fn stats(kind: EnemyKind) -> Archetype {
    match kind {
        EnemyKind::Skirmisher => Archetype {
            max_hp: 20.0,
            speed: 55.0,
            damage: 10.0,
            radius: 14.0,
            ..MELEE_ONLY
        },
        EnemyKind::Armored => Archetype {
            max_hp: 60.0,
            speed: 40.0,
            damage: 15.0,
            armor: 6.0,
            radius: 16.0,
            ..MELEE_ONLY
        },
        EnemyKind::Ranger => Archetype {
            max_hp: 25.0,
            speed: 60.0,
            damage: 6.0,
            radius: 13.0,
            attack_range: 340.0,
            attack_cooldown: 2.4,
            orbit_distance: 260.0,
            projectile_speed: 170.0,
            shot_spread: 0.12,
            ..MELEE_ONLY
        },
        EnemyKind::Harpooner => Archetype {
            max_hp: 35.0,
            speed: 50.0,
            damage: 8.0,
            armor: 2.0,
            radius: 15.0,
            attack_range: 220.0,
            attack_cooldown: 6.0,
            windup_secs: 1.2,
            drag_secs: 2.5,
            drag_strength: 90.0,
            ..MELEE_ONLY
        },
        EnemyKind::Minelayer => Archetype {
            max_hp: 45.0,
            speed: 45.0,
            damage: 10.0,
            armor: 2.0,
            radius: 16.0,
            mine_interval: 4.0,
            ..MELEE_ONLY
        },
        EnemyKind::Champion => Archetype {
            max_hp: 220.0,
            speed: 48.0,
            damage: 25.0,
            armor: 8.0,
            radius: 24.0,
            ..MELEE_ONLY
        },
        EnemyKind::Boss => Archetype {
            max_hp: 900.0,
            speed: 34.0,
            damage: 40.0,
            armor: 12.0,
            radius: 36.0,
            ..MELEE_ONLY
        },
    }
}
