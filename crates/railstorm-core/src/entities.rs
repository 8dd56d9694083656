//! Entity records owned by the registry.
//!
//! Records are plain data; per-frame logic lives in the sim systems and
//! the behavior crate, not here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{EnemyKind, TetherPhase, WeaponColor};
use crate::types::SlowEffect;

/// Harpooner tether sub-state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TetherState {
    pub phase: TetherPhase,
    /// Countdown for the current phase (windup or drag).
    pub timer_secs: f32,
    /// Target car id while winding up or dragging.
    pub target_car: Option<u32>,
}

/// A live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub pos: Vec2,
    /// Facing in radians (0 = +X, counter-clockwise).
    pub heading: f32,
    pub hp: f32,
    pub max_hp: f32,
    /// Base stats, wave scale factors already applied at spawn.
    pub speed: f32,
    pub damage: f32,
    pub armor: f32,
    pub radius: f32,
    pub slow: SlowEffect,
    /// Ranged / tether attack cooldown.
    pub attack_cooldown: f32,
    pub tether: TetherState,
    /// Minelayer drop countdown.
    pub mine_timer: f32,
    /// Orbit direction for rangers: +1 or -1, assigned by id parity.
    pub orbit_dir: f32,
}

/// A player-fired projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub color: WeaponColor,
    pub tier: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub traveled: f32,
    pub range: f32,
    pub damage: f32,
    /// Slow on hit: 0.0 means none.
    pub slow_percent: f32,
    pub slow_duration: f32,
    /// Armor pierce fraction in [0, 0.9]; 0.0 means none.
    pub armor_pierce: f32,
    /// Splash on hit: 0.0 radius means none.
    pub splash_radius: f32,
    pub splash_damage: f32,
    pub hit_radius: f32,
}

/// An enemy-fired projectile. Simpler than the player's: flat damage,
/// no splash or pierce, hits train segments only. `vel` is re-aimed at
/// the engine each frame by the sim (turn-rate-capped homing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyProjectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub traveled: f32,
    pub range: f32,
    pub damage: f32,
    /// Visual tint for the presentation layer.
    pub color_tag: EnemyKind,
}

/// Mine lifecycle: drifts until it touches a segment, then clamps on.
/// The drifting -> attached transition happens at most once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MineState {
    Drifting {
        vel: Vec2,
        /// Remaining drift lifetime before the mine fizzles.
        lifetime_secs: f32,
    },
    Attached {
        car: u32,
        /// Offset from the car recorded at attach time.
        offset: Vec2,
        /// Remaining clamp duration; the mine detonates away at zero.
        timer_secs: f32,
    },
}

/// A mine laid by a minelayer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mine {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub state: MineState,
}

impl Mine {
    pub fn is_attached(&self) -> bool {
        matches!(self.state, MineState::Attached { .. })
    }
}

/// Per-wave multipliers applied to a freshly spawned enemy's base stats.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleFactors {
    pub hp: f32,
    pub damage: f32,
    pub speed: f32,
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self {
            hp: 1.0,
            damage: 1.0,
            speed: 1.0,
        }
    }
}
