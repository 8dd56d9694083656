//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. A closed set: behavior dispatch is a `match`, so an
/// unknown kind is unrepresentable rather than a runtime fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Fast melee chaser, dies on contact with the train.
    Skirmisher,
    /// Slow, armored melee unit that heads for the engine.
    Armored,
    /// Keeps an orbital distance from the engine and snipes at it.
    Ranger,
    /// Tethers a car and drags it off course.
    Harpooner,
    /// Melee chaser that drops drifting mines behind itself.
    Minelayer,
    /// Mid-run elite: a large melee unit.
    Champion,
    /// End-of-cycle elite: very large, targets the engine.
    Boss,
}

impl EnemyKind {
    /// Kinds spawned as part of a regular wave (everything except elites).
    pub const SKIRMISH_KINDS: [EnemyKind; 5] = [
        EnemyKind::Skirmisher,
        EnemyKind::Armored,
        EnemyKind::Ranger,
        EnemyKind::Harpooner,
        EnemyKind::Minelayer,
    ];

    pub fn is_elite(self) -> bool {
        matches!(self, EnemyKind::Champion | EnemyKind::Boss)
    }
}

/// Wave director phase. Transitions only move forward except the
/// `Waiting -> Skirmish` loop; `Complete` is terminal (fixed mode only).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WavePhase {
    #[default]
    Waiting,
    Skirmish,
    Elite,
    Complete,
}

/// Harpooner tether state machine phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TetherPhase {
    /// Chasing / scanning for a target car.
    #[default]
    Idle,
    /// Target acquired, telegraph drawn, countdown to the pull.
    Windup,
    /// Drag force active on the target car.
    Drag,
}

/// Weapon car color. Each color is a weapon family with its own 3-tier
/// stat table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponColor {
    /// Cannon: slow, heavy shells with splash damage.
    Red,
    /// Frost: light damage plus a slow effect.
    Blue,
    /// Gatling: rapid fire, low per-shot damage.
    Yellow,
    /// Rail: long range with armor pierce.
    Purple,
}

impl WeaponColor {
    pub const ALL: [WeaponColor; 4] = [
        WeaponColor::Red,
        WeaponColor::Blue,
        WeaponColor::Yellow,
        WeaponColor::Purple,
    ];
}

/// Which part of the train fired a player projectile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireSource {
    Car,
    Engine,
}

/// Geometric spawn layout for a batch of melee enemies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formation {
    Wedge,
    Column,
    Line,
    /// Two half-groups on opposite sides of the view.
    Pincer,
}

impl Formation {
    pub const ALL: [Formation; 4] = [
        Formation::Wedge,
        Formation::Column,
        Formation::Line,
        Formation::Pincer,
    ];
}

/// What destroyed an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DestroyCause {
    /// Direct projectile hit.
    Projectile,
    /// Caught in splash radius.
    Splash,
    /// Melee contact with a train segment (self-destruct).
    Contact,
    /// Removed by debug tooling or a run reset.
    Debug,
}
