//! Events emitted by the simulation for the presentation layer and the
//! run-stats collaborator.
//!
//! Events accumulate during `update()` and are returned to the caller at
//! the end of the frame, each fired at most once per occurrence.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::{DestroyCause, EnemyKind, FireSource, WeaponColor};

/// All events the combat core can emit in a frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    /// An enemy was destroyed (after any splash/on-death effects resolved).
    EnemyDestroyed {
        id: u32,
        kind: EnemyKind,
        pos: Vec2,
        cause: DestroyCause,
    },
    /// A train segment took damage.
    SegmentHit {
        segment: u32,
        damage: f32,
        remaining_hp: f32,
        destroyed: bool,
        impact: Vec2,
    },
    /// A car or the engine fired its weapon.
    WeaponFired {
        color: WeaponColor,
        source: FireSource,
        tier: u32,
        segment: u32,
    },
    /// A ranger fired at the engine.
    EnemyWeaponFired { enemy: u32, kind: EnemyKind },
    /// A mine clamped onto a car.
    MineAttached { mine: u32, car: u32 },
    /// A pickup should appear (pickup entities belong to the outer game).
    PickupSpawned { pos: Vec2, drift: Vec2 },
    /// A new wave began.
    WaveStarted { number: u32, label: String },
    /// A wave's last enemy died.
    WaveCompleted { number: u32, kills: u32 },
    /// Fixed-length mode: the final wave was cleared.
    RunWon { wave: u32 },
}
