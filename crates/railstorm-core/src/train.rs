//! The train contract — the combat core's only window onto the player.
//!
//! The core never mutates train fields directly; damage, drag, and turn
//! penalties all go through this trait so the train module keeps sole
//! ownership of its own state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::WeaponColor;

/// Read-side view of one train segment (engine or car).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TrainSegment {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    /// Weapon color for weapon cars; `None` for the engine and cargo cars.
    pub color: Option<WeaponColor>,
    /// Weapon tier (1-based) for weapon cars; 0 otherwise.
    pub tier: u32,
    pub is_engine: bool,
}

/// Result of applying damage to a segment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub remaining_hp: f32,
    pub destroyed: bool,
}

/// Operations the combat core consumes from the train collaborator.
///
/// Drag and turn-penalty effects are keyed by a source id (harpooner or
/// mine id) so overlapping effects from different enemies release
/// independently.
pub trait TrainContract {
    /// Every live segment, engine first, in train order.
    fn segments(&self) -> Vec<TrainSegment>;

    /// Weapon-bearing cars only, in train order.
    fn weapon_cars(&self) -> Vec<TrainSegment>;

    /// The engine segment.
    fn engine(&self) -> TrainSegment;

    /// Engine heading in radians (0 = +X, counter-clockwise).
    fn heading(&self) -> f32;

    /// Look up a segment by id. `None` once the segment is destroyed.
    fn segment_by_id(&self, id: u32) -> Option<TrainSegment>;

    /// Highest weapon tier currently on the train (0 when unarmed).
    fn max_tier(&self) -> u32;

    /// Apply damage to a segment. `None` if the segment no longer exists.
    fn apply_damage(&mut self, segment: u32, amount: f32) -> Option<DamageOutcome>;

    /// Apply a timed pull on a car toward `toward`.
    fn apply_drag(&mut self, car: u32, toward: Vec2, strength: f32, duration_secs: f32);

    /// Release any drag on a car (no-op if none is active).
    fn clear_drag(&mut self, car: u32);

    /// Apply a turn-rate penalty keyed by `source`.
    fn apply_turn_penalty(&mut self, source: u32, factor: f32);

    /// Release the turn penalty keyed by `source` (no-op if absent).
    fn clear_turn_penalty(&mut self, source: u32);
}
