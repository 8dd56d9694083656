//! Combat simulation engine for RAILSTORM.
//!
//! Owns the entity registry, runs the per-frame systems in a fixed order,
//! drives the wave director, and emits `CombatEvent`s for the outer game.
//! Completely headless — no rendering or input dependency.

pub mod difficulty;
pub mod endless;
pub mod engine;
pub mod registry;
pub mod systems;

pub use engine::{CombatEngine, SimConfig};
pub use railstorm_core as core;
