//! Enemy AI for RAILSTORM.
//!
//! Implements per-kind behavior state machines and the archetype stat
//! table. Pure functions over plain data — no registry or RNG dependency,
//! which keeps every behavior testable in isolation.

pub mod archetypes;
pub mod behavior;

pub use railstorm_core as core;

#[cfg(test)]
mod tests;
