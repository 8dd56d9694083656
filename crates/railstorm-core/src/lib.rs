//! Core types and definitions for the RAILSTORM combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity records, enums, events, the train contract, the weapon resolver,
//! and tuning constants. It has no dependency on any rendering or
//! windowing framework.

pub mod constants;
pub mod entities;
pub mod enums;
pub mod events;
pub mod train;
pub mod types;
pub mod weapons;

#[cfg(test)]
mod tests;
