//! Difficulty collaborator — numeric multipliers consumed by the wave
//! director and spawn path.

use serde::{Deserialize, Serialize};

/// Global difficulty multipliers. All default to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Difficulty {
    /// Enemy HP multiplier.
    pub hp: f32,
    /// Enemy damage multiplier.
    pub damage: f32,
    /// Enemy speed multiplier.
    pub speed: f32,
    /// Pickup spawn rate multiplier (higher = more frequent).
    pub pickup_rate: f32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            hp: 1.0,
            damage: 1.0,
            speed: 1.0,
            pickup_rate: 1.0,
        }
    }
}

impl Difficulty {
    pub fn easy() -> Self {
        Self {
            hp: 0.8,
            damage: 0.75,
            speed: 0.9,
            pickup_rate: 1.25,
        }
    }

    pub fn normal() -> Self {
        Self::default()
    }

    pub fn hard() -> Self {
        Self {
            hp: 1.3,
            damage: 1.25,
            speed: 1.1,
            pickup_rate: 0.8,
        }
    }
}
