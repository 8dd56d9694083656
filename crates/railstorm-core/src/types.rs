//! Fundamental geometric and simulation types.
//!
//! Positions and velocities are `glam::Vec2` in world units (pixels),
//! headings are radians with 0 pointing along +X, counter-clockwise.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Circle-circle overlap test on squared distance (no sqrt).
pub fn circles_overlap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    let r = ra + rb;
    a.distance_squared(b) <= r * r
}

/// The camera view rectangle, passed into the engine every frame.
/// Enemy and pickup spawn points are placed just outside its edges.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Vec2,
    pub half_width: f32,
    pub half_height: f32,
}

impl Viewport {
    pub fn new(center: Vec2, half_width: f32, half_height: f32) -> Self {
        Self {
            center,
            half_width,
            half_height,
        }
    }
}

/// A transient slow effect on an enemy.
///
/// Overlapping slows do not stack: a new application overwrites the
/// multiplier and extends the timer to the *longer* of the two remaining
/// durations, never the sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SlowEffect {
    /// Speed multiplier while active (1.0 = unaffected).
    pub multiplier: f32,
    /// Remaining duration in seconds.
    pub remaining_secs: f32,
}

impl Default for SlowEffect {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            remaining_secs: 0.0,
        }
    }
}

impl SlowEffect {
    /// Apply a slow of `percent` (0..=0.9) for `duration` seconds.
    pub fn apply(&mut self, percent: f32, duration: f32) {
        self.multiplier = 1.0 - percent.clamp(0.0, crate::constants::SLOW_MAX_PERCENT);
        self.remaining_secs = self.remaining_secs.max(duration);
    }

    /// Decay the effect; the multiplier snaps back to 1.0 at expiry.
    pub fn tick(&mut self, dt: f32) {
        if self.remaining_secs > 0.0 {
            self.remaining_secs -= dt;
            if self.remaining_secs <= 0.0 {
                self.remaining_secs = 0.0;
                self.multiplier = 1.0;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.remaining_secs > 0.0
    }
}

/// Weighted random pick over a slice of `(item, weight)` pairs.
///
/// Zero or negative weights are treated as ineligible. Falls back to the
/// first entry if every weight is non-positive.
pub fn weighted_pick<'a, T>(entries: &'a [(T, f32)], roll: f32) -> &'a T {
    let total: f32 = entries.iter().map(|(_, w)| w.max(0.0)).sum();
    if total <= 0.0 {
        return &entries[0].0;
    }
    let mut cursor = roll.clamp(0.0, 1.0) * total;
    for (item, weight) in entries {
        let w = weight.max(0.0);
        if cursor <= w && w > 0.0 {
            return item;
        }
        cursor -= w;
    }
    &entries[entries.len() - 1].0
}
