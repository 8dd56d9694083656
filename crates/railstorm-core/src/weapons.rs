//! Weapon resolver — per-color tier tables and the engine's derived weapon.
//!
//! Profiles are computed on every query and never stored, so a bonus or
//! tier change takes effect on the next shot.

use crate::constants::{ARMOR_PIERCE_MAX, ENGINE_TIER2_COUNT, ENGINE_TIER3_COUNT, SLOW_MAX_PERCENT};
use crate::enums::{FireSource, WeaponColor};
use crate::train::TrainSegment;
use serde::{Deserialize, Serialize};

/// A resolved weapon stat profile. Optional effects are explicit
/// zero-valued fields, not missing ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    /// Shots per second.
    pub fire_rate: f32,
    pub damage: f32,
    pub range: f32,
    pub projectile_speed: f32,
    /// Slow applied on hit (0.0 = none).
    pub slow_percent: f32,
    pub slow_duration: f32,
    /// Armor pierce fraction in [0, 0.9].
    pub armor_pierce: f32,
    /// Splash applied around the impact point (0.0 radius = none).
    pub splash_radius: f32,
    pub splash_damage: f32,
    pub hit_radius: f32,
}

impl WeaponProfile {
    /// Seconds between shots.
    pub fn shot_interval(&self) -> f32 {
        1.0 / self.fire_rate.max(0.01)
    }
}

/// Global bonus multipliers, settable by buff/difficulty systems.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BonusMultipliers {
    pub damage: f32,
    pub fire_rate: f32,
    pub range: f32,
}

impl Default for BonusMultipliers {
    fn default() -> Self {
        Self {
            damage: 1.0,
            fire_rate: 1.0,
            range: 1.0,
        }
    }
}

/// A weapon profile resolved for a specific firing source.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolvedWeapon {
    pub color: WeaponColor,
    pub tier: u32,
    pub source: FireSource,
    pub profile: WeaponProfile,
}

/// The fixed 3-tier table for a color. Rows are tiers 1..=3.
fn tier_table(color: WeaponColor) -> [WeaponProfile; 3] {
    use crate::constants::PLAYER_PROJECTILE_RADIUS as HIT_R;
    let base = WeaponProfile {
        fire_rate: 1.0,
        damage: 0.0,
        range: 0.0,
        projectile_speed: 320.0,
        slow_percent: 0.0,
        slow_duration: 0.0,
        armor_pierce: 0.0,
        splash_radius: 0.0,
        splash_damage: 0.0,
        hit_radius: HIT_R,
    };
    match color {
        // Cannon: heavy shells, area damage.
        WeaponColor::Red => [
            WeaponProfile {
                fire_rate: 0.8,
                damage: 14.0,
                range: 240.0,
                splash_radius: 40.0,
                splash_damage: 6.0,
                ..base
            },
            WeaponProfile {
                fire_rate: 0.9,
                damage: 22.0,
                range: 260.0,
                splash_radius: 55.0,
                splash_damage: 10.0,
                ..base
            },
            WeaponProfile {
                fire_rate: 1.0,
                damage: 30.0,
                range: 280.0,
                splash_radius: 70.0,
                splash_damage: 14.0,
                ..base
            },
        ],
        // Frost: light damage, slows the target.
        WeaponColor::Blue => [
            WeaponProfile {
                fire_rate: 1.2,
                damage: 6.0,
                range: 220.0,
                slow_percent: 0.25,
                slow_duration: 1.5,
                ..base
            },
            WeaponProfile {
                fire_rate: 1.4,
                damage: 9.0,
                range: 240.0,
                slow_percent: 0.35,
                slow_duration: 2.0,
                ..base
            },
            WeaponProfile {
                fire_rate: 1.6,
                damage: 12.0,
                range: 260.0,
                slow_percent: 0.45,
                slow_duration: 2.5,
                ..base
            },
        ],
        // Gatling: stream of small rounds.
        WeaponColor::Yellow => [
            WeaponProfile {
                fire_rate: 3.0,
                damage: 4.0,
                range: 200.0,
                projectile_speed: 380.0,
                ..base
            },
            WeaponProfile {
                fire_rate: 3.8,
                damage: 6.0,
                range: 220.0,
                projectile_speed: 380.0,
                ..base
            },
            WeaponProfile {
                fire_rate: 4.6,
                damage: 8.0,
                range: 240.0,
                projectile_speed: 380.0,
                ..base
            },
        ],
        // Rail: long range, punches through armor.
        WeaponColor::Purple => [
            WeaponProfile {
                fire_rate: 0.7,
                damage: 10.0,
                range: 300.0,
                projectile_speed: 450.0,
                armor_pierce: 0.5,
                ..base
            },
            WeaponProfile {
                fire_rate: 0.8,
                damage: 16.0,
                range: 330.0,
                projectile_speed: 450.0,
                armor_pierce: 0.7,
                ..base
            },
            WeaponProfile {
                fire_rate: 0.9,
                damage: 22.0,
                range: 360.0,
                projectile_speed: 450.0,
                armor_pierce: 0.9,
                ..base
            },
        ],
    }
}

/// Resolve the stat profile for a color at a tier (1-based).
///
/// Tiers past 3 extrapolate every numeric field linearly using the
/// tier-3 minus tier-2 delta; slow and pierce clamp to [0, 0.9].
pub fn stats_for_tier(color: WeaponColor, tier: u32) -> WeaponProfile {
    let table = tier_table(color);
    let tier = tier.max(1);
    if tier <= 3 {
        return table[(tier - 1) as usize];
    }

    let t2 = &table[1];
    let t3 = &table[2];
    let steps = (tier - 3) as f32;
    let extrapolate = |last: f32, prev: f32| last + (last - prev) * steps;

    WeaponProfile {
        fire_rate: extrapolate(t3.fire_rate, t2.fire_rate).max(0.1),
        damage: extrapolate(t3.damage, t2.damage).max(0.0),
        range: extrapolate(t3.range, t2.range).max(0.0),
        projectile_speed: extrapolate(t3.projectile_speed, t2.projectile_speed).max(1.0),
        slow_percent: extrapolate(t3.slow_percent, t2.slow_percent).clamp(0.0, SLOW_MAX_PERCENT),
        slow_duration: extrapolate(t3.slow_duration, t2.slow_duration).max(0.0),
        armor_pierce: extrapolate(t3.armor_pierce, t2.armor_pierce).clamp(0.0, ARMOR_PIERCE_MAX),
        splash_radius: extrapolate(t3.splash_radius, t2.splash_radius).max(0.0),
        splash_damage: extrapolate(t3.splash_damage, t2.splash_damage).max(0.0),
        hit_radius: t3.hit_radius,
    }
}

/// Apply global bonus multipliers to a profile.
pub fn apply_bonus(mut profile: WeaponProfile, bonus: &BonusMultipliers) -> WeaponProfile {
    profile.damage *= bonus.damage;
    profile.splash_damage *= bonus.damage;
    profile.fire_rate *= bonus.fire_rate;
    profile.range *= bonus.range;
    profile
}

/// Resolve a weapon car's profile with bonuses applied.
pub fn car_weapon(color: WeaponColor, tier: u32, bonus: &BonusMultipliers) -> ResolvedWeapon {
    ResolvedWeapon {
        color,
        tier,
        source: FireSource::Car,
        profile: apply_bonus(stats_for_tier(color, tier), bonus),
    }
}

/// The color with the highest car count. Ties break to the color of the
/// earliest car (in train order) among the tied colors — not alphabetical.
pub fn dominant_color(cars: &[TrainSegment]) -> Option<(WeaponColor, u32)> {
    let mut counts: [(WeaponColor, u32); 4] = WeaponColor::ALL.map(|c| (c, 0));
    for car in cars {
        if let Some(color) = car.color {
            for entry in counts.iter_mut() {
                if entry.0 == color {
                    entry.1 += 1;
                }
            }
        }
    }
    let best = counts.iter().map(|&(_, n)| n).max()?;
    if best == 0 {
        return None;
    }
    // Scan cars in order; the first car whose color holds the max count
    // decides the tie.
    for car in cars {
        if let Some(color) = car.color {
            let count = counts.iter().find(|(c, _)| *c == color).map(|(_, n)| *n)?;
            if count == best {
                return Some((color, best));
            }
        }
    }
    None
}

/// The engine's own auto-fired weapon, derived from the car composition.
/// `None` when the train carries no weapon cars.
pub fn engine_weapon(cars: &[TrainSegment], bonus: &BonusMultipliers) -> Option<ResolvedWeapon> {
    let (color, count) = dominant_color(cars)?;
    let tier = if count >= ENGINE_TIER3_COUNT {
        3
    } else if count >= ENGINE_TIER2_COUNT {
        2
    } else {
        1
    };
    Some(ResolvedWeapon {
        color,
        tier,
        source: FireSource::Engine,
        profile: apply_bonus(stats_for_tier(color, tier), bonus),
    })
}
