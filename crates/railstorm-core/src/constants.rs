//! Simulation constants and tuning parameters.
//!
//! World units are pixels; durations are seconds; speeds are pixels/second.

// --- Damage & effects ---

/// Upper clamp for slow percent and armor pierce (tier extrapolation can
/// otherwise push them past full effect).
pub const SLOW_MAX_PERCENT: f32 = 0.9;

/// Upper clamp for armor pierce fraction.
pub const ARMOR_PIERCE_MAX: f32 = 0.9;

// --- Engine weapon ---

/// Dominant-color car count needed for the engine weapon to reach tier 2.
pub const ENGINE_TIER2_COUNT: u32 = 3;

/// Dominant-color car count needed for the engine weapon to reach tier 3.
pub const ENGINE_TIER3_COUNT: u32 = 5;

// --- Wave pacing ---

/// Countdown before the very first wave.
pub const FIRST_WAVE_DELAY_SECS: f32 = 5.0;

/// Countdown between waves.
pub const INTER_WAVE_DELAY_SECS: f32 = 6.0;

/// Fixed-length mode: surviving this wave wins the run.
pub const WAVES_TO_WIN: u32 = 30;

/// A boss elite spawns every Nth wave.
pub const BOSS_EVERY: u32 = 10;

/// A champion elite spawns every Mth wave (boss waves take precedence).
pub const CHAMPION_EVERY: u32 = 5;

// --- Per-wave enemy counts ---

/// Base melee (skirmisher) count on wave 1.
pub const MELEE_BASE_COUNT: u32 = 4;

/// Additional skirmishers every N waves.
pub const MELEE_INCREASE_EVERY: u32 = 1;

/// Skirmisher count cap.
pub const MELEE_MAX_COUNT: u32 = 24;

/// Ranger: first wave, increase interval, cap.
pub const RANGER_START_WAVE: u32 = 3;
pub const RANGER_INCREASE_EVERY: u32 = 3;
pub const RANGER_MAX_COUNT: u32 = 5;

/// Armored: first wave, increase interval, cap.
pub const ARMORED_START_WAVE: u32 = 4;
pub const ARMORED_INCREASE_EVERY: u32 = 3;
pub const ARMORED_MAX_COUNT: u32 = 6;

/// Harpooner: first wave, increase interval, cap.
pub const HARPOONER_START_WAVE: u32 = 6;
pub const HARPOONER_INCREASE_EVERY: u32 = 4;
pub const HARPOONER_MAX_COUNT: u32 = 3;

/// Minelayer: first wave, increase interval, cap.
pub const MINELAYER_START_WAVE: u32 = 8;
pub const MINELAYER_INCREASE_EVERY: u32 = 4;
pub const MINELAYER_MAX_COUNT: u32 = 3;

// --- Per-wave stat scaling (fixed mode) ---

/// Enemy HP multiplier gained per wave past the first.
pub const WAVE_HP_SCALE_PER_WAVE: f32 = 0.12;

/// Enemy damage multiplier gained per wave past the first.
pub const WAVE_DAMAGE_SCALE_PER_WAVE: f32 = 0.06;

/// Enemy speed multiplier gained per wave past the first.
pub const WAVE_SPEED_SCALE_PER_WAVE: f32 = 0.02;

/// Speed scaling cap (faster than this stops being dodgeable).
pub const WAVE_SPEED_SCALE_MAX: f32 = 1.5;

// --- Formations ---

/// Minimum melee batch size before a formation layout is considered.
pub const FORMATION_MIN_COUNT: u32 = 6;

/// Chance that a qualifying batch spawns in formation instead of scattered.
pub const FORMATION_CHANCE: f64 = 0.35;

/// Spacing between enemies inside a formation.
pub const FORMATION_SPACING: f32 = 36.0;

// --- Spawn positioning ---

/// Base inflation of the camera rect for edge spawn points.
pub const SPAWN_PADDING_BASE: f32 = 60.0;

/// Extra padding per train segment (longer trains see further).
pub const SPAWN_PADDING_PER_SEGMENT: f32 = 8.0;

/// Padding cap.
pub const SPAWN_PADDING_MAX: f32 = 160.0;

/// How strongly the edge ahead of the train is favored for spawns.
pub const SPAWN_EDGE_HEADING_BIAS: f32 = 3.0;

// --- Pickups ---

/// Randomized pickup interval bounds (seconds, before scaling).
pub const PICKUP_INTERVAL_MIN_SECS: f32 = 6.0;
pub const PICKUP_INTERVAL_MAX_SECS: f32 = 11.0;

/// Interval growth per wave and its cap.
pub const PICKUP_WAVE_SLOWDOWN_PER_WAVE: f32 = 0.03;
pub const PICKUP_WAVE_SLOWDOWN_MAX: f32 = 2.0;

/// Interval growth per collected weapon tier above 1.
pub const PICKUP_TIER_SLOWDOWN_PER_TIER: f32 = 0.15;

/// Wave numbers bounding the "generous" and "normal" pickup batch sizes.
pub const PICKUP_GENEROUS_UNTIL_WAVE: u32 = 4;
pub const PICKUP_NORMAL_UNTIL_WAVE: u32 = 10;

/// Pickup drift speed.
pub const PICKUP_DRIFT_SPEED: f32 = 18.0;

/// Chance a pickup batch spawns as a trailing caravan line.
pub const PICKUP_CARAVAN_CHANCE: f64 = 0.2;

/// Caravan size bounds and spacing along the drift direction.
pub const PICKUP_CARAVAN_MIN: u32 = 3;
pub const PICKUP_CARAVAN_MAX: u32 = 5;
pub const PICKUP_CARAVAN_SPACING: f32 = 40.0;

// --- Mines ---

/// Drifting mine lifetime before it fizzles.
pub const MINE_LIFETIME_SECS: f32 = 12.0;

/// How long an attached mine clamps a car.
pub const MINE_CLAMP_SECS: f32 = 5.0;

/// Turn-rate penalty factor applied to the train while clamped.
pub const MINE_TURN_PENALTY: f32 = 0.45;

/// Mine hit circle radius.
pub const MINE_RADIUS: f32 = 10.0;

/// Initial drift speed of a dropped mine (opposite the layer's heading).
pub const MINE_DRIFT_SPEED: f32 = 30.0;

/// Drop offset behind the minelayer.
pub const MINE_DROP_OFFSET: f32 = 24.0;

// --- Enemy projectiles ---

/// Enemy projectile flight range.
pub const ENEMY_PROJECTILE_RANGE: f32 = 420.0;

/// Enemy projectile hit circle radius.
pub const ENEMY_PROJECTILE_RADIUS: f32 = 5.0;

/// Homing turn rate for enemy projectiles (radians/second).
pub const ENEMY_PROJECTILE_TURN_RATE: f32 = 2.5;

// --- Player projectiles ---

/// Player projectile hit circle radius.
pub const PLAYER_PROJECTILE_RADIUS: f32 = 6.0;

// --- Ranger orbit ---

/// Blend weights for the orbit steering force.
pub const ORBIT_TANGENTIAL_WEIGHT: f32 = 1.0;
pub const ORBIT_RADIAL_WEIGHT: f32 = 1.4;

/// Radial distance error is clamped to this before scaling.
pub const ORBIT_ERROR_CLAMP: f32 = 60.0;

// --- Endless mode ---

/// Default champion chance per wave when an endless policy supplies only a
/// probability.
pub const ENDLESS_DEFAULT_ELITE_CHANCE: f64 = 0.15;
