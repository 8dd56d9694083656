//! Wave director — phase state machine, per-wave spawn composition,
//! elite scheduling, formations, and the independent pickup timer.
//!
//! Phase sequence is `Waiting -> Skirmish -> (Elite)? -> Waiting`
//! repeating, except in fixed mode where clearing the final wave ends at
//! the terminal `Complete` phase.

use glam::Vec2;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use railstorm_core::constants::*;
use railstorm_core::entities::ScaleFactors;
use railstorm_core::enums::{DestroyCause, EnemyKind, Formation, WavePhase};
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::types::{weighted_pick, Viewport};

use crate::difficulty::Difficulty;
use crate::endless::GameMode;
use crate::registry::EntityRegistry;

/// Wave director state, owned by the engine.
#[derive(Debug)]
pub struct WaveDirector {
    pub wave: u32,
    pub phase: WavePhase,
    /// Countdown while `Waiting`.
    pub timer_secs: f32,
    /// Elite scheduled for this wave, spawned once skirmish clears.
    pub pending_elite: Option<EnemyKind>,
    /// Elite currently alive during the `Elite` phase.
    pub active_elite: Option<EnemyKind>,
    /// Kills accumulated in the current wave (endless reward input).
    pub wave_kills: u32,
    /// Formation used by the current wave's melee batch, if any.
    pub formation: Option<Formation>,
    /// Scale factors of the current wave, reused for debug spawns.
    pub scale: ScaleFactors,
    pub victory: bool,
    pickup_timer_secs: f32,
    force_requested: bool,
}

impl Default for WaveDirector {
    fn default() -> Self {
        Self {
            wave: 0,
            phase: WavePhase::Waiting,
            timer_secs: FIRST_WAVE_DELAY_SECS,
            pending_elite: None,
            active_elite: None,
            wave_kills: 0,
            formation: None,
            scale: ScaleFactors::default(),
            victory: false,
            pickup_timer_secs: PICKUP_INTERVAL_MIN_SECS,
            force_requested: false,
        }
    }
}

impl WaveDirector {
    /// Debug fast-forward: zero the waiting timer, or force-finish the
    /// active phase on the next director run.
    pub fn force_next_wave(&mut self) {
        match self.phase {
            WavePhase::Waiting => self.timer_secs = 0.0,
            WavePhase::Skirmish | WavePhase::Elite => self.force_requested = true,
            WavePhase::Complete => {}
        }
    }
}

/// Run the director for one frame.
#[allow(clippy::too_many_arguments)]
pub fn run<T: TrainContract>(
    director: &mut WaveDirector,
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    train: &mut T,
    view: &Viewport,
    difficulty: &Difficulty,
    mode: &mut GameMode,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    run_pickups(director, rng, train, view, difficulty, events, dt);

    if director.force_requested {
        director.force_requested = false;
        force_finish_phase(director, registry, train, mode, events);
        return;
    }

    match director.phase {
        WavePhase::Waiting => {
            director.timer_secs -= dt;
            if director.timer_secs <= 0.0 {
                start_wave(director, registry, rng, train, view, difficulty, mode, events);
            }
        }
        WavePhase::Skirmish => {
            if !registry.any_enemy_of(&EnemyKind::SKIRMISH_KINDS) {
                if let Some(elite) = director.pending_elite.take() {
                    spawn_elite(director, registry, rng, train, view, elite);
                } else {
                    finish_wave(director, mode, events);
                }
            }
        }
        WavePhase::Elite => {
            let cleared = match director.active_elite {
                Some(kind) => !registry.any_enemy_of(&[kind]),
                None => true,
            };
            if cleared {
                director.active_elite = None;
                finish_wave(director, mode, events);
            }
        }
        WavePhase::Complete => {}
    }
}

/// Begin the next wave: compute scaling, composition, formation, and the
/// pending elite, then spawn everything at the view edges.
#[allow(clippy::too_many_arguments)]
fn start_wave<T: TrainContract>(
    director: &mut WaveDirector,
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    train: &T,
    view: &Viewport,
    difficulty: &Difficulty,
    mode: &mut GameMode,
    events: &mut Vec<CombatEvent>,
) {
    director.wave += 1;
    let wave = director.wave;
    director.wave_kills = 0;
    director.formation = None;

    let (melee_count, scale, elite, label) = match mode {
        GameMode::Fixed { .. } => {
            let past = (wave - 1) as f32;
            let scale = ScaleFactors {
                hp: (1.0 + past * WAVE_HP_SCALE_PER_WAVE) * difficulty.hp,
                damage: (1.0 + past * WAVE_DAMAGE_SCALE_PER_WAVE) * difficulty.damage,
                speed: (1.0 + past * WAVE_SPEED_SCALE_PER_WAVE).min(WAVE_SPEED_SCALE_MAX)
                    * difficulty.speed,
            };
            let melee = (MELEE_BASE_COUNT + (wave - 1) / MELEE_INCREASE_EVERY).min(MELEE_MAX_COUNT);
            let elite = if wave % BOSS_EVERY == 0 {
                Some(EnemyKind::Boss)
            } else if wave % CHAMPION_EVERY == 0 {
                Some(EnemyKind::Champion)
            } else {
                None
            };
            (melee, scale, elite, format!("Wave {wave}"))
        }
        GameMode::Endless(policy) => {
            let config = policy.wave_config(wave);
            let scale = ScaleFactors {
                hp: config.scale.hp * difficulty.hp,
                damage: config.scale.damage * difficulty.damage,
                speed: config.scale.speed * difficulty.speed,
            };
            let elite = if config.boss {
                Some(EnemyKind::Boss)
            } else if config.champion {
                Some(EnemyKind::Champion)
            } else if rng.gen_bool(config.elite_chance.clamp(0.0, 1.0)) {
                Some(EnemyKind::Champion)
            } else {
                None
            };
            (config.enemy_count, scale, elite, config.label)
        }
    };

    director.scale = scale;
    director.pending_elite = elite;

    let heading = train.heading();
    let padding = spawn_padding(train.segments().len());

    // Melee batch: formation layout when the batch is big enough and the
    // roll succeeds, otherwise individual scatter.
    if melee_count >= FORMATION_MIN_COUNT && rng.gen_bool(FORMATION_CHANCE) {
        let formation = Formation::ALL[rng.gen_range(0..Formation::ALL.len())];
        director.formation = Some(formation);
        spawn_formation(
            registry, rng, view, heading, padding, formation, melee_count, &scale,
        );
    } else {
        for _ in 0..melee_count {
            let pos = edge_spawn_point(rng, view, heading, padding);
            registry.spawn_enemy(EnemyKind::Skirmisher, pos, &scale);
        }
    }

    // Support kinds follow their own wave-indexed thresholds.
    let support = [
        (
            EnemyKind::Ranger,
            RANGER_START_WAVE,
            RANGER_INCREASE_EVERY,
            RANGER_MAX_COUNT,
        ),
        (
            EnemyKind::Armored,
            ARMORED_START_WAVE,
            ARMORED_INCREASE_EVERY,
            ARMORED_MAX_COUNT,
        ),
        (
            EnemyKind::Harpooner,
            HARPOONER_START_WAVE,
            HARPOONER_INCREASE_EVERY,
            HARPOONER_MAX_COUNT,
        ),
        (
            EnemyKind::Minelayer,
            MINELAYER_START_WAVE,
            MINELAYER_INCREASE_EVERY,
            MINELAYER_MAX_COUNT,
        ),
    ];
    for (kind, start, every, cap) in support {
        for _ in 0..support_count(wave, start, every, cap) {
            let pos = edge_spawn_point(rng, view, heading, padding);
            registry.spawn_enemy(kind, pos, &scale);
        }
    }

    log::debug!(
        "wave {wave} started: {melee_count} melee, elite {:?}, formation {:?}",
        director.pending_elite,
        director.formation
    );
    director.phase = WavePhase::Skirmish;
    events.push(CombatEvent::WaveStarted {
        number: wave,
        label,
    });
}

/// Wave-indexed support enemy count: none before `start`, then one more
/// every `every` waves, capped.
fn support_count(wave: u32, start: u32, every: u32, cap: u32) -> u32 {
    if wave < start {
        0
    } else {
        (1 + (wave - start) / every.max(1)).min(cap)
    }
}

fn spawn_elite<T: TrainContract>(
    director: &mut WaveDirector,
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    train: &T,
    view: &Viewport,
    elite: EnemyKind,
) {
    let padding = spawn_padding(train.segments().len());
    let pos = edge_spawn_point(rng, view, train.heading(), padding);
    registry.spawn_enemy(elite, pos, &director.scale);
    director.active_elite = Some(elite);
    director.phase = WavePhase::Elite;
    log::debug!("wave {} elite phase: {elite:?}", director.wave);
}

fn finish_wave(director: &mut WaveDirector, mode: &mut GameMode, events: &mut Vec<CombatEvent>) {
    let wave = director.wave;
    events.push(CombatEvent::WaveCompleted {
        number: wave,
        kills: director.wave_kills,
    });

    match mode {
        GameMode::Fixed { waves_to_win } => {
            if wave >= *waves_to_win {
                director.phase = WavePhase::Complete;
                director.victory = true;
                events.push(CombatEvent::RunWon { wave });
                return;
            }
        }
        GameMode::Endless(policy) => {
            policy.complete_wave(wave, director.wave_kills);
        }
    }

    director.wave_kills = 0;
    director.phase = WavePhase::Waiting;
    director.timer_secs = INTER_WAVE_DELAY_SECS;
}

/// Debug fast-forward of an active phase: despawn the phase's remaining
/// enemies and finish the wave.
fn force_finish_phase<T: TrainContract>(
    director: &mut WaveDirector,
    registry: &mut EntityRegistry,
    train: &mut T,
    mode: &mut GameMode,
    events: &mut Vec<CombatEvent>,
) {
    let kinds: Vec<EnemyKind> = match director.phase {
        WavePhase::Skirmish => EnemyKind::SKIRMISH_KINDS.to_vec(),
        WavePhase::Elite => director.active_elite.into_iter().collect(),
        _ => return,
    };
    for i in (0..registry.enemies.len()).rev() {
        if kinds.contains(&registry.enemies[i].kind) {
            super::destroy_enemy_at(registry, i, DestroyCause::Debug, train, events);
        }
    }
    director.pending_elite = None;
    director.active_elite = None;
    finish_wave(director, mode, events);
}

// --- Pickups ---

/// Independent pickup timer: not phase-gated, scaled by wave progression,
/// collected tier, and difficulty.
fn run_pickups<T: TrainContract>(
    director: &mut WaveDirector,
    rng: &mut ChaCha8Rng,
    train: &T,
    view: &Viewport,
    difficulty: &Difficulty,
    events: &mut Vec<CombatEvent>,
    dt: f32,
) {
    director.pickup_timer_secs -= dt;
    if director.pickup_timer_secs > 0.0 {
        return;
    }

    let heading = train.heading();
    let padding = spawn_padding(train.segments().len());

    if rng.gen_bool(PICKUP_CARAVAN_CHANCE) {
        spawn_pickup_caravan(rng, view, heading, padding, events);
    } else {
        // Scatter: batch shrinks as the run progresses.
        let count = if director.wave <= PICKUP_GENEROUS_UNTIL_WAVE {
            rng.gen_range(2..=3)
        } else if director.wave <= PICKUP_NORMAL_UNTIL_WAVE {
            rng.gen_range(1..=2)
        } else {
            1
        };
        for _ in 0..count {
            let drift_dir = Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU));
            events.push(CombatEvent::PickupSpawned {
                pos: edge_spawn_point(rng, view, heading, padding),
                drift: drift_dir * PICKUP_DRIFT_SPEED,
            });
        }
    }

    // Interval stretches with wave progression and collected tier, so
    // recovery stays possible without flooding a maxed-out train.
    let base = rng.gen_range(PICKUP_INTERVAL_MIN_SECS..PICKUP_INTERVAL_MAX_SECS);
    let wave_scale =
        (1.0 + director.wave as f32 * PICKUP_WAVE_SLOWDOWN_PER_WAVE).min(PICKUP_WAVE_SLOWDOWN_MAX);
    let tier_scale = 1.0 + train.max_tier().saturating_sub(1) as f32 * PICKUP_TIER_SLOWDOWN_PER_TIER;
    director.pickup_timer_secs = base * wave_scale * tier_scale / difficulty.pickup_rate.max(0.01);
}

/// Caravan batch: several pickups in a trailing line behind one anchor,
/// all drifting together.
pub(crate) fn spawn_pickup_caravan(
    rng: &mut ChaCha8Rng,
    view: &Viewport,
    heading: f32,
    padding: f32,
    events: &mut Vec<CombatEvent>,
) {
    let count = rng.gen_range(PICKUP_CARAVAN_MIN..=PICKUP_CARAVAN_MAX);
    let anchor = edge_spawn_point(rng, view, heading, padding);
    let drift_dir = Vec2::from_angle(rng.gen_range(0.0..std::f32::consts::TAU));
    for i in 0..count {
        events.push(CombatEvent::PickupSpawned {
            pos: anchor - drift_dir * (i as f32 * PICKUP_CARAVAN_SPACING),
            drift: drift_dir * PICKUP_DRIFT_SPEED,
        });
    }
}

// --- Spawn positioning ---

/// View-edge inflation: longer trains push spawns further out, capped.
fn spawn_padding(segment_count: usize) -> f32 {
    (SPAWN_PADDING_BASE + segment_count as f32 * SPAWN_PADDING_PER_SEGMENT).min(SPAWN_PADDING_MAX)
}

/// Pick a point just outside one of the four view edges. Edges whose
/// outward normal aligns with the train heading are favored, biasing
/// spawns to appear ahead of the player.
pub fn edge_spawn_point(
    rng: &mut ChaCha8Rng,
    view: &Viewport,
    train_heading: f32,
    padding: f32,
) -> Vec2 {
    let heading_dir = Vec2::from_angle(train_heading);
    let normals = [Vec2::X, Vec2::NEG_X, Vec2::Y, Vec2::NEG_Y];
    let entries: Vec<(usize, f32)> = normals
        .iter()
        .enumerate()
        .map(|(i, n)| {
            (
                i,
                1.0 + SPAWN_EDGE_HEADING_BIAS * n.dot(heading_dir).max(0.0),
            )
        })
        .collect();
    let edge = *weighted_pick(&entries, rng.gen::<f32>());

    let along_x = rng.gen_range(-view.half_width..view.half_width);
    let along_y = rng.gen_range(-view.half_height..view.half_height);
    match edge {
        0 => view.center + Vec2::new(view.half_width + padding, along_y),
        1 => view.center + Vec2::new(-(view.half_width + padding), along_y),
        2 => view.center + Vec2::new(along_x, view.half_height + padding),
        _ => view.center + Vec2::new(along_x, -(view.half_height + padding)),
    }
}

// --- Formations ---

/// Spawn a melee batch in formation. Wedge/column/line march in from one
/// anchor; pincer splits the batch across opposite sides of the view.
#[allow(clippy::too_many_arguments)]
pub(crate) fn spawn_formation(
    registry: &mut EntityRegistry,
    rng: &mut ChaCha8Rng,
    view: &Viewport,
    heading: f32,
    padding: f32,
    formation: Formation,
    count: u32,
    scale: &ScaleFactors,
) {
    let anchor = edge_spawn_point(rng, view, heading, padding);
    let inward = (view.center - anchor).normalize_or_zero();

    match formation {
        Formation::Pincer => {
            let half = count / 2;
            let mirror = view.center * 2.0 - anchor;
            for (group_anchor, group_inward, n) in [
                (anchor, inward, count - half),
                (mirror, -inward, half),
            ] {
                for offset in line_offsets(n, group_inward) {
                    registry.spawn_enemy(EnemyKind::Skirmisher, group_anchor + offset, scale);
                }
            }
        }
        _ => {
            for offset in formation_offsets(formation, count, inward) {
                registry.spawn_enemy(EnemyKind::Skirmisher, anchor + offset, scale);
            }
        }
    }
}

/// Offsets relative to the anchor for a single-group formation.
/// `inward` points from the anchor toward the view center.
pub(crate) fn formation_offsets(formation: Formation, count: u32, inward: Vec2) -> Vec<Vec2> {
    let backward = -inward;
    let lateral = inward.perp();
    let mut offsets = Vec::with_capacity(count as usize);

    match formation {
        Formation::Wedge => {
            // Tip first, then widening rows behind it.
            let mut placed = 0u32;
            let mut row = 0u32;
            while placed < count {
                let in_row = (row + 1).min(count - placed);
                for k in 0..in_row {
                    let centered = k as f32 - (in_row as f32 - 1.0) / 2.0;
                    offsets.push(
                        backward * (row as f32 * FORMATION_SPACING)
                            + lateral * centered * FORMATION_SPACING,
                    );
                }
                placed += in_row;
                row += 1;
            }
        }
        Formation::Column => {
            for i in 0..count {
                offsets.push(backward * (i as f32 * FORMATION_SPACING));
            }
        }
        Formation::Line | Formation::Pincer => {
            return line_offsets(count, inward);
        }
    }
    offsets
}

/// A line abreast, perpendicular to the approach direction.
pub(crate) fn line_offsets(count: u32, inward: Vec2) -> Vec<Vec2> {
    let lateral = inward.perp();
    (0..count)
        .map(|i| {
            let centered = i as f32 - (count as f32 - 1.0) / 2.0;
            lateral * centered * FORMATION_SPACING
        })
        .collect()
}
