//! Combat engine — the core of the game.
//!
//! `CombatEngine` owns the entity registry and the wave director, runs
//! all systems once per `update`, and returns the frame's events.
//! Completely headless (no rendering dependency), enabling deterministic
//! testing against a mock train.

use std::collections::HashMap;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use railstorm_core::enums::{EnemyKind, WavePhase};
use railstorm_core::events::CombatEvent;
use railstorm_core::train::TrainContract;
use railstorm_core::types::Viewport;
use railstorm_core::weapons::BonusMultipliers;

use crate::difficulty::Difficulty;
use crate::endless::GameMode;
use crate::registry::EntityRegistry;
use crate::systems;
use crate::systems::director::WaveDirector;

/// Configuration for starting a new run.
pub struct SimConfig {
    /// RNG seed. Same seed = same spawn sequence.
    pub seed: u64,
    pub difficulty: Difficulty,
    pub mode: GameMode,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            difficulty: Difficulty::default(),
            mode: GameMode::fixed_default(),
        }
    }
}

/// The combat engine. Owns all enemy/projectile/mine state and the wave
/// director for one run.
pub struct CombatEngine {
    registry: EntityRegistry,
    director: WaveDirector,
    rng: ChaCha8Rng,
    events: Vec<CombatEvent>,
    bonus: BonusMultipliers,
    difficulty: Difficulty,
    mode: GameMode,
    car_cooldowns: HashMap<u32, f32>,
    engine_cooldown: f32,
    pending_debug_spawns: Vec<(EnemyKind, u32)>,
}

impl CombatEngine {
    pub fn new(config: SimConfig) -> Self {
        Self {
            registry: EntityRegistry::new(),
            director: WaveDirector::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
            bonus: BonusMultipliers::default(),
            difficulty: config.difficulty,
            mode: config.mode,
            car_cooldowns: HashMap::new(),
            engine_cooldown: 0.0,
            pending_debug_spawns: Vec::new(),
        }
    }

    /// Advance the simulation by `dt` seconds and return the frame's
    /// events. System order is fixed: director, enemies, player
    /// projectiles, enemy projectiles, mines, auto-fire — an enemy
    /// removed by an earlier system is invisible to the later ones.
    pub fn update<T: TrainContract>(
        &mut self,
        dt: f32,
        train: &mut T,
        view: &Viewport,
    ) -> Vec<CombatEvent> {
        self.process_debug_spawns(train, view);

        systems::director::run(
            &mut self.director,
            &mut self.registry,
            &mut self.rng,
            train,
            view,
            &self.difficulty,
            &mut self.mode,
            &mut self.events,
            dt,
        );
        systems::enemies::run(
            &mut self.registry,
            train,
            &mut self.rng,
            &mut self.events,
            dt,
        );
        systems::projectiles::run(&mut self.registry, train, &mut self.events, dt);
        systems::enemy_projectiles::run(&mut self.registry, train, &mut self.events, dt);
        systems::mines::run(&mut self.registry, train, &mut self.events, dt);
        systems::firing::run(
            &mut self.registry,
            train,
            &self.bonus,
            &mut self.car_cooldowns,
            &mut self.engine_cooldown,
            &mut self.events,
            dt,
        );

        // Per-wave kill accounting feeds the endless reward sink.
        self.director.wave_kills += self
            .events
            .iter()
            .filter(|e| {
                matches!(e, CombatEvent::EnemyDestroyed { cause, .. }
                    if *cause != railstorm_core::enums::DestroyCause::Debug)
            })
            .count() as u32;

        std::mem::take(&mut self.events)
    }

    /// Start a fresh run: collections emptied, ids back to 1, director
    /// rewound, RNG reseeded.
    pub fn reset(&mut self, config: SimConfig) {
        self.registry.reset();
        self.director = WaveDirector::default();
        self.rng = ChaCha8Rng::seed_from_u64(config.seed);
        self.events.clear();
        self.difficulty = config.difficulty;
        self.mode = config.mode;
        self.car_cooldowns.clear();
        self.engine_cooldown = 0.0;
        self.pending_debug_spawns.clear();
    }

    // --- Accessors ---

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn wave(&self) -> u32 {
        self.director.wave
    }

    pub fn wave_phase(&self) -> WavePhase {
        self.director.phase
    }

    pub fn victory(&self) -> bool {
        self.director.victory
    }

    pub fn bonus_multipliers(&self) -> BonusMultipliers {
        self.bonus
    }

    /// Settable by buff/difficulty systems; applies from the next shot.
    pub fn set_bonus_multipliers(&mut self, bonus: BonusMultipliers) {
        self.bonus = bonus;
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Mutable registry access for scenario tests.
    #[cfg(test)]
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Mutable director access for scenario tests.
    #[cfg(test)]
    pub fn director_mut(&mut self) -> &mut WaveDirector {
        &mut self.director
    }

    // --- Debug operations ---

    /// Force-spawn `count` basic enemies at the view edges next frame.
    pub fn debug_spawn_basic(&mut self, count: u32) {
        self.pending_debug_spawns.push((EnemyKind::Skirmisher, count));
    }

    /// Force-spawn one enemy of `kind` at a view edge next frame.
    pub fn debug_spawn_kind(&mut self, kind: EnemyKind) {
        self.pending_debug_spawns.push((kind, 1));
    }

    /// Debug fast-forward: zero the wave wait or force-finish the active
    /// phase.
    pub fn force_next_wave(&mut self) {
        self.director.force_next_wave();
    }

    fn process_debug_spawns<T: TrainContract>(&mut self, train: &T, view: &Viewport) {
        if self.pending_debug_spawns.is_empty() {
            return;
        }
        let heading = train.heading();
        let scale = self.director.scale;
        for (kind, count) in std::mem::take(&mut self.pending_debug_spawns) {
            for _ in 0..count {
                let pos =
                    systems::director::edge_spawn_point(&mut self.rng, view, heading, 80.0);
                let id = self.registry.spawn_enemy(kind, pos, &scale);
                log::debug!("debug spawn: {kind:?} id {id}");
            }
        }
    }
}
