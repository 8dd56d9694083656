//! Entity registry — exclusive owner of all enemy, projectile, and mine
//! records for their lifetime.
//!
//! Ids are monotonic per record kind, start at 1, and are never reused
//! within a run; `reset()` (new run) clears everything and restarts the
//! counters. Removal always splices out of the backing `Vec` — callers
//! that remove while iterating do so by reverse index so neighbors are
//! never skipped.

use glam::Vec2;

use railstorm_core::constants::*;
use railstorm_core::entities::{Enemy, EnemyProjectile, Mine, MineState, Projectile, ScaleFactors};
use railstorm_core::entities::TetherState;
use railstorm_core::enums::EnemyKind;
use railstorm_core::types::SlowEffect;
use railstorm_core::weapons::ResolvedWeapon;

use railstorm_ai::archetypes;

/// Backing storage for all live combat entities.
#[derive(Debug, Default)]
pub struct EntityRegistry {
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub enemy_projectiles: Vec<EnemyProjectile>,
    pub mines: Vec<Mine>,
    next_enemy_id: u32,
    next_projectile_id: u32,
    next_enemy_projectile_id: u32,
    next_mine_id: u32,
}

impl EntityRegistry {
    pub fn new() -> Self {
        let mut registry = Self::default();
        registry.reset();
        registry
    }

    /// Start a fresh run: empty collections, counters back to 1.
    pub fn reset(&mut self) {
        self.enemies.clear();
        self.projectiles.clear();
        self.enemy_projectiles.clear();
        self.mines.clear();
        self.next_enemy_id = 1;
        self.next_projectile_id = 1;
        self.next_enemy_projectile_id = 1;
        self.next_mine_id = 1;
    }

    /// Spawn an enemy of `kind` at `pos` with wave scaling applied.
    /// Returns the new enemy's id.
    pub fn spawn_enemy(&mut self, kind: EnemyKind, pos: Vec2, scale: &ScaleFactors) -> u32 {
        let arch = archetypes::stats(kind);
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;

        let max_hp = arch.max_hp * scale.hp;
        self.enemies.push(Enemy {
            id,
            kind,
            pos,
            heading: 0.0,
            hp: max_hp,
            max_hp,
            speed: arch.speed * scale.speed,
            damage: arch.damage * scale.damage,
            armor: arch.armor,
            radius: arch.radius,
            slow: SlowEffect::default(),
            attack_cooldown: arch.attack_cooldown,
            tether: TetherState::default(),
            mine_timer: arch.mine_interval,
            // Alternate orbit direction by id parity so rangers split
            // evenly around the train.
            orbit_dir: if id % 2 == 0 { 1.0 } else { -1.0 },
        });
        id
    }

    /// Spawn a player projectile from `origin` toward `target`.
    pub fn spawn_projectile(&mut self, origin: Vec2, target: Vec2, weapon: &ResolvedWeapon) -> u32 {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;

        let profile = &weapon.profile;
        let dir = (target - origin).normalize_or_zero();
        self.projectiles.push(Projectile {
            id,
            color: weapon.color,
            tier: weapon.tier,
            pos: origin,
            vel: dir * profile.projectile_speed,
            traveled: 0.0,
            range: profile.range,
            damage: profile.damage,
            slow_percent: profile.slow_percent,
            slow_duration: profile.slow_duration,
            armor_pierce: profile.armor_pierce,
            splash_radius: profile.splash_radius,
            splash_damage: profile.splash_damage,
            hit_radius: profile.hit_radius,
        });
        id
    }

    /// Spawn an enemy projectile from `enemy` toward `target`, with an
    /// angular `spread` (radians) applied to the aim.
    pub fn spawn_enemy_projectile(&mut self, enemy: &Enemy, target: Vec2, spread: f32) -> u32 {
        let id = self.next_enemy_projectile_id;
        self.next_enemy_projectile_id += 1;

        let arch = archetypes::stats(enemy.kind);
        let dir = Vec2::from_angle((target - enemy.pos).to_angle() + spread);
        self.enemy_projectiles.push(EnemyProjectile {
            id,
            pos: enemy.pos,
            vel: dir * arch.projectile_speed,
            traveled: 0.0,
            range: ENEMY_PROJECTILE_RANGE,
            damage: enemy.damage,
            color_tag: enemy.kind,
        });
        id
    }

    /// Spawn a drifting mine behind `enemy`. Only minelayers may lay
    /// mines; other kinds get a logged no-op.
    pub fn spawn_mine(&mut self, enemy: &Enemy) -> Option<u32> {
        if enemy.kind != EnemyKind::Minelayer {
            log::warn!("spawn_mine called for non-minelayer kind {:?}", enemy.kind);
            return None;
        }
        let id = self.next_mine_id;
        self.next_mine_id += 1;

        let backward = -Vec2::from_angle(enemy.heading);
        self.mines.push(Mine {
            id,
            pos: enemy.pos + backward * MINE_DROP_OFFSET,
            radius: MINE_RADIUS,
            state: MineState::Drifting {
                vel: backward * MINE_DRIFT_SPEED,
                lifetime_secs: MINE_LIFETIME_SECS,
            },
        });
        Some(id)
    }

    pub fn enemy_by_id(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn enemy_by_id_mut(&mut self, id: u32) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn mine_by_id(&self, id: u32) -> Option<&Mine> {
        self.mines.iter().find(|m| m.id == id)
    }

    /// Does any enemy of one of `kinds` still exist?
    pub fn any_enemy_of(&self, kinds: &[EnemyKind]) -> bool {
        self.enemies.iter().any(|e| kinds.contains(&e.kind))
    }

    pub fn remove_enemy_at(&mut self, index: usize) -> Enemy {
        self.enemies.remove(index)
    }
}
