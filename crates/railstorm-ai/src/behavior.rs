//! Per-kind behavior state machines.
//!
//! `evaluate` is a pure function: context in, update out. The sim applies
//! the returned velocity/sub-state and executes any side-effect action
//! (firing, mine drops, drag begin/release) through the registry and the
//! train contract.

use glam::Vec2;

use railstorm_core::constants::{ORBIT_ERROR_CLAMP, ORBIT_RADIAL_WEIGHT, ORBIT_TANGENTIAL_WEIGHT};
use railstorm_core::entities::TetherState;
use railstorm_core::enums::{EnemyKind, TetherPhase};
use railstorm_core::train::TrainSegment;

use crate::archetypes::{self, Archetype};

/// Read-only view of the train for one behavior evaluation.
pub struct TrainView<'a> {
    pub engine: TrainSegment,
    /// Engine heading in radians.
    pub heading: f32,
    /// All live segments, engine first.
    pub segments: &'a [TrainSegment],
    /// Weapon cars only, in train order.
    pub weapon_cars: &'a [TrainSegment],
}

impl TrainView<'_> {
    /// Nearest live segment to `pos`; the engine when the list is empty.
    pub fn nearest_segment(&self, pos: Vec2) -> TrainSegment {
        self.segments
            .iter()
            .min_by(|a, b| {
                a.pos
                    .distance_squared(pos)
                    .total_cmp(&b.pos.distance_squared(pos))
            })
            .copied()
            .unwrap_or(self.engine)
    }

    pub fn segment_by_id(&self, id: u32) -> Option<TrainSegment> {
        self.segments.iter().find(|s| s.id == id).copied()
    }

    /// Harpoon target selection: prefer the middle weapon car if it is in
    /// range, otherwise the nearest weapon car in range.
    pub fn harpoon_target(&self, pos: Vec2, range: f32) -> Option<u32> {
        if self.weapon_cars.is_empty() {
            return None;
        }
        let middle = self.weapon_cars[self.weapon_cars.len() / 2];
        if middle.pos.distance(pos) <= range {
            return Some(middle.id);
        }
        self.weapon_cars
            .iter()
            .filter(|c| c.pos.distance(pos) <= range)
            .min_by(|a, b| {
                a.pos
                    .distance_squared(pos)
                    .total_cmp(&b.pos.distance_squared(pos))
            })
            .map(|c| c.id)
    }
}

/// Input to one behavior evaluation.
pub struct BehaviorContext<'a> {
    pub kind: EnemyKind,
    pub pos: Vec2,
    pub heading: f32,
    /// Base speed with wave scaling already applied.
    pub speed: f32,
    /// Current slow multiplier (1.0 = unaffected).
    pub slow_multiplier: f32,
    pub attack_cooldown: f32,
    pub tether: TetherState,
    pub mine_timer: f32,
    /// +1 or -1, fixed at spawn.
    pub orbit_dir: f32,
    pub dt: f32,
    pub train: TrainView<'a>,
}

/// Side effect requested by a behavior, executed by the sim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorAction {
    /// Ranger: fire an enemy projectile at the engine.
    FireAtEngine,
    /// Minelayer: drop a mine behind the current heading.
    DropMine,
    /// Harpooner: start pulling the tethered car.
    BeginDrag { car: u32 },
    /// Harpooner: release the pull (drag expiry or target loss).
    ReleaseDrag { car: u32 },
}

/// Output of one behavior evaluation.
pub struct BehaviorUpdate {
    pub velocity: Vec2,
    pub heading: f32,
    pub attack_cooldown: f32,
    pub tether: TetherState,
    pub mine_timer: f32,
    pub action: Option<BehaviorAction>,
}

/// Evaluate one enemy for one frame.
pub fn evaluate(ctx: &BehaviorContext) -> BehaviorUpdate {
    let arch = archetypes::stats(ctx.kind);
    match ctx.kind {
        EnemyKind::Skirmisher | EnemyKind::Armored | EnemyKind::Champion | EnemyKind::Boss => {
            melee(ctx, &arch)
        }
        EnemyKind::Ranger => ranger(ctx, &arch),
        EnemyKind::Harpooner => harpooner(ctx, &arch),
        EnemyKind::Minelayer => minelayer(ctx, &arch),
    }
}

/// Whether the kind's current behavior is a contact attack (dies on hit
/// with a segment). Rangers never are; harpooners only while idle.
pub fn is_contact_attacker(kind: EnemyKind, tether: &TetherState) -> bool {
    match kind {
        EnemyKind::Ranger => false,
        EnemyKind::Harpooner => tether.phase == TetherPhase::Idle,
        _ => true,
    }
}

fn seek_target(ctx: &BehaviorContext) -> TrainSegment {
    match ctx.kind {
        // Armored units and the boss go straight for the engine.
        EnemyKind::Armored | EnemyKind::Boss => ctx.train.engine,
        _ => ctx.train.nearest_segment(ctx.pos),
    }
}

fn seek_velocity(ctx: &BehaviorContext, target: Vec2) -> (Vec2, f32) {
    let dir = (target - ctx.pos).normalize_or_zero();
    let vel = dir * ctx.speed * ctx.slow_multiplier;
    let heading = if dir == Vec2::ZERO {
        ctx.heading
    } else {
        dir.to_angle()
    };
    (vel, heading)
}

fn melee(ctx: &BehaviorContext, _arch: &Archetype) -> BehaviorUpdate {
    let target = seek_target(ctx);
    let (velocity, heading) = seek_velocity(ctx, target.pos);
    BehaviorUpdate {
        velocity,
        heading,
        attack_cooldown: (ctx.attack_cooldown - ctx.dt).max(0.0),
        tether: ctx.tether,
        mine_timer: ctx.mine_timer,
        action: None,
    }
}

fn ranger(ctx: &BehaviorContext, arch: &Archetype) -> BehaviorUpdate {
    let engine = ctx.train.engine;
    let to_engine = engine.pos - ctx.pos;
    let dist = to_engine.length();

    let (velocity, heading) = if dist < 1e-3 {
        (Vec2::ZERO, ctx.heading)
    } else {
        let radial = to_engine / dist;
        let tangent = radial.perp() * ctx.orbit_dir;
        // Radial correction proportional to the clamped distance error:
        // positive error (too far) steers inward.
        let error = (dist - arch.orbit_distance).clamp(-ORBIT_ERROR_CLAMP, ORBIT_ERROR_CLAMP);
        let steer = tangent * ORBIT_TANGENTIAL_WEIGHT
            + radial * (error / ORBIT_ERROR_CLAMP) * ORBIT_RADIAL_WEIGHT;
        let vel = steer.normalize_or_zero() * ctx.speed * ctx.slow_multiplier;
        // Rangers face the engine, not their travel direction.
        (vel, to_engine.to_angle())
    };

    let mut cooldown = (ctx.attack_cooldown - ctx.dt).max(0.0);
    let mut action = None;
    if cooldown <= 0.0 && dist <= arch.attack_range {
        action = Some(BehaviorAction::FireAtEngine);
        cooldown = arch.attack_cooldown;
    }

    BehaviorUpdate {
        velocity,
        heading,
        attack_cooldown: cooldown,
        tether: ctx.tether,
        mine_timer: ctx.mine_timer,
        action,
    }
}

fn harpooner(ctx: &BehaviorContext, arch: &Archetype) -> BehaviorUpdate {
    match ctx.tether.phase {
        TetherPhase::Idle => {
            let mut update = melee(ctx, arch);
            if update.attack_cooldown <= 0.0 {
                if let Some(car) = ctx.train.harpoon_target(ctx.pos, arch.attack_range) {
                    update.tether = TetherState {
                        phase: TetherPhase::Windup,
                        timer_secs: arch.windup_secs,
                        target_car: Some(car),
                    };
                    update.velocity = Vec2::ZERO;
                }
            }
            update
        }
        TetherPhase::Windup => {
            let target = ctx.tether.target_car.and_then(|id| ctx.train.segment_by_id(id));
            let Some(target) = target else {
                // Target destroyed mid-windup: back to idle, cooldown restarts.
                return tether_abort(ctx, arch, None);
            };

            let timer = ctx.tether.timer_secs - ctx.dt;
            if timer <= 0.0 {
                let car = target.id;
                return BehaviorUpdate {
                    velocity: Vec2::ZERO,
                    heading: (target.pos - ctx.pos).to_angle(),
                    attack_cooldown: ctx.attack_cooldown,
                    tether: TetherState {
                        phase: TetherPhase::Drag,
                        timer_secs: arch.drag_secs,
                        target_car: Some(car),
                    },
                    mine_timer: ctx.mine_timer,
                    action: Some(BehaviorAction::BeginDrag { car }),
                };
            }

            BehaviorUpdate {
                velocity: Vec2::ZERO,
                heading: (target.pos - ctx.pos).to_angle(),
                attack_cooldown: ctx.attack_cooldown,
                tether: TetherState {
                    timer_secs: timer,
                    ..ctx.tether
                },
                mine_timer: ctx.mine_timer,
                action: None,
            }
        }
        TetherPhase::Drag => {
            let car = ctx.tether.target_car;
            let target = car.and_then(|id| ctx.train.segment_by_id(id));
            if target.is_none() {
                // Target destroyed mid-drag: release and revert, never a
                // stuck state.
                return tether_abort(ctx, arch, car.map(|c| BehaviorAction::ReleaseDrag { car: c }));
            }

            let timer = ctx.tether.timer_secs - ctx.dt;
            if timer <= 0.0 {
                return tether_abort(
                    ctx,
                    arch,
                    car.map(|c| BehaviorAction::ReleaseDrag { car: c }),
                );
            }

            BehaviorUpdate {
                velocity: Vec2::ZERO,
                heading: ctx.heading,
                attack_cooldown: ctx.attack_cooldown,
                tether: TetherState {
                    timer_secs: timer,
                    ..ctx.tether
                },
                mine_timer: ctx.mine_timer,
                action: None,
            }
        }
    }
}

/// Common exit path for the tether machine: back to Idle with the attack
/// cooldown restarted.
fn tether_abort(
    ctx: &BehaviorContext,
    arch: &Archetype,
    action: Option<BehaviorAction>,
) -> BehaviorUpdate {
    BehaviorUpdate {
        velocity: Vec2::ZERO,
        heading: ctx.heading,
        attack_cooldown: arch.attack_cooldown,
        tether: TetherState::default(),
        mine_timer: ctx.mine_timer,
        action,
    }
}

fn minelayer(ctx: &BehaviorContext, arch: &Archetype) -> BehaviorUpdate {
    let mut update = melee(ctx, arch);
    let timer = ctx.mine_timer - ctx.dt;
    if timer <= 0.0 {
        update.action = Some(BehaviorAction::DropMine);
        update.mine_timer = arch.mine_interval;
    } else {
        update.mine_timer = timer;
    }
    update
}
