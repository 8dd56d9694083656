#[cfg(test)]
mod tests {
    use glam::Vec2;

    use railstorm_core::entities::TetherState;
    use railstorm_core::enums::{EnemyKind, TetherPhase, WeaponColor};
    use railstorm_core::train::TrainSegment;

    use crate::archetypes;
    use crate::behavior::{evaluate, BehaviorAction, BehaviorContext, TrainView};

    fn engine_at(pos: Vec2) -> TrainSegment {
        TrainSegment {
            id: 1,
            pos,
            radius: 18.0,
            color: None,
            tier: 0,
            is_engine: true,
        }
    }

    fn weapon_car(id: u32, pos: Vec2) -> TrainSegment {
        TrainSegment {
            id,
            pos,
            radius: 16.0,
            color: Some(WeaponColor::Red),
            tier: 1,
            is_engine: false,
        }
    }

    fn make_context<'a>(
        kind: EnemyKind,
        pos: Vec2,
        segments: &'a [TrainSegment],
        weapon_cars: &'a [TrainSegment],
    ) -> BehaviorContext<'a> {
        let arch = archetypes::stats(kind);
        BehaviorContext {
            kind,
            pos,
            heading: 0.0,
            speed: arch.speed,
            slow_multiplier: 1.0,
            attack_cooldown: 0.0,
            tether: TetherState::default(),
            mine_timer: arch.mine_interval,
            orbit_dir: 1.0,
            dt: 1.0 / 60.0,
            train: TrainView {
                engine: segments[0],
                heading: 0.0,
                segments,
                weapon_cars,
            },
        }
    }

    #[test]
    fn test_melee_seeks_nearest_segment() {
        let segments = vec![engine_at(Vec2::ZERO), weapon_car(2, Vec2::new(100.0, 0.0))];
        let ctx = make_context(EnemyKind::Skirmisher, Vec2::new(140.0, 0.0), &segments, &[]);
        let update = evaluate(&ctx);
        // Nearest segment is the car at x=100, so velocity points -X.
        assert!(update.velocity.x < 0.0);
        assert!(update.velocity.length() > 0.0);
    }

    #[test]
    fn test_boss_targets_engine_not_nearest() {
        let segments = vec![engine_at(Vec2::ZERO), weapon_car(2, Vec2::new(100.0, 0.0))];
        let ctx = make_context(EnemyKind::Boss, Vec2::new(140.0, 0.0), &segments, &[]);
        let update = evaluate(&ctx);
        // The engine sits at the origin; a nearest-segment seeker would
        // stop at the car, the boss keeps heading for x=0.
        let dir = update.velocity.normalize();
        assert!(dir.x < -0.99);
    }

    #[test]
    fn test_slow_multiplier_scales_melee_speed() {
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(EnemyKind::Skirmisher, Vec2::new(200.0, 0.0), &segments, &[]);
        ctx.slow_multiplier = 0.5;
        let update = evaluate(&ctx);
        let arch = archetypes::stats(EnemyKind::Skirmisher);
        assert!((update.velocity.length() - arch.speed * 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_ranger_orbits_tangentially_at_target_distance() {
        let arch = archetypes::stats(EnemyKind::Ranger);
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(
            EnemyKind::Ranger,
            Vec2::new(arch.orbit_distance, 0.0),
            &segments,
            &[],
        );
        ctx.attack_cooldown = arch.attack_cooldown;
        let update = evaluate(&ctx);
        // Zero radial error: motion is pure tangent (perpendicular to the
        // engine direction).
        let radial = Vec2::new(-1.0, 0.0);
        let dot = update.velocity.normalize().dot(radial);
        assert!(dot.abs() < 0.05, "expected tangential motion, dot={dot}");
    }

    #[test]
    fn test_ranger_steers_inward_when_too_far() {
        let arch = archetypes::stats(EnemyKind::Ranger);
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(
            EnemyKind::Ranger,
            Vec2::new(arch.orbit_distance + 200.0, 0.0),
            &segments,
            &[],
        );
        ctx.attack_cooldown = arch.attack_cooldown;
        let update = evaluate(&ctx);
        // Too far out: the radial component points toward the engine (-X).
        assert!(update.velocity.x < 0.0);
    }

    #[test]
    fn test_ranger_fires_when_cooldown_elapsed_and_in_range() {
        let arch = archetypes::stats(EnemyKind::Ranger);
        let segments = vec![engine_at(Vec2::ZERO)];
        let ctx = make_context(
            EnemyKind::Ranger,
            Vec2::new(arch.orbit_distance, 0.0),
            &segments,
            &[],
        );
        let update = evaluate(&ctx);
        assert_eq!(update.action, Some(BehaviorAction::FireAtEngine));
        assert!(update.attack_cooldown > 0.0, "cooldown restarts after firing");
    }

    #[test]
    fn test_harpooner_acquires_middle_weapon_car() {
        let segments = vec![
            engine_at(Vec2::ZERO),
            weapon_car(2, Vec2::new(30.0, 0.0)),
            weapon_car(3, Vec2::new(60.0, 0.0)),
            weapon_car(4, Vec2::new(90.0, 0.0)),
        ];
        let cars = &segments[1..];
        let ctx = make_context(EnemyKind::Harpooner, Vec2::new(120.0, 0.0), &segments, cars);
        let update = evaluate(&ctx);
        assert_eq!(update.tether.phase, TetherPhase::Windup);
        // Middle of [2, 3, 4] is car 3.
        assert_eq!(update.tether.target_car, Some(3));
        assert_eq!(update.velocity, Vec2::ZERO);
    }

    #[test]
    fn test_harpooner_windup_to_drag_emits_begin() {
        let segments = vec![engine_at(Vec2::ZERO), weapon_car(2, Vec2::new(50.0, 0.0))];
        let cars = &segments[1..];
        let mut ctx = make_context(EnemyKind::Harpooner, Vec2::new(120.0, 0.0), &segments, cars);
        ctx.tether = TetherState {
            phase: TetherPhase::Windup,
            timer_secs: 0.005,
            target_car: Some(2),
        };
        let update = evaluate(&ctx);
        assert_eq!(update.tether.phase, TetherPhase::Drag);
        assert_eq!(update.action, Some(BehaviorAction::BeginDrag { car: 2 }));
    }

    #[test]
    fn test_harpooner_target_lost_mid_windup_reverts_to_idle() {
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(EnemyKind::Harpooner, Vec2::new(120.0, 0.0), &segments, &[]);
        ctx.tether = TetherState {
            phase: TetherPhase::Windup,
            timer_secs: 0.8,
            target_car: Some(99),
        };
        let update = evaluate(&ctx);
        assert_eq!(update.tether.phase, TetherPhase::Idle);
        assert_eq!(update.tether.target_car, None);
        // No drag was active yet, so no release action.
        assert_eq!(update.action, None);
        let arch = archetypes::stats(EnemyKind::Harpooner);
        assert!((update.attack_cooldown - arch.attack_cooldown).abs() < 1e-6);
    }

    #[test]
    fn test_harpooner_target_lost_mid_drag_releases() {
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(EnemyKind::Harpooner, Vec2::new(120.0, 0.0), &segments, &[]);
        ctx.tether = TetherState {
            phase: TetherPhase::Drag,
            timer_secs: 1.5,
            target_car: Some(7),
        };
        let update = evaluate(&ctx);
        assert_eq!(update.tether.phase, TetherPhase::Idle);
        assert_eq!(update.action, Some(BehaviorAction::ReleaseDrag { car: 7 }));
        assert!(update.attack_cooldown > 0.0);
    }

    #[test]
    fn test_harpooner_drag_expiry_releases() {
        let segments = vec![engine_at(Vec2::ZERO), weapon_car(2, Vec2::new(50.0, 0.0))];
        let cars = &segments[1..];
        let mut ctx = make_context(EnemyKind::Harpooner, Vec2::new(120.0, 0.0), &segments, cars);
        ctx.tether = TetherState {
            phase: TetherPhase::Drag,
            timer_secs: 0.005,
            target_car: Some(2),
        };
        let update = evaluate(&ctx);
        assert_eq!(update.tether.phase, TetherPhase::Idle);
        assert_eq!(update.action, Some(BehaviorAction::ReleaseDrag { car: 2 }));
    }

    #[test]
    fn test_minelayer_drops_on_timer_and_resets() {
        let segments = vec![engine_at(Vec2::ZERO)];
        let mut ctx = make_context(EnemyKind::Minelayer, Vec2::new(200.0, 0.0), &segments, &[]);
        ctx.mine_timer = 0.001;
        let update = evaluate(&ctx);
        assert_eq!(update.action, Some(BehaviorAction::DropMine));
        let arch = archetypes::stats(EnemyKind::Minelayer);
        assert!((update.mine_timer - arch.mine_interval).abs() < 1e-6);

        // Timer still running: no drop.
        ctx.mine_timer = 1.0;
        let update = evaluate(&ctx);
        assert_eq!(update.action, None);
        assert!(update.mine_timer < 1.0);
    }
}
