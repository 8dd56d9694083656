#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::enums::*;
    use crate::train::TrainSegment;
    use crate::types::{circles_overlap, weighted_pick, SlowEffect};
    use crate::weapons::{self, BonusMultipliers};

    fn car(id: u32, color: WeaponColor) -> TrainSegment {
        TrainSegment {
            id,
            pos: Vec2::ZERO,
            radius: 16.0,
            color: Some(color),
            tier: 1,
            is_engine: false,
        }
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_enemy_kind_serde() {
        let variants = vec![
            EnemyKind::Skirmisher,
            EnemyKind::Armored,
            EnemyKind::Ranger,
            EnemyKind::Harpooner,
            EnemyKind::Minelayer,
            EnemyKind::Champion,
            EnemyKind::Boss,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EnemyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_wave_phase_serde() {
        let variants = vec![
            WavePhase::Waiting,
            WavePhase::Skirmish,
            WavePhase::Elite,
            WavePhase::Complete,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: WavePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    // ---- Geometry / utilities ----

    #[test]
    fn test_circles_overlap_boundary() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert!(circles_overlap(a, 5.0, b, 5.0), "touching circles overlap");
        assert!(!circles_overlap(a, 4.0, b, 5.0));
    }

    #[test]
    fn test_weighted_pick_ignores_zero_weights() {
        let entries = [("never", 0.0f32), ("always", 2.0)];
        for i in 0..10 {
            let roll = i as f32 / 10.0;
            assert_eq!(*weighted_pick(&entries, roll), "always");
        }
    }

    // ---- Slow effect ----

    #[test]
    fn test_slow_longer_duration_wins() {
        let mut slow = SlowEffect::default();
        slow.apply(0.3, 2.0);
        slow.apply(0.5, 1.0);
        // Multiplier tracks the latest application, duration the longest.
        assert!((slow.multiplier - 0.5).abs() < 1e-6);
        assert!((slow.remaining_secs - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_slow_expires_back_to_unity() {
        let mut slow = SlowEffect::default();
        slow.apply(0.4, 0.5);
        slow.tick(1.0);
        assert!(!slow.is_active());
        assert!((slow.multiplier - 1.0).abs() < 1e-6);
    }

    // ---- Weapon resolver ----

    #[test]
    fn test_tier_extrapolation_is_linear() {
        let t2 = weapons::stats_for_tier(WeaponColor::Red, 2);
        let t3 = weapons::stats_for_tier(WeaponColor::Red, 3);
        let t4 = weapons::stats_for_tier(WeaponColor::Red, 4);
        let t5 = weapons::stats_for_tier(WeaponColor::Red, 5);
        assert!((t4.damage - (t3.damage + (t3.damage - t2.damage))).abs() < 1e-4);
        assert!((t5.damage - (t3.damage + 2.0 * (t3.damage - t2.damage))).abs() < 1e-4);
        assert!((t4.range - (t3.range + (t3.range - t2.range))).abs() < 1e-4);
    }

    #[test]
    fn test_extrapolated_pierce_clamps() {
        // Purple pierce is 0.7 -> 0.9 between tiers 2 and 3; tier 10 would
        // blow far past 1.0 without the clamp.
        let t10 = weapons::stats_for_tier(WeaponColor::Purple, 10);
        assert!((t10.armor_pierce - 0.9).abs() < 1e-6);
        let frost = weapons::stats_for_tier(WeaponColor::Blue, 12);
        assert!(frost.slow_percent <= 0.9);
    }

    #[test]
    fn test_dominant_color_tie_breaks_on_car_order() {
        // 2 red, 2 blue: the first car is red, so red wins the tie.
        let cars = vec![
            car(1, WeaponColor::Red),
            car(2, WeaponColor::Blue),
            car(3, WeaponColor::Blue),
            car(4, WeaponColor::Red),
        ];
        assert_eq!(
            weapons::dominant_color(&cars),
            Some((WeaponColor::Red, 2))
        );

        // Same composition, blue car first: blue wins.
        let cars = vec![
            car(1, WeaponColor::Blue),
            car(2, WeaponColor::Red),
            car(3, WeaponColor::Red),
            car(4, WeaponColor::Blue),
        ];
        assert_eq!(
            weapons::dominant_color(&cars),
            Some((WeaponColor::Blue, 2))
        );
    }

    #[test]
    fn test_engine_weapon_tier_thresholds() {
        let bonus = BonusMultipliers::default();
        let three = vec![
            car(1, WeaponColor::Yellow),
            car(2, WeaponColor::Yellow),
            car(3, WeaponColor::Yellow),
        ];
        let resolved = weapons::engine_weapon(&three, &bonus).unwrap();
        assert_eq!(resolved.tier, 2);

        let five: Vec<_> = (1..=5).map(|i| car(i, WeaponColor::Yellow)).collect();
        let resolved = weapons::engine_weapon(&five, &bonus).unwrap();
        assert_eq!(resolved.tier, 3);

        assert!(weapons::engine_weapon(&[], &bonus).is_none());
    }

    #[test]
    fn test_bonus_multipliers_scale_profile() {
        let bonus = BonusMultipliers {
            damage: 2.0,
            fire_rate: 1.5,
            range: 1.0,
        };
        let plain = weapons::stats_for_tier(WeaponColor::Red, 1);
        let boosted = weapons::apply_bonus(plain, &bonus);
        assert!((boosted.damage - plain.damage * 2.0).abs() < 1e-4);
        assert!((boosted.splash_damage - plain.splash_damage * 2.0).abs() < 1e-4);
        assert!((boosted.fire_rate - plain.fire_rate * 1.5).abs() < 1e-4);
        assert!((boosted.range - plain.range).abs() < 1e-4);
    }
}
