//! Property-based tests for the particle field using proptest
//!
//! These tests verify invariants hold across random initial conditions:
//! - No NaN/inf in particle or star state, whatever the mouse does
//! - Particle and star counts are conserved
//! - Particles stay within one velocity step of the canvas
//! - Link alpha is in (0, 1] and matches 1 - d / threshold

use std::time::Duration;

use glam::Vec2;
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use starfield::config::FieldConfig;
use starfield::links::{all_pairs, grid_pairs};
use starfield::ParticleField;

const SIMULATION_STEPS: u32 = 300;

/// Mouse inputs including garbage the field must reject
fn mouse_input() -> impl Strategy<Value = (f32, f32)> {
    prop_oneof![
        (0.0f32..1200.0, 0.0f32..900.0),
        (-500.0f32..2000.0, -500.0f32..2000.0),
        Just((f32::NAN, 100.0)),
        Just((f32::INFINITY, f32::NEG_INFINITY)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: state stays finite and counts are fixed
    #[test]
    fn test_field_stays_finite(
        seed in any::<u64>(),
        width in 50.0f32..1600.0,
        height in 50.0f32..1000.0,
        count in 0usize..200,
        mice in prop::collection::vec(mouse_input(), 1..8),
    ) {
        let config = FieldConfig { particle_count: count, ..FieldConfig::default() };
        let mut field = ParticleField::with_seed(config, width, height, seed);

        for step in 0..SIMULATION_STEPS {
            let (mx, my) = mice[step as usize % mice.len()];
            field.set_mouse(mx, my);
            field.advance(Duration::from_millis(16) * step);

            prop_assert_eq!(field.particles().len(), count);
            prop_assert_eq!(field.stars().len(), 3);
            for p in field.particles() {
                prop_assert!(p.is_finite(), "non-finite particle {:?}", p);
            }
            for s in field.stars() {
                prop_assert!(s.position.is_finite());
            }
        }
    }

    /// Property: without a mouse, particles never drift more than one step out
    #[test]
    fn test_particles_bounded_without_mouse(
        seed in any::<u64>(),
        width in 50.0f32..1600.0,
        height in 50.0f32..1000.0,
    ) {
        let mut field = ParticleField::with_seed(FieldConfig::default(), width, height, seed);
        for step in 0..SIMULATION_STEPS {
            field.advance(Duration::from_millis(16) * step);
            for p in field.particles() {
                let slack = p.velocity.abs() + Vec2::splat(1e-3);
                prop_assert!(p.position.x >= -slack.x && p.position.x <= width + slack.x);
                prop_assert!(p.position.y >= -slack.y && p.position.y <= height + slack.y);
            }
        }
    }

    /// Property: grid links match all-pairs links and alpha follows distance
    #[test]
    fn test_links_consistent(seed in any::<u64>(), count in 0usize..300) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let bounds = Vec2::new(900.0, 700.0);
        let positions: Vec<Vec2> = (0..count)
            .map(|_| Vec2::new(rng.gen_range(-20.0..920.0), rng.gen_range(-20.0..720.0)))
            .collect();

        let mut brute = all_pairs(&positions, 120.0);
        let mut grid = grid_pairs(&positions, 120.0, bounds);
        brute.sort_by_key(|l| (l.a, l.b));
        grid.sort_by_key(|l| (l.a, l.b));
        prop_assert_eq!(&brute, &grid);

        for link in &brute {
            prop_assert!(link.distance < 120.0);
            prop_assert!(link.alpha > 0.0 && link.alpha <= 1.0);
            prop_assert!((link.alpha - (1.0 - link.distance / 120.0)).abs() < 1e-5);
        }
    }
}
