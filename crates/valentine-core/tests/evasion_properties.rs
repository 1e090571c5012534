//! Property-based tests for the evasion controller.
//!
//! Uses proptest with a seeded `StdRng` per case so every run is
//! reproducible from the failing seed.

use std::f64::consts::TAU;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use valentine_core::{EvasionConfig, EvasionController, EvasionOutcome, Point, Rect};

/// A container so large the per-axis clamp never bites; isolates the
/// polar-step math from the bounds logic.
fn wide_container() -> Rect {
    Rect::new(0.0, 0.0, 100_000.0, 100_000.0)
}

fn wide_button() -> Rect {
    Rect::new(50_000.0, 50_000.0, 40.0, 20.0)
}

/// Smallest absolute angular difference between two angles.
fn angle_between(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

proptest! {
    /// Any pointer at or beyond the threshold leaves the controller
    /// untouched, from any starting streak.
    #[test]
    fn distant_pointer_never_moves_the_button(
        seed in any::<u64>(),
        // Slightly above the threshold so float error in reconstructing
        // the distance cannot drop a case below the gate.
        distance in 120.01..10_000.0f64,
        direction in 0.0..TAU,
    ) {
        let button = wide_button();
        let center = button.center();
        let pointer = Point::new(
            center.x + direction.cos() * distance,
            center.y + direction.sin() * distance,
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctl = EvasionController::new();
        let outcome = ctl.evade(&mut rng, pointer, button, wide_container());

        prop_assert_eq!(outcome, EvasionOutcome::Held);
        prop_assert_eq!(ctl.offset(), valentine_core::Offset::ZERO);
        prop_assert_eq!(ctl.flee_streak(), 0);
    }

    /// A threatened button steps away with a magnitude in [100, 150] and
    /// an angle within the jitter envelope of directly-away.
    #[test]
    fn escape_step_respects_magnitude_and_jitter(
        seed in any::<u64>(),
        distance in 1.0..119.0f64,
        direction in 0.0..TAU,
    ) {
        let config = EvasionConfig::default();
        let button = wide_button();
        let center = button.center();
        let pointer = Point::new(
            center.x + direction.cos() * distance,
            center.y + direction.sin() * distance,
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctl = EvasionController::new();
        let outcome = ctl.evade(&mut rng, pointer, button, wide_container());

        prop_assert!(
            matches!(outcome, EvasionOutcome::Fled(_)),
            "expected Fled, got {:?}",
            outcome
        );
        let offset = ctl.offset();

        let magnitude = offset.dx.hypot(offset.dy);
        prop_assert!(magnitude >= config.escape_min - 1e-9);
        prop_assert!(magnitude <= config.escape_max + 1e-9);

        let away = (center.y - pointer.y).atan2(center.x - pointer.x);
        let taken = offset.dy.atan2(offset.dx);
        prop_assert!(angle_between(taken, away) <= config.jitter + 1e-9);
    }

    /// Whatever the pointer does inside a realistic container, every
    /// emitted offset lies inside the movement bounds for that event.
    #[test]
    fn emitted_offsets_stay_in_bounds(
        seed in any::<u64>(),
        samples in prop::collection::vec((0.0..1000.0f64, 0.0..600.0f64), 1..40),
    ) {
        let config = EvasionConfig::default();
        let button = Rect::new(480.0, 490.0, 40.0, 20.0);
        let container = Rect::new(0.0, 0.0, 1000.0, 600.0);
        let bounds = config.movement_bounds(button, container);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctl = EvasionController::new();
        for (px, py) in samples {
            if let Some(offset) = ctl
                .evade(&mut rng, Point::new(px, py), button, container)
                .offset()
            {
                prop_assert!(bounds.contains(offset));
            }
        }
    }

    /// Four straight evasions force the fifth into the cornering branch,
    /// which resets the streak to exactly zero.
    #[test]
    fn streak_reset_is_exact(seed in any::<u64>()) {
        let button = wide_button();
        let center = button.center();
        let pointer = Point::new(center.x + 25.0, center.y + 15.0);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctl = EvasionController::new();
        for _ in 0..4 {
            let outcome = ctl.evade(&mut rng, pointer, button, wide_container());
            prop_assert!(matches!(outcome, EvasionOutcome::Fled(_)));
        }
        prop_assert_eq!(ctl.flee_streak(), 4);

        let outcome = ctl.evade(&mut rng, pointer, button, wide_container());
        prop_assert!(matches!(outcome, EvasionOutcome::Cornered(_)));
        prop_assert_eq!(ctl.flee_streak(), 0);
    }

    /// The cornering teleport itself lands inside the bounds.
    #[test]
    fn cornering_teleport_is_in_bounds(seed in any::<u64>()) {
        let config = EvasionConfig::default();
        let container = Rect::new(0.0, 0.0, 120.0, 80.0);
        let button = Rect::new(16.0, 16.0, 40.0, 20.0);
        let pointer = Point::new(40.0, 30.0);
        let bounds = config.movement_bounds(button, container);

        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctl = EvasionController::new();
        let outcome = ctl.evade(&mut rng, pointer, button, container);
        prop_assert!(matches!(outcome, EvasionOutcome::Cornered(_)));
        prop_assert!(bounds.contains(ctl.offset()));
    }

    /// The simple variant never leaves its capped box.
    #[test]
    fn scatter_is_capped(
        seed in any::<u64>(),
        vw in 50.0..4000.0f64,
        vh in 50.0..3000.0f64,
    ) {
        let viewport = Rect::new(0.0, 0.0, vw, vh);
        let button = Rect::new(0.0, 0.0, 160.0, 48.0);

        let mut rng = StdRng::seed_from_u64(seed);
        let offset = valentine_core::scatter(&mut rng, viewport, button);
        prop_assert!(offset.dx.abs() <= 200.0);
        prop_assert!(offset.dy.abs() <= 150.0);
        prop_assert!(offset.dx.abs() <= (vw - 160.0 - 20.0).max(0.0));
        prop_assert!(offset.dy.abs() <= (vh - 48.0 - 20.0).max(0.0));
    }
}
