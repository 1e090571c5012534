//! The evasion controller for the decline button.
//!
//! On every pointer sample the controller decides whether the button is
//! threatened and, if so, computes a new displacement: an angle pointing
//! away from the pointer (jittered so the motion is not perfectly
//! predictable), a random escape magnitude, and a per-axis clamp against
//! the container. Two independent triggers fall back to a random
//! teleport inside the bounds: the candidate being clamped on both axes
//! at once, and a streak of more than [`EvasionConfig::streak_limit`]
//! consecutive evasions. The streak check reads the pre-increment value;
//! keep it that way, the reset timing is observable.
//!
//! The controller only emits target offsets. Smoothing the transition
//! between them is the rendering layer's concern.

use rand::Rng;

use crate::geometry::{Bounds, Offset, Point, Rect};

/// Tuning constants for the evasion behavior.
///
/// These are design values, not user configuration; `Default` is the
/// shipping set and tests construct variants as needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvasionConfig {
    /// Pointer-to-center distance below which the button flees, in px.
    pub threshold: f64,
    /// Minimum escape step, in px.
    pub escape_min: f64,
    /// Maximum escape step, in px.
    pub escape_max: f64,
    /// Escape angle perturbation, in radians either side of the ideal.
    pub jitter: f64,
    /// Margin kept from the container's far edges, in px.
    pub outer_margin: f64,
    /// Margin kept from the container's near edges, in px.
    pub inner_margin: f64,
    /// Consecutive evasions after which a teleport is forced.
    pub streak_limit: u32,
}

impl Default for EvasionConfig {
    fn default() -> Self {
        Self {
            threshold: 120.0,
            escape_min: 100.0,
            escape_max: 150.0,
            jitter: 0.25,
            outer_margin: 32.0,
            inner_margin: 16.0,
            streak_limit: 3,
        }
    }
}

impl EvasionConfig {
    /// Movement bounds for the button's offset, relative to where the
    /// button currently sits inside the container.
    ///
    /// The max side is derived from the container size minus the button
    /// size minus the outer margin; the min side from the button's
    /// current position inside the container minus the inner margin.
    /// Recomputed on every event since layout can shift.
    pub fn movement_bounds(&self, button: Rect, container: Rect) -> Bounds {
        Bounds::new(
            -(button.left - container.left - self.inner_margin),
            container.width - button.width - self.outer_margin,
            -(button.top - container.top - self.inner_margin),
            container.height - button.height - self.outer_margin,
        )
    }
}

/// What the controller decided for one pointer sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EvasionOutcome {
    /// Pointer too far away; nothing changed.
    Held,
    /// Normal escape: offset stepped away from the pointer and clamped.
    Fled(Offset),
    /// Cornered fallback: offset teleported to a random in-bounds spot.
    Cornered(Offset),
}

impl EvasionOutcome {
    /// The emitted target offset, if the button moved.
    pub fn offset(&self) -> Option<Offset> {
        match self {
            EvasionOutcome::Held => None,
            EvasionOutcome::Fled(offset) | EvasionOutcome::Cornered(offset) => Some(*offset),
        }
    }
}

/// Per-button evasion state: the current displacement and the streak of
/// consecutive non-cornering evasions. One instance per button, owned by
/// the component that renders it.
#[derive(Debug, Clone)]
pub struct EvasionController {
    config: EvasionConfig,
    offset: Offset,
    flee_streak: u32,
}

impl Default for EvasionController {
    fn default() -> Self {
        Self::new()
    }
}

impl EvasionController {
    pub fn new() -> Self {
        Self::with_config(EvasionConfig::default())
    }

    pub fn with_config(config: EvasionConfig) -> Self {
        Self {
            config,
            offset: Offset::ZERO,
            flee_streak: 0,
        }
    }

    /// The current displacement from the button's layout position.
    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Consecutive evasions since the last cornering teleport.
    pub fn flee_streak(&self) -> u32 {
        self.flee_streak
    }

    /// Run one evasion step for a pointer sample.
    ///
    /// `button` and `container` are the current on-screen bounding boxes;
    /// the caller skips the call entirely when either is not measurable
    /// yet (unmounted element). Missing geometry is never an error.
    pub fn evade(
        &mut self,
        rng: &mut impl Rng,
        pointer: Point,
        button: Rect,
        container: Rect,
    ) -> EvasionOutcome {
        let center = button.center();
        let distance = pointer.distance_to(center);
        if distance >= self.config.threshold {
            tracing::trace!(distance, "pointer out of range, holding position");
            return EvasionOutcome::Held;
        }

        // Away from the pointer, with a little unpredictability.
        let away = (center.y - pointer.y).atan2(center.x - pointer.x);
        let angle = away + rng.random_range(-self.config.jitter..=self.config.jitter);
        let magnitude = rng.random_range(self.config.escape_min..=self.config.escape_max);
        let candidate = self.offset.stepped(angle, magnitude);

        let bounds = self.config.movement_bounds(button, container);
        let cornered = bounds.escapes_x(candidate) && bounds.escapes_y(candidate);

        if cornered || self.flee_streak > self.config.streak_limit {
            self.offset = bounds.random_offset(rng);
            self.flee_streak = 0;
            tracing::debug!(
                offset.dx = self.offset.dx,
                offset.dy = self.offset.dy,
                "cornered, teleporting"
            );
            EvasionOutcome::Cornered(self.offset)
        } else {
            self.offset = bounds.clamp(candidate);
            self.flee_streak += 1;
            tracing::trace!(
                offset.dx = self.offset.dx,
                offset.dy = self.offset.dy,
                streak = self.flee_streak,
                "fleeing"
            );
            EvasionOutcome::Fled(self.offset)
        }
    }
}

/// Margin kept from the viewport edges by [`scatter`], in px.
const SCATTER_MARGIN: f64 = 20.0;
/// Horizontal half-extent cap for [`scatter`], in px.
const SCATTER_MAX_X: f64 = 200.0;
/// Vertical half-extent cap for [`scatter`], in px.
const SCATTER_MAX_Y: f64 = 150.0;

/// The simpler evasion variant: one random jump on a proximity event.
///
/// No distance gate, no streak, no cornering; just a uniform offset in a
/// box capped by the viewport minus the button and a margin. Used by the
/// gazette rendition of the page.
pub fn scatter(rng: &mut impl Rng, viewport: Rect, button: Rect) -> Offset {
    let half_x = (viewport.width - button.width - SCATTER_MARGIN)
        .min(SCATTER_MAX_X)
        .max(0.0);
    let half_y = (viewport.height - button.height - SCATTER_MARGIN)
        .min(SCATTER_MAX_Y)
        .max(0.0);
    Offset::new(
        random_half_extent(rng, half_x),
        random_half_extent(rng, half_y),
    )
}

fn random_half_extent(rng: &mut impl Rng, half: f64) -> f64 {
    if half > 0.0 {
        rng.random_range(-half..=half)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn button() -> Rect {
        // Centered at (500, 500).
        Rect::new(480.0, 490.0, 40.0, 20.0)
    }

    fn container() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 600.0)
    }

    #[test]
    fn test_distant_pointer_is_held() {
        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(1);
        let outcome = ctl.evade(&mut rng, Point::new(0.0, 0.0), button(), container());
        assert_eq!(outcome, EvasionOutcome::Held);
        assert_eq!(ctl.offset(), Offset::ZERO);
        assert_eq!(ctl.flee_streak(), 0);
    }

    #[test]
    fn test_pointer_at_threshold_is_held() {
        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(2);
        // Exactly 120 px left of center: the gate is inclusive.
        let outcome = ctl.evade(&mut rng, Point::new(380.0, 500.0), button(), container());
        assert_eq!(outcome, EvasionOutcome::Held);
    }

    #[test]
    fn test_near_pointer_triggers_escape_within_bounds() {
        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(3);
        let pointer = Point::new(510.0, 505.0);
        let outcome = ctl.evade(&mut rng, pointer, button(), container());

        let offset = outcome.offset().expect("escape must trigger");
        let bounds = EvasionConfig::default().movement_bounds(button(), container());
        assert!(bounds.contains(offset));

        // Points generally away from the pointer.
        if let EvasionOutcome::Fled(offset) = outcome {
            let center = button().center();
            let away = (center.x - pointer.x, center.y - pointer.y);
            let dot = offset.dx * away.0 + offset.dy * away.1;
            assert!(dot > 0.0, "escape should move away from the pointer");
        }
    }

    #[test]
    fn test_movement_bounds_values() {
        let bounds = EvasionConfig::default().movement_bounds(button(), container());
        assert_eq!(bounds.min_x, -464.0);
        assert_eq!(bounds.max_x, 928.0);
        assert_eq!(bounds.min_y, -474.0);
        assert_eq!(bounds.max_y, 548.0);
    }

    #[test]
    fn test_streak_forces_cornering_on_fifth_evasion() {
        // A huge container keeps the clamp inert, so only the streak can
        // trip the fallback.
        let container = Rect::new(0.0, 0.0, 100_000.0, 100_000.0);
        let button = Rect::new(50_000.0, 50_000.0, 40.0, 20.0);
        let pointer = Point::new(50_025.0, 50_015.0);

        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(4);
        for i in 1..=4u32 {
            let outcome = ctl.evade(&mut rng, pointer, button, container);
            assert!(matches!(outcome, EvasionOutcome::Fled(_)), "evasion {i}");
            assert_eq!(ctl.flee_streak(), i);
        }
        let outcome = ctl.evade(&mut rng, pointer, button, container);
        assert!(matches!(outcome, EvasionOutcome::Cornered(_)));
        assert_eq!(ctl.flee_streak(), 0);
    }

    #[test]
    fn test_cornered_when_clamped_on_both_axes() {
        // Button pinned in the container's top-left corner with a tiny
        // container: every candidate lands outside both spans.
        let container = Rect::new(0.0, 0.0, 120.0, 80.0);
        let button = Rect::new(16.0, 16.0, 40.0, 20.0);
        let pointer = Point::new(40.0, 30.0);

        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(5);
        let bounds = EvasionConfig::default().movement_bounds(button, container);
        // Any 100..150 px step escapes a span this small on both axes.
        let outcome = ctl.evade(&mut rng, pointer, button, container);
        assert!(matches!(outcome, EvasionOutcome::Cornered(_)));
        assert_eq!(ctl.flee_streak(), 0);
        assert!(bounds.contains(ctl.offset()));
    }

    #[test]
    fn test_held_leaves_streak_untouched() {
        let container = Rect::new(0.0, 0.0, 100_000.0, 100_000.0);
        let button = Rect::new(50_000.0, 50_000.0, 40.0, 20.0);
        let near = Point::new(50_025.0, 50_015.0);
        let far = Point::new(0.0, 0.0);

        let mut ctl = EvasionController::new();
        let mut rng = StdRng::seed_from_u64(6);
        ctl.evade(&mut rng, near, button, container);
        ctl.evade(&mut rng, near, button, container);
        let before = (ctl.offset(), ctl.flee_streak());
        assert_eq!(
            ctl.evade(&mut rng, far, button, container),
            EvasionOutcome::Held
        );
        assert_eq!((ctl.offset(), ctl.flee_streak()), before);
    }

    #[test]
    fn test_scatter_stays_inside_caps() {
        let viewport = Rect::new(0.0, 0.0, 1280.0, 800.0);
        let button = Rect::new(600.0, 700.0, 160.0, 48.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let offset = scatter(&mut rng, viewport, button);
            assert!(offset.dx.abs() <= SCATTER_MAX_X);
            assert!(offset.dy.abs() <= SCATTER_MAX_Y);
        }
    }

    #[test]
    fn test_scatter_respects_small_viewport() {
        let viewport = Rect::new(0.0, 0.0, 200.0, 100.0);
        let button = Rect::new(20.0, 20.0, 160.0, 48.0);
        let mut rng = StdRng::seed_from_u64(8);
        for _ in 0..100 {
            let offset = scatter(&mut rng, viewport, button);
            assert!(offset.dx.abs() <= 200.0 - 160.0 - 20.0);
            assert!(offset.dy.abs() <= 100.0 - 48.0 - 20.0);
        }
    }

    #[test]
    fn test_scatter_degenerate_viewport_is_zero() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 40.0);
        let button = Rect::new(0.0, 0.0, 160.0, 48.0);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(scatter(&mut rng, viewport, button), Offset::ZERO);
    }
}
