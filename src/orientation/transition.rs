// SPDX-License-Identifier: MPL-2.0
//! Animated transition of the interface rectangle between orientations.
//!
//! The controller owns the interface's current size and angle and moves them
//! toward the target implied by the most recent device orientation. All time
//! arrives through [`Transition::update`], so the animation curve is a pure
//! function of stored state and the caller's clock.

use super::{Orientation, Transform2D};
use iced::{Size, Vector};
use std::f32::consts::{PI, TAU};

/// Default animation window in seconds.
pub const DEFAULT_ANIMATION_DURATION_SECS: f32 = 0.25;

/// Animated orientation transition for an interface rectangle inside a
/// fixed device frame.
///
/// The device frame never rotates; the interface rectangle inside it
/// resizes and turns about the frame's center whenever the device
/// orientation changes. A change supersedes any transition still in flight
/// by overwriting the target and the interpolation snapshot.
#[derive(Debug, Clone)]
pub struct Transition {
    device_size: Size,
    duration: f32,
    orientation: Orientation,
    size: Size,
    angle: f32,
    target_size: Size,
    target_angle: f32,
    prev_size: Size,
    prev_angle: f32,
    /// Clock reading when the running transition started; `None` when the
    /// last change was applied without an animation window.
    started_at: Option<f32>,
    settled: bool,
    matrix: Transform2D,
}

impl Transition {
    /// Creates a controller settled in `orientation`, sized to the device
    /// frame, with no animation pending.
    #[must_use]
    pub fn new(device_size: Size, duration: f32, orientation: Orientation) -> Self {
        let mut transition = Self {
            device_size,
            duration,
            orientation: Orientation::Portrait,
            size: device_size,
            angle: 0.0,
            target_size: device_size,
            target_angle: 0.0,
            prev_size: device_size,
            prev_angle: 0.0,
            started_at: None,
            settled: true,
            matrix: Transform2D::IDENTITY,
        };
        // The very first orientation snaps instead of animating.
        transition.set_orientation(orientation, false, 0.0);
        transition.update(0.0);
        transition
    }

    /// Applies a device orientation change.
    ///
    /// Setting the orientation that is already current leaves every field
    /// untouched, including the timing of a transition still in flight.
    /// With `animate` false the next [`update`](Self::update) jumps straight
    /// to the target; otherwise `now` marks the start of the animation
    /// window.
    pub fn set_orientation(&mut self, orientation: Orientation, animate: bool, now: f32) {
        if orientation == self.orientation {
            return;
        }
        self.orientation = orientation;

        // The angle may have accumulated whole turns; bring it back into
        // [0, 2π) so the shortest-path choice below is meaningful.
        while self.angle < 0.0 {
            self.angle += TAU;
        }
        while self.angle >= TAU {
            self.angle -= TAU;
        }

        // Rotating the frame extents by the device angle swaps width and
        // height for quarter turns and preserves them for half turns.
        let device_angle = orientation.device_angle();
        let (sin, cos) = device_angle.sin_cos();
        self.target_size = Size::new(
            (self.device_size.width * cos + self.device_size.height * sin).abs(),
            (self.device_size.height * cos + self.device_size.width * sin).abs(),
        );
        self.target_angle = TAU - device_angle;

        // Never turn more than half a revolution.
        if (self.target_angle - self.angle).abs() > PI {
            if self.target_angle < self.angle {
                self.target_angle += TAU;
            } else {
                self.target_angle -= TAU;
            }
        }

        self.prev_size = self.size;
        self.prev_angle = self.angle;
        self.started_at = animate.then_some(now);
        self.settled = false;
    }

    /// Samples the animation at `now` (seconds on the caller's monotonic
    /// clock) and recomputes the interface transform.
    ///
    /// Inside the animation window size and angle interpolate linearly from
    /// the snapshot toward the target; at and after the window's end they
    /// equal the target exactly, so repeated calls are idempotent once the
    /// transition has converged.
    pub fn update(&mut self, now: f32) {
        let elapsed = match self.started_at {
            Some(started_at) => now - started_at,
            None => self.duration,
        };

        if elapsed < self.duration {
            let p = elapsed / self.duration;
            self.size = Size::new(
                lerp(self.prev_size.width, self.target_size.width, p),
                lerp(self.prev_size.height, self.target_size.height, p),
            );
            self.angle = lerp(self.prev_angle, self.target_angle, p);
            self.settled = false;
        } else {
            self.size = self.target_size;
            self.angle = self.target_angle;
            self.settled = true;
        }

        // Pivot about the device center, not the rectangle corner: move out
        // to the center, rotate, then step back by half the current size.
        self.matrix = Transform2D::IDENTITY
            .translated(Vector::new(
                self.device_size.width / 2.0,
                self.device_size.height / 2.0,
            ))
            .rotated(self.angle)
            .translated(Vector::new(-self.size.width / 2.0, -self.size.height / 2.0));
    }

    /// The fixed device frame size.
    #[must_use]
    pub fn device_size(&self) -> Size {
        self.device_size
    }

    /// The orientation the interface is converging toward or has reached.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current interface size, possibly mid-animation.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Current interface angle in radians, possibly mid-animation.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The composed placement transform for the interface rectangle.
    #[must_use]
    pub fn transform(&self) -> Transform2D {
        self.matrix
    }

    /// Whether the last sampled state has reached the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled
    }
}

fn lerp(from: f32, to: f32, p: f32) -> f32 {
    from + (to - from) * p
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEVICE: Size = Size {
        width: 384.0,
        height: 512.0,
    };
    const EPS: f32 = 1e-3;

    fn settled_in(orientation: Orientation) -> Transition {
        Transition::new(DEVICE, DEFAULT_ANIMATION_DURATION_SECS, orientation)
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn new_starts_settled_without_animation() {
        let transition = settled_in(Orientation::Portrait);
        assert!(transition.is_settled());
        assert_close(transition.size().width, 384.0);
        assert_close(transition.size().height, 512.0);
        assert_close(transition.angle(), 0.0);
    }

    #[test]
    fn new_snaps_to_a_landscape_start() {
        let transition = settled_in(Orientation::LandscapeRight);
        assert!(transition.is_settled());
        assert_close(transition.size().width, 512.0);
        assert_close(transition.size().height, 384.0);
    }

    #[test]
    fn portrait_to_landscape_right_swaps_size_and_turns_minus_quarter() {
        // Reference scenario: target ≈ 512×384, target angle 3π/2 corrected
        // to −π/2 relative to a current angle of 0.
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeRight, true, 1.0);
        transition.update(1.0 + DEFAULT_ANIMATION_DURATION_SECS);

        assert_close(transition.size().width, 512.0);
        assert_close(transition.size().height, 384.0);
        assert_close(transition.angle(), -PI / 2.0);
    }

    #[test]
    fn portrait_to_upside_down_keeps_size_and_turns_half() {
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::UpsideDownPortrait, true, 0.0);
        transition.update(DEFAULT_ANIMATION_DURATION_SECS);

        assert_close(transition.size().width, 384.0);
        assert_close(transition.size().height, 512.0);
        assert_close(transition.angle(), PI);
    }

    #[test]
    fn setting_the_current_orientation_is_a_no_op() {
        // Settled case: nothing moves.
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::Portrait, true, 3.0);
        transition.update(3.1);
        assert!(transition.is_settled());
        assert_close(transition.angle(), 0.0);
        assert_close(transition.size().width, 384.0);

        // In-flight case: re-announcing the orientation must not restart
        // the window or move the snapshot; the transition still completes
        // 0.25s after the original start.
        transition.set_orientation(Orientation::LandscapeRight, true, 0.0);
        transition.set_orientation(Orientation::LandscapeRight, true, 0.1);
        transition.update(0.2);
        assert_close(transition.angle(), lerp(0.0, -PI / 2.0, 0.8));
        transition.update(0.25);
        assert!(transition.is_settled());
        assert_close(transition.angle(), -PI / 2.0);
    }

    #[test]
    fn non_animated_change_snaps_on_the_next_update() {
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeLeft, false, 123.0);
        // Any clock reading at all must land exactly on the target.
        transition.update(0.0);

        assert!(transition.is_settled());
        assert_close(transition.size().width, 512.0);
        assert_close(transition.size().height, 384.0);
        assert_close(transition.angle(), PI / 2.0);
    }

    #[test]
    fn animated_change_starts_at_previous_and_ends_at_target() {
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeRight, true, 2.0);

        transition.update(2.0);
        assert_close(transition.angle(), 0.0);
        assert_close(transition.size().width, 384.0);
        assert_close(transition.size().height, 512.0);

        transition.update(2.0 + DEFAULT_ANIMATION_DURATION_SECS);
        assert_close(transition.angle(), -PI / 2.0);
        assert_close(transition.size().width, 512.0);

        // Later samples are idempotent, no residual drift.
        transition.update(10.0);
        assert_close(transition.angle(), -PI / 2.0);
        assert_close(transition.size().width, 512.0);
    }

    #[test]
    fn interpolation_is_linear_and_monotone() {
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeRight, true, 0.0);

        let mut last_distance = f32::INFINITY;
        for step in 0..=10 {
            let p = step as f32 / 10.0;
            transition.update(p * DEFAULT_ANIMATION_DURATION_SECS);

            // On the straight line between previous and target.
            assert_close(transition.angle(), lerp(0.0, -PI / 2.0, p));
            assert_close(transition.size().width, lerp(384.0, 512.0, p));
            assert_close(transition.size().height, lerp(512.0, 384.0, p));

            let distance = (transition.angle() - (-PI / 2.0)).abs();
            assert!(distance <= last_distance + EPS);
            last_distance = distance;
        }
    }

    /// Angle actually swept by one animated change: the difference between
    /// the sample at the window's end and the sample at its start (which is
    /// the normalized snapshot the shortest-path choice was made against).
    fn swept_angle(transition: &mut Transition, to: Orientation, start: f32) -> f32 {
        transition.set_orientation(to, true, start);
        transition.update(start);
        let from_angle = transition.angle();
        transition.update(start + DEFAULT_ANIMATION_DURATION_SECS);
        transition.angle() - from_angle
    }

    #[test]
    fn rotation_never_exceeds_half_a_turn_for_any_pair() {
        for from in Orientation::ALL {
            for to in Orientation::ALL {
                if from == to {
                    continue;
                }
                let mut transition = settled_in(from);
                let delta = swept_angle(&mut transition, to, 5.0);
                assert!(
                    delta.abs() <= PI + EPS,
                    "{from:?} -> {to:?} turned {delta} rad"
                );
            }
        }
    }

    #[test]
    fn clockwise_laps_sweep_a_quarter_turn_per_step() {
        // Walk two full clockwise laps; the accumulated angle keeps being
        // folded back into [0, 2π), so every step sweeps exactly −π/2
        // instead of unwinding the turns already taken.
        let mut transition = settled_in(Orientation::Portrait);
        let mut now = 0.0;
        let mut orientation = Orientation::Portrait;
        for _ in 0..8 {
            orientation = orientation.rotated_clockwise();
            let delta = swept_angle(&mut transition, orientation, now);
            now += DEFAULT_ANIMATION_DURATION_SECS;
            assert_close(delta, -PI / 2.0);
        }
        assert_eq!(transition.orientation(), orientation);
    }

    #[test]
    fn superseding_a_transition_restarts_from_the_midpoint() {
        fn fold(angle: f32) -> f32 {
            angle.rem_euclid(TAU)
        }

        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeRight, true, 0.0);
        transition.update(0.125);
        let midway_angle = transition.angle();
        assert_close(midway_angle, -PI / 4.0);

        // A new notification overwrites the target and snapshot; the old
        // animation has no identity of its own to cancel. Angles compare
        // modulo a full turn because the snapshot is renormalized.
        transition.set_orientation(Orientation::Portrait, true, 0.125);
        transition.update(0.125);
        assert_close(fold(transition.angle()), fold(midway_angle));
        transition.update(0.125 + DEFAULT_ANIMATION_DURATION_SECS);
        assert!(transition.is_settled());
        assert_close(fold(transition.angle()), 0.0);
        assert_close(transition.size().width, 384.0);
    }

    #[test]
    fn transform_pivots_about_the_device_center() {
        use iced::Point;

        // Settled upside down the interface keeps the device size, so its
        // origin corner lands diagonally opposite across the center.
        let transition = settled_in(Orientation::UpsideDownPortrait);
        let corner = transition.transform().transform_point(Point::ORIGIN);
        assert_close(corner.x, 384.0);
        assert_close(corner.y, 512.0);

        // The interface center always coincides with the device center,
        // whatever the current size and angle.
        let mut transition = settled_in(Orientation::Portrait);
        transition.set_orientation(Orientation::LandscapeLeft, true, 0.0);
        transition.update(0.1);
        let size = transition.size();
        let center = transition
            .transform()
            .transform_point(Point::new(size.width / 2.0, size.height / 2.0));
        assert_close(center.x, 192.0);
        assert_close(center.y, 256.0);
    }
}
