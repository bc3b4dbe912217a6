//! Closed-form scroll motion
//!
//! Two motions are supported, both evaluated analytically per frame rather
//! than integrated:
//!
//! - **Fling**: single-phase constant deceleration after a drag release.
//! - **Bring-in**: two-phase motion (accelerate, then decelerate) that lands
//!   exactly on a target with zero velocity. Accelerations are scaled by the
//!   displacement so short and long trips take similar time.
//!
//! Positions are in pixels, velocities in px/s, accelerations in px/s² and
//! times in seconds.

/// Which motion a plan describes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionKind {
    Fling,
    BringIn,
}

/// Tuning for the bring-in solver
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BringInParams {
    /// Phase-1 acceleration per pixel of displacement
    pub accel: f32,
    /// Phase-2 deceleration per pixel of displacement
    pub decel: f32,
}

impl Default for BringInParams {
    fn default() -> Self {
        Self {
            accel: 20.0,
            decel: 10.0,
        }
    }
}

/// A piecewise constant-acceleration flight
///
/// Phase 1 runs from `pos0` with `v0`/`a1` until `t1`; phase 2 runs from
/// `pos1` with `v1`/`a2` until `duration`. `pos2` is the intended final
/// position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPlan {
    pub kind: MotionKind,
    pub pos0: f32,
    pub pos1: f32,
    pub pos2: f32,
    pub v0: f32,
    pub v1: f32,
    pub a1: f32,
    pub a2: f32,
    pub t1: f32,
    pub duration: f32,
    /// Seconds consumed so far, updated by the animator
    pub elapsed: f32,
}

impl MotionPlan {
    /// Decelerate from `v0` to rest at a constant `decel` magnitude
    ///
    /// Returns `None` when there is no velocity to bleed off or the
    /// deceleration is not positive.
    pub fn fling(pos0: f32, v0: f32, decel: f32) -> Option<Self> {
        if v0 == 0.0 || !v0.is_finite() || decel <= 0.0 {
            return None;
        }

        let a1 = if v0 > 0.0 { -decel } else { decel };
        let t1 = -v0 / a1;
        let pos1 = pos0 + v0 * t1 + 0.5 * a1 * t1 * t1;

        Some(Self {
            kind: MotionKind::Fling,
            pos0,
            pos1,
            pos2: pos1,
            v0,
            v1: 0.0,
            a1,
            a2: 0.0,
            t1,
            duration: t1,
            elapsed: 0.0,
        })
    }

    /// Solve a two-phase flight from `pos0` to `pos2` entering with `v0`
    ///
    /// `adjust` enlarges the acceleration scale when an in-flight motion is
    /// being continued, so a fast entry velocity does not overshoot.
    ///
    /// With phase-1 acceleration `a1` and phase-2 acceleration `a2`, landing
    /// on the target at rest gives
    ///
    /// ```text
    /// (a1 - a1²/a2)·t1² + (2·v0 - 2·v0·a1/a2)·t1 + (-2·Δ - v0²/a2) = 0
    /// duration = t1 - (v0 + a1·t1)/a2
    /// ```
    ///
    /// The root matching the sign of `a1` is taken. If it is negative the
    /// profile must decelerate first, so the phases are swapped and the
    /// quadratic solved once more.
    pub fn bring_in(
        pos0: f32,
        pos2: f32,
        v0: f32,
        adjust: f32,
        params: BringInParams,
    ) -> Option<Self> {
        let delta = pos2 - pos0;
        let a_scale = delta + if delta > 0.0 { adjust } else { -adjust };
        if a_scale == 0.0 {
            tracing::debug!("bring-in: zero acceleration scale");
            return None;
        }

        let mut a1 = params.accel * a_scale;
        let mut a2 = -params.decel * a_scale;
        let mut a2_inv = 1.0 / a2;
        let mut t1 = 0.0;

        for _ in 0..2 {
            let k = 1.0 - a1 * a2_inv;
            let a = a1 * k;
            let b = 2.0 * v0 * k;
            let c = -2.0 * delta - v0 * v0 * a2_inv;
            let d = b * b - 4.0 * a * c;

            t1 = if a1 > 0.0 {
                (-b + d.sqrt()) / (2.0 * a)
            } else {
                (-b - d.sqrt()) / (2.0 * a)
            };

            if t1 >= 0.0 {
                break;
            }

            std::mem::swap(&mut a1, &mut a2);
            a2_inv = 1.0 / a2;
        }

        if !(t1.is_finite() && t1 >= 0.0) {
            tracing::debug!(t1, "bring-in: no valid phase split");
            return None;
        }

        let v1 = v0 + a1 * t1;
        let duration = t1 - v1 * a2_inv;
        if !(duration.is_finite() && duration > 0.0) {
            tracing::debug!(duration, "bring-in: degenerate duration");
            return None;
        }

        Some(Self {
            kind: MotionKind::BringIn,
            pos0,
            pos1: pos0 + v0 * t1 + 0.5 * a1 * t1 * t1,
            pos2,
            v0,
            v1,
            a1,
            a2,
            t1,
            duration,
            elapsed: 0.0,
        })
    }

    /// Unrounded position `t` seconds into the flight
    pub fn position_at(&self, t: f32) -> f32 {
        if t <= self.t1 {
            self.pos0 + self.v0 * t + 0.5 * self.a1 * t * t
        } else {
            let t = t - self.t1;
            self.pos1 + self.v1 * t + 0.5 * self.a2 * t * t
        }
    }

    /// Velocity `t` seconds into the flight
    pub fn velocity_at(&self, t: f32) -> f32 {
        if t <= self.t1 {
            self.v0 + self.a1 * t
        } else {
            self.v1 + self.a2 * (t - self.t1)
        }
    }

    /// Velocity at the last sampled instant
    pub fn current_velocity(&self) -> f32 {
        self.velocity_at(self.elapsed)
    }

    /// Sample the flight at normalized progress `progress` in `[0, 1]`
    ///
    /// Records the elapsed time and returns the position in whole pixels.
    /// Half a pixel is added and the result truncated toward zero, so
    /// positions just below zero land on zero.
    pub fn sample(&mut self, progress: f32) -> i32 {
        let t = progress * self.duration;
        self.elapsed = t;
        (self.position_at(t) + 0.5) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-2;

    #[test]
    fn test_fling_stops_at_closed_form_distance() {
        let plan = MotionPlan::fling(100.0, 2000.0, 5000.0).unwrap();

        assert_eq!(plan.kind, MotionKind::Fling);
        assert!(plan.a1 < 0.0);
        assert!((plan.duration - 0.4).abs() < 1e-6);

        let expected = 100.0 + 2000.0 * 2000.0 / (2.0 * 5000.0);
        assert!((plan.position_at(plan.duration) - expected).abs() < EPS);
        assert!((plan.pos2 - expected).abs() < EPS);
        assert!(plan.velocity_at(plan.duration).abs() < EPS);
    }

    #[test]
    fn test_fling_upward() {
        let plan = MotionPlan::fling(500.0, -1000.0, 5000.0).unwrap();
        assert!(plan.a1 > 0.0);
        assert!((plan.position_at(plan.duration) - 400.0).abs() < EPS);
    }

    #[test]
    fn test_fling_without_velocity() {
        assert!(MotionPlan::fling(0.0, 0.0, 5000.0).is_none());
        assert!(MotionPlan::fling(0.0, 10.0, 0.0).is_none());
    }

    #[test]
    fn test_bring_in_from_rest() {
        let plan = MotionPlan::bring_in(0.0, 100.0, 0.0, 0.0, BringInParams::default()).unwrap();

        assert_eq!(plan.kind, MotionKind::BringIn);
        assert!(plan.t1 > 0.0 && plan.t1 < plan.duration);
        assert!((plan.position_at(plan.duration) - 100.0).abs() < EPS);
        assert!(plan.velocity_at(plan.duration).abs() < 0.5);
    }

    #[test]
    fn test_bring_in_backwards() {
        let plan = MotionPlan::bring_in(300.0, 50.0, 0.0, 0.0, BringInParams::default()).unwrap();
        assert!(plan.a1 < 0.0);
        assert!((plan.position_at(plan.duration) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_bring_in_swaps_phases_for_fast_entry() {
        // Entering much faster than the first-phase root allows: the solver
        // must decelerate first.
        let plan = MotionPlan::bring_in(0.0, 100.0, 2000.0, 200.0, BringInParams::default())
            .unwrap();

        assert!(plan.a1 < 0.0);
        assert!(plan.a2 > 0.0);
        assert!(plan.t1 >= 0.0);
        assert!((plan.position_at(plan.duration) - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_bring_in_zero_displacement() {
        assert!(MotionPlan::bring_in(42.0, 42.0, 0.0, 0.0, BringInParams::default()).is_none());
    }

    #[test]
    fn test_sample_records_elapsed() {
        let mut plan =
            MotionPlan::bring_in(0.0, 100.0, 0.0, 0.0, BringInParams::default()).unwrap();

        assert_eq!(plan.sample(0.0), 0);
        plan.sample(0.5);
        assert!((plan.elapsed - plan.duration * 0.5).abs() < 1e-6);
        assert_eq!(plan.sample(1.0), 100);
    }

    #[test]
    fn test_sample_truncates_toward_zero() {
        let mut plan = MotionPlan::fling(0.0, -1000.0, 5000.0).unwrap();

        // 0.8 ms in, the flight is about 0.8 px above the start.
        let progress = 0.0008 / plan.duration;
        assert!((plan.position_at(0.0008) + 0.7984).abs() < EPS);
        assert_eq!(plan.sample(progress), 0);

        // Further out, the sample follows the flight below zero.
        let progress = 0.002 / plan.duration;
        assert_eq!(plan.sample(progress), -1);
    }

    #[test]
    fn test_velocity_is_continuous_at_phase_split() {
        let plan = MotionPlan::bring_in(0.0, 250.0, 0.0, 0.0, BringInParams::default()).unwrap();
        let before = plan.velocity_at(plan.t1);
        let after = plan.velocity_at(plan.t1 + 1e-4);
        assert!((before - after).abs() < 1.0);
    }
}
