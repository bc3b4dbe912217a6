//! Motion controller: fling, bring-in, immediate show, and freezing

use courier_animation::{MotionKind, MotionPlan, Tick, Timeline};

use super::{ActiveMotion, CombinedScroller};

/// What the animator is currently doing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MotionState {
    #[default]
    Idle,
    Flinging,
    BringingIn,
}

impl CombinedScroller {
    pub fn motion_state(&self) -> MotionState {
        match self.motion.as_ref().map(|motion| motion.plan.kind) {
            None => MotionState::Idle,
            Some(MotionKind::Fling) => MotionState::Flinging,
            Some(MotionKind::BringIn) => MotionState::BringingIn,
        }
    }

    fn start_motion(&mut self, plan: MotionPlan) {
        let timeline = Timeline::new(self.clock.now(), f64::from(plan.duration));
        self.motion = Some(ActiveMotion { plan, timeline });
    }

    /// Coast from the current position with `v0` px/s
    ///
    /// Returns false when there is no velocity to coast with.
    pub(super) fn start_fling(&mut self, v0: f32) -> bool {
        self.stop_animator();

        let pos0 = self.state.scroll_pos as f32;
        let Some(plan) = MotionPlan::fling(pos0, v0, self.config.fling_decel()) else {
            return false;
        };

        tracing::debug!(
            pos0,
            v0,
            stop = plan.pos2,
            duration = plan.duration,
            "fling"
        );
        self.start_motion(plan);
        true
    }

    /// Animate to combined position `pos`
    ///
    /// Refused before ready, while frozen, and while a finger is on the
    /// scroller. When a motion is already heading to the same point it is
    /// left alone; otherwise its current velocity carries into the new
    /// flight. Returns whether a new flight was started.
    pub fn bring_in(&mut self, pos: i32) -> bool {
        if !self.ready {
            return false;
        }
        if self.freeze_count > 0 {
            tracing::warn!(pos, freeze_count = self.freeze_count, "bring-in refused while frozen");
            return false;
        }
        if self.drag.is_some() {
            return false;
        }

        let pos2 = self.state.fix_pos(pos);

        let mut v0 = 0.0;
        let mut adjust = 0.0;
        if let Some(motion) = self.motion.as_ref() {
            if motion.plan.pos2.round() as i32 == pos2 {
                return false;
            }
            v0 = motion.plan.current_velocity();
            adjust = (v0 * self.config.bring_in_adjust_time).abs();
            self.stop_animator();
        }

        self.sync_with_embedded();

        let pos0 = self.state.scroll_pos as f32;
        let Some(plan) = MotionPlan::bring_in(
            pos0,
            pos2 as f32,
            v0,
            adjust,
            self.config.bring_in_params(),
        ) else {
            return false;
        };

        tracing::debug!(
            pos0,
            pos2,
            v0,
            t1 = plan.t1,
            duration = plan.duration,
            "bring in"
        );
        self.start_motion(plan);
        true
    }

    /// Jump to combined position `pos` without animating
    pub fn show(&mut self, pos: i32) {
        if !self.ready {
            return;
        }

        self.stop_animator();
        self.begin_scroll();
        self.set_pos(pos);
        self.end_scroll();
    }

    /// Stop all motion and refuse bring-ins until the matching pop
    pub fn freeze_push(&mut self) {
        if !self.ready {
            return;
        }

        self.freeze_count += 1;
        tracing::trace!(freeze_count = self.freeze_count, "freeze push");
        self.stop_all();
    }

    pub fn freeze_pop(&mut self) {
        if !self.ready {
            return;
        }

        self.freeze_count = self.freeze_count.saturating_sub(1);
        tracing::trace!(freeze_count = self.freeze_count, "freeze pop");
    }

    pub(super) fn animator_tick(&mut self, now: f64) -> Tick {
        let Some(motion) = self.motion.as_mut() else {
            return Tick::Done;
        };

        let progress = motion.timeline.position(now);
        let pos = motion.plan.sample(progress as f32);

        self.begin_scroll();
        self.set_pos(pos);

        if self.state.scroll_pos != pos || progress >= 1.0 {
            tracing::debug!(pos, resolved = self.state.scroll_pos, "end reached");
            self.motion = None;
            self.end_scroll();
            return Tick::Done;
        }

        Tick::Continue
    }
}

