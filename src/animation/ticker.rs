//! Fixed-cadence rotation ticker.
//!
//! The ticker is driven cooperatively by the event loop: the loop sleeps
//! until [`AnimationTicker::deadline`], then calls
//! [`AnimationTicker::tick`]. That wait is the only suspension point, and
//! the status is checked once per tick, so pause and stop take effect on
//! the next tick without any locking.

use std::time::Duration;

use web_time::Instant;

use crate::engine::state::wrap_degrees;

/// Lifecycle of the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStatus {
    /// Not animating; the angle is at its initial value.
    #[default]
    Stopped,
    /// Advancing the angle every tick.
    Running,
    /// Frozen at the current angle. No ticks are scheduled.
    Paused,
}

/// Advances a rotation angle by a fixed step at a fixed interval while
/// running.
#[derive(Debug, Clone)]
pub struct AnimationTicker {
    status: AnimationStatus,
    angle: f32,
    step: f32,
    interval: Duration,
    next_tick: Option<Instant>,
}

impl AnimationTicker {
    /// Create a stopped ticker that adds `step_degrees` every `interval`.
    #[must_use]
    pub fn new(step_degrees: f32, interval: Duration) -> Self {
        Self {
            status: AnimationStatus::Stopped,
            angle: 0.0,
            step: step_degrees,
            interval,
            next_tick: None,
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Current angle in degrees, in `[0, 360)`.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// When the next tick is due. `None` unless running.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    /// Enter Running from Stopped or Paused. The first tick is due one
    /// interval after `now`.
    ///
    /// Returns `false` (and changes nothing) when already running.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.status == AnimationStatus::Running {
            return false;
        }
        log::debug!("animation {:?} -> Running", self.status);
        self.status = AnimationStatus::Running;
        self.next_tick = Some(now + self.interval);
        true
    }

    /// Enter Paused from Running. The angle is kept.
    ///
    /// Returns `false` when not running.
    pub fn pause(&mut self) -> bool {
        if self.status != AnimationStatus::Running {
            return false;
        }
        log::debug!("animation Running -> Paused at {:.1}°", self.angle);
        self.status = AnimationStatus::Paused;
        self.next_tick = None;
        true
    }

    /// Enter Stopped from Running or Paused and reset the angle to zero.
    ///
    /// Returns `true` when the transition happened; the caller should
    /// redraw once at the reset angle.
    pub fn stop(&mut self) -> bool {
        if self.status == AnimationStatus::Stopped {
            return false;
        }
        log::debug!("animation {:?} -> Stopped", self.status);
        self.status = AnimationStatus::Stopped;
        self.angle = 0.0;
        self.next_tick = None;
        true
    }

    /// Advance by one step if running and the deadline has passed.
    ///
    /// At most one step is applied per call. If the loop fell behind by
    /// more than an interval, the schedule restarts from `now` instead of
    /// bursting to catch up.
    ///
    /// Returns `true` when the angle changed and a frame should be drawn.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(due) = self.next_tick else {
            return false;
        };
        if self.status != AnimationStatus::Running || now < due {
            return false;
        }

        self.angle = wrap_degrees(self.angle + self.step);

        let next = due + self.interval;
        self.next_tick = Some(if next <= now { now + self.interval } else { next });
        true
    }
}

impl Default for AnimationTicker {
    fn default() -> Self {
        Self::new(1.0, Duration::from_millis(10))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(10);

    fn ticker() -> AnimationTicker {
        AnimationTicker::new(1.0, INTERVAL)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let t = ticker();
        assert_eq!(t.status(), AnimationStatus::Stopped);
        assert_eq!(t.angle(), 0.0);
        assert_eq!(t.deadline(), None);
    }

    #[test]
    fn running_advances_once_per_interval() {
        let mut t = ticker();
        let t0 = Instant::now();
        assert!(t.start(t0));
        assert!(!t.tick(t0), "not due yet");
        assert!(t.tick(t0 + INTERVAL));
        assert!(!t.tick(t0 + INTERVAL), "same deadline only once");
        assert!(t.tick(t0 + INTERVAL * 2));
        assert_eq!(t.angle(), 2.0);
        assert_eq!(t.deadline(), Some(t0 + INTERVAL * 3));
    }

    #[test]
    fn late_tick_applies_one_step_and_reschedules() {
        let mut t = ticker();
        let t0 = Instant::now();
        let _ = t.start(t0);
        let late = t0 + INTERVAL * 10;
        assert!(t.tick(late));
        assert_eq!(t.angle(), 1.0);
        assert_eq!(t.deadline(), Some(late + INTERVAL));
    }

    #[test]
    fn pause_freezes_angle_and_schedule() {
        let mut t = ticker();
        let t0 = Instant::now();
        let _ = t.start(t0);
        let _ = t.tick(t0 + INTERVAL);
        assert!(t.pause());
        assert_eq!(t.status(), AnimationStatus::Paused);
        assert_eq!(t.deadline(), None);
        assert!(!t.tick(t0 + INTERVAL * 5));
        assert_eq!(t.angle(), 1.0);
    }

    #[test]
    fn resume_from_pause_keeps_angle() {
        let mut t = ticker();
        let t0 = Instant::now();
        let _ = t.start(t0);
        let _ = t.tick(t0 + INTERVAL);
        let _ = t.pause();
        let t1 = t0 + INTERVAL * 50;
        assert!(t.start(t1));
        assert!(t.tick(t1 + INTERVAL));
        assert_eq!(t.angle(), 2.0);
    }

    #[test]
    fn stop_resets_and_restart_begins_from_zero() {
        let mut t = ticker();
        let t0 = Instant::now();
        let _ = t.start(t0);
        for i in 1..=5 {
            let _ = t.tick(t0 + INTERVAL * i);
        }
        assert_eq!(t.angle(), 5.0);
        assert!(t.stop());
        assert_eq!(t.status(), AnimationStatus::Stopped);
        assert_eq!(t.angle(), 0.0);
        assert_eq!(t.deadline(), None);

        let t1 = t0 + INTERVAL * 100;
        assert!(t.start(t1));
        assert!(t.tick(t1 + INTERVAL));
        assert_eq!(t.angle(), 1.0);
    }

    #[test]
    fn stop_from_paused_resets() {
        let mut t = ticker();
        let t0 = Instant::now();
        let _ = t.start(t0);
        let _ = t.tick(t0 + INTERVAL);
        let _ = t.pause();
        assert!(t.stop());
        assert_eq!(t.angle(), 0.0);
    }

    #[test]
    fn invalid_transitions_are_no_ops() {
        let mut t = ticker();
        let t0 = Instant::now();
        assert!(!t.pause(), "pause from Stopped");
        assert!(!t.stop(), "stop from Stopped");
        assert!(t.start(t0));
        assert!(!t.start(t0 + INTERVAL * 3), "start while Running");
        assert_eq!(t.deadline(), Some(t0 + INTERVAL));
    }

    #[test]
    fn angle_wraps_at_full_turn() {
        let mut t = AnimationTicker::new(90.0, INTERVAL);
        let t0 = Instant::now();
        let _ = t.start(t0);
        for i in 1..=5 {
            let _ = t.tick(t0 + INTERVAL * i);
        }
        assert_eq!(t.angle(), 90.0);
    }

    #[test]
    fn tiny_negative_step_stays_below_full_turn() {
        let mut t = AnimationTicker::new(-1e-6, INTERVAL);
        let t0 = Instant::now();
        let _ = t.start(t0);
        assert!(t.tick(t0 + INTERVAL));
        assert!((0.0..360.0).contains(&t.angle()));
    }
}
