// SPDX-License-Identifier: MPL-2.0
//! Per-notification auto-dismiss countdown.
//!
//! The countdown is a small state machine driven with explicit timestamps so
//! it can be tested without sleeping:
//!
//! ```text
//!   Idle --start--> Running --pause--> Paused
//!                    ^  |                |
//!                    |  +---expire--+    |
//!                    +----resume----|----+
//!                                   v
//!            (any) --close--> Closed (terminal)
//! ```
//!
//! Each time the countdown is (re)scheduled it hands out a new [`Scheduled`]
//! handle tagged with a generation number. Pausing or closing drops the handle,
//! and [`Countdown::expire`] rejects any handle that is not the current one,
//! so at most one scheduled expiry is ever live.

use std::time::{Duration, Instant};

/// Countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Created but not started yet (queued or entering).
    Idle,
    Running,
    Paused,
    /// Terminal.
    Closed,
}

/// Handle to the single outstanding expiry of a countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheduled {
    /// `None` when the remaining time reaches past what `Instant` can hold.
    at: Option<Instant>,
    generation: u64,
}

impl Scheduled {
    /// When the expiry fires, `None` if it never does.
    #[must_use]
    pub fn at(self) -> Option<Instant> {
        self.at
    }

    #[must_use]
    pub fn is_due(self, now: Instant) -> bool {
        self.at.is_some_and(|at| now >= at)
    }
}

/// Auto-dismiss countdown with pause/resume bookkeeping.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    state: TimerState,
    started_at: Option<Instant>,
    scheduled: Option<Scheduled>,
    generation: u64,
}

impl Countdown {
    #[must_use]
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            state: TimerState::Idle,
            started_at: None,
            scheduled: None,
            generation: 0,
        }
    }

    /// Starts counting down the remaining duration from `now`.
    ///
    /// Returns `false` unless the countdown was idle.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Idle {
            return false;
        }
        self.run_from(now);
        true
    }

    /// Stops the countdown and banks the time already elapsed.
    ///
    /// Returns `false` unless the countdown was running.
    pub fn pause(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        let elapsed = self
            .started_at
            .map(|started| now.saturating_duration_since(started))
            .unwrap_or_default();
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.started_at = None;
        self.scheduled = None;
        self.state = TimerState::Paused;
        true
    }

    /// Restarts the countdown with whatever was left when it was paused.
    ///
    /// Returns `false` unless the countdown was paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.state != TimerState::Paused {
            return false;
        }
        self.run_from(now);
        true
    }

    /// Fires the expiry identified by `handle`.
    ///
    /// Stale handles (from before a pause, or after a close) are ignored.
    pub fn expire(&mut self, handle: Scheduled) -> bool {
        if self.state != TimerState::Running || self.scheduled != Some(handle) {
            return false;
        }
        self.remaining = Duration::ZERO;
        self.started_at = None;
        self.scheduled = None;
        self.state = TimerState::Closed;
        true
    }

    /// Closes the countdown from any state, cancelling a pending expiry.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Closed {
            return false;
        }
        self.remaining = self.remaining_at(now);
        self.started_at = None;
        self.scheduled = None;
        self.state = TimerState::Closed;
        true
    }

    /// The outstanding expiry, if any.
    #[must_use]
    pub fn scheduled(&self) -> Option<Scheduled> {
        self.scheduled
    }

    /// The outstanding expiry if it is due at `now`.
    #[must_use]
    pub fn due(&self, now: Instant) -> Option<Scheduled> {
        self.scheduled.filter(|scheduled| scheduled.is_due(now))
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Time left as of `now`. Frozen while idle, paused or closed.
    #[must_use]
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match (self.state, self.started_at) {
            (TimerState::Running, Some(started)) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(started)),
            _ => self.remaining,
        }
    }

    fn run_from(&mut self, now: Instant) {
        self.generation += 1;
        self.started_at = Some(now);
        self.scheduled = Some(Scheduled {
            at: now.checked_add(self.remaining),
            generation: self.generation,
        });
        self.state = TimerState::Running;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn start_schedules_full_duration() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(3000));

        assert!(countdown.start(t0));
        assert_eq!(countdown.state(), TimerState::Running);
        assert_eq!(
            countdown.scheduled().and_then(Scheduled::at),
            Some(t0 + ms(3000))
        );
        assert!(!countdown.start(t0), "second start is rejected");
    }

    #[test]
    fn pause_then_resume_preserves_remaining_time() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(3000));
        countdown.start(t0);

        assert!(countdown.pause(t0 + ms(1000)));
        assert_eq!(countdown.remaining_at(t0 + ms(5000)), ms(2000));
        assert!(countdown.scheduled().is_none());

        let resumed_at = t0 + ms(10_000);
        assert!(countdown.resume(resumed_at));
        assert!(countdown.due(resumed_at + ms(1999)).is_none());
        let handle = countdown
            .due(resumed_at + ms(2000))
            .expect("expiry is due after the remaining 2000ms");
        assert!(countdown.expire(handle));
        assert_eq!(countdown.state(), TimerState::Closed);
    }

    #[test]
    fn repeated_pauses_accumulate() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(3000));
        countdown.start(t0);
        countdown.pause(t0 + ms(500));
        countdown.resume(t0 + ms(1000));
        countdown.pause(t0 + ms(1500));

        assert_eq!(countdown.remaining_at(t0 + ms(1500)), ms(2000));
    }

    #[test]
    fn invalid_transitions_are_rejected() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(3000));

        assert!(!countdown.pause(t0), "cannot pause before start");
        assert!(!countdown.resume(t0), "cannot resume while idle");

        countdown.start(t0);
        assert!(!countdown.resume(t0), "cannot resume while running");
        countdown.pause(t0);
        assert!(!countdown.pause(t0), "cannot pause twice");
    }

    #[test]
    fn stale_handle_does_not_expire() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(1000));
        countdown.start(t0);
        let stale = countdown.scheduled().expect("scheduled after start");

        countdown.pause(t0 + ms(200));
        countdown.resume(t0 + ms(300));

        assert!(!countdown.expire(stale));
        assert_eq!(countdown.state(), TimerState::Running);
        assert_eq!(
            countdown.scheduled().and_then(Scheduled::at),
            Some(t0 + ms(1100))
        );
    }

    #[test]
    fn close_cancels_and_blocks_later_expiry() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(1000));
        countdown.start(t0);
        let handle = countdown.scheduled().expect("scheduled after start");

        assert!(countdown.close(t0 + ms(400)));
        assert!(countdown.scheduled().is_none());
        assert!(!countdown.expire(handle));
        assert!(!countdown.close(t0 + ms(500)), "close is terminal");
        assert_eq!(countdown.remaining_at(t0 + ms(900)), ms(600));
    }

    #[test]
    fn remaining_never_underflows() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(ms(100));
        countdown.start(t0);

        assert_eq!(countdown.remaining_at(t0 + ms(500)), Duration::ZERO);
        countdown.pause(t0 + ms(500));
        assert_eq!(countdown.remaining_at(t0 + ms(500)), Duration::ZERO);
    }

    #[test]
    fn unbounded_duration_never_expires() {
        let t0 = Instant::now();
        let mut countdown = Countdown::new(Duration::MAX);

        assert!(countdown.start(t0));
        let handle = countdown.scheduled().expect("scheduled after start");
        assert_eq!(handle.at(), None);
        assert!(countdown.due(t0 + ms(86_400_000)).is_none());

        assert!(countdown.pause(t0 + ms(1000)));
        assert!(countdown.resume(t0 + ms(2000)));
        assert_eq!(countdown.state(), TimerState::Running);
        assert!(countdown.close(t0 + ms(3000)));
    }
}
