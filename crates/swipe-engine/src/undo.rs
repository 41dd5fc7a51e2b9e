//! Undo Window
//!
//! Single-level undo with a bounded grace period: `idle -> armed -> idle`.
//! The decay is an explicit scheduled task owned by this state machine and
//! cancelled on every transition out of `armed`. Each arming is stamped with
//! a generation so a task that fires late cannot act on newer state.

use crate::decision::SwipeAction;

/// Time source for decision timestamps and undo expiry checks.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Cancellable decay task. Implementations fire `SwipeFeed::expire_undo`
/// with the stamped generation after the delay elapses, unless cancelled.
pub trait UndoScheduler {
    fn schedule(&mut self, delay_ms: u64, generation: u64);
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoState {
    Idle,
    Armed {
        direction: SwipeAction,
        armed_at_ms: u64,
    },
}

pub struct UndoWindow {
    state: UndoState,
    generation: u64,
    window_ms: u64,
    scheduler: Box<dyn UndoScheduler>,
}

impl UndoWindow {
    pub fn new(window_ms: u64, scheduler: Box<dyn UndoScheduler>) -> Self {
        Self {
            state: UndoState::Idle,
            generation: 0,
            window_ms,
            scheduler,
        }
    }

    pub fn state(&self) -> UndoState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, UndoState::Armed { .. })
    }

    /// Arm for the decision just committed. A newer decision re-arms fresh,
    /// discarding the older undo opportunity along with its decay task.
    pub fn arm(&mut self, direction: SwipeAction, now_ms: u64) {
        self.scheduler.cancel();
        self.generation += 1;
        self.state = UndoState::Armed {
            direction,
            armed_at_ms: now_ms,
        };
        self.scheduler.schedule(self.window_ms, self.generation);
    }

    /// Consume the armed undo, returning the direction to revert. `None`
    /// while idle or once the window has elapsed.
    pub fn take(&mut self, now_ms: u64) -> Option<SwipeAction> {
        let UndoState::Armed {
            direction,
            armed_at_ms,
        } = self.state
        else {
            return None;
        };
        if now_ms.saturating_sub(armed_at_ms) > self.window_ms {
            // Decay task has not fired yet but the window is over.
            self.disarm();
            return None;
        }
        self.disarm();
        Some(direction)
    }

    /// Decay task fired. Ignored unless it belongs to the current arming.
    pub fn expire(&mut self, generation: u64) {
        if generation == self.generation && self.is_armed() {
            self.state = UndoState::Idle;
        }
    }

    /// Drop any armed undo and its decay task (newer decision handled by
    /// `arm`; this is for feed reset and teardown).
    pub fn disarm(&mut self) {
        self.scheduler.cancel();
        self.state = UndoState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{ManualScheduler, TimerEvent};

    fn window_with_log() -> (UndoWindow, ManualScheduler) {
        let scheduler = ManualScheduler::new();
        let window = UndoWindow::new(3000, Box::new(scheduler.clone()));
        (window, scheduler)
    }

    #[test]
    fn arm_schedules_decay() {
        let (mut window, scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 1_000);
        assert!(window.is_armed());
        assert_eq!(
            scheduler.last(),
            Some(TimerEvent::Scheduled {
                delay_ms: 3000,
                generation: 1
            })
        );
    }

    #[test]
    fn take_within_window_returns_direction() {
        let (mut window, _scheduler) = window_with_log();
        window.arm(SwipeAction::Dislike, 1_000);
        assert_eq!(window.take(2_500), Some(SwipeAction::Dislike));
        assert_eq!(window.state(), UndoState::Idle);
    }

    #[test]
    fn take_after_window_is_noop() {
        let (mut window, _scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 1_000);
        assert_eq!(window.take(4_001), None);
        assert_eq!(window.state(), UndoState::Idle);
    }

    #[test]
    fn second_take_is_noop() {
        let (mut window, _scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 0);
        assert!(window.take(100).is_some());
        assert_eq!(window.take(200), None);
    }

    #[test]
    fn rearm_discards_older_opportunity() {
        let (mut window, scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 0);
        window.arm(SwipeAction::Dislike, 500);
        // The stale generation-1 task fires late and must be ignored.
        window.expire(1);
        assert!(window.is_armed());
        assert_eq!(window.take(600), Some(SwipeAction::Dislike));
        assert!(scheduler
            .events()
            .contains(&TimerEvent::Scheduled {
                delay_ms: 3000,
                generation: 2
            }));
    }

    #[test]
    fn expire_with_current_generation_disarms() {
        let (mut window, _scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 0);
        window.expire(1);
        assert_eq!(window.state(), UndoState::Idle);
    }

    #[test]
    fn disarm_cancels_decay_task() {
        let (mut window, scheduler) = window_with_log();
        window.arm(SwipeAction::Like, 0);
        window.disarm();
        assert_eq!(scheduler.last(), Some(TimerEvent::Cancelled));
        assert_eq!(window.take(10), None);
    }
}
