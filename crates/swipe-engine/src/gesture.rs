//! Gesture Tracker
//!
//! Converts a pointer-drag stream into a 2-D offset. A movement threshold
//! separates taps from drags; decision logic lives elsewhere.

/// 2-D drag offset in pixels, relative to the press point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Tracker states: a press is `Pending` until it moves far enough to count
/// as a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureState {
    Idle,
    Pending { start: Offset },
    Dragging { start: Offset, current: Offset },
}

/// Per-gesture pointer state. Offset updates are 1:1 with pointer deltas.
#[derive(Debug)]
pub struct GestureTracker {
    state: GestureState,
    threshold_px: f64,
}

impl GestureTracker {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            state: GestureState::Idle,
            threshold_px,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Current drag offset; origin unless a drag is in progress.
    pub fn offset(&self) -> Offset {
        match self.state {
            GestureState::Dragging { start, current } => {
                Offset::new(current.x - start.x, current.y - start.y)
            }
            _ => Offset::ORIGIN,
        }
    }

    /// Record a press. Only accepted from `Idle`; the caller gates on the
    /// feed-level start condition (not animating, no detail overlay).
    pub fn press(&mut self, x: f64, y: f64) -> bool {
        if !matches!(self.state, GestureState::Idle) {
            return false;
        }
        self.state = GestureState::Pending {
            start: Offset::new(x, y),
        };
        true
    }

    /// Track pointer movement, promoting a pending press to a drag once it
    /// moves past the threshold on either axis.
    pub fn movement(&mut self, x: f64, y: f64) {
        match self.state {
            GestureState::Pending { start } => {
                let dx = (x - start.x).abs();
                let dy = (y - start.y).abs();
                if dx >= self.threshold_px || dy >= self.threshold_px {
                    self.state = GestureState::Dragging {
                        start,
                        current: Offset::new(x, y),
                    };
                }
            }
            GestureState::Dragging { start, .. } => {
                self.state = GestureState::Dragging {
                    start,
                    current: Offset::new(x, y),
                };
            }
            GestureState::Idle => {}
        }
    }

    /// Finalize the gesture. Returns the release offset if the pointer was
    /// actually dragging; a bare tap yields `None`.
    pub fn release(&mut self) -> Option<Offset> {
        let released = match self.state {
            GestureState::Dragging { .. } => Some(self.offset()),
            _ => None,
        };
        self.state = GestureState::Idle;
        released
    }

    /// Abort the gesture (pointer-cancel, teardown). No offset is produced.
    pub fn abort(&mut self) {
        self.state = GestureState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tap_is_not_a_drag() {
        let mut tracker = GestureTracker::new(5.0);
        assert!(tracker.press(100.0, 100.0));
        tracker.movement(102.0, 101.0);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn movement_past_threshold_promotes_to_drag() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.press(100.0, 100.0);
        tracker.movement(106.0, 100.0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.offset(), Offset::new(6.0, 0.0));
    }

    #[test]
    fn vertical_movement_also_promotes() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.press(50.0, 50.0);
        tracker.movement(50.0, 42.0);
        assert!(tracker.is_dragging());
        assert_eq!(tracker.offset(), Offset::new(0.0, -8.0));
    }

    #[test]
    fn release_returns_final_offset_and_resets() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.press(0.0, 0.0);
        tracker.movement(10.0, 0.0);
        tracker.movement(150.0, -20.0);
        assert_eq!(tracker.release(), Some(Offset::new(150.0, -20.0)));
        assert_eq!(tracker.state(), GestureState::Idle);
        assert_eq!(tracker.offset(), Offset::ORIGIN);
    }

    #[test]
    fn press_rejected_while_gesture_active() {
        let mut tracker = GestureTracker::new(5.0);
        assert!(tracker.press(0.0, 0.0));
        assert!(!tracker.press(10.0, 10.0));
    }

    #[test]
    fn abort_discards_gesture() {
        let mut tracker = GestureTracker::new(5.0);
        tracker.press(0.0, 0.0);
        tracker.movement(50.0, 0.0);
        tracker.abort();
        assert_eq!(tracker.state(), GestureState::Idle);
        assert_eq!(tracker.release(), None);
    }
}
