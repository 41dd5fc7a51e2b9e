//! Swipe Feed Engine
//!
//! Interaction state machine behind a swipe-to-decide card feed: drag
//! tracking, release classification, cursor/transition control, a bounded
//! undo window, and decision logging with a local preference model.
//!
//! The crate is rendering-agnostic. Visual parameters (card rotation, badge
//! opacity) are pure functions of the drag offset, time comes from an
//! injected [`Clock`], the undo decay runs on an injected [`UndoScheduler`],
//! and committed decisions fan out through [`RankingFeed`] and
//! [`InteractionSink`] implementations supplied by the host.

mod cursor;
mod decision;
mod engine;
mod gesture;
mod history;
mod item;
mod ranking;
mod undo;
mod visual;

#[cfg(test)]
pub(crate) mod testutil;

pub use cursor::FeedCursor;
pub use decision::{classify, Decision, SwipeAction};
pub use engine::{InteractionSink, SwipeFeed, TransitionPhase};
pub use gesture::{GestureState, GestureTracker, Offset};
pub use history::{InteractionHistory, InteractionRecord};
pub use item::Item;
pub use ranking::{PreferenceModel, RankingFeed};
pub use undo::{Clock, UndoScheduler, UndoState, UndoWindow};
pub use visual::{next_card_lift_px, next_card_scale, CardVisuals};

/// Tunables for gesture recognition, the undo window, and derived visuals.
#[derive(Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Movement in pixels on either axis that promotes a press to a drag.
    pub drag_threshold_px: f64,
    /// Horizontal release offset beyond which a drag commits a decision.
    pub decision_threshold_px: f64,
    /// Upward release offset beyond which a drag opens the detail view.
    pub details_threshold_px: f64,
    /// Grace period during which the latest decision can be reverted.
    pub undo_window_ms: u64,
    /// Most recent interaction records kept locally.
    pub history_capacity: usize,
    /// Card width used to scale rotation and badge opacity ramps.
    pub card_width_px: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: 5.0,
            decision_threshold_px: 120.0,
            details_threshold_px: 100.0,
            undo_window_ms: 3000,
            history_capacity: 100,
            card_width_px: 360.0,
        }
    }
}

impl SwipeConfig {
    /// Horizontal distance a card travels when exiting after a decision.
    pub fn exit_distance_px(&self) -> f64 {
        self.card_width_px * 1.5
    }
}
