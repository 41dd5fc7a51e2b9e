//! Swipe Feed Controller
//!
//! Owns the gesture tracker, classifier, cursor, undo window, and
//! interaction log, and serializes decisions through a single transition
//! phase. Hosts feed it pointer events and report animation completion;
//! everything else is local state mutation plus fan-out through the
//! injected collaborators.

use log::debug;

use crate::cursor::FeedCursor;
use crate::decision::{classify, Decision, SwipeAction};
use crate::gesture::{GestureTracker, Offset};
use crate::history::{InteractionHistory, InteractionRecord};
use crate::item::Item;
use crate::ranking::RankingFeed;
use crate::undo::{Clock, UndoScheduler, UndoWindow};
use crate::visual::CardVisuals;
use crate::SwipeConfig;

const DETAILS_LIFT_PX: f64 = 60.0;

/// Best-effort persistence for committed decisions. Implementations must
/// not block; failures are theirs to log and swallow.
pub trait InteractionSink {
    fn submit(&self, record: &InteractionRecord);
}

/// Card transition state. `Exiting` and `Restoring` are the animating
/// phases during which no new gesture or decision is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionPhase {
    Idle,
    /// Pointer is down and past the drag threshold.
    Dragging,
    /// Springing back to origin after a cancelled gesture.
    Settling,
    /// Card leaving the deck after a decision.
    Exiting { direction: SwipeAction },
    /// Previous card re-entering after an undo.
    Restoring { direction: SwipeAction },
    /// Detail overlay is up; gestures are suspended.
    DetailsOpen,
}

pub struct SwipeFeed {
    config: SwipeConfig,
    items: Vec<Item>,
    cursor: FeedCursor,
    tracker: GestureTracker,
    phase: TransitionPhase,
    undo: UndoWindow,
    history: InteractionHistory,
    ranking: Box<dyn RankingFeed>,
    sink: Box<dyn InteractionSink>,
    clock: Box<dyn Clock>,
}

impl SwipeFeed {
    pub fn new(
        config: SwipeConfig,
        clock: Box<dyn Clock>,
        scheduler: Box<dyn UndoScheduler>,
        ranking: Box<dyn RankingFeed>,
        sink: Box<dyn InteractionSink>,
    ) -> Self {
        let undo = UndoWindow::new(config.undo_window_ms, scheduler);
        let tracker = GestureTracker::new(config.drag_threshold_px);
        let history = InteractionHistory::new(config.history_capacity);
        Self {
            config,
            items: Vec::new(),
            cursor: FeedCursor::new(),
            tracker,
            phase: TransitionPhase::Idle,
            undo,
            history,
            ranking,
            sink,
            clock,
        }
    }

    // ========================
    // Feed lifecycle
    // ========================

    /// Replace the item list wholesale and reset all feed state. The
    /// interaction history and ranking model outlive the reset.
    pub fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.cursor.reset();
        self.tracker.abort();
        self.undo.disarm();
        self.phase = TransitionPhase::Idle;
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.index()
    }

    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.cursor.index())
    }

    /// The card rendered behind the current one. Wraps, so a single-item
    /// feed previews its only card.
    pub fn next_item(&self) -> Option<&Item> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get((self.cursor.index() + 1) % self.items.len())
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    // ========================
    // Gesture input
    // ========================

    /// Start condition for a new gesture. Rejected (silently, per the
    /// feed's error model) while animating, while the detail overlay is
    /// up, or when there is nothing to swipe.
    pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
        if self.items.is_empty() {
            return false;
        }
        match self.phase {
            TransitionPhase::Idle | TransitionPhase::Settling => {
                // A press interrupts the settle; the card follows the new drag.
                self.phase = TransitionPhase::Idle;
                self.tracker.press(x, y)
            }
            _ => false,
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.tracker.movement(x, y);
        if self.tracker.is_dragging() && self.phase == TransitionPhase::Idle {
            self.phase = TransitionPhase::Dragging;
        }
    }

    /// Finalize the gesture and classify it. Exactly one decision is
    /// produced per completed drag; a bare tap cancels.
    pub fn pointer_up(&mut self) -> Decision {
        let Some(offset) = self.tracker.release() else {
            return Decision::Cancel;
        };
        match classify(offset, &self.config) {
            Decision::Like => self.commit_or_cancel(SwipeAction::Like),
            Decision::Dislike => self.commit_or_cancel(SwipeAction::Dislike),
            Decision::OpenDetails => {
                self.phase = TransitionPhase::DetailsOpen;
                Decision::OpenDetails
            }
            Decision::Cancel => {
                self.phase = TransitionPhase::Settling;
                Decision::Cancel
            }
        }
    }

    fn commit_or_cancel(&mut self, action: SwipeAction) -> Decision {
        if self.commit(action) {
            match action {
                SwipeAction::Like => Decision::Like,
                SwipeAction::Dislike => Decision::Dislike,
            }
        } else {
            self.phase = TransitionPhase::Settling;
            Decision::Cancel
        }
    }

    /// Browser-level pointer cancel: abort without a decision.
    pub fn pointer_cancel(&mut self) {
        self.tracker.abort();
        if self.phase == TransitionPhase::Dragging {
            self.phase = TransitionPhase::Settling;
        }
    }

    fn commit(&mut self, action: SwipeAction) -> bool {
        if self.is_animating() {
            debug!("decision dropped: transition already in flight");
            return false;
        }
        let Some(item) = self.current_item().cloned() else {
            return false;
        };
        let now = self.clock.now_ms();
        let record = InteractionRecord::new(&item, action, now);
        self.history.push(record.clone());
        self.ranking.observe(action, &item);
        self.sink.submit(&record);
        self.undo.arm(action, now);
        self.phase = TransitionPhase::Exiting { direction: action };
        debug!("committed {:?} for item {}", action, item.id);
        true
    }

    // ========================
    // Transitions
    // ========================

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while a card transition is in flight; the feed's sole
    /// mutual-exclusion flag.
    pub fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Exiting { .. } | TransitionPhase::Restoring { .. }
        )
    }

    pub fn details_open(&self) -> bool {
        self.phase == TransitionPhase::DetailsOpen
    }

    /// Host reports the current card animation finished. Advances the
    /// cursor after an exit; otherwise just returns to rest.
    pub fn finish_transition(&mut self) {
        match self.phase {
            TransitionPhase::Exiting { .. } => {
                self.cursor.advance(self.items.len());
                self.phase = TransitionPhase::Idle;
            }
            TransitionPhase::Restoring { .. } | TransitionPhase::Settling => {
                self.phase = TransitionPhase::Idle;
            }
            _ => {}
        }
    }

    /// Close the detail overlay and settle the card back to origin.
    pub fn dismiss_details(&mut self) {
        if self.phase == TransitionPhase::DetailsOpen {
            self.phase = TransitionPhase::Settling;
        }
    }

    // ========================
    // Undo
    // ========================

    /// Whether the latest decision is still revertible.
    pub fn can_undo(&self) -> bool {
        self.undo.is_armed()
    }

    /// Revert the latest decision if its window is still open. Does not
    /// retract the interaction record or the persistence call already made.
    pub fn undo(&mut self) -> bool {
        // Only from rest: mid-drag, mid-transition, and details-open all
        // reject, since the cursor state they depend on is still moving.
        if !matches!(
            self.phase,
            TransitionPhase::Idle | TransitionPhase::Settling
        ) {
            return false;
        }
        let now = self.clock.now_ms();
        let Some(direction) = self.undo.take(now) else {
            return false;
        };
        self.cursor.retreat(self.items.len());
        self.phase = TransitionPhase::Restoring { direction };
        debug!("undid {:?}; cursor back to {}", direction, self.cursor.index());
        true
    }

    /// Undo decay task fired. Stale generations are ignored.
    pub fn expire_undo(&mut self, generation: u64) {
        self.undo.expire(generation);
    }

    // ========================
    // Derived output
    // ========================

    pub fn drag_offset(&self) -> Offset {
        self.tracker.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Frame values for the top card under the current phase and offset.
    pub fn card_visuals(&self) -> CardVisuals {
        match self.phase {
            TransitionPhase::DetailsOpen => CardVisuals::details_lift(DETAILS_LIFT_PX),
            _ => CardVisuals::from_offset(self.tracker.offset(), self.config.card_width_px),
        }
    }

    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }
}
