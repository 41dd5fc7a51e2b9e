//! Test Fakes
//!
//! Hand-rolled collaborators injected through the engine's traits so the
//! suite runs without a browser, timers, or a backend.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::decision::SwipeAction;
use crate::engine::InteractionSink;
use crate::history::InteractionRecord;
use crate::item::Item;
use crate::ranking::RankingFeed;
use crate::undo::{Clock, UndoScheduler};

pub(crate) fn item_with_tags(id: &str, tags: &[&str]) -> Item {
    Item {
        id: id.to_string(),
        title: format!("Item {id}"),
        brand: "Test Brand".to_string(),
        price: 49.0,
        price_tier: "mid".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        image: format!("https://img.test/{id}.jpg"),
    }
}

/// Manually stepped clock shared between test and engine.
#[derive(Clone, Default)]
pub(crate) struct SteppedClock {
    now: Rc<Cell<u64>>,
}

impl SteppedClock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for SteppedClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TimerEvent {
    Scheduled { delay_ms: u64, generation: u64 },
    Cancelled,
}

/// Records schedule/cancel calls; tests fire expiries by hand.
#[derive(Clone, Default)]
pub(crate) struct ManualScheduler {
    events: Rc<RefCell<Vec<TimerEvent>>>,
}

impl ManualScheduler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn events(&self) -> Vec<TimerEvent> {
        self.events.borrow().clone()
    }

    pub(crate) fn last(&self) -> Option<TimerEvent> {
        self.events.borrow().last().copied()
    }

    pub(crate) fn last_generation(&self) -> Option<u64> {
        self.events
            .borrow()
            .iter()
            .rev()
            .find_map(|event| match event {
                TimerEvent::Scheduled { generation, .. } => Some(*generation),
                TimerEvent::Cancelled => None,
            })
    }
}

impl UndoScheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u64, generation: u64) {
        self.events.borrow_mut().push(TimerEvent::Scheduled {
            delay_ms,
            generation,
        });
    }

    fn cancel(&mut self) {
        self.events.borrow_mut().push(TimerEvent::Cancelled);
    }
}

/// Captures every submitted record.
#[derive(Clone, Default)]
pub(crate) struct RecordingSink {
    records: Rc<RefCell<Vec<InteractionRecord>>>,
}

impl RecordingSink {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn records(&self) -> Vec<InteractionRecord> {
        self.records.borrow().clone()
    }
}

impl InteractionSink for RecordingSink {
    fn submit(&self, record: &InteractionRecord) {
        self.records.borrow_mut().push(record.clone());
    }
}

/// Captures ranking observations in commit order.
#[derive(Clone, Default)]
pub(crate) struct RecordingRanking {
    seen: Rc<RefCell<Vec<(SwipeAction, String)>>>,
}

impl RecordingRanking {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn seen(&self) -> Vec<(SwipeAction, String)> {
        self.seen.borrow().clone()
    }
}

impl RankingFeed for RecordingRanking {
    fn observe(&mut self, action: SwipeAction, item: &Item) {
        self.seen.borrow_mut().push((action, item.id.clone()));
    }
}
