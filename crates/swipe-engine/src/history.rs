//! Interaction Log
//!
//! Append-only records of committed decisions, kept in a fixed-capacity
//! ring. Records are immutable once created and survive feed resets.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::decision::SwipeAction;
use crate::item::Item;

/// One committed like/dislike decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionRecord {
    pub item_id: String,
    pub action: SwipeAction,
    pub timestamp_ms: u64,
    pub tags: Vec<String>,
    pub price_tier: String,
}

impl InteractionRecord {
    pub fn new(item: &Item, action: SwipeAction, timestamp_ms: u64) -> Self {
        Self {
            item_id: item.id.clone(),
            action,
            timestamp_ms,
            tags: item.tags.clone(),
            price_tier: item.price_tier.clone(),
        }
    }
}

/// Ring of the most recent records; pushing past capacity drops the oldest.
#[derive(Debug)]
pub struct InteractionHistory {
    records: VecDeque<InteractionRecord>,
    capacity: usize,
}

impl InteractionHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            records: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, record: InteractionRecord) {
        if self.capacity == 0 {
            return;
        }
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Most recent record, if any.
    pub fn latest(&self) -> Option<&InteractionRecord> {
        self.records.back()
    }

    /// Records oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &InteractionRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::item_with_tags;

    fn record(id: &str, at: u64) -> InteractionRecord {
        InteractionRecord::new(&item_with_tags(id, &["casual"]), SwipeAction::Like, at)
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut history = InteractionHistory::new(10);
        history.push(record("a", 1));
        history.push(record("b", 2));
        let ids: Vec<_> = history.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(history.latest().unwrap().item_id, "b");
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut history = InteractionHistory::new(3);
        for (i, id) in ["a", "b", "c", "d"].iter().enumerate() {
            history.push(record(id, i as u64));
        }
        assert_eq!(history.len(), 3);
        let ids: Vec<_> = history.iter().map(|r| r.item_id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "d"]);
    }

    #[test]
    fn record_captures_item_context() {
        let item = item_with_tags("dress-1", &["formal", "summer"]);
        let record = InteractionRecord::new(&item, SwipeAction::Dislike, 42);
        assert_eq!(record.item_id, "dress-1");
        assert_eq!(record.tags, ["formal", "summer"]);
        assert_eq!(record.price_tier, item.price_tier);
        assert_eq!(record.timestamp_ms, 42);
    }

    #[test]
    fn record_serializes_with_wire_names() {
        let json = serde_json::to_string(&record("a", 7)).unwrap();
        assert!(json.contains("\"itemId\":\"a\""));
        assert!(json.contains("\"action\":\"like\""));
        assert!(json.contains("\"priceTier\""));
    }
}
