//! Preference Model
//!
//! Informal client-side ranking nudged by swipe decisions. Scores only
//! affect the ordering of future feed sessions, never the current cursor.

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::rc::Rc;

use crate::decision::SwipeAction;
use crate::item::Item;

/// Receives every committed decision, synchronously with the commit.
pub trait RankingFeed {
    fn observe(&mut self, action: SwipeAction, item: &Item);
}

const TAG_STEP: f64 = 0.25;
const TIER_STEP: f64 = 0.1;

/// Per-tag and per-price-tier weights, nudged by a fixed step per decision.
#[derive(Clone, Debug, Default)]
pub struct PreferenceModel {
    tag_weights: HashMap<String, f64>,
    tier_weights: HashMap<String, f64>,
}

impl PreferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Affinity score for an item under the current weights.
    pub fn score(&self, item: &Item) -> f64 {
        let tag_score: f64 = item
            .tags
            .iter()
            .filter_map(|tag| self.tag_weights.get(tag))
            .sum();
        let tier_score = self
            .tier_weights
            .get(&item.price_tier)
            .copied()
            .unwrap_or(0.0);
        tag_score + tier_score
    }

    /// Indices of `items` ordered by descending score. Stable, so untouched
    /// items keep their upstream order.
    pub fn order(&self, items: &[Item]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..items.len()).collect();
        indices.sort_by(|&a, &b| {
            self.score(&items[b])
                .partial_cmp(&self.score(&items[a]))
                .unwrap_or(Ordering::Equal)
        });
        indices
    }
}

impl RankingFeed for PreferenceModel {
    fn observe(&mut self, action: SwipeAction, item: &Item) {
        let step = match action {
            SwipeAction::Like => 1.0,
            SwipeAction::Dislike => -1.0,
        };
        for tag in &item.tags {
            *self.tag_weights.entry(tag.clone()).or_insert(0.0) += step * TAG_STEP;
        }
        *self
            .tier_weights
            .entry(item.price_tier.clone())
            .or_insert(0.0) += step * TIER_STEP;
    }
}

/// Shared handle so the host can keep scoring while the engine feeds
/// observations in.
impl RankingFeed for Rc<RefCell<PreferenceModel>> {
    fn observe(&mut self, action: SwipeAction, item: &Item) {
        self.borrow_mut().observe(action, item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::item_with_tags;

    #[test]
    fn likes_raise_matching_tag_scores() {
        let mut model = PreferenceModel::new();
        let liked = item_with_tags("a", &["denim", "casual"]);
        model.observe(SwipeAction::Like, &liked);

        let similar = item_with_tags("b", &["denim"]);
        let unrelated = item_with_tags("c", &["formal"]);
        assert!(model.score(&similar) > model.score(&unrelated));
    }

    #[test]
    fn dislikes_push_scores_down() {
        let mut model = PreferenceModel::new();
        let disliked = item_with_tags("a", &["neon"]);
        model.observe(SwipeAction::Dislike, &disliked);
        assert!(model.score(&item_with_tags("b", &["neon"])) < 0.0);
    }

    #[test]
    fn order_puts_liked_tags_first() {
        let mut model = PreferenceModel::new();
        model.observe(SwipeAction::Like, &item_with_tags("seed", &["boho"]));

        let items = vec![
            item_with_tags("plain", &["formal"]),
            item_with_tags("match", &["boho"]),
        ];
        assert_eq!(model.order(&items), vec![1, 0]);
    }

    #[test]
    fn order_is_stable_for_untouched_items() {
        let model = PreferenceModel::new();
        let items = vec![
            item_with_tags("first", &["a"]),
            item_with_tags("second", &["b"]),
            item_with_tags("third", &["c"]),
        ];
        assert_eq!(model.order(&items), vec![0, 1, 2]);
    }

    #[test]
    fn shared_handle_feeds_the_same_model() {
        let model = Rc::new(RefCell::new(PreferenceModel::new()));
        let mut handle: Box<dyn RankingFeed> = Box::new(Rc::clone(&model));
        handle.observe(SwipeAction::Like, &item_with_tags("a", &["knit"]));
        assert!(model.borrow().score(&item_with_tags("b", &["knit"])) > 0.0);
    }
}
