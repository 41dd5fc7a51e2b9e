//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::Item;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct FeedContext {
    /// Trigger to reload the product feed - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload the product feed - write
    set_reload_trigger: WriteSignal<u32>,
    /// Item shown in the detail overlay (None = closed) - read
    pub detail_item: ReadSignal<Option<Item>>,
    /// Item shown in the detail overlay - write
    set_detail_item: WriteSignal<Option<Item>>,
}

impl FeedContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        detail_item: (ReadSignal<Option<Item>>, WriteSignal<Option<Item>>),
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            detail_item: detail_item.0,
            set_detail_item: detail_item.1,
        }
    }

    /// Trigger a feed reload
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Present the detail overlay for an item
    pub fn show_details(&self, item: Item) {
        self.set_detail_item.set(Some(item));
    }

    /// Close the detail overlay
    pub fn clear_details(&self) {
        self.set_detail_item.set(None);
    }
}
