//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Identity;

const GUEST_ID_KEY: &str = "guest_id";

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Identity attached to persistence calls
    pub identity: Identity,
    /// Tags currently narrowing the product feed
    pub selected_tags: Vec<String>,
    /// All tags offered by the filter bar
    pub available_tags: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            identity: Identity::Anonymous {
                guest_id: load_or_create_guest_id(),
            },
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Toggle a tag in the filter selection
pub fn store_toggle_tag(store: &AppStore, tag: &str) {
    let binding = store.selected_tags();
    let mut selected = binding.write();
    if let Some(pos) = selected.iter().position(|t| t == tag) {
        selected.remove(pos);
    } else {
        selected.push(tag.to_string());
    }
}

/// Clear the filter selection
pub fn store_clear_tags(store: &AppStore) {
    store.selected_tags().write().clear();
}

/// Stable anonymous identity, persisted across sessions in local storage.
pub fn load_or_create_guest_id() -> String {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());

    if let Some(storage) = &storage {
        if let Ok(Some(existing)) = storage.get_item(GUEST_ID_KEY) {
            if !existing.is_empty() {
                return existing;
            }
        }
    }

    let fresh = format!(
        "guest_{}_{:06x}",
        js_sys::Date::now() as u64,
        (js_sys::Math::random() * 16_777_216.0) as u32
    );
    if let Some(storage) = &storage {
        let _ = storage.set_item(GUEST_ID_KEY, &fresh);
    }
    fresh
}
