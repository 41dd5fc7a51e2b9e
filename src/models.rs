//! Frontend Models
//!
//! Wire types shared with the backend plus local view state.

pub use swipe_engine::{Item, SwipeAction};

/// Current request identity: signed-in token or anonymous guest id.
#[derive(Debug, Clone, PartialEq)]
pub enum Identity {
    Anonymous { guest_id: String },
    SignedIn { token: String },
}

impl Default for Identity {
    fn default() -> Self {
        Self::Anonymous {
            guest_id: String::new(),
        }
    }
}

/// Screen-level fetch state for the product feed.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus {
    Idle,
    Loading,
    Error(String),
}

/// Price shown the way the cards render it.
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}
