//! Feed Items
//!
//! Wire type for the externally supplied product feed.

use serde::{Deserialize, Serialize};

/// One recommendable product. Immutable once supplied; identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    pub brand: String,
    pub price: f64,
    /// Coarse price bucket, used only for logging/ranking context.
    pub price_tier: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
}
