//! Backend REST Client
//!
//! Product fetch plus the fire-and-forget like/unlike call. The feed never
//! waits on the like call; failures are logged and swallowed.

use gloo_net::http::Request;
use leptos::prelude::*;
use serde::Serialize;

use crate::models::{Identity, Item, SwipeAction};
use crate::store::{AppStateStoreFields, AppStore};
use swipe_engine::{InteractionRecord, InteractionSink};

const API_BASE: &str = "/api";

#[derive(Debug)]
pub enum ApiError {
    Network(String),
    Parse(String),
    Status(u16),
}

impl ApiError {
    fn network<E: std::fmt::Display>(err: E) -> Self {
        Self::Network(err.to_string())
    }

    fn parse<E: std::fmt::Display>(err: E) -> Self {
        Self::Parse(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(message) => write!(f, "network error: {message}"),
            ApiError::Parse(message) => write!(f, "malformed response: {message}"),
            ApiError::Status(code) => write!(f, "HTTP {code}"),
        }
    }
}

/// Fetch the product feed, optionally narrowed by tag filters. The caller
/// replaces the feed wholesale with the result.
pub async fn fetch_products(tags: &[String]) -> Result<Vec<Item>, ApiError> {
    let url = if tags.is_empty() {
        format!("{API_BASE}/products")
    } else {
        format!("{API_BASE}/products?tags={}", tags.join(","))
    };

    let response = Request::get(&url).send().await.map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text = response.text().await.map_err(ApiError::network)?;
    serde_json::from_str(&text).map_err(ApiError::parse)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InteractionPayload<'a> {
    product_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    guest_id: Option<&'a str>,
}

/// Like/unlike an item for the current identity. Like maps to POST,
/// dislike to DELETE, mirroring the backend's likes resource.
pub async fn send_interaction(
    action: SwipeAction,
    item_id: &str,
    identity: &Identity,
) -> Result<(), ApiError> {
    let url = format!("{API_BASE}/likes/{item_id}");
    let request = match action {
        SwipeAction::Like => Request::post(&url),
        SwipeAction::Dislike => Request::delete(&url),
    };

    let (request, guest_id) = match identity {
        Identity::SignedIn { token } => (
            request.header("Authorization", &format!("Bearer {token}")),
            None,
        ),
        Identity::Anonymous { guest_id } => (
            request.header("x-guest-id", guest_id),
            Some(guest_id.as_str()),
        ),
    };

    let payload = InteractionPayload {
        product_id: item_id,
        guest_id,
    };

    let response = request
        .json(&payload)
        .map_err(ApiError::parse)?
        .send()
        .await
        .map_err(ApiError::network)?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(())
}

/// Persistence sink for the swipe engine: spawns the remote call and logs
/// failures. Feed state is never rolled back on failure.
pub struct RemoteInteractionSink {
    store: AppStore,
}

impl RemoteInteractionSink {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl InteractionSink for RemoteInteractionSink {
    fn submit(&self, record: &InteractionRecord) {
        let action = record.action;
        let item_id = record.item_id.clone();
        let identity = self.store.identity().get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = send_interaction(action, &item_id, &identity).await {
                web_sys::console::warn_1(
                    &format!("[API] interaction sync failed for {item_id}: {err}").into(),
                );
            }
        });
    }
}
