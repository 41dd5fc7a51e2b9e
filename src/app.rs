//! StyleFeed App
//!
//! Feed screen wiring: identity bootstrap, product fetch, engine
//! construction, and screen states.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use leptos_swipedeck::create_swipe_deck;
use swipe_engine::{PreferenceModel, SwipeConfig};

use crate::api::{self, RemoteInteractionSink};
use crate::components::{CardStack, DetailOverlay, EmptyState, FilterBar, UndoButton};
use crate::context::FeedContext;
use crate::models::{FetchStatus, Item};
use crate::store::{store_clear_tags, AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(AppState::new());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (detail_item, set_detail_item) = signal(None::<Item>);
    let (status, set_status) = signal(FetchStatus::Loading);

    let ctx = FeedContext::new(
        (reload_trigger, set_reload_trigger),
        (detail_item, set_detail_item),
    );
    provide_context(ctx);

    // The engine observes decisions through a shared handle so the app can
    // keep scoring items for future sessions.
    let model = Rc::new(RefCell::new(PreferenceModel::new()));
    let deck = create_swipe_deck(
        SwipeConfig::default(),
        Box::new(Rc::clone(&model)),
        Box::new(RemoteInteractionSink::new(store)),
    );

    // Load products when filters or the trigger change; every load replaces
    // the feed wholesale and resets the swipe state.
    {
        let deck = deck.clone();
        let model = Rc::clone(&model);
        Effect::new(move |_| {
            let _ = reload_trigger.get();
            let tags = store.selected_tags().get();
            set_status.set(FetchStatus::Loading);

            let deck = deck.clone();
            let model = Rc::clone(&model);
            spawn_local(async move {
                match api::fetch_products(&tags).await {
                    Ok(items) => {
                        web_sys::console::log_1(
                            &format!("[APP] Loaded {} products", items.len()).into(),
                        );
                        if tags.is_empty() {
                            store.available_tags().set(collect_tags(&items));
                        }
                        let ordered = preferred_order(&model.borrow(), items);
                        deck.update(|feed| feed.replace_items(ordered));
                        set_status.set(FetchStatus::Idle);
                    }
                    Err(err) => {
                        web_sys::console::error_1(
                            &format!("[APP] Product load failed: {err}").into(),
                        );
                        set_status.set(FetchStatus::Error(err.to_string()));
                    }
                }
            });
        });
    }

    let on_clear_filters = Callback::new(move |_| {
        store_clear_tags(&store);
        ctx.reload();
    });

    let feed_view = {
        let deck = deck.clone();
        move || match status.get() {
            FetchStatus::Loading => view! { <p class="feed-status">"Finding your next look..."</p> }
                .into_any(),
            FetchStatus::Error(message) => {
                view! { <p class="feed-status error">{message}</p> }.into_any()
            }
            FetchStatus::Idle => {
                if deck.read(|feed| feed.is_empty()) {
                    view! { <EmptyState on_clear_filters=on_clear_filters /> }.into_any()
                } else {
                    view! {
                        <CardStack deck=deck.clone() />
                        <UndoButton deck=deck.clone() />
                    }
                    .into_any()
                }
            }
        }
    };

    view! {
        <div class="app-container">
            <header class="feed-header">
                <h1>"StyleFeed"</h1>
            </header>
            <FilterBar />
            <main class="feed-main">{feed_view}</main>
            <DetailOverlay deck=deck.clone() />
        </div>
    }
}

fn collect_tags(items: &[Item]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for item in items {
        for tag in &item.tags {
            if !tags.contains(tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Reorder a fetched feed by the learned preference scores.
fn preferred_order(model: &PreferenceModel, items: Vec<Item>) -> Vec<Item> {
    let order = model.order(&items);
    order.into_iter().map(|i| items[i].clone()).collect()
}
