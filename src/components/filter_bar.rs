//! Filter Bar Component
//!
//! Tag chips narrowing the product feed. Any change replaces the item list
//! wholesale, which resets the swipe feed.

use leptos::prelude::*;

use crate::context::FeedContext;
use crate::store::{store_toggle_tag, use_app_store, AppStateStoreFields};

#[component]
pub fn FilterBar() -> impl IntoView {
    let store = use_app_store();
    let ctx = use_context::<FeedContext>().expect("FeedContext should be provided");

    let chips = move || {
        let selected = store.selected_tags().get();
        store
            .available_tags()
            .get()
            .into_iter()
            .map(|tag| {
                let is_active = selected.iter().any(|t| t == &tag);
                let chip_tag = tag.clone();
                let on_click = move |_: web_sys::MouseEvent| {
                    store_toggle_tag(&store, &chip_tag);
                    ctx.reload();
                };
                view! {
                    <button
                        class=if is_active { "filter-chip active" } else { "filter-chip" }
                        on:click=on_click
                    >
                        {tag}
                    </button>
                }
            })
            .collect_view()
    };

    view! { <div class="filter-bar">{chips}</div> }
}
