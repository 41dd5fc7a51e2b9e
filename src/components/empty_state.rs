//! Empty State Component
//!
//! Shown when the feed has nothing to swipe; a valid terminal display
//! state, not an error.

use leptos::prelude::*;

#[component]
pub fn EmptyState(on_clear_filters: Callback<()>) -> impl IntoView {
    let clear_click = move |_: web_sys::MouseEvent| {
        on_clear_filters.run(());
    };

    view! {
        <div class="empty-state">
            <p class="empty-title">"Nothing left to discover"</p>
            <p class="empty-hint">"Try widening your filters."</p>
            <button class="empty-clear" on:click=clear_click>"Clear filters"</button>
        </div>
    }
}
