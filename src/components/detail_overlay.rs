//! Detail Overlay Component
//!
//! Expanded item view opened by an upward swipe. While it is up the engine
//! suspends gestures; closing settles the card back to origin.

use leptos::prelude::*;
use leptos_swipedeck::SwipeDeck;

use crate::context::FeedContext;
use crate::models::format_price;

#[component]
pub fn DetailOverlay(deck: SwipeDeck) -> impl IntoView {
    let ctx = use_context::<FeedContext>().expect("FeedContext should be provided");

    let close = {
        let deck = deck.clone();
        move |_: web_sys::MouseEvent| {
            ctx.clear_details();
            deck.update(|feed| feed.dismiss_details());
        }
    };

    move || {
        ctx.detail_item.get().map(|item| {
            let close = close.clone();
            view! {
                <div class="detail-overlay" on:click=close.clone()>
                    <div class="detail-panel" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                        <button class="detail-close" on:click=close>"×"</button>
                        <img class="detail-image" src=item.image.clone() alt=item.title.clone() />
                        <p class="detail-brand">{item.brand.clone()}</p>
                        <h2 class="detail-title">{item.title.clone()}</h2>
                        <p class="detail-price">{format_price(item.price)}</p>
                        <div class="detail-tags">
                            {item
                                .tags
                                .iter()
                                .map(|tag| view! { <span class="card-tag">{tag.clone()}</span> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            }
        })
    }
}
