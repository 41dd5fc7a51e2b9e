//! Product Card Component
//!
//! Presentational card face: image, brand, title, tags, price. Drag
//! styling and badges belong to the card stack.

use leptos::prelude::*;

use crate::models::{format_price, Item};

#[component]
pub fn ProductCard(item: Item, #[prop(optional)] is_next: bool) -> impl IntoView {
    let tags: Vec<String> = item.tags.iter().take(3).cloned().collect();

    view! {
        <div class=if is_next { "product-card next" } else { "product-card" }>
            <img class="card-image" src=item.image.clone() alt=item.title.clone() />
            <div class="card-info">
                <p class="card-brand">{item.brand.clone()}</p>
                <p class="card-title">{item.title.clone()}</p>
                <div class="card-tags">
                    {tags
                        .into_iter()
                        .map(|tag| view! { <span class="card-tag">{tag}</span> })
                        .collect_view()}
                </div>
                <p class="card-price">{format_price(item.price)}</p>
            </div>
        </div>
    }
}
