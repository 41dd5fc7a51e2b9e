//! Undo Button Component
//!
//! Visible only while the latest decision is still revertible; the engine
//! decides whether a press actually does anything.

use leptos::prelude::*;
use leptos_swipedeck::SwipeDeck;

#[component]
pub fn UndoButton(deck: SwipeDeck) -> impl IntoView {
    let can_undo = {
        let deck = deck.clone();
        move || deck.read(|feed| feed.can_undo())
    };

    let container_class = {
        let can_undo = can_undo.clone();
        move || {
            if can_undo() {
                "undo-container visible"
            } else {
                "undo-container"
            }
        }
    };

    let on_click = {
        let deck = deck.clone();
        move |_: web_sys::MouseEvent| {
            deck.update(|feed| {
                feed.undo();
            });
        }
    };

    view! {
        <div class=container_class>
            <button
                class="undo-button"
                on:click=on_click
                disabled=move || !can_undo()
            >
                "Undo"
            </button>
        </div>
    }
}
