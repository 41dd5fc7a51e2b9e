//! Card Stack Component
//!
//! Hosts the swipe deck: pointer wiring, exit/restore/settle animations,
//! and the next-card entrance behind the top card. Cards are memoized on
//! item identity so pointer tracking updates styles in place instead of
//! remounting the node mid-gesture.

use leptos::prelude::*;
use leptos_swipedeck::{
    make_on_pointercancel, make_on_pointerdown, make_on_pointermove, make_on_pointerup, SwipeDeck,
};
use swipe_engine::{next_card_lift_px, next_card_scale, Decision, SwipeAction, TransitionPhase};

use crate::components::ProductCard;
use crate::context::FeedContext;

#[component]
pub fn CardStack(deck: SwipeDeck) -> impl IntoView {
    let ctx = use_context::<FeedContext>().expect("FeedContext should be provided");

    // Present the detail overlay when a gesture classifies as open-details.
    let on_decision = {
        let deck = deck.clone();
        move |decision: Decision| {
            if decision == Decision::OpenDetails {
                if let Some(item) = deck.read_untracked(|feed| feed.current_item().cloned()) {
                    ctx.show_details(item);
                }
            }
        }
    };

    let on_pointerdown = make_on_pointerdown(deck.clone());
    let on_pointermove = make_on_pointermove(deck.clone());
    let on_pointerup = make_on_pointerup(deck.clone(), on_decision);
    let on_pointercancel = make_on_pointercancel(deck.clone());

    let top_class = {
        let deck = deck.clone();
        move || match deck.read(|feed| feed.phase()) {
            TransitionPhase::Exiting {
                direction: SwipeAction::Like,
            } => "swipe-card top exit-like",
            TransitionPhase::Exiting {
                direction: SwipeAction::Dislike,
            } => "swipe-card top exit-nope",
            TransitionPhase::Restoring {
                direction: SwipeAction::Like,
            } => "swipe-card top restore-like",
            TransitionPhase::Restoring {
                direction: SwipeAction::Dislike,
            } => "swipe-card top restore-nope",
            _ => "swipe-card top",
        }
    };

    let top_style = {
        let deck = deck.clone();
        move || {
            deck.read(|feed| {
                let visuals = feed.card_visuals();
                match feed.phase() {
                    // Keyframe classes drive exits and restores.
                    TransitionPhase::Exiting { .. } | TransitionPhase::Restoring { .. } => {
                        String::new()
                    }
                    TransitionPhase::Dragging => format!(
                        "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: none;",
                        visuals.translate_x, visuals.translate_y, visuals.rotation_deg
                    ),
                    _ => format!(
                        "transform: translate({:.1}px, {:.1}px) rotate({:.2}deg); transition: transform 0.25s ease;",
                        visuals.translate_x, visuals.translate_y, visuals.rotation_deg
                    ),
                }
            })
        }
    };

    let like_style = {
        let deck = deck.clone();
        move || format!("opacity: {:.2};", deck.read(|feed| feed.card_visuals().like_opacity))
    };
    let nope_style = {
        let deck = deck.clone();
        move || format!("opacity: {:.2};", deck.read(|feed| feed.card_visuals().nope_opacity))
    };

    // Next card scales up and drops into place while the top card exits.
    let next_style = {
        let deck = deck.clone();
        move || {
            deck.read(|feed| {
                let progress = if matches!(feed.phase(), TransitionPhase::Exiting { .. }) {
                    1.0
                } else {
                    0.0
                };
                format!(
                    "transform: translateY({:.1}px) scale({:.3}); transition: transform 0.3s ease;",
                    next_card_lift_px(progress),
                    next_card_scale(progress)
                )
            })
        }
    };

    let on_transition_settled = {
        let deck = deck.clone();
        move |_: web_sys::TransitionEvent| deck.update(|feed| feed.finish_transition())
    };
    let on_animation_done = {
        let deck = deck.clone();
        move |_: web_sys::AnimationEvent| deck.update(|feed| feed.finish_transition())
    };

    // Memoized on item identity: style/class updates flow into the existing
    // node, keeping pointer capture alive across frames.
    let current_item = {
        let deck = deck.clone();
        Memo::new(move |_| deck.read(|feed| feed.current_item().cloned()))
    };
    let next_item = {
        let deck = deck.clone();
        Memo::new(move |_| deck.read(|feed| feed.next_item().cloned()))
    };

    view! {
        <div class="card-stack">
            {move || {
                next_item
                    .get()
                    .map(|item| {
                        view! {
                            <div class="swipe-card next" style=next_style.clone()>
                                <ProductCard item=item is_next=true />
                            </div>
                        }
                    })
            }}
            {move || {
                current_item
                    .get()
                    .map(|item| {
                        view! {
                            <div
                                class=top_class.clone()
                                style=top_style.clone()
                                on:pointerdown=on_pointerdown.clone()
                                on:pointermove=on_pointermove.clone()
                                on:pointerup=on_pointerup.clone()
                                on:pointercancel=on_pointercancel.clone()
                                on:transitionend=on_transition_settled.clone()
                                on:animationend=on_animation_done.clone()
                            >
                                <div class="badge like" style=like_style.clone()>"LIKE"</div>
                                <div class="badge nope" style=nope_style.clone()>"NOPE"</div>
                                <ProductCard item=item />
                            </div>
                        }
                    })
            }}
        </div>
    }
}
