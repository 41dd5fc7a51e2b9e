//! Leptos Swipe Deck Bindings
//!
//! Wires the pure swipe engine to pointer events, Leptos signals, and
//! browser timers. Components hold a cheap-to-clone [`SwipeDeck`] handle;
//! every engine mutation bumps a version signal so views re-render after
//! each event.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use swipe_engine::{
    Clock, Decision, InteractionSink, RankingFeed, SwipeConfig, SwipeFeed, UndoScheduler,
};

/// Wall clock backed by `Date.now()`.
pub struct JsClock;

impl Clock for JsClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

/// Undo decay task backed by a browser timeout. Cancelling drops the
/// `Timeout`, which clears the underlying `setTimeout`.
struct TimeoutScheduler {
    set_expired: WriteSignal<Option<u64>>,
    pending: Option<gloo_timers::callback::Timeout>,
}

impl UndoScheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u64, generation: u64) {
        self.cancel();
        let set_expired = self.set_expired;
        self.pending = Some(gloo_timers::callback::Timeout::new(
            delay_ms as u32,
            move || set_expired.set(Some(generation)),
        ));
    }

    fn cancel(&mut self) {
        if let Some(timeout) = self.pending.take() {
            timeout.cancel();
        }
    }
}

/// Shared handle to the feed engine plus the signals that drive rendering.
#[derive(Clone)]
pub struct SwipeDeck {
    feed: Rc<RefCell<SwipeFeed>>,
    version: ReadSignal<u32>,
    set_version: WriteSignal<u32>,
    /// Pointer currently driving the gesture, if any.
    active_pointer: Rc<Cell<Option<i32>>>,
}

impl SwipeDeck {
    /// Mutate the engine and notify subscribers.
    pub fn update<R>(&self, f: impl FnOnce(&mut SwipeFeed) -> R) -> R {
        let result = f(&mut self.feed.borrow_mut());
        self.set_version.update(|v| *v += 1);
        result
    }

    /// Read engine state, subscribing the caller to future updates.
    pub fn read<R>(&self, f: impl FnOnce(&SwipeFeed) -> R) -> R {
        self.version.get();
        f(&self.feed.borrow())
    }

    /// Read engine state without subscribing.
    pub fn read_untracked<R>(&self, f: impl FnOnce(&SwipeFeed) -> R) -> R {
        f(&self.feed.borrow())
    }
}

/// Build the engine with browser clock and timer, wiring the decay task
/// back into it. Must be called inside a reactive owner (a component body).
pub fn create_swipe_deck(
    config: SwipeConfig,
    ranking: Box<dyn RankingFeed>,
    sink: Box<dyn InteractionSink>,
) -> SwipeDeck {
    let (version, set_version) = signal(0u32);
    let (expired, set_expired) = signal(None::<u64>);

    let scheduler = TimeoutScheduler {
        set_expired,
        pending: None,
    };
    let feed = SwipeFeed::new(
        config,
        Box::new(JsClock),
        Box::new(scheduler),
        ranking,
        sink,
    );
    let deck = SwipeDeck {
        feed: Rc::new(RefCell::new(feed)),
        version,
        set_version,
        active_pointer: Rc::new(Cell::new(None)),
    };

    // Deliver fired decay tasks back to the engine; stale generations are
    // discarded there.
    {
        let deck = deck.clone();
        Effect::new(move |_| {
            if let Some(generation) = expired.get() {
                deck.update(|feed| feed.expire_undo(generation));
            }
        });
    }

    deck
}

/// Create pointerdown handler for the top card. Captures the pointer when
/// the engine accepts the gesture.
pub fn make_on_pointerdown(deck: SwipeDeck) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        if deck.active_pointer.get().is_some() {
            return;
        }
        let accepted =
            deck.update(|feed| feed.pointer_down(ev.client_x() as f64, ev.client_y() as f64));
        if accepted {
            deck.active_pointer.set(Some(ev.pointer_id()));
            if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
    }
}

/// Create pointermove handler for the top card.
pub fn make_on_pointermove(deck: SwipeDeck) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if deck.active_pointer.get() != Some(ev.pointer_id()) {
            return;
        }
        ev.prevent_default();
        deck.update(|feed| feed.pointer_move(ev.client_x() as f64, ev.client_y() as f64));
    }
}

/// Create pointerup handler. The classified decision is handed to
/// `on_decision` so the host can react (e.g. present the detail view).
pub fn make_on_pointerup<F>(
    deck: SwipeDeck,
    on_decision: F,
) -> impl Fn(web_sys::PointerEvent) + Clone + 'static
where
    F: Fn(Decision) + Clone + 'static,
{
    move |ev: web_sys::PointerEvent| {
        if deck.active_pointer.get() != Some(ev.pointer_id()) {
            return;
        }
        release_pointer(&ev);
        deck.active_pointer.set(None);
        let decision = deck.update(|feed| feed.pointer_up());
        on_decision(decision);
    }
}

/// Create pointercancel handler: abort the gesture without a decision.
pub fn make_on_pointercancel(deck: SwipeDeck) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if deck.active_pointer.get() != Some(ev.pointer_id()) {
            return;
        }
        release_pointer(&ev);
        deck.active_pointer.set(None);
        deck.update(|feed| feed.pointer_cancel());
    }
}

fn release_pointer(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) {
        let _ = target.release_pointer_capture(ev.pointer_id());
    }
}
