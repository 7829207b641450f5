use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::context::AppContext;
use crate::views::{DeckIntent, DeckView, use_deck_dispatcher, use_deck_state};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(DeckLayout)]
        #[route("/", DeckHome)] Home {},
        #[route("/slide/:index", DeckSlide)] Slide { index: usize },
}

/// Owns the deck state so it survives route changes.
#[component]
fn DeckLayout() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_deck_state(&ctx);
    use_context_provider(|| state);

    rsx! {
        div { class: "deck-shell",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn DeckHome() -> Element {
    rsx! { DeckView {} }
}

/// Deep link to a slide, 1-based; out-of-range numbers are clamped.
#[component]
fn DeckSlide(index: usize) -> Element {
    let dispatch = use_deck_dispatcher(use_context());
    use_effect(use_reactive((&index,), move |(index,)| {
        dispatch.call(DeckIntent::GoTo(index.saturating_sub(1)));
    }));

    rsx! { DeckView {} }
}
