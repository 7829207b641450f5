use std::rc::Rc;

use dioxus::document::eval;
use dioxus::prelude::*;
use memory_core::model::Slide;

use crate::vm::map_deck_chrome;
use crate::views::slides::SlideBody;

use super::state::{DeckIntent, DeckState, use_deck_dispatcher};

fn slide_class(active: bool) -> &'static str {
    if active { "slide slide--active" } else { "slide" }
}

fn on_deck_key(dispatch: Callback<DeckIntent>, evt: &KeyboardEvent) {
    let intent = match evt.data.key() {
        Key::ArrowRight => DeckIntent::Next,
        Key::ArrowLeft => DeckIntent::Previous,
        Key::Escape => DeckIntent::CloseMenu,
        _ => return,
    };
    evt.prevent_default();
    dispatch.call(intent);
}

#[component]
pub fn DeckView() -> Element {
    let state = use_context::<DeckState>();
    let dispatch = use_deck_dispatcher(state);
    let mut progress_bar = use_signal(|| None::<Rc<MountedData>>);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register(dispatch, state);
            }
        }
    }

    use_effect(|| {
        let _ = eval("document.getElementById('deck')?.focus();");
    });

    let (chrome, slides) = {
        let navigator = state.navigator.read();
        let slides: Vec<Slide> = navigator.outline().slides().to_vec();
        (map_deck_chrome(&navigator), slides)
    };

    let on_progress_click = move |evt: MouseEvent| {
        let x = evt.data.element_coordinates().x;
        let Some(bar) = progress_bar() else {
            return;
        };
        spawn(async move {
            // Zero width yields a non-finite ratio, which keeps the current slide.
            let width = bar
                .get_client_rect()
                .await
                .map_or(0.0, |rect| rect.size.width);
            dispatch.call(DeckIntent::ProgressClick(x / width));
        });
    };

    let menu_class = if chrome.menu_open {
        "slide-menu slide-menu--open"
    } else {
        "slide-menu"
    };

    rsx! {
        div {
            id: "deck",
            class: "deck",
            tabindex: "0",
            onkeydown: move |evt| on_deck_key(dispatch, &evt),
            div {
                id: "progress",
                class: "progress",
                onmounted: move |evt| progress_bar.set(Some(evt.data())),
                onclick: on_progress_click,
                div { class: "progress-fill", style: "width: {chrome.progress_width};" }
            }
            main { class: "slides",
                for (index, slide) in slides.into_iter().enumerate() {
                    section {
                        key: "{index}",
                        id: "slide-{index}",
                        class: slide_class(index == chrome.current),
                        "aria-hidden": "{index != chrome.current}",
                        header { class: "slide-header",
                            span { class: "slide-section", "{slide.section()}" }
                            h2 { class: "slide-title", "{slide.title()}" }
                        }
                        SlideBody { kind: slide.kind() }
                    }
                }
            }
            nav { class: "deck-nav",
                button {
                    id: "menu-open",
                    class: "nav-btn",
                    onclick: move |_| dispatch.call(DeckIntent::OpenMenu),
                    "☰"
                }
                button {
                    id: "nav-prev",
                    class: "nav-btn",
                    "aria-disabled": "{chrome.previous_disabled}",
                    onclick: move |_| dispatch.call(DeckIntent::Previous),
                    "‹ Prev"
                }
                span { id: "nav-info", class: "nav-info", "{chrome.position_label}" }
                button {
                    id: "nav-next",
                    class: "nav-btn",
                    "aria-disabled": "{chrome.next_disabled}",
                    onclick: move |_| dispatch.call(DeckIntent::Next),
                    "Next ›"
                }
                div { class: "nav-dots",
                    for dot in chrome.dots {
                        button {
                            key: "{dot.index}",
                            class: if dot.active { "nav-dot nav-dot--active" } else { "nav-dot" },
                            onclick: move |_| dispatch.call(DeckIntent::GoTo(dot.index)),
                        }
                    }
                }
            }
            aside { id: "slide-menu", class: menu_class, "aria-hidden": "{!chrome.menu_open}",
                div { class: "slide-menu__header",
                    span { "Slides" }
                    button {
                        id: "menu-close",
                        class: "nav-btn",
                        onclick: move |_| dispatch.call(DeckIntent::CloseMenu),
                        "✕"
                    }
                }
                ul { class: "slide-menu__list",
                    for item in chrome.menu_items {
                        li {
                            key: "{item.index}",
                            class: if item.current { "menu-item menu-item--current" } else { "menu-item" },
                            onclick: move |_| dispatch.call(DeckIntent::ChooseMenuItem(item.index)),
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    dispatch: Rc<std::cell::RefCell<Option<Callback<DeckIntent>>>>,
    state: Rc<std::cell::RefCell<Option<DeckState>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DeckIntent>, state: DeckState) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<DeckIntent> {
        (*self.dispatch.borrow()).expect("deck dispatch registered")
    }

    pub(crate) fn state(&self) -> DeckState {
        (*self.state.borrow()).expect("deck state registered")
    }
}
