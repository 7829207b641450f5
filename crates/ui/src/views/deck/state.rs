use dioxus::prelude::*;
use memory_core::model::Activation;
use memory_core::navigation::{Navigator, SlideChange};
use tracing::debug;

use crate::context::AppContext;

/// Latest slide activation. The generation changes on every navigation so
/// re-entering the same slide still fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActivationPulse {
    pub activation: Activation,
    pub generation: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckIntent {
    Next,
    Previous,
    /// Zero-based slide index; clamped into range.
    GoTo(usize),
    /// Click position along the progress bar, 0.0 at the left edge.
    ProgressClick(f64),
    OpenMenu,
    CloseMenu,
    ChooseMenuItem(usize),
}

#[derive(Clone, Copy, PartialEq)]
pub struct DeckState {
    pub navigator: Signal<Navigator>,
    pub activation: Signal<ActivationPulse>,
}

impl DeckState {
    pub fn apply(mut self, intent: DeckIntent) {
        let change = {
            let mut navigator = self.navigator.write();
            match intent {
                DeckIntent::Next => Some(navigator.next()),
                DeckIntent::Previous => Some(navigator.previous()),
                DeckIntent::GoTo(index) => {
                    Some(navigator.go_to(isize::try_from(index).unwrap_or(isize::MAX)))
                }
                DeckIntent::ProgressClick(ratio) => Some(navigator.go_to_ratio(ratio)),
                DeckIntent::OpenMenu => {
                    navigator.open_menu();
                    None
                }
                DeckIntent::CloseMenu => {
                    navigator.close_menu();
                    None
                }
                DeckIntent::ChooseMenuItem(index) => Some(navigator.choose_menu_item(index)),
            }
        };
        if let Some(change) = change {
            self.pulse(change);
        }
    }

    fn pulse(&mut self, change: SlideChange) {
        let generation = self.activation.peek().generation.wrapping_add(1);
        debug!(
            slide = change.to,
            moved = change.moved(),
            generation,
            "slide activated"
        );
        self.activation.set(ActivationPulse {
            activation: change.activation,
            generation,
        });
    }
}

pub fn use_deck_state(ctx: &AppContext) -> DeckState {
    let outline = ctx.outline().clone();
    let start = ctx.start_slide();
    use_hook(move || {
        let mut navigator = Navigator::new(outline, start);
        let change = navigator.activate_current();
        DeckState {
            navigator: Signal::new(navigator),
            activation: Signal::new(ActivationPulse {
                activation: change.activation,
                generation: 0,
            }),
        }
    })
}

pub fn use_deck_dispatcher(state: DeckState) -> Callback<DeckIntent> {
    use_callback(move |intent: DeckIntent| state.apply(intent))
}

/// Run `on_activate` whenever a slide with the given activation becomes
/// current, including the slide the deck opens on.
pub fn use_activation(target: Activation, mut on_activate: impl FnMut() + 'static) {
    let state = use_context::<DeckState>();
    use_effect(move || {
        let pulse = (state.activation)();
        if pulse.activation == target {
            on_activate();
        }
    });
}
