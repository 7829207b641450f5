mod state;
mod view;

pub use state::{
    ActivationPulse, DeckIntent, DeckState, use_activation, use_deck_dispatcher, use_deck_state,
};
pub use view::DeckView;

#[cfg(test)]
pub(crate) use view::DeckTestHandles;
