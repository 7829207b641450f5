mod deck;
mod ebbinghaus;
mod slides;

pub use deck::{
    ActivationPulse, DeckIntent, DeckState, DeckView, use_activation, use_deck_dispatcher,
    use_deck_state,
};
pub use ebbinghaus::{EbbinghausIntent, EbbinghausView};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
