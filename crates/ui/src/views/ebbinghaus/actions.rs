use dioxus::prelude::*;
use memory_core::ebbinghaus::{ChoiceId, resolve_guess};

use super::state::EbbinghausState;

#[derive(Clone, Debug, PartialEq)]
pub enum EbbinghausIntent {
    Next,
    Previous,
    Jump(usize),
    /// Slider input.
    SetGuess(i64),
    /// Number field input. Text that does not resolve is kept verbatim for
    /// the next reveal.
    SetGuessText(String),
    Reveal,
    Choose(ChoiceId),
}

pub fn use_ebbinghaus_dispatcher(state: EbbinghausState) -> Callback<EbbinghausIntent> {
    use_callback(move |intent: EbbinghausIntent| apply_intent(state, intent))
}

fn apply_intent(state: EbbinghausState, intent: EbbinghausIntent) {
    let mut stepper = state.stepper;
    let mut field_text = state.field_text;
    match intent {
        EbbinghausIntent::Next => {
            field_text.set(None);
            stepper.write().advance();
        }
        EbbinghausIntent::Previous => {
            field_text.set(None);
            stepper.write().retreat();
        }
        EbbinghausIntent::Jump(index) => {
            field_text.set(None);
            stepper.write().jump_to(index);
        }
        EbbinghausIntent::SetGuess(value) => {
            field_text.set(None);
            stepper.write().set_guess(value);
        }
        EbbinghausIntent::SetGuessText(raw) => {
            let stored = stepper.write().set_guess_text(&raw);
            if resolve_guess(&raw).is_none() {
                field_text.set(Some(raw));
                return;
            }
            field_text.set(None);
            if raw.trim() != stored.to_string() {
                let mut resets = state.field_resets;
                *resets.write() += 1;
            }
        }
        EbbinghausIntent::Reveal => {
            let raw = field_text.peek().clone();
            let mut stepper = stepper.write();
            match raw {
                Some(raw) => stepper.reveal_input(&raw),
                None => stepper.reveal(),
            };
        }
        EbbinghausIntent::Choose(choice) => {
            stepper.write().choose(choice);
        }
    }
}
