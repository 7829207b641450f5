use dioxus::prelude::*;
use memory_core::ebbinghaus::Stepper;

#[derive(Clone, Copy, PartialEq)]
pub struct EbbinghausState {
    pub stepper: Signal<Stepper>,
    /// Raw text of the number field since its last edit; `None` once the
    /// slider or a step change has taken over.
    pub field_text: Signal<Option<String>>,
    /// Bumped when the number field shows text that differs from the stored
    /// guess; the field is keyed on it and redrawn from the stored value.
    pub field_resets: Signal<u32>,
}

pub fn use_ebbinghaus_state() -> EbbinghausState {
    EbbinghausState {
        stepper: use_signal(Stepper::new),
        field_text: use_signal(|| None),
        field_resets: use_signal(|| 0),
    }
}
