//! One component per slide kind.
//!
//! Every slide stays mounted while the deck is open; only the active one is
//! visible. Timers started by a slide live in its `TimerSlot`s.

mod brain;
mod forgetting;
mod plot;
mod practice;
mod working_memory;

use dioxus::prelude::*;
use memory_core::model::SlideKind;

use crate::views::EbbinghausView;

pub(crate) use plot::PlotSvg;

#[component]
pub fn SlideBody(kind: SlideKind) -> Element {
    match kind {
        SlideKind::Welcome => rsx! { brain::WelcomeSlide {} },
        SlideKind::Synapse => rsx! { brain::SynapseSlide {} },
        SlideKind::Writing => rsx! { brain::WritingSlide {} },
        SlideKind::LetterTest => rsx! { working_memory::LetterSlide {} },
        SlideKind::MagicNumber => rsx! { working_memory::MagicNumberSlide {} },
        SlideKind::ChunkBuilder => rsx! { working_memory::ChunkSlide {} },
        SlideKind::WordFlash => rsx! { working_memory::WordFlashSlide {} },
        SlideKind::Hippocampus => rsx! { forgetting::HippocampusSlide {} },
        SlideKind::Ebbinghaus => rsx! { EbbinghausView {} },
        SlideKind::SpacedRepetition => rsx! { forgetting::SpacedSlide {} },
        SlideKind::FadingGame => rsx! { forgetting::FadeSlide {} },
        SlideKind::Swimming => rsx! { practice::SwimSlide {} },
        SlideKind::ActivePassive => rsx! { practice::QuizSlide {} },
        SlideKind::Closing => rsx! { practice::ClosingSlide {} },
    }
}
