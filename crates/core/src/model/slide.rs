use serde::{Deserialize, Serialize};

/// Interactive behaviour hosted by a slide.
///
/// Activation hooks are keyed by kind, never by slide position, so an outline
/// can reorder or drop slides without breaking the games that remain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideKind {
    /// Title slide with the neuron counter.
    Welcome,
    Synapse,
    Writing,
    LetterTest,
    MagicNumber,
    ChunkBuilder,
    WordFlash,
    Hippocampus,
    /// The guided forgetting-curve exercise.
    Ebbinghaus,
    SpacedRepetition,
    FadingGame,
    Swimming,
    ActivePassive,
    Closing,
}

/// What a slide needs when it becomes the active one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    RestartCounter,
    ResetMatchup,
    RedrawSpacedCurve,
    None,
}

impl SlideKind {
    #[must_use]
    pub fn activation(self) -> Activation {
        match self {
            SlideKind::Welcome => Activation::RestartCounter,
            SlideKind::Hippocampus => Activation::ResetMatchup,
            SlideKind::SpacedRepetition => Activation::RedrawSpacedCurve,
            _ => Activation::None,
        }
    }
}

/// One screen of the presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    kind: SlideKind,
    section: String,
    title: String,
}

impl Slide {
    #[must_use]
    pub fn new(kind: SlideKind, section: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind,
            section: section.into(),
            title: title.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> SlideKind {
        self.kind
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Label used by the slide menu.
    #[must_use]
    pub fn menu_label(&self) -> String {
        format!("{} • {}", self.section, self.title)
    }
}
