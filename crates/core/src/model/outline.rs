use thiserror::Error;

use super::slide::{Slide, SlideKind};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OutlineError {
    #[error("a deck needs at least one slide")]
    Empty,
}

/// Ordered, non-empty list of slides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckOutline {
    slides: Vec<Slide>,
}

impl DeckOutline {
    /// # Errors
    ///
    /// Returns `OutlineError::Empty` if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self, OutlineError> {
        if slides.is_empty() {
            return Err(OutlineError::Empty);
        }
        Ok(Self { slides })
    }

    /// The memory & learning lecture shipped with the app.
    #[must_use]
    pub fn memory_lecture() -> Self {
        let slides = vec![
            Slide::new(SlideKind::Welcome, "1.1", "86 billion"),
            Slide::new(SlideKind::Synapse, "2.1", "Fire together, wire together"),
            Slide::new(SlideKind::Writing, "2.2", "Practice smooths the path"),
            Slide::new(SlideKind::LetterTest, "3.1", "The letter test"),
            Slide::new(SlideKind::MagicNumber, "3.2", "The magic number"),
            Slide::new(SlideKind::ChunkBuilder, "3.3", "Chunk builder"),
            Slide::new(SlideKind::WordFlash, "3.4", "Word flash"),
            Slide::new(SlideKind::Hippocampus, "4.1", "Hippocampus matchup"),
            Slide::new(SlideKind::Ebbinghaus, "4.2", "The forgetting curve"),
            Slide::new(SlideKind::SpacedRepetition, "4.3", "Spaced repetition"),
            Slide::new(SlideKind::FadingGame, "4.4", "Beat the fade"),
            Slide::new(SlideKind::Swimming, "5.1", "Learning to swim"),
            Slide::new(SlideKind::ActivePassive, "5.2", "Active or passive?"),
            Slide::new(SlideKind::Closing, "6.1", "Keep it alive"),
        ];
        Self { slides }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Never true for an outline built through [`DeckOutline::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Position of the first slide of the given kind, if the outline has one.
    #[must_use]
    pub fn position_of(&self, kind: SlideKind) -> Option<usize> {
        self.slides.iter().position(|slide| slide.kind() == kind)
    }
}

impl Default for DeckOutline {
    fn default() -> Self {
        Self::memory_lecture()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_outline_is_rejected() {
        assert_eq!(DeckOutline::new(Vec::new()), Err(OutlineError::Empty));
    }

    #[test]
    fn lecture_has_one_slide_per_kind() {
        let outline = DeckOutline::memory_lecture();
        assert_eq!(outline.len(), 14);
        assert_eq!(outline.position_of(SlideKind::Welcome), Some(0));
        assert_eq!(outline.position_of(SlideKind::Ebbinghaus), Some(8));
        assert_eq!(outline.position_of(SlideKind::Closing), Some(13));
    }

    #[test]
    fn missing_kind_has_no_position() {
        let outline =
            DeckOutline::new(vec![Slide::new(SlideKind::Closing, "1", "Only")]).unwrap();
        assert_eq!(outline.position_of(SlideKind::Hippocampus), None);
        assert!(!outline.is_empty());
        assert_eq!(outline.len(), 1);
    }
}
