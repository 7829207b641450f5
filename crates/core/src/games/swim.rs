#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwimOption {
    pub label: &'static str,
    pub correct: bool,
}

pub const SWIM_OPTIONS: [SwimOption; 3] = [
    SwimOption {
        label: "Read a book about swimming",
        correct: false,
    },
    SwimOption {
        label: "Watch videos of swimmers",
        correct: false,
    },
    SwimOption {
        label: "Get in the water and practise",
        correct: true,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionMark {
    Unselected,
    Correct,
    Wrong,
}

/// "How do you learn to swim?" with the learning panel tied to the last pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SwimQuestion {
    selected: Option<usize>,
}

impl SwimQuestion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick an option; returns whether it was the right one.
    pub fn select(&mut self, index: usize) -> Option<bool> {
        let option = SWIM_OPTIONS.get(index)?;
        self.selected = Some(index);
        Some(option.correct)
    }

    fn selected_correct(&self) -> Option<bool> {
        self.selected
            .and_then(|index| SWIM_OPTIONS.get(index))
            .map(|option| option.correct)
    }

    #[must_use]
    pub fn mark(&self, index: usize) -> OptionMark {
        match (self.selected, SWIM_OPTIONS.get(index)) {
            (Some(selected), Some(option)) if selected == index => {
                if option.correct {
                    OptionMark::Correct
                } else {
                    OptionMark::Wrong
                }
            }
            _ => OptionMark::Unselected,
        }
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&'static str> {
        self.selected_correct().map(|correct| {
            if correct {
                "Yes! You learn by doing."
            } else {
                "Not quite. Real learning comes from practice."
            }
        })
    }

    #[must_use]
    pub fn shows_learning(&self) -> bool {
        self.selected_correct().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_pick_drives_feedback() {
        let mut question = SwimQuestion::new();
        assert_eq!(question.feedback(), None);
        assert_eq!(question.select(0), Some(false));
        assert_eq!(question.mark(0), OptionMark::Wrong);
        assert!(!question.shows_learning());

        assert_eq!(question.select(2), Some(true));
        assert_eq!(question.mark(0), OptionMark::Unselected);
        assert_eq!(question.mark(2), OptionMark::Correct);
        assert_eq!(question.feedback(), Some("Yes! You learn by doing."));
        assert!(question.shows_learning());

        question.select(1);
        assert!(!question.shows_learning());
    }

    #[test]
    fn unknown_option_is_ignored() {
        let mut question = SwimQuestion::new();
        assert_eq!(question.select(9), None);
        assert_eq!(question.feedback(), None);
    }
}
