use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChoiceId {
    A,
    B,
}

impl ChoiceId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ChoiceId::A => "A",
            ChoiceId::B => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: &'static str,
}

pub const CHOICES: [Choice; 2] = [
    Choice {
        id: ChoiceId::A,
        label: "One long 2-hour session the night before",
    },
    Choice {
        id: ChoiceId::B,
        label: "Four short reviews spread over the week",
    },
];

pub const CORRECT_CHOICE: ChoiceId = ChoiceId::B;

/// Retention after a week with a single session, in percent.
pub const SINGLE_SESSION_BAR_PERCENT: u8 = 28;
/// Retention after a week with spaced reviews, in percent.
pub const SPACED_REVIEW_BAR_PERCENT: u8 = 82;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

impl Verdict {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Correct => "Exactly! Short spaced reviews keep far more than one long session.",
            Verdict::Incorrect => "Surprise! The long session loses to a few short spaced reviews.",
        }
    }
}

/// How an option card is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMark {
    Unselected,
    SelectedCorrect,
    SelectedIncorrect,
}

/// Widths of the two comparison bars, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bars {
    pub single_session: u8,
    pub spaced_reviews: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonSnapshot {
    pub selected: Option<ChoiceId>,
    pub verdict: Option<Verdict>,
    pub bars: Option<Bars>,
}

/// One informational multiple-choice question.
///
/// The selection can change after the first pick; each pick re-evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Comparison {
    selected: Option<ChoiceId>,
}

impl Comparison {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, choice: ChoiceId) -> Verdict {
        self.selected = Some(choice);
        let verdict = verdict_for(choice);
        debug!(choice = choice.as_str(), ?verdict, "comparison answered");
        verdict
    }

    pub fn reset(&mut self) {
        self.selected = None;
    }

    #[must_use]
    pub fn selected(&self) -> Option<ChoiceId> {
        self.selected
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.selected.map(verdict_for)
    }

    /// Bars appear once any option is picked.
    #[must_use]
    pub fn bars(&self) -> Option<Bars> {
        self.selected.map(|_| Bars {
            single_session: SINGLE_SESSION_BAR_PERCENT,
            spaced_reviews: SPACED_REVIEW_BAR_PERCENT,
        })
    }

    #[must_use]
    pub fn mark(&self, choice: ChoiceId) -> ChoiceMark {
        match self.selected {
            Some(selected) if selected == choice => match verdict_for(choice) {
                Verdict::Correct => ChoiceMark::SelectedCorrect,
                Verdict::Incorrect => ChoiceMark::SelectedIncorrect,
            },
            _ => ChoiceMark::Unselected,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ComparisonSnapshot {
        ComparisonSnapshot {
            selected: self.selected,
            verdict: self.verdict(),
            bars: self.bars(),
        }
    }
}

fn verdict_for(choice: ChoiceId) -> Verdict {
    if choice == CORRECT_CHOICE {
        Verdict::Correct
    } else {
        Verdict::Incorrect
    }
}
