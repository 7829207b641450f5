use std::time::Duration;

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    Active,
    Passive,
}

impl StudyMode {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            StudyMode::Active => "Active",
            StudyMode::Passive => "Passive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyHabit {
    pub prompt: &'static str,
    pub answer: StudyMode,
}

pub const STUDY_HABITS: [StudyHabit; 6] = [
    StudyHabit {
        prompt: "Re-reading your notes",
        answer: StudyMode::Passive,
    },
    StudyHabit {
        prompt: "Testing yourself with flashcards",
        answer: StudyMode::Active,
    },
    StudyHabit {
        prompt: "Highlighting the textbook",
        answer: StudyMode::Passive,
    },
    StudyHabit {
        prompt: "Explaining the topic to a friend",
        answer: StudyMode::Active,
    },
    StudyHabit {
        prompt: "Watching a lecture video",
        answer: StudyMode::Passive,
    },
    StudyHabit {
        prompt: "Solving practice problems",
        answer: StudyMode::Active,
    },
];

pub const FLASH_DURATION: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitState {
    Open,
    Correct,
    Wrong,
}

/// Sort study habits into active and passive; each answerable once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePassiveQuiz {
    answers: Vec<Option<StudyMode>>,
    flashing: Vec<bool>,
    last_correct: Option<bool>,
}

impl ActivePassiveQuiz {
    #[must_use]
    pub fn new() -> Self {
        Self {
            answers: vec![None; STUDY_HABITS.len()],
            flashing: vec![false; STUDY_HABITS.len()],
            last_correct: None,
        }
    }

    /// Answer one habit. `None` when it was already answered or unknown.
    pub fn answer(&mut self, index: usize, choice: StudyMode) -> Option<bool> {
        let habit = STUDY_HABITS.get(index)?;
        let slot = self.answers.get_mut(index)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(choice);
        let correct = habit.answer == choice;
        self.flashing[index] = true;
        self.last_correct = Some(correct);
        debug!(index, correct, score = self.score(), "habit answered");
        Some(correct)
    }

    pub fn clear_flash(&mut self, index: usize) {
        if let Some(flash) = self.flashing.get_mut(index) {
            *flash = false;
        }
    }

    #[must_use]
    pub fn state(&self, index: usize) -> HabitState {
        match (self.answers.get(index).copied().flatten(), STUDY_HABITS.get(index)) {
            (Some(choice), Some(habit)) if choice == habit.answer => HabitState::Correct,
            (Some(_), Some(_)) => HabitState::Wrong,
            _ => HabitState::Open,
        }
    }

    #[must_use]
    pub fn is_flashing(&self, index: usize) -> bool {
        self.flashing.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn score(&self) -> usize {
        (0..STUDY_HABITS.len())
            .filter(|index| self.state(*index) == HabitState::Correct)
            .count()
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_some()).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        STUDY_HABITS.len()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<String> {
        if self.answered() == self.total() {
            return Some(format!("Done! Your score: {} / {}.", self.score(), self.total()));
        }
        self.last_correct
            .map(|correct| (if correct { "Correct!" } else { "Not quite." }).to_owned())
    }
}

impl Default for ActivePassiveQuiz {
    fn default() -> Self {
        Self::new()
    }
}
