use tracing::debug;

use super::catalog::{Round, STEPS, Step, StepKind, round_for_step, round_position};
use super::compare::{ChoiceId, ChoiceMark, Comparison, ComparisonSnapshot, Verdict};
use super::guess::{Feedback, GuessPanel, Reveal};

/// Position of a step relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Completed,
    Active,
    Upcoming,
}

/// Everything a view needs to draw the exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepperSnapshot {
    pub index: usize,
    pub step: Step,
    pub indicators: Vec<(Step, Indicator)>,
    pub next_label: &'static str,
    pub previous_disabled: bool,
    pub round: Option<Round>,
    pub round_number: Option<usize>,
    pub guess: u8,
    pub feedback: Feedback,
    pub reveal: Option<Reveal>,
    pub comparison: ComparisonSnapshot,
    pub choice_marks: Vec<(ChoiceId, ChoiceMark)>,
    /// Bumped on every entry into the plot step; views key the curve
    /// animation on it so it plays once per visit.
    pub plot_generation: u32,
}

impl StepperSnapshot {
    #[must_use]
    pub fn visible_view(&self) -> StepKind {
        self.step.kind
    }
}

/// Owns the exercise: the current step plus the round and comparison state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stepper {
    index: usize,
    guess: GuessPanel,
    comparison: Comparison,
    plot_generation: u32,
}

impl Stepper {
    #[must_use]
    pub fn new() -> Self {
        let mut stepper = Self {
            index: 0,
            guess: GuessPanel::new(),
            comparison: Comparison::new(),
            plot_generation: 0,
        };
        stepper.render_current_step();
        stepper
    }

    #[must_use]
    pub fn step_count(&self) -> usize {
        STEPS.len()
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        STEPS.len() - 1
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn current_step(&self) -> Step {
        STEPS[self.index]
    }

    #[must_use]
    pub fn current_round(&self) -> Option<&'static Round> {
        round_for_step(self.index)
    }

    /// Next step, wrapping from the takeaway back to the first round.
    pub fn advance(&mut self) {
        self.index = if self.index == self.last_index() {
            0
        } else {
            self.index + 1
        };
        self.render_current_step();
    }

    /// Previous step, floored at the first one.
    pub fn retreat(&mut self) {
        self.index = self.index.saturating_sub(1);
        self.render_current_step();
    }

    /// Jump from a step-indicator click.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index.min(self.last_index());
        self.render_current_step();
    }

    /// Prepare the view of the current step.
    ///
    /// Round steps start from the default guess with nothing revealed, and the
    /// comparison starts unanswered, on every visit.
    pub fn render_current_step(&mut self) {
        let step = self.current_step();
        debug!(index = self.index, label = step.label, kind = ?step.kind, "exercise step");
        match step.kind {
            StepKind::Round => self.guess.reset(),
            StepKind::Plot => self.plot_generation = self.plot_generation.wrapping_add(1),
            StepKind::Compare => self.comparison.reset(),
            StepKind::Takeaway => {}
        }
    }

    pub fn set_guess(&mut self, value: i64) -> u8 {
        self.guess.set_guess(value)
    }

    pub fn set_guess_text(&mut self, raw: &str) -> u8 {
        self.guess.set_guess_text(raw)
    }

    /// Reveal the current round. Outside a round step there is nothing to
    /// reveal and the guess is asked for again.
    pub fn reveal(&mut self) -> Feedback {
        match self.current_round() {
            Some(round) => self.guess.reveal(round),
            None => Feedback::PickANumber,
        }
    }

    /// Reveal using the number field's raw text.
    pub fn reveal_input(&mut self, raw: &str) -> Feedback {
        match self.current_round() {
            Some(round) => self.guess.reveal_input(raw, round),
            None => Feedback::PickANumber,
        }
    }

    /// Answer the comparison; ignored outside the compare step.
    pub fn choose(&mut self, choice: ChoiceId) -> Option<Verdict> {
        if self.current_step().kind != StepKind::Compare {
            return None;
        }
        Some(self.comparison.select(choice))
    }

    #[must_use]
    pub fn indicators(&self) -> Vec<(Step, Indicator)> {
        STEPS
            .iter()
            .enumerate()
            .map(|(idx, step)| {
                let indicator = match idx.cmp(&self.index) {
                    std::cmp::Ordering::Less => Indicator::Completed,
                    std::cmp::Ordering::Equal => Indicator::Active,
                    std::cmp::Ordering::Greater => Indicator::Upcoming,
                };
                (*step, indicator)
            })
            .collect()
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.index == self.last_index() {
            "Restart"
        } else {
            "Next"
        }
    }

    #[must_use]
    pub fn previous_disabled(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn guess(&self) -> &GuessPanel {
        &self.guess
    }

    #[must_use]
    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    #[must_use]
    pub fn plot_generation(&self) -> u32 {
        self.plot_generation
    }

    #[must_use]
    pub fn snapshot(&self) -> StepperSnapshot {
        let round = self.current_round().copied();
        let round_number = round_position(self.index).map(|position| position + 1);
        StepperSnapshot {
            index: self.index,
            step: self.current_step(),
            indicators: self.indicators(),
            next_label: self.next_label(),
            previous_disabled: self.previous_disabled(),
            round,
            round_number,
            guess: self.guess.guess().value(),
            feedback: self.guess.feedback(),
            reveal: self.guess.reveal_state(),
            comparison: self.comparison.snapshot(),
            choice_marks: super::compare::CHOICES
                .iter()
                .map(|choice| (choice.id, self.comparison.mark(choice.id)))
                .collect(),
            plot_generation: self.plot_generation,
        }
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}
