use tracing::debug;

use super::catalog::Round;

pub const DEFAULT_GUESS: u8 = 50;
/// A guess within this many points of the answer counts as close.
pub const CLOSE_MARGIN: u8 = 10;
pub const PICK_A_NUMBER: &str = "Pick a number first!";

/// How the audience's guess compares with the real figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reaction {
    /// Guessed too little forgetting: it is worse than they thought.
    TooLow,
    /// Guessed too much forgetting: memory holds on longer.
    TooHigh,
    Close,
}

impl Reaction {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Reaction::TooLow => "Ouch! Forgetting is worse than you guessed.",
            Reaction::TooHigh => "Not that bad yet! Memory hangs on a little longer.",
            Reaction::Close => "Good intuition! You are close.",
        }
    }
}

#[must_use]
pub fn classify(guess: u8, answer: u8) -> Reaction {
    let diff = guess.abs_diff(answer);
    if diff > CLOSE_MARGIN && guess < answer {
        Reaction::TooLow
    } else if diff > CLOSE_MARGIN && guess > answer {
        Reaction::TooHigh
    } else {
        Reaction::Close
    }
}

/// Coerce raw widget text into a guess.
///
/// Any finite number is rounded and clamped into `0..=100`; anything else
/// (empty text, words, `NaN`) does not resolve.
#[must_use]
pub fn resolve_guess(raw: &str) -> Option<u8> {
    let parsed = raw.trim().parse::<f64>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let value = parsed.round().clamp(0.0, 100.0) as u8;
    Some(value)
}

/// The guess shared by the slider and the number field.
///
/// Both widgets render from the same stored value, so they can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessState {
    value: u8,
}

impl GuessState {
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: DEFAULT_GUESS,
        }
    }

    /// Store `value` clamped into `0..=100`.
    pub fn set(&mut self, value: i64) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let clamped = value.clamp(0, 100) as u8;
        self.value = clamped;
        clamped
    }

    /// Store widget text. Text that does not resolve keeps the previous value.
    pub fn set_text(&mut self, raw: &str) -> u8 {
        if let Some(value) = resolve_guess(raw) {
            self.value = value;
        }
        self.value
    }

    pub fn reset(&mut self) {
        self.value = DEFAULT_GUESS;
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn slider_value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn field_value(&self) -> u8 {
        self.value
    }
}

impl Default for GuessState {
    fn default() -> Self {
        Self::new()
    }
}

/// Disclosed answer for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub guess: u8,
    pub forgotten_percent: u8,
    pub reaction: Reaction,
    pub explanation: &'static str,
}

impl Reveal {
    /// Opacity of the "fading memory" indicator, in percent.
    #[must_use]
    pub fn memory_opacity_percent(&self) -> u8 {
        100u8.saturating_sub(self.forgotten_percent)
    }
}

/// Line shown under the guess controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    PickANumber,
    Reaction(Reaction),
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            Feedback::None => None,
            Feedback::PickANumber => Some(PICK_A_NUMBER),
            Feedback::Reaction(reaction) => Some(reaction.message()),
        }
    }
}

/// Guess input plus reveal output for the round being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessPanel {
    guess: GuessState,
    reveal: Option<Reveal>,
    feedback: Feedback,
}

impl GuessPanel {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guess: GuessState::new(),
            reveal: None,
            feedback: Feedback::None,
        }
    }

    pub fn set_guess(&mut self, value: i64) -> u8 {
        self.guess.set(value)
    }

    pub fn set_guess_text(&mut self, raw: &str) -> u8 {
        self.guess.set_text(raw)
    }

    /// Disclose `round` against the stored guess.
    pub fn reveal(&mut self, round: &Round) -> Feedback {
        self.reveal_value(Some(self.guess.value()), round)
    }

    /// Disclose `round` against the number field's raw text.
    ///
    /// Text that does not resolve asks for a number and leaves everything else
    /// untouched.
    pub fn reveal_input(&mut self, raw: &str, round: &Round) -> Feedback {
        let resolved = resolve_guess(raw);
        if let Some(value) = resolved {
            self.guess.set(i64::from(value));
        }
        self.reveal_value(resolved, round)
    }

    fn reveal_value(&mut self, guess: Option<u8>, round: &Round) -> Feedback {
        let Some(guess) = guess else {
            self.feedback = Feedback::PickANumber;
            return self.feedback;
        };
        let reaction = classify(guess, round.forgotten_percent);
        debug!(guess, answer = round.forgotten_percent, ?reaction, "round revealed");
        self.reveal = Some(Reveal {
            guess,
            forgotten_percent: round.forgotten_percent,
            reaction,
            explanation: round.explanation,
        });
        self.feedback = Feedback::Reaction(reaction);
        self.feedback
    }

    /// Back to the default guess with nothing revealed.
    pub fn reset(&mut self) {
        self.guess.reset();
        self.reveal = None;
        self.feedback = Feedback::None;
    }

    #[must_use]
    pub fn guess(&self) -> GuessState {
        self.guess
    }

    #[must_use]
    pub fn reveal_state(&self) -> Option<Reveal> {
        self.reveal
    }

    #[must_use]
    pub fn feedback(&self) -> Feedback {
        self.feedback
    }
}

impl Default for GuessPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(answer: u8) -> Round {
        Round {
            title: "Test",
            clock_label: "now",
            forgotten_percent: answer,
            explanation: "because",
        }
    }

    #[test]
    fn set_clamps_out_of_range_values() {
        let mut guess = GuessState::new();
        assert_eq!(guess.set(150), 100);
        assert_eq!(guess.slider_value(), guess.field_value());
        assert_eq!(guess.set(-5), 0);
        assert_eq!(guess.slider_value(), 0);
        assert_eq!(guess.field_value(), 0);
    }

    #[test]
    fn text_is_rounded_clamped_or_ignored() {
        let mut guess = GuessState::new();
        assert_eq!(guess.set_text(" 33.6 "), 34);
        assert_eq!(guess.set_text("1e3"), 100);
        assert_eq!(guess.set_text("-12"), 0);
        assert_eq!(guess.set_text("lots"), 0);
        assert_eq!(guess.set_text(""), 0);
        assert_eq!(guess.set_text("NaN"), 0);
        assert_eq!(guess.slider_value(), guess.field_value());
    }

    #[test]
    fn classification_uses_ten_point_margin() {
        assert_eq!(classify(40, 40), Reaction::Close);
        assert_eq!(classify(10, 70), Reaction::TooLow);
        assert_eq!(classify(95, 40), Reaction::TooHigh);
        assert_eq!(classify(30, 40), Reaction::Close);
        assert_eq!(classify(29, 40), Reaction::TooLow);
        assert_eq!(classify(51, 40), Reaction::TooHigh);
    }

    #[test]
    fn reveal_reports_answer_and_fade() {
        let mut panel = GuessPanel::new();
        panel.set_guess(10);
        let feedback = panel.reveal(&round(70));
        assert_eq!(feedback, Feedback::Reaction(Reaction::TooLow));
        let reveal = panel.reveal_state().unwrap();
        assert_eq!(reveal.forgotten_percent, 70);
        assert_eq!(reveal.memory_opacity_percent(), 30);
        assert_eq!(reveal.explanation, "because");
    }

    #[test]
    fn fade_bottoms_out_for_oversized_percent() {
        let reveal = Reveal {
            guess: 50,
            forgotten_percent: 130,
            reaction: Reaction::TooLow,
            explanation: "",
        };
        assert_eq!(reveal.memory_opacity_percent(), 0);
    }

    #[test]
    fn unresolvable_input_only_prompts() {
        let mut panel = GuessPanel::new();
        panel.set_guess(20);
        let feedback = panel.reveal_input("abc", &round(40));
        assert_eq!(feedback, Feedback::PickANumber);
        assert_eq!(feedback.message(), Some(PICK_A_NUMBER));
        assert_eq!(panel.reveal_state(), None);
        assert_eq!(panel.guess().value(), 20);
    }

    #[test]
    fn raw_input_reveal_stores_the_guess() {
        let mut panel = GuessPanel::new();
        let feedback = panel.reveal_input("95", &round(40));
        assert_eq!(feedback, Feedback::Reaction(Reaction::TooHigh));
        assert_eq!(panel.guess().value(), 95);
    }

    #[test]
    fn reset_restores_default_and_hides_reveal() {
        let mut panel = GuessPanel::new();
        panel.set_guess(80);
        panel.reveal(&round(42));
        panel.reset();
        assert_eq!(panel.guess().value(), DEFAULT_GUESS);
        assert_eq!(panel.reveal_state(), None);
        assert_eq!(panel.feedback(), Feedback::None);
    }
}
