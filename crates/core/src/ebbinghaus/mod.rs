//! The guided forgetting-curve exercise.
//!
//! Seven fixed steps: four guessing rounds, the plotted curve, a one-question
//! comparison and a takeaway. [`Stepper`] owns all of its state; views render
//! from [`StepperSnapshot`].

mod catalog;
mod compare;
mod guess;
mod stepper;

pub use catalog::{ROUNDS, Round, STEPS, Step, StepKind, round_for_step, round_position};
pub use compare::{
    Bars, CHOICES, CORRECT_CHOICE, Choice, ChoiceId, ChoiceMark, Comparison, ComparisonSnapshot,
    SINGLE_SESSION_BAR_PERCENT, SPACED_REVIEW_BAR_PERCENT, Verdict,
};
pub use guess::{
    CLOSE_MARGIN, DEFAULT_GUESS, Feedback, GuessPanel, GuessState, PICK_A_NUMBER, Reaction, Reveal,
    classify, resolve_guess,
};
pub use stepper::{Indicator, Stepper, StepperSnapshot};
