use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::timer::{Countdown, Tick};

pub const SENTENCE: &str = "the quick brown fox jumps over the lazy dog";
pub const LETTER_SECONDS: u32 = 11;
/// The ring stays on screen this long after the countdown hits zero.
pub const RING_LINGER: Duration = Duration::from_millis(600);

pub const READY_TEXT: &str = "Ready?";
pub const TIMES_UP_TEXT: &str = "Time's up! How many did you remember?";
pub const NEEDS_RANDOM_TEXT: &str = "Start random letters first.";

/// The letters of [`SENTENCE`] without whitespace.
#[must_use]
pub fn sentence_letters() -> Vec<char> {
    SENTENCE.chars().filter(|ch| !ch.is_whitespace()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Shown {
    Ready,
    Letters(Vec<char>),
    Sentence,
    TimesUp,
    NeedsRandom,
}

/// Letter display as the view draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterDisplay {
    pub text: String,
    pub active: bool,
    pub random: bool,
    pub times_up: bool,
}

/// Countdown ring beside the display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterRing {
    pub seconds: u32,
    pub degrees: f64,
    pub active: bool,
    pub pulse: bool,
}

/// Memorise shuffled letters, then the same letters as a sentence.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterTest {
    shown: Shown,
    active: bool,
    random: bool,
    times_up: bool,
    last_random: Vec<char>,
    countdown: Countdown,
    ring_active: bool,
    ring_pulse: bool,
}

impl LetterTest {
    #[must_use]
    pub fn new() -> Self {
        Self {
            shown: Shown::Ready,
            active: false,
            random: false,
            times_up: false,
            last_random: Vec::new(),
            countdown: Countdown::new(LETTER_SECONDS),
            ring_active: false,
            ring_pulse: false,
        }
    }

    /// Show a fresh shuffle of the sentence's letters and start the clock.
    pub fn start_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut letters = sentence_letters();
        letters.shuffle(rng);
        debug!(count = letters.len(), "random letters shown");
        self.last_random = letters.clone();
        self.show(Shown::Letters(letters));
    }

    /// Show the sentence itself and start the clock.
    pub fn start_sentence(&mut self) {
        self.show(Shown::Sentence);
    }

    fn show(&mut self, shown: Shown) {
        self.shown = shown;
        self.random = true;
        self.active = true;
        self.times_up = false;
        self.countdown.start();
        self.ring_active = true;
        self.ring_pulse = true;
    }

    /// Show the last random letters again, without a clock.
    pub fn review(&mut self) {
        if self.last_random.is_empty() {
            self.shown = Shown::NeedsRandom;
            self.active = false;
            return;
        }
        self.shown = Shown::Letters(self.last_random.clone());
        self.random = true;
        self.active = false;
        self.times_up = false;
        self.rewind_ring();
    }

    pub fn reset(&mut self) {
        self.shown = Shown::Ready;
        self.active = false;
        self.random = false;
        self.times_up = false;
        self.rewind_ring();
    }

    fn rewind_ring(&mut self) {
        self.countdown.reset();
        self.ring_active = false;
        self.ring_pulse = false;
    }

    /// One-second tick. When the countdown finishes the display flips to the
    /// time's-up prompt; the view then waits [`RING_LINGER`] and calls
    /// [`LetterTest::settle_ring`].
    pub fn tick(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick == Tick::Finished {
            self.ring_pulse = false;
            self.shown = Shown::TimesUp;
            self.active = false;
            self.random = false;
            self.times_up = true;
        }
        tick
    }

    /// Hide the ring once the countdown has finished.
    pub fn settle_ring(&mut self) {
        if !self.countdown.is_running() {
            self.ring_active = false;
            self.ring_pulse = false;
        }
    }

    #[must_use]
    pub fn is_counting(&self) -> bool {
        self.countdown.is_running()
    }

    #[must_use]
    pub fn display(&self) -> LetterDisplay {
        let text = match &self.shown {
            Shown::Ready => READY_TEXT.to_owned(),
            Shown::Letters(letters) => letters
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            Shown::Sentence => SENTENCE.to_owned(),
            Shown::TimesUp => TIMES_UP_TEXT.to_owned(),
            Shown::NeedsRandom => NEEDS_RANDOM_TEXT.to_owned(),
        };
        LetterDisplay {
            text,
            active: self.active,
            random: self.random,
            times_up: self.times_up,
        }
    }

    #[must_use]
    pub fn ring(&self) -> LetterRing {
        LetterRing {
            seconds: self.countdown.remaining(),
            degrees: self.countdown.ring_degrees(),
            active: self.ring_active,
            pulse: self.ring_pulse,
        }
    }
}

impl Default for LetterTest {
    fn default() -> Self {
        Self::new()
    }
}
