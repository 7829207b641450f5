use std::time::Duration;

use crate::timer::{Countdown, Tick};

pub const FADE_ITEMS: [(&str, &str); 5] = [
    ("🐱", "cat"),
    ("📘", "book"),
    ("☀️", "sun"),
    ("🌳", "tree"),
    ("🐟", "fish"),
];
pub const GAME_SECONDS: u32 = 60;
pub const FADE_INTERVAL: Duration = Duration::from_millis(600);
/// Opacities are whole percents.
pub const FADE_STEP: u8 = 5;
pub const BOOST: u8 = 30;
pub const FINISHED_MESSAGE: &str = "Great job! You beat the forgetting curve.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeItem {
    pub emoji: &'static str,
    pub word: &'static str,
    pub opacity: u8,
}

/// Keep items visible by clicking them before they fade away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeGame {
    opacities: [u8; FADE_ITEMS.len()],
    countdown: Countdown,
    started: bool,
    finished: bool,
}

impl FadeGame {
    #[must_use]
    pub fn new() -> Self {
        Self {
            opacities: [100; FADE_ITEMS.len()],
            countdown: Countdown::new(GAME_SECONDS),
            started: false,
            finished: false,
        }
    }

    pub fn start(&mut self) {
        self.opacities = [100; FADE_ITEMS.len()];
        self.countdown.start();
        self.started = true;
        self.finished = false;
    }

    /// One-second game clock.
    pub fn tick_second(&mut self) -> Tick {
        let tick = self.countdown.tick();
        if tick == Tick::Finished {
            self.finished = true;
        }
        tick
    }

    /// Fade every item one step while the clock runs.
    pub fn fade(&mut self) {
        if !self.countdown.is_running() {
            return;
        }
        for opacity in &mut self.opacities {
            *opacity = opacity.saturating_sub(FADE_STEP);
        }
    }

    /// Clicking an item brings it back.
    pub fn boost(&mut self, index: usize) {
        if let Some(opacity) = self.opacities.get_mut(index) {
            *opacity = opacity.saturating_add(BOOST).min(100);
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.countdown.is_running()
    }

    #[must_use]
    pub fn time_left(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Items appear once the first game starts.
    #[must_use]
    pub fn items(&self) -> Vec<FadeItem> {
        if !self.started {
            return Vec::new();
        }
        FADE_ITEMS
            .iter()
            .zip(self.opacities)
            .map(|(&(emoji, word), opacity)| FadeItem {
                emoji,
                word,
                opacity,
            })
            .collect()
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&'static str> {
        self.finished.then_some(FINISHED_MESSAGE)
    }
}

impl Default for FadeGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_shows_before_start() {
        let game = FadeGame::new();
        assert!(game.items().is_empty());
        assert_eq!(game.time_left(), GAME_SECONDS);
    }

    #[test]
    fn items_fade_and_recover() {
        let mut game = FadeGame::new();
        game.start();
        for _ in 0..4 {
            game.fade();
        }
        assert_eq!(game.items()[0].opacity, 80);
        game.boost(0);
        assert_eq!(game.items()[0].opacity, 100);
        for _ in 0..30 {
            game.fade();
        }
        assert_eq!(game.items()[1].opacity, 0);
        game.boost(1);
        assert_eq!(game.items()[1].opacity, 30);
        game.boost(42);
    }

    #[test]
    fn clock_runs_out_and_fading_stops() {
        let mut game = FadeGame::new();
        game.start();
        for _ in 0..GAME_SECONDS {
            game.tick_second();
        }
        assert!(!game.is_running());
        assert_eq!(game.feedback(), Some(FINISHED_MESSAGE));
        game.fade();
        assert_eq!(game.items()[0].opacity, 100);

        game.start();
        assert_eq!(game.feedback(), None);
        assert_eq!(game.time_left(), GAME_SECONDS);
    }
}
