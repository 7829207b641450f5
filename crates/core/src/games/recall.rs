use std::collections::HashSet;
use std::time::Duration;

pub const WORDS: [&str; 10] = [
    "apple", "river", "chair", "school", "music", "flower", "happy", "train", "planet", "window",
];
pub const FLASH_INTERVAL: Duration = Duration::from_secs(1);
pub const RECALL_PROMPT: &str = "Type the words you remember";
pub const IDLE_TEXT: &str = "Press start";

/// Count distinct list words in free-form recall text.
#[must_use]
pub fn count_recalled(typed: &str) -> usize {
    let lowered = typed.to_lowercase();
    let unique: HashSet<&str> = lowered
        .split(|ch: char| ch.is_whitespace() || ch == ',' || ch == ';')
        .filter(|word| !word.is_empty())
        .collect();
    unique.iter().filter(|word| WORDS.contains(*word)).count()
}

#[must_use]
pub fn recall_message(count: usize) -> String {
    format!(
        "You remembered {count} / {} words. This is normal! Your working memory has limits.",
        WORDS.len()
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Flashing(usize),
    Recall,
}

/// Flash the list one word at a time, then ask for recall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFlash {
    phase: Phase,
    feedback: Option<String>,
}

impl WordFlash {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            feedback: None,
        }
    }

    /// Start from the first word, clearing any previous result.
    pub fn start(&mut self) {
        self.phase = Phase::Flashing(0);
        self.feedback = None;
    }

    /// Show the next word; returns `false` once the recall prompt is up.
    pub fn tick(&mut self) -> bool {
        if let Phase::Flashing(index) = self.phase {
            let next = index + 1;
            self.phase = if next >= WORDS.len() {
                Phase::Recall
            } else {
                Phase::Flashing(next)
            };
        }
        matches!(self.phase, Phase::Flashing(_))
    }

    #[must_use]
    pub fn is_flashing(&self) -> bool {
        matches!(self.phase, Phase::Flashing(_))
    }

    #[must_use]
    pub fn display(&self) -> &'static str {
        match self.phase {
            Phase::Idle => IDLE_TEXT,
            Phase::Flashing(index) => WORDS[index],
            Phase::Recall => RECALL_PROMPT,
        }
    }

    pub fn check(&mut self, typed: &str) -> usize {
        let count = count_recalled(typed);
        self.feedback = Some(recall_message(count));
        count
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }
}

impl Default for WordFlash {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_unique_listed_words() {
        assert_eq!(count_recalled("apple, river;chair"), 3);
        assert_eq!(count_recalled("Apple apple APPLE"), 1);
        assert_eq!(count_recalled("banana  car"), 0);
        assert_eq!(count_recalled(""), 0);
    }

    #[test]
    fn flashes_every_word_then_prompts() {
        let mut flash = WordFlash::new();
        assert_eq!(flash.display(), IDLE_TEXT);
        flash.start();
        let mut seen = vec![flash.display()];
        while flash.tick() {
            seen.push(flash.display());
        }
        assert_eq!(seen, WORDS.to_vec());
        assert_eq!(flash.display(), RECALL_PROMPT);
        assert!(!flash.tick());
    }

    #[test]
    fn check_reports_and_restart_clears() {
        let mut flash = WordFlash::new();
        assert_eq!(flash.check("music train planet"), 3);
        assert_eq!(
            flash.feedback(),
            Some("You remembered 3 / 10 words. This is normal! Your working memory has limits.")
        );
        flash.start();
        assert_eq!(flash.feedback(), None);
    }
}
