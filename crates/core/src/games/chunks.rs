use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

/// Verb and the phrase it collocates with.
pub const PAIRS: [(&str, &str); 8] = [
    ("make", "a mistake"),
    ("take", "a photo"),
    ("do", "homework"),
    ("have", "breakfast"),
    ("surf", "the internet"),
    ("catch", "a cold"),
    ("pay", "attention"),
    ("break", "the rules"),
];

const RESHUFFLE_ATTEMPTS: usize = 20;

pub const COMPLETE_MESSAGE: &str =
    "Now these are CHUNKS in your brain - easier to remember than separate words!";

#[must_use]
pub fn phrase_for(verb: &str) -> Option<&'static str> {
    PAIRS
        .iter()
        .find(|(candidate, _)| *candidate == verb)
        .map(|(_, phrase)| *phrase)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Matched,
    Completed,
    Mismatch,
    /// The target was already matched or does not exist.
    Ignored,
}

impl DropOutcome {
    #[must_use]
    pub fn message(self) -> Option<&'static str> {
        match self {
            DropOutcome::Matched => Some("Great match!"),
            DropOutcome::Completed => Some(COMPLETE_MESSAGE),
            DropOutcome::Mismatch => Some("Try again!"),
            DropOutcome::Ignored => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkTarget {
    pub phrase: &'static str,
    pub matched_verb: Option<&'static str>,
}

impl ChunkTarget {
    #[must_use]
    pub fn label(&self) -> String {
        match self.matched_verb {
            Some(verb) => format!("{verb} {}", self.phrase),
            None => self.phrase.to_owned(),
        }
    }
}

/// Drag verbs onto the phrases they belong with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkBuilder {
    verbs: Vec<&'static str>,
    targets: Vec<ChunkTarget>,
    score: usize,
    feedback: Option<DropOutcome>,
}

impl ChunkBuilder {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut verbs: Vec<&'static str> = PAIRS.iter().map(|(verb, _)| *verb).collect();
        verbs.shuffle(rng);
        let phrases = non_matching_phrases(&verbs, rng);
        Self {
            verbs,
            targets: phrases
                .into_iter()
                .map(|phrase| ChunkTarget {
                    phrase,
                    matched_verb: None,
                })
                .collect(),
            score: 0,
            feedback: None,
        }
    }

    pub fn drop_verb(&mut self, verb: &str, target: usize) -> DropOutcome {
        let total = self.targets.len();
        let Some(slot) = self.targets.get_mut(target) else {
            return DropOutcome::Ignored;
        };
        if slot.matched_verb.is_some() {
            return DropOutcome::Ignored;
        }
        let outcome = match PAIRS.iter().find(|(candidate, _)| *candidate == verb) {
            Some((verb, phrase)) if *phrase == slot.phrase => {
                slot.matched_verb = Some(*verb);
                self.score += 1;
                if self.score == total {
                    DropOutcome::Completed
                } else {
                    DropOutcome::Matched
                }
            }
            _ => DropOutcome::Mismatch,
        };
        debug!(verb, target, ?outcome, score = self.score, "chunk drop");
        self.feedback = Some(outcome);
        outcome
    }

    #[must_use]
    pub fn verbs(&self) -> &[&'static str] {
        &self.verbs
    }

    #[must_use]
    pub fn targets(&self) -> &[ChunkTarget] {
        &self.targets
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn feedback(&self) -> Option<&'static str> {
        self.feedback.and_then(DropOutcome::message)
    }
}

fn lines_up(verbs: &[&str], phrases: &[&str]) -> bool {
    verbs
        .iter()
        .zip(phrases)
        .any(|(verb, phrase)| phrase_for(verb) == Some(*phrase))
}

/// Shuffle phrases so no row pairs a verb with its own phrase: a bounded
/// number of reshuffles, then rotations of the last shuffle.
pub fn non_matching_phrases<R: Rng + ?Sized>(
    verbs: &[&'static str],
    rng: &mut R,
) -> Vec<&'static str> {
    let mut phrases: Vec<&'static str> = PAIRS.iter().map(|(_, phrase)| *phrase).collect();
    phrases.shuffle(rng);
    let mut attempt = 0;
    while attempt < RESHUFFLE_ATTEMPTS && lines_up(verbs, &phrases) {
        phrases.shuffle(rng);
        attempt += 1;
    }
    if lines_up(verbs, &phrases) {
        for shift in 1..phrases.len() {
            let mut rotated = phrases.clone();
            rotated.rotate_left(shift);
            if !lines_up(verbs, &rotated) {
                return rotated;
            }
        }
    }
    phrases
}
