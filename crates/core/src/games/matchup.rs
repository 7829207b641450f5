use tracing::debug;

/// Who has the bigger hippocampus?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contender {
    Professor,
    TaxiDriver,
    ChessChampion,
}

impl Contender {
    pub const ALL: [Contender; 3] = [
        Contender::Professor,
        Contender::TaxiDriver,
        Contender::ChessChampion,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Contender::Professor => "University professor",
            Contender::TaxiDriver => "London taxi driver",
            Contender::ChessChampion => "Chess champion",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Contender::Professor => "🎓",
            Contender::TaxiDriver => "🚕",
            Contender::ChessChampion => "♟️",
        }
    }
}

pub const WINNER: Contender = Contender::TaxiDriver;

pub const VOTE_PROMPT: &str = "Click a contender to vote.";
pub const REVEAL_TEXT: &str = "London taxi drivers memorise thousands of streets. Their hippocampus grows with the practice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardState {
    pub picked: bool,
    pub winner: bool,
    pub loser: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Matchup {
    vote: Option<Contender>,
}

impl Matchup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cast the single vote. Returns `false` once a vote is locked in.
    pub fn vote(&mut self, contender: Contender) -> bool {
        if self.vote.is_some() {
            return false;
        }
        debug!(?contender, "hippocampus vote");
        self.vote = Some(contender);
        true
    }

    pub fn reset(&mut self) {
        self.vote = None;
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.vote.is_some()
    }

    #[must_use]
    pub fn feedback(&self) -> &'static str {
        match self.vote {
            None => VOTE_PROMPT,
            Some(Contender::Professor) => "Most students pick the professor... but watch the reveal!",
            Some(_) => "Great guess! Watch the reveal.",
        }
    }

    #[must_use]
    pub fn card(&self, contender: Contender) -> CardState {
        match self.vote {
            None => CardState::default(),
            Some(vote) => CardState {
                picked: vote == contender,
                winner: contender == WINNER,
                loser: contender != WINNER,
                disabled: true,
            },
        }
    }
}
