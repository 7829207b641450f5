/// Answer to "how many items fit in working memory?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicFeedback {
    Empty,
    Correct,
    MoreThanThat,
    Amazing,
    VeryClose,
}

impl MagicFeedback {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            MagicFeedback::Empty => "Type a number first!",
            MagicFeedback::Correct => "Correct!",
            MagicFeedback::MoreThanThat => "More than that!",
            MagicFeedback::Amazing => "That would be amazing, but no...",
            MagicFeedback::VeryClose => "Very close!",
        }
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; anything
/// after the digits is ignored.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

#[must_use]
pub fn judge(value: i64) -> MagicFeedback {
    match value {
        0 => MagicFeedback::Empty,
        4..=7 => MagicFeedback::Correct,
        v if v <= 3 => MagicFeedback::MoreThanThat,
        v if v >= 10 => MagicFeedback::Amazing,
        _ => MagicFeedback::VeryClose,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MagicNumberQuiz {
    feedback: Option<MagicFeedback>,
    revealed: bool,
    celebrating: bool,
}

impl MagicNumberQuiz {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the typed answer. An empty answer leaves the brain animation
    /// alone; any other answer restarts it only when correct.
    pub fn check(&mut self, raw: &str) -> MagicFeedback {
        let feedback = parse_leading_int(raw).map_or(MagicFeedback::Empty, judge);
        self.feedback = Some(feedback);
        if feedback != MagicFeedback::Empty {
            self.celebrating = feedback == MagicFeedback::Correct;
            self.revealed |= self.celebrating;
        }
        feedback
    }

    #[must_use]
    pub fn feedback(&self) -> Option<MagicFeedback> {
        self.feedback
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_parse() {
        assert_eq!(parse_leading_int("7"), Some(7));
        assert_eq!(parse_leading_int("  5 items"), Some(5));
        assert_eq!(parse_leading_int("-2"), Some(-2));
        assert_eq!(parse_leading_int("4.9"), Some(4));
        assert_eq!(parse_leading_int("seven"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn judgement_bands() {
        assert_eq!(judge(0), MagicFeedback::Empty);
        assert_eq!(judge(3), MagicFeedback::MoreThanThat);
        assert_eq!(judge(-1), MagicFeedback::MoreThanThat);
        assert_eq!(judge(4), MagicFeedback::Correct);
        assert_eq!(judge(7), MagicFeedback::Correct);
        assert_eq!(judge(8), MagicFeedback::VeryClose);
        assert_eq!(judge(9), MagicFeedback::VeryClose);
        assert_eq!(judge(10), MagicFeedback::Amazing);
    }

    #[test]
    fn correct_answer_reveals_and_celebrates() {
        let mut quiz = MagicNumberQuiz::new();
        assert_eq!(quiz.check("6"), MagicFeedback::Correct);
        assert!(quiz.is_revealed() && quiz.is_celebrating());

        quiz.check("");
        assert!(quiz.is_celebrating());

        quiz.check("12");
        assert!(!quiz.is_celebrating());
        assert!(quiz.is_revealed());
        assert_eq!(
            quiz.feedback().map(MagicFeedback::message),
            Some("That would be amazing, but no...")
        );
    }
}
