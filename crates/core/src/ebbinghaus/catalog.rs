use serde::Serialize;

/// Which view a step shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKind {
    Round,
    Plot,
    Compare,
    Takeaway,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Step {
    pub kind: StepKind,
    pub label: &'static str,
}

pub const STEPS: [Step; 7] = [
    Step {
        kind: StepKind::Round,
        label: "20 min",
    },
    Step {
        kind: StepKind::Round,
        label: "1 hour",
    },
    Step {
        kind: StepKind::Round,
        label: "1 day",
    },
    Step {
        kind: StepKind::Round,
        label: "6 days",
    },
    Step {
        kind: StepKind::Plot,
        label: "Curve",
    },
    Step {
        kind: StepKind::Compare,
        label: "Compare",
    },
    Step {
        kind: StepKind::Takeaway,
        label: "Takeaway",
    },
];

/// A forgetting fact the audience guesses before the reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Round {
    pub title: &'static str,
    pub clock_label: &'static str,
    /// Share of the learned material forgotten after `clock_label`, 0..=100.
    pub forgotten_percent: u8,
    pub explanation: &'static str,
}

// Ebbinghaus (1885), savings after relearning nonsense syllables.
pub const ROUNDS: [Round; 4] = [
    Round {
        title: "Twenty minutes later",
        clock_label: "20 min",
        forgotten_percent: 42,
        explanation: "Almost half is gone before the coffee break. The steepest drop happens right after learning.",
    },
    Round {
        title: "One hour later",
        clock_label: "1 h",
        forgotten_percent: 56,
        explanation: "After an hour more than half has faded. Nothing was rehearsed, so nothing was protected.",
    },
    Round {
        title: "One day later",
        clock_label: "24 h",
        forgotten_percent: 67,
        explanation: "By tomorrow two thirds are gone. Sleep keeps some of it, but only what was already strong.",
    },
    Round {
        title: "Six days later",
        clock_label: "6 days",
        forgotten_percent: 75,
        explanation: "The curve flattens out: a quarter survives. What is left is hard to lose, but it is not much.",
    },
];

/// Zero-based position among the round steps of the step at `index`, if that
/// step is a round.
#[must_use]
pub fn round_position(index: usize) -> Option<usize> {
    let step = STEPS.get(index)?;
    if step.kind != StepKind::Round {
        return None;
    }
    Some(
        STEPS[..index]
            .iter()
            .filter(|step| step.kind == StepKind::Round)
            .count(),
    )
}

/// Round shown by the step at `index`, if that step is a round.
#[must_use]
pub fn round_for_step(index: usize) -> Option<&'static Round> {
    ROUNDS.get(round_position(index)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_four_rounds_then_plot_compare_takeaway() {
        let kinds: Vec<StepKind> = STEPS.iter().map(|step| step.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Round,
                StepKind::Round,
                StepKind::Round,
                StepKind::Round,
                StepKind::Plot,
                StepKind::Compare,
                StepKind::Takeaway,
            ]
        );
    }

    #[test]
    fn every_round_step_has_round_data() {
        for index in 0..4 {
            assert_eq!(round_for_step(index), Some(&ROUNDS[index]));
        }
        for index in 4..8 {
            assert_eq!(round_for_step(index), None);
        }
    }

    #[test]
    fn round_position_counts_only_round_steps() {
        let positions: Vec<Option<usize>> = (0..STEPS.len()).map(round_position).collect();
        assert_eq!(
            positions,
            vec![Some(0), Some(1), Some(2), Some(3), None, None, None]
        );
        assert_eq!(round_position(42), None);
    }

    #[test]
    fn forgetting_grows_with_time() {
        let percents: Vec<u8> = ROUNDS.iter().map(|round| round.forgotten_percent).collect();
        assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(percents.iter().all(|percent| *percent <= 100));
    }
}
