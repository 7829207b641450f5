use memory_core::ebbinghaus::{
    CHOICES, ChoiceId, ChoiceMark, Indicator, ROUNDS, Reaction, StepKind, StepperSnapshot,
    Verdict,
};
use memory_core::games::curves::{PlotFrame, forgetting_curve, svg_points};

/// Where each round sits on the plot's time axis.
const ROUND_TIMES: [f64; 4] = [0.05, 0.15, 0.45, 0.95];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepIndicatorVm {
    pub index: usize,
    pub label: &'static str,
    pub class: &'static str,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundVm {
    pub heading: String,
    pub clock_label: &'static str,
    pub guess: u8,
    pub guess_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealVm {
    pub answer_label: String,
    pub explanation: &'static str,
    pub memory_opacity: String,
    pub reaction_class: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotMarkerVm {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotVm {
    pub generation: u32,
    pub width: f64,
    pub height: f64,
    pub axes: String,
    pub curve: String,
    pub markers: Vec<PlotMarkerVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub id: ChoiceId,
    pub label: &'static str,
    pub class: &'static str,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarsVm {
    pub single_session_width: String,
    pub spaced_reviews_width: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareVm {
    pub choices: Vec<ChoiceVm>,
    pub feedback: Option<&'static str>,
    pub feedback_class: &'static str,
    pub bars: Option<BarsVm>,
}

/// Everything the exercise view renders.
#[derive(Clone, Debug, PartialEq)]
pub struct EbbinghausVm {
    pub view: StepKind,
    pub steps: Vec<StepIndicatorVm>,
    pub round: Option<RoundVm>,
    pub feedback: Option<&'static str>,
    pub reveal: Option<RevealVm>,
    pub plot: PlotVm,
    pub compare: CompareVm,
    pub next_label: &'static str,
    pub previous_disabled: bool,
}

#[must_use]
pub fn map_ebbinghaus(snapshot: &StepperSnapshot) -> EbbinghausVm {
    let steps = snapshot
        .indicators
        .iter()
        .enumerate()
        .map(|(index, (step, indicator))| StepIndicatorVm {
            index,
            label: step.label,
            class: indicator_class(*indicator),
            current: *indicator == Indicator::Active,
        })
        .collect();

    let round = snapshot
        .round
        .zip(snapshot.round_number)
        .map(|(round, number)| RoundVm {
            heading: format!("Round {number} of {}: {}", ROUNDS.len(), round.title),
            clock_label: round.clock_label,
            guess: snapshot.guess,
            guess_label: format!("{}%", snapshot.guess),
        });

    let reveal = snapshot.reveal.map(|reveal| RevealVm {
        answer_label: format!("{}% forgotten", reveal.forgotten_percent),
        explanation: reveal.explanation,
        memory_opacity: format!("{:.2}", f64::from(reveal.memory_opacity_percent()) / 100.0),
        reaction_class: match reveal.reaction {
            Reaction::TooLow => "eb-reaction eb-reaction--low",
            Reaction::TooHigh => "eb-reaction eb-reaction--high",
            Reaction::Close => "eb-reaction eb-reaction--close",
        },
    });

    EbbinghausVm {
        view: snapshot.visible_view(),
        steps,
        round,
        feedback: snapshot.feedback.message(),
        reveal,
        plot: map_plot(snapshot.plot_generation, &PlotFrame::DEFAULT),
        compare: map_compare(snapshot),
        next_label: snapshot.next_label,
        previous_disabled: snapshot.previous_disabled,
    }
}

fn indicator_class(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Completed => "eb-step eb-step--completed",
        Indicator::Active => "eb-step eb-step--active",
        Indicator::Upcoming => "eb-step eb-step--upcoming",
    }
}

fn map_plot(generation: u32, frame: &PlotFrame) -> PlotVm {
    let markers = ROUNDS
        .iter()
        .zip(ROUND_TIMES)
        .map(|(round, time)| {
            let retained = 1.0 - f64::from(round.forgotten_percent) / 100.0;
            let point = frame.project(time, retained);
            PlotMarkerVm {
                x: point.x,
                y: point.y,
                label: round.clock_label.to_owned(),
            }
        })
        .collect();

    PlotVm {
        generation,
        width: frame.width,
        height: frame.height,
        axes: svg_points(&frame.axes()),
        curve: svg_points(&forgetting_curve(frame)),
        markers,
    }
}

fn map_compare(snapshot: &StepperSnapshot) -> CompareVm {
    let choices = CHOICES
        .iter()
        .map(|choice| {
            let mark = snapshot
                .choice_marks
                .iter()
                .find(|(id, _)| *id == choice.id)
                .map_or(ChoiceMark::Unselected, |(_, mark)| *mark);
            ChoiceVm {
                id: choice.id,
                label: choice.label,
                class: match mark {
                    ChoiceMark::Unselected => "eb-choice",
                    ChoiceMark::SelectedCorrect => "eb-choice eb-choice--selected eb-choice--correct",
                    ChoiceMark::SelectedIncorrect => {
                        "eb-choice eb-choice--selected eb-choice--incorrect"
                    }
                },
                selected: mark != ChoiceMark::Unselected,
            }
        })
        .collect();

    let verdict = snapshot.comparison.verdict;
    CompareVm {
        choices,
        feedback: verdict.map(Verdict::message),
        feedback_class: match verdict {
            Some(Verdict::Correct) => "eb-compare-feedback eb-compare-feedback--correct",
            Some(Verdict::Incorrect) => "eb-compare-feedback eb-compare-feedback--incorrect",
            None => "eb-compare-feedback",
        },
        bars: snapshot.comparison.bars.map(|bars| BarsVm {
            single_session_width: format!("{}%", bars.single_session),
            spaced_reviews_width: format!("{}%", bars.spaced_reviews),
        }),
    }
}
