use dioxus::prelude::*;
use memory_core::ebbinghaus::StepKind;

use crate::vm::{CompareVm, PlotVm, RevealVm, RoundVm, StepIndicatorVm, map_ebbinghaus};
use crate::views::slides::PlotSvg;

use super::actions::{EbbinghausIntent, use_ebbinghaus_dispatcher};
use super::state::use_ebbinghaus_state;

/// Keep arrow keys inside the guess widgets instead of turning slides.
fn contain_arrow_keys(evt: &KeyboardEvent) {
    if matches!(evt.data.key(), Key::ArrowLeft | Key::ArrowRight) {
        evt.stop_propagation();
    }
}

#[component]
pub fn EbbinghausView() -> Element {
    let state = use_ebbinghaus_state();
    let dispatch = use_ebbinghaus_dispatcher(state);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<EbbinghausTestHandles>() {
                handles.register(dispatch, state);
            }
        }
    }

    let vm = map_ebbinghaus(&state.stepper.read().snapshot());

    rsx! {
        div { id: "ebbinghaus", class: "ebbinghaus",
            StepIndicators { steps: vm.steps.clone(), on_intent: dispatch }
            match vm.view {
                StepKind::Round => rsx! {
                    if let Some(round) = vm.round.clone() {
                        RoundPanel {
                            round,
                            feedback: vm.feedback,
                            reveal: vm.reveal.clone(),
                            field_resets: (state.field_resets)(),
                            on_intent: dispatch,
                        }
                    }
                },
                StepKind::Plot => rsx! { PlotPanel { plot: vm.plot.clone() } },
                StepKind::Compare => rsx! {
                    ComparePanel { compare: vm.compare.clone(), on_intent: dispatch }
                },
                StepKind::Takeaway => rsx! { TakeawayPanel {} },
            }
            div { class: "eb-nav",
                button {
                    id: "eb-prev",
                    class: "btn",
                    disabled: vm.previous_disabled,
                    onclick: move |_| dispatch.call(EbbinghausIntent::Previous),
                    "Previous"
                }
                button {
                    id: "eb-next",
                    class: "btn btn-primary",
                    onclick: move |_| dispatch.call(EbbinghausIntent::Next),
                    "{vm.next_label}"
                }
            }
        }
    }
}

#[component]
fn StepIndicators(
    steps: Vec<StepIndicatorVm>,
    on_intent: EventHandler<EbbinghausIntent>,
) -> Element {
    rsx! {
        ol { class: "eb-steps",
            for step in steps {
                li { key: "{step.index}",
                    button {
                        class: step.class,
                        "aria-current": "{step.current}",
                        onclick: move |_| on_intent.call(EbbinghausIntent::Jump(step.index)),
                        "{step.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn RoundPanel(
    round: RoundVm,
    feedback: Option<&'static str>,
    reveal: Option<RevealVm>,
    field_resets: u32,
    on_intent: EventHandler<EbbinghausIntent>,
) -> Element {
    rsx! {
        section { class: "eb-view eb-view--round",
            h3 { class: "eb-round-heading", "{round.heading}" }
            p { class: "eb-question",
                "How much of what you learned is forgotten after "
                strong { "{round.clock_label}" }
                "?"
            }
            div { class: "eb-guess",
                input {
                    id: "eb-guess-slider",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    value: "{round.guess}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<i64>() {
                            on_intent.call(EbbinghausIntent::SetGuess(value));
                        }
                    },
                    onkeydown: move |evt| contain_arrow_keys(&evt),
                }
                for reset in std::iter::once(field_resets) {
                    input {
                        key: "{reset}",
                        id: "eb-guess-number",
                        r#type: "number",
                        min: "0",
                        max: "100",
                        value: "{round.guess}",
                        oninput: move |evt| on_intent.call(EbbinghausIntent::SetGuessText(evt.value())),
                        onkeydown: move |evt| {
                            contain_arrow_keys(&evt);
                            if evt.data.key() == Key::Enter {
                                evt.prevent_default();
                                on_intent.call(EbbinghausIntent::Reveal);
                            }
                        },
                    }
                }
                span { id: "eb-guess-label", class: "eb-guess-label", "{round.guess_label}" }
                button {
                    id: "eb-reveal",
                    class: "btn btn-primary",
                    onclick: move |_| on_intent.call(EbbinghausIntent::Reveal),
                    "Reveal"
                }
            }
            if let Some(feedback) = feedback {
                p { id: "eb-feedback", class: "eb-feedback", "{feedback}" }
            }
            if let Some(reveal) = reveal {
                div { id: "eb-reveal-panel", class: reveal.reaction_class,
                    p { class: "eb-answer", "{reveal.answer_label}" }
                    p { class: "eb-explanation", "{reveal.explanation}" }
                    div {
                        class: "eb-memory",
                        style: "opacity: {reveal.memory_opacity};",
                        "🧠"
                    }
                }
            }
        }
    }
}

#[component]
fn PlotPanel(plot: PlotVm) -> Element {
    let markers: Vec<(String, String, String, String, String)> = plot
        .markers
        .iter()
        .map(|marker| {
            (
                format!("{:.1}", marker.x),
                format!("{:.1}", marker.y),
                format!("{:.1}", marker.x + 8.0),
                format!("{:.1}", marker.y - 8.0),
                marker.label.clone(),
            )
        })
        .collect();

    rsx! {
        section { class: "eb-view eb-view--plot",
            PlotSvg { width: plot.width, height: plot.height, axes: plot.axes.clone(),
                // Keyed on the generation so the draw animation replays once per visit.
                for generation in std::iter::once(plot.generation) {
                    g { key: "{generation}", class: "plot-draw",
                        polyline { class: "plot-curve", points: "{plot.curve}", fill: "none" }
                        for (cx, cy, label_x, label_y, label) in markers.iter() {
                            g { key: "{label}", class: "plot-marker",
                                circle { cx: "{cx}", cy: "{cy}", r: "5" }
                                text { x: "{label_x}", y: "{label_y}", "{label}" }
                            }
                        }
                    }
                }
            }
            p { class: "eb-caption",
                "Each dot is one of your rounds. Most forgetting happens early, then the curve flattens."
            }
        }
    }
}

#[component]
fn ComparePanel(compare: CompareVm, on_intent: EventHandler<EbbinghausIntent>) -> Element {
    rsx! {
        section { class: "eb-view eb-view--compare",
            p { class: "eb-question", "Which plan remembers more a week later?" }
            div { class: "eb-choices",
                for choice in compare.choices {
                    button {
                        key: "{choice.id.as_str()}",
                        class: choice.class,
                        "aria-pressed": "{choice.selected}",
                        onclick: move |_| on_intent.call(EbbinghausIntent::Choose(choice.id)),
                        span { class: "eb-choice__id", "{choice.id.as_str()}" }
                        span { class: "eb-choice__label", "{choice.label}" }
                    }
                }
            }
            if let Some(feedback) = compare.feedback {
                p { id: "eb-compare-feedback", class: compare.feedback_class, "{feedback}" }
            }
            if let Some(bars) = compare.bars {
                div { class: "eb-bars",
                    div { class: "eb-bar",
                        span { class: "eb-bar__label", "One long session" }
                        div { class: "eb-bar__fill", style: "width: {bars.single_session_width};" }
                        span { class: "eb-bar__value", "{bars.single_session_width}" }
                    }
                    div { class: "eb-bar eb-bar--spaced",
                        span { class: "eb-bar__label", "Spaced reviews" }
                        div { class: "eb-bar__fill", style: "width: {bars.spaced_reviews_width};" }
                        span { class: "eb-bar__value", "{bars.spaced_reviews_width}" }
                    }
                }
            }
        }
    }
}

#[component]
fn TakeawayPanel() -> Element {
    rsx! {
        section { class: "eb-view eb-view--takeaway",
            h3 { "Review before you forget" }
            ul {
                li { "Review the same day, then the next day, then a few days later." }
                li { "Short, spaced sessions beat one long cram." }
                li { "Every review makes the next drop slower." }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct EbbinghausTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<EbbinghausIntent>>>>,
    state: std::rc::Rc<std::cell::RefCell<Option<super::state::EbbinghausState>>>,
}

#[cfg(test)]
impl EbbinghausTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<EbbinghausIntent>,
        state: super::state::EbbinghausState,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.state.borrow_mut() = Some(state);
    }

    pub(crate) fn dispatch(&self) -> Callback<EbbinghausIntent> {
        (*self.dispatch.borrow()).expect("ebbinghaus dispatch registered")
    }

    pub(crate) fn state(&self) -> super::state::EbbinghausState {
        (*self.state.borrow()).expect("ebbinghaus state registered")
    }

    pub(crate) fn stepper(&self) -> Signal<memory_core::ebbinghaus::Stepper> {
        self.state().stepper
    }
}
