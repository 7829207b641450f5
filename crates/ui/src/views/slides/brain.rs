use dioxus::prelude::*;
use memory_core::games::counter::{COUNTER_TICK, NeuronCounter};
use memory_core::games::synapse::SynapseDemo;
use memory_core::games::writing::{WRITING_FRAME, WritingAnimation, WritingFrame, jitter_line};
use memory_core::model::Activation;

use crate::context::AppContext;
use crate::timers::use_timer_slot;
use crate::vm::path_data;
use crate::views::{DeckIntent, DeckState, use_activation, use_deck_dispatcher};

const WRITING_WIDTH: f64 = 600.0;
const WRITING_HEIGHT: f64 = 200.0;

#[component]
pub fn WelcomeSlide() -> Element {
    let ctx = use_context::<AppContext>();
    let dispatch = use_deck_dispatcher(use_context::<DeckState>());
    let mut counter = use_signal(NeuronCounter::new);
    let mut timer = use_timer_slot();
    let tick = ctx.scaled(COUNTER_TICK);

    use_activation(Activation::RestartCounter, move || {
        counter.write().restart();
        timer.restart(async move {
            loop {
                tokio::time::sleep(tick).await;
                if !counter.write().tick() {
                    break;
                }
            }
        });
    });

    let value = counter.read().display();
    let label = counter.read().label();

    rsx! {
        div { class: "welcome",
            p { class: "lead", "Your brain has about" }
            p { id: "neuron-counter", class: "neuron-counter", "{value}" }
            button {
                id: "neuron-reveal",
                class: "neuron-reveal",
                onclick: move |_| counter.write().reveal(),
                "{label}"
            }
            p { class: "lead", "Every one of them can change when you learn." }
            button {
                id: "start",
                class: "btn btn-primary",
                onclick: move |_| dispatch.call(DeckIntent::GoTo(1)),
                "Start"
            }
        }
    }
}

fn neuron_class(active: bool) -> &'static str {
    if active { "neuron neuron--active" } else { "neuron" }
}

#[component]
pub fn SynapseSlide() -> Element {
    let mut demo = use_signal(SynapseDemo::new);
    let snapshot = *demo.read();

    rsx! {
        p { class: "lead", "Neurons that fire together wire together. Activate both." }
        div { id: "neuron-demo", class: "neuron-demo",
            for neuron in 0..2 {
                button {
                    key: "{neuron}",
                    class: neuron_class(snapshot.is_active(neuron)),
                    "aria-pressed": "{snapshot.is_active(neuron)}",
                    onclick: move |_| demo.write().toggle(neuron),
                    "Neuron {neuron + 1}"
                }
            }
            div {
                id: "synapse",
                class: if snapshot.synapse_strong() { "synapse synapse--strong" } else { "synapse" },
            }
        }
        div {
            id: "path-line",
            class: if snapshot.path_strong() { "path-line path-line--strong" } else { "path-line" },
        }
        button {
            id: "strengthen",
            class: "btn",
            onclick: move |_| demo.write().strengthen(),
            "Fire together"
        }
    }
}

#[component]
pub fn WritingSlide() -> Element {
    let ctx = use_context::<AppContext>();
    let mut frame = use_signal(|| WritingFrame::RESET);
    let mut timer = use_timer_slot();
    let frame_delay = ctx.scaled(WRITING_FRAME);

    let line = path_data(&jitter_line(
        frame(),
        WRITING_WIDTH,
        WRITING_HEIGHT,
        &mut rand::rng(),
    ));

    rsx! {
        p { class: "lead", "Your first attempt is shaky. Practice smooths the path." }
        svg {
            id: "writing-canvas",
            class: "writing-canvas",
            view_box: "0 0 {WRITING_WIDTH} {WRITING_HEIGHT}",
            if let Some(line) = line {
                path { class: "writing-line", d: "{line}", fill: "none" }
            }
        }
        div { class: "controls",
            button {
                id: "writing-play",
                class: "btn btn-primary",
                onclick: move |_| {
                    timer.restart(async move {
                        let mut animation = WritingAnimation::new();
                        while let Some(next) = animation.next_frame() {
                            frame.set(next);
                            tokio::time::sleep(frame_delay).await;
                        }
                    });
                },
                "Practise"
            }
            button {
                id: "writing-reset",
                class: "btn",
                onclick: move |_| {
                    timer.dispose();
                    frame.set(WritingFrame::RESET);
                },
                "Reset"
            }
        }
    }
}
