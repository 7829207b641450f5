use std::time::Duration;

use dioxus::prelude::*;
use memory_core::games::chunks::ChunkBuilder;
use memory_core::games::letters::{LetterDisplay, LetterRing, LetterTest, RING_LINGER};
use memory_core::games::magic::MagicNumberQuiz;
use memory_core::games::recall::{FLASH_INTERVAL, WordFlash};
use memory_core::timer::Tick;

use crate::context::AppContext;
use crate::timers::{TimerSlot, use_timer_slot};
use crate::vm::ring_background;

fn letter_display_class(display: &LetterDisplay) -> String {
    let mut class = String::from("letter-display");
    if display.active {
        class.push_str(" letter-display--active");
    }
    if display.random {
        class.push_str(" letter-display--random");
    }
    if display.times_up {
        class.push_str(" letter-display--times-up");
    }
    class
}

fn letter_ring_class(ring: LetterRing) -> &'static str {
    match (ring.active, ring.pulse) {
        (true, true) => "letter-ring letter-ring--active letter-ring--pulse",
        (true, false) => "letter-ring letter-ring--active",
        _ => "letter-ring",
    }
}

/// Tick the letter clock once a second, then let the ring linger.
fn run_letter_clock(
    mut timer: TimerSlot,
    mut test: Signal<LetterTest>,
    second: Duration,
    linger: Duration,
) {
    timer.restart(async move {
        loop {
            tokio::time::sleep(second).await;
            match test.write().tick() {
                Tick::Running { .. } => {}
                Tick::Finished => break,
                Tick::Idle => return,
            }
        }
        tokio::time::sleep(linger).await;
        test.write().settle_ring();
    });
}

#[component]
pub fn LetterSlide() -> Element {
    let ctx = use_context::<AppContext>();
    let mut test = use_signal(LetterTest::new);
    let mut timer = use_timer_slot();
    let second = ctx.scaled(Duration::from_secs(1));
    let linger = ctx.scaled(RING_LINGER);

    let display = test.read().display();
    let ring = test.read().ring();

    rsx! {
        p { class: "lead", "Look at the letters for a few seconds. How many can you keep?" }
        div { class: "letter-stage",
            div { id: "letter-display", class: letter_display_class(&display), "{display.text}" }
            div {
                id: "letter-timer",
                class: letter_ring_class(ring),
                style: ring_background(ring.degrees),
                span { id: "letter-timer-value", "{ring.seconds}" }
            }
        }
        div { class: "controls",
            button {
                id: "letters-random",
                class: "btn btn-primary",
                onclick: move |_| {
                    test.write().start_random(&mut rand::rng());
                    run_letter_clock(timer, test, second, linger);
                },
                "Random letters"
            }
            button {
                id: "letters-sentence",
                class: "btn",
                onclick: move |_| {
                    test.write().start_sentence();
                    run_letter_clock(timer, test, second, linger);
                },
                "Sentence"
            }
            button {
                id: "letters-review",
                class: "btn",
                onclick: move |_| {
                    test.write().review();
                    if !test.read().is_counting() {
                        timer.dispose();
                    }
                },
                "Review"
            }
            button {
                id: "letters-reset",
                class: "btn",
                onclick: move |_| {
                    timer.dispose();
                    test.write().reset();
                },
                "Reset"
            }
        }
    }
}

#[component]
pub fn MagicNumberSlide() -> Element {
    let mut quiz = use_signal(MagicNumberQuiz::new);
    let mut answer = use_signal(String::new);
    let state = *quiz.read();
    let feedback = state.feedback().map(|feedback| feedback.message());

    rsx! {
        p { class: "lead", "How many items can your working memory hold at once?" }
        div { class: "magic-form",
            input {
                id: "magic-input",
                r#type: "text",
                value: "{answer}",
                oninput: move |evt| answer.set(evt.value()),
                onkeydown: move |evt| {
                    if evt.data.key() == Key::Enter {
                        quiz.write().check(&answer.read());
                    }
                },
            }
            button {
                id: "magic-check",
                class: "btn btn-primary",
                onclick: move |_| {
                    quiz.write().check(&answer.read());
                },
                "Check"
            }
        }
        if let Some(feedback) = feedback {
            p { id: "magic-feedback", class: "feedback", "{feedback}" }
        }
        div {
            id: "magic-brain",
            class: if state.is_celebrating() { "brain brain--celebrate" } else { "brain" },
            "🧠"
        }
        if state.is_revealed() {
            p { id: "magic-reveal", class: "reveal",
                "Most people hold about 4 to 7 items at once. Chunking helps you fit more."
            }
        }
    }
}

fn verb_class(used: bool, held: bool) -> &'static str {
    match (used, held) {
        (true, _) => "chunk-verb chunk-verb--used",
        (false, true) => "chunk-verb chunk-verb--held",
        (false, false) => "chunk-verb",
    }
}

#[component]
pub fn ChunkSlide() -> Element {
    let mut game = use_signal(|| ChunkBuilder::new(&mut rand::rng()));
    let mut held = use_signal(|| None::<&'static str>);

    let (verbs, targets, score, feedback) = {
        let game = game.read();
        (
            game.verbs().to_vec(),
            game.targets().to_vec(),
            game.score(),
            game.feedback(),
        )
    };
    let total = targets.len();
    let used: Vec<&'static str> = targets.iter().filter_map(|target| target.matched_verb).collect();

    let mut drop_on = move |index: usize| {
        let verb = held.write().take();
        if let Some(verb) = verb {
            game.write().drop_verb(verb, index);
        }
    };

    rsx! {
        p { class: "lead", "Drag each verb onto the words it goes with." }
        div { class: "chunk-board",
            div { id: "chunk-verbs", class: "chunk-verbs",
                for verb in verbs {
                    div {
                        key: "{verb}",
                        class: verb_class(used.contains(&verb), held() == Some(verb)),
                        draggable: "{!used.contains(&verb)}",
                        ondragstart: move |_| held.set(Some(verb)),
                        onclick: move |_| held.set(Some(verb)),
                        "{verb}"
                    }
                }
            }
            div { id: "chunk-targets", class: "chunk-targets",
                for (index, target) in targets.into_iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if target.matched_verb.is_some() {
                            "chunk-target chunk-target--matched"
                        } else {
                            "chunk-target"
                        },
                        ondragover: move |evt| evt.prevent_default(),
                        ondrop: move |evt| {
                            evt.prevent_default();
                            drop_on(index);
                        },
                        onclick: move |_| drop_on(index),
                        "{target.label()}"
                    }
                }
            }
        }
        p { id: "chunk-score", class: "score", "Score: {score} / {total}" }
        if let Some(feedback) = feedback {
            p { id: "chunk-feedback", class: "feedback", "{feedback}" }
        }
    }
}

#[component]
pub fn WordFlashSlide() -> Element {
    let ctx = use_context::<AppContext>();
    let mut flash = use_signal(WordFlash::new);
    let mut typed = use_signal(String::new);
    let mut timer = use_timer_slot();
    let interval = ctx.scaled(FLASH_INTERVAL);

    let (word, flashing, feedback) = {
        let flash = flash.read();
        (
            flash.display(),
            flash.is_flashing(),
            flash.feedback().map(str::to_owned),
        )
    };

    rsx! {
        p { class: "lead", "Watch the words one by one, then write down all you remember." }
        div {
            id: "word-flash",
            class: if flashing { "word-flash word-flash--active" } else { "word-flash" },
            "{word}"
        }
        button {
            id: "word-flash-start",
            class: "btn btn-primary",
            onclick: move |_| {
                typed.set(String::new());
                flash.write().start();
                timer.restart(async move {
                    loop {
                        tokio::time::sleep(interval).await;
                        if !flash.write().tick() {
                            break;
                        }
                    }
                });
            },
            "Start"
        }
        textarea {
            id: "word-recall",
            class: "recall-input",
            placeholder: "apple, river, ...",
            value: "{typed}",
            oninput: move |evt| typed.set(evt.value()),
        }
        button {
            id: "word-recall-check",
            class: "btn",
            onclick: move |_| {
                flash.write().check(&typed.read());
            },
            "Check"
        }
        if let Some(feedback) = feedback {
            p { id: "word-recall-feedback", class: "feedback", "{feedback}" }
        }
    }
}
