use std::time::Duration;

use dioxus::prelude::*;
use memory_core::games::curves::{PlotFrame, review_dots, spaced_curve, svg_points};
use memory_core::games::fade::{FADE_INTERVAL, FadeGame};
use memory_core::games::matchup::{CardState, Contender, Matchup, REVEAL_TEXT};
use memory_core::model::Activation;
use memory_core::timer::Tick;

use crate::context::AppContext;
use crate::timers::use_timer_slot;
use crate::vm::opacity_style;
use crate::views::use_activation;

use super::PlotSvg;

fn contender_class(card: CardState) -> String {
    let mut class = String::from("contender");
    if card.picked {
        class.push_str(" contender--picked");
    }
    if card.winner {
        class.push_str(" contender--winner");
    }
    if card.loser {
        class.push_str(" contender--loser");
    }
    class
}

#[component]
pub fn HippocampusSlide() -> Element {
    let mut matchup = use_signal(Matchup::new);
    use_activation(Activation::ResetMatchup, move || matchup.write().reset());
    let state = *matchup.read();

    rsx! {
        p { class: "lead", "Whose hippocampus is the biggest?" }
        div {
            id: "hippocampus-matchup",
            class: if state.is_revealed() { "matchup matchup--revealed" } else { "matchup" },
            for contender in Contender::ALL {
                button {
                    key: "{contender.label()}",
                    class: contender_class(state.card(contender)),
                    disabled: state.card(contender).disabled,
                    onclick: move |_| {
                        matchup.write().vote(contender);
                    },
                    span { class: "contender__emoji", "{contender.emoji()}" }
                    span { class: "contender__label", "{contender.label()}" }
                }
            }
        }
        p { id: "hippocampus-feedback", class: "feedback", "{state.feedback()}" }
        if state.is_revealed() {
            p { id: "hippocampus-reveal", class: "reveal", "{REVEAL_TEXT}" }
        }
    }
}

#[component]
pub fn SpacedSlide() -> Element {
    let mut redraws = use_signal(|| 0_u64);
    use_activation(Activation::RedrawSpacedCurve, move || {
        redraws.with_mut(|count| *count = count.wrapping_add(1));
    });

    let frame = PlotFrame::DEFAULT;
    let axes = svg_points(&frame.axes());
    let curve = svg_points(&spaced_curve(&frame));
    let dots: Vec<(String, String)> = review_dots(&frame)
        .into_iter()
        .map(|dot| (format!("{:.1}", dot.x), format!("{:.1}", dot.y)))
        .collect();

    rsx! {
        p { class: "lead", "Each review lifts the curve, and it falls more slowly afterwards." }
        PlotSvg { width: frame.width, height: frame.height, axes,
            for generation in std::iter::once(redraws()) {
                g { key: "{generation}", class: "plot-draw",
                    polyline { class: "plot-curve plot-curve--spaced", points: "{curve}", fill: "none" }
                    for (index, (cx, cy)) in dots.iter().enumerate() {
                        circle { key: "{index}", class: "plot-dot", cx: "{cx}", cy: "{cy}", r: "6" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FadeSlide() -> Element {
    let ctx = use_context::<AppContext>();
    let mut game = use_signal(FadeGame::new);
    let mut clock = use_timer_slot();
    let mut fader = use_timer_slot();
    let second = ctx.scaled(Duration::from_secs(1));
    let fade_every = ctx.scaled(FADE_INTERVAL);

    let (items, time_left, feedback) = {
        let game = game.read();
        (game.items(), game.time_left(), game.feedback())
    };

    rsx! {
        p { class: "lead", "Click a fading item to review it before it disappears." }
        div { class: "fade-header",
            button {
                id: "fade-start",
                class: "btn btn-primary",
                onclick: move |_| {
                    game.write().start();
                    clock.restart(async move {
                        loop {
                            tokio::time::sleep(second).await;
                            if !matches!(game.write().tick_second(), Tick::Running { .. }) {
                                break;
                            }
                        }
                    });
                    fader.restart(async move {
                        loop {
                            tokio::time::sleep(fade_every).await;
                            if !game.peek().is_running() {
                                break;
                            }
                            game.write().fade();
                        }
                    });
                },
                "Start"
            }
            span { id: "fade-time", class: "fade-time", "{time_left}s" }
        }
        div { id: "fade-items", class: "fade-items",
            for (index, item) in items.into_iter().enumerate() {
                button {
                    key: "{item.word}",
                    class: "fade-item",
                    style: opacity_style(item.opacity),
                    onclick: move |_| game.write().boost(index),
                    span { class: "fade-item__emoji", "{item.emoji}" }
                    span { class: "fade-item__word", "{item.word}" }
                }
            }
        }
        if let Some(feedback) = feedback {
            p { id: "fade-feedback", class: "feedback", "{feedback}" }
        }
    }
}
