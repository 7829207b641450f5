use dioxus::prelude::ReadableExt;
use super::DeckIntent;
use super::test_harness::setup_deck_harness;

#[tokio::test(flavor = "current_thread")]
async fn deck_smoke_renders_first_slide_and_menu() {
    let mut harness = setup_deck_harness(None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1 / 14"), "missing position in {html}");
    assert!(html.contains("86 billion"), "missing title in {html}");
    assert!(html.contains("4.2 • The forgetting curve"), "missing menu label in {html}");
    assert!(html.contains("width: 7.14%;"), "missing progress width in {html}");
    assert_eq!(html.matches("slide slide--active").count(), 1);
    assert!(!html.contains("slide-menu--open"));
}

#[tokio::test(flavor = "current_thread")]
async fn deck_smoke_opens_on_configured_slide() {
    let mut harness = setup_deck_harness(Some(9));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("9 / 14"), "missing position in {html}");
    let current = harness
        .dom
        .in_runtime(|| harness.deck.state().navigator.read().current());
    assert_eq!(current, 8);
}

#[tokio::test(flavor = "current_thread")]
async fn deck_intents_move_clamp_and_reactivate() {
    let mut harness = setup_deck_harness(None);
    harness.rebuild();
    let dispatch = harness.deck.dispatch();
    let state = harness.deck.state();
    let position = |harness: &super::test_harness::DeckHarness| {
        harness.dom.in_runtime(|| state.navigator.read().current())
    };
    let generation = |harness: &super::test_harness::DeckHarness| {
        harness.dom.in_runtime(|| state.activation.read().generation)
    };

    let before = generation(&harness);
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Previous));
    harness.drive();
    assert_eq!(position(&harness), 0);
    assert_eq!(generation(&harness), before + 1);

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::Next));
    harness.drive();
    assert_eq!(position(&harness), 1);
    assert!(harness.render().contains("2 / 14"));

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::GoTo(99)));
    harness.drive();
    assert_eq!(position(&harness), 13);

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::ProgressClick(0.5)));
    harness.drive();
    assert_eq!(position(&harness), 7);

    harness
        .dom
        .in_runtime(|| dispatch.call(DeckIntent::ProgressClick(f64::NAN)));
    harness.drive();
    assert_eq!(position(&harness), 7);
}

#[tokio::test(flavor = "current_thread")]
async fn deck_menu_opens_and_jumps() {
    let mut harness = setup_deck_harness(None);
    harness.rebuild();
    let dispatch = harness.deck.dispatch();

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::OpenMenu));
    harness.drive();
    assert!(harness.render().contains("slide-menu slide-menu--open"));

    harness
        .dom
        .in_runtime(|| dispatch.call(DeckIntent::ChooseMenuItem(12)));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("13 / 14"), "missing position in {html}");
    assert!(!html.contains("slide-menu--open"));

    harness.dom.in_runtime(|| dispatch.call(DeckIntent::OpenMenu));
    harness.dom.in_runtime(|| dispatch.call(DeckIntent::CloseMenu));
    harness.drive();
    assert!(!harness.render().contains("slide-menu--open"));
}

#[tokio::test(flavor = "current_thread")]
async fn slides_smoke_render_idle_games() {
    let mut harness = setup_deck_harness(None);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Ready?"), "missing letter prompt in {html}");
    assert!(html.contains("Press start"), "missing word flash prompt in {html}");
    assert!(html.contains("Click a contender to vote."), "missing matchup prompt in {html}");
    assert!(html.contains("Score: 0 / 8"), "missing chunk score in {html}");
    assert!(html.contains("60s"), "missing fade clock in {html}");
    assert!(html.contains("Re-reading your notes"), "missing quiz row in {html}");
}
