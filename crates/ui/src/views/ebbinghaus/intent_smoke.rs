use dioxus::prelude::ReadableExt;
use memory_core::ebbinghaus::{ChoiceId, Feedback, PICK_A_NUMBER, Reaction};

use crate::views::test_harness::setup_deck_harness;

use super::EbbinghausIntent;

#[tokio::test(flavor = "current_thread")]
async fn ebbinghaus_intents_smoke_guess_reveal_and_compare() {
    let mut harness = setup_deck_harness(Some(9));
    harness.rebuild();
    let dispatch = harness.ebbinghaus.dispatch();
    let stepper = harness.ebbinghaus.stepper();
    let send = |harness: &mut super::super::test_harness::DeckHarness, intent: EbbinghausIntent| {
        harness.dom.in_runtime(|| dispatch.call(intent));
        harness.drive();
    };

    let html = harness.render();
    assert!(html.contains("Round 1 of 4: Twenty minutes later"), "missing heading in {html}");
    assert!(html.contains("eb-view--round"));
    assert!(!html.contains("eb-view--plot"));
    assert!(html.contains("50%"));

    send(&mut harness, EbbinghausIntent::SetGuess(150));
    assert_eq!(harness.dom.in_runtime(|| stepper.read().snapshot().guess), 100);
    assert!(harness.render().contains("100%"));

    send(&mut harness, EbbinghausIntent::SetGuessText("abc".to_string()));
    send(&mut harness, EbbinghausIntent::Reveal);
    let snapshot = harness.dom.in_runtime(|| stepper.read().snapshot());
    assert_eq!(snapshot.guess, 100);
    assert_eq!(snapshot.feedback, Feedback::PickANumber);
    assert!(snapshot.reveal.is_none());
    assert!(harness.render().contains(PICK_A_NUMBER));

    send(&mut harness, EbbinghausIntent::SetGuessText("40".to_string()));
    send(&mut harness, EbbinghausIntent::Reveal);
    let snapshot = harness.dom.in_runtime(|| stepper.read().snapshot());
    assert_eq!(snapshot.guess, 40);
    assert_eq!(snapshot.feedback, Feedback::Reaction(Reaction::Close));
    let html = harness.render();
    assert!(html.contains("42% forgotten"), "missing answer in {html}");
    assert!(html.contains("eb-reaction--close"));

    send(&mut harness, EbbinghausIntent::Next);
    let html = harness.render();
    assert!(html.contains("Round 2 of 4: One hour later"), "missing heading in {html}");
    assert!(!html.contains("eb-reveal-panel"));
    assert_eq!(harness.dom.in_runtime(|| stepper.read().snapshot().guess), 50);

    send(&mut harness, EbbinghausIntent::Reveal);
    let snapshot = harness.dom.in_runtime(|| stepper.read().snapshot());
    assert_eq!(snapshot.feedback, Feedback::Reaction(Reaction::Close));

    send(&mut harness, EbbinghausIntent::Jump(4));
    let html = harness.render();
    assert!(html.contains("eb-view--plot"));
    assert!(!html.contains("eb-view--round"));
    assert_eq!(harness.dom.in_runtime(|| stepper.read().plot_generation()), 1);

    send(&mut harness, EbbinghausIntent::Next);
    send(&mut harness, EbbinghausIntent::Choose(ChoiceId::A));
    let html = harness.render();
    assert!(html.contains("eb-compare-feedback--incorrect"), "missing verdict in {html}");
    assert!(html.contains("width: 28%;"));
    assert!(html.contains("width: 82%;"));

    send(&mut harness, EbbinghausIntent::Choose(ChoiceId::B));
    assert!(harness.render().contains("eb-compare-feedback--correct"));

    send(&mut harness, EbbinghausIntent::Next);
    let html = harness.render();
    assert!(html.contains("eb-view--takeaway"));
    assert!(html.contains("Restart"));

    send(&mut harness, EbbinghausIntent::Next);
    let html = harness.render();
    assert!(html.contains("Round 1 of 4: Twenty minutes later"));
    assert_eq!(harness.dom.in_runtime(|| stepper.read().index()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn ebbinghaus_previous_is_floored_and_choice_ignored_outside_compare() {
    let mut harness = setup_deck_harness(None);
    harness.rebuild();
    let dispatch = harness.ebbinghaus.dispatch();
    let stepper = harness.ebbinghaus.stepper();

    harness
        .dom
        .in_runtime(|| dispatch.call(EbbinghausIntent::Previous));
    harness
        .dom
        .in_runtime(|| dispatch.call(EbbinghausIntent::Choose(ChoiceId::B)));
    harness.drive();

    let snapshot = harness.dom.in_runtime(|| stepper.read().snapshot());
    assert_eq!(snapshot.index, 0);
    assert_eq!(snapshot.comparison.selected, None);
}

#[tokio::test(flavor = "current_thread")]
async fn ebbinghaus_renders_exactly_one_view_per_step() {
    let mut harness = setup_deck_harness(Some(9));
    harness.rebuild();
    let dispatch = harness.ebbinghaus.dispatch();

    let expected = [
        "eb-view--round",
        "eb-view--round",
        "eb-view--round",
        "eb-view--round",
        "eb-view--plot",
        "eb-view--compare",
        "eb-view--takeaway",
    ];
    for (index, modifier) in expected.iter().enumerate() {
        harness
            .dom
            .in_runtime(|| dispatch.call(EbbinghausIntent::Jump(index)));
        harness.drive();
        let html = harness.render();
        assert_eq!(
            html.matches("eb-view eb-view--").count(),
            1,
            "step {index} rendered {html}"
        );
        assert!(html.contains(modifier), "step {index} missing {modifier}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn ebbinghaus_number_field_redraws_when_its_text_is_clamped() {
    let mut harness = setup_deck_harness(Some(9));
    harness.rebuild();
    let dispatch = harness.ebbinghaus.dispatch();
    let state = harness.ebbinghaus.state();
    let send = |harness: &mut super::super::test_harness::DeckHarness, intent: EbbinghausIntent| {
        harness.dom.in_runtime(|| dispatch.call(intent));
        harness.drive();
    };

    send(&mut harness, EbbinghausIntent::SetGuessText("100".to_string()));
    assert_eq!(harness.dom.in_runtime(|| (state.field_resets)()), 0);

    send(&mut harness, EbbinghausIntent::SetGuessText("150".to_string()));
    let (guess, resets, field_text) = harness.dom.in_runtime(|| {
        (
            state.stepper.read().snapshot().guess,
            (state.field_resets)(),
            state.field_text.read().clone(),
        )
    });
    assert_eq!(guess, 100);
    assert_eq!(resets, 1);
    assert_eq!(field_text, None);
    let html = harness.render();
    assert_eq!(html.matches("value=\"100\"").count(), 2, "widgets disagree in {html}");

    send(&mut harness, EbbinghausIntent::SetGuessText("lots".to_string()));
    let (resets, field_text) = harness
        .dom
        .in_runtime(|| ((state.field_resets)(), state.field_text.read().clone()));
    assert_eq!(resets, 1);
    assert_eq!(field_text.as_deref(), Some("lots"));
    send(&mut harness, EbbinghausIntent::Reveal);
    assert!(harness.render().contains(PICK_A_NUMBER));
}
