use dioxus::prelude::*;
use memory_core::games::quiz::{
    ActivePassiveQuiz, FLASH_DURATION, HabitState, STUDY_HABITS, StudyHabit, StudyMode,
};
use memory_core::games::swim::{OptionMark, SWIM_OPTIONS, SwimQuestion};

use crate::context::AppContext;
use crate::timers::use_timer_slot;

fn swim_option_class(mark: OptionMark) -> &'static str {
    match mark {
        OptionMark::Unselected => "swim-option",
        OptionMark::Correct => "swim-option swim-option--correct",
        OptionMark::Wrong => "swim-option swim-option--wrong",
    }
}

#[component]
pub fn SwimSlide() -> Element {
    let mut question = use_signal(SwimQuestion::new);
    let state = *question.read();

    rsx! {
        p { class: "lead", "How do you learn to swim?" }
        div { id: "swim-options", class: "swim-options",
            for (index, option) in SWIM_OPTIONS.iter().enumerate() {
                button {
                    key: "{index}",
                    class: swim_option_class(state.mark(index)),
                    onclick: move |_| {
                        question.write().select(index);
                    },
                    "{option.label}"
                }
            }
        }
        if let Some(feedback) = state.feedback() {
            p { id: "swim-feedback", class: "feedback", "{feedback}" }
        }
        if state.shows_learning() {
            div { id: "swim-learning", class: "reveal",
                "Your brain builds skills by doing. Studying works the same way: practise recalling, not just reading."
            }
        }
    }
}

fn habit_class(state: HabitState, flashing: bool) -> &'static str {
    match (state, flashing) {
        (HabitState::Open, _) => "habit",
        (HabitState::Correct, true) => "habit habit--correct habit--flash",
        (HabitState::Correct, false) => "habit habit--correct",
        (HabitState::Wrong, true) => "habit habit--wrong habit--flash",
        (HabitState::Wrong, false) => "habit habit--wrong",
    }
}

#[component]
fn HabitRow(index: usize, habit: StudyHabit, quiz: Signal<ActivePassiveQuiz>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut quiz = quiz;
    let mut flash = use_timer_slot();
    let flash_for = ctx.scaled(FLASH_DURATION);
    let (state, flashing) = {
        let quiz = quiz.read();
        (quiz.state(index), quiz.is_flashing(index))
    };
    let answered = state != HabitState::Open;

    let mut answer = move |choice: StudyMode| {
        if quiz.write().answer(index, choice).is_none() {
            return;
        }
        flash.restart(async move {
            tokio::time::sleep(flash_for).await;
            quiz.write().clear_flash(index);
        });
    };

    rsx! {
        li { class: habit_class(state, flashing),
            span { class: "habit__prompt", "{habit.prompt}" }
            div { class: "habit__choices",
                for mode in [StudyMode::Active, StudyMode::Passive] {
                    button {
                        key: "{mode.label()}",
                        class: "btn btn-small",
                        disabled: answered,
                        onclick: move |_| answer(mode),
                        "{mode.label()}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn QuizSlide() -> Element {
    let quiz = use_signal(ActivePassiveQuiz::new);
    let feedback = quiz.read().feedback();

    rsx! {
        p { class: "lead", "Active or passive? Sort each study habit." }
        ul { id: "habit-quiz", class: "habit-quiz",
            for (index, habit) in STUDY_HABITS.into_iter().enumerate() {
                HabitRow { key: "{index}", index, habit, quiz }
            }
        }
        if let Some(feedback) = feedback {
            p { id: "habit-feedback", class: "feedback", "{feedback}" }
        }
    }
}

#[component]
pub fn ClosingSlide() -> Element {
    rsx! {
        div { class: "closing",
            ul { class: "takeaways",
                li { "Your brain changes every time you learn." }
                li { "Working memory is small; chunks make it go further." }
                li { "Forgetting is normal. Reviews at growing gaps slow it down." }
                li { "Doing beats re-reading: test yourself, explain, practise." }
            }
            p { class: "lead", "Use it or lose it. Keep it alive!" }
        }
    }
}
