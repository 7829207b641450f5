//! Cancellable timer tasks for the slide games.

use std::future::Future;

use dioxus::core::Task;
use dioxus::prelude::*;

/// Holds at most one running timer task.
///
/// Starting a new task cancels the one already held, so the last request
/// wins. The slot disposes its task when the owning component unmounts.
#[derive(Clone, Copy, PartialEq)]
pub struct TimerSlot {
    task: Signal<Option<Task>>,
}

impl TimerSlot {
    pub fn restart(&mut self, timer: impl Future<Output = ()> + 'static) {
        self.dispose();
        let task = spawn(timer);
        self.task.set(Some(task));
    }

    pub fn dispose(&mut self) {
        if let Ok(mut held) = self.task.try_write() {
            if let Some(task) = held.take() {
                task.cancel();
            }
        }
    }
}

pub fn use_timer_slot() -> TimerSlot {
    let task = use_signal(|| None::<Task>);
    let slot = TimerSlot { task };
    use_drop(move || {
        let mut slot = slot;
        slot.dispose();
    });
    slot
}
