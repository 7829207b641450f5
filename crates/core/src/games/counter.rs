use std::time::Duration;

pub const NEURON_COUNT: u64 = 86_000_000_000;
pub const COUNTER_TICKS: u32 = 120;
pub const COUNTER_TICK: Duration = Duration::from_millis(20);

pub const HIDDEN_LABEL: &str = "???";
pub const REVEALED_LABEL: &str = "neurons";

/// Title-slide counter racing up to the number of neurons in a brain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeuronCounter {
    ticks: u32,
    revealed: bool,
}

impl NeuronCounter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from zero again.
    pub fn restart(&mut self) {
        self.ticks = 0;
    }

    /// Advance one step; returns `false` once the target is reached.
    pub fn tick(&mut self) -> bool {
        if self.ticks < COUNTER_TICKS {
            self.ticks += 1;
        }
        !self.is_finished()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ticks >= COUNTER_TICKS
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        NEURON_COUNT * u64::from(self.ticks) / u64::from(COUNTER_TICKS)
    }

    #[must_use]
    pub fn display(&self) -> String {
        group_thousands(self.value())
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        if self.revealed {
            REVEALED_LABEL
        } else {
            HIDDEN_LABEL
        }
    }
}

/// en-US digit grouping: `86000000000` → `"86,000,000,000"`.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
