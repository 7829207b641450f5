/// Two neurons and the synapse between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SynapseDemo {
    neurons: [bool; 2],
    path_strong: bool,
}

impl SynapseDemo {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one neuron. Out-of-range indices are ignored.
    pub fn toggle(&mut self, neuron: usize) {
        if let Some(active) = self.neurons.get_mut(neuron) {
            *active = !*active;
        }
    }

    /// Fire both neurons together, or rest both if they already fire.
    pub fn strengthen(&mut self) {
        let activate_all = self.neurons.iter().any(|active| !active);
        self.neurons = [activate_all; 2];
        self.path_strong = activate_all;
    }

    #[must_use]
    pub fn is_active(&self, neuron: usize) -> bool {
        self.neurons.get(neuron).copied().unwrap_or(false)
    }

    /// The synapse is strong exactly when both neurons fire.
    #[must_use]
    pub fn synapse_strong(&self) -> bool {
        self.neurons.iter().all(|active| *active)
    }

    #[must_use]
    pub fn path_strong(&self) -> bool {
        self.path_strong
    }
}
