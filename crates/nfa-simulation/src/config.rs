//! Tuning knobs for subset construction.

/// Configuration for subset construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubsetConfig {
    /// Maximum number of DFA states to discover (None = unlimited)
    pub max_states: Option<usize>,

    /// Record the empty state set as an explicit dead state, making the
    /// transition table total. When false, transitions into the empty set
    /// are omitted and a missing transition rejects.
    pub keep_dead_state: bool,
}

impl SubsetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_states(mut self, max: usize) -> Self {
        self.max_states = Some(max);
        self
    }

    pub fn with_dead_state(mut self, keep: bool) -> Self {
        self.keep_dead_state = keep;
        self
    }
}
