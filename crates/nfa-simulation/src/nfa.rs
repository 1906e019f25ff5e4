//! A running epsilon-NFA.

use crate::rulebook::Rulebook;
use crate::state::StateSet;
use crate::symbol::{SymbolId, symbols};

/// Execution state of an epsilon-NFA over one input.
///
/// The current state set is kept epsilon-closed: it is closed when the
/// runtime is created and again after every symbol read.
#[derive(Debug, Clone)]
pub struct Nfa<'a> {
    states: StateSet,
    accept_states: &'a StateSet,
    rulebook: &'a Rulebook,
}

impl<'a> Nfa<'a> {
    /// Create a runtime positioned at the closure of `states`.
    pub fn new(states: StateSet, accept_states: &'a StateSet, rulebook: &'a Rulebook) -> Self {
        Self {
            states: rulebook.epsilon_closure(&states),
            accept_states,
            rulebook,
        }
    }

    /// The current, epsilon-closed, state set.
    pub fn current_states(&self) -> &StateSet {
        &self.states
    }

    pub fn accepting(&self) -> bool {
        self.states.intersects(self.accept_states)
    }

    /// No states left; nothing read from here on can be accepted.
    pub fn is_stuck(&self) -> bool {
        self.states.is_empty()
    }

    pub fn read_character(&mut self, symbol: impl Into<SymbolId>) {
        let reached = self.rulebook.next_states(&self.states, symbol.into());
        self.states = self.rulebook.epsilon_closure(&reached);
    }

    /// Read every symbol in order. Keeps reading after the runtime is stuck.
    pub fn read_string<I>(&mut self, input: I)
    where
        I: IntoIterator,
        I::Item: Into<SymbolId>,
    {
        for symbol in input {
            self.read_character(symbol);
        }
    }

    pub fn read_str(&mut self, input: &str) {
        self.read_string(symbols(input));
    }
}
