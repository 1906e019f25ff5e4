//! Immutable description of an epsilon-NFA and factory for its runtimes.

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::rulebook::Rulebook;
use crate::state::{StateId, StateSet};
use crate::subset_construction::NfaSimulation;
use crate::symbol::{SymbolId, symbols};

/// Start state, accept states and rules of an epsilon-NFA.
#[derive(Debug, Clone)]
pub struct NfaDesign {
    start_state: StateId,
    accept_states: StateSet,
    rulebook: Rulebook,
}

impl NfaDesign {
    pub fn new(
        start_state: StateId,
        accept_states: impl IntoIterator<Item = StateId>,
        rulebook: Rulebook,
    ) -> Self {
        Self {
            start_state,
            accept_states: accept_states.into_iter().collect(),
            rulebook,
        }
    }

    pub fn start_state(&self) -> StateId {
        self.start_state
    }

    pub fn accept_states(&self) -> &StateSet {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    /// A fresh runtime at the closure of the start state.
    pub fn to_nfa(&self) -> Nfa<'_> {
        self.to_nfa_from(StateSet::singleton(self.start_state))
    }

    /// A fresh runtime at the closure of `states`.
    pub fn to_nfa_from(&self, states: StateSet) -> Nfa<'_> {
        Nfa::new(states, &self.accept_states, &self.rulebook)
    }

    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<SymbolId>,
    {
        let mut nfa = self.to_nfa();
        nfa.read_string(input);
        nfa.accepting()
    }

    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(symbols(input))
    }

    /// Run subset construction with the default configuration and number
    /// the result.
    pub fn to_dfa(&self) -> Dfa {
        NfaSimulation::new(self).discover().to_dfa()
    }
}
