//! A single transition rule.

use crate::state::StateId;
use crate::symbol::{EPSILON, SymbolId, display_symbol, is_epsilon};
use std::fmt;

/// "From state `from`, on symbol `on`, go to state `to`."
///
/// The state type is generic so the same record describes NFA rules
/// (`S = StateId`) and rules between discovered DFA states
/// (`S = StateSet`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransitionRule<S = StateId> {
    from: S,
    on: SymbolId,
    to: S,
}

impl<S> TransitionRule<S> {
    /// Create a rule consuming `on`. Accepts a `char` or a raw `SymbolId`.
    pub fn new(from: S, on: impl Into<SymbolId>, to: S) -> Self {
        Self {
            from,
            on: on.into(),
            to,
        }
    }

    /// Create a free move.
    pub fn free(from: S, to: S) -> Self {
        Self {
            from,
            on: EPSILON,
            to,
        }
    }

    pub fn source(&self) -> &S {
        &self.from
    }

    pub fn symbol(&self) -> SymbolId {
        self.on
    }

    /// The state this rule leads to.
    pub fn destination(&self) -> &S {
        &self.to
    }

    pub fn is_free(&self) -> bool {
        is_epsilon(self.on)
    }
}

impl<S: PartialEq> TransitionRule<S> {
    /// Whether this rule fires for `state` on `symbol`.
    pub fn applies_to(&self, state: &S, symbol: SymbolId) -> bool {
        self.from == *state && self.on == symbol
    }
}

impl From<(StateId, Option<char>, StateId)> for TransitionRule {
    fn from((from, on, to): (StateId, Option<char>, StateId)) -> Self {
        match on {
            Some(c) => Self::new(from, c, to),
            None => Self::free(from, to),
        }
    }
}

impl<S: fmt::Display> fmt::Display for TransitionRule<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#<FARule {} --{}--> {}>",
            self.from,
            display_symbol(self.on),
            self.to
        )
    }
}
