//! Discovered DFA flattened into a numbered transition table.

use crate::state::{StateId, StateSet};
use crate::subset_construction::DiscoveredDfa;
use crate::symbol::{SymbolId, symbols};
use fixedbitset::FixedBitSet;
use indexmap::IndexSet;

/// A DFA whose states are numbered in discovery order; state 0 is the start.
///
/// The table has one row per state and one column per alphabet symbol.
/// An empty cell (or a symbol outside the alphabet) rejects.
#[derive(Debug, Clone)]
pub struct Dfa {
    /// NFA state set behind each DFA state
    subsets: Vec<StateSet>,
    accepting: FixedBitSet,
    alphabet: IndexSet<SymbolId>,
    /// Row-major: `table[state * alphabet.len() + column]`
    table: Vec<Option<StateId>>,
}

impl Dfa {
    pub fn num_states(&self) -> usize {
        self.subsets.len()
    }

    pub fn start_state(&self) -> StateId {
        0
    }

    pub fn alphabet(&self) -> &IndexSet<SymbolId> {
        &self.alphabet
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state as usize)
    }

    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting.ones().map(|index| index as StateId)
    }

    /// The NFA state set a DFA state stands for.
    pub fn state_mapping(&self, state: StateId) -> Option<&StateSet> {
        self.subsets.get(state as usize)
    }

    pub fn transition(&self, state: StateId, symbol: SymbolId) -> Option<StateId> {
        let column = self.alphabet.get_index_of(&symbol)?;
        let row = (state as usize).checked_mul(self.alphabet.len())?;
        self.table.get(row.checked_add(column)?).copied().flatten()
    }

    /// Every filled cell as `(source, symbol, destination)`.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, SymbolId, StateId)> + '_ {
        let width = self.alphabet.len();
        self.table
            .iter()
            .enumerate()
            .filter_map(move |(cell, target)| {
                let to = (*target)?;
                let symbol = *self.alphabet.get_index(cell % width)?;
                Some(((cell / width) as StateId, symbol, to))
            })
    }

    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<SymbolId>,
    {
        if self.subsets.is_empty() {
            return false;
        }
        let mut state = self.start_state();
        for symbol in input {
            match self.transition(state, symbol.into()) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(symbols(input))
    }
}

impl From<&DiscoveredDfa> for Dfa {
    fn from(discovered: &DiscoveredDfa) -> Self {
        let states = discovered.states();
        let alphabet = discovered.alphabet().clone();
        let width = alphabet.len();

        let mut accepting = FixedBitSet::with_capacity(states.len());
        for (index, state) in states.iter().enumerate() {
            if discovered.accept_states().contains(state) {
                accepting.insert(index);
            }
        }

        let mut table = vec![None; states.len() * width];
        for rule in discovered.rules() {
            if let (Some(from), Some(column), Some(to)) = (
                states.get_index_of(rule.source()),
                alphabet.get_index_of(&rule.symbol()),
                states.get_index_of(rule.destination()),
            ) {
                table[from * width + column] = Some(to as StateId);
            }
        }

        Self {
            subsets: states.iter().cloned().collect(),
            accepting,
            alphabet,
            table,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::NfaDesign;
    use crate::rule::TransitionRule;
    use crate::rulebook::Rulebook;

    fn ab_star() -> NfaDesign {
        // (ab)* with free moves: 0 -ε-> 1 -a-> 2 -b-> 0, accept 0
        NfaDesign::new(
            0,
            [0],
            Rulebook::from_iter([
                TransitionRule::free(0, 1),
                TransitionRule::new(1, 'a', 2),
                TransitionRule::new(2, 'b', 0),
            ]),
        )
    }

    #[test]
    fn test_table_layout() {
        let dfa = ab_star().to_dfa();
        let a = SymbolId::from('a');
        let b = SymbolId::from('b');

        assert_eq!(dfa.num_states(), 2);
        assert_eq!(dfa.start_state(), 0);
        assert_eq!(dfa.state_mapping(0), Some(&StateSet::from([0, 1])));
        assert_eq!(dfa.state_mapping(1), Some(&StateSet::from([2])));
        assert_eq!(dfa.state_mapping(2), None);
        assert_eq!(dfa.transition(0, a), Some(1));
        assert_eq!(dfa.transition(0, b), None);
        assert_eq!(dfa.transition(1, b), Some(0));
        assert_eq!(dfa.transition(1, SymbolId::from('z')), None);
        assert_eq!(dfa.transition(u32::MAX, a), None);
        assert_eq!(dfa.accept_states().collect::<Vec<_>>(), vec![0]);

        let mut cells: Vec<_> = dfa.transitions().collect();
        cells.sort_unstable();
        assert_eq!(cells, vec![(0, a, 1), (1, b, 0)]);
    }

    #[test]
    fn test_accepts() {
        let dfa = ab_star().to_dfa();
        for input in ["", "ab", "abab"] {
            assert!(dfa.accepts_str(input), "{input:?}");
        }
        for input in ["a", "b", "aba", "abb", "c"] {
            assert!(!dfa.accepts_str(input), "{input:?}");
        }
        assert!(dfa.accepts([SymbolId::from('a'), SymbolId::from('b')]));
    }
}
