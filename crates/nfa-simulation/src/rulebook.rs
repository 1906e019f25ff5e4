//! Immutable collection of transition rules for an epsilon-NFA.

use crate::rule::TransitionRule;
use crate::state::{StateId, StateSet};
use crate::symbol::{EPSILON, SymbolId};
use fixedbitset::FixedBitSet;
use indexmap::IndexSet;
use std::collections::HashMap;

/// The rules of an epsilon-NFA, indexed for `next_states` lookups.
///
/// States are renumbered densely (`0..states.len()`, in first-appearance
/// order) so the bit sets used during lookups and closure stay as small as
/// the rulebook, whatever ids the caller picked.
#[derive(Debug, Clone, Default)]
pub struct Rulebook {
    /// Rules in the order they were supplied
    rules: Vec<TransitionRule>,
    /// Every state mentioned by a rule; a state's position is its dense index
    states: IndexSet<StateId>,
    /// (dense source, symbol) -> dense destinations
    /// For free moves, symbol == EPSILON
    transitions: HashMap<(usize, SymbolId), FixedBitSet>,
    /// All symbols used (excluding epsilon), in first-appearance order
    alphabet: IndexSet<SymbolId>,
}

impl Rulebook {
    pub fn new(rules: impl IntoIterator<Item = TransitionRule>) -> Self {
        let rules: Vec<TransitionRule> = rules.into_iter().collect();
        let mut states = IndexSet::new();
        let mut alphabet = IndexSet::new();

        for rule in &rules {
            states.insert(*rule.source());
            states.insert(*rule.destination());
            if !rule.is_free() {
                alphabet.insert(rule.symbol());
            }
        }

        let mut transitions: HashMap<(usize, SymbolId), FixedBitSet> = HashMap::new();
        for rule in &rules {
            let (Some(from), Some(to)) = (
                states.get_index_of(rule.source()),
                states.get_index_of(rule.destination()),
            ) else {
                continue;
            };
            transitions
                .entry((from, rule.symbol()))
                .or_insert_with(|| FixedBitSet::with_capacity(states.len()))
                .insert(to);
        }

        Self {
            rules,
            states,
            transitions,
            alphabet,
        }
    }

    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }

    /// All rules leaving `state` on `symbol`.
    ///
    /// Scans every rule; `follow_rules_for` and `next_states` use the index.
    pub fn rules_for(
        &self,
        state: StateId,
        symbol: SymbolId,
    ) -> impl Iterator<Item = &TransitionRule> + '_ {
        self.rules
            .iter()
            .filter(move |rule| rule.applies_to(&state, symbol))
    }

    /// Destinations of every rule leaving `state` on `symbol`.
    pub fn follow_rules_for(&self, state: StateId, symbol: SymbolId) -> StateSet {
        self.states
            .get_index_of(&state)
            .and_then(|index| self.transitions.get(&(index, symbol)))
            .map(|bits| self.to_sparse(bits))
            .unwrap_or_default()
    }

    /// Get the states reachable from a set of states on a given symbol.
    ///
    /// With `EPSILON` this is a single layer of free moves, not the closure.
    pub fn next_states(&self, states: &StateSet, symbol: SymbolId) -> StateSet {
        self.to_sparse(&self.step(&self.to_dense(states), symbol))
    }

    /// Get the epsilon closure of a set of states.
    ///
    /// Only the states added by the previous layer are expanded, so each
    /// state's free moves are followed once. States unknown to the rulebook
    /// are kept as they are.
    pub fn epsilon_closure(&self, states: &StateSet) -> StateSet {
        let mut closure = self.to_dense(states);
        let mut frontier = closure.clone();

        loop {
            let mut added = self.step(&frontier, EPSILON);
            added.difference_with(&closure);
            if added.is_clear() {
                break;
            }
            closure.union_with(&added);
            frontier = added;
        }

        let mut result = states.clone();
        result.union_with(&self.to_sparse(&closure));
        result
    }

    /// Get the alphabet (all symbols except epsilon).
    pub fn alphabet(&self) -> &IndexSet<SymbolId> {
        &self.alphabet
    }

    /// Every state mentioned by any rule.
    pub fn states(&self) -> StateSet {
        self.states.iter().copied().collect()
    }

    fn to_dense(&self, states: &StateSet) -> FixedBitSet {
        let mut bits = FixedBitSet::with_capacity(self.states.len());
        for index in states.iter().filter_map(|state| self.states.get_index_of(&state)) {
            bits.insert(index);
        }
        bits
    }

    fn to_sparse(&self, bits: &FixedBitSet) -> StateSet {
        bits.ones()
            .filter_map(|index| self.states.get_index(index).copied())
            .collect()
    }

    /// One move on `symbol` from dense `bits`.
    fn step(&self, bits: &FixedBitSet, symbol: SymbolId) -> FixedBitSet {
        let mut reached = FixedBitSet::with_capacity(self.states.len());
        for index in bits.ones() {
            if let Some(destinations) = self.transitions.get(&(index, symbol)) {
                reached.union_with(destinations);
            }
        }
        reached
    }
}

impl FromIterator<TransitionRule> for Rulebook {
    fn from_iter<I: IntoIterator<Item = TransitionRule>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 1 -a-> 2, 1 -ε-> 3, 2 -b-> 4, 3 -b-> 4
    pub(crate) fn sample_rulebook() -> Rulebook {
        Rulebook::from_iter([
            (1, Some('a'), 2).into(),
            (1, None, 3).into(),
            (2, Some('b'), 4).into(),
            (3, Some('b'), 4).into(),
        ])
    }

    /// Mostly small ids, sometimes sparse or near `u32::MAX`.
    pub(crate) fn arb_state() -> impl Strategy<Value = StateId> {
        prop_oneof![
            3 => 0u32..6,
            1 => prop::sample::select(vec![7u32, 1_000, 4_000_000_000, u32::MAX - 1, u32::MAX]),
        ]
    }

    /// Small rulebooks over a handful of states and symbols {a, b, ε}.
    pub(crate) fn arb_rulebook() -> impl Strategy<Value = Rulebook> {
        let symbol = prop_oneof![Just(Some('a')), Just(Some('b')), Just(None)];
        prop::collection::vec((arb_state(), symbol, arb_state()), 0..14)
            .prop_map(|triples| {
                triples
                    .into_iter()
                    .map(TransitionRule::from)
                    .collect::<Rulebook>()
            })
    }

    pub(crate) fn arb_state_set() -> impl Strategy<Value = StateSet> {
        prop::collection::vec(arb_state(), 0..4).prop_map(StateSet::from_iter)
    }

    #[test]
    fn test_rules_for() {
        let rulebook = sample_rulebook();
        let rules: Vec<_> = rulebook.rules_for(1, SymbolId::from('a')).collect();
        assert_eq!(rules, vec![&TransitionRule::new(1, 'a', 2)]);
        assert_eq!(rulebook.rules_for(4, SymbolId::from('a')).count(), 0);
        assert_eq!(rulebook.rules_for(1, EPSILON).count(), 1);
    }

    #[test]
    fn test_next_states() {
        let rulebook = sample_rulebook();
        let b = SymbolId::from('b');
        assert_eq!(
            rulebook.next_states(&StateSet::from([2, 3]), b),
            StateSet::from([4])
        );
        assert_eq!(
            rulebook.next_states(&StateSet::from([1]), EPSILON),
            StateSet::from([3])
        );
        assert!(rulebook.next_states(&StateSet::from([1]), b).is_empty());
        assert!(rulebook.next_states(&StateSet::from([99]), b).is_empty());
        assert_eq!(rulebook.follow_rules_for(3, b), StateSet::from([4]));
    }

    #[test]
    fn test_epsilon_closure() {
        let rulebook = sample_rulebook();
        assert_eq!(
            rulebook.epsilon_closure(&StateSet::from([1])),
            StateSet::from([1, 3])
        );
        assert_eq!(
            rulebook.epsilon_closure(&StateSet::from([2])),
            StateSet::from([2])
        );
        assert!(rulebook.epsilon_closure(&StateSet::new()).is_empty());
    }

    #[test]
    fn test_epsilon_closure_chain_and_cycle() {
        // 0 -ε-> 1 -ε-> 2 -ε-> 0
        let rulebook = Rulebook::from_iter([
            TransitionRule::free(0, 1),
            TransitionRule::free(1, 2),
            TransitionRule::free(2, 0),
        ]);
        assert_eq!(
            rulebook.epsilon_closure(&StateSet::from([1])),
            StateSet::from([0, 1, 2])
        );
    }

    #[test]
    fn test_huge_state_ids() {
        let hi = 4_000_000_000;
        let rulebook = Rulebook::from_iter([
            TransitionRule::new(1, 'a', hi - 1),
            TransitionRule::free(hi - 1, hi),
            TransitionRule::free(hi, u32::MAX),
        ]);
        assert_eq!(
            rulebook.epsilon_closure(&StateSet::from([hi - 1])),
            StateSet::from([hi - 1, hi, u32::MAX])
        );
        assert_eq!(
            rulebook.next_states(&StateSet::from([1]), SymbolId::from('a')),
            StateSet::from([hi - 1])
        );
        assert_eq!(rulebook.follow_rules_for(hi, EPSILON), StateSet::from([u32::MAX]));
        assert_eq!(rulebook.states(), StateSet::from([1, hi - 1, hi, u32::MAX]));
    }

    #[test]
    fn test_unknown_states_pass_through_closure() {
        let rulebook = sample_rulebook();
        assert_eq!(
            rulebook.epsilon_closure(&StateSet::from([1, 77, u32::MAX])),
            StateSet::from([1, 3, 77, u32::MAX])
        );
        assert!(rulebook.next_states(&StateSet::from([77]), EPSILON).is_empty());
        assert!(rulebook.follow_rules_for(77, EPSILON).is_empty());
    }

    #[test]
    fn test_alphabet() {
        let rulebook = sample_rulebook();
        let alphabet: Vec<SymbolId> = rulebook.alphabet().iter().copied().collect();
        assert_eq!(alphabet, vec![SymbolId::from('a'), SymbolId::from('b')]);

        let free_only = Rulebook::from_iter([TransitionRule::free(0, 1)]);
        assert!(free_only.alphabet().is_empty());
    }

    #[test]
    fn test_states() {
        assert_eq!(sample_rulebook().states(), StateSet::from([1, 2, 3, 4]));
        assert!(Rulebook::default().states().is_empty());
    }

    proptest! {
        #[test]
        fn closure_is_idempotent(rulebook in arb_rulebook(), states in arb_state_set()) {
            let once = rulebook.epsilon_closure(&states);
            prop_assert_eq!(rulebook.epsilon_closure(&once), once);
        }

        #[test]
        fn closure_contains_input(rulebook in arb_rulebook(), states in arb_state_set()) {
            prop_assert!(states.is_subset(&rulebook.epsilon_closure(&states)));
        }

        #[test]
        fn next_states_is_deterministic(
            rulebook in arb_rulebook(),
            states in arb_state_set(),
            symbol in prop_oneof![Just(SymbolId::from('a')), Just(EPSILON)],
        ) {
            prop_assert_eq!(
                rulebook.next_states(&states, symbol),
                rulebook.next_states(&states, symbol)
            );
        }
    }
}
