//! Subset construction: discovering the DFA equivalent to an epsilon-NFA.

use crate::config::SubsetConfig;
use crate::design::NfaDesign;
use crate::dfa::Dfa;
use crate::error::{Result, SubsetError};
use crate::rule::TransitionRule;
use crate::state::StateSet;
use crate::symbol::{SymbolId, symbols};
use indexmap::IndexSet;
use log::{debug, trace};
use std::collections::{HashMap, VecDeque};
use std::convert::Infallible;

/// Runs an [`NfaDesign`] one symbol at a time from arbitrary state sets,
/// which is all subset construction needs.
#[derive(Debug, Clone, Copy)]
pub struct NfaSimulation<'a> {
    design: &'a NfaDesign,
}

/// Discovered DFA states in discovery order, and the rules between them.
type Discovery = (IndexSet<StateSet>, Vec<TransitionRule<StateSet>>);

impl<'a> NfaSimulation<'a> {
    pub fn new(design: &'a NfaDesign) -> Self {
        Self { design }
    }

    /// The closed state set reached from `state` after reading `symbol`.
    pub fn next_state(&self, state: &StateSet, symbol: SymbolId) -> StateSet {
        let mut nfa = self.design.to_nfa_from(state.clone());
        nfa.read_character(symbol);
        nfa.current_states().clone()
    }

    /// One derived rule per alphabet symbol, including moves into the
    /// empty set.
    pub fn rules_for(&self, state: &StateSet) -> Vec<TransitionRule<StateSet>> {
        self.design
            .rulebook()
            .alphabet()
            .iter()
            .map(|&symbol| {
                TransitionRule::new(state.clone(), symbol, self.next_state(state, symbol))
            })
            .collect()
    }

    /// Grow `states` until every rule out of a known state leads to a known
    /// state. The empty set is kept as a state whenever it is reached.
    pub fn discover_states_and_rules(
        &self,
        states: impl IntoIterator<Item = StateSet>,
    ) -> Discovery {
        let Ok(discovery) = self.explore::<Infallible>(states, true, |_| Ok(()));
        discovery
    }

    /// Discover the DFA reachable from the start state, without a state limit.
    pub fn discover(&self) -> DiscoveredDfa {
        let config = SubsetConfig::default();
        let Ok(discovery) = self.explore::<Infallible>(
            [self.start()],
            config.keep_dead_state,
            |_| Ok(()),
        );
        self.finish(discovery)
    }

    /// Discover the DFA reachable from the start state, giving up once more
    /// than `config.max_states` states have been found.
    pub fn discover_with(&self, config: &SubsetConfig) -> Result<DiscoveredDfa> {
        let discovery = self.explore([self.start()], config.keep_dead_state, |states| {
            match config.max_states {
                Some(max) if states > max => {
                    Err(SubsetError::StateLimitExceeded { states, max })
                }
                _ => Ok(()),
            }
        })?;
        Ok(self.finish(discovery))
    }

    fn start(&self) -> StateSet {
        self.design
            .rulebook()
            .epsilon_closure(&StateSet::singleton(self.design.start_state()))
    }

    /// Breadth-first worklist over discovered state sets. Each set is
    /// expanded exactly once; `admit` sees the state count after every
    /// insertion and may abort.
    fn explore<E>(
        &self,
        seeds: impl IntoIterator<Item = StateSet>,
        keep_dead_state: bool,
        mut admit: impl FnMut(usize) -> std::result::Result<(), E>,
    ) -> std::result::Result<Discovery, E> {
        let mut discovered: IndexSet<StateSet> = IndexSet::new();
        let mut worklist: VecDeque<StateSet> = VecDeque::new();
        let mut rules = Vec::new();

        for seed in seeds {
            if discovered.insert(seed.clone()) {
                admit(discovered.len())?;
                worklist.push_back(seed);
            }
        }

        debug!(
            "subset construction: {} seed state(s), alphabet of {}",
            discovered.len(),
            self.design.rulebook().alphabet().len()
        );

        while let Some(current) = worklist.pop_front() {
            for rule in self.rules_for(&current) {
                let next = rule.destination();
                if next.is_empty() && !keep_dead_state {
                    continue;
                }
                if !discovered.contains(next) {
                    discovered.insert(next.clone());
                    admit(discovered.len())?;
                    trace!("discovered DFA state #{}: {}", discovered.len() - 1, next);
                    worklist.push_back(next.clone());
                }
                rules.push(rule);
            }
        }

        debug!(
            "subset construction: {} state(s), {} rule(s)",
            discovered.len(),
            rules.len()
        );

        Ok((discovered, rules))
    }

    fn finish(&self, (states, rules): Discovery) -> DiscoveredDfa {
        let start = self.start();
        let accept_states = states
            .iter()
            .filter(|state| state.intersects(self.design.accept_states()))
            .cloned()
            .collect();

        let mut table = HashMap::with_capacity(rules.len());
        for rule in &rules {
            if let (Some(from), Some(to)) = (
                states.get_index_of(rule.source()),
                states.get_index_of(rule.destination()),
            ) {
                table.insert((from, rule.symbol()), to);
            }
        }

        DiscoveredDfa {
            start,
            accept_states,
            alphabet: self.design.rulebook().alphabet().clone(),
            states,
            rules,
            table,
        }
    }
}

/// The reachable part of the DFA whose states are epsilon-closed sets of
/// NFA states.
#[derive(Debug, Clone)]
pub struct DiscoveredDfa {
    states: IndexSet<StateSet>,
    rules: Vec<TransitionRule<StateSet>>,
    start: StateSet,
    accept_states: IndexSet<StateSet>,
    alphabet: IndexSet<SymbolId>,
    /// (source index, symbol) -> destination index into `states`
    table: HashMap<(usize, SymbolId), usize>,
}

impl DiscoveredDfa {
    /// DFA states in discovery order; the start state comes first.
    pub fn states(&self) -> &IndexSet<StateSet> {
        &self.states
    }

    pub fn rules(&self) -> &[TransitionRule<StateSet>] {
        &self.rules
    }

    pub fn start(&self) -> &StateSet {
        &self.start
    }

    pub fn accept_states(&self) -> &IndexSet<StateSet> {
        &self.accept_states
    }

    pub fn alphabet(&self) -> &IndexSet<SymbolId> {
        &self.alphabet
    }

    pub fn next_state(&self, state: &StateSet, symbol: SymbolId) -> Option<&StateSet> {
        let from = self.states.get_index_of(state)?;
        let to = *self.table.get(&(from, symbol))?;
        self.states.get_index(to)
    }

    /// A missing transition rejects.
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<SymbolId>,
    {
        let mut current = &self.start;
        for symbol in input {
            match self.next_state(current, symbol.into()) {
                Some(next) => current = next,
                None => return false,
            }
        }
        self.accept_states.contains(current)
    }

    pub fn accepts_str(&self, input: &str) -> bool {
        self.accepts(symbols(input))
    }

    /// Number the states in discovery order (the start state is 0) and
    /// build the dense transition table.
    pub fn to_dfa(&self) -> Dfa {
        Dfa::from(self)
    }
}
