//! State types for automata.

use std::collections::BTreeSet;
use std::fmt;

/// A state identifier represented as a u32.
pub type StateId = u32;

/// A set of states, keyed by their ids.
///
/// Storage is proportional to the number of members, not to the largest id,
/// so arbitrary `u32` ids are fine. Iteration is in ascending order and
/// equality/hashing depend only on the members.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet {
    ids: BTreeSet<StateId>,
}

impl StateSet {
    /// Create a new empty state set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state set containing a single state.
    pub fn singleton(state: StateId) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state into the set.
    pub fn insert(&mut self, state: StateId) {
        self.ids.insert(state);
    }

    /// Check if the set contains a state.
    pub fn contains(&self, state: StateId) -> bool {
        self.ids.contains(&state)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Get the number of states in the set.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Iterate over all states in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.ids.iter().copied()
    }

    /// Union this set with another, modifying self in place.
    pub fn union_with(&mut self, other: &StateSet) {
        self.ids.extend(other.iter());
    }

    /// Check whether every member of this set is also in `other`.
    pub fn is_subset(&self, other: &StateSet) -> bool {
        self.ids.is_subset(&other.ids)
    }

    /// Check if this set intersects with another.
    pub fn intersects(&self, other: &StateSet) -> bool {
        !self.ids.is_disjoint(&other.ids)
    }

    /// Create a new set with the members of this set that are not in `other`.
    pub fn difference(&self, other: &StateSet) -> StateSet {
        self.ids.difference(&other.ids).copied().collect()
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}

impl<const N: usize> From<[StateId; N]> for StateSet {
    fn from(states: [StateId; N]) -> Self {
        states.into_iter().collect()
    }
}
