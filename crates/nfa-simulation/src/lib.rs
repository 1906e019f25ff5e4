//! Epsilon-NFA execution and subset construction.
//!
//! This crate provides:
//! - Transition rules and rulebooks with epsilon closure
//! - An NFA runtime that reads input one symbol at a time
//! - Lazy subset construction (NFA to DFA conversion) over reachable state sets
//! - A dense DFA executor for the discovered automaton
//!
//! ```
//! use nfa_simulation::{NfaDesign, NfaSimulation, Rulebook, StateSet};
//!
//! let rulebook = Rulebook::from_iter([
//!     (1, Some('a'), 2).into(),
//!     (1, None, 3).into(),
//!     (2, Some('b'), 4).into(),
//!     (3, Some('b'), 4).into(),
//! ]);
//! let design = NfaDesign::new(1, [4], rulebook);
//! assert!(design.accepts_str("ab"));
//! assert!(design.accepts_str("b"));
//! assert!(!design.accepts_str("a"));
//!
//! let dfa = NfaSimulation::new(&design).discover();
//! assert_eq!(dfa.start(), &StateSet::from([1, 3]));
//! assert_eq!(dfa.states().len(), 3);
//! assert!(dfa.accepts_str("ab"));
//! ```

mod config;
mod design;
mod dfa;
mod error;
mod nfa;
mod rule;
mod rulebook;
mod state;
mod subset_construction;
mod symbol;

pub use config::SubsetConfig;
pub use design::NfaDesign;
pub use dfa::Dfa;
pub use error::{Result, SubsetError};
pub use nfa::Nfa;
pub use rule::TransitionRule;
pub use rulebook::Rulebook;
pub use state::{StateId, StateSet};
pub use subset_construction::{DiscoveredDfa, NfaSimulation};
pub use symbol::{EPSILON, SymbolId, display_symbol, is_epsilon, symbols};
