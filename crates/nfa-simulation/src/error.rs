//! Errors raised by subset construction.

use thiserror::Error;

/// Errors that can occur while discovering a DFA
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubsetError {
    #[error("DFA state limit exceeded: {states} states (max: {max})")]
    StateLimitExceeded { states: usize, max: usize },
}

/// Result type for subset construction
pub type Result<T> = std::result::Result<T, SubsetError>;
