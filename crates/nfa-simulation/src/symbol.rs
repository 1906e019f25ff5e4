//! Symbol types for automata transitions.

/// A symbol identifier represented as a u32.
/// The special value `EPSILON` represents a free (epsilon) move.
///
/// Every `char` converts losslessly via `SymbolId::from(c)`, which is how
/// string input is read.
pub type SymbolId = u32;

/// Special symbol ID representing free moves.
/// `u32::MAX` lies outside the `char` range, so no character collides with it.
pub const EPSILON: SymbolId = u32::MAX;

/// Check if a symbol is a free move.
#[inline]
pub fn is_epsilon(symbol: SymbolId) -> bool {
    symbol == EPSILON
}

/// Iterate over the symbols of a string, one per `char`.
pub fn symbols(input: &str) -> impl Iterator<Item = SymbolId> + '_ {
    input.chars().map(SymbolId::from)
}

/// Render a symbol for display: `ε` for free moves, the character when the
/// id is a valid `char`, otherwise the raw number.
pub fn display_symbol(symbol: SymbolId) -> String {
    if is_epsilon(symbol) {
        return "ε".to_string();
    }
    match char::from_u32(symbol) {
        Some(c) if !c.is_control() => c.to_string(),
        _ => format!("{symbol}"),
    }
}
