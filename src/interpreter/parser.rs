/// Core parsing logic.
///
/// Turns the token stream into the generic syntax tree: the program root,
/// s-expressions, and the literal leaves, each tagged with the grammar rule
/// that matched it.
pub mod core;

/// Tokenization helpers for the parser.
///
/// Runs the lexer over an input line and attaches a column to every token so
/// diagnostics can point at the offending character.
pub mod tokens;
