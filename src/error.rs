/// Parsing errors.
///
/// Defines the diagnostics that can occur while lexing and parsing an input
/// line. A parse error means no syntax tree was produced, so the value model
/// and evaluator are never involved.
pub mod parse_error;

pub use parse_error::ParseError;
