/// Lexical analysis of input lines.
///
/// Converts raw text into tokens: integer literals, operator glyphs, words,
/// and parentheses. Whitespace is skipped.
pub mod lexer;

/// Parsing of tokens into the generic syntax tree.
///
/// Produces tag-annotated `SyntaxNode` trees, keeping punctuation and
/// boundary markers as children, or a `ParseError` diagnostic.
pub mod parser;

/// Runtime value representation.
///
/// Defines the `Value` tree (numbers, symbols, errors, expressions) and the
/// `ErrorKind` taxonomy.
pub mod value;

/// Conversion of syntax trees into values.
///
/// Classifies nodes by tag, skips structural children, and parses number
/// literals.
pub mod builder;

/// Evaluation of values.
///
/// Reduces expressions by left-to-right operator folding, stopping at the
/// first error.
pub mod evaluator;

/// Rendering of values and syntax trees as text.
pub mod printer;
