//! # rlisp
//!
//! rlisp is a small calculator for integer arithmetic written in prefix
//! notation, such as `(+ 1 (* 2 3))`.
//! Each input line is parsed into a generic syntax tree, converted into a
//! tree of values, reduced to a number or an error, and rendered as text.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::{
    config::Config,
    error::ParseError,
    interpreter::{
        builder::build,
        evaluator::core::Evaluator,
        parser::core::parse_program,
        printer::{render, render_tree},
        value::core::Value,
    },
};

/// Defines the generic syntax tree handed from the parser to the tree
/// builder.
///
/// This module declares `SyntaxNode`, an untyped node carrying a grammar-rule
/// tag, literal content, and ordered children, together with the tag
/// constants the parser emits.
///
/// # Responsibilities
/// - Defines the node contract shared by the parser and the tree builder.
/// - Classifies nodes as numbers, symbols, or containers purely by tag.
/// - Identifies structural children (parentheses and boundary markers) that
///   carry no value.
pub mod ast;
/// Settings for parsing and evaluation.
///
/// Holds the nesting limit that bounds recursion in every phase and the
/// switch for debug tree output.
pub mod config;
/// Provides error types for parsing.
///
/// Evaluation failures are ordinary values, so the only Rust errors in the
/// crate are the diagnostics produced when an input line does not parse.
///
/// # Responsibilities
/// - Defines the parse error enum for every way an input can be rejected.
/// - Attaches columns and formats diagnostics for the user.
pub mod error;
/// Orchestrates the entire process of evaluating an input line.
///
/// This module ties together lexing, parsing, tree building, evaluation, and
/// printing.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, builder, evaluator, and
///   printer.
/// - Defines the value model shared between them.
pub mod interpreter;

/// The outcome of evaluating one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The result: always a number or an error.
    pub value:       Value,
    /// The rendered result, ready to print.
    pub output:      String,
    /// Tag-annotated syntax tree, when tree output is enabled.
    pub syntax_tree: Option<String>,
    /// Structural rendering of the built value tree, when tree output is
    /// enabled.
    pub value_tree:  Option<String>,
}

/// Parses, builds, evaluates, and renders one input line.
///
/// A program holding a single expression evaluates that expression. Any other
/// program is treated as one expression whose children are the top-level
/// items, so `+ 1 2` works without parentheses and an empty program is
/// malformed.
///
/// The syntax tree and the value tree are dropped before this function
/// returns, on every path.
///
/// # Errors
/// Returns the parse diagnostic if the line does not parse. Evaluation errors
/// are not Rust errors; they come back as `Value::Error` inside `Evaluation`.
///
/// # Examples
/// ```
/// use rlisp::{config::Config, eval_source};
///
/// let result = eval_source("(+ 1 (* 2 3))", &Config::default()).unwrap();
/// assert_eq!(result.output, "7");
///
/// let result = eval_source("(/ 10 0)", &Config::default()).unwrap();
/// assert_eq!(result.output, "Error: Division by zero.");
///
/// assert!(eval_source("(+ 1", &Config::default()).is_err());
/// ```
pub fn eval_source(source: &str, config: &Config) -> Result<Evaluation, ParseError> {
    let syntax = parse_program(source, config.max_depth)?;
    let root = build(&syntax);

    let program = match root.children() {
        [only] => only,
        _ => &root,
    };

    let mut evaluator = Evaluator::new(config);
    let value = evaluator.eval_program(&root);
    debug!(nodes = root.node_count(),
           evaluated = evaluator.evaluated(),
           result = %value,
           "evaluated input");

    let (syntax_tree, value_tree) = if config.show_tree {
        (Some(render_tree(&syntax)), Some(program.to_string()))
    } else {
        (None, None)
    };

    Ok(Evaluation { output: render(&value),
                    value,
                    syntax_tree,
                    value_tree })
}

/// Evaluates one line and returns the text to show the user: the rendered
/// result, or the parse diagnostic.
///
/// # Example
/// ```
/// use rlisp::{config::Config, eval_line};
///
/// assert_eq!(eval_line("(- 5)", &Config::default()), "5");
/// assert_eq!(eval_line("(foo 1 2)", &Config::default()), "Error: Invalid operation.");
/// ```
#[must_use]
pub fn eval_line(source: &str, config: &Config) -> String {
    match eval_source(source, config) {
        Ok(evaluation) => evaluation.output,
        Err(e) => e.to_string(),
    }
}
