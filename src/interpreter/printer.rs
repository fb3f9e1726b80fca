use std::fmt;

use crate::{
    ast::SyntaxNode,
    interpreter::value::{core::Value, error_kind::ErrorKind},
};

/// Message shown for malformed expressions and for values that should never
/// reach the printer.
pub const UNKNOWN_ERROR: &str = "Error: Unknown Error.";

/// Renders an evaluation result for the user.
///
/// Numbers print in decimal. Errors print a fixed message per kind; the
/// optional detail is for diagnostics only and is never shown. Symbols and
/// expressions are not results, so they print the unknown-error message
/// rather than failing.
///
/// # Example
/// ```
/// use rlisp::interpreter::{
///     printer::render,
///     value::{core::Value, error_kind::ErrorKind},
/// };
///
/// assert_eq!(render(&Value::Number(-12)), "-12");
/// assert_eq!(render(&Value::error(ErrorKind::DivByZero)), "Error: Division by zero.");
/// assert_eq!(render(&Value::symbol("+")), "Error: Unknown Error.");
/// ```
#[must_use]
pub fn render(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::Error { kind, .. } => error_message(*kind).to_string(),
        Value::Symbol(_) | Value::Expression(_) => UNKNOWN_ERROR.to_string(),
    }
}

/// The user-facing message for an error kind.
#[must_use]
pub const fn error_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::DivByZero => "Error: Division by zero.",
        ErrorKind::BadOperator => "Error: Invalid operation.",
        ErrorKind::BadNumber => "Error: Invalid number.",
        ErrorKind::Malformed => UNKNOWN_ERROR,
    }
}

/// Structural rendering for diagnostics: `(+ 1 (* 2 3))`, with errors shown
/// as `<error Kind: detail>`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Error { kind, detail: None } => write!(f, "<error {kind}>"),
            Self::Error { kind,
                          detail: Some(detail), } => write!(f, "<error {kind}: {detail}>"),
            Self::Expression(children) => {
                write!(f, "(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            },
        }
    }
}

/// Renders a syntax tree one node per line, indented by depth, with each
/// node's tag and, for leaves, its content.
///
/// # Example
/// ```
/// use rlisp::interpreter::{parser::core::parse_program, printer::render_tree};
///
/// let root = parse_program("(- 4)", 8).unwrap();
/// let expected = "\
/// >
///   regex
///   expr|sexpr|>
///     char '('
///     expr|symbol|char '-'
///     expr|number|regex '4'
///     char ')'
///   regex
/// ";
/// assert_eq!(render_tree(&root), expected);
/// ```
#[must_use]
pub fn render_tree(node: &SyntaxNode) -> String {
    let mut out = String::new();
    write_node(&mut out, node, 0);
    out
}

fn write_node(out: &mut String, node: &SyntaxNode, depth: usize) {
    let indent = "  ".repeat(depth);
    let line = if node.content.is_empty() {
        format!("{indent}{}\n", node.tag)
    } else {
        format!("{indent}{} '{}'\n", node.tag, node.content)
    };
    out.push_str(&line);
    for child in &node.children {
        write_node(out, child, depth + 1);
    }
}
