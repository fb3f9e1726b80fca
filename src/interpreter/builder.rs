use tracing::{debug, trace};

use crate::{
    ast::{NodeKind, SyntaxNode},
    interpreter::value::{core::Value, error_kind::ErrorKind},
};

/// Converts a syntax tree node into a value.
///
/// Numbers become `Value::Number`, symbols become `Value::Symbol`, and the
/// program root and s-expressions become `Value::Expression` holding their
/// significant children in source order. Punctuation and boundary markers
/// are skipped.
///
/// The conversion never fails outright: a literal that does not fit in an
/// `i64` becomes an "invalid number" error value, and a node with an
/// unrecognized tag becomes a malformed error value. Both stay in the tree
/// and surface only if the evaluator reaches them.
///
/// # Example
/// ```
/// use rlisp::{
///     interpreter::{builder::build, parser::core::parse_program, value::core::Value},
/// };
///
/// let root = parse_program("(* 2 -3)", 16).unwrap();
/// let value = build(&root);
///
/// assert_eq!(value,
///            Value::Expression(vec![Value::Expression(vec![Value::symbol("*"),
///                                                          Value::Number(2),
///                                                          Value::Number(-3)])]));
/// ```
#[must_use]
pub fn build(node: &SyntaxNode) -> Value {
    match node.kind() {
        NodeKind::Number => build_number(&node.content),
        NodeKind::Symbol => {
            trace!(symbol = %node.content, "built symbol");
            Value::symbol(node.content.as_str())
        },
        NodeKind::Container => {
            let mut expr = Value::expression();
            for child in node.significant_children() {
                expr.push(build(child));
            }
            trace!(tag = %node.tag, children = expr.children().len(), "built expression");
            expr
        },
        NodeKind::Unknown => {
            debug!(tag = %node.tag, "unrecognized syntax node");
            Value::error_with(ErrorKind::Malformed,
                              format!("unrecognized syntax node '{}'", node.tag))
        },
    }
}

/// Parses a number literal, turning anything that is not a valid `i64` into
/// an error value.
fn build_number(text: &str) -> Value {
    match text.parse::<i64>() {
        Ok(n) => Value::Number(n),
        Err(e) => {
            debug!(literal = text, error = %e, "invalid number literal");
            Value::error_with(ErrorKind::BadNumber, format!("'{text}' is not a valid integer"))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{CHAR_TAG, NUMBER_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_CHAR_TAG};

    #[test]
    fn structural_children_are_skipped() {
        let root = SyntaxNode::branch(ROOT_TAG,
                                      vec![SyntaxNode::leaf(REGEX_TAG, ""),
                                           SyntaxNode::branch(SEXPR_TAG,
                                                              vec![SyntaxNode::leaf(CHAR_TAG,
                                                                                    "("),
                                                                   SyntaxNode::leaf(SYMBOL_CHAR_TAG,
                                                                                    "%"),
                                                                   SyntaxNode::leaf(NUMBER_TAG,
                                                                                    "9"),
                                                                   SyntaxNode::leaf(CHAR_TAG,
                                                                                    ")")]),
                                           SyntaxNode::leaf(REGEX_TAG, "")]);

        assert_eq!(build(&root),
                   Value::Expression(vec![Value::Expression(vec![Value::symbol("%"),
                                                                 Value::Number(9)])]));
    }

    #[test]
    fn overflowing_literal_is_a_bad_number() {
        let value = build(&SyntaxNode::leaf(NUMBER_TAG, "9223372036854775808"));
        assert_eq!(value.error_kind(), Some(ErrorKind::BadNumber));

        let value = build(&SyntaxNode::leaf(NUMBER_TAG, "-9223372036854775808"));
        assert_eq!(value, Value::Number(i64::MIN));
    }

    #[test]
    fn malformed_digits_are_a_bad_number() {
        let value = build(&SyntaxNode::leaf(NUMBER_TAG, "12a"));
        assert_eq!(value.error_kind(), Some(ErrorKind::BadNumber));
    }

    #[test]
    fn unknown_tag_is_malformed() {
        let value = build(&SyntaxNode::leaf("string", "\"hi\""));
        assert_eq!(value.error_kind(), Some(ErrorKind::Malformed));
    }

    #[test]
    fn empty_container_builds_empty_expression() {
        let sexpr = SyntaxNode::branch(SEXPR_TAG,
                                       vec![SyntaxNode::leaf(CHAR_TAG, "("),
                                            SyntaxNode::leaf(CHAR_TAG, ")")]);
        assert_eq!(build(&sexpr), Value::expression());
    }
}
