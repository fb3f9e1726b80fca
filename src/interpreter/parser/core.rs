use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{
        CHAR_TAG, NUMBER_TAG, REGEX_TAG, ROOT_TAG, SEXPR_TAG, SYMBOL_CHAR_TAG, SYMBOL_WORD_TAG,
        SyntaxNode,
    },
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::tokens::{Spanned, tokenize},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Limits that stay fixed while one input is parsed.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    /// Deepest permitted s-expression nesting.
    max_depth:  usize,
    /// Column just past the end of the input.
    end_column: usize,
}

/// Parses a whole input line into a program root node.
///
/// Grammar: `program := expression*`
///
/// The root is tagged `>` and its expressions are wrapped between a start
/// and an end boundary marker, both tagged `regex`.
///
/// # Parameters
/// - `source`: One line of input.
/// - `max_depth`: Deepest permitted s-expression nesting.
///
/// # Errors
/// - `UnexpectedCharacter` for characters that start no token.
/// - `UnexpectedClosingParen` for a `)` without a matching `(`.
/// - `ExpectedClosingParen` when the input ends inside an s-expression.
/// - `NestingTooDeep` when parentheses nest past `max_depth`.
///
/// # Example
/// ```
/// use rlisp::interpreter::parser::core::parse_program;
///
/// let root = parse_program("(+ 1 2)", 16).unwrap();
/// assert_eq!(root.tag, ">");
/// assert_eq!(root.significant_children().count(), 1);
///
/// assert!(parse_program("(+ 1 2", 16).is_err());
/// ```
pub fn parse_program(source: &str, max_depth: usize) -> ParseResult<SyntaxNode> {
    let (tokens, end_column) = tokenize(source)?;
    let bounds = Bounds { max_depth,
                          end_column };
    let mut iter = tokens.iter().peekable();

    let mut children = vec![SyntaxNode::leaf(REGEX_TAG, "")];
    while let Some((token, column)) = iter.peek() {
        if *token == Token::RParen {
            return Err(ParseError::UnexpectedClosingParen { column: *column });
        }
        children.push(parse_expression(&mut iter, 0, bounds)?);
    }
    children.push(SyntaxNode::leaf(REGEX_TAG, ""));

    trace!(expressions = children.len() - 2, "parsed program");
    Ok(SyntaxNode::branch(ROOT_TAG, children))
}

/// Parses a single expression.
///
/// Grammar: `expression := number | symbol | sexpr`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the expression.
/// - `depth`: Nesting depth of the enclosing container.
/// - `bounds`: Limits for this input.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           bounds: Bounds)
                           -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::Number(text), _)) => Ok(SyntaxNode::leaf(NUMBER_TAG, text.as_str())),
        Some((Token::Operator(text), _)) => Ok(SyntaxNode::leaf(SYMBOL_CHAR_TAG, text.as_str())),
        Some((Token::Word(text), _)) => Ok(SyntaxNode::leaf(SYMBOL_WORD_TAG, text.as_str())),
        Some((Token::LParen, column)) => parse_sexpr(tokens, depth + 1, *column, bounds),
        Some((Token::RParen, column)) => {
            Err(ParseError::UnexpectedClosingParen { column: *column })
        },
        None => Err(ParseError::ExpectedClosingParen { column: bounds.end_column }),
    }
}

/// Parses the remainder of an s-expression after its opening parenthesis.
///
/// Grammar: `sexpr := '(' expression* ')'`
///
/// The parentheses are kept as `char` children so the node mirrors the
/// source text exactly.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after `(`.
/// - `depth`: Nesting depth of this s-expression.
/// - `open_column`: Column of the `(`, used when the depth limit is hit.
/// - `bounds`: Limits for this input.
fn parse_sexpr<'a, I>(tokens: &mut Peekable<I>,
                      depth: usize,
                      open_column: usize,
                      bounds: Bounds)
                      -> ParseResult<SyntaxNode>
    where I: Iterator<Item = &'a Spanned>
{
    if depth > bounds.max_depth {
        return Err(ParseError::NestingTooDeep { max:    bounds.max_depth,
                                                column: open_column, });
    }

    let mut children = vec![SyntaxNode::leaf(CHAR_TAG, "(")];

    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                children.push(SyntaxNode::leaf(CHAR_TAG, ")"));
                return Ok(SyntaxNode::branch(SEXPR_TAG, children));
            },
            Some(_) => children.push(parse_expression(tokens, depth, bounds)?),
            None => return Err(ParseError::ExpectedClosingParen { column: bounds.end_column }),
        }
    }
}
