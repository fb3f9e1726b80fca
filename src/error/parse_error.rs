use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Input arrives one line at a time, so every diagnostic points at line 1 of
/// `<stdin>` and only the column varies. Columns are 1-based character
/// offsets into the input line.
pub enum ParseError {
    /// Found a character that does not start any token.
    #[error("<stdin>:1:{column}: error: unexpected '{found}', expected number, symbol, '(' or end of input")]
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// Where it starts.
        column: usize,
    },
    /// A `)` appeared without a matching `(`.
    #[error("<stdin>:1:{column}: error: unexpected ')', expected number, symbol, '(' or end of input")]
    UnexpectedClosingParen {
        /// Where the parenthesis was found.
        column: usize,
    },
    /// The input ended while an s-expression was still open.
    #[error("<stdin>:1:{column}: error: unexpected end of input, expected ')'")]
    ExpectedClosingParen {
        /// Column just past the end of the input.
        column: usize,
    },
    /// Parentheses nest deeper than the configured limit.
    #[error("<stdin>:1:{column}: error: expressions nest deeper than {max} levels")]
    NestingTooDeep {
        /// The configured maximum depth.
        max:    usize,
        /// Column of the `(` that crossed the limit.
        column: usize,
    },
}

impl ParseError {
    /// Column the diagnostic points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnexpectedClosingParen { column }
            | Self::ExpectedClosingParen { column }
            | Self::NestingTooDeep { column, .. } => *column,
        }
    }
}
