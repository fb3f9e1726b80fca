use logos::Logos;

use crate::{error::ParseError, interpreter::lexer::Token};

/// A token paired with the 1-based column it starts at.
pub type Spanned = (Token, usize);

/// Lexes a whole input line.
///
/// # Returns
/// The tokens in source order, each with its starting column, followed by the
/// column just past the end of the input (used for end-of-input diagnostics).
///
/// # Errors
/// `UnexpectedCharacter` for the first character that starts no token.
pub fn tokenize(source: &str) -> Result<(Vec<Spanned>, usize), ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_of(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                             column });
            },
        }
    }

    Ok((tokens, column_of(source, source.len())))
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}
