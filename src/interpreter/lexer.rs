use logos::Logos;

/// Represents a lexical token in the source input.
///
/// Literals keep their source text: converting a number literal into an
/// integer is the tree builder's job, so an out-of-range literal still lexes
/// and later becomes an "invalid number" value rather than a parse failure.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator glyphs: `+`, `-`, `*`, `/` and `%`.
    #[regex(r"[+\-*/%]", |lex| lex.slice().to_string())]
    Operator(String),
    /// Word symbols such as `foo`. They parse, but no operator is named by
    /// one, so applying them yields an invalid operation.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Word(String),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Token {
    /// The source text a token stands for.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Number(text) | Self::Operator(text) | Self::Word(text) => text,
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(source: &str) -> Vec<Token> {
        Token::lexer(source).map(|t| t.expect("valid token")).collect()
    }

    #[test]
    fn minus_followed_by_digits_is_a_literal() {
        assert_eq!(lex("(-5)"),
                   vec![Token::LParen, Token::Number("-5".into()), Token::RParen]);
        assert_eq!(lex("(- 5)"),
                   vec![Token::LParen,
                        Token::Operator("-".into()),
                        Token::Number("5".into()),
                        Token::RParen]);
    }

    #[test]
    fn oversized_literals_still_lex() {
        assert_eq!(lex("99999999999999999999"),
                   vec![Token::Number("99999999999999999999".into())]);
    }

    #[test]
    fn words_lex_as_symbols() {
        assert_eq!(lex("foo_2"), vec![Token::Word("foo_2".into())]);
    }

    #[test]
    fn unknown_characters_are_errors() {
        assert!(Token::lexer("(+ 1 #)").any(|t| t.is_err()));
    }
}
