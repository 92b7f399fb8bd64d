use std::fmt;

use logos::Logos;

use crate::{error::ParseError, interpreter::parser::core::ParseResult};

/// Represents a lexical token in the source input.
///
/// The token set is deliberately small: numeric literals, the six binary
/// operator characters and parentheses. There is no whitespace token, so any
/// blank in the input is reported as an unexpected character.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
pub enum Token {
    /// Real literal tokens, such as `3.14`, `2.0e3` or `1e9`.
    #[regex(r"[0-9]+\.[0-9]+(e[0-9]+)?", parse_real)]
    #[regex(r"[0-9]+e[0-9]+", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Failure kinds reported by the lexer.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    #[default]
    UnrecognizedCharacter,
    /// An integer literal that does not fit in an `i64`.
    LiteralTooLarge,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Plus => f.write_str("+"),
            Self::Minus => f.write_str("-"),
            Self::Star => f.write_str("*"),
            Self::Slash => f.write_str("/"),
            Self::Percent => f.write_str("%"),
            Self::Caret => f.write_str("^"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
        }
    }
}

/// Parses a real literal from the current token slice.
fn parse_real(lex: &logos::Lexer<Token>) -> Result<f64, LexError> {
    lex.slice()
       .parse()
       .map_err(|_| LexError::UnrecognizedCharacter)
}

/// Parses an integer literal from the current token slice.
///
/// The regex guarantees the slice is all digits, so the only possible failure
/// is overflow.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexError> {
    lex.slice().parse().map_err(|_| LexError::LiteralTooLarge)
}

/// Splits the source into tokens paired with their 1-based column.
///
/// # Errors
/// - `ParseError::UnexpectedToken` for any character outside the grammar,
///   including spaces and tabs.
/// - `ParseError::LiteralTooLarge` for integer literals beyond `i64::MAX`.
///
/// # Example
/// ```
/// use calcline::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*(3.5)").unwrap();
/// assert_eq!(tokens[0], (Token::Integer(2), 1));
/// assert_eq!(tokens[3], (Token::Real(3.5), 4));
/// assert!(tokenize("2 * 3").is_err());
/// ```
pub fn tokenize(source: &str) -> ParseResult<Vec<(Token, usize)>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = lexer.span().start + 1;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(LexError::LiteralTooLarge) => {
                return Err(ParseError::LiteralTooLarge { column });
            },
            Err(LexError::UnrecognizedCharacter) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         column });
            },
        }
    }

    tracing::trace!(count = tokens.len(), "tokenized input");
    Ok(tokens)
}
