//! Lexer implementation.

use crate::error::LexError;
use logos::Logos;
use std::fmt;

/// A token of the arithmetic language.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    LParen,
    RParen,
    /// The end of input. Emitted exactly once, as the last token.
    End,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Plus => f.write_str("`+'"),
            Self::Minus => f.write_str("`-'"),
            Self::Star => f.write_str("`*'"),
            Self::Slash => f.write_str("`/'"),
            Self::Percent => f.write_str("`%'"),
            Self::LParen => f.write_str("`('"),
            Self::RParen => f.write_str("`)'"),
            Self::End => f.write_str("$end"),
        }
    }
}

/// A token together with its start and end byte offsets.
pub type Spanned = (usize, Token, usize);

#[derive(Debug, Copy, Clone, Logos, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r"[0-9]+(\.[0-9]+)?|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Number(f64),

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,

    #[token("%")]
    Percent,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,
}

impl From<RawToken> for Token {
    fn from(raw: RawToken) -> Self {
        match raw {
            RawToken::Number(n) => Self::Number(n),
            RawToken::Plus => Self::Plus,
            RawToken::Minus => Self::Minus,
            RawToken::Star => Self::Star,
            RawToken::Slash => Self::Slash,
            RawToken::Percent => Self::Percent,
            RawToken::LParen => Self::LParen,
            RawToken::RParen => Self::RParen,
        }
    }
}

/// A lazy token stream over an input string.
///
/// The stream ends with a single [`Token::End`]. After an error or the end
/// token, it yields `None`.
pub struct Lexer<'source> {
    source: &'source str,
    inner: logos::SpannedIter<'source, RawToken>,
    finished: bool,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            inner: RawToken::lexer(source).spanned(),
            finished: false,
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Spanned, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.inner.next() {
            Some((Ok(raw), span)) => Some(Ok((span.start, raw.into(), span.end))),
            Some((Err(()), span)) => {
                self.finished = true;
                let character = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Some(Err(LexError::InvalidCharacter {
                    position: span.start,
                    character,
                }))
            }
            None => {
                self.finished = true;
                let end = self.source.len();
                Some(Ok((end, Token::End, end)))
            }
        }
    }
}
