//! Error types.
//!
//! Every failure is an ordinary value. Positions are byte offsets into the
//! input string.

/// Errors raised while splitting the input into tokens.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum LexError {
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { position: usize, character: char },
}

/// Errors raised while building the syntax tree.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unexpected token at position {position}")]
    UnexpectedToken { position: usize },

    #[error("unmatched parenthesis at position {position}")]
    UnmatchedParenthesis { position: usize },

    #[error("trailing input at position {position}")]
    TrailingInput { position: usize },

    #[error("empty expression")]
    EmptyExpression,

    #[error("expression nested too deeply at position {position}")]
    NestingTooDeep { position: usize },
}

/// Errors raised while computing the value of a syntax tree.
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("the result is not a finite number")]
    NonFiniteResult,
}

/// Any error returned by [`evaluate`](crate::evaluate).
#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("lexer error: {}", _0)]
    Lex(#[from] LexError),

    #[error("syntax error: {}", _0)]
    Parse(#[from] ParseError),

    #[error("evaluation error: {}", _0)]
    Eval(#[from] EvalError),
}

/// A flattened view of [`Error`], convenient for mapping to user-facing messages.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnexpectedToken,
    UnmatchedParenthesis,
    TrailingInput,
    EmptyExpression,
    NestingTooDeep,
    DivisionByZero,
    NonFiniteResult,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            Self::Parse(ParseError::UnexpectedToken { .. }) => ErrorKind::UnexpectedToken,
            Self::Parse(ParseError::UnmatchedParenthesis { .. }) => ErrorKind::UnmatchedParenthesis,
            Self::Parse(ParseError::TrailingInput { .. }) => ErrorKind::TrailingInput,
            Self::Parse(ParseError::EmptyExpression) => ErrorKind::EmptyExpression,
            Self::Parse(ParseError::NestingTooDeep { .. }) => ErrorKind::NestingTooDeep,
            Self::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::Eval(EvalError::NonFiniteResult) => ErrorKind::NonFiniteResult,
        }
    }

    /// The byte offset in the input this error points at, if any.
    pub fn position(&self) -> Option<usize> {
        match *self {
            Self::Lex(LexError::InvalidCharacter { position, .. })
            | Self::Parse(ParseError::UnexpectedToken { position })
            | Self::Parse(ParseError::UnmatchedParenthesis { position })
            | Self::Parse(ParseError::TrailingInput { position })
            | Self::Parse(ParseError::NestingTooDeep { position }) => Some(position),
            Self::Parse(ParseError::EmptyExpression) | Self::Eval(..) => None,
        }
    }
}
