use thiserror::Error;

use crate::object::Representation;
use crate::tokenizer::token::TokenKind;

/// Failure of a single `parse_line` call.
///
/// The `Display` text of each variant is the message handed back to callers
/// through [`ParsedLine::error_message`](crate::parser::ParsedLine::error_message).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("No tokens found")]
    EmptyInput,

    #[error("Invalid number")]
    InvalidNumber { kind: TokenKind, text: String },

    #[error("Object list and template list length do not match")]
    LengthMismatch { objects: usize, template: usize },

    #[error(
        "Expected type ({}){expected} but got type ({}){found}: {label}",
        .expected.ordinal(),
        .found.ordinal()
    )]
    TypeMismatch {
        position: usize,
        expected: TokenKind,
        found: TokenKind,
        label: String,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("Mismatched object type: requested {requested}, holds {found}")]
    TypeAccessMismatch {
        requested: Representation,
        found: Representation,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Line error: {0}")]
    Line(#[from] LineError),

    #[error("Value error: {0}")]
    Value(#[from] ValueError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }
}
