//! Typed values produced from tokens.

use std::fmt;

use crate::error::ValueError;
use crate::tokenizer::token::TokenKind;

/// Which variant an [`ObjectValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Representation {
    String,
    Integer,
    Boolean,
}

impl Representation {
    /// Kind a value of this representation gets when set without a token.
    pub fn canonical_kind(self) -> TokenKind {
        match self {
            Representation::String => TokenKind::Identifier,
            Representation::Integer => TokenKind::Uint64,
            // No token kind carries a boolean.
            Representation::Boolean => TokenKind::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectValue {
    String(String),
    Integer(u64),
    Boolean(bool),
}

impl ObjectValue {
    pub fn representation(&self) -> Representation {
        match self {
            ObjectValue::String(_) => Representation::String,
            ObjectValue::Integer(_) => Representation::Integer,
            ObjectValue::Boolean(_) => Representation::Boolean,
        }
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectValue::String(s) => write!(f, "{}", s),
            ObjectValue::Integer(i) => write!(f, "{:#x}", i),
            ObjectValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedValue {
    pub kind: TokenKind,
    pub value: ObjectValue,
    pub descriptor: String,
}

impl TypedValue {
    pub fn string(kind: TokenKind, value: impl Into<String>, descriptor: impl Into<String>) -> Self {
        Self {
            kind,
            value: ObjectValue::String(value.into()),
            descriptor: descriptor.into(),
        }
    }

    pub fn integer(kind: TokenKind, value: u64, descriptor: impl Into<String>) -> Self {
        Self {
            kind,
            value: ObjectValue::Integer(value),
            descriptor: descriptor.into(),
        }
    }

    pub fn boolean(value: bool, descriptor: impl Into<String>) -> Self {
        Self {
            kind: Representation::Boolean.canonical_kind(),
            value: ObjectValue::Boolean(value),
            descriptor: descriptor.into(),
        }
    }

    pub fn set_string(&mut self, value: impl Into<String>, descriptor: impl Into<String>) {
        *self = Self::string(Representation::String.canonical_kind(), value, descriptor);
    }

    pub fn set_integer(&mut self, value: u64, descriptor: impl Into<String>) {
        *self = Self::integer(Representation::Integer.canonical_kind(), value, descriptor);
    }

    pub fn set_boolean(&mut self, value: bool, descriptor: impl Into<String>) {
        *self = Self::boolean(value, descriptor);
    }

    pub fn get_string(&self) -> Result<&str, ValueError> {
        match &self.value {
            ObjectValue::String(s) => Ok(s),
            other => Err(self.mismatch(Representation::String, other)),
        }
    }

    pub fn get_integer(&self) -> Result<u64, ValueError> {
        match &self.value {
            ObjectValue::Integer(i) => Ok(*i),
            other => Err(self.mismatch(Representation::Integer, other)),
        }
    }

    pub fn get_boolean(&self) -> Result<bool, ValueError> {
        match &self.value {
            ObjectValue::Boolean(b) => Ok(*b),
            other => Err(self.mismatch(Representation::Boolean, other)),
        }
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    fn mismatch(&self, requested: Representation, found: &ObjectValue) -> ValueError {
        tracing::debug!(kind = %self.kind, %requested, "typed value accessed as wrong representation");
        ValueError::TypeAccessMismatch {
            requested,
            found: found.representation(),
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_access() {
        let value = TypedValue::string(TokenKind::Macro, "@init", "");
        assert_eq!(value.get_string(), Ok("@init"));
        assert_eq!(
            value.get_integer(),
            Err(ValueError::TypeAccessMismatch {
                requested: Representation::Integer,
                found: Representation::String,
            })
        );
        assert!(value.get_boolean().is_err());
    }

    #[test]
    fn test_integer_access() {
        let value = TypedValue::integer(TokenKind::Register, 0x10, "");
        assert_eq!(value.get_integer(), Ok(0x10));
        assert!(value.get_string().is_err());
    }

    #[test]
    fn test_setters_overwrite() {
        let mut value = TypedValue::integer(TokenKind::Uint8, 1, "first");
        value.set_string("label", "renamed");
        assert_eq!(value.kind, TokenKind::Identifier);
        assert_eq!(value.get_string(), Ok("label"));
        assert_eq!(value.descriptor(), "renamed");

        value.set_integer(42, "");
        assert_eq!(value.kind, TokenKind::Uint64);
        assert_eq!(value.get_integer(), Ok(42));

        value.set_boolean(true, "flag");
        assert_eq!(value.kind, TokenKind::Unknown);
        assert_eq!(value.get_boolean(), Ok(true));
        assert_eq!(
            value.get_integer().unwrap_err().to_string(),
            "Mismatched object type: requested integer, holds boolean"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            TypedValue::integer(TokenKind::Register, 0x11, "").to_string(),
            "Register(0x11)"
        );
        assert_eq!(
            TypedValue::string(TokenKind::Identifier, "mov64", "").to_string(),
            "Identifier(mov64)"
        );
    }
}
