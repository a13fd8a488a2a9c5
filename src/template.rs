//! Caller-supplied shape of a line.

use serde::{Deserialize, Serialize};

use crate::error::LineError;
use crate::object::TypedValue;
use crate::tokenizer::token::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub expected_kind: TokenKind,
    /// Appended to the type-mismatch message for this position.
    pub error_label: String,
}

impl TemplateEntry {
    pub fn new(expected_kind: TokenKind, error_label: impl Into<String>) -> Self {
        Self {
            expected_kind,
            error_label: error_label.into(),
        }
    }
}

/// Ordered expectation of token kinds, matched 1:1 by position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Template {
    entries: Vec<TemplateEntry>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect(mut self, kind: TokenKind, error_label: impl Into<String>) -> Self {
        self.entries.push(TemplateEntry::new(kind, error_label));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Checks the count first, then each position's kind. Only the kinds of
    /// `objects` are looked at.
    pub fn validate(&self, objects: &[TypedValue]) -> Result<(), LineError> {
        if objects.len() != self.entries.len() {
            return Err(LineError::LengthMismatch {
                objects: objects.len(),
                template: self.entries.len(),
            });
        }

        for (position, (object, entry)) in objects.iter().zip(&self.entries).enumerate() {
            if object.kind != entry.expected_kind {
                return Err(LineError::TypeMismatch {
                    position,
                    expected: entry.expected_kind,
                    found: object.kind,
                    label: entry.error_label.clone(),
                });
            }
        }

        Ok(())
    }
}

impl FromIterator<TemplateEntry> for Template {
    fn from_iter<I: IntoIterator<Item = TemplateEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Template {
    type Item = &'a TemplateEntry;
    type IntoIter = std::slice::Iter<'a, TemplateEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
