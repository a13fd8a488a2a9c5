use nom::{error::VerboseError, IResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

use super::{
    identifier::{parse_identifier, parse_macro},
    literal::{
        parse_quoted_string, parse_register, parse_uint16, parse_uint32, parse_uint64,
        parse_uint8,
    },
};

/// Prefix of a register reference (`r10`).
pub const REGISTER_MARKER: char = 'r';
/// Prefix of a macro reference (`@name`).
pub const MACRO_MARKER: char = '@';

/// The closed set of token kinds.
///
/// The discriminants are the ordinals printed in diagnostics; the variant
/// names double as display names, so the two can never drift apart.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[repr(u8)]
pub enum TokenKind {
    /// Two letters followed by letters, digits or underscores
    Identifier = 0,
    QuotedString = 1,
    /// 9 to 16 hex digits
    Uint64 = 2,
    /// 5 to 8 hex digits
    Uint32 = 3,
    /// 3 or 4 hex digits
    Uint16 = 4,
    /// 1 or 2 hex digits
    Uint8 = 5,
    Register = 6,
    Macro = 7,
    Unknown = 255,
}

impl TokenKind {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Kinds whose text is parsed as a base-16 integer.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::Uint64
                | TokenKind::Uint32
                | TokenKind::Uint16
                | TokenKind::Uint8
                | TokenKind::Register
        )
    }

    /// Kinds kept as their raw matched text.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::QuotedString | TokenKind::Macro
        )
    }

    pub fn all() -> impl Iterator<Item = TokenKind> {
        TokenKind::iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// A token together with the byte range it was scanned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSpan {
    pub token: Token,
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

pub type ParserResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// Recognizes a token at the start of its input and returns the matched text.
pub type Matcher = for<'a> fn(&'a str) -> ParserResult<'a, &'a str>;

#[derive(Clone, Copy)]
pub struct Pattern {
    pub kind: TokenKind,
    pub matcher: Matcher,
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Matchers in priority order. The first one that matches at the scan
/// position wins, whatever the length of later matches would have been.
///
/// 1. quoted string
/// 2. macro reference
/// 3. identifier
/// 4. hex run of 9-16 digits (Uint64)
/// 5. hex run of 5-8 digits (Uint32)
/// 6. hex run of 3-4 digits (Uint16)
/// 7. hex run of 1-2 digits (Uint8)
/// 8. register
pub static PATTERNS: [Pattern; 8] = [
    Pattern {
        kind: TokenKind::QuotedString,
        matcher: parse_quoted_string,
    },
    Pattern {
        kind: TokenKind::Macro,
        matcher: parse_macro,
    },
    Pattern {
        kind: TokenKind::Identifier,
        matcher: parse_identifier,
    },
    Pattern {
        kind: TokenKind::Uint64,
        matcher: parse_uint64,
    },
    Pattern {
        kind: TokenKind::Uint32,
        matcher: parse_uint32,
    },
    Pattern {
        kind: TokenKind::Uint16,
        matcher: parse_uint16,
    },
    Pattern {
        kind: TokenKind::Uint8,
        matcher: parse_uint8,
    },
    Pattern {
        kind: TokenKind::Register,
        matcher: parse_register,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    patterns: &'static [Pattern],
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            patterns: &PATTERNS,
        }
    }

    pub fn with_patterns(patterns: &'static [Pattern]) -> Self {
        Self { patterns }
    }

    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.tokenize_spanned(input)
            .into_iter()
            .map(|span| span.token)
            .collect()
    }

    /// Scans the whole line. Every step consumes at least one character, so
    /// the spans are contiguous and cover `input` exactly.
    #[tracing::instrument(level = "debug", skip(self, input))]
    pub fn tokenize_spanned(&self, input: &str) -> Vec<TokenSpan> {
        let mut spans = Vec::new();
        let mut offset = 0;

        while offset < input.len() {
            let (kind, text) = self.match_at(&input[offset..]);
            let end = offset + text.len();
            spans.push(TokenSpan {
                token: Token::new(kind, text),
                start: offset,
                end,
            });
            offset = end;
        }

        spans
    }

    fn match_at<'a>(&self, remaining: &'a str) -> (TokenKind, &'a str) {
        for pattern in self.patterns {
            if let Ok((_, matched)) = (pattern.matcher)(remaining) {
                if !matched.is_empty() {
                    return (pattern.kind, matched);
                }
            }
        }

        let width = remaining.chars().next().map_or(1, char::len_utf8);
        let unknown = &remaining[..width];
        tracing::trace!(character = unknown, "no pattern matched");
        (TokenKind::Unknown, unknown)
    }
}

pub fn tokenize(input: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(input)
}
