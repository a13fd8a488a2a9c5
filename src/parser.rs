//! Line parsing: comment stripping, tokenization, typed-value construction
//! and template validation in one call.

use lazy_static::lazy_static;
use tracing::debug;

use crate::config::ParserConfig;
use crate::error::LineError;
use crate::object::TypedValue;
use crate::template::Template;
use crate::tokenizer::{
    comment::strip_comment,
    token::{Token, TokenKind, Tokenizer, REGISTER_MARKER},
};

/// Descriptor attached to the zero-valued object of a token that failed to parse.
pub const INVALID_NUMBER_DESCRIPTOR: &str = "The value is not a valid hex number";

lazy_static! {
    static ref DEFAULT_PARSER: LineParser = LineParser::default();
}

/// Outcome of [`LineParser::parse_line`].
///
/// `objects` is empty for [`LineError::EmptyInput`] and
/// [`LineError::LengthMismatch`]. For [`LineError::InvalidNumber`] it holds
/// the objects built so far, ending with the failing one; for
/// [`LineError::TypeMismatch`] it holds every object of the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub objects: Vec<TypedValue>,
    pub error: Option<LineError>,
}

impl ParsedLine {
    fn success(objects: Vec<TypedValue>) -> Self {
        Self {
            objects,
            error: None,
        }
    }

    fn failure(objects: Vec<TypedValue>, error: LineError) -> Self {
        Self {
            objects,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Empty on success.
    pub fn error_message(&self) -> String {
        self.error.as_ref().map(ToString::to_string).unwrap_or_default()
    }

    pub fn into_parts(self) -> (Vec<TypedValue>, bool, String) {
        let success = self.is_success();
        let message = self.error_message();
        (self.objects, success, message)
    }

    pub fn into_result(self) -> Result<Vec<TypedValue>, LineError> {
        match self.error {
            None => Ok(self.objects),
            Some(error) => Err(error),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct LineParser {
    config: ParserConfig,
    tokenizer: Tokenizer,
}

impl LineParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Scans `text` and checks the result against `template`.
    #[tracing::instrument(level = "debug", skip(self, template))]
    pub fn parse_line(&self, text: &str, template: &Template) -> ParsedLine {
        let folded;
        let text = if self.config.fold_case {
            folded = text.to_ascii_lowercase();
            folded.as_str()
        } else {
            text
        };

        let tokens = self
            .tokenizer
            .tokenize(strip_comment(text, self.config.comment_delimiter));
        if tokens.iter().all(|t| t.kind == TokenKind::Unknown) {
            debug!("no tokens found");
            return ParsedLine::failure(Vec::new(), LineError::EmptyInput);
        }

        let mut objects = Vec::with_capacity(template.len());
        for token in &tokens {
            match to_object(token) {
                None => continue,
                Some(Ok(object)) => objects.push(object),
                Some(Err(error)) => {
                    debug!(kind = %token.kind, text = %token.text, "invalid number");
                    objects.push(TypedValue::integer(token.kind, 0, INVALID_NUMBER_DESCRIPTOR));
                    return ParsedLine::failure(objects, error);
                }
            }
        }

        match template.validate(&objects) {
            Ok(()) => {
                debug!(objects = objects.len(), "line matches template");
                ParsedLine::success(objects)
            }
            Err(error @ LineError::LengthMismatch { .. }) => {
                debug!(%error, "template length mismatch");
                ParsedLine::failure(Vec::new(), error)
            }
            Err(error) => {
                debug!(%error, "template type mismatch");
                ParsedLine::failure(objects, error)
            }
        }
    }
}

/// Parses `text` with the default configuration.
pub fn parse_line(text: &str, template: &Template) -> ParsedLine {
    DEFAULT_PARSER.parse_line(text, template)
}

/// `None` for unknown tokens, which take no template slot.
fn to_object(token: &Token) -> Option<Result<TypedValue, LineError>> {
    let digits = match token.kind {
        TokenKind::Unknown => return None,
        TokenKind::Identifier | TokenKind::QuotedString | TokenKind::Macro => {
            return Some(Ok(TypedValue::string(token.kind, token.text.as_str(), "")));
        }
        TokenKind::Register => token
            .text
            .strip_prefix(REGISTER_MARKER)
            .unwrap_or(token.text.as_str()),
        TokenKind::Uint64 | TokenKind::Uint32 | TokenKind::Uint16 | TokenKind::Uint8 => {
            token.text.as_str()
        }
    };
    Some(parse_hex(token.kind, digits).map(|v| TypedValue::integer(token.kind, v, "")))
}

/// Every numeric kind is read as a full 64-bit value; the matcher bounds
/// already keep UintN tokens within N bits.
fn parse_hex(kind: TokenKind, digits: &str) -> Result<u64, LineError> {
    u64::from_str_radix(digits, 16).map_err(|_| LineError::InvalidNumber {
        kind,
        text: digits.to_string(),
    })
}
