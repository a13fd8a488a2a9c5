//! # Tokenizer Component
//!
//! Lexical analysis of a single line of assembler-like input.
//!
//! ## Design Principles
//!
//! * **Priority, not longest match**: matchers are tried in the fixed order of
//!   [`PATTERNS`](token::PATTERNS) and the first one that matches at the scan
//!   position wins. `abc` is an identifier even though it is also a 3-digit
//!   hex run.
//! * **Total**: the tokenizer never fails. A character no matcher accepts
//!   becomes a one-character [`TokenKind::Unknown`](token::TokenKind::Unknown)
//!   token, whitespace included, so the produced tokens always cover the line.
//! * **Raw text**: tokens keep the exact matched text; interpretation (hex
//!   parsing, marker removal) happens in the [`parser`](crate::parser).
//!
//! ## Component Structure
//!
//! * [`token`]: token kinds, the pattern table and the [`Tokenizer`](token::Tokenizer)
//! * [`identifier`]: identifier and macro matchers
//! * [`literal`]: quoted string, hex-run and register matchers
//! * [`comment`]: comment stripping, applied before tokenization
//!
//! ## Usage Example
//!
//! ```rust
//! use tmplparse::tokenizer::token::{Tokenizer, TokenKind};
//!
//! let tokens = Tokenizer::new().tokenize("mov64 r10 r11");
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//! assert_eq!(tokens[2].text, "r10");
//! ```

pub mod comment;
pub mod identifier;
pub mod literal;
pub mod token;
