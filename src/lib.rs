//! # tmplparse: line tokenizer and template validator
//!
//! `tmplparse` reads one line of assembler-like input (`mov64 r10 r11`),
//! splits it into a small fixed vocabulary of tokens and checks the result
//! against a caller-supplied template of expected token kinds.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Line → Case folding → Comment stripping → Tokenizer → Typed values → Template check
//! ```
//!
//! ### Tokenization
//!
//! The [`tokenizer`] module scans the line with an ordered table of matchers
//! (quoted string, macro, identifier, four hex widths, register). The first
//! matcher that accepts the input at the scan position wins.
//!
//! ### Typed values
//!
//! The [`parser`] turns each recognized token into an [`object::TypedValue`]:
//! textual kinds keep their matched text, numeric kinds are read as base-16
//! integers. Unknown characters, whitespace included, are dropped.
//!
//! ### Template check
//!
//! A [`template::Template`] lists the expected kind of every position. The
//! line must produce exactly as many values as the template has entries, with
//! matching kinds in the same order.
//!
//! ## Example
//!
//! ```rust
//! use tmplparse::{parse_line, Template, TokenKind};
//!
//! let template = Template::new()
//!     .expect(TokenKind::Identifier, "Expected an identifier")
//!     .expect(TokenKind::Register, "Expected a destination register")
//!     .expect(TokenKind::Register, "Expected a source register");
//!
//! let parsed = parse_line("mov64 r10 r11 ; copy", &template);
//! assert!(parsed.is_success());
//! assert_eq!(parsed.objects[1].get_integer(), Ok(0x10));
//! ```

pub mod config;
pub mod error;
pub mod object;
pub mod parser;
pub mod template;
pub mod tokenizer;

// Re-exports
pub use error::*;
pub use object::{ObjectValue, Representation, TypedValue};
pub use parser::{parse_line, LineParser, ParsedLine};
pub use template::{Template, TemplateEntry};
pub use tokenizer::token::{tokenize, Token, TokenKind, TokenSpan, Tokenizer};

#[cfg(test)]
mod tests {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    #[ctor::ctor]
    fn init_tests() {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
    }
}
