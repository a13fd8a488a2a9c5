use nom::{
    bytes::complete::take_while,
    character::complete::{char, satisfy},
    combinator::recognize,
    error::context,
    sequence::tuple,
};

use super::token::{ParserResult, MACRO_MARKER};

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Two letters, then letters, digits or underscores.
///
/// Requiring two leading letters keeps short hex runs (`a`, `f0`) and
/// register references (`r1`) out of the identifier space.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_identifier(input: &str) -> ParserResult<&str> {
    context(
        "identifier",
        recognize(tuple((
            satisfy(|c| c.is_ascii_alphabetic()),
            satisfy(|c| c.is_ascii_alphabetic()),
            take_while(is_word_char),
        ))),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_macro(input: &str) -> ParserResult<&str> {
    context(
        "macro",
        recognize(tuple((
            char(MACRO_MARKER),
            satisfy(|c| c.is_ascii_alphabetic()),
            take_while(is_word_char),
        ))),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let (rest, text) = parse_identifier("my_var123 other").unwrap();
        assert_eq!(text, "my_var123");
        assert_eq!(rest, " other");

        assert_eq!(parse_identifier("ab").unwrap().1, "ab");
        assert!(parse_identifier("a1").is_err());
        assert!(parse_identifier("_ab").is_err());
        assert!(parse_identifier("a_b").is_err());
    }

    #[test]
    fn test_macro() {
        let (rest, text) = parse_macro("@setup_2(").unwrap();
        assert_eq!(text, "@setup_2");
        assert_eq!(rest, "(");

        assert_eq!(parse_macro("@x").unwrap().1, "@x");
        assert!(parse_macro("@_x").is_err());
        assert!(parse_macro("x").is_err());
    }
}
