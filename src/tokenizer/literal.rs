//! Quoted strings and the numeric token shapes: fixed-width hex runs and
//! register references.
//!
//! The hex-run matchers are greedy up to their upper bound and fail below
//! their lower bound, so a run of 19 digits is read as a 16-digit `Uint64`
//! followed by a 3-digit `Uint16`.

use nom::{
    bytes::complete::{take_while, take_while_m_n},
    character::complete::char,
    combinator::recognize,
    error::context,
    sequence::{delimited, pair},
};

use super::token::{ParserResult, REGISTER_MARKER};

pub fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Text between double quotes, delimiters included. No escapes.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_quoted_string(input: &str) -> ParserResult<&str> {
    context(
        "quoted string",
        recognize(delimited(char('"'), take_while(|c: char| c != '"'), char('"'))),
    )(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_uint64(input: &str) -> ParserResult<&str> {
    context("uint64", take_while_m_n(9, 16, is_hex_digit))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_uint32(input: &str) -> ParserResult<&str> {
    context("uint32", take_while_m_n(5, 8, is_hex_digit))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_uint16(input: &str) -> ParserResult<&str> {
    context("uint16", take_while_m_n(3, 4, is_hex_digit))(input)
}

#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_uint8(input: &str) -> ParserResult<&str> {
    context("uint8", take_while_m_n(1, 2, is_hex_digit))(input)
}

/// The register marker followed by any number of hex digits, possibly none.
#[tracing::instrument(level = "debug", skip(input))]
pub fn parse_register(input: &str) -> ParserResult<&str> {
    context(
        "register",
        recognize(pair(char(REGISTER_MARKER), take_while(is_hex_digit))),
    )(input)
}
