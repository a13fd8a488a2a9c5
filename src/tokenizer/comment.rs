/// Starts a comment that runs to the end of the line.
pub const COMMENT_DELIMITER: char = ';';

/// Returns the part of `line` before the first `delimiter`.
///
/// There is no escaping: a delimiter inside a quoted string still ends the
/// line.
pub fn strip_comment(line: &str, delimiter: char) -> &str {
    match line.find(delimiter) {
        Some(pos) => &line[..pos],
        None => line,
    }
}
