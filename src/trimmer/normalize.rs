//! # Line Rejoining
//!
//! Terminals hard-wrap long lines when a chat transcript is rendered, and a copy from
//! the scrollback keeps those wraps as real newlines (plus the indentation the UI drew).
//! [`clean_text`] undoes that: every line is trimmed, and each line is folded into the
//! one before it unless it looks like the start of something new.
//!
//! The decision between two lines is made by [`line_break`], a first-match-wins list of
//! rules. The rules overlap (a line can both start with an uppercase letter after a
//! sentence end *and* be a closing delimiter), so their order is part of the contract:
//!
//! 1. Paragraph break: either line is empty.
//! 2. List marker: the next line starts with `- * • > #` or a digit.
//! 3. New sentence: the current line ends with `. ! ? : " ' )` and the next line starts
//!    uppercase.
//! 4. Closing delimiter: the next line is exactly `EOF ) } ] ``` ''' """`. A line that
//!    is exactly one of those tokens is never extended either, so cleaning twice gives the
//!    same result as cleaning once.
//! 5. Opening delimiter: the current line ends with `( { [ <<EOF <<'EOF'`.
//!
//! Anything else is a continuation and is appended after a single space.

use tracing::trace;

const LIST_MARKERS: &[char] = &[
    '-', '*', '•', '>', '#', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
];
const SENTENCE_ENDINGS: &[char] = &['.', '!', '?', ':', '"', '\'', ')'];
const CLOSING_DELIMITERS: &[&str] = &["EOF", ")", "}", "]", "```", "'''", "\"\"\""];
const OPENING_DELIMITERS: &[&str] = &["(", "{", "[", "<<EOF", "<<'EOF'"];

/// Why two adjacent lines were kept apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineBreak {
    ParagraphBreak,
    ListMarker,
    NewSentence,
    ClosingDelimiter,
    OpeningDelimiter,
}

/// Decides whether `next` starts a new line after `current`.
///
/// Both lines are expected to be trimmed already. Returns `None` when `next`
/// is a continuation of `current`.
pub fn line_break(current: &str, next: &str) -> Option<LineBreak> {
    let first = match next.chars().next() {
        Some(c) if !current.is_empty() => c,
        _ => return Some(LineBreak::ParagraphBreak),
    };

    if LIST_MARKERS.contains(&first) {
        return Some(LineBreak::ListMarker);
    }

    if current.ends_with(SENTENCE_ENDINGS) && first.is_uppercase() {
        return Some(LineBreak::NewSentence);
    }

    if CLOSING_DELIMITERS.contains(&next) || CLOSING_DELIMITERS.contains(&current) {
        return Some(LineBreak::ClosingDelimiter);
    }

    if OPENING_DELIMITERS
        .iter()
        .any(|token| current.ends_with(token))
    {
        return Some(LineBreak::OpeningDelimiter);
    }

    None
}

/// Returns true when the text has no content once surrounding whitespace is removed.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Trims every line and rejoins lines that were wrapped by the terminal.
///
/// Leading and trailing blank lines are dropped; interior blank lines are kept
/// as paragraph breaks. Whitespace-only input yields an empty string.
pub fn clean_text(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').map(str::trim).collect();

    let Some(start) = lines.iter().position(|line| !line.is_empty()) else {
        return String::new();
    };
    // A non-empty line exists, so rposition always finds one at or after `start`.
    let end = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(start, |i| i + 1);

    let mut result: Vec<String> = Vec::new();
    let mut remaining = lines[start..end].iter().copied().peekable();

    while let Some(first) = remaining.next() {
        let mut current = first.to_string();

        while let Some(&next) = remaining.peek() {
            if let Some(reason) = line_break(&current, next) {
                trace!(?reason, next, "keeping line break");
                break;
            }
            current.push(' ');
            current.push_str(next);
            remaining.next();
        }

        result.push(current);
    }

    result.join("\n")
}
