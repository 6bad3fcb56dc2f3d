// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure and parsing.

/// Prefix that marks a merge commit, compared case-insensitively.
const MERGE_PREFIX: &str = "merge";

/// A commit message split into its title and description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    /// First line, exactly as written.
    pub title: String,
    /// Remaining lines joined with `\n`, trimmed. Empty when absent.
    pub description: String,
}

impl CommitMessage {
    /// Split raw message text into title and description.
    ///
    /// Never fails: empty input yields an empty title, which the validator
    /// rejects like any other malformed title.
    pub fn parse(raw: &str) -> Self {
        let mut lines = split_lines(raw).into_iter();
        let title = lines.next().unwrap_or("").to_string();
        let description = lines.collect::<Vec<_>>().join("\n").trim().to_string();

        Self { title, description }
    }

    /// Whether the title marks a merge commit.
    pub fn is_merge(&self) -> bool {
        self.title.to_lowercase().starts_with(MERGE_PREFIX)
    }
}

/// Whether `c` ends a line. `\r\n` is handled by the caller as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on every Unicode line boundary.
///
/// A trailing break does not produce an empty last line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
