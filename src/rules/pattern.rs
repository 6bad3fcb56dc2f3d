// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The title format every non-merge commit must follow.
//!
//! ```text
//! <ticket> <type>: <subject>
//! 123 feat: Agregar nueva funcionalidad
//! ```
//!
//! The ticket is one or more ASCII digits, the type is one of
//! [`CommitType::all`], and the subject is 10 to 50 characters running to the
//! end of the line.

use crate::commit::CommitType;
use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

/// Minimum subject length in characters.
pub const MIN_SUBJECT_LENGTH: usize = 10;

/// Maximum subject length in characters.
pub const MAX_SUBJECT_LENGTH: usize = 50;

/// A title that passes, shown in failure diagnostics.
pub const EXAMPLE_TITLE: &str = "123 feat: Agregar nueva funcionalidad";

lazy_static! {
    /// Anchored title regex, built from the commit type set.
    static ref TITLE_REGEX: Regex = Regex::new(&format!(
        r"^(?P<ticket>[0-9]+) (?P<type>{}): (?P<subject>.{{{},{}}})$",
        CommitType::joined("|"),
        MIN_SUBJECT_LENGTH,
        MAX_SUBJECT_LENGTH,
    ))
    .unwrap();
}

/// A title broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTitle {
    /// Ticket reference digits, unbounded in length.
    pub ticket: String,
    pub commit_type: CommitType,
    pub subject: String,
}

/// Matcher for the required title format.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitlePattern;

impl TitlePattern {
    /// Whether the whole title matches.
    pub fn is_match(&self, title: &str) -> bool {
        TITLE_REGEX.is_match(title)
    }

    /// Split a matching title into its parts, or `None` if it does not match.
    pub fn captures(&self, title: &str) -> Option<ParsedTitle> {
        let caps = TITLE_REGEX.captures(title)?;
        let commit_type = caps.name("type")?.as_str().parse::<CommitType>().ok()?;

        Some(ParsedTitle {
            ticket: caps.name("ticket")?.as_str().to_string(),
            commit_type,
            subject: caps.name("subject")?.as_str().to_string(),
        })
    }

    /// The expected structure, as shown to users.
    pub fn expected_format(&self) -> String {
        format!("<#ticket> <type:{{{}}}>: <title>", CommitType::joined("|"))
    }

    /// Explain why `title` does not match.
    ///
    /// Only used to enrich the failure report: the decision itself is made by
    /// [`TitlePattern::is_match`]. Returns `None` for a matching title.
    pub fn diagnose(&self, title: &str) -> Option<ValidationError> {
        if self.is_match(title) {
            return None;
        }

        if title.is_empty() {
            return Some(ValidationError::EmptyTitle);
        }

        let rest = title.trim_start_matches(|c: char| c.is_ascii_digit());
        if rest.len() == title.len() {
            return Some(ValidationError::MissingTicket);
        }

        let rest = match rest.strip_prefix(' ') {
            Some(r) if !r.starts_with(char::is_whitespace) => r,
            _ => return Some(ValidationError::TicketSpacing),
        };

        let Some((type_str, after_colon)) = rest.split_once(':') else {
            return Some(ValidationError::MissingSeparator);
        };

        if type_str.parse::<CommitType>().is_err() {
            return Some(ValidationError::UnknownType {
                found: type_str.to_string(),
            });
        }

        let Some(subject) = after_colon.strip_prefix(' ') else {
            return Some(ValidationError::MissingSeparator);
        };

        let length = subject.chars().count();
        if length < MIN_SUBJECT_LENGTH {
            return Some(ValidationError::SubjectTooShort {
                length,
                min: MIN_SUBJECT_LENGTH,
            });
        }
        if length > MAX_SUBJECT_LENGTH {
            return Some(ValidationError::SubjectTooLong {
                length,
                max: MAX_SUBJECT_LENGTH,
            });
        }

        Some(ValidationError::InvalidFormat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_with_subject_len(len: usize) -> String {
        format!("10 chore: {}", "x".repeat(len))
    }

    #[test]
    fn test_matches_example() {
        assert!(TitlePattern.is_match(EXAMPLE_TITLE));
    }

    #[test]
    fn test_every_type_matches() {
        for t in CommitType::all() {
            let title = format!("1 {}: Something meaningful", t);
            assert!(TitlePattern.is_match(&title), "{title}");
        }
    }

    #[test]
    fn test_subject_length_boundaries() {
        assert!(!TitlePattern.is_match(&title_with_subject_len(9)));
        assert!(TitlePattern.is_match(&title_with_subject_len(10)));
        assert!(TitlePattern.is_match(&title_with_subject_len(50)));
        assert!(!TitlePattern.is_match(&title_with_subject_len(51)));
    }

    #[test]
    fn test_subject_length_counts_chars_not_bytes() {
        // 10 two-byte characters
        assert!(TitlePattern.is_match(&format!("1 feat: {}", "ñ".repeat(10))));
        assert!(TitlePattern.is_match(&format!("1 feat: {}", "ñ".repeat(50))));
        assert!(!TitlePattern.is_match(&format!("1 feat: {}", "ñ".repeat(51))));
    }

    #[test]
    fn test_ticket_rules() {
        assert!(TitlePattern.is_match("12345678901234567890 fix: Arreglar el login"));
        assert!(!TitlePattern.is_match("fix: Arreglar el login"));
        assert!(!TitlePattern.is_match("#12 fix: Arreglar el login"));
        assert!(!TitlePattern.is_match("99feat: Missing space before type"));
        assert!(!TitlePattern.is_match("99  feat: Two spaces before the type"));
    }

    #[test]
    fn test_type_is_case_sensitive() {
        assert!(!TitlePattern.is_match("1 Feat: Agregar nueva funcionalidad"));
        assert!(!TitlePattern.is_match("1 FIX: Agregar nueva funcionalidad"));
        assert!(!TitlePattern.is_match("7 oops: Something here"));
    }

    #[test]
    fn test_anchored_at_both_ends() {
        assert!(!TitlePattern.is_match(" 1 feat: Agregar nueva funcionalidad"));
        assert!(!TitlePattern.is_match(&format!("1 feat: {} ", "x".repeat(50))));
        assert!(!TitlePattern.is_match("1 feat:Agregar nueva funcionalidad"));
    }

    #[test]
    fn test_subject_allows_any_characters() {
        assert!(TitlePattern.is_match("5 fix: v2.0: handle `null` (again)!"));
    }

    #[test]
    fn test_captures() {
        let parsed = TitlePattern.captures(EXAMPLE_TITLE).unwrap();
        assert_eq!(parsed.ticket, "123");
        assert_eq!(parsed.commit_type, CommitType::Feat);
        assert_eq!(parsed.subject, "Agregar nueva funcionalidad");

        assert!(TitlePattern.captures("45 fix: ok").is_none());
    }

    #[test]
    fn test_expected_format() {
        assert_eq!(
            TitlePattern.expected_format(),
            "<#ticket> <type:{add|feat|fix|docs|style|refactor|test|chore}>: <title>"
        );
    }

    #[test]
    fn test_diagnose_matching_title() {
        assert_eq!(TitlePattern.diagnose(EXAMPLE_TITLE), None);
    }

    #[test]
    fn test_diagnose_reasons() {
        let p = TitlePattern;
        assert_eq!(p.diagnose(""), Some(ValidationError::EmptyTitle));
        assert_eq!(
            p.diagnose("feat: Agregar nueva funcionalidad"),
            Some(ValidationError::MissingTicket)
        );
        assert_eq!(
            p.diagnose("99feat: Missing space before type"),
            Some(ValidationError::TicketSpacing)
        );
        assert_eq!(
            p.diagnose("99  feat: Two spaces before type"),
            Some(ValidationError::TicketSpacing)
        );
        assert_eq!(
            p.diagnose("7 oops: Something here"),
            Some(ValidationError::UnknownType {
                found: "oops".to_string()
            })
        );
        assert_eq!(
            p.diagnose("7 feat Something here"),
            Some(ValidationError::MissingSeparator)
        );
        assert_eq!(
            p.diagnose("7 feat:Something here"),
            Some(ValidationError::MissingSeparator)
        );
        assert_eq!(
            p.diagnose("45 fix: ok"),
            Some(ValidationError::SubjectTooShort { length: 2, min: 10 })
        );
        assert_eq!(
            p.diagnose(&title_with_subject_len(51)),
            Some(ValidationError::SubjectTooLong { length: 51, max: 50 })
        );
    }
}
