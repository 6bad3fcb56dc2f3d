// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message validation.

use std::path::Path;

use crate::commit::CommitMessage;
use crate::error::{CommitMsgError, Result, ValidationError};

use super::pattern::{TitlePattern, EXAMPLE_TITLE};
use super::validator::{ValidationIssue, ValidationResult};

/// Validator deciding whether a commit message may be committed.
///
/// Stateless: validating the same text twice yields the same result.
#[derive(Debug, Clone, Default)]
pub struct CommitMessageValidator {
    pattern: TitlePattern,
}

impl CommitMessageValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate raw commit message text.
    pub fn validate(&self, raw: &str) -> ValidationResult {
        self.validate_message(&CommitMessage::parse(raw))
    }

    /// Validate an already split commit message.
    ///
    /// Only the title is checked; the description never affects the result.
    pub fn validate_message(&self, message: &CommitMessage) -> ValidationResult {
        let title = message.title.as_str();

        if message.is_merge() {
            tracing::info!("Merge commit detected, skipping format validation");
            return ValidationResult::merge_skipped(title);
        }

        if self.pattern.is_match(title) {
            if let Some(parsed) = self.pattern.captures(title) {
                tracing::debug!(
                    "Title accepted: ticket #{}, type {}, subject {:?}",
                    parsed.ticket,
                    parsed.commit_type,
                    parsed.subject
                );
            }
            return ValidationResult::passed(title);
        }

        let reason = self
            .pattern
            .diagnose(title)
            .unwrap_or(ValidationError::InvalidFormat);
        tracing::debug!("Title rejected ({}): {:?}", reason, title);

        ValidationResult::failed(
            title,
            ValidationIssue {
                reason,
                expected: self.pattern.expected_format(),
                example: EXAMPLE_TITLE.to_string(),
            },
        )
    }

    /// Read the message file git hands to the hook and validate it.
    pub fn validate_file(&self, path: &Path) -> Result<ValidationResult> {
        tracing::debug!("Reading commit message from: {:?}", path);

        let raw = std::fs::read_to_string(path).map_err(|source| CommitMsgError::MessageRead {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Read {} bytes", raw.len());
        Ok(self.validate(&raw))
    }
}
