// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validation result types.

use crate::cli::args::OutputFormat;
use crate::error::ValidationError;
use console::style;
use serde::Serialize;

/// Final decision for a commit message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The title matches the required format.
    Passed,
    /// Merge commit, format not checked.
    MergeSkipped,
    /// The title does not match the required format.
    Failed,
}

impl Outcome {
    /// Whether the commit may proceed.
    pub fn is_pass(&self) -> bool {
        !matches!(self, Outcome::Failed)
    }

    /// Process exit code for the hook.
    pub fn exit_code(&self) -> i32 {
        if self.is_pass() {
            0
        } else {
            1
        }
    }
}

/// Details of a format failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Why the title does not match.
    pub reason: ValidationError,
    /// Expected structure of the title.
    pub expected: String,
    /// A title that would pass.
    pub example: String,
}

impl ValidationIssue {
    /// Format the issue for terminal output, echoing the offending title.
    pub fn format(&self, title: &str) -> String {
        format!(
            "{} ERROR! The commit message must have the following structure:\n\
             {}\n\
             Example {}: {}\n\
             Current commit title: {}\n\
             {} {}",
            style("✗").red().bold(),
            style(&self.expected).cyan(),
            style("✓").green(),
            self.example,
            style(title).yellow(),
            style("Reason:").dim(),
            self.reason,
        )
    }
}

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    /// The title that was checked.
    pub title: String,
    /// The decision.
    pub outcome: Outcome,
    /// Failure details, present only when the outcome is [`Outcome::Failed`].
    pub issue: Option<ValidationIssue>,
}

impl ValidationResult {
    /// A passing result.
    pub fn passed(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outcome: Outcome::Passed,
            issue: None,
        }
    }

    /// A merge-bypass result.
    pub fn merge_skipped(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outcome: Outcome::MergeSkipped,
            issue: None,
        }
    }

    /// A failing result.
    pub fn failed(title: impl Into<String>, issue: ValidationIssue) -> Self {
        Self {
            title: title.into(),
            outcome: Outcome::Failed,
            issue: Some(issue),
        }
    }

    /// Check if the validation passed (including merge bypass).
    pub fn is_valid(&self) -> bool {
        self.outcome.is_pass()
    }

    /// Human-readable report.
    pub fn report(&self) -> String {
        match (self.outcome, &self.issue) {
            (Outcome::Passed, _) => format!(
                "{} Commit message matches the required format.",
                style("✓").green().bold()
            ),
            (Outcome::MergeSkipped, _) => format!(
                "{} Merge commit detected, format validation skipped.",
                style("ℹ").blue().bold()
            ),
            (Outcome::Failed, Some(issue)) => issue.format(&self.title),
            (Outcome::Failed, None) => format!(
                "{} Commit title does not match the required format: {}",
                style("✗").red().bold(),
                self.title
            ),
        }
    }

    /// Machine-readable report.
    pub fn to_json(&self) -> serde_json::Value {
        let (message, reason, expected, example) = match &self.issue {
            Some(issue) => (
                "Commit title does not match the required format",
                Some(issue.reason.to_string()),
                Some(issue.expected.as_str()),
                Some(issue.example.as_str()),
            ),
            None if self.outcome == Outcome::MergeSkipped => (
                "Merge commit detected, format validation skipped",
                None,
                None,
                None,
            ),
            None => ("Commit message matches the required format", None, None, None),
        };

        serde_json::json!({
            "valid": self.is_valid(),
            "outcome": self.outcome,
            "title": self.title,
            "message": message,
            "reason": reason,
            "expected": expected,
            "example": example,
        })
    }

    /// Print the result to stdout.
    pub fn print(&self, format: Option<OutputFormat>) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => println!("{}", self.report()),
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.to_json()).unwrap_or_default()
        );
    }
}
