// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! commit-msg - Git hook enforcing ticket-prefixed commit titles.
//!
//! The first line of every commit message must look like
//! `<ticket> <type>: <subject>`:
//!
//! - `ticket`: one or more digits
//! - `type`: one of `add, feat, fix, docs, style, refactor, test, chore`
//! - `subject`: 10 to 50 characters
//!
//! Merge commits (titles starting with "merge", any case) are let through
//! unchecked. The description below the title is never checked.
//!
//! # Example
//!
//! ```
//! use commit_msg::rules::{CommitMessageValidator, Outcome};
//!
//! let validator = CommitMessageValidator::new();
//!
//! let result = validator.validate("123 feat: Agregar nueva funcionalidad");
//! assert_eq!(result.outcome, Outcome::Passed);
//!
//! let result = validator.validate("45 fix: ok");
//! assert_eq!(result.outcome, Outcome::Failed);
//! ```

// Module declarations
pub mod cli;
pub mod commit;
pub mod error;
pub mod rules;

// Re-exports for convenience
pub use error::{CommitMsgError, Result};
pub use rules::{CommitMessageValidator, Outcome, ValidationResult};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of commit-msg.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

}
