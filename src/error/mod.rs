// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the commit-msg hook.
//!
//! Format problems are not fatal: they end up as a failed
//! [`ValidationResult`](crate::rules::ValidationResult) carrying a
//! [`ValidationError`] as its reason. Only I/O failures while obtaining the
//! message escape as a [`CommitMsgError`].

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for commit-msg operations.
#[derive(Error, Debug)]
pub enum CommitMsgError {
    // The message file handed over by git could not be read
    #[error("Failed to read commit message from {}: {source}", path.display())]
    MessageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a commit title does not match the required format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Commit title is empty")]
    EmptyTitle,

    #[error("Commit title must start with a ticket number")]
    MissingTicket,

    #[error("Expected exactly one space between the ticket number and the commit type")]
    TicketSpacing,

    #[error("Invalid commit type: '{found}'")]
    UnknownType { found: String },

    #[error("Expected ': ' between the commit type and the subject")]
    MissingSeparator,

    #[error("Subject too short: {length} characters (min: {min})")]
    SubjectTooShort { length: usize, min: usize },

    #[error("Subject too long: {length} characters (max: {max})")]
    SubjectTooLong { length: usize, max: usize },

    #[error("Commit title does not match the required format")]
    InvalidFormat,
}

/// Result type alias for commit-msg operations.
pub type Result<T> = std::result::Result<T, CommitMsgError>;
