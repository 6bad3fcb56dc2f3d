// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Rule module for commit validation.
//!
//! This module holds the required title format and the validator that
//! applies it to a commit message.

mod engine;
mod pattern;
mod validator;

pub use engine::CommitMessageValidator;
pub use pattern::{
    ParsedTitle, TitlePattern, EXAMPLE_TITLE, MAX_SUBJECT_LENGTH, MIN_SUBJECT_LENGTH,
};
pub use validator::{Outcome, ValidationIssue, ValidationResult};
