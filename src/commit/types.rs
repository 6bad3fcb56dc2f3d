// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The closed set of commit type tags.

use std::fmt;

/// Commit type tag placed between the ticket number and the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitType {
    Add,
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
}

impl CommitType {
    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        match self {
            CommitType::Add => "add",
            CommitType::Feat => "feat",
            CommitType::Fix => "fix",
            CommitType::Docs => "docs",
            CommitType::Style => "style",
            CommitType::Refactor => "refactor",
            CommitType::Test => "test",
            CommitType::Chore => "chore",
        }
    }

    /// Get a description of the commit type.
    pub fn description(&self) -> &'static str {
        match self {
            CommitType::Add => "Adding new files or resources",
            CommitType::Feat => "A new feature",
            CommitType::Fix => "A bug fix",
            CommitType::Docs => "Documentation only changes",
            CommitType::Style => "Code style changes (formatting, whitespace)",
            CommitType::Refactor => "Code refactoring (no feature/fix)",
            CommitType::Test => "Adding or updating tests",
            CommitType::Chore => "Build process or auxiliary tool changes",
        }
    }

    /// Get all commit types, in the order they are presented to users.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Add,
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Test,
            CommitType::Chore,
        ]
    }

    /// All tags joined with `sep`, e.g. `add|feat|fix|...`.
    pub fn joined(sep: &str) -> String {
        Self::all()
            .iter()
            .map(CommitType::as_str)
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CommitType {
    type Err = ();

    // Tags are matched exactly: no aliases, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or(())
    }
}
