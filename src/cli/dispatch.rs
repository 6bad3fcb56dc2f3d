// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::commit::CommitType;
use crate::error::Result;
use crate::rules::{CommitMessageValidator, Outcome};
use console::style;

use super::args::Cli;

/// Run the hook with the given arguments and return the decision.
pub fn run(cli: Cli) -> Result<Outcome> {
    tracing::debug!("commit-msg {}", crate::version::version_string());

    if cli.list_types {
        run_list_types();
        return Ok(Outcome::Passed);
    }

    // clap enforces the path unless --list-types was given
    let Some(path) = cli.message_file.as_deref() else {
        return Ok(Outcome::Passed);
    };

    let validator = CommitMessageValidator::new();
    let result = validator.validate_file(path)?;

    if !(cli.quiet && result.is_valid()) {
        result.print(cli.format);
    }

    tracing::debug!("Outcome: {:?}", result.outcome);
    Ok(result.outcome)
}

/// Print the allowed commit types.
fn run_list_types() {
    for commit_type in CommitType::all() {
        println!(
            "{} {}",
            style(format!("{:<10}", commit_type.as_str())).cyan(),
            commit_type.description()
        );
    }
}
