// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

/// commit-msg - Git hook enforcing ticket-prefixed commit titles
///
/// Checks that the first line of the commit message looks like
/// `<ticket> <type>: <subject>`, e.g. `123 feat: Agregar nueva funcionalidad`.
#[derive(Parser, Debug)]
#[command(name = "commit-msg")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Git commit-msg hook enforcing ticket-prefixed commit titles", long_about = None)]
pub struct Cli {
    /// Path to the file holding the commit message (passed by git)
    #[arg(value_name = "MESSAGE_FILE", required_unless_present = "list_types")]
    pub message_file: Option<PathBuf>,

    /// Output format for machine-readable output
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print nothing when the message passes
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// List the allowed commit types and exit
    #[arg(long)]
    pub list_types: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_message_file() {
        let args = Cli::parse_from(["commit-msg", ".git/COMMIT_EDITMSG"]);
        assert_eq!(
            args.message_file,
            Some(PathBuf::from(".git/COMMIT_EDITMSG"))
        );
        assert!(args.format.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_message_file_required() {
        assert!(Cli::try_parse_from(["commit-msg"]).is_err());
    }

    #[test]
    fn test_single_positional() {
        assert!(Cli::try_parse_from(["commit-msg", "a", "b"]).is_err());
    }

    #[test]
    fn test_list_types_without_file() {
        let args = Cli::parse_from(["commit-msg", "--list-types"]);
        assert!(args.list_types);
        assert!(args.message_file.is_none());
    }

    #[test]
    fn test_flags() {
        let args = Cli::parse_from(["commit-msg", "-q", "-d", "--format", "json", "msg.txt"]);
        assert!(args.quiet);
        assert!(args.debug);
        assert_eq!(args.format, Some(OutputFormat::Json));
    }
}
