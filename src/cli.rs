//! CLI argument definitions.

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `devteam`.
#[derive(Debug, Parser)]
#[command(name = "devteam", version, about = "Generate AI task prompts and codebase summaries")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk the questionnaire and generate a task prompt.
    Feature {
        /// Task title; asked interactively when omitted.
        name: Option<String>,
    },
    /// Generate the backend summary JSON.
    BackendSummary {
        /// Output path relative to the project root.
        #[arg(long)]
        output: Option<String>,
    },
    /// Generate the frontend summary JSON.
    FrontendSummary {
        /// Output path relative to the project root.
        #[arg(long)]
        output: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_feature_with_name() {
        let cli = Cli::parse_from(["devteam", "feature", "Login Page"]);
        match cli.command {
            Command::Feature { name } => assert_eq!(name.as_deref(), Some("Login Page")),
            _ => panic!("expected feature command"),
        }
    }

    #[test]
    fn parses_feature_without_name() {
        let cli = Cli::parse_from(["devteam", "feature"]);
        assert!(matches!(cli.command, Command::Feature { name: None }));
    }

    #[test]
    fn parses_summary_output_flags() {
        let cli = Cli::parse_from(["devteam", "backend-summary", "--output", "out.json"]);
        match cli.command {
            Command::BackendSummary { output } => assert_eq!(output.as_deref(), Some("out.json")),
            _ => panic!("expected backend-summary command"),
        }

        let cli = Cli::parse_from(["devteam", "frontend-summary"]);
        assert!(matches!(cli.command, Command::FrontendSummary { output: None }));
    }
}
