//! Core library for the `devteam` CLI: an interactive task-prompt generator
//! and regex-based codebase summarizer.

pub mod adapters;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod extract;
pub mod feature;
pub mod ports;
pub mod scan;
pub mod summary;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // Help and version requests print to stdout and exit cleanly.
        Err(err) if !err.use_stderr() => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["devteam", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_on_missing_subcommand() {
        let result = run(["devteam"]);
        assert!(result.is_err());
    }
}
