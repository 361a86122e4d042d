//! Command dispatch and handlers.

pub mod backend_summary;
pub mod feature;
pub mod frontend_summary;

use std::path::PathBuf;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler, with live adapters and the
/// current directory as the project root.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let ctx = ServiceContext::live();
    let root = project_root()?;
    dispatch_with_context(command, &ctx, &root)
}

/// Dispatch a command with the given service context and project root.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    root: &std::path::Path,
) -> Result<(), String> {
    match command {
        Command::Feature { name } => feature::run_with_context(ctx, root, name.as_deref()),
        Command::BackendSummary { output } => {
            backend_summary::run_with_context(ctx, root, output.as_deref())
        }
        Command::FrontendSummary { output } => {
            frontend_summary::run_with_context(ctx, root, output.as_deref())
        }
    }
}

fn project_root() -> Result<PathBuf, String> {
    std::env::current_dir().map_err(|e| format!("Failed to determine working directory: {e}"))
}
