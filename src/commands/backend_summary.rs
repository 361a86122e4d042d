//! `backend-summary` command: scan the project and write the backend JSON.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::summary;

/// Default output path, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "devteam/contexts/backend-summary.json";

/// Generates the backend summary and writes it under the project root.
///
/// # Errors
///
/// Returns an error string if serialization or the output write fails.
/// Scan failures never surface here; they only leave sections empty.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    output: Option<&str>,
) -> Result<(), String> {
    println!("Generating application summary...");

    let config = Config::load(ctx.fs.as_ref(), root);
    let doc = summary::backend::generate(ctx.fs.as_ref(), root, &config);
    let text = summary::to_pretty_json(&doc)
        .map_err(|e| format!("Failed to serialize backend summary: {e}"))?;

    let path = root.join(output.unwrap_or(DEFAULT_OUTPUT));
    ctx.fs
        .write(&path, &text)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    println!("Summary generated successfully at {}", path.display());
    Ok(())
}
