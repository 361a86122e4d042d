//! `frontend-summary` command: scan UI assets and write the frontend JSON.

use std::path::Path;

use crate::config::Config;
use crate::context::ServiceContext;
use crate::summary;

/// Default output path, relative to the project root.
pub const DEFAULT_OUTPUT: &str = "devteam/contexts/frontend-summary.json";

/// Generates the frontend summary and writes it under the project root.
///
/// # Errors
///
/// Returns an error string if serialization or the output write fails.
pub fn run_with_context(
    ctx: &ServiceContext,
    root: &Path,
    output: Option<&str>,
) -> Result<(), String> {
    println!("Generating frontend summary...");

    let config = Config::load(ctx.fs.as_ref(), root);
    let doc = summary::frontend::generate(ctx.fs.as_ref(), root, &config);
    let text = summary::to_pretty_json(&doc)
        .map_err(|e| format!("Failed to serialize frontend summary: {e}"))?;

    let path = root.join(output.unwrap_or(DEFAULT_OUTPUT));
    ctx.fs
        .write(&path, &text)
        .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

    println!("Frontend summary generated successfully at {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{FixedClock, MemoryFileSystem, ScriptedChatClient, ScriptedConsole};

    #[test]
    fn writes_summary_to_default_path() {
        let fs = MemoryFileSystem::with_files(&[(
            "/project/resources/js/components/Badge.vue",
            "<template><span /></template>",
        )]);
        let ctx = ServiceContext::scripted(
            Box::new(fs),
            Box::new(ScriptedChatClient::replying("[]")),
            Box::new(ScriptedConsole::new()),
            Box::new(FixedClock::at("2025-03-01T12:00:00Z")),
        );
        run_with_context(&ctx, Path::new("/project"), None).unwrap();

        let written = ctx
            .fs
            .read_to_string(Path::new("/project/devteam/contexts/frontend-summary.json"))
            .unwrap();
        assert!(written.contains("\"name\": \"Badge\""));
        assert!(written.contains("\"hasTemplate\": true"));
    }
}
