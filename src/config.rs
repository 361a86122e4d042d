//! Configuration loading for the scanner and summary commands.
//!
//! Settings live in `devteam.yaml` at the project root. Every field has a
//! default so the tool runs unconfigured; a missing file is silent and a
//! malformed file degrades to defaults with a warning.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ports::filesystem::FileSystem;

/// Name of the configuration file looked up at the project root.
pub const CONFIG_FILE: &str = "devteam.yaml";

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Scanner and summary settings.
    pub summary: SummaryConfig,
    /// AI context settings.
    pub ai_context: AiContextConfig,
}

/// Settings controlling the directory walks behind both summaries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SummaryConfig {
    /// Project-relative directories pruned from every walk.
    pub ignored_directories: Vec<String>,
    /// Extra backend directories to scan; group name is the basename.
    pub backend_scan_directories: Vec<String>,
    /// Extra frontend component directories to scan.
    pub frontend_scan_directories: Vec<String>,
    /// Maximum file size to analyze, in KB.
    pub max_file_size: u64,
    /// Maximum depth for directory scanning.
    pub max_scan_depth: usize,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            ignored_directories: [
                "migrations",
                "resources/views",
                "node_modules",
                "vendor",
                "storage",
                "bootstrap/cache",
                "public",
                "tests",
            ]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
            backend_scan_directories: Vec::new(),
            frontend_scan_directories: Vec::new(),
            max_file_size: 500,
            max_scan_depth: 5,
        }
    }
}

/// Settings for AI context generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AiContextConfig {
    /// Whether to include route information in the backend summary.
    pub include_routes: bool,
}

impl Default for AiContextConfig {
    fn default() -> Self {
        Self { include_routes: true }
    }
}

impl Config {
    /// Loads configuration from `devteam.yaml` under `root`.
    ///
    /// A missing file yields defaults silently; an unparsable file yields
    /// defaults with a warning on stderr.
    #[must_use]
    pub fn load(fs: &dyn FileSystem, root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !fs.exists(&path) {
            return Self::default();
        }
        let Ok(text) = fs.read_to_string(&path) else {
            return Self::default();
        };
        match serde_yaml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: ignoring malformed {CONFIG_FILE}: {e}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    #[test]
    fn missing_file_yields_defaults() {
        let fs = MemoryFileSystem::new();
        let config = Config::load(&fs, Path::new("/project"));
        assert_eq!(config, Config::default());
        assert_eq!(config.summary.max_file_size, 500);
        assert_eq!(config.summary.max_scan_depth, 5);
        assert!(config.ai_context.include_routes);
        assert!(config.summary.ignored_directories.contains(&"vendor".to_string()));
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let yaml = "summary:\n  max_scan_depth: 2\n  ignored_directories: [dist]\n";
        let fs = MemoryFileSystem::with_files(&[("/project/devteam.yaml", yaml)]);
        let config = Config::load(&fs, Path::new("/project"));
        assert_eq!(config.summary.max_scan_depth, 2);
        assert_eq!(config.summary.ignored_directories, vec!["dist"]);
        assert_eq!(config.summary.max_file_size, 500);
        assert!(config.ai_context.include_routes);
    }

    #[test]
    fn malformed_file_degrades_to_defaults() {
        let fs = MemoryFileSystem::with_files(&[("/project/devteam.yaml", ": not yaml : [")]);
        let config = Config::load(&fs, Path::new("/project"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn include_routes_can_be_disabled() {
        let yaml = "ai_context:\n  include_routes: false\n";
        let fs = MemoryFileSystem::with_files(&[("/project/devteam.yaml", yaml)]);
        let config = Config::load(&fs, Path::new("/project"));
        assert!(!config.ai_context.include_routes);
    }
}
