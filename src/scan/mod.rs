//! Directory walking and source-file discovery.

pub mod walker;

use std::path::PathBuf;

use crate::config::SummaryConfig;

/// Filters controlling one directory walk. Immutable once built.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Project-relative paths pruned from the walk (prefix comparison).
    pub ignored: Vec<String>,
    /// Maximum directory nesting below the scan root.
    pub max_depth: usize,
    /// Maximum file size in KB; larger files are skipped.
    pub max_file_size_kb: u64,
    /// Filename suffixes to include (e.g. `".php"`).
    pub suffixes: Vec<String>,
}

impl ScanConfig {
    /// Builds a scan config from the summary settings and a suffix list.
    #[must_use]
    pub fn from_summary(summary: &SummaryConfig, suffixes: &[&str]) -> Self {
        Self {
            ignored: summary.ignored_directories.clone(),
            max_depth: summary.max_scan_depth,
            max_file_size_kb: summary.max_file_size,
            suffixes: suffixes.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// One discovered source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// Path relative to the project root, `/`-separated.
    pub relative: String,
    /// Raw file text.
    pub text: String,
}
