//! Recursive directory walk honoring exclusion, depth, and size limits.

use std::path::Path;

use crate::ports::filesystem::FileSystem;
use crate::scan::{ScanConfig, SourceUnit};

/// Walks `dir` (project-relative) under `project_root` and returns every
/// matching file as a [`SourceUnit`], in deterministic depth-first order.
///
/// Fails softly: a missing or unreadable directory yields an empty list,
/// and files that cannot be read or sized are skipped.
#[must_use]
pub fn walk(
    fs: &dyn FileSystem,
    project_root: &Path,
    dir: &str,
    config: &ScanConfig,
) -> Vec<SourceUnit> {
    let root = project_root.join(dir);
    if !fs.is_dir(&root) {
        return Vec::new();
    }
    let mut units = Vec::new();
    visit(fs, &root, dir, 0, config, &mut units);
    units
}

/// Visits one directory level. `depth` counts nesting below the scan root;
/// directories at the depth limit are not descended into.
fn visit(
    fs: &dyn FileSystem,
    dir: &Path,
    relative_dir: &str,
    depth: usize,
    config: &ScanConfig,
    units: &mut Vec<SourceUnit>,
) {
    if depth >= config.max_depth {
        return;
    }
    let Ok(entries) = fs.list_dir(dir) else {
        return;
    };

    for name in entries {
        let path = dir.join(&name);
        let relative = format!("{relative_dir}/{name}");
        if is_ignored(&relative, &config.ignored) {
            continue;
        }
        if fs.is_dir(&path) {
            visit(fs, &path, &relative, depth + 1, config, units);
            continue;
        }
        if !matches_suffix(&name, &config.suffixes) {
            continue;
        }
        if exceeds_size(fs, &path, config.max_file_size_kb) {
            continue;
        }
        let Ok(text) = fs.read_to_string(&path) else {
            continue;
        };
        units.push(SourceUnit { path, relative, text });
    }
}

/// Prefix-based exclusion on normalized project-relative paths.
fn is_ignored(relative: &str, ignored: &[String]) -> bool {
    ignored.iter().any(|prefix| {
        relative == prefix || relative.starts_with(&format!("{prefix}/"))
    })
}

/// Returns `true` if the filename ends with one of the configured suffixes.
fn matches_suffix(name: &str, suffixes: &[String]) -> bool {
    suffixes.is_empty() || suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
}

/// Returns `true` if the file is at or above the size limit (skip it).
fn exceeds_size(fs: &dyn FileSystem, path: &Path, max_kb: u64) -> bool {
    match fs.file_size(path) {
        Ok(size) => size >= max_kb * 1024,
        // Unsizable files are skipped rather than failing the walk.
        Err(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryFileSystem;

    fn config() -> ScanConfig {
        ScanConfig {
            ignored: vec!["vendor".into(), "app/Legacy".into()],
            max_depth: 5,
            max_file_size_kb: 500,
            suffixes: vec![".php".into()],
        }
    }

    #[test]
    fn missing_root_yields_empty_sequence() {
        let fs = MemoryFileSystem::new();
        let units = walk(&fs, Path::new("/project"), "app/Models", &config());
        assert!(units.is_empty());
    }

    #[test]
    fn collects_matching_files_in_sorted_order() {
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/Models/User.php", "<?php class User {}"),
            ("/project/app/Models/Post.php", "<?php class Post {}"),
            ("/project/app/Models/readme.md", "not php"),
        ]);
        let units = walk(&fs, Path::new("/project"), "app/Models", &config());
        let paths: Vec<&str> = units.iter().map(|u| u.relative.as_str()).collect();
        assert_eq!(paths, vec!["app/Models/Post.php", "app/Models/User.php"]);
    }

    #[test]
    fn walk_is_deterministic() {
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/B.php", "b"),
            ("/project/app/A.php", "a"),
            ("/project/app/sub/C.php", "c"),
        ]);
        let first = walk(&fs, Path::new("/project"), "app", &config());
        let second = walk(&fs, Path::new("/project"), "app", &config());
        let a: Vec<&str> = first.iter().map(|u| u.relative.as_str()).collect();
        let b: Vec<&str> = second.iter().map(|u| u.relative.as_str()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn ignored_directories_are_pruned() {
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/Good.php", "ok"),
            ("/project/app/Legacy/Old.php", "old"),
            ("/project/vendor/lib/Dep.php", "dep"),
        ]);
        let units = walk(&fs, Path::new("/project"), "app", &config());
        let paths: Vec<&str> = units.iter().map(|u| u.relative.as_str()).collect();
        assert_eq!(paths, vec!["app/Good.php"]);

        let vendor_units = walk(&fs, Path::new("/project"), "vendor", &config());
        assert!(vendor_units.is_empty() || !vendor_units.iter().any(|u| u.relative.starts_with("vendor")));
    }

    #[test]
    fn depth_limit_stops_descent() {
        let mut cfg = config();
        cfg.max_depth = 2;
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/Top.php", "depth 0"),
            ("/project/app/a/Mid.php", "depth 1"),
            ("/project/app/a/b/Deep.php", "depth 2"),
        ]);
        let units = walk(&fs, Path::new("/project"), "app", &cfg);
        let paths: Vec<&str> = units.iter().map(|u| u.relative.as_str()).collect();
        assert_eq!(paths, vec!["app/Top.php", "app/a/Mid.php"]);
    }

    #[test]
    fn oversized_files_are_skipped() {
        let mut cfg = config();
        cfg.max_file_size_kb = 1;
        let big = "x".repeat(1024);
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/Big.php", big.as_str()),
            ("/project/app/Small.php", "small"),
        ]);
        let units = walk(&fs, Path::new("/project"), "app", &cfg);
        let paths: Vec<&str> = units.iter().map(|u| u.relative.as_str()).collect();
        assert_eq!(paths, vec!["app/Small.php"]);
    }

    #[test]
    fn multiple_suffixes_are_accepted() {
        let mut cfg = config();
        cfg.suffixes = vec![".js".into(), ".ts".into()];
        let fs = MemoryFileSystem::with_files(&[
            ("/project/resources/js/utils/a.js", "a"),
            ("/project/resources/js/utils/b.ts", "b"),
            ("/project/resources/js/utils/c.vue", "c"),
        ]);
        let units = walk(&fs, Path::new("/project"), "resources/js/utils", &cfg);
        assert_eq!(units.len(), 2);
    }
}
