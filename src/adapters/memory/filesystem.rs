//! In-memory filesystem adapter.
//!
//! Stores files as a path → contents map. Directories are implicit: a path
//! is a directory when some stored file lives underneath it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::ports::filesystem::FileSystem;

/// In-memory filesystem backed by a sorted path map.
#[derive(Default)]
pub struct MemoryFileSystem {
    files: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    /// Creates an empty in-memory filesystem.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filesystem seeded with `(path, contents)` pairs.
    #[must_use]
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        {
            let mut map = fs.files.lock().expect("file map lock poisoned");
            for (path, contents) in files {
                map.insert(PathBuf::from(path), (*contents).to_string());
            }
        }
        fs
    }

    /// Returns the contents written to `path`, if any.
    #[must_use]
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().expect("file map lock poisoned").get(path).cloned()
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path).ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut map = self.files.lock().expect("file map lock poisoned");
        map.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let map = self.files.lock().expect("file map lock poisoned");
        map.contains_key(path) || map.keys().any(|p| p.starts_with(path) && p != path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        let map = self.files.lock().expect("file map lock poisoned");
        !map.contains_key(path) && map.keys().any(|p| p.starts_with(path) && p != path)
    }

    fn list_dir(
        &self,
        path: &Path,
    ) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
        let map = self.files.lock().expect("file map lock poisoned");
        let mut entries: Vec<String> = map
            .keys()
            .filter_map(|p| p.strip_prefix(path).ok())
            .filter_map(|rest| rest.components().next())
            .map(|component| component.as_os_str().to_string_lossy().into_owned())
            .collect();
        entries.sort();
        entries.dedup();
        if entries.is_empty() {
            return Err(format!("not a directory: {}", path.display()).into());
        }
        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> Result<u64, Box<dyn std::error::Error + Send + Sync>> {
        self.contents(path)
            .map(|c| c.len() as u64)
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_round_trip() {
        let fs = MemoryFileSystem::new();
        fs.write(Path::new("/project/a.txt"), "hello").unwrap();
        assert_eq!(fs.read_to_string(Path::new("/project/a.txt")).unwrap(), "hello");
    }

    #[test]
    fn directory_semantics_are_inferred() {
        let fs = MemoryFileSystem::with_files(&[
            ("/project/app/Models/User.php", "<?php"),
            ("/project/app/Models/Post.php", "<?php"),
        ]);
        assert!(fs.is_dir(Path::new("/project/app/Models")));
        assert!(!fs.is_dir(Path::new("/project/app/Models/User.php")));
        assert!(fs.exists(Path::new("/project/app")));
        let entries = fs.list_dir(Path::new("/project/app/Models")).unwrap();
        assert_eq!(entries, vec!["Post.php", "User.php"]);
    }

    #[test]
    fn missing_file_errors() {
        let fs = MemoryFileSystem::new();
        assert!(fs.read_to_string(Path::new("/nope")).is_err());
        assert!(fs.file_size(Path::new("/nope")).is_err());
        assert!(!fs.exists(Path::new("/nope")));
    }

    #[test]
    fn file_size_counts_bytes() {
        let fs = MemoryFileSystem::with_files(&[("/f", "abcd")]);
        assert_eq!(fs.file_size(Path::new("/f")).unwrap(), 4);
    }
}
