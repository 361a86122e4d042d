//! Regex-based structural extraction from source files.
//!
//! Best-effort by design: a file that does not match a pattern simply
//! contributes nothing, it never fails a scan.

pub mod class;
pub mod component;
pub mod imports;
pub mod model;
pub mod utility;

use serde::{Deserialize, Serialize};

/// One extracted method with its cleaned documentation text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MethodDescriptor {
    /// Method name.
    pub name: String,
    /// Cleaned docblock text; empty when the method has none.
    pub docblock: String,
}

/// One extracted class with its methods and documentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassDescriptor {
    /// Kind tag supplied by the caller (e.g. `"Controller"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Fully-qualified name, namespace segments joined with dots.
    pub class: String,
    /// Project-relative path of the originating file.
    pub file: String,
    /// Methods in declaration order.
    pub methods: Vec<MethodDescriptor>,
    /// Cleaned class-level docblock; empty when absent.
    pub docblock: String,
}

/// A class descriptor enriched with persistence facts for model files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelDescriptor {
    /// The underlying class facts.
    #[serde(flatten)]
    pub class: ClassDescriptor,
    /// Backing table name (declared or derived).
    pub table: String,
    /// Names of methods classified as relationships, in declaration order.
    pub relationships: Vec<String>,
    /// Declared mass-assignable attribute names.
    pub fillable: Vec<String>,
}

/// Strips comment gutters from a docblock body and collapses blank lines.
///
/// `/** Line one.\n * Line two. */` cleans to `"Line one.\nLine two."`.
#[must_use]
pub fn clean_docblock(raw: &str) -> String {
    raw.lines()
        .map(|line| {
            let line = line.trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
