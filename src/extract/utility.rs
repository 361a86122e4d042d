//! JS/TS utility-file extraction: exports, imports, and classification.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::imports::{self, ImportRecord};

static DEFAULT_EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+default\s+(?:function\s+(\w+)|(\w+)|\{)").expect("default export pattern")
});

static NAMED_EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+(?:const|let|var|function)\s+(\w+)").expect("named export pattern")
});

/// One extracted JS/TS utility file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UtilityDescriptor {
    /// File basename without extension.
    pub name: String,
    /// Project-relative file path.
    pub file: String,
    /// `true` when the file name follows the `useX` composable convention.
    pub is_composable: bool,
    /// `true` when the file contains a store definition call.
    pub is_pinia_store: bool,
    /// Import statements in order.
    pub imports: Vec<ImportRecord>,
    /// Exported bindings.
    pub exports: ExportRecord,
}

/// Default and named exports of a utility file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExportRecord {
    /// Default export name; `"anonymous"` for unnamed expressions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    /// Named export identifiers.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub named: Vec<String>,
}

/// Extracts a [`UtilityDescriptor`] from one utility file.
#[must_use]
pub fn extract(text: &str, name: &str, relative_path: &str) -> UtilityDescriptor {
    UtilityDescriptor {
        name: name.to_string(),
        file: relative_path.to_string(),
        is_composable: is_composable_name(name),
        is_pinia_store: text.contains("defineStore"),
        imports: imports::extract(text),
        exports: exports(text),
    }
}

/// `useX` naming convention: a `use` prefix followed by an uppercase letter.
fn is_composable_name(name: &str) -> bool {
    name.strip_prefix("use")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase)
}

fn exports(text: &str) -> ExportRecord {
    let default = DEFAULT_EXPORT_RE.captures(text).map(|caps| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map_or_else(|| "anonymous".to_string(), |m| m.as_str().to_string())
    });
    let named = NAMED_EXPORT_RE.captures_iter(text).map(|caps| caps[1].to_string()).collect();
    ExportRecord { default, named }
}
