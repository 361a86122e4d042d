//! Class, namespace, method, and docblock extraction from one source file.
//!
//! Sequential regex passes over the whole file text; each pass is
//! independent and tolerant of the others matching nothing.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::extract::{clean_docblock, ClassDescriptor, MethodDescriptor};

static NAMESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"namespace\s+([^;]+);").expect("namespace pattern"));

static CLASS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"class\s+(\w+)(?:\s+extends|\s+implements|\s*\{|$)").expect("class pattern")
});

// Docblock bodies are matched with a tempered pattern instead of a
// lookahead: any run of characters that never contains `*/`.
static CLASS_DOC_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)/\*\*((?:[^*]|\*[^/])*)\*/\s*class\s").expect("class doc pattern")
});

static METHOD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?s)(?:/\*\*((?:[^*]|\*[^/])*)\*/\s*)?(?:public|protected|private)\s+function\s+(\w+)\s*\(",
    )
    .expect("method pattern")
});

/// Extracts a [`ClassDescriptor`] from one source unit.
///
/// Returns `None` when no class declaration is found; the file then
/// contributes nothing to the summary (documented omission, not an error).
#[must_use]
pub fn extract(text: &str, kind: &str, relative_path: &str) -> Option<ClassDescriptor> {
    let class_name = CLASS_RE.captures(text)?.get(1)?.as_str().to_string();

    let namespace = NAMESPACE_RE
        .captures(text)
        .map(|caps| caps[1].trim().replace('\\', "."));

    let class = match namespace {
        Some(ns) if !ns.is_empty() => format!("{ns}.{class_name}"),
        _ => class_name,
    };

    let methods = METHOD_RE
        .captures_iter(text)
        .map(|caps| MethodDescriptor {
            name: caps[2].to_string(),
            docblock: caps.get(1).map(|m| clean_docblock(m.as_str())).unwrap_or_default(),
        })
        .collect();

    let docblock = CLASS_DOC_RE
        .captures(text)
        .map(|caps| clean_docblock(&caps[1]))
        .unwrap_or_default();

    Some(ClassDescriptor { kind: kind.to_string(), class, file: relative_path.to_string(), methods, docblock })
}
