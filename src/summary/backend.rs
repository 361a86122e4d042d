//! Backend summary: dependency manifest, class groups, and routes.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::extract::{class, model, ModelDescriptor};
use crate::ports::filesystem::FileSystem;
use crate::scan::{walker, ScanConfig};

/// Fixed scan groups: output key, conventional directory, kind tag.
const GROUPS: &[(&str, &str, &str)] = &[
    ("controllers", "app/Http/Controllers", "Controller"),
    ("models", "app/Models", "Model"),
    ("commands", "app/Console/Commands", "Command"),
    ("providers", "app/Providers", "ServiceProvider"),
    ("middleware", "app/Http/Middleware", "Middleware"),
    ("jobs", "app/Jobs", "Job"),
    ("events", "app/Events", "Event"),
    ("listeners", "app/Listeners", "Listener"),
    ("policies", "app/Policies", "Policy"),
];

/// Route-definition files scanned when route extraction is enabled.
const ROUTE_FILES: &[(&str, &str)] = &[("web", "routes/web.php"), ("api", "routes/api.php")];

static ROUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Route::(get|post|put|patch|delete|options|any)\s*\(\s*['"]([^'"]+)['"]"#)
        .expect("route pattern")
});

/// Builds the backend summary document for the project at `root`.
///
/// Every phase is individually fault-tolerant: a missing manifest, a missing
/// directory, or an unparsable file leaves its section empty and the rest of
/// the document still assembles.
#[must_use]
pub fn generate(fs: &dyn FileSystem, root: &Path, config: &Config) -> Value {
    let mut doc = Map::new();

    println!("Scanning composer packages...");
    doc.insert("packages".to_string(), packages(fs, root));

    println!("Scanning application directories...");
    let scan = ScanConfig::from_summary(&config.summary, &[".php"]);
    let mut components = Map::new();
    for (group, dir, kind) in GROUPS {
        let entries = if *group == "models" {
            model_entries(fs, root, dir, &scan)
        } else {
            class_entries(fs, root, dir, kind, &scan)
        };
        components.insert((*group).to_string(), entries);
    }
    for dir in &config.summary.backend_scan_directories {
        let group = group_name(dir);
        let kind = kind_tag(&group);
        components.insert(group, class_entries(fs, root, dir, &kind, &scan));
    }
    doc.insert("components".to_string(), Value::Object(components));

    if config.ai_context.include_routes {
        println!("Scanning routes...");
        doc.insert("routes".to_string(), routes(fs, root));
    }

    Value::Object(doc)
}

/// Embeds the manifest's runtime and development dependencies verbatim.
fn packages(fs: &dyn FileSystem, root: &Path) -> Value {
    let manifest = fs
        .read_to_string(&root.join("composer.json"))
        .ok()
        .and_then(|text| serde_json::from_str::<Value>(&text).ok());
    let section = |key: &str| {
        manifest.as_ref().and_then(|m| m.get(key)).cloned().unwrap_or_else(|| json!({}))
    };
    json!({
        "require": section("require"),
        "require-dev": section("require-dev"),
    })
}

fn class_entries(
    fs: &dyn FileSystem,
    root: &Path,
    dir: &str,
    kind: &str,
    scan: &ScanConfig,
) -> Value {
    let entries: Vec<Value> = walker::walk(fs, root, dir, scan)
        .iter()
        .filter_map(|unit| class::extract(&unit.text, kind, &unit.relative))
        .filter_map(|descriptor| serde_json::to_value(descriptor).ok())
        .collect();
    Value::Array(entries)
}

/// The models group: class extraction plus static persistence facts.
fn model_entries(fs: &dyn FileSystem, root: &Path, dir: &str, scan: &ScanConfig) -> Value {
    let entries: Vec<Value> = walker::walk(fs, root, dir, scan)
        .iter()
        .filter_map(|unit| {
            let descriptor = class::extract(&unit.text, "Model", &unit.relative)?;
            let bare_name = descriptor.class.rsplit('.').next().unwrap_or_default().to_string();
            let facts = model::analyze(&unit.text, &bare_name);
            Some(ModelDescriptor {
                class: descriptor,
                table: facts.table,
                relationships: facts.relationships,
                fillable: facts.fillable,
            })
        })
        .filter_map(|descriptor| serde_json::to_value(descriptor).ok())
        .collect();
    Value::Array(entries)
}

/// Extracts route registrations grouped by route-file kind. A missing route
/// file contributes no key.
fn routes(fs: &dyn FileSystem, root: &Path) -> Value {
    let mut map = Map::new();
    for (kind, file) in ROUTE_FILES {
        let Ok(text) = fs.read_to_string(&root.join(file)) else {
            continue;
        };
        let entries: Vec<Value> = ROUTE_RE
            .captures_iter(&text)
            .map(|caps| json!({"method": caps[1].to_uppercase(), "uri": &caps[2]}))
            .collect();
        map.insert((*kind).to_string(), Value::Array(entries));
    }
    Value::Object(map)
}

/// Group name for a configured extra directory: its basename.
fn group_name(dir: &str) -> String {
    dir.trim_end_matches('/').rsplit('/').next().unwrap_or(dir).to_string()
}

/// Kind tag for a configured group: capitalized singular of the group name.
fn kind_tag(group: &str) -> String {
    let singular = group.strip_suffix('s').unwrap_or(group);
    let mut chars = singular.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
