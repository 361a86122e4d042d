//! Frontend summary: npm packages, UI components, utilities, and assets.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::config::Config;
use crate::extract::{component, utility};
use crate::ports::filesystem::FileSystem;
use crate::scan::{walker, ScanConfig};

/// Conventional component directories, scanned in order.
const COMPONENT_DIRS: &[&str] =
    &["resources/js/components", "resources/js/Pages", "resources/js/Layouts"];

/// Conventional utility directories, scanned in order.
const UTILITY_DIRS: &[&str] = &[
    "resources/js/utils",
    "resources/js/helpers",
    "resources/js/composables",
    "resources/js/hooks",
    "resources/js/stores",
];

/// Conventional stylesheet directories, scanned in order.
const CSS_DIRS: &[&str] = &["resources/css", "resources/sass", "resources/scss"];

/// Bundler config files, first match wins.
const VITE_CONFIG_FILES: &[&str] = &["vite.config.js", "vite.config.ts"];

static VITE_PLUGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:plugin|use)\s*\(\s*(\w+)").expect("vite plugin pattern"));

/// Builds the frontend summary document for the project at `root`.
///
/// Mirrors the backend assembler: every phase is individually
/// fault-tolerant and a missing directory leaves its section empty.
#[must_use]
pub fn generate(fs: &dyn FileSystem, root: &Path, config: &Config) -> Value {
    let mut doc = Map::new();

    println!("Scanning npm packages...");
    if let Some((packages, vue_version)) = packages(fs, root) {
        doc.insert("packages".to_string(), packages);
        if let Some(version) = vue_version {
            doc.insert("vueVersion".to_string(), version);
        }
    }

    println!("Scanning components...");
    doc.insert("components".to_string(), components(fs, root, config));

    println!("Scanning JS utilities...");
    doc.insert("utilities".to_string(), utilities(fs, root, config));

    println!("Scanning CSS assets...");
    doc.insert("cssAssets".to_string(), css_assets(fs, root, config));

    println!("Scanning bundler configuration...");
    if let Some(vite) = vite_config(fs, root) {
        doc.insert("viteConfig".to_string(), vite);
    }

    Value::Object(doc)
}

/// Embeds the npm manifest's dependency maps, plus the declared UI framework
/// version when present. `None` when the manifest is missing or unparsable.
fn packages(fs: &dyn FileSystem, root: &Path) -> Option<(Value, Option<Value>)> {
    let text = fs.read_to_string(&root.join("package.json")).ok()?;
    let manifest: Value = serde_json::from_str(&text).ok()?;
    let section =
        |key: &str| manifest.get(key).cloned().unwrap_or_else(|| json!({}));
    let vue_version = manifest.get("dependencies").and_then(|deps| deps.get("vue")).cloned();
    let packages = json!({
        "dependencies": section("dependencies"),
        "devDependencies": section("devDependencies"),
    });
    Some((packages, vue_version))
}

fn components(fs: &dyn FileSystem, root: &Path, config: &Config) -> Value {
    let scan = ScanConfig::from_summary(&config.summary, &[".vue"]);
    let mut entries = Vec::new();
    for dir in COMPONENT_DIRS
        .iter()
        .map(|d| (*d).to_string())
        .chain(config.summary.frontend_scan_directories.iter().cloned())
    {
        for unit in walker::walk(fs, root, &dir, &scan) {
            let name = stem(&unit.relative, &[".vue"]);
            let descriptor = component::extract(&unit.text, name, &unit.relative);
            if let Ok(value) = serde_json::to_value(descriptor) {
                entries.push(value);
            }
        }
    }
    Value::Array(entries)
}

fn utilities(fs: &dyn FileSystem, root: &Path, config: &Config) -> Value {
    let scan = ScanConfig::from_summary(&config.summary, &[".js", ".ts"]);
    let mut entries = Vec::new();
    for dir in UTILITY_DIRS {
        for unit in walker::walk(fs, root, dir, &scan) {
            let name = stem(&unit.relative, &[".js", ".ts"]);
            let descriptor = utility::extract(&unit.text, name, &unit.relative);
            if let Ok(value) = serde_json::to_value(descriptor) {
                entries.push(value);
            }
        }
    }
    Value::Array(entries)
}

/// Lists stylesheet files with their extension tag.
fn css_assets(fs: &dyn FileSystem, root: &Path, config: &Config) -> Value {
    let scan = ScanConfig::from_summary(&config.summary, &[".css", ".scss", ".sass", ".less"]);
    let mut entries = Vec::new();
    for dir in CSS_DIRS {
        for unit in walker::walk(fs, root, dir, &scan) {
            let name = basename(&unit.relative);
            let extension = name.rsplit('.').next().unwrap_or_default();
            entries.push(json!({
                "name": name,
                "file": unit.relative,
                "type": extension,
            }));
        }
    }
    Value::Array(entries)
}

/// Loose plugin-call extraction from the first bundler config file found.
fn vite_config(fs: &dyn FileSystem, root: &Path) -> Option<Value> {
    for file in VITE_CONFIG_FILES {
        let Ok(text) = fs.read_to_string(&root.join(file)) else {
            continue;
        };
        let plugins: Vec<String> =
            VITE_PLUGIN_RE.captures_iter(&text).map(|caps| caps[1].to_string()).collect();
        return Some(json!({"file": file, "plugins": plugins}));
    }
    None
}

fn basename(relative: &str) -> &str {
    relative.rsplit('/').next().unwrap_or(relative)
}

/// File basename with any of the given suffixes removed.
fn stem<'a>(relative: &'a str, suffixes: &[&str]) -> &'a str {
    let name = basename(relative);
    suffixes
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .unwrap_or(name)
}
