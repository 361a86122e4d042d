//! Single-file UI component extraction (Vue SFC shape).
//!
//! Splits the file into script/template/style regions, then runs
//! independent regex passes for the composition-API flag, imports, props,
//! emits, and reactive constructs.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extract::imports::{self, ImportRecord};

static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<script(?:\s+[^>]*)?>(.+?)</script>").expect("script pattern"));

static TEMPLATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<template(?:\s+[^>]*)?>(.+?)</template>").expect("template pattern")
});

static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<style(\s+[^>]*)?>(?:.+?)</style>").expect("style pattern"));

static COMPOSITION_API_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:defineComponent|setup|ref|reactive|computed|watch|onMounted|defineProps|defineEmits)\s*\(",
    )
    .expect("composition pattern")
});

static DEFINE_PROPS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)defineProps\s*\(\s*(\{[^}]+\}|\[[^\]]+\])\s*\)").expect("defineProps pattern")
});

static PROPS_OPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)props\s*:\s*(\{[^}]+\}|\[[^\]]+\])").expect("props option pattern")
});

static DEFINE_EMITS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)defineEmits\s*\(\s*(\[[^\]]+\]|\{[^}]+\})\s*\)").expect("defineEmits pattern")
});

static EMITS_OPTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)emits\s*:\s*(\[[^\]]+\]|\{[^}]+\})").expect("emits option pattern")
});

static OBJECT_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*:").expect("object key pattern"));

static QUOTED_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"](\w+)['"]"#).expect("quoted name pattern"));

static STYLE_LANG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)lang=['"](scss|sass|less|stylus)['"]"#).expect("style lang pattern")
});

/// Reactive-construct patterns, keyed by the construct kind.
static COMPOSABLE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("ref", Regex::new(r"(?i)const\s+(\w+)\s*=\s*ref\s*\(").expect("ref pattern")),
        ("reactive", Regex::new(r"(?i)const\s+(\w+)\s*=\s*reactive\s*\(").expect("reactive pattern")),
        ("computed", Regex::new(r"(?i)const\s+(\w+)\s*=\s*computed\s*\(").expect("computed pattern")),
        ("watch", Regex::new(r"(?i)watch\s*\(\s*(\w+)").expect("watch pattern")),
        (
            "lifecycle",
            Regex::new(
                r"on(Mounted|BeforeMount|BeforeUnmount|Unmounted|Activated|Deactivated|BeforeUpdate|Updated|ErrorCaptured)\s*\(",
            )
            .expect("lifecycle pattern"),
        ),
        (
            "provide/inject",
            Regex::new(r#"(?i)(provide|inject)\s*\(\s*['"]\w+['"]"#).expect("provide pattern"),
        ),
    ]
});

static CUSTOM_COMPOSABLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"const\s+(\w+)\s*=\s*(use[A-Z]\w*)\s*\(").expect("custom pattern"));

/// One extracted UI component file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDescriptor {
    /// Component name (file basename without extension).
    pub name: String,
    /// Project-relative file path.
    pub file: String,
    /// `true` when the script uses composition-API constructs.
    pub is_composition_api: bool,
    /// Import statements in the script region.
    pub imports: Vec<ImportRecord>,
    /// Declared prop names from both declaration sources, de-duplicated.
    pub props: Vec<String>,
    /// Declared emit names from both declaration sources, de-duplicated.
    pub emits: Vec<String>,
    /// Reactive constructs by kind; absent kinds are omitted.
    pub composables: BTreeMap<String, ComposableUsage>,
    /// Whether a template region is present.
    pub has_template: bool,
    /// Style-region facts.
    pub style: StyleInfo,
}

/// Values of the reactive-construct map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ComposableUsage {
    /// Variable or hook names for the fixed construct kinds.
    Names(Vec<String>),
    /// Custom `useX` helper invocations bound to a variable.
    Custom(Vec<CustomComposable>),
}

/// One custom composable invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomComposable {
    /// The variable the result is bound to.
    pub variable: String,
    /// The composable function name (`useX`).
    pub composable: String,
}

/// Facts about the style region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StyleInfo {
    /// Whether a style region is present.
    pub has_style: bool,
    /// Whether the style carries a `scoped` marker.
    pub scoped: bool,
    /// Preprocessor language tag, if declared.
    pub lang: Option<String>,
}

/// Extracts a [`ComponentDescriptor`] from one component file.
#[must_use]
pub fn extract(text: &str, name: &str, relative_path: &str) -> ComponentDescriptor {
    let script = SCRIPT_RE.captures(text).map_or("", |caps| caps.get(1).map_or("", |m| m.as_str()));

    ComponentDescriptor {
        name: name.to_string(),
        file: relative_path.to_string(),
        is_composition_api: COMPOSITION_API_RE.is_match(script),
        imports: imports::extract(script),
        props: dual_source_names(script, &DEFINE_PROPS_RE, &PROPS_OPTION_RE),
        emits: dual_source_names(script, &DEFINE_EMITS_RE, &EMITS_OPTION_RE),
        composables: composables(script),
        has_template: TEMPLATE_RE.is_match(text),
        style: style_info(text),
    }
}

/// Unions names from a declaration call and a legacy options block, in both
/// array and object syntax, de-duplicated in discovery order.
fn dual_source_names(script: &str, call_re: &Regex, option_re: &Regex) -> Vec<String> {
    let mut names = Vec::new();
    for re in [call_re, option_re] {
        if let Some(caps) = re.captures(script) {
            collect_declaration_names(&caps[1], &mut names);
        }
    }
    names
}

/// Pulls names out of `{key: ...}` or `['name', ...]` declaration text.
fn collect_declaration_names(declaration: &str, names: &mut Vec<String>) {
    let key_re: &Regex =
        if declaration.starts_with('{') { &OBJECT_KEY_RE } else { &QUOTED_NAME_RE };
    for caps in key_re.captures_iter(declaration) {
        let name = caps[1].to_string();
        if !names.contains(&name) {
            names.push(name);
        }
    }
}

/// Collects reactive constructs by kind; kinds with no hits are omitted.
fn composables(script: &str) -> BTreeMap<String, ComposableUsage> {
    let mut map = BTreeMap::new();
    for (kind, re) in COMPOSABLE_PATTERNS.iter() {
        let mut found = Vec::new();
        for caps in re.captures_iter(script) {
            let name = caps[1].to_string();
            if !found.contains(&name) {
                found.push(name);
            }
        }
        if !found.is_empty() {
            map.insert((*kind).to_string(), ComposableUsage::Names(found));
        }
    }

    let custom: Vec<CustomComposable> = CUSTOM_COMPOSABLE_RE
        .captures_iter(script)
        .map(|caps| CustomComposable {
            variable: caps[1].to_string(),
            composable: caps[2].to_string(),
        })
        .collect();
    if !custom.is_empty() {
        map.insert("custom".to_string(), ComposableUsage::Custom(custom));
    }

    map
}

/// Extracts style-region presence, the `scoped` marker, and the lang tag.
fn style_info(text: &str) -> StyleInfo {
    let Some(caps) = STYLE_RE.captures(text) else {
        return StyleInfo { has_style: false, scoped: false, lang: None };
    };
    let attributes = caps.get(1).map_or("", |m| m.as_str());
    StyleInfo {
        has_style: true,
        scoped: attributes.contains("scoped"),
        lang: STYLE_LANG_RE.captures(attributes).map(|caps| caps[1].to_lowercase()),
    }
}
