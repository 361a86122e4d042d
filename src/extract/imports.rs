//! ES import-statement extraction, shared by component and utility scans.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+(?:\{([^}]+)\}|([^\s;]+))\s+from\s+['"]([^'"]+)['"]"#)
        .expect("import pattern")
});

/// One parsed import statement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ImportRecord {
    /// `import { a, b } from "mod"`.
    Named {
        /// The imported names.
        imports: Vec<String>,
        /// The source module.
        from: String,
    },
    /// `import X from "mod"`.
    Default {
        /// The imported binding.
        import: String,
        /// The source module.
        from: String,
    },
}

/// Extracts every import statement from a script body, in order.
#[must_use]
pub fn extract(text: &str) -> Vec<ImportRecord> {
    IMPORT_RE
        .captures_iter(text)
        .map(|caps| {
            let from = caps[3].to_string();
            match caps.get(1) {
                Some(named) => ImportRecord::Named {
                    imports: named
                        .as_str()
                        .split(',')
                        .map(|name| name.trim().to_string())
                        .filter(|name| !name.is_empty())
                        .collect(),
                    from,
                },
                None => ImportRecord::Default { import: caps[2].to_string(), from },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_default_imports_are_parsed() {
        let text = r#"
import { ref, computed } from "vue"
import axios from "axios";
"#;
        let records = extract(text);
        assert_eq!(
            records,
            vec![
                ImportRecord::Named {
                    imports: vec!["ref".into(), "computed".into()],
                    from: "vue".into(),
                },
                ImportRecord::Default { import: "axios".into(), from: "axios".into() },
            ]
        );
    }

    #[test]
    fn serializes_with_type_tag() {
        let record = ImportRecord::Default { import: "axios".into(), from: "axios".into() };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "default");
        assert_eq!(json["import"], "axios");
    }

    #[test]
    fn no_imports_yields_empty_list() {
        assert!(extract("const x = 1;").is_empty());
    }
}
