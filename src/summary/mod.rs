//! Summary assembly: walker + extractors merged into one JSON document.

pub mod backend;
pub mod frontend;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes a summary document as pretty-printed JSON with 4-space
/// indentation.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json(
    value: &impl Serialize,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(out)?)
}

#[cfg(test)]
mod tests {
    use super::to_pretty_json;
    use serde_json::json;

    #[test]
    fn pretty_json_uses_four_space_indent() {
        let doc = json!({"outer": {"inner": 1}});
        let text = to_pretty_json(&doc).unwrap();
        assert!(text.contains("\n    \"outer\""));
        assert!(text.contains("\n        \"inner\""));
    }

    #[test]
    fn serialization_is_idempotent() {
        let doc = json!({"a": [1, 2], "b": "x"});
        assert_eq!(to_pretty_json(&doc).unwrap(), to_pretty_json(&doc).unwrap());
    }
}
