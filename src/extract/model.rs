//! Static persistence-fact extraction for model classes.
//!
//! Replaces reflective instantiation with a pure text pass: table name and
//! fillable list come from declared property defaults, relationships from
//! method-body pattern matching. Nothing here can abort a scan.

use once_cell::sync::Lazy;
use regex::Regex;

static TABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"protected\s+\$table\s*=\s*['"]([^'"]+)['"]"#).expect("table pattern")
});

static FILLABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)protected\s+\$fillable\s*=\s*\[([^\]]*)\]").expect("fillable pattern")
});

static QUOTED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"]([^'"]+)['"]"#).expect("quoted pattern"));

static METHOD_HEAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"function\s+(\w+)\s*\([^)]*\)").expect("method head pattern"));

static RELATIONSHIP_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"return\s+\$this->(hasOne|hasMany|belongsTo|belongsToMany|morphTo|morphMany|morphToMany|morphedByMany)\s*\(",
    )
    .expect("relationship pattern")
});

/// Persistence facts extracted from a model source file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFacts {
    /// Backing table name: declared `$table` or derived from the class name.
    pub table: String,
    /// Method names whose body returns a relationship constructor call.
    pub relationships: Vec<String>,
    /// Names listed in the `$fillable` declaration.
    pub fillable: Vec<String>,
}

/// Analyzes a model source file for persistence facts.
#[must_use]
pub fn analyze(text: &str, class_name: &str) -> ModelFacts {
    ModelFacts {
        table: table_name(text, class_name),
        relationships: relationship_methods(text),
        fillable: fillable_names(text),
    }
}

/// Declared `$table` wins; otherwise the conventional snake_case plural of
/// the class name.
fn table_name(text: &str, class_name: &str) -> String {
    TABLE_RE
        .captures(text)
        .map_or_else(|| pluralize(&snake_case(class_name)), |caps| caps[1].to_string())
}

fn fillable_names(text: &str) -> Vec<String> {
    let Some(caps) = FILLABLE_RE.captures(text) else {
        return Vec::new();
    };
    QUOTED_RE.captures_iter(&caps[1]).map(|c| c[1].to_string()).collect()
}

/// Finds every method whose body contains a `return $this->hasX(...)`-shaped
/// expression. Bodies are sliced by brace matching; a method without a body
/// (abstract, interface) is skipped.
fn relationship_methods(text: &str) -> Vec<String> {
    let mut relationships = Vec::new();
    for caps in METHOD_HEAD_RE.captures_iter(text) {
        let name = &caps[1];
        let head_end = caps.get(0).map_or(text.len(), |m| m.end());
        let Some(body) = method_body(text, head_end) else {
            continue;
        };
        if RELATIONSHIP_RE.is_match(body) && !relationships.iter().any(|r| r == name) {
            relationships.push(name.to_string());
        }
    }
    relationships
}

/// Slices the `{ ... }` body starting at or after `from`, by brace counting.
///
/// Stops at a `;` before any `{` (bodyless declaration). Braces inside
/// string literals are not tracked; good enough for the shapes we classify.
fn method_body(text: &str, from: usize) -> Option<&str> {
    let rest = &text[from..];
    let mut depth = 0usize;
    let mut start = None;
    for (i, c) in rest.char_indices() {
        match c {
            ';' if start.is_none() => return None,
            '{' => {
                if start.is_none() {
                    start = Some(i);
                }
                depth += 1;
            }
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    if let Some(s) = start {
                        return Some(&rest[s..=i]);
                    }
                }
            }
            _ => {}
        }
    }
    None
}

/// Converts `CamelCase` to `snake_case`.
fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Naive English pluralization covering the conventional table names.
fn pluralize(word: &str) -> String {
    if let Some(stem) = word.strip_suffix('y') {
        let penultimate = stem.chars().last();
        if penultimate.is_some_and(|c| !"aeiou".contains(c)) {
            return format!("{stem}ies");
        }
    }
    if word.ends_with('s')
        || word.ends_with('x')
        || word.ends_with('z')
        || word.ends_with("ch")
        || word.ends_with("sh")
    {
        return format!("{word}es");
    }
    format!("{word}s")
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_MODEL: &str = r#"<?php

namespace App\Models;

class User extends Model
{
    protected $table = 'users';

    protected $fillable = [
        'name',
        'email',
    ];

    public function posts()
    {
        return $this->hasMany(Post::class);
    }

    public function profile()
    {
        return $this->hasOne(Profile::class);
    }

    public function postCount()
    {
        return $this->count();
    }
}
"#;

    #[test]
    fn declared_table_wins() {
        let facts = analyze(USER_MODEL, "User");
        assert_eq!(facts.table, "users");
    }

    #[test]
    fn table_derived_when_not_declared() {
        assert_eq!(analyze("<?php class UserProfile {}", "UserProfile").table, "user_profiles");
        assert_eq!(analyze("", "Category").table, "categories");
        assert_eq!(analyze("", "Box").table, "boxes");
        assert_eq!(analyze("", "Day").table, "days");
    }

    #[test]
    fn fillable_names_are_collected() {
        let facts = analyze(USER_MODEL, "User");
        assert_eq!(facts.fillable, vec!["name", "email"]);
    }

    #[test]
    fn relationship_methods_are_classified() {
        let facts = analyze(USER_MODEL, "User");
        assert_eq!(facts.relationships, vec!["posts", "profile"]);
    }

    #[test]
    fn plain_return_is_not_a_relationship() {
        let text = "public function total() { return $this->count(); }";
        assert!(analyze(text, "Order").relationships.is_empty());
    }

    #[test]
    fn bodyless_method_is_skipped() {
        let text = "abstract public function rules();";
        assert!(analyze(text, "Rule").relationships.is_empty());
    }

    #[test]
    fn morph_variants_are_recognized() {
        let text = r"
public function commentable()
{
    return $this->morphTo();
}
public function tags()
{
    return $this->morphToMany(Tag::class, 'taggable');
}
";
        assert_eq!(analyze(text, "Comment").relationships, vec!["commentable", "tags"]);
    }

    #[test]
    fn empty_fillable_block_yields_empty_list() {
        let text = "protected $fillable = [];";
        assert!(analyze(text, "Thing").fillable.is_empty());
    }
}
