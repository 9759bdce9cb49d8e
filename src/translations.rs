//! Translation file helpers: nested key listing, key diff, JSON validation.
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Every key of `obj`, dot-joined with its parents. Keys whose value is an
/// object are listed as well as their children.
pub fn flatten_keys(obj: &Map<String, Value>) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys(obj, "", &mut keys);
    keys
}

fn collect_keys(obj: &Map<String, Value>, prefix: &str, keys: &mut BTreeSet<String>) {
    for (k, v) in obj {
        let full_key = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        if let Value::Object(child) = v {
            collect_keys(child, &full_key, keys);
        }
        keys.insert(full_key);
    }
}

/// Keys present on one side only, each list sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyDiff {
    /// In `right` but not in `left`.
    pub missing_in_left: Vec<String>,
    /// In `left` but not in `right`.
    pub missing_in_right: Vec<String>,
}

impl KeyDiff {
    pub fn is_empty(&self) -> bool {
        self.missing_in_left.is_empty() && self.missing_in_right.is_empty()
    }
}

pub fn diff_keys(left: &Map<String, Value>, right: &Map<String, Value>) -> KeyDiff {
    let left_keys = flatten_keys(left);
    let right_keys = flatten_keys(right);
    KeyDiff {
        missing_in_left: right_keys.difference(&left_keys).cloned().collect(),
        missing_in_right: left_keys.difference(&right_keys).cloned().collect(),
    }
}

/// Read a translation file whose top level must be a JSON object.
pub fn load_translation_file(path: &Path) -> Result<Map<String, Value>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    match serde_json::from_str::<Value>(&data)
        .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?
    {
        Value::Object(map) => Ok(map),
        _ => Err(format!("{} is not a JSON object", path.display())),
    }
}

/// Check that `path` holds syntactically valid JSON. The error carries the
/// parser's line and column.
pub fn validate_json(path: &Path) -> Result<(), String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str::<serde::de::IgnoredAny>(&data)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn nested_keys_include_parents() {
        let obj = object(json!({
            "home": { "title": "Home", "tutorial": { "step1": "a" } },
            "ok": "OK"
        }));
        let keys: Vec<String> = flatten_keys(&obj).into_iter().collect();
        assert_eq!(
            keys,
            vec!["home", "home.title", "home.tutorial", "home.tutorial.step1", "ok"]
        );
    }

    #[test]
    fn diff_reports_both_directions() {
        let en = object(json!({ "a": "x", "menu": { "play": "Play", "quit": "Quit" } }));
        let tr = object(json!({ "a": "y", "menu": { "play": "Oyna" }, "extra": "e" }));
        let diff = diff_keys(&en, &tr);
        assert_eq!(diff.missing_in_left, vec!["extra"]);
        assert_eq!(diff.missing_in_right, vec!["menu.quit"]);
        assert!(!diff.is_empty());
        assert!(diff_keys(&en, &en).is_empty());
    }

    #[test]
    fn validate_points_at_the_error() {
        let dir = std::env::temp_dir().join(format!("asset_align_json_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let good = dir.join("good.json");
        let bad = dir.join("bad.json");
        fs::write(&good, r#"{"a": [1, 2, {"b": null}]}"#).unwrap();
        fs::write(&bad, "{\n  \"a\": 1,\n}").unwrap();

        assert!(validate_json(&good).is_ok());
        let err = validate_json(&bad).unwrap_err();
        assert!(err.contains("line 3"), "unexpected error: {err}");
        assert!(load_translation_file(&good).is_ok());

        fs::write(&good, "[1, 2]").unwrap();
        assert!(load_translation_file(&good).is_err());
        let _ = fs::remove_dir_all(&dir);
    }
}
