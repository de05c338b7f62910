//! Diff generation for audit logging
//!
//! Generates human-readable diffs between the JSON forms of a record before
//! and after an edit.

use serde_json::Value;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported. Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_edit() {
        let before = json!({"amount": 200.0, "category": "Food", "date": "2024-01-01", "description": ""});
        let after = json!({"amount": 200.0, "category": "Travel", "date": "2024-01-02", "description": ""});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("category: \"Food\" -> \"Travel\""));
        assert!(diff.contains("date: \"2024-01-01\" -> \"2024-01-02\""));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_field_added_and_removed() {
        let before = json!({"source": "Salary"});
        let after = json!({"category": "Food"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("source: \"Salary\" -> (removed)"));
        assert!(diff.contains("category: (added) -> \"Food\""));
    }

    #[test]
    fn test_no_changes() {
        let before = json!({"amount": 1.5, "description": "x"});
        assert!(generate_diff(&before, &before.clone()).is_none());
    }

    #[test]
    fn test_scalar_change() {
        assert_eq!(
            generate_diff(&json!(1), &json!(2)).as_deref(),
            Some("1 -> 2")
        );
    }

    #[test]
    fn test_long_string_truncation() {
        let before = json!({"description": "é".repeat(100)});
        let after = json!({"description": "short"});

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!(null)), "null");
        assert_eq!(format_value(&json!(true)), "true");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!("test")), "\"test\"");
        assert_eq!(format_value(&json!([1, 2, 3])), "[3 items]");
        assert_eq!(format_value(&json!({"a": 1, "b": 2})), "{2 fields}");
    }
}
