//! Typed data handed from the server to the inline page scripts.
//!
//! Each page serializes one record into a `const page = ...;` statement.
//! The JSON is escaped so it cannot close the surrounding `<script>` element.

use std::collections::BTreeMap;

use serde::Serialize;

/// Data for the manager page script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerBootstrap {
    /// Create submission endpoint.
    pub create_url: String,
    /// Edit page without entity id. `None` when entities are not editable.
    pub update_url: Option<String>,
    /// Trash submission endpoint.
    pub trash_url: String,
    /// Initial create dialog values, keyed by field name.
    pub defaults: BTreeMap<String, String>,
}

/// Data for the edit page script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootstrap {
    /// Where "Save" returns to.
    pub manager_url: String,
    /// Update submission endpoint.
    pub update_url: String,
    /// Trash submission endpoint.
    pub trash_url: String,
    /// Entity being edited.
    pub entity_id: String,
    /// Current field values.
    pub values: BTreeMap<String, String>,
}

/// Serializes `value` as JSON that is safe to inline in a `<script>` block.
///
/// `<`, `>` and `&` are written as unicode escapes, as are the line
/// separators U+2028 and U+2029.
pub fn script_json<T: Serialize>(value: &T) -> String {
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize page data");
            return "null".to_string();
        }
    };

    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// `const page = <json>;`
pub fn page_constant<T: Serialize>(value: &T) -> String {
    format!("const page = {};", script_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_breakout_is_escaped() {
        let json = script_json(&"</script><script>alert(1)</script>");
        assert!(!json.contains("</script>"));
        assert!(json.contains("\\u003c/script\\u003e"));
        let back: String = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "</script><script>alert(1)</script>");
    }

    #[test]
    fn test_line_separators() {
        let json = script_json(&"a\u{2028}b\u{2029}c & d");
        assert_eq!(json, r#""a\u2028b\u2029c \u0026 d""#);
    }

    #[test]
    fn test_manager_bootstrap_shape() {
        let data = ManagerBootstrap {
            create_url: "/crud?path=entity-create-ajax".into(),
            update_url: None,
            trash_url: "/crud?path=entity-trash-ajax".into(),
            defaults: [("status".to_string(), "active".to_string())].into(),
        };
        let js = page_constant(&data);
        assert!(js.starts_with("const page = {"));
        assert!(js.contains(r#""createUrl":"/crud?path=entity-create-ajax""#));
        assert!(js.contains(r#""updateUrl":null"#));
        assert!(js.contains(r#""defaults":{"status":"active"}"#));
    }
}
