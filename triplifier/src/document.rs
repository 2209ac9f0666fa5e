//! Field access over parsed JSON records.
//!
//! Absent fields never fail: they resolve to the empty string, and every
//! builder gate treats empty and absent identically. JSON `null` is folded
//! into the same sentinel.

use serde_json::Value;

/// Returns the text form of `field` on `node`, or the empty string when the
/// field is absent or `null`.
///
/// String values are returned verbatim; booleans and numbers use their JSON
/// text form, so a boolean `true` compares equal to the string `"true"`.
#[must_use]
pub fn text(node: &Value, field: &str) -> String {
    match node.get(field) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Returns the compact JSON rendering of a node.
///
/// Used for values republished as opaque literals (the `errors` entries),
/// where string values keep their surrounding quotes.
#[must_use]
pub fn json_text(node: &Value) -> String {
    node.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn absent_and_null_resolve_to_empty() {
        let node = json!({ "cig": null });
        assert_eq!(text(&node, "cig"), "");
        assert_eq!(text(&node, "missing"), "");
    }

    #[test]
    fn strings_are_verbatim_and_scalars_use_json_text() {
        let node = json!({ "cig": "5128833EDE", "cigValid": true, "anno": 2014 });
        assert_eq!(text(&node, "cig"), "5128833EDE");
        assert_eq!(text(&node, "cigValid"), "true");
        assert_eq!(text(&node, "anno"), "2014");
    }

    #[test]
    fn json_text_keeps_string_quotes() {
        assert_eq!(json_text(&json!("broken field")), "\"broken field\"");
        assert_eq!(json_text(&json!({ "code": 7 })), "{\"code\":7}");
    }
}
