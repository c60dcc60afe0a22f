//! Dot-path resolution.
//!
//! A field path like `user.address.city` descends through nested JSON
//! objects. Paths never address array elements by index; membership checks
//! on arrays are the job of the `in`/`range` rules applied to the whole
//! resolved value.

use serde_json::Value;

/// Outcome of resolving a field path against a document.
///
/// A present `null` leaf resolves as `Found(Value::Null)` and is distinct
/// from `NotFound`. Only a genuinely absent key, or a descent step through a
/// non-object value, produces `NotFound` — the two causes are deliberately
/// indistinguishable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution<'a> {
    Found(&'a Value),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&'a Value> {
        match *self {
            Resolution::Found(value) => Some(value),
            Resolution::NotFound => None,
        }
    }
}

/// Resolve a dot-separated field path against a nested document.
///
/// Each segment must be a key of the current object. Resolution is O(path
/// depth) and never fails; missing keys and non-object intermediates both
/// yield [`Resolution::NotFound`].
pub fn resolve<'a>(document: &'a Value, path: &str) -> Resolution<'a> {
    let mut current = document;

    for segment in path.split('.') {
        // `Value::get` returns None both for a missing key and for a
        // non-object current value, collapsing the two not-found causes.
        match current.get(segment) {
            Some(next) => current = next,
            None => return Resolution::NotFound,
        }
    }

    Resolution::Found(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolve_top_level_key() {
        let doc = json!({"id": 123});
        assert_eq!(resolve(&doc, "id"), Resolution::Found(&json!(123)));
    }

    #[test]
    fn resolve_nested_path() {
        let doc = json!({"user": {"address": {"city": "São Paulo"}}});
        let resolved = resolve(&doc, "user.address.city");
        assert_eq!(resolved.value(), Some(&json!("São Paulo")));
    }

    #[test]
    fn missing_first_segment_is_not_found() {
        let doc = json!({"id": 123});
        assert_eq!(resolve(&doc, "status"), Resolution::NotFound);
    }

    #[test]
    fn descent_through_scalar_is_not_found() {
        // "id" resolves to a number, so descending further must behave
        // exactly like a missing key.
        let doc = json!({"id": 123});
        assert_eq!(resolve(&doc, "id.digits"), Resolution::NotFound);
    }

    #[test]
    fn descent_through_array_is_not_found() {
        let doc = json!({"items": [1, 2, 3]});
        assert_eq!(resolve(&doc, "items.first"), Resolution::NotFound);
    }

    #[test]
    fn null_leaf_is_found() {
        let doc = json!({"user": {"nickname": null}});
        let resolved = resolve(&doc, "user.nickname");
        assert!(resolved.is_found());
        assert_eq!(resolved.value(), Some(&Value::Null));
    }

    #[test]
    fn empty_document_is_not_found() {
        let doc = json!({});
        assert_eq!(resolve(&doc, "anything"), Resolution::NotFound);
    }

    #[test]
    fn partial_path_match_is_not_found() {
        let doc = json!({"user": {"address": {}}});
        assert_eq!(resolve(&doc, "user.address.city"), Resolution::NotFound);
    }
}
