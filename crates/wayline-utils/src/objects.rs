//! Helpers for dynamic JSON values.

use serde_json::Value;

/// Returns `true` when a JSON value carries no content: `null`, an
/// empty string, an empty array or an empty object. Numbers and
/// booleans are never empty.
///
/// ```
/// use serde_json::json;
/// use wayline_utils::objects::is_empty;
///
/// assert!(is_empty(&json!(null)));
/// assert!(is_empty(&json!("")));
/// assert!(is_empty(&json!([])));
/// assert!(is_empty(&json!({})));
/// assert!(!is_empty(&json!(0)));
/// assert!(!is_empty(&json!({ "a": 1 })));
/// ```
pub fn is_empty(value: &Value) -> bool {
	match value {
		Value::Null => true,
		Value::String(s) => s.is_empty(),
		Value::Array(items) => items.is_empty(),
		Value::Object(map) => map.is_empty(),
		Value::Bool(_) | Value::Number(_) => false,
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;
	use serde_json::json;

	use super::*;

	#[rstest]
	#[case(json!(null), true)]
	#[case(json!(""), true)]
	#[case(json!([]), true)]
	#[case(json!({}), true)]
	#[case(json!("hello"), false)]
	#[case(json!([1, 2]), false)]
	#[case(json!({ "a": 1 }), false)]
	#[case(json!(0), false)]
	#[case(json!(false), false)]
	fn test_is_empty(#[case] value: serde_json::Value, #[case] expected: bool) {
		assert_eq!(is_empty(&value), expected);
	}
}
