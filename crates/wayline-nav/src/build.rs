//! The path/query/fragment builder.
//!
//! Pure functions; link rendering and imperative navigation both go
//! through [`build_path`] so the two can never diverge.

use once_cell::sync::Lazy;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use url::form_urlencoded;

use crate::error::{NavError, NavResult};
use crate::target::ParamValue;

/// Characters left unescaped in substituted path segments, matching the
/// unreserved set of `encodeURIComponent`.
const PATH_VALUE_SET: &AsciiSet = &NON_ALPHANUMERIC
	.remove(b'-')
	.remove(b'_')
	.remove(b'.')
	.remove(b'!')
	.remove(b'~')
	.remove(b'*')
	.remove(b'\'')
	.remove(b'(')
	.remove(b')');

/// Placeholder token: `$` followed by alphanumerics/underscore.
static PLACEHOLDER: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"\$([A-Za-z0-9_]+)").expect("placeholder regex is valid"));

/// Builds a final path string from a route template, parameter values,
/// query entries and an optional fragment.
///
/// Output is `path + query + fragment` in that fixed order, each part
/// omitted when empty. Substituted values are percent-encoded for path
/// inclusion; query entries with `None` values are dropped entirely and
/// the rest keep their insertion order.
///
/// # Errors
///
/// Returns [`NavError::MissingParameter`] when the template references a
/// placeholder with no supplied value, or one whose value stringifies to
/// the empty string.
pub fn build_path(
	template: &str,
	params: &[(String, ParamValue)],
	search: &[(String, Option<ParamValue>)],
	hash: Option<&str>,
) -> NavResult<String> {
	let mut path = String::with_capacity(template.len());
	let mut last_end = 0;

	for caps in PLACEHOLDER.captures_iter(template) {
		let token = caps.get(0).expect("capture group 0 always present");
		let name = &caps[1];

		let value = params
			.iter()
			.find(|(key, _)| key == name)
			.map(|(_, value)| value.to_string())
			.filter(|value| !value.is_empty())
			.ok_or_else(|| NavError::MissingParameter {
				param: name.to_string(),
				template: template.to_string(),
			})?;

		path.push_str(&template[last_end..token.start()]);
		path.push_str(&utf8_percent_encode(&value, PATH_VALUE_SET).to_string());
		last_end = token.end();
	}
	path.push_str(&template[last_end..]);

	let query = build_query(search);
	if !query.is_empty() {
		path.push('?');
		path.push_str(&query);
	}

	if let Some(fragment) = hash {
		let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
		if !fragment.is_empty() {
			path.push('#');
			path.push_str(fragment);
		}
	}

	Ok(path)
}

/// Serializes query entries to an `application/x-www-form-urlencoded`
/// string, without the leading `?`. Entries with `None` values are
/// omitted; key order follows the input slice.
pub fn build_query(search: &[(String, Option<ParamValue>)]) -> String {
	let mut serializer = form_urlencoded::Serializer::new(String::new());
	for (key, value) in search {
		if let Some(value) = value {
			serializer.append_pair(key, &value.to_string());
		}
	}
	serializer.finish()
}

/// Parses a query string (with or without a leading `?`) into ordered
/// key/value pairs.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
	let query = query.strip_prefix('?').unwrap_or(query);
	form_urlencoded::parse(query.as_bytes())
		.map(|(key, value)| (key.into_owned(), value.into_owned()))
		.collect()
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	fn params(entries: &[(&str, ParamValue)]) -> Vec<(String, ParamValue)> {
		entries
			.iter()
			.map(|(key, value)| (key.to_string(), value.clone()))
			.collect()
	}

	#[test]
	fn test_substitutes_integer_param() {
		let path = build_path("/item/$id", &params(&[("id", 42.into())]), &[], None).unwrap();
		assert_eq!(path, "/item/42");
	}

	#[test]
	fn test_missing_param_names_placeholder() {
		let err = build_path("/item/$id", &[], &[], None).unwrap_err();
		assert_eq!(
			err,
			NavError::MissingParameter {
				param: "id".to_string(),
				template: "/item/$id".to_string(),
			}
		);
	}

	#[test]
	fn test_empty_param_value_is_missing() {
		let err = build_path("/item/$id", &params(&[("id", "".into())]), &[], None).unwrap_err();
		assert!(matches!(err, NavError::MissingParameter { param, .. } if param == "id"));
	}

	#[test]
	fn test_multiple_placeholders() {
		let path = build_path(
			"/flash/$coupon_id/active/$tab",
			&params(&[("coupon_id", "123".into()), ("tab", "info".into())]),
			&[],
			None,
		)
		.unwrap();
		assert_eq!(path, "/flash/123/active/info");
	}

	#[test]
	fn test_param_value_percent_encoded() {
		let path = build_path("/q/$term", &params(&[("term", "a b/c".into())]), &[], None).unwrap();
		assert_eq!(path, "/q/a%20b%2Fc");
	}

	#[test]
	fn test_none_query_values_omitted() {
		let search = vec![
			("tab".to_string(), Some(ParamValue::from("info"))),
			("page".to_string(), None),
		];
		let path = build_path("/list", &[], &search, None).unwrap();
		assert_eq!(path, "/list?tab=info");
	}

	#[test]
	fn test_query_preserves_insertion_order() {
		let search = vec![
			("b".to_string(), Some(ParamValue::from(2))),
			("a".to_string(), Some(ParamValue::from(1))),
		];
		assert_eq!(build_query(&search), "b=2&a=1");
	}

	#[test]
	fn test_empty_query_produces_no_question_mark() {
		let search = vec![("page".to_string(), None)];
		let path = build_path("/list", &[], &search, None).unwrap();
		assert_eq!(path, "/list");
	}

	#[rstest]
	#[case(Some("top"), "/flash#top")]
	#[case(Some("#top"), "/flash#top")]
	#[case(Some(""), "/flash")]
	#[case(None, "/flash")]
	fn test_fragment_handling(#[case] hash: Option<&str>, #[case] expected: &str) {
		let path = build_path("/flash", &[], &[], hash).unwrap();
		assert_eq!(path, expected);
	}

	#[test]
	fn test_fixed_part_order() {
		let search = vec![("tab".to_string(), Some(ParamValue::from("info")))];
		let path = build_path(
			"/item/$id",
			&params(&[("id", 7.into())]),
			&search,
			Some("details"),
		)
		.unwrap();
		assert_eq!(path, "/item/7?tab=info#details");
	}

	#[test]
	fn test_round_trip_query() {
		let search = vec![
			("tab".to_string(), Some(ParamValue::from("info"))),
			("page".to_string(), Some(ParamValue::from(3))),
		];
		let built = build_query(&search);
		let parsed = parse_query(&built);
		assert_eq!(
			parsed,
			vec![
				("tab".to_string(), "info".to_string()),
				("page".to_string(), "3".to_string()),
			]
		);
	}
}
