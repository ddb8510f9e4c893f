//! Resolved location snapshots.

use std::collections::HashMap;

use crate::build::parse_query;

/// One matched route segment for the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
	/// The pattern that matched, e.g. `/flash/$coupon_id`.
	pub pattern: String,
	/// Extracted parameters, in the order they appear in the pattern.
	pub params: Vec<(String, String)>,
}

/// Read-only snapshot of the router's current location.
///
/// Produced by a [`RouterBackend`](crate::RouterBackend); never mutated
/// by consumers. `version` increases on every location change and is the
/// memoization key for derived data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
	/// Current path, verbatim.
	pub pathname: String,
	/// Raw query string without the leading `?`. Empty when absent.
	pub search: String,
	/// Fragment without the leading `#`. Empty when absent.
	pub hash: String,
	/// Active route matches, outermost first.
	pub matches: Vec<RouteMatch>,
	/// Monotonic change counter.
	pub version: u64,
}

impl ResolvedLocation {
	/// Parses the query string into a map. Later duplicate keys override
	/// earlier ones.
	pub fn query(&self) -> HashMap<String, String> {
		parse_query(&self.search).into_iter().collect()
	}

	/// Merges parameters from all matches into one map.
	///
	/// Matches are applied outermost first, so a later (more deeply
	/// nested) match overrides an earlier one for the same name.
	pub fn merged_params(&self) -> HashMap<String, String> {
		let mut merged = HashMap::new();
		for route_match in &self.matches {
			for (name, value) in &route_match.params {
				merged.insert(name.clone(), value.clone());
			}
		}
		merged
	}
}

/// Splits a full path into pathname, query string and fragment.
///
/// The fragment is split off first, matching URL syntax where `?` inside
/// a fragment has no meaning.
pub(crate) fn split_path(path: &str) -> (&str, &str, &str) {
	let (without_hash, hash) = match path.split_once('#') {
		Some((head, fragment)) => (head, fragment),
		None => (path, ""),
	};
	let (pathname, search) = match without_hash.split_once('?') {
		Some((head, query)) => (head, query),
		None => (without_hash, ""),
	};
	(pathname, search, hash)
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("/flash", "/flash", "", "")]
	#[case("/flash?tab=info", "/flash", "tab=info", "")]
	#[case("/flash?tab=info#top", "/flash", "tab=info", "top")]
	#[case("/flash#top", "/flash", "", "top")]
	#[case("/flash#top?not-a-query", "/flash", "", "top?not-a-query")]
	fn test_split_path(
		#[case] path: &str,
		#[case] pathname: &str,
		#[case] search: &str,
		#[case] hash: &str,
	) {
		assert_eq!(split_path(path), (pathname, search, hash));
	}

	#[test]
	fn test_later_match_overrides_earlier() {
		let location = ResolvedLocation {
			pathname: "/flash/123".to_string(),
			search: String::new(),
			hash: String::new(),
			matches: vec![
				RouteMatch {
					pattern: "/flash/$id".to_string(),
					params: vec![("id".to_string(), "outer".to_string())],
				},
				RouteMatch {
					pattern: "/flash/$id/detail".to_string(),
					params: vec![("id".to_string(), "inner".to_string())],
				},
			],
			version: 0,
		};
		assert_eq!(location.merged_params().get("id").map(String::as_str), Some("inner"));
	}

	#[test]
	fn test_query_map() {
		let location = ResolvedLocation {
			pathname: "/list".to_string(),
			search: "tab=info&page=2".to_string(),
			hash: String::new(),
			matches: Vec::new(),
			version: 0,
		};
		let query = location.query();
		assert_eq!(query.get("tab").map(String::as_str), Some("info"));
		assert_eq!(query.get("page").map(String::as_str), Some("2"));
	}
}
