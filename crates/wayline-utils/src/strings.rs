//! String helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// ASCII-only on purpose: non-Latin characters are dropped, not
// transliterated
static NON_SLUG: Lazy<Regex> =
	Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s_-]").expect("valid regex"));
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid regex"));

/// Uppercases the first character and lowercases the rest.
///
/// ```
/// use wayline_utils::strings::capitalize;
///
/// assert_eq!(capitalize("jOHN"), "John");
/// ```
pub fn capitalize(input: &str) -> String {
	let mut chars = input.chars();
	match chars.next() {
		None => String::new(),
		Some(first) => first
			.to_uppercase()
			.chain(chars.flat_map(char::to_lowercase))
			.collect(),
	}
}

/// Converts a string to a URL-friendly slug: lowercased, special
/// characters removed, whitespace/underscore runs collapsed to a single
/// dash, leading and trailing dashes trimmed.
///
/// ```
/// use wayline_utils::strings::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
/// ```
pub fn slugify(input: &str) -> String {
	let lowered = input.to_lowercase();
	let stripped = NON_SLUG.replace_all(lowered.trim(), "");
	SEPARATORS
		.replace_all(&stripped, "-")
		.trim_matches('-')
		.to_string()
}

/// Truncates a string to at most `length` characters, appending
/// `suffix` when something was cut. The suffix counts toward the limit;
/// when the suffix alone exceeds `length`, it is truncated too, so the
/// output never exceeds `length` characters.
///
/// ```
/// use wayline_utils::strings::truncate;
///
/// assert_eq!(truncate("Hello World", 8, "..."), "Hello...");
/// assert_eq!(truncate("Hi", 10, "..."), "Hi");
/// ```
pub fn truncate(input: &str, length: usize, suffix: &str) -> String {
	if input.chars().count() <= length {
		return input.to_string();
	}
	let suffix_len = suffix.chars().count();
	if suffix_len >= length {
		return suffix.chars().take(length).collect();
	}
	let mut output: String = input.chars().take(length - suffix_len).collect();
	output.push_str(suffix);
	output
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("hello", "Hello")]
	#[case("WORLD", "World")]
	#[case("jOHN", "John")]
	#[case("", "")]
	fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(capitalize(input), expected);
	}

	#[rstest]
	#[case("Hello World!", "hello-world")]
	#[case("  Multiple   Spaces  ", "multiple-spaces")]
	#[case("snake_case_name", "snake-case-name")]
	#[case("สวัสดี Test", "test")]
	#[case("---", "")]
	fn test_slugify(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(slugify(input), expected);
	}

	#[test]
	fn test_truncate_counts_suffix_in_length() {
		assert_eq!(truncate("Hello World", 8, "..."), "Hello...");
		assert_eq!(truncate("Hello World", 8, "…"), "Hello W…");
	}

	#[test]
	fn test_truncate_leaves_short_strings() {
		assert_eq!(truncate("Hi", 10, "..."), "Hi");
	}

	#[test]
	fn test_truncate_never_exceeds_length() {
		assert_eq!(truncate("Hello World", 2, "..."), "..");
		assert_eq!(truncate("Hello World", 3, "..."), "...");
		assert_eq!(truncate("Hello World", 0, "..."), "");
	}
}
