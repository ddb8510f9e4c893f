//! Compiled route patterns for the in-memory router.

use percent_encoding::percent_decode_str;
use regex::RegexBuilder;

/// Maximum allowed length for a route pattern string in bytes.
const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a route pattern.
const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex (in bytes).
const MAX_REGEX_SIZE: usize = 1 << 20; // 1 MiB

/// A compiled route pattern.
///
/// Placeholders are written `$name` and capture a single path segment
/// (anything except `/`). Literal text matches exactly:
///
/// - `/flash` — exact match
/// - `/flash/$coupon_id` — one parameter
/// - `/flash/$coupon_id/items/$item_id` — multiple parameters
#[derive(Debug, Clone)]
pub struct RoutePattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled regex.
	regex: regex::Regex,
	/// Parameter names in pattern order.
	param_names: Vec<String>,
}

impl RoutePattern {
	/// Compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns an error string if the pattern exceeds the length or
	/// segment limits, or compiles to an invalid regex.
	pub fn new(pattern: &str) -> Result<Self, String> {
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(format!(
				"pattern length {} exceeds maximum of {} bytes",
				pattern.len(),
				MAX_PATTERN_LENGTH
			));
		}

		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(format!(
				"pattern has {} path segments, exceeding maximum of {}",
				segment_count, MAX_PATH_SEGMENTS
			));
		}

		let (regex_str, param_names) = Self::compile(pattern);

		let regex = RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| format!("failed to compile pattern regex: {}", e))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	/// Compiles a pattern into a regex string plus ordered parameter names.
	fn compile(pattern: &str) -> (String, Vec<String>) {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'$' => {
					let mut param = String::new();
					while let Some(&next) = chars.peek() {
						if next.is_ascii_alphanumeric() || next == '_' {
							param.push(next);
							chars.next();
						} else {
							break;
						}
					}
					if param.is_empty() {
						// Bare '$' is literal text
						regex_str.push_str("\\$");
					} else {
						regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
						param_names.push(param);
					}
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '|' | '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => {
					regex_str.push(c);
				}
			}
		}

		regex_str.push('$');
		(regex_str, param_names)
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Attempts to match a pathname, returning extracted parameters in
	/// pattern order. Captured segments are percent-decoded, so a value
	/// substituted into a built path comes back out unchanged.
	pub fn matches(&self, pathname: &str) -> Option<Vec<(String, String)>> {
		self.regex.captures(pathname).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name).map(|m| {
						let decoded = percent_decode_str(m.as_str()).decode_utf8_lossy();
						(name.clone(), decoded.into_owned())
					})
				})
				.collect()
		})
	}

	/// Checks whether this pattern matches the given pathname.
	pub fn is_match(&self, pathname: &str) -> bool {
		self.regex.is_match(pathname)
	}
}

impl PartialEq for RoutePattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for RoutePattern {}

impl std::fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}
