//! Navigation targets: literal paths and structured route descriptions.

use std::fmt;

use crate::build::build_path;
use crate::error::NavResult;

/// A scalar value usable as a path parameter or query value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
	/// String value, used as-is.
	Str(String),
	/// Integer value, stringified on serialization.
	Int(i64),
}

impl fmt::Display for ParamValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Str(s) => f.write_str(s),
			Self::Int(n) => write!(f, "{}", n),
		}
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		Self::Str(value.to_string())
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<i32> for ParamValue {
	fn from(value: i32) -> Self {
		Self::Int(value as i64)
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		Self::Int(value as i64)
	}
}

impl From<usize> for ParamValue {
	fn from(value: usize) -> Self {
		Self::Int(value as i64)
	}
}

/// Where a navigation should go.
///
/// Either a literal path string used verbatim, or a structured target
/// built from a route template (`/item/$id`), parameter values, query
/// entries and an optional fragment.
///
/// # Example
///
/// ```
/// use wayline_nav::NavigateTarget;
///
/// let target = NavigateTarget::route("/item/$id")
/// 	.param("id", 42)
/// 	.search("tab", "info")
/// 	.hash("top");
/// assert_eq!(target.resolve().unwrap(), "/item/42?tab=info#top");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateTarget {
	/// A literal path, used without any processing.
	Path(String),
	/// A structured target resolved through the path builder.
	Route {
		/// Route template with `$name` placeholders.
		to: String,
		/// Placeholder values, in insertion order.
		params: Vec<(String, ParamValue)>,
		/// Query entries, in insertion order. `None` values are omitted
		/// from the query string entirely.
		search: Vec<(String, Option<ParamValue>)>,
		/// Fragment, stored without the leading `#`.
		hash: Option<String>,
	},
}

impl NavigateTarget {
	/// Creates a literal path target.
	pub fn path(path: impl Into<String>) -> Self {
		Self::Path(path.into())
	}

	/// Creates a structured target from a route template.
	pub fn route(template: impl Into<String>) -> Self {
		Self::Route {
			to: template.into(),
			params: Vec::new(),
			search: Vec::new(),
			hash: None,
		}
	}

	/// Adds a placeholder value.
	///
	/// No-op on literal path targets.
	pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		if let Self::Route { params, .. } = &mut self {
			params.push((name.into(), value.into()));
		}
		self
	}

	/// Adds a query entry.
	pub fn search(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		if let Self::Route { search, .. } = &mut self {
			search.push((key.into(), Some(value.into())));
		}
		self
	}

	/// Adds a query key with no value. The entry is dropped during
	/// serialization; this exists so call sites can pass through
	/// optional values without filtering first.
	pub fn search_opt(
		mut self,
		key: impl Into<String>,
		value: Option<impl Into<ParamValue>>,
	) -> Self {
		if let Self::Route { search, .. } = &mut self {
			search.push((key.into(), value.map(Into::into)));
		}
		self
	}

	/// Sets the fragment. A leading `#` is stripped.
	pub fn hash(mut self, fragment: impl Into<String>) -> Self {
		if let Self::Route { hash, .. } = &mut self {
			let fragment = fragment.into();
			*hash = Some(fragment.strip_prefix('#').unwrap_or(&fragment).to_string());
		}
		self
	}

	/// Resolves this target to its final path string.
	///
	/// Literal paths pass through verbatim; structured targets go through
	/// the path builder. Pure: performs no navigation.
	///
	/// # Errors
	///
	/// Returns [`NavError::MissingParameter`](crate::NavError::MissingParameter)
	/// when the template references a placeholder with no non-empty value.
	pub fn resolve(&self) -> NavResult<String> {
		match self {
			Self::Path(path) => Ok(path.clone()),
			Self::Route {
				to,
				params,
				search,
				hash,
			} => build_path(to, params, search, hash.as_deref()),
		}
	}
}

impl From<&str> for NavigateTarget {
	fn from(path: &str) -> Self {
		Self::Path(path.to_string())
	}
}

impl From<String> for NavigateTarget {
	fn from(path: String) -> Self {
		Self::Path(path)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_literal_path_passthrough() {
		let target = NavigateTarget::path("/flash?tab=live#top");
		assert_eq!(target.resolve().unwrap(), "/flash?tab=live#top");
	}

	#[test]
	fn test_hash_sigil_stripped_once() {
		let target = NavigateTarget::route("/flash").hash("#top");
		assert_eq!(target.resolve().unwrap(), "/flash#top");
	}

	#[test]
	fn test_param_ignored_on_literal_target() {
		let target = NavigateTarget::path("/flash").param("id", 1);
		assert_eq!(target.resolve().unwrap(), "/flash");
	}

	#[test]
	fn test_param_value_display() {
		assert_eq!(ParamValue::from("abc").to_string(), "abc");
		assert_eq!(ParamValue::from(42).to_string(), "42");
	}
}
