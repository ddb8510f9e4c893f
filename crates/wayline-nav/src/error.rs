//! Error types for navigation and path building.

use thiserror::Error;

/// Errors that can occur while resolving or performing a navigation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
	/// A route template referenced a placeholder with no supplied value.
	///
	/// Raised synchronously by the path builder; `push`, `replace` and
	/// `href` propagate it to the caller unchanged.
	#[error("missing param '{param}' for path '{template}'")]
	MissingParameter {
		/// Name of the placeholder that had no value.
		param: String,
		/// The template that referenced it.
		template: String,
	},

	/// The underlying router rejected a navigation.
	#[error("navigation failed: {0}")]
	Navigation(String),
}

/// Result type for navigation operations.
pub type NavResult<T> = Result<T, NavError>;
