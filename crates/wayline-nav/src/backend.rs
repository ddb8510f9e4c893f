//! The seam between the adapter and a concrete router implementation.
//!
//! The adapter only ever needs four capabilities: read the current
//! location, perform an imperative navigation, and (via
//! [`BrowsingHistory`]) count and step through history entries. Any
//! router that can provide these can sit behind
//! [`AppRouter`](crate::AppRouter).

use crate::error::NavResult;
use crate::location::ResolvedLocation;

/// A resolved, imperative navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
	/// Final path string, already built (pathname + query + fragment).
	pub path: String,
	/// Whether to replace the current history entry instead of pushing.
	pub replace: bool,
}

impl NavigationRequest {
	/// A pushing navigation.
	pub fn push(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			replace: false,
		}
	}

	/// A history-replacing navigation.
	pub fn replace(path: impl Into<String>) -> Self {
		Self {
			path: path.into(),
			replace: true,
		}
	}
}

/// Capability set a concrete router must provide.
pub trait RouterBackend: Send + Sync {
	/// Snapshot of the current location, including active route matches.
	fn location(&self) -> ResolvedLocation;

	/// Performs an imperative navigation. The path in the request is
	/// final; backends must not rewrite it.
	fn navigate(&self, request: &NavigationRequest) -> NavResult<()>;
}

/// The ambient browsing history, injected so tests can substitute it.
pub trait BrowsingHistory: Send + Sync {
	/// Number of entries in the browsing session.
	fn len(&self) -> usize;

	/// Whether the session has no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Steps through history by a relative offset (negative = back).
	/// Offsets that point outside the session are a no-op.
	fn go(&self, offset: isize);
}
