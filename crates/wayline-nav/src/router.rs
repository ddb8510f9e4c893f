//! The application-facing navigation adapter.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::backend::{BrowsingHistory, NavigationRequest, RouterBackend};
use crate::error::NavResult;
use crate::location::ResolvedLocation;
use crate::target::NavigateTarget;

/// Default path for [`AppRouter::back`] when there is no history entry
/// to step back to.
pub const DEFAULT_BACK_FALLBACK: &str = "/";

/// Stable navigation interface over any [`RouterBackend`].
///
/// Application code talks to this type only; the concrete router and the
/// browsing history are injected, so replacing the routing library (or
/// substituting both in tests) never touches call sites.
///
/// `push`/`replace` and `href` share one resolution path, so the string
/// a link renders and the string an imperative navigation uses can never
/// diverge.
pub struct AppRouter {
	backend: Arc<dyn RouterBackend>,
	history: Arc<dyn BrowsingHistory>,
	/// Merged params, cached against the location version.
	params_cache: Mutex<Option<(u64, HashMap<String, String>)>>,
}

impl AppRouter {
	/// Creates an adapter over the given backend and history.
	pub fn new(backend: Arc<dyn RouterBackend>, history: Arc<dyn BrowsingHistory>) -> Self {
		Self {
			backend,
			history,
			params_cache: Mutex::new(None),
		}
	}

	/// Resolves a target to its final path string without navigating.
	///
	/// # Errors
	///
	/// Propagates [`NavError::MissingParameter`](crate::NavError::MissingParameter)
	/// from the path builder.
	pub fn href(&self, target: &NavigateTarget) -> NavResult<String> {
		target.resolve()
	}

	/// Resolves a target and performs a pushing navigation.
	pub fn push(&self, target: &NavigateTarget) -> NavResult<()> {
		let path = target.resolve()?;
		debug!(path = %path, "push navigation");
		self.backend.navigate(&NavigationRequest::push(path))
	}

	/// Resolves a target and performs a history-replacing navigation.
	pub fn replace(&self, target: &NavigateTarget) -> NavResult<()> {
		let path = target.resolve()?;
		debug!(path = %path, "replace navigation");
		self.backend.navigate(&NavigationRequest::replace(path))
	}

	/// Steps back one history entry, or navigates to `fallback` when the
	/// session has nothing to step back to (e.g. a deep-linked entry).
	///
	/// Without the fallback a lone-entry `back()` would be a no-op and
	/// leave the app stuck.
	pub fn back(&self, fallback: Option<&str>) -> NavResult<()> {
		if self.history.len() > 1 {
			self.history.go(-1);
			Ok(())
		} else {
			let fallback = fallback.unwrap_or(DEFAULT_BACK_FALLBACK);
			debug!(fallback = %fallback, "no history to step back to, using fallback");
			self.push(&NavigateTarget::path(fallback))
		}
	}

	/// Steps forward one history entry.
	pub fn forward(&self) {
		self.history.go(1);
	}

	/// Snapshot of the backend's current location.
	pub fn location(&self) -> ResolvedLocation {
		self.backend.location()
	}

	/// The current path, verbatim.
	pub fn pathname(&self) -> String {
		self.backend.location().pathname
	}

	/// Parameters merged from all active route matches.
	///
	/// Matches merge outermost first, so a nested match overrides an
	/// outer one for the same name. Recomputed only when the match list
	/// changes (keyed on the location version).
	pub fn params(&self) -> HashMap<String, String> {
		let location = self.backend.location();
		let mut cache = self.params_cache.lock();
		if let Some((version, params)) = cache.as_ref() {
			if *version == location.version {
				return params.clone();
			}
		}
		let merged = location.merged_params();
		*cache = Some((location.version, merged.clone()));
		merged
	}

	/// Parsed query mapping for the current location.
	pub fn query(&self) -> HashMap<String, String> {
		self.backend.location().query()
	}

	/// The current fragment, without the leading `#`.
	pub fn hash(&self) -> String {
		self.backend.location().hash
	}

	/// Whether `path` is the current path or an ancestor of it.
	///
	/// True when the current pathname equals `path` exactly, or descends
	/// from it under a `/` boundary. `/flashsale` is never active for
	/// `/flash`.
	pub fn is_active(&self, path: &str) -> bool {
		let pathname = self.backend.location().pathname;
		if pathname == path {
			return true;
		}
		let prefix = format!("{}/", path.trim_end_matches('/'));
		pathname.starts_with(&prefix)
	}
}

impl std::fmt::Debug for AppRouter {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppRouter")
			.field("pathname", &self.backend.location().pathname)
			.field("history_len", &self.history.len())
			.finish()
	}
}
