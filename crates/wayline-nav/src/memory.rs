//! In-memory router backend.
//!
//! Hosts without a real browsing context (tests, server-side rendering,
//! TUI shells) get a full [`RouterBackend`] + [`BrowsingHistory`]
//! implementation backed by a plain history stack.

use parking_lot::RwLock;
use tracing::debug;

use crate::backend::{BrowsingHistory, NavigationRequest, RouterBackend};
use crate::error::NavResult;
use crate::location::{ResolvedLocation, RouteMatch, split_path};
use crate::pattern::RoutePattern;

struct MemoryState {
	patterns: Vec<RoutePattern>,
	/// Full path strings (pathname + query + fragment), oldest first.
	stack: Vec<String>,
	/// Index of the current entry in `stack`.
	index: usize,
	version: u64,
}

/// An in-process router.
///
/// Routes are registered as patterns; several patterns may match one
/// pathname (e.g. a section and a detail route), and all matches are
/// reported in registration order so nested parameters merge
/// deterministically.
///
/// # Example
///
/// ```
/// use wayline_nav::MemoryRouter;
///
/// let router = MemoryRouter::with_routes(&["/", "/flash", "/flash/$coupon_id"]).unwrap();
/// assert_eq!(router.current_path(), "/");
/// ```
pub struct MemoryRouter {
	state: RwLock<MemoryState>,
}

impl MemoryRouter {
	/// Creates a router with no registered routes, starting at `/`.
	pub fn new() -> Self {
		Self {
			state: RwLock::new(MemoryState {
				patterns: Vec::new(),
				stack: vec!["/".to_string()],
				index: 0,
				version: 0,
			}),
		}
	}

	/// Creates a router with the given route patterns, starting at `/`.
	///
	/// # Errors
	///
	/// Returns the pattern compilation error for the first invalid
	/// pattern.
	pub fn with_routes(patterns: &[&str]) -> Result<Self, String> {
		let router = Self::new();
		for pattern in patterns {
			router.register(pattern)?;
		}
		Ok(router)
	}

	/// Registers an additional route pattern.
	pub fn register(&self, pattern: &str) -> Result<(), String> {
		let compiled = RoutePattern::new(pattern)?;
		self.state.write().patterns.push(compiled);
		Ok(())
	}

	/// Returns the current full path (pathname + query + fragment).
	pub fn current_path(&self) -> String {
		let state = self.state.read();
		state.stack[state.index].clone()
	}

	fn matches_for(patterns: &[RoutePattern], pathname: &str) -> Vec<RouteMatch> {
		patterns
			.iter()
			.filter_map(|pattern| {
				pattern.matches(pathname).map(|params| RouteMatch {
					pattern: pattern.pattern().to_string(),
					params,
				})
			})
			.collect()
	}
}

impl Default for MemoryRouter {
	fn default() -> Self {
		Self::new()
	}
}

impl RouterBackend for MemoryRouter {
	fn location(&self) -> ResolvedLocation {
		let state = self.state.read();
		let (pathname, search, hash) = split_path(&state.stack[state.index]);
		ResolvedLocation {
			pathname: pathname.to_string(),
			search: search.to_string(),
			hash: hash.to_string(),
			matches: Self::matches_for(&state.patterns, pathname),
			version: state.version,
		}
	}

	fn navigate(&self, request: &NavigationRequest) -> NavResult<()> {
		let mut state = self.state.write();
		debug!(path = %request.path, replace = request.replace, "memory router navigation");
		if request.replace {
			let index = state.index;
			state.stack[index] = request.path.clone();
		} else {
			let index = state.index;
			state.stack.truncate(index + 1);
			state.stack.push(request.path.clone());
			state.index += 1;
		}
		state.version += 1;
		Ok(())
	}
}

impl BrowsingHistory for MemoryRouter {
	fn len(&self) -> usize {
		self.state.read().stack.len()
	}

	fn go(&self, offset: isize) {
		let mut state = self.state.write();
		let target = state.index as isize + offset;
		if target < 0 || target as usize >= state.stack.len() {
			// Out-of-range steps are a no-op, as in a browser
			return;
		}
		state.index = target as usize;
		state.version += 1;
	}
}
