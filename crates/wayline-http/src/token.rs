//! Bearer token providers.

use wayline_utils::TokenStore;

/// Supplies the bearer token attached to outgoing requests.
///
/// Returning `None` sends the request unauthenticated.
pub trait TokenProvider: Send + Sync {
	/// The current token, if any.
	fn token(&self) -> Option<String>;
}

impl TokenProvider for TokenStore {
	fn token(&self) -> Option<String> {
		self.access_token()
	}
}

/// A fixed token, mainly for tests and one-off scripts.
pub struct StaticTokenProvider(Option<String>);

impl StaticTokenProvider {
	/// Always provides the given token.
	pub fn new(token: impl Into<String>) -> Self {
		Self(Some(token.into()))
	}

	/// Never provides a token.
	pub fn none() -> Self {
		Self(None)
	}
}

impl TokenProvider for StaticTokenProvider {
	fn token(&self) -> Option<String> {
		self.0.clone()
	}
}
