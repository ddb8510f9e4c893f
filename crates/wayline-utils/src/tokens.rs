//! Access/refresh token pair on top of [`JsonStore`].

use tracing::warn;

use crate::storage::{JsonStore, StorageResult};

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Stores the session's access and refresh tokens.
///
/// Reads swallow storage errors (logging them) and report the token as
/// absent, so an unreadable store degrades to "not authenticated"
/// instead of failing the caller.
#[derive(Clone)]
pub struct TokenStore {
	store: JsonStore,
}

impl TokenStore {
	/// Creates a token store over the given storage.
	pub fn new(store: JsonStore) -> Self {
		Self { store }
	}

	/// Creates a token store over a fresh in-memory storage.
	pub fn in_memory() -> Self {
		Self::new(JsonStore::in_memory())
	}

	fn read(&self, key: &str) -> Option<String> {
		match self.store.get::<String>(key) {
			Ok(token) => token,
			Err(error) => {
				warn!(key, %error, "failed to read token");
				None
			}
		}
	}

	/// Returns the access token, if set.
	pub fn access_token(&self) -> Option<String> {
		self.read(ACCESS_TOKEN_KEY)
	}

	/// Returns the refresh token, if set.
	pub fn refresh_token(&self) -> Option<String> {
		self.read(REFRESH_TOKEN_KEY)
	}

	/// Stores the access token.
	pub fn set_access_token(&self, token: &str) -> StorageResult<()> {
		self.store.set(ACCESS_TOKEN_KEY, &token)
	}

	/// Stores the refresh token.
	pub fn set_refresh_token(&self, token: &str) -> StorageResult<()> {
		self.store.set(REFRESH_TOKEN_KEY, &token)
	}

	/// Stores the access token and, when given, the refresh token.
	pub fn set_tokens(&self, access: &str, refresh: Option<&str>) -> StorageResult<()> {
		self.set_access_token(access)?;
		if let Some(refresh) = refresh {
			self.set_refresh_token(refresh)?;
		}
		Ok(())
	}

	/// Removes both tokens.
	pub fn clear_tokens(&self) {
		self.store.remove(ACCESS_TOKEN_KEY);
		self.store.remove(REFRESH_TOKEN_KEY);
	}

	/// Whether an access token is present.
	pub fn is_authenticated(&self) -> bool {
		self.access_token().is_some()
	}
}
