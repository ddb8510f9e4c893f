//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{HttpError, HttpResult};

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "WAYLINE_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "WAYLINE_HTTP_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
	/// Base URL every request path is joined against.
	pub base_url: Url,
	/// Per-request timeout.
	pub timeout: Duration,
}

impl HttpClientConfig {
	/// Creates a configuration with the default timeout.
	///
	/// The base URL path is normalized to end with `/` so that joining
	/// request paths never discards its last segment:
	/// `https://api.example.com/v1` and `https://api.example.com/v1/`
	/// both resolve `/coupons` to `https://api.example.com/v1/coupons`.
	///
	/// # Errors
	///
	/// Returns [`HttpError::Url`] when `base_url` does not parse.
	pub fn new(base_url: &str) -> HttpResult<Self> {
		let mut base_url = Url::parse(base_url)?;
		if !base_url.path().ends_with('/') {
			let path = format!("{}/", base_url.path());
			base_url.set_path(&path);
		}
		Ok(Self {
			base_url,
			timeout: DEFAULT_TIMEOUT,
		})
	}

	/// Sets the request timeout.
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	/// Reads the configuration from the environment.
	///
	/// `WAYLINE_API_URL` is required; `WAYLINE_HTTP_TIMEOUT_SECS` is
	/// optional and defaults to 30 seconds.
	///
	/// # Errors
	///
	/// Returns [`HttpError::Config`] when the URL variable is unset or
	/// the timeout variable is not a number, and [`HttpError::Url`]
	/// when the URL does not parse.
	pub fn from_env() -> HttpResult<Self> {
		let base_url = env::var(API_URL_VAR)
			.map_err(|_| HttpError::Config(format!("{} is not set", API_URL_VAR)))?;
		let mut config = Self::new(&base_url)?;

		if let Ok(raw) = env::var(TIMEOUT_VAR) {
			let secs: u64 = raw.parse().map_err(|_| {
				HttpError::Config(format!("{} is not a number: '{}'", TIMEOUT_VAR, raw))
			})?;
			config.timeout = Duration::from_secs(secs);
		}

		Ok(config)
	}
}
