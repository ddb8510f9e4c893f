//! Error types for the HTTP client.

use thiserror::Error;

/// Errors that can occur while configuring or using the API client.
#[derive(Debug, Error)]
pub enum HttpError {
	/// A required configuration value is missing or invalid.
	#[error("configuration error: {0}")]
	Config(String),

	/// A URL failed to parse or join.
	#[error("invalid URL: {0}")]
	Url(#[from] url::ParseError),

	/// The request itself failed (connection, timeout, non-2xx status).
	#[error("request failed: {0}")]
	Request(#[from] reqwest::Error),

	/// The response body was not the expected JSON shape.
	#[error("response deserialization failed: {0}")]
	Deserialize(#[from] serde_json::Error),
}

/// Result type for HTTP client operations.
pub type HttpResult<T> = Result<T, HttpError>;
