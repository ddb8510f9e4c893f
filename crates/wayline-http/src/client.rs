//! The API client.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::config::HttpClientConfig;
use crate::error::HttpResult;
use crate::token::TokenProvider;

/// JSON API client with bearer token injection.
///
/// Every request is sent with `Content-Type: application/json`; when the
/// token provider yields a token, an `Authorization: Bearer` header is
/// attached. There is no retry and no token refresh: a failed request
/// surfaces to the caller as-is.
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use serde::Deserialize;
/// use wayline_http::{ApiClient, HttpClientConfig, StaticTokenProvider};
///
/// #[derive(Deserialize)]
/// struct Coupon { id: u64 }
///
/// # async fn example() -> Result<(), wayline_http::HttpError> {
/// let config = HttpClientConfig::new("https://api.example.com")?;
/// let client = ApiClient::new(config)?
/// 	.with_token_provider(Arc::new(StaticTokenProvider::new("token")));
/// let coupon: Coupon = client.get("/coupons/1").await?;
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
	inner: reqwest::Client,
	base_url: Url,
	tokens: Option<Arc<dyn TokenProvider>>,
}

impl ApiClient {
	/// Creates a client from a configuration.
	///
	/// # Errors
	///
	/// Returns [`HttpError::Request`](crate::HttpError::Request) when
	/// the underlying client fails to build.
	pub fn new(config: HttpClientConfig) -> HttpResult<Self> {
		let mut headers = HeaderMap::new();
		headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

		let inner = reqwest::Client::builder()
			.default_headers(headers)
			.timeout(config.timeout)
			.build()?;

		Ok(Self {
			inner,
			base_url: config.base_url,
			tokens: None,
		})
	}

	/// Attaches a token provider. Subsequent requests carry its token
	/// as a bearer `Authorization` header.
	pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
		self.tokens = Some(tokens);
		self
	}

	/// Resolves a request path against the base URL.
	///
	/// # Errors
	///
	/// Returns [`HttpError::Url`](crate::HttpError::Url) when the path
	/// cannot be joined.
	pub fn endpoint(&self, path: &str) -> HttpResult<Url> {
		Ok(self.base_url.join(path.trim_start_matches('/'))?)
	}

	fn request(&self, method: Method, url: Url) -> RequestBuilder {
		let mut builder = self.inner.request(method, url);
		if let Some(token) = self.tokens.as_ref().and_then(|provider| provider.token()) {
			builder = builder.bearer_auth(token);
		}
		builder
	}

	async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> HttpResult<T> {
		let response = builder.send().await?.error_for_status()?;
		Ok(response.json().await?)
	}

	/// Sends a GET request and deserializes the JSON response.
	pub async fn get<T: DeserializeOwned>(&self, path: &str) -> HttpResult<T> {
		let url = self.endpoint(path)?;
		debug!(%url, "GET");
		self.send(self.request(Method::GET, url)).await
	}

	/// Sends a POST request with a JSON body.
	pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> HttpResult<T> {
		let url = self.endpoint(path)?;
		debug!(%url, "POST");
		self.send(self.request(Method::POST, url).json(body)).await
	}

	/// Sends a PUT request with a JSON body.
	pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
		&self,
		path: &str,
		body: &B,
	) -> HttpResult<T> {
		let url = self.endpoint(path)?;
		debug!(%url, "PUT");
		self.send(self.request(Method::PUT, url).json(body)).await
	}

	/// Sends a DELETE request, discarding the response body.
	pub async fn delete(&self, path: &str) -> HttpResult<()> {
		let url = self.endpoint(path)?;
		debug!(%url, "DELETE");
		self.request(Method::DELETE, url)
			.send()
			.await?
			.error_for_status()?;
		Ok(())
	}
}

impl std::fmt::Debug for ApiClient {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ApiClient")
			.field("base_url", &self.base_url.as_str())
			.field("has_token_provider", &self.tokens.is_some())
			.finish()
	}
}
