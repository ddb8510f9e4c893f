//! HTTP client wrapper with token injection.
//!
//! A thin layer over `reqwest`: a configured base URL, JSON defaults,
//! and a pluggable [`TokenProvider`] that attaches a bearer token to
//! every outgoing request. Retry and token-refresh logic are explicitly
//! out of scope.

pub mod client;
pub mod config;
pub mod error;
pub mod token;

pub use client::ApiClient;
pub use config::HttpClientConfig;
pub use error::{HttpError, HttpResult};
pub use token::{StaticTokenProvider, TokenProvider};
