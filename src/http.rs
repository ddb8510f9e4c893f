//! HTTP client module.
//!
//! A `reqwest`-based JSON client with base URL configuration and bearer
//! token injection.

pub use wayline_http::*;
