//! Wayline: library-agnostic client-side navigation for Rust
//! applications, plus the small support layer most client apps carry:
//! timing utilities, JSON key-value storage, a token store, and an HTTP
//! client wrapper with bearer token injection.
//!
//! The navigation core is always available; the `utils` and `http`
//! features (both on by default) pull in the support crates.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wayline::nav::{AppRouter, MemoryRouter, NavigateTarget};
//!
//! let backend = Arc::new(MemoryRouter::with_routes(&["/", "/item/$id"]).unwrap());
//! let router = AppRouter::new(backend.clone(), backend);
//!
//! router.push(&NavigateTarget::route("/item/$id").param("id", 42)).unwrap();
//! assert_eq!(router.pathname(), "/item/42");
//! ```

pub mod nav;

#[cfg(feature = "http")]
pub mod http;
#[cfg(feature = "utils")]
pub mod utils;
