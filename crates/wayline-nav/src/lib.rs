//! Library-agnostic client-side navigation.
//!
//! This crate wraps a routing implementation behind a stable interface:
//! path building from templates, forward/backward navigation, current
//! location accessors and active-path testing. Application code depends
//! on [`AppRouter`] only; the concrete router satisfies the narrow
//! [`RouterBackend`] + [`BrowsingHistory`] seam and can be swapped
//! without touching call sites.
//!
//! Route templates use `$name` placeholders:
//!
//! ```
//! use std::sync::Arc;
//! use wayline_nav::{AppRouter, MemoryRouter, NavigateTarget};
//!
//! let backend = Arc::new(MemoryRouter::with_routes(&["/", "/item/$id"]).unwrap());
//! let router = AppRouter::new(backend.clone(), backend);
//!
//! let target = NavigateTarget::route("/item/$id").param("id", 42).search("tab", "info");
//! assert_eq!(router.href(&target).unwrap(), "/item/42?tab=info");
//!
//! router.push(&target).unwrap();
//! assert_eq!(router.pathname(), "/item/42");
//! assert!(router.is_active("/item"));
//! ```
//!
//! The fragment is exposed without its `#` sigil everywhere; parameters
//! from nested route matches merge outermost first, so deeper matches
//! win.

pub mod backend;
pub mod build;
pub mod error;
pub mod location;
pub mod memory;
pub mod pattern;
pub mod router;
pub mod target;

pub use backend::{BrowsingHistory, NavigationRequest, RouterBackend};
pub use build::{build_path, build_query, parse_query};
pub use error::{NavError, NavResult};
pub use location::{ResolvedLocation, RouteMatch};
pub use memory::MemoryRouter;
pub use pattern::RoutePattern;
pub use router::{AppRouter, DEFAULT_BACK_FALLBACK};
pub use target::{NavigateTarget, ParamValue};
