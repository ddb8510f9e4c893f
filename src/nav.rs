//! Navigation module.
//!
//! Route templates, the path/query/fragment builder, the
//! backend/history seam and the [`AppRouter`](wayline_nav::AppRouter)
//! facade.

pub use wayline_nav::*;
