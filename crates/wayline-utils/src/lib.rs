//! Application support utilities.
//!
//! Timing primitives (sleep/debounce/throttle), JSON key-value storage
//! with pluggable backends, a session token store, and small helper
//! functions for strings, numbers, collections, dates and identifiers.

pub mod collections;
pub mod datetime;
pub mod ids;
pub mod numbers;
pub mod objects;
pub mod storage;
pub mod strings;
pub mod timing;
pub mod tokens;

pub use ids::generate_id;
pub use storage::{
	FileBackend, JsonStore, MemoryBackend, StorageBackend, StorageError, StorageResult,
};
pub use timing::{Debouncer, Throttle, sleep};
pub use tokens::TokenStore;
