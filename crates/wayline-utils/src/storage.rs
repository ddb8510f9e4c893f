//! Typed key-value storage over pluggable backends.
//!
//! [`JsonStore`] round-trips values through `serde_json`, mirroring a
//! browser's local storage with JSON-serialized entries. Backends only
//! deal in raw strings.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while reading or writing storage.
#[derive(Debug, Error)]
pub enum StorageError {
	/// A value failed to serialize or deserialize.
	#[error("serialization failed for key '{key}': {source}")]
	Serialization {
		/// The key being read or written.
		key: String,
		/// Underlying serde error.
		#[source]
		source: serde_json::Error,
	},

	/// The backing file could not be read or written.
	#[error("storage I/O failed: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Raw string storage.
pub trait StorageBackend: Send + Sync {
	/// Returns the raw value for a key.
	fn get(&self, key: &str) -> Option<String>;

	/// Stores a raw value.
	fn set(&self, key: &str, value: String) -> StorageResult<()>;

	/// Removes a key. Missing keys are ignored.
	fn remove(&self, key: &str) -> StorageResult<()>;

	/// Removes all keys.
	fn clear(&self) -> StorageResult<()>;

	/// Returns all stored keys, in no particular order.
	fn keys(&self) -> Vec<String>;

	/// Number of stored entries.
	fn len(&self) -> usize {
		self.keys().len()
	}

	/// Whether the store has no entries.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Volatile in-process backend.
#[derive(Default)]
pub struct MemoryBackend {
	entries: RwLock<HashMap<String, String>>,
}

impl MemoryBackend {
	/// Creates an empty backend.
	pub fn new() -> Self {
		Self::default()
	}
}

impl StorageBackend for MemoryBackend {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: String) -> StorageResult<()> {
		self.entries.write().insert(key.to_string(), value);
		Ok(())
	}

	fn remove(&self, key: &str) -> StorageResult<()> {
		self.entries.write().remove(key);
		Ok(())
	}

	fn clear(&self) -> StorageResult<()> {
		self.entries.write().clear();
		Ok(())
	}

	fn keys(&self) -> Vec<String> {
		self.entries.read().keys().cloned().collect()
	}
}

/// File-persisted backend.
///
/// The whole map is written as one JSON object after every mutation;
/// suitable for small configuration-sized stores, not bulk data.
pub struct FileBackend {
	path: PathBuf,
	entries: RwLock<HashMap<String, String>>,
}

impl FileBackend {
	/// Opens (or creates) a store at the given path.
	///
	/// # Errors
	///
	/// Returns an error when the file exists but cannot be read or is
	/// not a JSON string map.
	pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
		let path = path.as_ref().to_path_buf();
		let entries = if path.exists() {
			let raw = fs::read_to_string(&path)?;
			serde_json::from_str(&raw).map_err(|source| StorageError::Serialization {
				key: path.display().to_string(),
				source,
			})?
		} else {
			HashMap::new()
		};
		Ok(Self {
			path,
			entries: RwLock::new(entries),
		})
	}

	fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
		let raw = serde_json::to_string_pretty(entries).map_err(|source| {
			StorageError::Serialization {
				key: self.path.display().to_string(),
				source,
			}
		})?;
		fs::write(&self.path, raw)?;
		Ok(())
	}
}

impl StorageBackend for FileBackend {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.read().get(key).cloned()
	}

	fn set(&self, key: &str, value: String) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.insert(key.to_string(), value);
		self.persist(&entries)
	}

	fn remove(&self, key: &str) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.remove(key);
		self.persist(&entries)
	}

	fn clear(&self) -> StorageResult<()> {
		let mut entries = self.entries.write();
		entries.clear();
		self.persist(&entries)
	}

	fn keys(&self) -> Vec<String> {
		self.entries.read().keys().cloned().collect()
	}
}

/// Typed key-value store with JSON-serialized values.
#[derive(Clone)]
pub struct JsonStore {
	backend: Arc<dyn StorageBackend>,
}

impl JsonStore {
	/// Creates a store over the given backend.
	pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
		Self { backend }
	}

	/// Creates a store over a fresh in-memory backend.
	pub fn in_memory() -> Self {
		Self::new(Arc::new(MemoryBackend::new()))
	}

	/// Serializes and stores a value.
	pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
		let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialization {
			key: key.to_string(),
			source,
		})?;
		self.backend.set(key, raw)
	}

	/// Reads and deserializes a value. `Ok(None)` when the key is
	/// absent.
	///
	/// # Errors
	///
	/// Returns a serialization error when the stored string is not
	/// valid JSON for `T`; use [`get_raw`](Self::get_raw) for entries
	/// written by other producers.
	pub fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
		match self.backend.get(key) {
			None => Ok(None),
			Some(raw) => serde_json::from_str(&raw)
				.map(Some)
				.map_err(|source| StorageError::Serialization {
					key: key.to_string(),
					source,
				}),
		}
	}

	/// Reads the raw stored string without deserializing.
	pub fn get_raw(&self, key: &str) -> Option<String> {
		self.backend.get(key)
	}

	/// Whether a key exists.
	pub fn contains(&self, key: &str) -> bool {
		self.backend.get(key).is_some()
	}

	/// Removes a key, logging (not propagating) backend failures.
	pub fn remove(&self, key: &str) {
		if let Err(error) = self.backend.remove(key) {
			warn!(key, %error, "failed to remove storage entry");
		}
	}

	/// Removes all keys, logging (not propagating) backend failures.
	pub fn clear(&self) {
		if let Err(error) = self.backend.clear() {
			warn!(%error, "failed to clear storage");
		}
	}

	/// All stored keys.
	pub fn keys(&self) -> Vec<String> {
		self.backend.keys()
	}

	/// Number of stored entries.
	pub fn len(&self) -> usize {
		self.backend.len()
	}

	/// Whether the store has no entries.
	pub fn is_empty(&self) -> bool {
		self.backend.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use serde::{Deserialize, Serialize};

	use super::*;

	#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
	struct Profile {
		name: String,
		age: u32,
	}

	#[test]
	fn test_set_get_typed_value() {
		let store = JsonStore::in_memory();
		let profile = Profile {
			name: "John".to_string(),
			age: 30,
		};
		store.set("profile", &profile).unwrap();
		assert_eq!(store.get::<Profile>("profile").unwrap(), Some(profile));
	}

	#[test]
	fn test_get_missing_key_is_none() {
		let store = JsonStore::in_memory();
		assert_eq!(store.get::<String>("missing").unwrap(), None);
	}

	#[test]
	fn test_get_wrong_type_is_error() {
		let store = JsonStore::in_memory();
		store.set("count", &7).unwrap();
		assert!(store.get::<Profile>("count").is_err());
	}

	#[test]
	fn test_remove_and_contains() {
		let store = JsonStore::in_memory();
		store.set("key", &"value").unwrap();
		assert!(store.contains("key"));
		store.remove("key");
		assert!(!store.contains("key"));
	}

	#[test]
	fn test_clear_empties_store() {
		let store = JsonStore::in_memory();
		store.set("a", &1).unwrap();
		store.set("b", &2).unwrap();
		assert_eq!(store.len(), 2);
		store.clear();
		assert!(store.is_empty());
	}

	#[test]
	fn test_file_backend_persists_across_opens() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("store.json");

		{
			let store = JsonStore::new(Arc::new(FileBackend::open(&path).unwrap()));
			store.set("token", &"abc123").unwrap();
		}

		let reopened = JsonStore::new(Arc::new(FileBackend::open(&path).unwrap()));
		assert_eq!(
			reopened.get::<String>("token").unwrap(),
			Some("abc123".to_string())
		);
	}

	#[test]
	fn test_file_backend_rejects_non_map_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.json");
		fs::write(&path, "[1, 2, 3]").unwrap();
		assert!(FileBackend::open(&path).is_err());
	}
}
