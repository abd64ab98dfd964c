//! # Storage Layer
//!
//! Persistence is a small key-value port: each named slot holds one JSON
//! document. The [`KeyValueStore`] trait lets the session run against
//! different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one `<key>.json` file per slot
//!   under the data directory.
//! - [`memory::InMemoryStore`]: In-memory storage for testing. Writes can be
//!   made to fail to exercise the degraded paths.
//!
//! ## Failure Contract
//!
//! The raw methods return errors. The typed [`KeyValueStore::get`] and
//! [`KeyValueStore::set`] never do: a slot that is missing or cannot be
//! decoded reads as the caller's default, and a write that fails is logged
//! and dropped. Last writer wins, nothing is transactional.
//!
//! ```text
//! <data dir>/
//! ├── favorites.json       # JSON array of properties, insertion order
//! ├── searchCriteria.json  # last submitted search criteria
//! └── config.json          # AppConfig (not a store slot)
//! ```

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

pub mod fs;
pub mod memory;

/// Slot holding the favorites list.
pub const FAVORITES_KEY: &str = "favorites";
/// Slot holding the last submitted search criteria.
pub const CRITERIA_KEY: &str = "searchCriteria";

/// Abstract interface for the persisted key-value slots.
pub trait KeyValueStore {
    /// Read the raw JSON text of a slot, `None` when it was never written.
    fn get_raw(&self, key: &str) -> Result<Option<String>>;

    /// Replace the raw JSON text of a slot.
    fn set_raw(&mut self, key: &str, value: &str) -> Result<()>;

    /// Decode a slot, falling back to `default` when it is absent or unreadable.
    fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T
    where
        Self: Sized,
    {
        let raw = match self.get_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!(key, error = %e, "failed to read stored value, using default");
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "failed to decode stored value, using default");
                default
            }
        }
    }

    /// Encode and write a slot. Failures are logged and the write is dropped.
    fn set<T: Serialize>(&mut self, key: &str, value: &T)
    where
        Self: Sized,
    {
        let raw = match serde_json::to_string(value) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(key, error = %e, "failed to encode value, write dropped");
                return;
            }
        };

        if let Err(e) = self.set_raw(key, &raw) {
            warn!(key, error = %e, "failed to persist value, write dropped");
        }
    }
}
