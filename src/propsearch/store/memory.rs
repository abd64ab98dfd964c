use super::KeyValueStore;
use crate::error::{PropsearchError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    slots: HashMap<String, String>,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with raw text, valid JSON or not.
    pub fn with_raw(mut self, key: &str, raw: &str) -> Self {
        self.slots.insert(key.to_string(), raw.to_string());
        self
    }

    /// Make every subsequent write fail, like a full browser storage quota.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_raw(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_raw(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(PropsearchError::Store(format!(
                "quota exceeded while writing '{}'",
                key
            )));
        }
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
