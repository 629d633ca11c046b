use std::collections::HashMap;
use std::sync::RwLock;

use crate::store::{SessionStore, SessionStoreError};

/// In-memory session store.
///
/// The owning process is the session: dropping the store ends it. Intended as
/// the default store for the interactive shell and for tests.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| SessionStoreError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| SessionStoreError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_of_missing_key_yields_none() {
        let store = InMemorySessionStore::new();
        assert!(store.load("cart").unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = InMemorySessionStore::new();
        store.save("cart", "[]").unwrap();
        assert_eq!(store.load("cart").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn save_fully_overwrites_prior_value() {
        let store = InMemorySessionStore::new();
        store.save("cart", "[1]").unwrap();
        store.save("cart", "[2]").unwrap();
        assert_eq!(store.load("cart").unwrap().as_deref(), Some("[2]"));
    }
}
