use thiserror::Error;

/// Errors surfaced by session storage implementations.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Underlying file IO failed.
    #[error("session storage io failure: {0}")]
    Io(#[from] std::io::Error),

    /// Internal lock poisoned (a writer panicked).
    #[error("session storage lock poisoned")]
    Poisoned,
}

/// Key/value storage scoped to a single browsing session.
///
/// Writes are full-value overwrites; there is no partial update. Values are
/// opaque strings (the cart layer stores JSON).
pub trait SessionStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError>;

    /// Store `value` under `key`, fully overwriting any prior value.
    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError>;
}
