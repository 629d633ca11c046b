//! `cartwright-session`
//!
//! Session-scoped storage: values live for one browsing session and are
//! discarded with it, by the environment rather than by this code.
//!
//! The `SessionStore` trait is the seam. The in-memory implementation treats
//! the owning process as the session; the file-backed implementation lets
//! separate processes share a session through a common `SessionId`.

pub mod file;
pub mod in_memory;
pub mod store;

pub use file::FileSessionStore;
pub use in_memory::InMemorySessionStore;
pub use store::{SessionStore, SessionStoreError};
