use std::fs;
use std::path::{Path, PathBuf};

use cartwright_core::SessionId;

use crate::store::{SessionStore, SessionStoreError};

/// File-backed session store.
///
/// Values live under `<root>/cartwright-session-<id>/<key>` so that separate
/// processes sharing a `SessionId` observe the same session. The default root
/// is the OS temp dir; the directory is reclaimed by the environment, not by
/// this code.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    dir: PathBuf,
}

impl FileSessionStore {
    /// Store rooted in the OS temp dir.
    pub fn new(session_id: SessionId) -> Self {
        Self::rooted_at(std::env::temp_dir(), session_id)
    }

    /// Store rooted at an explicit directory (tests, custom layouts).
    pub fn rooted_at(root: impl Into<PathBuf>, session_id: SessionId) -> Self {
        let mut dir = root.into();
        dir.push(format!("cartwright-session-{session_id}"));
        Self { dir }
    }

    /// Directory holding this session's values.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self, key: &str) -> Result<Option<String>, SessionStoreError> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), SessionStoreError> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}
