//! Persisted identity used by every authenticated request.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde::{Deserialize, Serialize};
use shared::{domain::AccountId, protocol::LoginResponse};
use tracing::{debug, warn};

use crate::error::{ClientError, ClientResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: AccountId,
    pub name: String,
    pub username: String,
    pub token: String,
}

impl From<LoginResponse> for Session {
    fn from(value: LoginResponse) -> Self {
        Self {
            id: value.id,
            name: value.name,
            username: value.username,
            token: value.token,
        }
    }
}

pub trait SessionProvider: Send + Sync {
    /// Returns `None` when no usable session is stored.
    fn load(&self) -> ClientResult<Option<Session>>;
    fn save(&self, session: &Session) -> ClientResult<()>;
    fn clear(&self) -> ClientResult<()>;

    fn require(&self) -> ClientResult<Session> {
        self.load()?.ok_or(ClientError::NoSession)
    }
}

/// Keeps the session as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionProvider for FileSessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice::<Session>(&raw) {
            Ok(session) if !session.token.trim().is_empty() => Ok(Some(session)),
            Ok(_) => {
                warn!(path = %self.path.display(), "stored session has an empty token");
                Ok(None)
            }
            Err(err) => {
                warn!(path = %self.path.display(), error = %err, "ignoring malformed session file");
                Ok(None)
            }
        }
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(session)?)?;
        debug!(path = %self.path.display(), username = %session.username, "session saved");
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    inner: Mutex<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            inner: Mutex::new(Some(session)),
        }
    }
}

impl SessionProvider for MemorySessionStore {
    fn load(&self) -> ClientResult<Option<Session>> {
        Ok(self.inner.lock().map(|guard| guard.clone()).unwrap_or_default())
    }

    fn save(&self, session: &Session) -> ClientResult<()> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(session.clone());
        }
        Ok(())
    }

    fn clear(&self) -> ClientResult<()> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
