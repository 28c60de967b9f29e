//! Flat-file credential store.
//!
//! The whole username -> password-hash mapping lives in one JSON object on
//! disk. Reads load the file wholesale; every insert is a load-modify-save
//! behind a single async mutex, so concurrent signups cannot lose updates.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("username already exists")]
    DuplicateUser,

    #[error("credential store i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("credential store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStoreTrait {
    /// Stored password hash for the username, if the user exists.
    async fn find(&self, username: &str) -> Result<Option<String>, CredentialError>;

    /// Insert a new user. Fails with [`CredentialError::DuplicateUser`] when
    /// the username is already present.
    async fn create(&self, username: &str, password_hash: &str) -> Result<(), CredentialError>;

    /// Cheap accessibility probe used by the health endpoint.
    async fn ping(&self) -> Result<(), CredentialError>;
}

pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes the load-modify-save cycle; readers go straight to the file.
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted mapping. A missing file is an empty mapping, not an
    /// error, so a fresh deployment works without provisioning.
    async fn load(&self) -> Result<BTreeMap<String, String>, CredentialError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Overwrite the persisted mapping wholesale.
    async fn save(&self, users: &BTreeMap<String, String>) -> Result<(), CredentialError> {
        let bytes = serde_json::to_vec(users)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl CredentialStoreTrait for FileCredentialStore {
    async fn find(&self, username: &str) -> Result<Option<String>, CredentialError> {
        let users = self.load().await?;
        Ok(users.get(username).cloned())
    }

    async fn create(&self, username: &str, password_hash: &str) -> Result<(), CredentialError> {
        let _guard = self.write_lock.lock().await;
        let mut users = self.load().await?;
        if users.contains_key(username) {
            return Err(CredentialError::DuplicateUser);
        }
        users.insert(username.to_string(), password_hash.to_string());
        self.save(&users).await?;
        debug!(path = %self.path.display(), count = users.len(), "credential store updated");
        Ok(())
    }

    async fn ping(&self) -> Result<(), CredentialError> {
        self.load().await.map(|_| ())
    }
}
