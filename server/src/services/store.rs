//! Flat-file account persistence.
//!
//! ARCHITECTURE
//! ============
//! The whole account list lives in one JSON array under `DATA_DIR`, loaded at
//! startup and guarded by a `tokio::sync::RwLock`. Every mutation rewrites
//! the file through a temp-file + rename so a crash mid-write never leaves a
//! truncated store. No indexing, no transactions: the list is small and the
//! contract is bulk replace.

use std::path::PathBuf;

use async_trait::async_trait;
use records::UserRecord;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

const STORE_FILE: &str = "users.json";

/// A stored account: the client-facing record plus server-only password
/// material. Legacy files may hold plaintext in `password_hash`; see
/// `services::password`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(flatten)]
    pub record: UserRecord,
    pub password_hash: String,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("corrupt store file: {0}")]
    Corrupt(#[from] serde_json::Error),
    #[error("email already registered")]
    DuplicateEmail,
    #[error("no such account")]
    NotFound,
}

/// Account repository seam. The flat-file implementation backs the running
/// server; an in-memory one backs unit tests.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list(&self) -> Result<Vec<StoredUser>, StoreError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, StoreError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredUser>, StoreError>;
    /// Insert a new account. Fails with [`StoreError::DuplicateEmail`] if the
    /// email is already taken; the check and the insert are atomic.
    async fn insert(&self, user: StoredUser) -> Result<(), StoreError>;
    /// Replace an existing account matched by id.
    async fn update(&self, user: StoredUser) -> Result<(), StoreError>;
    /// Replace the whole list in one write.
    async fn replace_all(&self, users: Vec<StoredUser>) -> Result<(), StoreError>;
}

// =============================================================================
// FILE STORE
// =============================================================================

/// JSON-array store at `<data_dir>/users.json`.
pub struct FileStore {
    path: PathBuf,
    users: RwLock<Vec<StoredUser>>,
}

impl FileStore {
    /// Open (or create) the store under `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or an existing
    /// store file cannot be read or parsed.
    pub async fn open(data_dir: &str) -> Result<Self, StoreError> {
        let dir = PathBuf::from(data_dir);
        tokio::fs::create_dir_all(&dir).await?;
        let path = dir.join(STORE_FILE);

        let users = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self { path, users: RwLock::new(users) })
    }

    async fn persist(&self, users: &[StoredUser]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(users)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for FileStore {
    async fn list(&self) -> Result<Vec<StoredUser>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.record.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredUser>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.record.id == id).cloned())
    }

    async fn insert(&self, user: StoredUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.record.email == user.record.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.push(user);
        self.persist(&users).await
    }

    async fn update(&self, user: StoredUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let Some(slot) = users.iter_mut().find(|u| u.record.id == user.record.id) else {
            return Err(StoreError::NotFound);
        };
        *slot = user;
        self.persist(&users).await
    }

    async fn replace_all(&self, new_users: Vec<StoredUser>) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        *users = new_users;
        self.persist(&users).await
    }
}

// =============================================================================
// MEMORY STORE (tests)
// =============================================================================

#[cfg(test)]
pub struct MemoryStore {
    users: RwLock<Vec<StoredUser>>,
}

#[cfg(test)]
impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self { users: RwLock::new(Vec::new()) }
    }
}

#[cfg(test)]
#[async_trait]
impl ProfileStore for MemoryStore {
    async fn list(&self) -> Result<Vec<StoredUser>, StoreError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.record.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<StoredUser>, StoreError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.record.id == id).cloned())
    }

    async fn insert(&self, user: StoredUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.record.email == user.record.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.push(user);
        Ok(())
    }

    async fn update(&self, user: StoredUser) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        let Some(slot) = users.iter_mut().find(|u| u.record.id == user.record.id) else {
            return Err(StoreError::NotFound);
        };
        *slot = user;
        Ok(())
    }

    async fn replace_all(&self, new_users: Vec<StoredUser>) -> Result<(), StoreError> {
        let mut users = self.users.write().await;
        *users = new_users;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
