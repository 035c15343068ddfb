//! Durable storage adapter for the cart's item list.
//!
//! The cart mirrors one fixed key-value slot: a JSON array of [`CartItem`].
//! Persistence is best-effort - the store logs failures and keeps serving
//! the in-memory state - so implementations report errors but nothing here
//! ever reaches the UI as a cart error.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use mall_core::CartItem;
use thiserror::Error;

use crate::config::CartConfig;

/// Errors from the durable key-value slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the slot failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The slot holds a payload that does not parse as a cart.
    #[error("malformed cart payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The backing medium refused the operation (quota, read-only mount).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A durable key-value slot holding the cart's item list.
///
/// `load` returns `Ok(None)` when no cart has ever been saved; the store
/// treats a malformed payload the same way. `save` replaces the slot
/// wholesale. Neither operation is retried by the store.
pub trait CartStorage: Send + Sync {
    /// Read the saved item list, if any.
    fn load(&self) -> impl Future<Output = Result<Option<Vec<CartItem>>, StorageError>> + Send;

    /// Replace the slot with this item list.
    fn save(&self, items: &[CartItem]) -> impl Future<Output = Result<(), StorageError>> + Send;
}

// =============================================================================
// File-backed slot
// =============================================================================

/// File-backed slot: `<dir>/<key>.json`.
///
/// The directory is created on the first write. A missing file reads as "no
/// saved cart"; any other I/O or parse problem surfaces as a [`StorageError`]
/// for the store to log and absorb.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Create a slot at `<dir>/<key>.json`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    /// Slot location from configuration.
    #[must_use]
    pub fn from_config(config: &CartConfig) -> Self {
        Self::new(&config.storage_dir, &config.storage_key)
    }

    /// Path of the slot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        let items = serde_json::from_slice(&bytes)?;
        Ok(Some(items))
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let payload = serde_json::to_vec(items)?;
        tokio::fs::write(&self.path, payload).await?;
        Ok(())
    }
}

// =============================================================================
// In-memory slot
// =============================================================================

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<Vec<CartItem>>>,
}

impl MemoryStorage {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot seeded with a saved cart.
    #[must_use]
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            slot: Mutex::new(Some(items)),
        }
    }

    /// Current slot contents.
    #[must_use]
    pub fn snapshot(&self) -> Option<Vec<CartItem>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CartStorage for MemoryStorage {
    async fn load(&self) -> Result<Option<Vec<CartItem>>, StorageError> {
        Ok(self.snapshot())
    }

    async fn save(&self, items: &[CartItem]) -> Result<(), StorageError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(items.to_vec());
        Ok(())
    }
}
