// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Directory-backed store: one file per key

use async_trait::async_trait;
use sl_core::store::{StoreAdapter, StoreError};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-per-key store rooted at a directory
#[derive(Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    /// Open a store rooted at `path`, creating the directory if needed
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = path.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Open a throwaway store for testing
    pub fn open_temp() -> Result<Self, StoreError> {
        let dir = std::env::temp_dir().join(format!("sl-test-{}", uuid::Uuid::new_v4()));
        Self::open(dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Keys may contain characters filesystems reject; sanitize for
    /// readability and disambiguate with a hash of the original.
    fn path_for(&self, key: &str) -> PathBuf {
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '.' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        self.root
            .join(format!("{}-{:08x}.rec", safe, hasher.finish() as u32))
    }
}

#[async_trait]
impl StoreAdapter for DirStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        run_blocking(move || match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io(e)),
        })
        .await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let value = value.to_string();
        run_blocking(move || Ok(std::fs::write(&path, value)?)).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        run_blocking(move || match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(e)),
        })
        .await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, StoreError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?
}

#[cfg(test)]
#[path = "dir_tests.rs"]
mod tests;
