// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Store adapter trait definitions

use async_trait::async_trait;
use thiserror::Error;

/// Errors from store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// A key-value store shared by every contending context.
///
/// Three operations and nothing else: no compare-and-swap, no
/// notifications. The acquisition protocol exists precisely because this
/// is all the medium offers.
#[async_trait]
pub trait StoreAdapter: Clone + Send + Sync + 'static {
    /// Read the raw payload under `key`, if present
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous payload
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`; removing an absent key is a no-op
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
