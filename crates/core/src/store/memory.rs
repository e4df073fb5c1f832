// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Shared in-memory store
//!
//! The in-process default: coordinators in one process contend through a
//! shared map. Doubles as the test store; calls are recorded and
//! failures can be injected.

use super::traits::{StoreAdapter, StoreError};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Recorded call to a store method
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Get { key: String },
    Set { key: String, value: String },
    Remove { key: String },
}

#[derive(Default)]
struct MemoryState {
    entries: HashMap<String, String>,
    calls: Vec<StoreCall>,
    fail_next: Option<String>,
}

/// Shared in-memory store; clones see the same entries
#[derive(Clone, Default)]
pub struct MemoryStore {
    state: Arc<Mutex<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw payload under `key`, bypassing the adapter (test inspection)
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// Seed a raw payload (test setup)
    pub fn insert_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock().entries.insert(key.into(), value.into());
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<StoreCall> {
        self.lock().calls.clone()
    }

    /// Make the next store operation fail with [`StoreError::Unavailable`]
    pub fn fail_next(&self, message: impl Into<String>) {
        self.lock().fail_next = Some(message.into());
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl StoreAdapter for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Get {
            key: key.to_string(),
        });
        if let Some(message) = state.fail_next.take() {
            return Err(StoreError::Unavailable(message));
        }
        Ok(state.entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Set {
            key: key.to_string(),
            value: value.to_string(),
        });
        if let Some(message) = state.fail_next.take() {
            return Err(StoreError::Unavailable(message));
        }
        state.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut state = self.lock();
        state.calls.push(StoreCall::Remove {
            key: key.to_string(),
        });
        if let Some(message) = state.fail_next.take() {
            return Err(StoreError::Unavailable(message));
        }
        state.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
