// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Traced store wrapper for consistent observability

use super::traits::{StoreAdapter, StoreError};
use async_trait::async_trait;

/// Wrapper that adds tracing to any [`StoreAdapter`]
#[derive(Clone)]
pub struct TracedStore<S> {
    inner: S,
}

impl<S> TracedStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: StoreAdapter> StoreAdapter for TracedStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let span = tracing::debug_span!("store.get", key);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.get(key).await;

        match &result {
            Ok(value) => tracing::trace!(
                hit = value.is_some(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "read"
            ),
            Err(e) => tracing::error!(error = %e, "read failed"),
        }

        result
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.set", key);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.set(key, value).await;

        match &result {
            Ok(()) => tracing::debug!(
                value_len = value.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "written"
            ),
            Err(e) => tracing::error!(error = %e, "write failed"),
        }

        result
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let span = tracing::debug_span!("store.remove", key);
        let _guard = span.enter();

        let result = self.inner.remove(key).await;

        match &result {
            Ok(()) => tracing::debug!("removed"),
            Err(e) => tracing::error!(error = %e, "remove failed"),
        }

        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
