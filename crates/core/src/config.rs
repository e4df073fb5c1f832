// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Coordinator configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a [`StorageMutex`](crate::mutex::StorageMutex)
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MutexConfig {
    /// Identity written into lock records. `None` means a fresh identity
    /// is generated when the coordinator is constructed.
    pub client_id: Option<String>,
    /// Key namespace for the outer ("most recent attempt") slot
    pub x_prefix: String,
    /// Key namespace for the inner ("reservation") slot
    pub y_prefix: String,
    /// Acquisition budget for a single acquire call, and the lifetime of
    /// every record written
    #[serde(with = "humantime_serde")]
    pub timeout: Duration,
    /// How long to wait before deciding a contended reservation. Must
    /// outlast the slot writes a genuine winner performs; workload-dependent.
    #[serde(with = "humantime_serde")]
    pub grace: Duration,
}

impl Default for MutexConfig {
    fn default() -> Self {
        Self {
            client_id: None,
            x_prefix: "lock_x:".to_string(),
            y_prefix: "lock_y:".to_string(),
            timeout: Duration::from_secs(5),
            grace: Duration::from_millis(50),
        }
    }
}

impl MutexConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client_id(mut self, id: impl Into<String>) -> Self {
        self.client_id = Some(id.into());
        self
    }

    pub fn with_x_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.x_prefix = prefix.into();
        self
    }

    pub fn with_y_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.y_prefix = prefix.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }

    /// Storage key for the outer slot of `name`
    pub fn x_key(&self, name: &str) -> String {
        format!("{}{}", self.x_prefix, name)
    }

    /// Storage key for the inner slot of `name`
    pub fn y_key(&self, name: &str) -> String {
        format!("{}{}", self.y_prefix, name)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
