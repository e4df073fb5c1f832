// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Wire format for lock records
//!
//! Records are JSON strings stored under the lock slots. Field names are
//! camelCase so payloads stay readable by non-Rust contexts sharing the
//! same store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A value stored under a lock slot: who wrote it, and when it stops
/// being trustworthy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockRecord {
    /// Expiration as epoch milliseconds
    pub expires_at: i64,
    /// The writer's client identity
    pub value: String,
}

impl LockRecord {
    pub fn new(value: impl Into<String>, expires_at: i64) -> Self {
        Self {
            expires_at,
            value: value.into(),
        }
    }

    /// Encode for storage
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode a stored payload. Malformed input is "no record"; the
    /// protocol treats it exactly like an expired entry.
    pub fn decode(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// A record is never trusted at or past its expiration, regardless of
    /// who wrote it.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.expires_at
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
