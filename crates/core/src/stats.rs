// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Per-attempt acquisition statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters and timings for one acquire/release cycle.
///
/// Both [`StorageMutex::acquire`](crate::mutex::StorageMutex::acquire) and
/// [`StorageMutex::release`](crate::mutex::StorageMutex::release) return an
/// owned snapshot; the coordinator resets its own copy between cycles, so
/// a returned value never changes under the caller.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStats {
    /// Times the attempt looped back to the outer check
    pub restart_count: u32,
    /// Times a contended reservation was lost to a rival
    pub locks_lost: u32,
    /// Contention events detected on the outer slot
    pub contention_count: u32,
    pub acquire_start: Option<DateTime<Utc>>,
    pub acquire_end: Option<DateTime<Utc>>,
    /// `acquire_end - acquire_start`, set on success
    #[serde(default, with = "humantime_serde")]
    pub acquire_duration: Option<Duration>,
    pub lock_start: Option<DateTime<Utc>>,
    pub lock_end: Option<DateTime<Utc>>,
    /// `lock_end - lock_start`, set on release
    #[serde(default, with = "humantime_serde")]
    pub lock_duration: Option<Duration>,
}

impl LockStats {
    /// Fresh statistics for an attempt starting at `now`
    pub(crate) fn begin(now: DateTime<Utc>) -> Self {
        Self {
            acquire_start: Some(now),
            ..Self::default()
        }
    }

    /// Stamp the end of a successful acquire; the held phase starts here
    pub(crate) fn finish_acquire(&mut self, now: DateTime<Utc>) {
        self.acquire_end = Some(now);
        self.acquire_duration = self.acquire_start.map(|start| since(start, now));
        self.lock_start = Some(now);
    }

    /// Stamp the end of the held phase
    pub(crate) fn finish_hold(&mut self, now: DateTime<Utc>) {
        self.lock_end = Some(now);
        self.lock_duration = self.lock_start.map(|start| since(start, now));
    }
}

fn since(start: DateTime<Utc>, end: DateTime<Utc>) -> Duration {
    (end - start).to_std().unwrap_or_default()
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
