// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Error types for the mutex coordinator

use crate::store::StoreError;
use std::time::Duration;
use thiserror::Error;

/// Errors surfaced by [`StorageMutex`](crate::mutex::StorageMutex)
///
/// Contention, stale records, and lost races are not errors; they restart
/// the acquisition loop and show up in the returned
/// [`LockStats`](crate::stats::LockStats) counters.
#[derive(Debug, Error)]
pub enum MutexError {
    /// The acquisition budget elapsed before the lock was won
    #[error("lock {name:?} not acquired within {timeout:?}")]
    Timeout { name: String, timeout: Duration },
    /// The injected store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}
