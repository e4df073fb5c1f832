// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! sl-core: mutual exclusion over a shared key-value store
//!
//! This crate provides:
//! - A mutex coordinator driving a two-slot acquisition handshake against
//!   any store offering only get/set/remove (no compare-and-swap)
//! - The store adapter seam, with in-memory and traced implementations
//! - A wire codec for self-expiring lock records
//! - Clock and identity abstractions for deterministic tests

pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod record;
pub mod stats;
pub mod store;

pub mod mutex;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::MutexConfig;
pub use error::MutexError;
pub use id::{IdGen, SequentialIdGen, UuidIdGen};
pub use mutex::StorageMutex;
pub use record::LockRecord;
pub use stats::LockStats;
pub use store::{MemoryStore, StoreAdapter, StoreCall, StoreError, TracedStore};
