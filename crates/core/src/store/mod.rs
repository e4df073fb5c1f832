// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Store adapters for the shared medium
//!
//! The protocol's only side-effecting dependency. `traits` defines the
//! seam; `memory` is the in-process default and test double; `traced`
//! wraps any adapter with structured logging.

pub mod memory;
pub mod traced;
pub mod traits;

// Re-export traits
pub use traits::{StoreAdapter, StoreError};

// Re-export implementations
pub use memory::{MemoryStore, StoreCall};
pub use traced::TracedStore;
