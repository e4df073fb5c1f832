// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! sl-storage: durable stores for storelock coordinators
//!
//! Provides the file-backed [`DirStore`], the cross-process analog of the
//! in-memory store in sl-core: processes on one machine point at the same
//! directory and contend through it.

pub mod dir;

pub use dir::DirStore;
