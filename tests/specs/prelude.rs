//! Shared helpers for behavioral specs

pub use sl_core::{
    LockRecord, LockStats, MemoryStore, MutexConfig, MutexError, StorageMutex, StoreAdapter,
};
pub use std::time::Duration;

/// Config tuned for fast specs: generous budget, short grace
pub fn quick_config(client: &str) -> MutexConfig {
    MutexConfig::new()
        .with_client_id(client)
        .with_timeout(Duration::from_millis(500))
        .with_grace(Duration::from_millis(5))
}

/// Coordinator over a shared in-memory store
pub fn coordinator(client: &str, store: &MemoryStore) -> StorageMutex<MemoryStore> {
    StorageMutex::new(quick_config(client), store.clone())
}

/// Decode the record currently stored under `key`
pub fn record_at(store: &MemoryStore, key: &str) -> Option<LockRecord> {
    store.raw(key).as_deref().and_then(LockRecord::decode)
}
