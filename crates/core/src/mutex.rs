// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Storelock Contributors

//! Mutex coordinator: two-slot acquisition over a shared store
//!
//! Lamport's fast-mutex handshake adapted to a store with no
//! compare-and-swap: every attempt announces itself on the outer slot,
//! claims the inner slot only when that looks free, then re-checks the
//! outer slot for rivals. A contended claim is decided after a grace
//! interval by whichever identity survived on the inner slot. Records
//! self-expire, so a crashed holder blocks rivals for at most one
//! timeout window.

use crate::clock::{Clock, SystemClock};
use crate::config::MutexConfig;
use crate::error::MutexError;
use crate::id::{IdGen, UuidIdGen};
use crate::record::LockRecord;
use crate::stats::LockStats;
use crate::store::{StoreAdapter, StoreError};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Coordinates exclusive access to named locks through a shared store.
///
/// One coordinator per execution context. An instance drives one
/// acquisition at a time (`acquire` takes `&mut self`) and is reused
/// across successive locks; use one coordinator per in-flight attempt if
/// attempts must overlap.
pub struct StorageMutex<S, C = SystemClock> {
    config: MutexConfig,
    client_id: String,
    store: S,
    clock: C,
    stats: LockStats,
}

impl<S: StoreAdapter> StorageMutex<S> {
    /// Create a coordinator with the system clock. A missing
    /// `config.client_id` gets a generated identity.
    pub fn new(config: MutexConfig, store: S) -> Self {
        Self::with_clock(config, store, SystemClock)
    }
}

impl<S: StoreAdapter, C: Clock> StorageMutex<S, C> {
    pub fn with_clock(config: MutexConfig, store: S, clock: C) -> Self {
        let client_id = config.client_id.clone().unwrap_or_else(|| UuidIdGen.next());
        Self {
            config,
            client_id,
            store,
            clock,
            stats: LockStats::default(),
        }
    }

    /// Identity this coordinator writes into lock records
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn config(&self) -> &MutexConfig {
        &self.config
    }

    /// Acquire the lock `name`.
    ///
    /// Polls the store until the inner slot is won or the configured
    /// timeout elapses. Rival writes, stale records, and lost races are
    /// not errors; they restart the loop and show up in the returned
    /// [`LockStats`].
    pub async fn acquire(&mut self, name: &str) -> Result<LockStats, MutexError> {
        let x = self.config.x_key(name);
        let y = self.config.y_key(name);
        let started = self.clock.now();
        self.stats = LockStats::begin(started);

        loop {
            if self.elapsed(started) >= self.config.timeout {
                tracing::debug!(name, timeout = ?self.config.timeout, "acquire timed out");
                return Err(self.timeout_error(name));
            }

            // Announce intent on the outer slot, then look at the
            // reservation.
            self.write_slot(&x).await?;
            if self.read_slot(&y).await?.is_some() {
                self.stats.restart_count += 1;
                tokio::task::yield_now().await;
                continue;
            }

            // Claim the reservation, then re-check the outer slot for a
            // rival that announced after us.
            self.write_slot(&y).await?;
            if self.read_slot(&x).await?.as_deref() != Some(self.client_id.as_str()) {
                self.stats.contention_count += 1;
                tracing::debug!(name, client = %self.client_id, "contention on outer slot");

                // Give a genuine winner time to finish its claim, then
                // let the inner slot decide.
                tokio::time::sleep(self.config.grace).await;
                if self.read_slot(&y).await?.as_deref() != Some(self.client_id.as_str()) {
                    self.stats.restart_count += 1;
                    self.stats.locks_lost += 1;
                    tracing::debug!(name, client = %self.client_id, "reservation lost");
                    tokio::task::yield_now().await;
                    continue;
                }
            }

            // Won. Never report success past the budget: the grace wait
            // may have crossed it, so back out of the reservation.
            if self.elapsed(started) >= self.config.timeout {
                self.store.remove(&y).await?;
                tracing::debug!(name, "won past the budget, backing out");
                return Err(self.timeout_error(name));
            }

            let now = self.clock.now();
            self.stats.finish_acquire(now);
            tracing::debug!(
                name,
                client = %self.client_id,
                restarts = self.stats.restart_count,
                contention = self.stats.contention_count,
                "lock acquired"
            );
            return Ok(self.stats.clone());
        }
    }

    /// Release the lock `name`.
    ///
    /// Clears the inner slot if this coordinator holds it; releasing a
    /// lock that was never held is a no-op. The outer slot is left alone;
    /// it is advisory state that the next attempt overwrites. Returns the
    /// final statistics snapshot, then resets for the next cycle.
    pub async fn release(&mut self, name: &str) -> Result<LockStats, MutexError> {
        let y = self.config.y_key(name);
        match self.read_slot(&y).await? {
            Some(owner) if owner == self.client_id => {
                self.store.remove(&y).await?;
                tracing::debug!(name, client = %self.client_id, "lock released");
            }
            Some(owner) => {
                tracing::debug!(name, owner = %owner, "release skipped, reservation not ours");
            }
            None => {}
        }

        self.stats.finish_hold(self.clock.now());
        let snapshot = self.stats.clone();
        self.stats = LockStats::default();
        Ok(snapshot)
    }

    /// Write our record under `key` with a fresh expiration
    async fn write_slot(&self, key: &str) -> Result<(), MutexError> {
        let expires_at = self.clock.now_ms() + self.config.timeout.as_millis() as i64;
        let record = LockRecord::new(self.client_id.clone(), expires_at);
        let raw = record.encode().map_err(StoreError::from)?;
        self.store.set(key, &raw).await?;
        Ok(())
    }

    /// Read the identity under `key`, treating expired or malformed
    /// records as absent and evicting them.
    async fn read_slot(&self, key: &str) -> Result<Option<String>, MutexError> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };
        match LockRecord::decode(&raw) {
            Some(record) if !record.is_expired(self.clock.now()) => Ok(Some(record.value)),
            Some(_) => {
                tracing::debug!(key, "evicting expired record");
                self.store.remove(key).await?;
                Ok(None)
            }
            None => {
                tracing::debug!(key, "evicting malformed record");
                self.store.remove(key).await?;
                Ok(None)
            }
        }
    }

    fn elapsed(&self, since: DateTime<Utc>) -> Duration {
        (self.clock.now() - since).to_std().unwrap_or_default()
    }

    fn timeout_error(&self, name: &str) -> MutexError {
        MutexError::Timeout {
            name: name.to_string(),
            timeout: self.config.timeout,
        }
    }
}

#[cfg(test)]
#[path = "mutex_tests.rs"]
mod tests;
