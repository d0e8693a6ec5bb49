// ABOUTME: Staleness-windowed cache of successful remote API response bodies
// ABOUTME: Keyed by path and query, with prefix invalidation for on-demand revalidation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use dashmap::DashMap;
use pulse_core::constants::cache::{
    ALWAYS_REVALIDATE_SECS, DEFAULT_STALENESS_SECS, INJURY_STALENESS_SECS, MAX_CACHE_ENTRIES,
};
use tokio::time::Instant;
use tracing::debug;

/// How long a cached response may be served before it is refetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Staleness(Duration);

impl Staleness {
    /// Never serve from cache
    pub const ALWAYS_REVALIDATE: Self = Self::from_secs(ALWAYS_REVALIDATE_SECS);
    /// Analytics resources
    pub const DEFAULT: Self = Self::from_secs(DEFAULT_STALENESS_SECS);
    /// Injury data
    pub const INJURIES: Self = Self::from_secs(INJURY_STALENESS_SECS);

    /// Window of `secs` seconds
    #[must_use]
    pub const fn from_secs(secs: u64) -> Self {
        Self(Duration::from_secs(secs))
    }

    /// Window length
    #[must_use]
    pub const fn as_duration(self) -> Duration {
        self.0
    }

    /// Whether caching is disabled for this window
    #[must_use]
    pub const fn is_always_revalidate(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Staleness {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    stored_at: Instant,
    staleness: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.staleness
    }
}

/// Concurrent response cache
///
/// Entries are stored with the time they were written and served while
/// younger than the staleness the caller asks with. Expired entries are
/// dropped when read, and the map never holds more than `capacity` entries:
/// inserting into a full cache first sweeps expired entries, then evicts the
/// oldest.
#[derive(Debug)]
pub struct ResponseCache {
    entries: DashMap<String, CacheEntry>,
    capacity: usize,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::with_capacity(MAX_CACHE_ENTRIES)
    }
}

impl ResponseCache {
    /// Empty cache bounded by `MAX_CACHE_ENTRIES`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty cache holding at most `capacity` entries (minimum 1)
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// Fresh body for `key`, if one exists within `staleness`
    #[must_use]
    pub fn get(&self, key: &str, staleness: Staleness) -> Option<String> {
        if staleness.is_always_revalidate() {
            return None;
        }
        let window = staleness.as_duration();
        let fresh = self
            .entries
            .get(key)
            .and_then(|entry| (entry.stored_at.elapsed() < window).then(|| entry.body.clone()));

        if fresh.is_some() {
            debug!(key, "Serving cached response");
        } else if self
            .entries
            .remove_if(key, |_, entry| entry.stored_at.elapsed() >= window)
            .is_some()
        {
            debug!(key, "Dropped expired cached response");
        }
        fresh
    }

    /// Store a body; a no-op for `ALWAYS_REVALIDATE`
    pub fn insert(&self, key: String, body: String, staleness: Staleness) {
        if staleness.is_always_revalidate() {
            return;
        }
        if !self.entries.contains_key(&key) && self.entries.len() >= self.capacity {
            self.make_room();
        }
        self.entries.insert(
            key,
            CacheEntry {
                body,
                stored_at: Instant::now(),
                staleness: staleness.as_duration(),
            },
        );
    }

    /// Drop every expired entry; returns how many were removed
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before.saturating_sub(self.entries.len())
    }

    fn make_room(&self) {
        let purged = self.purge_expired();
        while self.entries.len() >= self.capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|entry| entry.stored_at)
                .map(|entry| entry.key().clone());
            let Some(oldest) = oldest else { break };
            self.entries.remove(&oldest);
            debug!(key = %oldest, "Evicted oldest cached response");
        }
        if purged > 0 {
            debug!(purged, "Purged expired cached responses");
        }
    }

    /// Drop every entry
    pub fn invalidate_all(&self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        debug!(removed, "Invalidated entire response cache");
        removed
    }

    /// Drop entries whose key starts with `prefix`; returns how many were removed
    pub fn invalidate_prefix(&self, prefix: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|key, _| !key.starts_with(prefix));
        let removed = before.saturating_sub(self.entries.len());
        debug!(prefix, removed, "Invalidated cached responses");
        removed
    }

    /// Number of stored entries, fresh or stale
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
