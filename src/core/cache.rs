//! In-memory directory listing cache.
//!
//! Purely an optimization: a miss or an expired entry simply triggers a new
//! request. Timestamps are passed in by the caller so expiry can be tested
//! without a clock.

use std::collections::HashMap;

use crate::models::DirectoryEntry;

/// When cached listings go stale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CachePolicy {
    /// Keep listings for the whole session
    Permanent,
    /// Drop listings older than `ttl_ms`
    Expiring { ttl_ms: f64 },
}

#[derive(Clone, Debug)]
struct CachedListing {
    entries: Vec<DirectoryEntry>,
    fetched_at_ms: f64,
}

/// Path → listing cache.
#[derive(Clone, Debug)]
pub struct FolderCache {
    policy: CachePolicy,
    listings: HashMap<String, CachedListing>,
}

impl FolderCache {
    pub fn new(policy: CachePolicy) -> Self {
        Self {
            policy,
            listings: HashMap::new(),
        }
    }

    /// Fresh listing for `path`, if any. Stale entries are evicted.
    pub fn get(&mut self, path: &str, now_ms: f64) -> Option<Vec<DirectoryEntry>> {
        let key = normalize(path);
        let listing = self.listings.get(&key)?;
        if self.is_stale(listing, now_ms) {
            self.listings.remove(&key);
            return None;
        }
        Some(listing.entries.clone())
    }

    /// Store a listing fetched at `now_ms`.
    pub fn insert(&mut self, path: &str, entries: Vec<DirectoryEntry>, now_ms: f64) {
        self.listings.insert(
            normalize(path),
            CachedListing {
                entries,
                fetched_at_ms: now_ms,
            },
        );
    }

    pub fn clear(&mut self) {
        self.listings.clear();
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn is_stale(&self, listing: &CachedListing, now_ms: f64) -> bool {
        match self.policy {
            CachePolicy::Permanent => false,
            CachePolicy::Expiring { ttl_ms } => now_ms - listing.fetched_at_ms >= ttl_ms,
        }
    }
}

fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries() -> Vec<DirectoryEntry> {
        vec![DirectoryEntry::file("kattis/a/a.vn.py")]
    }

    #[test]
    fn test_permanent_never_expires() {
        let mut cache = FolderCache::new(CachePolicy::Permanent);
        cache.insert("kattis/a", entries(), 0.0);
        assert_eq!(cache.get("kattis/a", 1e12), Some(entries()));
    }

    #[test]
    fn test_expiring_entry() {
        let mut cache = FolderCache::new(CachePolicy::Expiring { ttl_ms: 300_000.0 });
        cache.insert("kattis/a", entries(), 1_000.0);

        assert!(cache.get("kattis/a", 300_999.0).is_some());
        assert!(cache.get("kattis/a", 301_000.0).is_none());
        // Evicted on the stale read
        assert!(cache.is_empty());
    }

    #[test]
    fn test_paths_are_normalized() {
        let mut cache = FolderCache::new(CachePolicy::Permanent);
        cache.insert("/kattis/a/", entries(), 0.0);
        assert!(cache.get("kattis/a", 0.0).is_some());
        assert!(cache.get("kattis", 0.0).is_none());
    }

    #[test]
    fn test_clear() {
        let mut cache = FolderCache::new(CachePolicy::Permanent);
        cache.insert("kattis/a", entries(), 0.0);
        cache.insert("kattis/b", entries(), 0.0);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.get("kattis/a", 0.0).is_none());
        assert!(cache.is_empty());
    }
}
