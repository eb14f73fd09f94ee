//! Identicon memoization
//!
//! Output only depends on the user id, so generated icons can be kept and
//! replayed. Changing the hash, mosaic derivation or pixel scale invalidates
//! every entry, which is why the cache lives in memory only.

use crate::domain::entities::{IconImage, UserId};
use crate::domain::repositories::IconEncoder;
use crate::domain::services::{IdenticonError, IdenticonGenerator};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<UserId, IconImage>,
    /// Insertion order, oldest first
    order: VecDeque<UserId>,
}

/// Capacity-bounded, thread-safe identicon cache
///
/// When full, the oldest entry is evicted. A capacity of zero disables
/// caching entirely.
#[derive(Debug)]
pub struct IconCache {
    capacity: usize,
    state: Mutex<CacheState>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl IconCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(CacheState::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns a cached icon
    pub fn get(&self, user_id: UserId) -> Option<IconImage> {
        let found = self.state.lock().entries.get(&user_id).cloned();
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Stores an icon, evicting the oldest entry when full
    pub fn insert(&self, user_id: UserId, icon: IconImage) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.state.lock();
        if state.entries.insert(user_id, icon).is_some() {
            return;
        }

        state.order.push_back(user_id);
        while state.order.len() > self.capacity {
            if let Some(oldest) = state.order.pop_front() {
                state.entries.remove(&oldest);
                tracing::trace!(user_id = oldest, "Evicted cached identicon");
            }
        }
    }

    /// Returns the cached icon or generates and caches it
    ///
    /// The lock is not held while generating; two threads racing on the same
    /// id both generate, and both get identical bytes.
    pub fn get_or_generate<E: IconEncoder>(
        &self,
        user_id: UserId,
        generator: &IdenticonGenerator<E>,
    ) -> Result<IconImage, IdenticonError> {
        if let Some(icon) = self.get(user_id) {
            return Ok(icon);
        }

        let icon = generator.generate_identicon(user_id)?;
        self.insert(user_id, icon.clone());
        Ok(icon)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.state.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.entries.clear();
        state.order.clear();
    }
}
