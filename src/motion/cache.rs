use std::sync::Arc;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::path::{PathKey, PathStore};

/// Memoized path-key → point-sequence resolution.
///
/// The first lookup for a key copies the path's points out of the
/// store; later lookups return the same shared, immutable snapshot
/// without re-fetching. Entries are never mutated in place: editing a
/// path must go through [`PathPointCache::invalidate`] (or
/// [`PathPointCache::clear`]) before the key is read again, otherwise
/// stale geometry is served.
///
/// Snapshots are `Arc`-shared: a driver started before an invalidation
/// keeps the geometry it departed with, while the next start sees the
/// fresh points.
#[derive(Default)]
pub struct PathPointCache {
    entries: FxHashMap<PathKey, Arc<[Vec3]>>,
}

impl PathPointCache {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Resolves a path key to its point snapshot, fetching and
    /// memoizing on first access.
    ///
    /// An unknown key yields an empty sequence, never an error; callers
    /// treat "fewer than 2 points" as a motion precondition failure.
    pub fn points_for(&mut self, store: &PathStore, key: PathKey) -> Arc<[Vec3]> {
        if let Some(points) = self.entries.get(&key) {
            return Arc::clone(points);
        }

        let Some(path) = store.get(key) else {
            return Arc::from(Vec::new());
        };

        let points: Arc<[Vec3]> = Arc::from(path.points().to_vec());
        self.entries.insert(key, Arc::clone(&points));
        points
    }

    /// Drops the cached entry for one path so the next lookup
    /// re-fetches.
    pub fn invalidate(&mut self, key: PathKey) {
        self.entries.remove(&key);
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
