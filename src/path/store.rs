use glam::Vec3;
use slotmap::SlotMap;

use crate::path::{Path, PathKey};
use crate::scene::NodeHandle;

/// Owns every authored path and answers the two questions the motion
/// engine asks: "which path is this?" and "is this object a waypoint of
/// any path?".
///
/// Point edits go through [`PathStore::set_points`]; callers that keep
/// a [`PathPointCache`](crate::motion::PathPointCache) (the engine
/// does) must invalidate the edited key afterwards, otherwise the cache
/// serves stale geometry.
pub struct PathStore {
    paths: SlotMap<PathKey, Path>,
}

impl Default for PathStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PathStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            paths: SlotMap::with_key(),
        }
    }

    /// Stores a path, returning its key.
    pub fn insert(&mut self, path: Path) -> PathKey {
        self.paths.insert(path)
    }

    /// Removes a path. Objects that were members become free to move.
    pub fn remove(&mut self, key: PathKey) -> Option<Path> {
        self.paths.remove(key)
    }

    #[must_use]
    pub fn get(&self, key: PathKey) -> Option<&Path> {
        self.paths.get(key)
    }

    /// Iterates all paths with their keys.
    pub fn iter(&self) -> impl Iterator<Item = (PathKey, &Path)> {
        self.paths.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Replaces a path's polyline vertices.
    ///
    /// Returns whether the key resolved. Remember to invalidate any
    /// point cache entry for this key.
    pub fn set_points(&mut self, key: PathKey, points: Vec<Vec3>) -> bool {
        if let Some(path) = self.paths.get_mut(key) {
            path.points = points;
            true
        } else {
            log::warn!("set_points on an unknown path key.");
            false
        }
    }

    /// Registers an object as a waypoint member of a path.
    pub fn add_member(&mut self, key: PathKey, object: NodeHandle) -> bool {
        if let Some(path) = self.paths.get_mut(key) {
            path.members.insert(object);
            true
        } else {
            log::warn!("add_member on an unknown path key.");
            false
        }
    }

    /// Drops an object's membership of a path.
    pub fn remove_member(&mut self, key: PathKey, object: NodeHandle) -> bool {
        self.paths
            .get_mut(key)
            .is_some_and(|path| path.members.remove(&object))
    }

    /// Finds the path (if any) that lists the object as a member.
    ///
    /// Membership across *all* paths is what gates motion: a waypoint
    /// object may not be animated.
    #[must_use]
    pub fn membership_of(&self, object: NodeHandle) -> Option<(PathKey, &Path)> {
        self.paths
            .iter()
            .find(|(_, path)| path.members.contains(&object))
    }

    /// Whether the object is a waypoint member of any path.
    #[must_use]
    pub fn is_member(&self, object: NodeHandle) -> bool {
        self.membership_of(object).is_some()
    }
}
