use glam::Vec3;
use rustc_hash::FxHashSet;

use crate::scene::NodeHandle;

/// An authored path: an ordered polyline plus the set of objects that
/// are its waypoint members.
///
/// Membership is a bookkeeping relation, not motion: a member object
/// marks a waypoint of the path and is therefore excluded from being
/// animated along any path. The motion engine never mutates a path; all
/// edits go through [`PathStore`](crate::path::PathStore) so the
/// engine's point cache can be invalidated alongside.
#[derive(Debug, Clone)]
pub struct Path {
    pub(crate) name: String,
    pub(crate) points: Vec<Vec3>,
    pub(crate) members: FxHashSet<NodeHandle>,
}

impl Path {
    #[must_use]
    pub fn new(name: &str, points: Vec<Vec3>) -> Self {
        Self {
            name: name.to_owned(),
            points,
            members: FxHashSet::default(),
        }
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered polyline vertices.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Whether the object is a waypoint member of this path.
    #[must_use]
    pub fn is_member(&self, object: NodeHandle) -> bool {
        self.members.contains(&object)
    }

    /// Iterates the waypoint-member objects.
    pub fn members(&self) -> impl Iterator<Item = NodeHandle> + '_ {
        self.members.iter().copied()
    }
}
