use crate::scene::transform::Transform;

/// A scene object the motion engine can animate.
///
/// The scene is flat: a node carries only the data the editor tools
/// touch every frame (name, transform, visibility). Everything heavier
/// lives with the rendering side, which is outside this crate.
///
/// Node names are unique within a [`Scene`](crate::scene::Scene); the
/// scene assigns a numbered suffix on collision, so the name stored
/// here is the one the registry actually knows the node by.
#[derive(Debug, Clone)]
pub struct Node {
    /// Registry name (unique per scene; managed by `Scene`)
    pub(crate) name: String,

    /// Transform component (hot data written every tick while moving)
    pub transform: Transform,

    /// Visibility flag for the editor viewport
    pub visible: bool,
}

impl Node {
    /// Creates a new node with a default transform and visibility.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            transform: Transform::new(),
            visible: true,
        }
    }

    /// Returns the node's registry name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}
