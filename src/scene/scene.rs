use rustc_hash::FxHashMap;
use slotmap::SlotMap;

use crate::scene::NodeHandle;
use crate::scene::node::Node;

/// Flat scene container.
///
/// Stores nodes behind generational handles and maintains a
/// name-to-handle registry so tools can resolve an object name in
/// constant time instead of walking the scene. The registry also
/// enforces name uniqueness: inserting a node whose name is already
/// taken assigns a numbered suffix (`"Cube"` becomes `"Cube.001"`).
pub struct Scene {
    nodes: SlotMap<NodeHandle, Node>,
    names: FxHashMap<String, NodeHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            names: FxHashMap::default(),
        }
    }

    /// Adds a node to the scene, returning its handle.
    ///
    /// The node's name is made unique before insertion; read it back
    /// via [`Node::name`] to learn what the registry assigned.
    pub fn add_node(&mut self, mut node: Node) -> NodeHandle {
        let name = self.unique_name(&node.name);
        node.name.clone_from(&name);

        let handle = self.nodes.insert(node);
        self.names.insert(name, handle);
        handle
    }

    /// Removes a node and unregisters its name.
    pub fn remove_node(&mut self, handle: NodeHandle) -> Option<Node> {
        let node = self.nodes.remove(handle)?;
        self.names.remove(&node.name);
        Some(node)
    }

    /// Renames a node, returning the name the registry actually
    /// assigned (suffixed on collision).
    pub fn rename_node(&mut self, handle: NodeHandle, new_name: &str) -> Option<String> {
        if !self.nodes.contains_key(handle) {
            log::error!("Attempted to rename an invalid node handle.");
            return None;
        }

        let old_name = self.nodes[handle].name.clone();
        if old_name == new_name {
            return Some(old_name);
        }

        // Unregister first so a rename to a suffix-free variant of the
        // node's own name does not collide with itself.
        self.names.remove(&old_name);
        let assigned = self.unique_name(new_name);
        self.names.insert(assigned.clone(), handle);
        self.nodes[handle].name.clone_from(&assigned);
        Some(assigned)
    }

    /// Resolves an object name to its handle in constant time.
    #[must_use]
    pub fn handle_by_name(&self, name: &str) -> Option<NodeHandle> {
        self.names.get(name).copied()
    }

    #[must_use]
    pub fn get_node(&self, handle: NodeHandle) -> Option<&Node> {
        self.nodes.get(handle)
    }

    pub fn get_node_mut(&mut self, handle: NodeHandle) -> Option<&mut Node> {
        self.nodes.get_mut(handle)
    }

    /// Iterates all nodes with their handles.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeHandle, &Node)> {
        self.nodes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Refreshes every node's cached matrix (called once per frame,
    /// after the motion engine has written its transforms).
    pub fn update_matrices(&mut self) {
        for (_, node) in &mut self.nodes {
            node.transform.update_matrix();
        }
    }

    /// Picks a free registry name: the base itself, or the first free
    /// `base.NNN` suffix.
    fn unique_name(&self, base: &str) -> String {
        let base = if base.is_empty() { "Object" } else { base };
        if !self.names.contains_key(base) {
            return base.to_owned();
        }

        let mut counter = 1u32;
        loop {
            let candidate = format!("{base}.{counter:03}");
            if !self.names.contains_key(&candidate) {
                return candidate;
            }
            counter += 1;
        }
    }
}
