//! Scene collaborator module
//!
//! Holds the objects the motion engine animates:
//! - Node: a named scene object with a transform
//! - Transform: TRS component (position, rotation, scale)
//! - Scene: flat scene container with a constant-time name registry

pub mod node;
pub mod scene;
pub mod transform;

pub use node::Node;
pub use scene::Scene;
pub use transform::Transform;

use slotmap::new_key_type;

new_key_type! {
    pub struct NodeHandle;
}
