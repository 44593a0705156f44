//! Path provider module
//!
//! Owns the authored polyline paths the motion engine travels along:
//! - Path: named point sequence plus its waypoint-member objects
//! - PathStore: path lifecycle, lookup and membership queries

pub mod path;
pub mod store;

pub use path::Path;
pub use store::PathStore;

use slotmap::new_key_type;

new_key_type! {
    pub struct PathKey;
}
