#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod motion;
pub mod path;
pub mod scene;

pub use errors::{Result, WaypathError};
pub use motion::{FacingMode, MotionEngine, MovementConfig, MovementState, MovementUpdate};
pub use path::{Path, PathKey, PathStore};
pub use scene::{Node, NodeHandle, Scene, Transform};
