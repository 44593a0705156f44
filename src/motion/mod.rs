//! Path-constrained object motion.
//!
//! The core of the crate, leaf-first:
//! - math: pure polyline functions (length, duration, sampling)
//! - facing: orientation solver for the facing modes
//! - cache: memoized path-key → point-sequence resolution
//! - driver: per-object one-shot progress stepper
//! - engine: the movement state machine tying it all together

pub mod cache;
pub mod driver;
pub mod engine;
pub mod facing;
pub mod math;

pub use cache::PathPointCache;
pub use driver::{DriverStep, ProgressDriver};
pub use engine::{MotionEngine, MovementConfig, MovementState, MovementUpdate};
pub use facing::{FacingMode, facing_rotation};
