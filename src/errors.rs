//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`WaypathError`] covers every failure a motion
//! request can produce. All variants are non-fatal and locally
//! recoverable: they are detected synchronously inside
//! `start_movement`/`update_movement` and returned to the immediate
//! caller. Nothing is raised across the tick boundary, and a malformed
//! request for one object never affects another object's motion.
//!
//! # Usage
//!
//! Fallible public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, WaypathError>`.

use thiserror::Error;

/// The main error type for the motion engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaypathError {
    // ========================================================================
    // Movement Request Errors
    // ========================================================================
    /// The object is listed as a waypoint member of a path. An object
    /// cannot simultaneously be a path waypoint and be animated.
    #[error("object is already a member of path '{path_name}'")]
    ObjectAlreadyMemberOfPath {
        /// Name of the path that claims the object as a member
        path_name: String,
    },

    /// The supplied path key does not resolve to a stored path.
    #[error("path not found")]
    PathNotFound,

    /// The resolved path cannot define a direction of travel.
    #[error("path has {count} points, at least 2 distinct points are required")]
    InsufficientPathPoints {
        /// Number of points the path resolved to
        count: usize,
    },

    /// Speed must be strictly positive; duration is undefined otherwise.
    #[error("movement speed must be positive, got {speed}")]
    InvalidSpeed {
        /// The rejected speed value
        speed: f32,
    },

    /// `update_movement` was called for an object that has never been
    /// started; there is no stored configuration to merge into.
    #[error("object has no movement state to update")]
    MovementNotFound,
}

/// Alias for `Result<T, WaypathError>`.
pub type Result<T> = std::result::Result<T, WaypathError>;
