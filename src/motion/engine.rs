//! Movement state machine.
//!
//! One [`MotionEngine`] instance per scene, constructed by the host and
//! passed explicitly; there is no global engine. The host frame loop
//! calls [`MotionEngine::update`] once per rendering frame with the
//! elapsed delta time; every state transition happens synchronously
//! inside that call or inside the request methods.

use std::sync::Arc;

use glam::Vec3;
use rustc_hash::FxHashMap;

use crate::errors::{Result, WaypathError};
use crate::motion::cache::PathPointCache;
use crate::motion::driver::ProgressDriver;
use crate::motion::facing::{FacingMode, facing_rotation};
use crate::motion::math;
use crate::path::{PathKey, PathStore};
use crate::scene::{NodeHandle, Scene};

/// Full configuration for starting a motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementConfig {
    /// Travel speed in world units per second; must be positive
    pub speed: f32,
    /// Number of full traversals; non-negative, fractional values
    /// permitted (1.5 completes one and a half traversals)
    pub loops: f32,
    /// Which local axis to align with the direction of travel
    pub facing: FacingMode,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 1.0,
            loops: 1.0,
            facing: FacingMode::None,
        }
    }
}

/// Partial configuration for [`MotionEngine::update_movement`]; unset
/// fields keep their stored values.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementUpdate {
    pub speed: Option<f32>,
    pub loops: Option<f32>,
    pub facing: Option<FacingMode>,
}

/// Per-object movement record.
///
/// Owned exclusively by the engine; the object and the path are
/// referenced by handle only. The record outlives its driver: once the
/// motion stops or completes the driver is dropped but the
/// configuration stays, ready for a later `update_movement` or restart.
#[derive(Debug, Clone)]
pub struct MovementState {
    path: PathKey,
    speed: f32,
    loops: f32,
    facing: FacingMode,
    /// Geometry snapshot taken at start time; cache invalidation while
    /// moving does not retarget an in-flight driver
    points: Arc<[Vec3]>,
    driver: Option<ProgressDriver>,
}

impl MovementState {
    /// The path currently driving (or last to have driven) this object.
    #[must_use]
    pub fn path(&self) -> PathKey {
        self.path
    }

    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[must_use]
    pub fn loops(&self) -> f32 {
        self.loops
    }

    #[must_use]
    pub fn facing(&self) -> FacingMode {
        self.facing
    }

    /// True exactly while a live driver owns this record.
    #[must_use]
    pub fn is_moving(&self) -> bool {
        self.driver.is_some()
    }

    /// Raw progress in `[0, loops]`; 0 when idle.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.driver.as_ref().map_or(0.0, ProgressDriver::progress)
    }

    /// Completed full traversals so far; 0 when idle.
    #[must_use]
    pub fn current_loop(&self) -> f32 {
        self.progress().floor()
    }
}

/// Drives objects along authored paths.
///
/// Any number of objects may move concurrently, each behind its own
/// [`ProgressDriver`] and [`MovementState`]; drivers share nothing
/// mutable with each other. A failure raised for one object never
/// interrupts another object's motion.
#[derive(Default)]
pub struct MotionEngine {
    states: FxHashMap<NodeHandle, MovementState>,
    cache: PathPointCache,
}

impl MotionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: FxHashMap::default(),
            cache: PathPointCache::new(),
        }
    }

    /// Starts driving `object` along `path`.
    ///
    /// Fails if the object is a waypoint member of any path, if the
    /// path does not resolve, if the speed is not positive, or if the
    /// path cannot define a direction of travel (fewer than 2 points,
    /// or zero total length). If the object is already moving, the old
    /// driver is cancelled before the new one starts; there are never
    /// two drivers for one object.
    ///
    /// On success the object's position begins to change on subsequent
    /// [`MotionEngine::update`] ticks, not synchronously.
    pub fn start_movement(
        &mut self,
        store: &PathStore,
        object: NodeHandle,
        path: PathKey,
        config: MovementConfig,
    ) -> Result<()> {
        if let Some((_, owner)) = store.membership_of(object) {
            return Err(WaypathError::ObjectAlreadyMemberOfPath {
                path_name: owner.name().to_owned(),
            });
        }
        if store.get(path).is_none() {
            return Err(WaypathError::PathNotFound);
        }
        if config.speed <= 0.0 {
            return Err(WaypathError::InvalidSpeed {
                speed: config.speed,
            });
        }

        let points = self.cache.points_for(store, path);
        if points.len() < 2 || math::polyline_length(&points) <= f32::EPSILON {
            return Err(WaypathError::InsufficientPathPoints {
                count: points.len(),
            });
        }

        if self.states.get(&object).is_some_and(MovementState::is_moving) {
            log::debug!("Restarting motion for {object:?}; cancelling its active driver.");
        }

        let loops = config.loops.max(0.0);
        let duration = math::travel_duration(&points, config.speed, loops);
        self.states.insert(
            object,
            MovementState {
                path,
                speed: config.speed,
                loops,
                facing: config.facing,
                points,
                driver: Some(ProgressDriver::new(duration, loops)),
            },
        );
        Ok(())
    }

    /// Cancels any active motion for `object`.
    ///
    /// Takes effect before the next tick: no further position writes
    /// happen for the object. Idempotent; stopping an idle or unknown
    /// object is a no-op.
    pub fn stop_movement(&mut self, object: NodeHandle) {
        if let Some(state) = self.states.get_mut(&object) {
            if state.driver.take().is_some() {
                log::debug!("Stopped motion for {object:?}.");
            }
        }
    }

    /// Merges a partial config into the object's stored state.
    ///
    /// If the object is currently moving this is stop-then-restart:
    /// progress made so far is discarded and motion restarts from the
    /// path origin with the merged config. The restart is deliberate,
    /// documented behavior, not a resume.
    pub fn update_movement(
        &mut self,
        store: &PathStore,
        object: NodeHandle,
        update: MovementUpdate,
    ) -> Result<()> {
        let Some(state) = self.states.get_mut(&object) else {
            return Err(WaypathError::MovementNotFound);
        };

        let merged = MovementConfig {
            speed: update.speed.unwrap_or(state.speed),
            loops: update.loops.unwrap_or(state.loops),
            facing: update.facing.unwrap_or(state.facing),
        };
        if merged.speed <= 0.0 {
            return Err(WaypathError::InvalidSpeed {
                speed: merged.speed,
            });
        }

        let path = state.path;
        if state.driver.take().is_some() {
            // Restart runs the full validation again, so membership or
            // geometry changes since the original start are caught.
            self.start_movement(store, object, path, merged)
        } else {
            state.speed = merged.speed;
            state.loops = merged.loops.max(0.0);
            state.facing = merged.facing;
            Ok(())
        }
    }

    /// Read-only snapshot of an object's movement record.
    #[must_use]
    pub fn movement_state(&self, object: NodeHandle) -> Option<&MovementState> {
        self.states.get(&object)
    }

    /// Number of objects currently moving.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.states.values().filter(|s| s.is_moving()).count()
    }

    /// Stops every motion and drops all records (scene teardown).
    pub fn clear_movements(&mut self) {
        let active = self.active_count();
        if active > 0 {
            log::debug!("Clearing {active} active motions.");
        }
        self.states.clear();
    }

    /// Drops every cached path snapshot; the next start re-fetches.
    pub fn clear_path_cache(&mut self) {
        self.cache.clear();
    }

    /// Drops one path's cached snapshot (call after editing its
    /// points). Objects already travelling keep the geometry they
    /// started with.
    pub fn invalidate_path(&mut self, path: PathKey) {
        self.cache.invalidate(path);
    }

    /// Advances every active motion by `dt` seconds and writes the
    /// resulting positions and orientations into the scene.
    ///
    /// Completion pins the final evaluation to the exact path endpoint
    /// (an integer loop count ends on the path's last point, not on the
    /// wrapped-to-zero start), then drops the driver; the record
    /// transitions to idle and never ticks again.
    pub fn update(&mut self, dt: f32, scene: &mut Scene) {
        for (&object, state) in &mut self.states {
            let Some(driver) = state.driver.as_mut() else {
                continue;
            };

            let step = driver.advance(dt);
            if step.completed {
                state.driver = None;
                let end = endpoint_progress(state.loops);
                apply_sample(scene, object, state, end);
                log::debug!("Motion completed for {object:?}.");
            } else {
                apply_sample(scene, object, state, step.progress.fract());
            }
        }
    }
}

/// Normalized progress of the exact endpoint for a loop count:
/// fractional loop counts end mid-path, integer counts on the last
/// point, a zero count back on the origin.
fn endpoint_progress(loops: f32) -> f32 {
    if loops <= 0.0 {
        return 0.0;
    }
    let fract = loops.fract();
    if fract > 0.0 { fract } else { 1.0 }
}

/// Evaluates one sample and writes it to the object, if it still
/// exists. A missing node skips the write for this tick only; the
/// driver keeps advancing.
fn apply_sample(scene: &mut Scene, object: NodeHandle, state: &MovementState, normalized: f32) {
    let Some(node) = scene.get_node_mut(object) else {
        return;
    };

    node.transform.position = math::position_at(&state.points, normalized);

    if state.facing != FacingMode::None {
        let travel_dir = math::direction_at(&state.points, normalized);
        if let Some(rotation) = facing_rotation(state.facing, travel_dir) {
            node.transform.rotation = rotation;
        }
    }

    node.transform.mark_dirty();
}
