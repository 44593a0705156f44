/// One-shot progress stepper bound to a single moving object.
///
/// Raw progress runs over `[0, loops]`: one unit per full traversal of
/// the path. Each tick advances it linearly by host-supplied delta
/// time; once it reaches `loops` the driver reports completion and is
/// dropped by its owner. A completed driver never ticks again.
///
/// The driver owns nothing but numbers; cancellation is its owner
/// letting go of it, so a stop always takes effect before the next
/// tick.
#[derive(Debug, Clone)]
pub struct ProgressDriver {
    duration: f32,
    loops: f32,
    progress: f32,
}

/// The outcome of one [`ProgressDriver::advance`] call.
#[derive(Debug, Clone, Copy)]
pub struct DriverStep {
    /// Raw progress in `[0, loops]` (not yet wrapped to a single loop)
    pub progress: f32,
    /// Whether the driver just reached its natural end
    pub completed: bool,
}

impl ProgressDriver {
    #[must_use]
    pub fn new(duration: f32, loops: f32) -> Self {
        Self {
            duration,
            loops,
            progress: 0.0,
        }
    }

    /// Advances progress by `dt` seconds of wall-clock time.
    ///
    /// A non-positive duration (a zero-loop request) completes on the
    /// first tick without dividing by it.
    pub fn advance(&mut self, dt: f32) -> DriverStep {
        if self.duration <= 0.0 {
            self.progress = self.loops;
        } else {
            self.progress = (self.progress + dt / self.duration * self.loops).min(self.loops);
        }

        DriverStep {
            progress: self.progress,
            completed: self.progress >= self.loops,
        }
    }

    /// Raw progress in `[0, loops]`.
    #[inline]
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    #[must_use]
    pub fn loops(&self) -> f32 {
        self.loops
    }
}
