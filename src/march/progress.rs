//! Progress reporting for long marches.
//!
//! Surfaces at small edge lengths can take tens of thousands of steps; the
//! driver reports after every step so callers can display a live counter
//! or watch the front evolve.

/// A progress callback invoked after each marching step.
///
/// Reporting starts once the first wedge has been closed: building the
/// seed ring itself is not reported, so the first invocation carries
/// `step` 1 with the ring's six triangles already included in the count.
///
/// The callback receives:
/// - `step`: marching steps completed so far, starting at 1
/// - `triangles`: total triangles emitted, including the seed ring's six
/// - `front`: current number of active front vertices
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, usize) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, usize) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report the state after a marching step.
    #[inline]
    pub fn report(&self, step: usize, triangles: usize, front: usize) {
        (self.callback)(step, triangles, front);
    }

    /// Create a no-op progress reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}
