//! Newton projection of ambient points onto the level set.

use nalgebra::Point3;
use tracing::warn;

use crate::mesh::SurfaceVertex;
use crate::potential::Potential;

/// Squared step length below which the iteration is considered converged.
const TOLERANCE_SQ: f64 = 1e-12;

/// Hard iteration cap.
const MAX_ITERATIONS: usize = 100;

/// Iteration count at which a non-convergence diagnostic is emitted. The
/// margin below the hard cap is deliberate.
const WARN_ITERATIONS: usize = 90;

/// Outcome of a projection, for callers that want the iteration count.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// The projected surface vertex (last iterate on non-convergence).
    pub vertex: SurfaceVertex,
    /// Newton iterations used.
    pub iterations: usize,
    /// Whether the iteration settled within the warning threshold.
    pub converged: bool,
}

/// Project `start` onto the zero level set of `potential`.
///
/// Iterates r ← r − Φ(r)·∇Φ(r)/‖∇Φ(r)‖² until the squared step length
/// drops below 1e-12, for at most 100 iterations.
pub fn project_with_status<P: Potential>(potential: &P, start: Point3<f64>) -> Projection {
    let mut r = start;
    let mut iterations = 0;

    loop {
        let previous = r;
        let value = potential.value(&r);
        let gradient = potential.gradient(&r);
        r -= gradient * (value / gradient.norm_squared());
        iterations += 1;

        if (r - previous).norm_squared() < TOLERANCE_SQ || iterations >= MAX_ITERATIONS {
            break;
        }
    }

    Projection {
        vertex: SurfaceVertex::from_potential(potential, r),
        iterations,
        converged: iterations < WARN_ITERATIONS,
    }
}

/// Project `start` onto the surface, logging a warning when the iteration
/// needed an unusual number of steps. The last iterate is used either way.
pub fn project_onto_surface<P: Potential>(potential: &P, start: Point3<f64>) -> SurfaceVertex {
    let projection = project_with_status(potential, start);
    if !projection.converged {
        warn!(
            iterations = projection.iterations,
            "projection onto the surface did not converge"
        );
    }
    projection.vertex
}
