//! Advancing-front surface discretization.
//!
//! The triangulator grows a single-component mesh outward from a seed
//! point on the level set:
//!
//! 1. **Seed**: project a fixed off-origin point onto the surface and fan
//!    six triangles around it in its tangent plane. The six ring vertices
//!    become the initial *front*: the polygon separating meshed from
//!    unmeshed surface.
//! 2. **March**: repeatedly pick the front vertex whose interior angle
//!    (measured in its own tangent plane) is smallest, subdivide that
//!    wedge into near-60° sectors, project the sector boundaries onto the
//!    surface, emit the sector triangles, and splice the new arc into the
//!    front in place of the pivot.
//! 3. **Finalize**: for every emitted triangle, project its centroid back
//!    onto the surface and record centroid, Heron area, corners and the
//!    centroid normal as one table row.
//!
//! The front shrinks in expectation because the smallest wedge is always
//! closed first; the loop ends when the front is exhausted or an optional
//! triangle budget runs out. Triangle winding follows the fan construction
//! and is not globally consistent.
//!
//! The front never merges with itself. On sphere-topology surfaces it
//! contracts to nothing; on surfaces with handles (a torus, say) the two
//! arms meet, pass over each other, and keep circulating, so such runs
//! should be bounded with [`MarchOptions::with_max_triangles`].
//!
//! # Example
//!
//! ```
//! use lobule::march::{discretize_potential, MarchOptions};
//! use lobule::potential::Sphere;
//!
//! let table = discretize_potential(&Sphere::new(1.0), &MarchOptions::new(0.3)).unwrap();
//! assert!(table.len() > 6);
//! ```
//!
//! # References
//!
//! - Hartmann, E. (1998). "A marching method for the triangulation of
//!   surfaces." The Visual Computer 14.

mod front;
mod progress;
mod project;
mod wedge;

pub use front::Front;
pub use progress::Progress;
pub use project::{project_onto_surface, project_with_status, Projection};

use std::f64::consts::FRAC_PI_3;

use nalgebra::Point3;
use tracing::debug;

use crate::error::{DiscretizeError, Result};
use crate::mesh::{Facet, FacetTable, SurfaceMesh, Triangle};
use crate::potential::{AnyPotential, Potential};

/// Options for a marching run.
#[derive(Debug, Clone)]
pub struct MarchOptions {
    /// Target edge length of the mesh triangles.
    pub delta: f64,

    /// Upper bound on marching-emitted triangles (the six seed triangles
    /// are not counted). `None` marches until the front closes.
    pub max_triangles: Option<usize>,
}

impl MarchOptions {
    /// Create options with the given target edge length and no bound.
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            max_triangles: None,
        }
    }

    /// Bound the number of marching-emitted triangles.
    pub fn with_max_triangles(mut self, max_triangles: usize) -> Self {
        self.max_triangles = Some(max_triangles);
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.delta.is_finite() || self.delta <= 0.0 {
            return Err(DiscretizeError::invalid_param(
                "delta",
                self.delta,
                "must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// Discretize a named potential.
///
/// Mirrors the positional invocation surface: `max_triangles <= 0` means
/// unbounded, the parameter tail must match the potential's arity.
///
/// # Errors
///
/// [`DiscretizeError::UnknownPotential`], [`DiscretizeError::BadArity`] on
/// lookup failures, [`DiscretizeError::InvalidParameter`] for a bad delta.
/// No partial result is produced on error.
///
/// # Example
///
/// ```
/// let table = lobule::discretize(0.3, 0, "Sphere", &[1.0]).unwrap();
/// assert!(table.total_area() > 0.0);
/// ```
pub fn discretize(
    delta: f64,
    max_triangles: i32,
    potential: &str,
    params: &[f64],
) -> Result<FacetTable> {
    let potential = AnyPotential::parse(potential, params)?;
    let mut options = MarchOptions::new(delta);
    if max_triangles > 0 {
        options = options.with_max_triangles(max_triangles as usize);
    }
    discretize_potential(&potential, &options)
}

/// Discretize any potential into the finalized facet table.
pub fn discretize_potential<P: Potential>(
    potential: &P,
    options: &MarchOptions,
) -> Result<FacetTable> {
    discretize_potential_with_progress(potential, options, &Progress::none())
}

/// Discretize with per-step progress reporting.
pub fn discretize_potential_with_progress<P: Potential>(
    potential: &P,
    options: &MarchOptions,
    progress: &Progress,
) -> Result<FacetTable> {
    let mesh = march_with_progress(potential, options, progress)?;
    Ok(tabulate(potential, &mesh))
}

/// Run the marching loop and return the raw triangle soup.
pub fn march<P: Potential>(potential: &P, options: &MarchOptions) -> Result<SurfaceMesh> {
    march_with_progress(potential, options, &Progress::none())
}

/// Run the marching loop with per-step progress reporting.
pub fn march_with_progress<P: Potential>(
    potential: &P,
    options: &MarchOptions,
    progress: &Progress,
) -> Result<SurfaceMesh> {
    options.validate()?;
    let delta = options.delta;

    let mut mesh = SurfaceMesh::new();
    let mut front = Front::new();

    // Fixed off-origin seed: most potentials in the family are singular at
    // the origin itself.
    let seed = Point3::new(-2.0e-5, 0.0, 0.0);
    let center = project_onto_surface(potential, seed);
    mesh.vertices.push(center);

    // Initial hexagonal fan in the seed's tangent plane.
    for k in 0..6 {
        let (sin, cos) = (k as f64 * FRAC_PI_3).sin_cos();
        let offset = center.tangent1 * (delta * cos) + center.tangent2 * (delta * sin);
        let v = project_onto_surface(potential, center.position + offset);
        front.push(v);
        mesh.vertices.push(v);
    }
    for k in 0..6 {
        mesh.triangles.push(Triangle::new(
            mesh.vertices[0],
            mesh.vertices[1 + k],
            mesh.vertices[1 + (k + 1) % 6],
        ));
    }

    let ring = mesh.num_triangles();
    debug!(delta, "seeded initial ring");

    let mut step = 0;
    while !front.is_empty() {
        let emitted = mesh.num_triangles() - ring;
        let budget = match options.max_triangles {
            Some(max) if emitted >= max => break,
            Some(max) => Some(max - emitted),
            None => None,
        };

        let angles = wedge::interior_angles(&front);
        let pivot = wedge::argmin(&angles);
        let (count, sector) = wedge::subdivision(angles[pivot], budget);
        wedge::close_wedge(potential, delta, &mut front, &mut mesh, pivot, count, sector);

        // Fewer than 3 front vertices bound a zero-area sliver: the
        // surface is closed, and finishing the polygon would only emit
        // degenerate triangles.
        if front.len() < 3 {
            front.clear();
        }

        step += 1;
        progress.report(step, mesh.num_triangles(), front.len());
        debug!(
            step,
            triangles = mesh.num_triangles(),
            front = front.len(),
            "closed wedge"
        );
    }

    debug!(
        triangles = mesh.num_triangles(),
        vertices = mesh.num_vertices(),
        "march finished"
    );
    Ok(mesh)
}

/// Finalize a marched mesh into the N×16 facet table.
///
/// Each triangle's centroid is projected back onto the surface; the
/// surface normal at the projected centroid is recorded alongside the
/// flat-triangle Heron area and the corner positions. Rows keep
/// triangle-emission order.
pub fn tabulate<P: Potential>(potential: &P, mesh: &SurfaceMesh) -> FacetTable {
    let mut table = FacetTable::with_capacity(mesh.num_triangles());
    for t in &mesh.triangles {
        let centroid = project_onto_surface(potential, t.centroid());
        table.push(Facet {
            centroid: centroid.position,
            area: t.area(),
            vertices: [t.v0.position, t.v1.position, t.v2.position],
            normal: centroid.normal,
        });
    }
    table
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::potential::Sphere;

    #[test]
    fn sphere_discretization_covers_the_sphere() {
        let table = discretize(0.1, 0, "Sphere", &[1.0]).unwrap();

        assert!(table.len() >= 800, "only {} facets", table.len());

        // Total flat area approaches 4π from below.
        let total = table.total_area();
        assert!((12.0..13.0).contains(&total), "total area {total}");

        for facet in &table {
            let r = facet.centroid.coords.norm();
            assert!((0.99..1.01).contains(&r), "centroid radius {r}");
            // Centroid normals are radial on a sphere.
            let alignment = facet.normal.dot(&facet.centroid.coords.normalize());
            assert!(alignment > 0.999);
        }
    }

    #[test]
    fn sphere_facets_satisfy_the_metric_invariants() {
        let pot = Sphere::new(1.0);
        let table = discretize_potential(&pot, &MarchOptions::new(0.2)).unwrap();

        for facet in &table {
            // Corners sit on the level set.
            for corner in &facet.vertices {
                assert!(pot.value(corner).abs() < 1e-6);
            }

            let max_edge = [
                (facet.vertices[0] - facet.vertices[1]).norm(),
                (facet.vertices[0] - facet.vertices[2]).norm(),
                (facet.vertices[2] - facet.vertices[1]).norm(),
            ]
            .into_iter()
            .fold(0.0_f64, f64::max);

            assert!(facet.area > 0.0);
            assert!(facet.area <= 3.0_f64.sqrt() / 4.0 * max_edge * max_edge + 1e-12);
        }
    }

    #[test]
    fn triangle_bound_caps_the_row_count_exactly() {
        let table = discretize(0.1, 50, "Sphere", &[1.0]).unwrap();
        assert_eq!(table.len(), 56);
    }

    #[test]
    fn non_positive_bound_means_unbounded() {
        let bounded = discretize(0.3, 0, "Sphere", &[1.0]).unwrap();
        let negative = discretize(0.3, -7, "Sphere", &[1.0]).unwrap();
        assert_eq!(bounded.len(), negative.len());
        assert!(bounded.len() > 6);
    }

    #[test]
    fn torus_centroids_stay_on_the_tube() {
        // The front never merges with itself, so on a surface with a
        // handle it keeps circulating instead of closing; the run is
        // bounded and the surface property checked on every emitted facet.
        let table = discretize(0.1, 1000, "Torus", &[1.0, 0.3]).unwrap();
        assert_eq!(table.len(), 1006);
        for facet in &table {
            let c = facet.centroid;
            let ring = ((c.x * c.x + c.y * c.y).sqrt() - 1.0).powi(2) + c.z * c.z;
            assert!((ring - 0.09).abs() < 1e-5, "ring distance² {ring}");
        }
    }

    #[test]
    fn binary_roche_centroids_satisfy_the_potential() {
        let pot = AnyPotential::parse("BinaryRoche", &[0.5, 0.3, 1.0, 3.5]).unwrap();
        let table = discretize_potential(&pot, &MarchOptions::new(0.05)).unwrap();

        assert!(!table.is_empty());
        for row in table.rows() {
            for v in row {
                assert!(v.is_finite());
            }
        }
        for facet in &table {
            assert!(pot.value(&facet.centroid).abs() < 1e-4);
        }
    }

    #[test]
    fn unknown_potential_is_rejected() {
        let err = discretize(0.1, 0, "UnknownPot", &[1.0]).unwrap_err();
        assert!(matches!(err, DiscretizeError::UnknownPotential { .. }));
    }

    #[test]
    fn bad_arity_is_rejected() {
        let err = discretize(0.1, 0, "Sphere", &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, DiscretizeError::BadArity { .. }));
    }

    #[test]
    fn invalid_delta_is_rejected() {
        for delta in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let err = discretize(delta, 0, "Sphere", &[1.0]).unwrap_err();
            assert!(matches!(err, DiscretizeError::InvalidParameter { .. }));
        }
    }

    #[test]
    fn step_deltas_match_the_wedge_size() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let progress = Progress::new(move |step, triangles, front| {
            sink.lock().unwrap().push((step, triangles, front));
        });

        let pot = Sphere::new(1.0);
        march_with_progress(&pot, &MarchOptions::new(0.25), &progress).unwrap();

        let log = log.lock().unwrap();
        assert!(!log.is_empty());

        // From the ring state (6 triangles, 6 front vertices) every step
        // emits 1..=6 triangles and changes the front by that count minus
        // 2; the last step may additionally clear the exhausted front.
        let mut previous = (6_usize, 6_usize);
        for (i, &(step, triangles, front)) in log.iter().enumerate() {
            assert_eq!(step, i + 1);
            let dt = triangles - previous.0;
            assert!((1..=6).contains(&dt));
            if i + 1 < log.len() {
                assert_eq!(front as isize - previous.1 as isize, dt as isize - 2);
            }
            previous = (triangles, front);
        }

        // The front was exhausted, not abandoned.
        assert_eq!(log.last().unwrap().2, 0);
    }
}
