//! Wedge geometry: interior angles, pivot selection, fan construction.
//!
//! Each marching step closes the wedge at the front vertex with the
//! smallest interior angle. The wedge is measured in that vertex's tangent
//! plane and subdivided into near-π/3 sectors; each subdivision boundary
//! becomes a new projected vertex, and the sectors become triangles.

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::front::Front;
use super::project::project_onto_surface;
use crate::mesh::{SurfaceMesh, SurfaceVertex, Triangle};
use crate::potential::Potential;

/// Angle differences closer than this are treated as ties, keeping the
/// earliest candidate. The resulting mesh depends on this choice.
const ANGLE_TOLERANCE: f64 = 1e-6;

/// Sector angles narrower than this (radians) get widened by dropping one
/// subdivision, trading angular fidelity for triangle aspect ratio.
const MIN_SECTOR_ANGLE: f64 = 0.8;

/// Interior angle of the front at each vertex, measured between the
/// offsets to its cyclic neighbors in the vertex's own tangent plane,
/// normalized into [0, 2π).
pub(crate) fn interior_angles(front: &Front) -> Vec<f64> {
    (0..front.len())
        .map(|i| {
            let v = front.vertex(i);
            let before = front.vertex(front.predecessor(i));
            let after = front.vertex(front.successor(i));

            let a = v.cart_to_local(&(before.position - v.position));
            let b = v.cart_to_local(&(after.position - v.position));

            // Components 1 and 2 are the tangent coordinates.
            let phi_a = a.z.atan2(a.y);
            let phi_b = b.z.atan2(b.y);
            (phi_b - phi_a).rem_euclid(2.0 * PI)
        })
        .collect()
}

/// Index of the smallest angle. A candidate replaces the incumbent only
/// when it is smaller by more than the tolerance, so near-ties resolve to
/// the earliest index.
pub(crate) fn argmin(angles: &[f64]) -> usize {
    let mut min = 0;
    for i in 1..angles.len() {
        if angles[min] - angles[i] > ANGLE_TOLERANCE {
            min = i;
        }
    }
    min
}

/// Number of triangles to fan into a wedge of the given angle, and the
/// per-triangle sector angle.
///
/// Targets π/3 per sector; sectors that would come out narrower than
/// 0.8 rad are widened by dropping one subdivision. `budget`, when set,
/// caps the count (the wedge still closes, with wider sectors).
pub(crate) fn subdivision(angle: f64, budget: Option<usize>) -> (usize, f64) {
    let mut count = (angle * 3.0 / PI).trunc() as usize + 1;
    let mut sector = angle / count as f64;
    if sector < MIN_SECTOR_ANGLE && count > 1 {
        count -= 1;
        sector = angle / count as f64;
    }
    if let Some(budget) = budget {
        if count > budget {
            count = budget;
            sector = angle / count as f64;
        }
    }
    (count, sector)
}

/// Close the wedge at `pivot_index` with `count` triangles.
///
/// New vertices are spaced by `sector` radians around the pivot normal at
/// tangent distance `delta`, projected onto the surface, and appended to
/// the mesh; the front is spliced so the new arc replaces the pivot.
pub(crate) fn close_wedge<P: Potential>(
    potential: &P,
    delta: f64,
    front: &mut Front,
    mesh: &mut SurfaceMesh,
    pivot_index: usize,
    count: usize,
    sector: f64,
) {
    let pivot = *front.vertex(pivot_index);
    let before = *front.vertex(front.predecessor(pivot_index));
    let after = *front.vertex(front.successor(pivot_index));

    // Offset to the preceding neighbor in the pivot's frame. Only the
    // tangent components take part in the fan: the normal component is
    // dropped, and the projection afterwards recovers the curvature the
    // flat-tangent step ignores.
    let local = pivot.cart_to_local(&(before.position - pivot.position));

    let mut arc: Vec<SurfaceVertex> = Vec::with_capacity(count.saturating_sub(1));

    for i in 1..count {
        let (sin, cos) = (i as f64 * sector).sin_cos();
        let u = local.y * cos - local.z * sin;
        let w = local.y * sin + local.z * cos;
        let scale = delta / (u * u + w * w).sqrt();

        let offset = pivot.local_to_cart(&Vector3::new(0.0, u * scale, w * scale));
        let q = project_onto_surface(potential, pivot.position + offset);
        mesh.vertices.push(q);

        let previous = *arc.last().unwrap_or(&before);
        mesh.triangles.push(Triangle::new(previous, q, pivot));
        arc.push(q);
    }

    let last = *arc.last().unwrap_or(&before);
    mesh.triangles.push(Triangle::new(last, after, pivot));

    front.splice(pivot_index, arc);
}
