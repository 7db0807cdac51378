//! Mesh triangles.

use nalgebra::Point3;

use super::vertex::SurfaceVertex;

/// A triangle of the discretized surface.
///
/// Vertices are stored by value: each triangle later produces its own
/// centroid, area and normal, independent of the vertex list it was built
/// from.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    /// First vertex.
    pub v0: SurfaceVertex,
    /// Second vertex.
    pub v1: SurfaceVertex,
    /// Third vertex.
    pub v2: SurfaceVertex,
}

impl Triangle {
    /// Create a triangle from three surface vertices.
    pub fn new(v0: SurfaceVertex, v1: SurfaceVertex, v2: SurfaceVertex) -> Self {
        Self { v0, v1, v2 }
    }

    /// Edge lengths (‖v0−v1‖, ‖v0−v2‖, ‖v2−v1‖).
    #[inline]
    pub fn edge_lengths(&self) -> [f64; 3] {
        [
            (self.v0.position - self.v1.position).norm(),
            (self.v0.position - self.v2.position).norm(),
            (self.v2.position - self.v1.position).norm(),
        ]
    }

    /// Flat-triangle area by Heron's formula.
    #[inline]
    pub fn area(&self) -> f64 {
        let [a, b, c] = self.edge_lengths();
        let s = 0.5 * (a + b + c);
        // The product can round to a tiny negative for near-degenerate
        // triangles; clamp before the square root.
        (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt()
    }

    /// Centroid of the three vertex positions (not projected).
    #[inline]
    pub fn centroid(&self) -> Point3<f64> {
        let c = (self.v0.position.coords + self.v1.position.coords + self.v2.position.coords)
            / 3.0;
        Point3::from(c)
    }
}
