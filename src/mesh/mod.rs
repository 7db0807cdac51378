//! Mesh data structures.
//!
//! The triangulator produces a *triangle soup*: an append-only list of
//! surface vertices and an append-only list of triangles that hold their
//! corner vertices by value. There is no connectivity index and no
//! deduplication; the mesh records geometry, and every triangle is
//! self-contained for the finalization pass that turns it into a table row.
//!
//! Types:
//! - [`SurfaceVertex`]: position plus tangent frame on the level set
//! - [`Triangle`]: three vertices by value, edge lengths, Heron area
//! - [`SurfaceMesh`]: the growing vertex and triangle lists
//! - [`Facet`], [`FacetTable`]: the finalized N×16 output

mod table;
mod triangle;
mod vertex;

pub use table::{Facet, FacetTable};
pub use triangle::Triangle;
pub use vertex::SurfaceVertex;

/// A growing surface mesh: every projected vertex ever produced, and every
/// emitted triangle. Both lists are append-only.
#[derive(Debug, Clone, Default)]
pub struct SurfaceMesh {
    /// All surface vertices in production order (seed, initial ring, fan
    /// points).
    pub vertices: Vec<SurfaceVertex>,
    /// All triangles in emission order.
    pub triangles: Vec<Triangle>,
}

impl SurfaceMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of triangles.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.triangles.len()
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Sum of the flat areas of all triangles.
    pub fn total_area(&self) -> f64 {
        self.triangles.iter().map(Triangle::area).sum()
    }
}
