//! # Lobule
//!
//! Advancing-front triangulation of implicit equipotential surfaces.
//!
//! Lobule discretizes the zero level set of a scalar potential Φ(r) into a
//! triangle mesh with approximately uniform edge length. It exists to
//! tessellate the closed surfaces of stellar astrophysics (Roche lobes,
//! rotating single stars, tori, spheres) for surface-integrated radiative
//! transfer, where each facet needs a position, an area and a normal.
//!
//! ## Features
//!
//! - **Closed potential family**: binary and single-star Roche models plus
//!   geometric test shapes, each with analytic gradients
//! - **Advancing-front marching**: grows the mesh from a seed hexagon,
//!   always closing the narrowest wedge on the active front
//! - **Per-facet output**: centroid (re-projected onto the surface), Heron
//!   area, corner positions and centroid normal as a dense N×16 table
//! - **Export**: CSV table and binary STL
//!
//! ## Quick Start
//!
//! ```
//! use lobule::prelude::*;
//!
//! // A unit sphere at edge length 0.3.
//! let table = lobule::discretize(0.3, 0, "Sphere", &[1.0]).unwrap();
//!
//! // One row per triangle.
//! for facet in &table {
//!     assert!(facet.area > 0.0);
//!     assert!((facet.centroid.coords.norm() - 1.0).abs() < 1e-3);
//! }
//! ```
//!
//! ## Typed potentials
//!
//! The string entry point mirrors the positional calling convention of the
//! host bindings; library users can skip the registry and march a typed
//! potential directly, which also monomorphizes the inner loops:
//!
//! ```
//! use lobule::march::{discretize_potential, MarchOptions};
//! use lobule::potential::Torus;
//!
//! let torus = Torus::new(1.0, 0.3);
//! let options = MarchOptions::new(0.2).with_max_triangles(100);
//! let table = discretize_potential(&torus, &options).unwrap();
//! assert_eq!(table.len(), 106);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod march;
pub mod mesh;
pub mod potential;

pub use march::{discretize, discretize_potential, MarchOptions};

/// Prelude module for convenient imports.
///
/// ```
/// use lobule::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{DiscretizeError, Result};
    pub use crate::march::{
        discretize, discretize_potential, march, MarchOptions, Progress,
    };
    pub use crate::mesh::{Facet, FacetTable, SurfaceMesh, SurfaceVertex, Triangle};
    pub use crate::potential::{AnyPotential, Potential};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn rotating_star_discretizes_cleanly() {
        let pot = AnyPotential::parse("RotateRoche", &[0.5, 1.0]).unwrap();
        let table = discretize_potential(&pot, &MarchOptions::new(0.2)).unwrap();

        assert!(table.len() > 100);
        // Mildly oblate unit star: total area a little above 4π.
        let area = table.total_area();
        assert!((10.0..16.0).contains(&area), "total area {area}");

        for facet in &table {
            assert!(pot.value(&facet.centroid).abs() < 1e-5);
            for corner in &facet.vertices {
                assert!(corner.coords.norm() < 2.0);
            }
        }
    }
}
