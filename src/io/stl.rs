//! STL (stereolithography) export.
//!
//! The facet table is already a triangle soup, which is exactly what STL
//! stores: three corners and a normal per facet, no shared vertices. The
//! per-facet normal is the surface normal at the projected centroid rather
//! than a corner cross product, so it stays meaningful even where the fan
//! winding flips.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{DiscretizeError, Result};
use crate::mesh::FacetTable;

/// Save a facet table to a binary STL file.
///
/// # Example
///
/// ```no_run
/// let table = lobule::discretize(0.2, 500, "Torus", &[1.0, 0.3]).unwrap();
/// lobule::io::stl::save(&table, "torus.stl").unwrap();
/// ```
pub fn save<P: AsRef<Path>>(table: &FacetTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    let triangles: Vec<stl_io::Triangle> = table
        .iter()
        .map(|facet| {
            let n = facet.normal;
            let [v0, v1, v2] = facet.vertices;
            stl_io::Triangle {
                normal: stl_io::Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: [
                    stl_io::Vertex::new([v0.x as f32, v0.y as f32, v0.z as f32]),
                    stl_io::Vertex::new([v1.x as f32, v1.y as f32, v1.z as f32]),
                    stl_io::Vertex::new([v2.x as f32, v2.y as f32, v2.z as f32]),
                ],
            }
        })
        .collect();

    stl_io::write_stl(&mut writer, triangles.iter()).map_err(|e| DiscretizeError::SaveError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(())
}
