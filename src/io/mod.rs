//! Output of discretization results.
//!
//! Two on-disk forms are supported, both derived from the facet table:
//!
//! | Format | Extension | Contents |
//! |--------|-----------|----------|
//! | CSV    | `.csv`    | the dense N×16 table, one row per facet |
//! | STL    | `.stl`    | binary triangle soup with centroid normals |
//!
//! # Usage
//!
//! ```no_run
//! let table = lobule::discretize(0.1, 0, "Sphere", &[1.0]).unwrap();
//! lobule::io::save(&table, "sphere.stl").unwrap();
//! lobule::io::save(&table, "sphere.csv").unwrap();
//! ```

pub mod stl;
pub mod table;

use std::path::Path;

use crate::error::{DiscretizeError, Result};
use crate::mesh::FacetTable;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Comma-separated 16-column table.
    Csv,
    /// Binary STL triangle soup.
    Stl,
}

impl Format {
    /// Detect format from a file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Format::Csv),
            "stl" => Some(Format::Stl),
            _ => None,
        }
    }

    /// Detect format from a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

/// Save a facet table with automatic format detection.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(table: &FacetTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| DiscretizeError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })?;

    match format {
        Format::Csv => table::save(table, path),
        Format::Stl => stl::save(table, path),
    }
}
