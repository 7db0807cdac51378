//! The per-facet output table.
//!
//! The triangulator's deliverable is one 16-value row per triangle:
//!
//! | Columns | Meaning |
//! |---------|---------|
//! | 0–2     | centroid, projected onto the surface |
//! | 3       | flat-triangle (Heron) area |
//! | 4–6     | vertex v0 |
//! | 7–9     | vertex v1 |
//! | 10–12   | vertex v2 |
//! | 13–15   | unit normal at the projected centroid |
//!
//! Rows are in triangle-emission order. Winding follows the marching fan
//! and is not globally consistent; consumers needing orientation should
//! re-orient against the centroid normal.

use nalgebra::{Point3, Vector3};

/// One finalized triangle: the 16 quantities of a table row.
#[derive(Debug, Clone, Copy)]
pub struct Facet {
    /// Triangle centroid, projected onto the surface.
    pub centroid: Point3<f64>,
    /// Flat-triangle area from Heron's formula.
    pub area: f64,
    /// The three triangle corners.
    pub vertices: [Point3<f64>; 3],
    /// Unit surface normal at the projected centroid.
    pub normal: Vector3<f64>,
}

impl Facet {
    /// Flatten into the 16-column row layout.
    pub fn to_row(&self) -> [f64; 16] {
        let [v0, v1, v2] = &self.vertices;
        [
            self.centroid.x,
            self.centroid.y,
            self.centroid.z,
            self.area,
            v0.x,
            v0.y,
            v0.z,
            v1.x,
            v1.y,
            v1.z,
            v2.x,
            v2.y,
            v2.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
        ]
    }
}

/// The dense N×16 result of a discretization.
#[derive(Debug, Clone, Default)]
pub struct FacetTable {
    facets: Vec<Facet>,
}

impl FacetTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty table with room for `capacity` facets.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            facets: Vec::with_capacity(capacity),
        }
    }

    /// Append a facet.
    pub fn push(&mut self, facet: Facet) {
        self.facets.push(facet);
    }

    /// Number of facets (table rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.facets.len()
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// The facets in emission order.
    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Iterate over facets in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, Facet> {
        self.facets.iter()
    }

    /// Materialize the dense N×16 matrix, row-major.
    pub fn rows(&self) -> Vec<[f64; 16]> {
        self.facets.iter().map(Facet::to_row).collect()
    }

    /// Sum of the facet areas.
    pub fn total_area(&self) -> f64 {
        self.facets.iter().map(|f| f.area).sum()
    }

    /// Axis-aligned bounds of all facet corners, `None` when empty.
    pub fn bounding_box(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut corners = self.facets.iter().flat_map(|f| f.vertices.iter());
        let first = *corners.next()?;
        let (mut min, mut max) = (first, first);
        for c in corners {
            for i in 0..3 {
                min[i] = min[i].min(c[i]);
                max[i] = max[i].max(c[i]);
            }
        }
        Some((min, max))
    }
}

impl<'a> IntoIterator for &'a FacetTable {
    type Item = &'a Facet;
    type IntoIter = std::slice::Iter<'a, Facet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_facet() -> Facet {
        Facet {
            centroid: Point3::new(0.1, 0.2, 0.3),
            area: 0.5,
            vertices: [
                Point3::new(1.0, 2.0, 3.0),
                Point3::new(4.0, 5.0, 6.0),
                Point3::new(7.0, 8.0, 9.0),
            ],
            normal: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    #[test]
    fn row_layout_is_stable() {
        let row = sample_facet().to_row();
        assert_eq!(
            row,
            [
                0.1, 0.2, 0.3, // centroid
                0.5, // area
                1.0, 2.0, 3.0, // v0
                4.0, 5.0, 6.0, // v1
                7.0, 8.0, 9.0, // v2
                0.0, 0.0, 1.0, // normal
            ]
        );
    }

    #[test]
    fn table_accumulates_area_and_bounds() {
        let mut table = FacetTable::new();
        assert!(table.is_empty());
        assert!(table.bounding_box().is_none());

        table.push(sample_facet());
        table.push(sample_facet());
        assert_eq!(table.len(), 2);
        assert_eq!(table.total_area(), 1.0);

        let (min, max) = table.bounding_box().unwrap();
        assert_eq!(min, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(max, Point3::new(7.0, 8.0, 9.0));

        let rows = table.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][3], 0.5);
    }
}
