//! Surface vertices with attached tangent frames.
//!
//! Every vertex produced by the triangulator lies on the zero level set of
//! a potential and carries an orthonormal frame (n, t₁, t₂): the unit
//! gradient direction and two tangents. The frame's inverse is cached on
//! construction so world→local transforms are a single matrix multiply.

use nalgebra::{Matrix3, Point3, Vector3};

use crate::potential::Potential;

/// A vertex on the discretized surface.
///
/// Local coordinates are expressed in the (n, t₁, t₂) basis, in that
/// component order.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceVertex {
    /// Position on the surface.
    pub position: Point3<f64>,
    /// Unit normal, along the potential gradient.
    pub normal: Vector3<f64>,
    /// First unit tangent, orthogonal to the normal.
    pub tangent1: Vector3<f64>,
    /// Second unit tangent, n × t₁.
    pub tangent2: Vector3<f64>,
    /// Cached inverse of the frame matrix [n | t₁ | t₂].
    inv_frame: Matrix3<f64>,
}

impl SurfaceVertex {
    /// Build a vertex at `position` with the frame induced by `potential`.
    ///
    /// The position is taken as-is; callers are expected to have projected
    /// it onto the surface first.
    pub fn from_potential<P: Potential>(potential: &P, position: Point3<f64>) -> Self {
        let n = potential.gradient(&position).normalize();

        // Pick t1 from whichever axis pair is well-conditioned; a normal
        // near the z axis would make the (x, y) branch divide by ~0.
        let t1 = if n.x.abs() > 0.5 || n.y.abs() > 0.5 {
            let nn = (n.x * n.x + n.y * n.y).sqrt();
            Vector3::new(n.y / nn, -n.x / nn, 0.0)
        } else {
            let nn = (n.x * n.x + n.z * n.z).sqrt();
            Vector3::new(-n.z / nn, 0.0, n.x / nn)
        };
        let t2 = n.cross(&t1);

        let frame = Matrix3::from_columns(&[n, t1, t2]);
        // Orthonormal frames invert to their transpose; the explicit inverse
        // keeps the cached matrix exact for slightly off-unit gradients.
        let inv_frame = frame.try_inverse().unwrap_or_else(|| frame.transpose());

        Self {
            position,
            normal: n,
            tangent1: t1,
            tangent2: t2,
            inv_frame,
        }
    }

    /// Express a world-space vector in this vertex's (n, t₁, t₂) basis.
    #[inline]
    pub fn cart_to_local(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.inv_frame * v
    }

    /// Map a local (n, t₁, t₂) vector back to world space.
    #[inline]
    pub fn local_to_cart(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.normal * v.x + self.tangent1 * v.y + self.tangent2 * v.z
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use super::*;
    use crate::potential::{BinaryRoche, Heart, Sphere, Torus};

    fn sample_vertices() -> Vec<SurfaceVertex> {
        let sphere = Sphere::new(1.0);
        let torus = Torus::new(1.0, 0.3);
        let roche = BinaryRoche::new(1.0, 0.5, 1.0, 3.8);
        vec![
            SurfaceVertex::from_potential(&sphere, Point3::new(1.0, 0.0, 0.0)),
            // Normal along z exercises the degenerate-guard branch.
            SurfaceVertex::from_potential(&sphere, Point3::new(0.0, 0.0, 1.0)),
            SurfaceVertex::from_potential(&sphere, Point3::new(0.0, -1.0, 0.0)),
            SurfaceVertex::from_potential(&torus, Point3::new(1.3, 0.0, 0.0)),
            SurfaceVertex::from_potential(&torus, Point3::new(0.0, 1.0, 0.3)),
            SurfaceVertex::from_potential(&roche, Point3::new(0.28, 0.05, 0.03)),
            SurfaceVertex::from_potential(&Heart, Point3::new(0.9, 0.1, 0.2)),
        ]
    }

    #[test]
    fn frames_are_orthonormal() {
        for v in sample_vertices() {
            assert_relative_eq!(v.normal.norm(), 1.0, epsilon = 1e-10);
            assert_relative_eq!(v.tangent1.norm(), 1.0, epsilon = 1e-10);
            assert_relative_eq!(v.tangent2.norm(), 1.0, epsilon = 1e-10);
            assert!(v.normal.dot(&v.tangent1).abs() < 1e-10);
            assert!(v.normal.dot(&v.tangent2).abs() < 1e-10);
            assert!(v.tangent1.dot(&v.tangent2).abs() < 1e-10);
        }
    }

    #[test]
    fn local_roundtrip_is_identity() {
        let probes = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(-0.3, 0.7, 2.1),
            Vector3::new(0.01, -5.0, 0.4),
        ];
        for v in sample_vertices() {
            for p in &probes {
                let back = v.local_to_cart(&v.cart_to_local(p));
                assert_relative_eq!(back, *p, epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn local_components_follow_the_frame_order() {
        let sphere = Sphere::new(1.0);
        let v = SurfaceVertex::from_potential(&sphere, Point3::new(1.0, 0.0, 0.0));
        // The normal maps to (1, 0, 0) in local coordinates.
        let ln = v.cart_to_local(&v.normal);
        assert_relative_eq!(ln, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-10);
        let lt1 = v.cart_to_local(&v.tangent1);
        assert_relative_eq!(lt1, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-10);
        let lt2 = v.cart_to_local(&v.tangent2);
        assert_relative_eq!(lt2, Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-10);
    }
}
