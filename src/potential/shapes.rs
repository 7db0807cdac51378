//! Geometric test shapes: sphere, torus, and an algebraic heart.
//!
//! These carry the same value/gradient contract as the astrophysical
//! potentials and are mainly useful for validation, since their level sets
//! have known geometry.

use nalgebra::{Point3, Vector3};

use super::Potential;

/// Sphere of radius `radius` centered at the origin.
///
/// Φ = x² + y² + z² − radius².
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    /// Sphere radius.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere potential.
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
}

impl Potential for Sphere {
    #[inline]
    fn value(&self, r: &Point3<f64>) -> f64 {
        r.x * r.x + r.y * r.y + r.z * r.z - self.radius * self.radius
    }

    #[inline]
    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        Vector3::new(2.0 * r.x, 2.0 * r.y, 2.0 * r.z)
    }
}

/// Circular torus around the z axis.
///
/// Φ = r² − R² + 2R·√(x² + y²) − x² − y² − z², which vanishes on
/// (√(x² + y²) − R)² + z² = r².
#[derive(Debug, Clone, Copy)]
pub struct Torus {
    /// Distance from the axis to the tube center.
    pub major_radius: f64,
    /// Tube radius.
    pub minor_radius: f64,
}

impl Torus {
    /// Create a torus potential.
    pub fn new(major_radius: f64, minor_radius: f64) -> Self {
        Self {
            major_radius,
            minor_radius,
        }
    }
}

impl Potential for Torus {
    #[inline]
    fn value(&self, r: &Point3<f64>) -> f64 {
        let rho = (r.x * r.x + r.y * r.y).sqrt();
        self.minor_radius * self.minor_radius - self.major_radius * self.major_radius
            + 2.0 * self.major_radius * rho
            - r.x * r.x
            - r.y * r.y
            - r.z * r.z
    }

    #[inline]
    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        // Undefined on the torus axis itself; the surface never touches it.
        let inv_rho = 1.0 / (r.x * r.x + r.y * r.y).sqrt();
        Vector3::new(
            2.0 * self.major_radius * r.x * inv_rho - 2.0 * r.x,
            2.0 * self.major_radius * r.y * inv_rho - 2.0 * r.y,
            -2.0 * r.z,
        )
    }
}

/// Unit algebraic heart surface.
///
/// Φ = (x² + 9/4·y² + z² − 1)³ − x²z³ − 9/80·y²z³.
#[derive(Debug, Clone, Copy)]
pub struct Heart;

impl Potential for Heart {
    #[inline]
    fn value(&self, r: &Point3<f64>) -> f64 {
        let w = r.x * r.x + 2.25 * r.y * r.y + r.z * r.z - 1.0;
        let z3 = r.z * r.z * r.z;
        w * w * w - r.x * r.x * z3 - 9.0 / 80.0 * r.y * r.y * z3
    }

    #[inline]
    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        let w = r.x * r.x + 2.25 * r.y * r.y + r.z * r.z - 1.0;
        let w2 = 3.0 * w * w;
        let z2 = r.z * r.z;
        let z3 = z2 * r.z;
        Vector3::new(
            w2 * 2.0 * r.x - 2.0 * r.x * z3,
            w2 * 4.5 * r.y - 9.0 / 40.0 * r.y * z3,
            w2 * 2.0 * r.z - 3.0 * r.x * r.x * z2 - 27.0 / 80.0 * r.y * r.y * z2,
        )
    }
}
