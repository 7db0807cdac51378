//! Roche-model potentials of rotating and binary stars.
//!
//! All three follow the standard stellar-astrophysics convention: a point
//! mass (or two) plus the centrifugal term of corotation, shifted by a
//! reference value so the surface of interest is the zero level set.
//! Lengths are in units of the orbital separation unless noted.

use nalgebra::{Point3, Vector3};

use super::Potential;

/// Roche potential of an aligned, synchronously rotating binary, centered
/// on the primary.
///
/// Φ = 1/|r| + q·(1/|r − d·x̂| − x/d²) + ½F²(1+q)(x² + y²) − Ω₀.
#[derive(Debug, Clone, Copy)]
pub struct BinaryRoche {
    /// Instantaneous separation between the components.
    pub d: f64,
    /// Mass ratio m₂/m₁.
    pub q: f64,
    /// Synchronicity parameter (spin over orbital angular velocity).
    pub f: f64,
    /// Reference potential defining the surface.
    pub omega0: f64,
}

impl BinaryRoche {
    /// Create a binary Roche potential.
    pub fn new(d: f64, q: f64, f: f64, omega0: f64) -> Self {
        Self { d, q, f, omega0 }
    }
}

impl Potential for BinaryRoche {
    fn value(&self, r: &Point3<f64>) -> f64 {
        let rho2 = r.x * r.x + r.y * r.y + r.z * r.z;
        let dx = r.x - self.d;
        let rho2_c = dx * dx + r.y * r.y + r.z * r.z;
        1.0 / rho2.sqrt()
            + self.q * (1.0 / rho2_c.sqrt() - r.x / (self.d * self.d))
            + 0.5 * self.f * self.f * (1.0 + self.q) * (r.x * r.x + r.y * r.y)
            - self.omega0
    }

    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        let rho2 = r.x * r.x + r.y * r.y + r.z * r.z;
        let dx = r.x - self.d;
        let rho2_c = dx * dx + r.y * r.y + r.z * r.z;
        let inv3 = rho2.powf(-1.5);
        let inv3_c = rho2_c.powf(-1.5);
        let cf = self.f * self.f * (1.0 + self.q);
        Vector3::new(
            -r.x * inv3 - self.q * dx * inv3_c - self.q / (self.d * self.d) + cf * r.x,
            -r.y * inv3 - self.q * r.y * inv3_c + cf * r.y,
            -r.z * inv3 - self.q * r.z * inv3_c,
        )
    }
}

/// Roche potential of a binary whose spin axis is tilted against the
/// orbital axis by Euler angles (θ, φ).
#[derive(Debug, Clone, Copy)]
pub struct MisalignedBinaryRoche {
    /// Instantaneous separation between the components.
    pub d: f64,
    /// Mass ratio m₂/m₁.
    pub q: f64,
    /// Synchronicity parameter.
    pub f: f64,
    /// Obliquity of the spin axis.
    pub theta: f64,
    /// Azimuth of the spin axis.
    pub phi: f64,
    /// Reference potential defining the surface.
    pub omega0: f64,
}

impl MisalignedBinaryRoche {
    /// Create a misaligned binary Roche potential.
    pub fn new(d: f64, q: f64, f: f64, theta: f64, phi: f64, omega0: f64) -> Self {
        Self {
            d,
            q,
            f,
            theta,
            phi,
            omega0,
        }
    }

    /// Quadratic form of the centrifugal term for the tilted axis.
    fn centrifugal(&self, r: &Point3<f64>) -> f64 {
        let st2 = self.theta.sin().powi(2);
        let s2t = (2.0 * self.theta).sin();
        let cp = self.phi.cos();
        let sp = self.phi.sin();
        let s2p = (2.0 * self.phi).sin();
        (1.0 - cp * cp * st2) * r.x * r.x + (1.0 - sp * sp * st2) * r.y * r.y
            + st2 * r.z * r.z
            - st2 * s2p * r.x * r.y
            - s2t * cp * r.x * r.z
            - s2t * sp * r.y * r.z
    }
}

impl Potential for MisalignedBinaryRoche {
    fn value(&self, r: &Point3<f64>) -> f64 {
        let rho2 = r.x * r.x + r.y * r.y + r.z * r.z;
        let dx = r.x - self.d;
        let rho2_c = dx * dx + r.y * r.y + r.z * r.z;
        1.0 / rho2.sqrt()
            + self.q * (1.0 / rho2_c.sqrt() - r.x / (self.d * self.d))
            + 0.5 * self.f * self.f * (1.0 + self.q) * self.centrifugal(r)
            - self.omega0
    }

    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        let rho2 = r.x * r.x + r.y * r.y + r.z * r.z;
        let dx = r.x - self.d;
        let rho2_c = dx * dx + r.y * r.y + r.z * r.z;
        let inv3 = rho2.powf(-1.5);
        let inv3_c = rho2_c.powf(-1.5);

        let st2 = self.theta.sin().powi(2);
        let s2t = (2.0 * self.theta).sin();
        let cp = self.phi.cos();
        let sp = self.phi.sin();
        let s2p = (2.0 * self.phi).sin();
        let half_cf = 0.5 * self.f * self.f * (1.0 + self.q);

        let dcx = 2.0 * (1.0 - cp * cp * st2) * r.x - st2 * s2p * r.y - s2t * cp * r.z;
        let dcy = 2.0 * (1.0 - sp * sp * st2) * r.y - st2 * s2p * r.x - s2t * sp * r.z;
        let dcz = 2.0 * st2 * r.z - s2t * cp * r.x - s2t * sp * r.y;

        Vector3::new(
            -r.x * inv3 - self.q * dx * inv3_c - self.q / (self.d * self.d) + half_cf * dcx,
            -r.y * inv3 - self.q * r.y * inv3_c + half_cf * dcy,
            -r.z * inv3 - self.q * r.z * inv3_c + half_cf * dcz,
        )
    }
}

/// Ratio of the angular velocity to the critical (break-up) angular
/// velocity implied by a unit polar radius.
const CRITICAL_OMEGA: f64 = 0.544_331_053_951_817_36;

/// Potential of a single rigidly rotating star.
///
/// Φ = 1/r₀ − 1/|r| − ½ω²(x² + y²) with ω = `omega_scale` · ω_crit.
#[derive(Debug, Clone, Copy)]
pub struct RotateRoche {
    /// Angular velocity in units of the critical angular velocity.
    pub omega_scale: f64,
    /// Polar radius fixing the reference potential.
    pub r0: f64,
}

impl RotateRoche {
    /// Create a rotating-star potential.
    pub fn new(omega_scale: f64, r0: f64) -> Self {
        Self { omega_scale, r0 }
    }

    #[inline]
    fn omega(&self) -> f64 {
        self.omega_scale * CRITICAL_OMEGA
    }
}

impl Potential for RotateRoche {
    fn value(&self, r: &Point3<f64>) -> f64 {
        let omega = self.omega();
        let rho = (r.x * r.x + r.y * r.y + r.z * r.z).sqrt();
        1.0 / self.r0 - 1.0 / rho - 0.5 * omega * omega * (r.x * r.x + r.y * r.y)
    }

    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        let omega = self.omega();
        let inv3 = (r.x * r.x + r.y * r.y + r.z * r.z).powf(-1.5);
        Vector3::new(
            r.x * inv3 - omega * omega * r.x,
            r.y * inv3 - omega * omega * r.y,
            r.z * inv3,
        )
    }
}
