//! Scalar potentials and their registry.
//!
//! A surface to be discretized is the zero level set of a scalar potential
//! Φ: ℝ³ → ℝ. Every potential supplies its value and its analytic gradient;
//! the gradient doubles as the surface normal direction and drives the
//! Newton projection.
//!
//! The family is closed: each shape is a plain struct implementing
//! [`Potential`], and [`AnyPotential`] dispatches over the whole set by
//! name. Marching code is generic over `P: Potential`, so the inner loops
//! monomorphize per shape.

mod roche;
mod shapes;

pub use roche::{BinaryRoche, MisalignedBinaryRoche, RotateRoche};
pub use shapes::{Heart, Sphere, Torus};

use nalgebra::{Point3, Vector3};

use crate::error::{DiscretizeError, Result};

/// A scalar potential whose zero level set is the surface of interest.
pub trait Potential {
    /// Evaluate Φ at the given point.
    fn value(&self, r: &Point3<f64>) -> f64;

    /// Evaluate ∇Φ at the given point.
    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64>;
}

/// Any potential from the registry, selected by name at runtime.
#[derive(Debug, Clone, Copy)]
pub enum AnyPotential {
    /// Sphere of a given radius.
    Sphere(Sphere),
    /// Roche potential of an aligned synchronous binary.
    BinaryRoche(BinaryRoche),
    /// Roche potential with a misaligned rotation axis.
    MisalignedBinaryRoche(MisalignedBinaryRoche),
    /// Potential of a single rotating star.
    RotateRoche(RotateRoche),
    /// Circular torus.
    Torus(Torus),
    /// Algebraic heart surface.
    Heart(Heart),
}

/// Registry entries: potential name and the parameters it expects.
pub const REGISTRY: &[(&str, &str)] = &[
    ("Sphere", "radius"),
    ("BinaryRoche", "d, q, F [, Omega0]"),
    ("MisalignedBinaryRoche", "d, q, F, theta, phi [, Omega0]"),
    ("RotateRoche", "omega_scale, r0"),
    ("Torus", "major_radius, minor_radius"),
    ("Heart", "(none)"),
];

impl AnyPotential {
    /// Look up a potential by name and bind its parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DiscretizeError::UnknownPotential`] for a name not in the
    /// registry, and [`DiscretizeError::BadArity`] when the parameter count
    /// does not match the named potential.
    pub fn parse(name: &str, params: &[f64]) -> Result<Self> {
        let n = params.len();
        match name {
            "Sphere" => {
                require_arity("Sphere", "1", n == 1, n)?;
                Ok(AnyPotential::Sphere(Sphere::new(params[0])))
            }
            "BinaryRoche" => {
                require_arity("BinaryRoche", "3 or 4", n == 3 || n == 4, n)?;
                let omega0 = params.get(3).copied().unwrap_or(0.0);
                Ok(AnyPotential::BinaryRoche(BinaryRoche::new(
                    params[0], params[1], params[2], omega0,
                )))
            }
            "MisalignedBinaryRoche" => {
                require_arity("MisalignedBinaryRoche", "5 or 6", n == 5 || n == 6, n)?;
                let omega0 = params.get(5).copied().unwrap_or(0.0);
                Ok(AnyPotential::MisalignedBinaryRoche(
                    MisalignedBinaryRoche::new(
                        params[0], params[1], params[2], params[3], params[4], omega0,
                    ),
                ))
            }
            "RotateRoche" => {
                require_arity("RotateRoche", "2", n == 2, n)?;
                Ok(AnyPotential::RotateRoche(RotateRoche::new(
                    params[0], params[1],
                )))
            }
            "Torus" => {
                require_arity("Torus", "2", n == 2, n)?;
                Ok(AnyPotential::Torus(Torus::new(params[0], params[1])))
            }
            "Heart" => {
                require_arity("Heart", "0", n == 0, n)?;
                Ok(AnyPotential::Heart(Heart))
            }
            _ => Err(DiscretizeError::UnknownPotential {
                name: name.to_string(),
            }),
        }
    }

    /// The registry name of this potential.
    pub fn name(&self) -> &'static str {
        match self {
            AnyPotential::Sphere(_) => "Sphere",
            AnyPotential::BinaryRoche(_) => "BinaryRoche",
            AnyPotential::MisalignedBinaryRoche(_) => "MisalignedBinaryRoche",
            AnyPotential::RotateRoche(_) => "RotateRoche",
            AnyPotential::Torus(_) => "Torus",
            AnyPotential::Heart(_) => "Heart",
        }
    }
}

fn require_arity(name: &'static str, expected: &'static str, ok: bool, got: usize) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(DiscretizeError::BadArity {
            name,
            expected,
            got,
        })
    }
}

impl Potential for AnyPotential {
    fn value(&self, r: &Point3<f64>) -> f64 {
        match self {
            AnyPotential::Sphere(p) => p.value(r),
            AnyPotential::BinaryRoche(p) => p.value(r),
            AnyPotential::MisalignedBinaryRoche(p) => p.value(r),
            AnyPotential::RotateRoche(p) => p.value(r),
            AnyPotential::Torus(p) => p.value(r),
            AnyPotential::Heart(p) => p.value(r),
        }
    }

    fn gradient(&self, r: &Point3<f64>) -> Vector3<f64> {
        match self {
            AnyPotential::Sphere(p) => p.gradient(r),
            AnyPotential::BinaryRoche(p) => p.gradient(r),
            AnyPotential::MisalignedBinaryRoche(p) => p.gradient(r),
            AnyPotential::RotateRoche(p) => p.gradient(r),
            AnyPotential::Torus(p) => p.gradient(r),
            AnyPotential::Heart(p) => p.gradient(r),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Central finite difference of Φ, for checking analytic gradients.
    pub(crate) fn numeric_gradient<P: Potential>(pot: &P, r: &Point3<f64>) -> Vector3<f64> {
        let h = 1e-6;
        let mut g = Vector3::zeros();
        for i in 0..3 {
            let mut hi = *r;
            let mut lo = *r;
            hi[i] += h;
            lo[i] -= h;
            g[i] = (pot.value(&hi) - pot.value(&lo)) / (2.0 * h);
        }
        g
    }

    #[test]
    fn parse_binds_optional_reference_potential() {
        let pot = AnyPotential::parse("BinaryRoche", &[1.0, 0.5, 1.0]).unwrap();
        let with_omega = AnyPotential::parse("BinaryRoche", &[1.0, 0.5, 1.0, 2.5]).unwrap();

        let r = Point3::new(0.3, 0.1, 0.05);
        // Omega0 only shifts the value.
        assert!((pot.value(&r) - with_omega.value(&r) - 2.5).abs() < 1e-12);
        assert_eq!((pot.gradient(&r) - with_omega.gradient(&r)).norm(), 0.0);
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = AnyPotential::parse("UnknownPot", &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            crate::error::DiscretizeError::UnknownPotential { .. }
        ));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        for (name, params) in [
            ("Sphere", vec![1.0, 2.0]),
            ("Sphere", vec![]),
            ("BinaryRoche", vec![1.0, 0.5]),
            ("BinaryRoche", vec![1.0, 0.5, 1.0, 0.0, 9.0]),
            ("MisalignedBinaryRoche", vec![1.0; 4]),
            ("RotateRoche", vec![0.5]),
            ("Torus", vec![1.0, 0.3, 0.1]),
            ("Heart", vec![1.0]),
        ] {
            let err = AnyPotential::parse(name, &params).unwrap_err();
            assert!(
                matches!(err, crate::error::DiscretizeError::BadArity { .. }),
                "{name} with {} params should be a BadArity",
                params.len()
            );
        }
    }

    #[test]
    fn every_registry_name_parses() {
        let samples: &[(&str, &[f64])] = &[
            ("Sphere", &[1.0]),
            ("BinaryRoche", &[1.0, 0.5, 1.0]),
            ("MisalignedBinaryRoche", &[1.0, 0.5, 1.0, 0.2, 0.1]),
            ("RotateRoche", &[0.5, 1.0]),
            ("Torus", &[1.0, 0.3]),
            ("Heart", &[]),
        ];
        assert_eq!(samples.len(), REGISTRY.len());
        for (name, params) in samples {
            let pot = AnyPotential::parse(name, params).unwrap();
            assert_eq!(pot.name(), *name);
        }
    }
}
