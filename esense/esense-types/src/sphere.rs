//! Polarizable spherical obstacles.

use nalgebra::{Matrix3, Point2, Point3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Electrical contrast of a standard conductive obstacle.
pub const CONDUCTOR_CONTRAST: f64 = 1.0;

/// Electrical contrast of a standard insulating obstacle.
pub const INSULATOR_CONTRAST: f64 = -0.5;

/// A polarizable sphere in the scene.
///
/// The sphere perturbs the sensor's electric field according to its
/// electrical contrast χ = (γ_sphere − γ_medium)/(2γ_medium + γ_sphere):
/// χ > 0 behaves as a conductor, χ < 0 as an insulator.
///
/// Position may be updated by the scene; radius and contrast are fixed at
/// creation. Spheres are plain owned values with no back-references.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sphere {
    /// Center position in meters. z = 0 for planar scenes.
    pub position: Point3<f64>,
    radius: f64,
    contrast: f64,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive and finite.
    #[must_use]
    pub fn new(position: Point3<f64>, radius: f64, contrast: f64) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "sphere radius must be positive and finite, got {radius}"
        );
        Self {
            position,
            radius,
            contrast,
        }
    }

    /// Create a sphere, returning `None` if the radius is invalid.
    #[must_use]
    pub fn try_new(position: Point3<f64>, radius: f64, contrast: f64) -> Option<Self> {
        if radius.is_finite() && radius > 0.0 {
            Some(Self {
                position,
                radius,
                contrast,
            })
        } else {
            None
        }
    }

    /// Create a standard conductive sphere (χ = 1.0).
    #[must_use]
    pub fn conductor(position: Point3<f64>, radius: f64) -> Self {
        Self::new(position, radius, CONDUCTOR_CONTRAST)
    }

    /// Create a standard insulating sphere (χ = −0.5).
    #[must_use]
    pub fn insulator(position: Point3<f64>, radius: f64) -> Self {
        Self::new(position, radius, INSULATOR_CONTRAST)
    }

    /// Sphere radius in meters.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Electrical contrast χ.
    #[must_use]
    pub fn contrast(&self) -> f64 {
        self.contrast
    }

    /// Whether the sphere behaves as a conductor (χ > 0).
    #[must_use]
    pub fn is_conductor(&self) -> bool {
        self.contrast > 0.0
    }

    /// Whether the sphere behaves as an insulator (χ < 0).
    #[must_use]
    pub fn is_insulator(&self) -> bool {
        self.contrast < 0.0
    }

    /// Polarization tensor P = χ·a³·I₃.
    ///
    /// Isotropic for spheres: a scalar multiple of the 3×3 identity.
    #[must_use]
    pub fn polarization_tensor(&self) -> Matrix3<f64> {
        Matrix3::identity() * (self.contrast * self.radius.powi(3))
    }

    /// Distance from a planar point to the sphere center, ignoring z.
    #[must_use]
    pub fn planar_distance_to(&self, point: &Point2<f64>) -> f64 {
        let dx = point.x - self.position.x;
        let dy = point.y - self.position.y;
        dx.hypot(dy)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constructors() {
        let c = Sphere::conductor(Point3::origin(), 0.1);
        assert!(c.is_conductor());
        assert_eq!(c.contrast(), CONDUCTOR_CONTRAST);

        let i = Sphere::insulator(Point3::origin(), 0.1);
        assert!(i.is_insulator());
        assert_eq!(i.contrast(), INSULATOR_CONTRAST);
    }

    #[test]
    fn test_try_new_rejects_bad_radius() {
        assert!(Sphere::try_new(Point3::origin(), 0.0, 1.0).is_none());
        assert!(Sphere::try_new(Point3::origin(), -0.1, 1.0).is_none());
        assert!(Sphere::try_new(Point3::origin(), f64::NAN, 1.0).is_none());
        assert!(Sphere::try_new(Point3::origin(), 0.1, 1.0).is_some());
    }

    #[test]
    #[should_panic(expected = "radius must be positive")]
    fn test_new_panics_on_bad_radius() {
        let _ = Sphere::new(Point3::origin(), -1.0, 1.0);
    }

    #[test]
    fn test_polarization_tensor_isotropic() {
        let sphere = Sphere::new(Point3::origin(), 0.2, -0.5);
        let p = sphere.polarization_tensor();
        let expected = -0.5 * 0.2_f64.powi(3);

        assert_relative_eq!(p[(0, 0)], expected, epsilon = 1e-15);
        assert_relative_eq!(p[(1, 1)], expected, epsilon = 1e-15);
        assert_relative_eq!(p[(2, 2)], expected, epsilon = 1e-15);
        assert_relative_eq!(p[(0, 1)], 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_planar_distance_ignores_z() {
        let sphere = Sphere::new(Point3::new(3.0, 4.0, 7.0), 0.1, 1.0);
        let d = sphere.planar_distance_to(&Point2::origin());
        assert_relative_eq!(d, 5.0, epsilon = 1e-12);
    }
}
