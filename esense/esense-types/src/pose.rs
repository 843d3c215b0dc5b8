//! Planar sensor pose with 3D embedding helpers.

use nalgebra::{Point2, Point3, Rotation3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position and heading of the sensing robot in the arena plane.
///
/// The pose is planar (x, y, heading) but the field model works in 3D, so
/// [`position3`](Self::position3) and [`rotation`](Self::rotation) provide
/// the embedding: z = 0, heading as a rotation about the z axis.
///
/// # Example
///
/// ```
/// use esense_types::SensorPose;
/// use nalgebra::Vector3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let pose = SensorPose::new(1.0, 0.0, FRAC_PI_2);
/// let forward = pose.rotation() * Vector3::x();
///
/// // Heading pi/2 points the body x axis along world +Y
/// assert!((forward.y - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorPose {
    /// Planar position in meters.
    pub position: Point2<f64>,
    /// Heading angle in radians. 0 points along +X, counter-clockwise positive.
    pub heading: f64,
}

impl SensorPose {
    /// Create a pose from planar coordinates and heading.
    #[must_use]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            heading,
        }
    }

    /// Pose at the origin facing +X.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Position embedded in 3D (z = 0).
    #[must_use]
    pub fn position3(&self) -> Point3<f64> {
        Point3::new(self.position.x, self.position.y, 0.0)
    }

    /// Body-to-world rotation: heading about the z axis, z unaffected.
    #[must_use]
    pub fn rotation(&self) -> Rotation3<f64> {
        Rotation3::from_axis_angle(&Vector3::z_axis(), self.heading)
    }

    /// Transform a body-frame offset to a world-frame position.
    #[must_use]
    pub fn transform_offset(&self, offset: &Vector3<f64>) -> Point3<f64> {
        self.position3() + self.rotation() * offset
    }
}

impl Default for SensorPose {
    fn default() -> Self {
        Self::origin()
    }
}
