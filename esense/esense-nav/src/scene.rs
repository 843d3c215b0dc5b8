//! Randomized obstacle scenes.

use esense_types::{Point3, Result, SenseError, Sphere};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contrast values obstacles are drawn from: conductor or insulator.
const CONTRASTS: [f64; 2] = [1.0, -0.5];

/// Configuration for random scene generation.
///
/// Positions are drawn uniformly over the square
/// [−half_extent, half_extent]², rejecting anything within `keep_out_radius`
/// of the origin where the robot starts. Radii are uniform in
/// [min_radius, max_radius] and contrast is drawn uniformly from
/// {1.0 (conductor), −0.5 (insulator)}. All spheres sit in the z = 0 plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneConfig {
    /// Number of spheres to place.
    pub count: usize,
    /// Minimum sphere radius (m).
    pub min_radius: f64,
    /// Maximum sphere radius (m).
    pub max_radius: f64,
    /// Half-width of the placement square (m).
    pub half_extent: f64,
    /// No spheres within this distance of the origin (m).
    pub keep_out_radius: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            count: 4,
            min_radius: 0.1,
            max_radius: 0.2,
            half_extent: 2.0,
            keep_out_radius: 0.5,
        }
    }
}

impl SceneConfig {
    /// Set the sphere count.
    #[must_use]
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Set the radius range.
    #[must_use]
    pub fn radius_range(mut self, min: f64, max: f64) -> Self {
        self.min_radius = min;
        self.max_radius = max;
        self
    }

    /// Set the placement half-extent.
    #[must_use]
    pub fn half_extent(mut self, half_extent: f64) -> Self {
        self.half_extent = half_extent;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.min_radius.is_finite() || self.min_radius <= 0.0 {
            return Err(SenseError::invalid_config("min_radius must be positive"));
        }

        if !self.max_radius.is_finite() || self.max_radius < self.min_radius {
            return Err(SenseError::invalid_config(
                "max_radius must be at least min_radius",
            ));
        }

        if !self.half_extent.is_finite() || self.half_extent <= self.keep_out_radius {
            return Err(SenseError::invalid_config(
                "half_extent must exceed the keep-out radius",
            ));
        }

        Ok(())
    }

    /// Generate a scene from a seed.
    ///
    /// The seed is the only source of randomness: equal seeds give identical
    /// sphere lists in identical order, across platforms (`ChaCha8` stream).
    #[must_use]
    pub fn generate(&self, seed: u64) -> Vec<Sphere> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with(&mut rng)
    }

    /// Generate a scene from a caller-supplied random source.
    #[must_use]
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<Sphere> {
        let keep_out_sq = self.keep_out_radius * self.keep_out_radius;

        (0..self.count)
            .map(|_| {
                // Rejection-sample the position to clear the robot start
                let (x, y) = loop {
                    let x = rng.gen_range(-self.half_extent..self.half_extent);
                    let y = rng.gen_range(-self.half_extent..self.half_extent);
                    if x * x + y * y > keep_out_sq {
                        break (x, y);
                    }
                };

                let radius = rng.gen_range(self.min_radius..=self.max_radius);
                let contrast = if rng.gen_bool(0.5) {
                    CONTRASTS[0]
                } else {
                    CONTRASTS[1]
                };

                Sphere::new(Point3::new(x, y, 0.0), radius, contrast)
            })
            .collect()
    }
}
