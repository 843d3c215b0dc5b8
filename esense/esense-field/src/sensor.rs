//! Electrode-impedance field model.

use std::f64::consts::PI;

use esense_types::{CurrentSignal, Matrix5, Result, SensorPose, Sphere, Vector3};

use crate::geometry::{ELECTRODE_COUNT, SensorGeometry};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The 5-electrode electric sensor.
///
/// Computes the mutual-impedance perturbation caused by polarizable spheres
/// and reduces it to the axial/lateral/vertical current triple consumed by
/// the behavior policies. All methods are pure functions of their inputs.
///
/// # Singularities
///
/// No guard is applied when an electrode coincides with a sphere center: the
/// entry degenerates to a division by zero and the resulting currents are
/// infinite or NaN. The standalone dipole solver
/// ([`DipoleModel`](crate::DipoleModel)) instead masks a radius around its
/// singularities; the asymmetry between the two models is intentional.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElectricSensor {
    geometry: SensorGeometry,
}

impl ElectricSensor {
    /// Create a sensor from validated geometry.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the geometry fails
    /// [`SensorGeometry::validate`].
    pub fn new(geometry: SensorGeometry) -> Result<Self> {
        geometry.validate()?;
        Ok(Self { geometry })
    }

    /// The sensor geometry.
    #[must_use]
    pub fn geometry(&self) -> &SensorGeometry {
        &self.geometry
    }

    /// Perturbation matrix K contributed by a single sphere.
    ///
    /// For each electrode pair (α, β):
    ///
    /// ```text
    /// K[α,β] = (r_α · P · r_β) / (4π·γ·‖r_α‖³·‖r_β‖³)
    /// ```
    ///
    /// where P = χ·a³·I₃ is the sphere's polarization tensor and r_α is the
    /// vector from the sphere center to electrode α in the world frame.
    /// K is symmetric because P is isotropic.
    #[must_use]
    pub fn perturbation_matrix(&self, sphere: &Sphere, pose: &SensorPose) -> Matrix5<f64> {
        let polarization = sphere.polarization_tensor();
        let scale = 4.0 * PI * self.geometry.conductivity;

        let mut offsets = [Vector3::zeros(); ELECTRODE_COUNT];
        let mut inv_cubed = [0.0; ELECTRODE_COUNT];
        for (i, local) in self.geometry.electrodes.iter().enumerate() {
            let world = pose.transform_offset(local);
            offsets[i] = world - sphere.position;
            inv_cubed[i] = offsets[i].norm().powi(3).recip();
        }

        let mut k = Matrix5::zeros();
        for alpha in 0..ELECTRODE_COUNT {
            let polarized = polarization * offsets[alpha];
            for beta in 0..ELECTRODE_COUNT {
                k[(alpha, beta)] =
                    polarized.dot(&offsets[beta]) * inv_cubed[alpha] * inv_cubed[beta] / scale;
            }
        }

        k
    }

    /// Perceived currents for a set of spheres at the given pose.
    ///
    /// Sums the per-sphere perturbation matrices (linear superposition;
    /// sphere-sphere interaction is not modeled, which is physically valid
    /// only for well-separated spheres), then computes the perturbed
    /// currents δI = −C0·K·C0·U and extracts:
    ///
    /// - axial: mean of the four receiving electrodes
    /// - lateral: left − right
    /// - vertical: top − bottom
    #[must_use]
    pub fn sense(&self, spheres: &[Sphere], pose: &SensorPose) -> CurrentSignal {
        let mut k_total = Matrix5::zeros();
        for sphere in spheres {
            k_total += self.perturbation_matrix(sphere, pose);
        }

        let c0 = self.geometry.base_conductance;
        let delta = -(c0 * k_total * c0 * self.geometry.excitation);

        let left = delta[SensorGeometry::LEFT];
        let top = delta[SensorGeometry::TOP];
        let right = delta[SensorGeometry::RIGHT];
        let bottom = delta[SensorGeometry::BOTTOM];

        CurrentSignal::new(
            (left + top + right + bottom) / 4.0,
            left - right,
            top - bottom,
        )
    }
}

impl Default for ElectricSensor {
    fn default() -> Self {
        Self {
            geometry: SensorGeometry::standard(),
        }
    }
}
