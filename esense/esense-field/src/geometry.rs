//! Sensor geometry and empirical electrical constants.

use esense_types::{Matrix5, Result, SenseError, Vector3, Vector5};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of electrodes on the sensor.
pub const ELECTRODE_COUNT: usize = 5;

/// Immutable sensor geometry and electrical constants.
///
/// Bundles everything the electrode-impedance model needs: the fixed
/// 5-electrode layout, the medium conductivity γ, the empirically measured
/// base conductance matrix C0 and the excitation vector U. One instance is
/// injected into [`ElectricSensor`](crate::ElectricSensor) at construction;
/// there is no hidden global state.
///
/// Electrode layout (body frame, meters):
///
/// | Index | Role     | Offset              |
/// |-------|----------|---------------------|
/// | 0     | emitter  | (−0.2, 0, 0) (tail) |
/// | 1     | left     | (0.2, 0.06, 0)      |
/// | 2     | top      | (0.2, 0, 0.06)      |
/// | 3     | right    | (0.2, −0.06, 0)     |
/// | 4     | bottom   | (0.2, 0, −0.06)     |
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorGeometry {
    /// Electrode offsets in the body frame.
    pub electrodes: [Vector3<f64>; ELECTRODE_COUNT],
    /// Medium conductivity γ (S/m).
    pub conductivity: f64,
    /// Base conductance matrix C0 (S), measured with no perturbers present.
    pub base_conductance: Matrix5<f64>,
    /// Imposed electrode voltages U (V). Unit voltage at the emitter.
    pub excitation: Vector5<f64>,
}

impl SensorGeometry {
    /// Index of the emitting electrode.
    pub const EMITTER: usize = 0;
    /// Index of the left receiving electrode.
    pub const LEFT: usize = 1;
    /// Index of the top receiving electrode.
    pub const TOP: usize = 2;
    /// Index of the right receiving electrode.
    pub const RIGHT: usize = 3;
    /// Index of the bottom receiving electrode.
    pub const BOTTOM: usize = 4;

    /// The standard probe: measured constants for the reference sensor in
    /// fresh water (γ = 0.04 S/m).
    #[must_use]
    pub fn standard() -> Self {
        let gamma = 0.04;

        #[rustfmt::skip]
        let base_conductance = gamma * Matrix5::new(
             0.2557, -0.0639, -0.0639, -0.0639, -0.0639,
            -0.0639,  0.1218, -0.0203, -0.0173, -0.0203,
            -0.0639, -0.0203,  0.1218, -0.0203, -0.0173,
            -0.0639, -0.0173, -0.0203,  0.1218, -0.0203,
            -0.0639, -0.0203, -0.0173, -0.0203,  0.1218,
        );

        Self {
            electrodes: [
                Vector3::new(-0.2, 0.0, 0.0),
                Vector3::new(0.2, 0.06, 0.0),
                Vector3::new(0.2, 0.0, 0.06),
                Vector3::new(0.2, -0.06, 0.0),
                Vector3::new(0.2, 0.0, -0.06),
            ],
            conductivity: gamma,
            base_conductance,
            excitation: Vector5::new(1.0, 0.0, 0.0, 0.0, 0.0),
        }
    }

    /// Validate the geometry.
    ///
    /// Checks conductivity, finiteness of all constants, and symmetry of C0
    /// (a non-symmetric conductance matrix indicates a transcription error).
    pub fn validate(&self) -> Result<()> {
        if !self.conductivity.is_finite() || self.conductivity <= 0.0 {
            return Err(SenseError::invalid_config(
                "conductivity must be positive and finite",
            ));
        }

        if self.electrodes.iter().any(|e| !e.x.is_finite() || !e.y.is_finite() || !e.z.is_finite())
        {
            return Err(SenseError::invalid_config(
                "electrode offsets must be finite",
            ));
        }

        if self.base_conductance.iter().any(|v| !v.is_finite()) {
            return Err(SenseError::invalid_config(
                "base conductance matrix must be finite",
            ));
        }

        let asymmetry = (self.base_conductance - self.base_conductance.transpose()).abs().max();
        if asymmetry > 1e-12 {
            return Err(SenseError::invalid_config(
                "base conductance matrix must be symmetric",
            ));
        }

        if self.excitation.iter().any(|v| !v.is_finite()) {
            return Err(SenseError::invalid_config(
                "excitation vector must be finite",
            ));
        }

        Ok(())
    }
}

impl Default for SensorGeometry {
    fn default() -> Self {
        Self::standard()
    }
}
