//! Ephemeral sensing and command values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Perceived currents at the receiving electrodes.
///
/// Recomputed every step from the current sphere set and sensor pose; never
/// persisted as state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CurrentSignal {
    /// Forward-looking aggregate signal: mean of the four receiving
    /// electrodes. Used as the gain denominator in the behavior laws.
    pub axial: f64,
    /// Left-minus-right differential. Drives turning.
    pub lateral: f64,
    /// Top-minus-bottom differential. Unused by planar navigation but
    /// reported for analysis.
    pub vertical: f64,
}

impl CurrentSignal {
    /// Create a current signal.
    #[must_use]
    pub fn new(axial: f64, lateral: f64, vertical: f64) -> Self {
        Self {
            axial,
            lateral,
            vertical,
        }
    }

    /// Signal with all components zero (no perturbers in range).
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Whether all components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.axial.is_finite() && self.lateral.is_finite() && self.vertical.is_finite()
    }
}

/// Steering command produced by a behavior policy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VelocityCommand {
    /// Forward velocity in m/s. Constant for the shipped behaviors.
    pub linear: f64,
    /// Angular velocity in rad/s.
    pub angular: f64,
}

impl VelocityCommand {
    /// Create a velocity command.
    #[must_use]
    pub fn new(linear: f64, angular: f64) -> Self {
        Self { linear, angular }
    }
}
