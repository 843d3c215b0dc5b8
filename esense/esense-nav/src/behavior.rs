//! The four bio-inspired reactive behaviors.
//!
//! Each behavior follows the field-line tracking law V = C (constant forward
//! speed), Ω = K·I_lat, where the gain K is derived from the axial current:
//!
//! | Behavior | K         | Effect                                      |
//! |----------|-----------|---------------------------------------------|
//! | 1        | k/I_ax    | attracted to all objects                    |
//! | 2        | −k/I_ax   | repelled by all objects                     |
//! | 3        | k/\|I_ax\|  | attracted to conductors, repelled by insulators |
//! | 4        | −k/\|I_ax\| | attracted to insulators, repelled by conductors |

use std::f64::consts::PI;

use esense_types::{CurrentSignal, Result, SenseError, VelocityCommand};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axial currents at or below this magnitude produce no turn (K = 0).
///
/// This is a documented numeric policy for the degenerate far-field case,
/// not an error condition.
pub const AXIAL_EPSILON: f64 = 1e-10;

/// The four reactive behaviors, as a closed set.
///
/// Wire formats use the numeric codes 1-4; [`Behavior::from_code`] rejects
/// anything else instead of silently defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Behavior {
    /// B1: attracted to all objects (K = k/I_ax).
    AttractAll,
    /// B2: repelled by all objects (K = −k/I_ax).
    AvoidAll,
    /// B3: attracted to conductors, repelled by insulators (K = k/|I_ax|).
    AttractConductors,
    /// B4: attracted to insulators, repelled by conductors (K = −k/|I_ax|).
    AvoidConductors,
}

impl Behavior {
    /// All four behaviors, in code order.
    pub const ALL: [Self; 4] = [
        Self::AttractAll,
        Self::AvoidAll,
        Self::AttractConductors,
        Self::AvoidConductors,
    ];

    /// Numeric code of this behavior (1-4).
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::AttractAll => 1,
            Self::AvoidAll => 2,
            Self::AttractConductors => 3,
            Self::AvoidConductors => 4,
        }
    }

    /// Parse a numeric behavior code.
    ///
    /// # Errors
    ///
    /// Returns [`SenseError::UnknownBehavior`] for codes outside 1-4.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::AttractAll),
            2 => Ok(Self::AvoidAll),
            3 => Ok(Self::AttractConductors),
            4 => Ok(Self::AvoidConductors),
            other => Err(SenseError::UnknownBehavior(other)),
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::AttractAll => "attracted to all objects",
            Self::AvoidAll => "repelled by all objects",
            Self::AttractConductors => "attracted to conductors, repelled by insulators",
            Self::AvoidConductors => "attracted to insulators, repelled by conductors",
        }
    }

    /// Turning gain K for a given axial current, before the epsilon guard.
    fn gain(self, k: f64, axial: f64) -> f64 {
        match self {
            Self::AttractAll => k / axial,
            Self::AvoidAll => -k / axial,
            Self::AttractConductors => k / axial.abs(),
            Self::AvoidConductors => -k / axial.abs(),
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B{}: {}", self.code(), self.description())
    }
}

/// An immutable behavior policy: behavior, gain and forward speed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BehaviorPolicy {
    behavior: Behavior,
    gain: f64,
    forward_speed: f64,
    clamp_omega: bool,
}

impl BehaviorPolicy {
    /// Create a policy with the default gain (0.5) and speed (0.1 m/s).
    #[must_use]
    pub fn new(behavior: Behavior) -> Self {
        Self {
            behavior,
            gain: 0.5,
            forward_speed: 0.1,
            clamp_omega: false,
        }
    }

    /// Set the control gain k.
    #[must_use]
    pub fn with_gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Set the constant forward speed.
    #[must_use]
    pub fn with_forward_speed(mut self, speed: f64) -> Self {
        self.forward_speed = speed;
        self
    }

    /// Clamp angular velocity to ±π rad/s. Off by default.
    #[must_use]
    pub fn with_omega_clamp(mut self, clamp: bool) -> Self {
        self.clamp_omega = clamp;
        self
    }

    /// The behavior variant.
    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Compute the steering command for a perceived signal.
    ///
    /// Forward speed is constant; the angular velocity is Ω = K·I_lat with
    /// K derived from the axial current per the behavior law, and K = 0 when
    /// |I_ax| ≤ [`AXIAL_EPSILON`].
    #[must_use]
    pub fn compute_command(&self, signal: &CurrentSignal) -> VelocityCommand {
        let gain = if signal.axial.abs() <= AXIAL_EPSILON {
            0.0
        } else {
            self.behavior.gain(self.gain, signal.axial)
        };

        let mut angular = gain * signal.lateral;
        if self.clamp_omega {
            angular = angular.clamp(-PI, PI);
        }

        VelocityCommand::new(self.forward_speed, angular)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn signal(axial: f64, lateral: f64) -> CurrentSignal {
        CurrentSignal::new(axial, lateral, 0.0)
    }

    #[test]
    fn test_codes_round_trip() {
        for behavior in Behavior::ALL {
            assert_eq!(Behavior::from_code(behavior.code()).unwrap(), behavior);
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        for code in [0u8, 5, 42, 255] {
            assert_eq!(
                Behavior::from_code(code),
                Err(SenseError::UnknownBehavior(code))
            );
        }
    }

    #[test]
    fn test_attract_vs_avoid_negate() {
        let attract = BehaviorPolicy::new(Behavior::AttractAll);
        let avoid = BehaviorPolicy::new(Behavior::AvoidAll);
        let s = signal(2e-6, 3e-7);

        let a = attract.compute_command(&s);
        let b = avoid.compute_command(&s);

        assert_relative_eq!(a.angular, -b.angular, epsilon = 1e-15);
        assert_relative_eq!(a.linear, b.linear, epsilon = 1e-15);
    }

    #[test]
    fn test_conductor_behaviors_negate() {
        let attract = BehaviorPolicy::new(Behavior::AttractConductors);
        let avoid = BehaviorPolicy::new(Behavior::AvoidConductors);
        let s = signal(-4e-6, 1e-6);

        let a = attract.compute_command(&s);
        let b = avoid.compute_command(&s);
        assert_relative_eq!(a.angular, -b.angular, epsilon = 1e-15);
    }

    #[test]
    fn test_magnitude_behaviors_ignore_axial_sign() {
        let policy = BehaviorPolicy::new(Behavior::AttractConductors);

        let positive = policy.compute_command(&signal(2.0, 0.5));
        let negative = policy.compute_command(&signal(-2.0, 0.5));

        assert_relative_eq!(positive.angular, negative.angular, epsilon = 1e-15);
    }

    #[test]
    fn test_signed_behaviors_follow_axial_sign() {
        let policy = BehaviorPolicy::new(Behavior::AttractAll);

        let positive = policy.compute_command(&signal(2.0, 0.5));
        let negative = policy.compute_command(&signal(-2.0, 0.5));

        assert_relative_eq!(positive.angular, -negative.angular, epsilon = 1e-15);
    }

    #[test]
    fn test_epsilon_guard_for_all_behaviors() {
        for behavior in Behavior::ALL {
            let policy = BehaviorPolicy::new(behavior);

            for axial in [0.0, 1e-11, -1e-11, AXIAL_EPSILON] {
                let command = policy.compute_command(&signal(axial, 123.0));
                assert_eq!(
                    command.angular, 0.0,
                    "behavior {behavior} must not turn at axial={axial}"
                );
                assert_relative_eq!(command.linear, 0.1, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_omega_clamp_is_opt_in() {
        let s = signal(1e-8, 1.0);

        let unclamped = BehaviorPolicy::new(Behavior::AttractAll).compute_command(&s);
        assert!(unclamped.angular.abs() > PI);

        let clamped = BehaviorPolicy::new(Behavior::AttractAll)
            .with_omega_clamp(true)
            .compute_command(&s);
        assert_relative_eq!(clamped.angular, PI, epsilon = 1e-15);
    }

    #[test]
    fn test_gain_and_speed_builders() {
        let policy = BehaviorPolicy::new(Behavior::AttractAll)
            .with_gain(1.0)
            .with_forward_speed(0.2);

        let command = policy.compute_command(&signal(2.0, 1.0));
        assert_relative_eq!(command.linear, 0.2, epsilon = 1e-15);
        assert_relative_eq!(command.angular, 0.5, epsilon = 1e-15);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Behavior::AttractAll.to_string(),
            "B1: attracted to all objects"
        );
        assert!(Behavior::AvoidConductors.to_string().starts_with("B4"));
    }
}
