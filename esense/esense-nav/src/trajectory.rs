//! Recorded trajectories and run outcomes.

use esense_types::SensorPose;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One pose sample along a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrajectorySample {
    /// X position (m).
    pub x: f64,
    /// Y position (m).
    pub y: f64,
    /// Heading (radians).
    pub heading: f64,
    /// Simulation time of this sample (s).
    pub time: f64,
}

impl TrajectorySample {
    /// The pose at this sample.
    #[must_use]
    pub fn pose(&self) -> SensorPose {
        SensorPose::new(self.x, self.y, self.heading)
    }
}

/// Terminal condition of a navigation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The horizon was reached without incident. Successful completion.
    TimeExpired,
    /// The robot entered a sphere's collision radius.
    Collided,
    /// The robot left the arena bounds.
    OutOfBounds,
}

impl Outcome {
    /// Whether the run ended in a collision.
    #[must_use]
    pub const fn collided(self) -> bool {
        matches!(self, Self::Collided)
    }

    /// Whether the run left the arena.
    #[must_use]
    pub const fn out_of_bounds(self) -> bool {
        matches!(self, Self::OutOfBounds)
    }

    /// Whether the run completed the full horizon.
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::TimeExpired)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TimeExpired => write!(f, "time expired"),
            Self::Collided => write!(f, "collided"),
            Self::OutOfBounds => write!(f, "out of bounds"),
        }
    }
}

/// The recorded result of one navigation run.
///
/// Samples are append-only and ordered by time, starting with the initial
/// pose at t = 0. This is the sole artifact handed to external rendering or
/// reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
    outcome: Outcome,
}

impl Trajectory {
    /// Assemble a trajectory from its samples and terminal outcome.
    #[must_use]
    pub fn new(samples: Vec<TrajectorySample>, outcome: Outcome) -> Self {
        Self { samples, outcome }
    }

    /// The recorded samples, in time order.
    #[must_use]
    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    /// The terminal outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the trajectory holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The last recorded sample.
    #[must_use]
    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// The final pose, if any sample was recorded.
    #[must_use]
    pub fn final_pose(&self) -> Option<SensorPose> {
        self.last().map(TrajectorySample::pose)
    }

    /// Time of the last sample (s).
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.last().map_or(0.0, |s| s.time)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_flags() {
        assert!(Outcome::Collided.collided());
        assert!(!Outcome::Collided.out_of_bounds());
        assert!(!Outcome::Collided.is_success());

        assert!(Outcome::OutOfBounds.out_of_bounds());
        assert!(Outcome::TimeExpired.is_success());
    }

    #[test]
    fn test_trajectory_accessors() {
        let samples = vec![
            TrajectorySample {
                x: 0.0,
                y: 0.0,
                heading: 0.0,
                time: 0.0,
            },
            TrajectorySample {
                x: 0.01,
                y: 0.0,
                heading: 0.1,
                time: 0.1,
            },
        ];
        let trajectory = Trajectory::new(samples, Outcome::TimeExpired);

        assert_eq!(trajectory.len(), 2);
        assert!(!trajectory.is_empty());
        assert_eq!(trajectory.duration(), 0.1);

        let pose = trajectory.final_pose().unwrap();
        assert_eq!(pose.position.x, 0.01);
        assert_eq!(pose.heading, 0.1);
    }
}
