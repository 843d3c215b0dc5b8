//! Configuration for the navigation loop.

use crate::{Result, SenseError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a navigation run.
///
/// Defaults match the reference tank setup: a 0.1 m/s robot stepped at
/// 10 Hz for 60 s inside a 5 m square arena.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavigationConfig {
    /// Constant forward speed (m/s).
    pub forward_speed: f64,
    /// Control gain k used by the behavior laws.
    pub gain: f64,
    /// Fixed integration timestep (seconds).
    pub timestep: f64,
    /// Simulation horizon (seconds). Reaching it counts as success.
    pub horizon: f64,
    /// Half-width of the square arena (meters). |x| or |y| beyond this
    /// terminates the run.
    pub arena_bound: f64,
    /// Extra clearance added to sphere radii for collision detection (meters).
    pub collision_margin: f64,
    /// Clamp angular velocity to ±π rad/s.
    ///
    /// The shipped behaviors were tuned without the clamp, so it is off by
    /// default and must be enabled explicitly.
    pub clamp_omega: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            forward_speed: 0.1,
            gain: 0.5,
            timestep: 0.1,
            horizon: 60.0,
            arena_bound: 2.5,
            collision_margin: 0.05,
            clamp_omega: false,
        }
    }
}

impl NavigationConfig {
    /// Create a config with the given timestep.
    #[must_use]
    pub fn with_timestep(timestep: f64) -> Self {
        Self {
            timestep,
            ..Default::default()
        }
    }

    /// Set the simulation horizon.
    #[must_use]
    pub fn horizon(mut self, horizon: f64) -> Self {
        self.horizon = horizon;
        self
    }

    /// Set the control gain.
    #[must_use]
    pub fn gain(mut self, gain: f64) -> Self {
        self.gain = gain;
        self
    }

    /// Set the constant forward speed.
    #[must_use]
    pub fn forward_speed(mut self, speed: f64) -> Self {
        self.forward_speed = speed;
        self
    }

    /// Set the arena half-width.
    #[must_use]
    pub fn arena_bound(mut self, bound: f64) -> Self {
        self.arena_bound = bound;
        self
    }

    /// Set the collision margin.
    #[must_use]
    pub fn collision_margin(mut self, margin: f64) -> Self {
        self.collision_margin = margin;
        self
    }

    /// Enable the ±π angular velocity clamp.
    #[must_use]
    pub fn with_omega_clamp(mut self) -> Self {
        self.clamp_omega = true;
        self
    }

    /// Number of whole steps in the horizon.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_steps(&self) -> u64 {
        (self.horizon / self.timestep).ceil().max(0.0) as u64
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(SenseError::InvalidTimestep(self.timestep));
        }

        if !self.horizon.is_finite() || self.horizon <= 0.0 {
            return Err(SenseError::invalid_config(
                "horizon must be positive and finite",
            ));
        }

        if !self.forward_speed.is_finite() || self.forward_speed < 0.0 {
            return Err(SenseError::invalid_config(
                "forward_speed cannot be negative",
            ));
        }

        if !self.gain.is_finite() {
            return Err(SenseError::invalid_config("gain must be finite"));
        }

        if !self.arena_bound.is_finite() || self.arena_bound <= 0.0 {
            return Err(SenseError::invalid_config("arena_bound must be positive"));
        }

        if !self.collision_margin.is_finite() || self.collision_margin < 0.0 {
            return Err(SenseError::invalid_config(
                "collision_margin cannot be negative",
            ));
        }

        Ok(())
    }
}
