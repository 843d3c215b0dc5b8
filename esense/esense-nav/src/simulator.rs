//! The navigation loop.

use esense_field::ElectricSensor;
use esense_types::{NavigationConfig, Point2, Result, SensorPose, Sphere};

use crate::behavior::BehaviorPolicy;
use crate::trajectory::{Outcome, Trajectory, TrajectorySample};

/// Closed-loop simulator: field model + behavior policy + pose integration.
///
/// Each step performs, in order:
///
/// 1. Collision check: planar distance to any sphere center below
///    radius + margin terminates the run immediately.
/// 2. Bounds check: |x| or |y| beyond the arena bound terminates the run.
/// 3. Sense at the current pose, compute the steering command, then
///    integrate with the heading updated **before** the translation:
///    θ += ω·dt, then x += v·cos(θ)·dt, y += v·sin(θ)·dt. This ordering
///    shapes the trajectory and must not be swapped.
/// 4. Reaching the horizon counts as successful completion.
///
/// All checks use the planar projection; z is ignored throughout.
#[derive(Debug, Clone)]
pub struct Simulator {
    sensor: ElectricSensor,
    policy: BehaviorPolicy,
    config: NavigationConfig,
}

impl Simulator {
    /// Create a simulator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` fails validation.
    pub fn new(
        sensor: ElectricSensor,
        policy: BehaviorPolicy,
        config: NavigationConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            sensor,
            policy,
            config,
        })
    }

    /// The navigation configuration.
    #[must_use]
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// The behavior policy.
    #[must_use]
    pub fn policy(&self) -> &BehaviorPolicy {
        &self.policy
    }

    /// Run one simulation from the origin pose against the given scene.
    ///
    /// Termination is final and immediate: the step that detects a collision
    /// or bounds exit records nothing further.
    #[must_use]
    pub fn run(&self, spheres: &[Sphere]) -> Trajectory {
        let dt = self.config.timestep;
        let mut x = 0.0_f64;
        let mut y = 0.0_f64;
        let mut heading = 0.0_f64;
        let mut t = 0.0_f64;

        let mut samples = vec![TrajectorySample {
            x,
            y,
            heading,
            time: t,
        }];

        let outcome = loop {
            if t >= self.config.horizon {
                break Outcome::TimeExpired;
            }

            if let Some(index) = self.first_collision(x, y, spheres) {
                tracing::debug!(time = t, sphere = index, "collision detected");
                break Outcome::Collided;
            }

            if x.abs() > self.config.arena_bound || y.abs() > self.config.arena_bound {
                tracing::debug!(time = t, x, y, "robot left the arena");
                break Outcome::OutOfBounds;
            }

            let pose = SensorPose::new(x, y, heading);
            let signal = self.sensor.sense(spheres, &pose);
            let command = self.policy.compute_command(&signal);

            // Heading before translation
            heading += command.angular * dt;
            x += command.linear * heading.cos() * dt;
            y += command.linear * heading.sin() * dt;

            samples.push(TrajectorySample {
                x,
                y,
                heading,
                time: t,
            });
            t += dt;
        };

        tracing::info!(
            behavior = %self.policy.behavior(),
            %outcome,
            steps = samples.len(),
            "run finished"
        );

        Trajectory::new(samples, outcome)
    }

    /// Index of the first sphere whose collision radius contains (x, y).
    fn first_collision(&self, x: f64, y: f64, spheres: &[Sphere]) -> Option<usize> {
        let position = Point2::new(x, y);
        spheres.iter().position(|sphere| {
            sphere.planar_distance_to(&position) < sphere.radius() + self.config.collision_margin
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::behavior::{Behavior, BehaviorPolicy};
    use approx::assert_relative_eq;
    use esense_types::Point3;

    fn simulator(behavior: Behavior, config: NavigationConfig) -> Simulator {
        Simulator::new(
            ElectricSensor::default(),
            BehaviorPolicy::new(behavior)
                .with_gain(config.gain)
                .with_forward_speed(config.forward_speed)
                .with_omega_clamp(config.clamp_omega),
            config,
        )
        .expect("valid config")
    }

    #[test]
    fn test_empty_scene_runs_straight_until_out_of_bounds() {
        // No spheres: zero signal, epsilon guard keeps the heading at zero,
        // so the robot drives +X until it crosses the bound.
        let config = NavigationConfig::default().horizon(1e6);
        let sim = simulator(Behavior::AttractAll, config);

        let trajectory = sim.run(&[]);
        assert_eq!(trajectory.outcome(), Outcome::OutOfBounds);

        let last = trajectory.last().unwrap();
        assert!(last.x > 2.5);
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-12);
        assert_relative_eq!(last.heading, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_time_expiry_is_success() {
        // 0.95 sits strictly between accumulated timestep sums, keeping the
        // step count independent of floating-point rounding
        let config = NavigationConfig::default().horizon(0.95);
        let sim = simulator(Behavior::AttractAll, config);

        let trajectory = sim.run(&[]);
        assert_eq!(trajectory.outcome(), Outcome::TimeExpired);
        assert!(trajectory.outcome().is_success());

        // Initial sample plus 10 steps of dt = 0.1
        assert_eq!(trajectory.len(), 11);
        assert_relative_eq!(trajectory.duration(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn test_immediate_collision() {
        // Sphere overlapping the start pose: first step must terminate with
        // no integration at all.
        let sphere = Sphere::conductor(Point3::new(0.1, 0.0, 0.0), 0.2);
        let sim = simulator(Behavior::AttractAll, NavigationConfig::default());

        let trajectory = sim.run(&[sphere]);
        assert_eq!(trajectory.outcome(), Outcome::Collided);
        assert!(trajectory.outcome().collided());
        assert_eq!(trajectory.len(), 1, "only the initial sample is recorded");
    }

    #[test]
    fn test_collision_margin_boundary() {
        let margin = NavigationConfig::default().collision_margin;
        let radius = 0.1;

        // Just inside radius + margin: collides on the first check
        let inside = Sphere::conductor(Point3::new(radius + margin - 1e-6, 0.0, 0.0), radius);
        let sim = simulator(Behavior::AttractAll, NavigationConfig::default().horizon(0.5));
        assert_eq!(sim.run(&[inside]).outcome(), Outcome::Collided);

        // Just outside: the first check passes
        let outside = Sphere::conductor(Point3::new(radius + margin + 1e-6, 0.0, 0.0), radius);
        let trajectory = sim.run(&[outside]);
        assert!(trajectory.len() > 1, "the robot must take at least one step");
    }

    #[test]
    fn test_straight_drive_hits_sphere_ahead() {
        // A sphere dead ahead produces no lateral signal, so the robot drives
        // straight into it regardless of behavior.
        let sphere = Sphere::conductor(Point3::new(1.0, 0.0, 0.0), 0.15);
        let sim = simulator(Behavior::AttractAll, NavigationConfig::default());

        let trajectory = sim.run(&[sphere]);
        assert_eq!(trajectory.outcome(), Outcome::Collided);

        let last = trajectory.last().unwrap();
        assert!(last.x > 0.5, "robot should approach before colliding");
        assert_relative_eq!(last.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_heading_updates_before_translation() {
        // One manual step against the closed-form update
        let sphere = Sphere::insulator(Point3::new(0.4, 0.3, 0.0), 0.1);
        let config = NavigationConfig::default();
        let sim = simulator(Behavior::AttractAll, config.clone());

        let sensor = ElectricSensor::default();
        let signal = sensor.sense(std::slice::from_ref(&sphere), &SensorPose::origin());
        let command = BehaviorPolicy::new(Behavior::AttractAll).compute_command(&signal);

        let heading = command.angular * config.timestep;
        let expected_x = config.forward_speed * heading.cos() * config.timestep;
        let expected_y = config.forward_speed * heading.sin() * config.timestep;

        let trajectory = sim.run(std::slice::from_ref(&sphere));
        let first_step = trajectory.samples()[1];

        assert_relative_eq!(first_step.heading, heading, epsilon = 1e-12);
        assert_relative_eq!(first_step.x, expected_x, epsilon = 1e-12);
        assert_relative_eq!(first_step.y, expected_y, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Simulator::new(
            ElectricSensor::default(),
            BehaviorPolicy::new(Behavior::AttractAll),
            NavigationConfig::with_timestep(0.0),
        );
        assert!(result.is_err());
    }
}
