//! Reactive navigation for the electric-sense robot.
//!
//! This crate closes the loop around [`esense_field`]: it maps perceived
//! currents to steering commands and integrates the robot pose until a
//! terminal condition is reached.
//!
//! - [`Behavior`] / [`BehaviorPolicy`] - the four bio-inspired reactive laws
//! - [`SceneConfig`] - seeded random obstacle scenes
//! - [`Simulator`] - the per-step navigation loop
//! - [`Trajectory`] / [`Outcome`] - the recorded result of one run
//! - [`BatchRunner`] - independent (seed × behavior) sweeps
//!
//! # Example
//!
//! ```
//! use esense_nav::{Behavior, BehaviorPolicy, SceneConfig, Simulator};
//! use esense_field::ElectricSensor;
//! use esense_types::NavigationConfig;
//!
//! let spheres = SceneConfig::default().generate(42);
//! let policy = BehaviorPolicy::new(Behavior::AttractAll);
//! let simulator = Simulator::new(
//!     ElectricSensor::default(),
//!     policy,
//!     NavigationConfig::default(),
//! )
//! .unwrap();
//!
//! let trajectory = simulator.run(&spheres);
//! assert!(!trajectory.is_empty());
//! ```

#![doc(html_root_url = "https://docs.rs/esense-nav/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::suboptimal_flops)]

mod batch;
mod behavior;
mod scene;
mod simulator;
mod trajectory;

pub use batch::{BatchRunner, SeedRun};
pub use behavior::{AXIAL_EPSILON, Behavior, BehaviorPolicy};
pub use scene::SceneConfig;
pub use simulator::Simulator;
pub use trajectory::{Outcome, Trajectory, TrajectorySample};
