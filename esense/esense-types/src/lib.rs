//! Core types for electric-sense robot simulation.
//!
//! This crate provides the foundational types shared by the electrosensing
//! stack:
//!
//! - [`Sphere`] - Polarizable spherical obstacle (position, radius, contrast)
//! - [`SensorPose`] - Planar robot pose with 3D embedding helpers
//! - [`CurrentSignal`] - Axial/lateral/vertical perceived currents
//! - [`VelocityCommand`] - Forward/angular velocity steering command
//! - [`NavigationConfig`] - Timestep, horizon, arena and control settings
//!
//! # Design Philosophy
//!
//! These types are **pure data**. They have no field physics, no control law,
//! no integration. They're the common language between:
//!
//! - Field models (electrode-impedance, dipole superposition)
//! - Behavior policies (reactive attraction/repulsion laws)
//! - The navigation loop (pose integration, termination)
//! - Logging and replay (serialized trajectories)
//!
//! # Coordinate System
//!
//! The robot lives in the z = 0 plane. Heading 0 points along +X, positive
//! headings turn counter-clockwise. Electrode offsets extend into z for the
//! vertical differential channel.
//!
//! # Example
//!
//! ```
//! use esense_types::{SensorPose, Sphere};
//! use nalgebra::Point3;
//!
//! let pose = SensorPose::origin();
//! let obstacle = Sphere::new(Point3::new(0.5, 0.0, 0.0), 0.1, 1.0);
//!
//! assert!(obstacle.is_conductor());
//! assert_eq!(pose.position3().z, 0.0);
//! ```

#![doc(html_root_url = "https://docs.rs/esense-types/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(
    clippy::missing_const_for_fn,     // Many methods can't be const due to nalgebra
    clippy::suboptimal_flops,          // mul_add style changes aren't always clearer
    clippy::missing_errors_doc,        // Error docs added where non-obvious
)]

mod config;
mod error;
mod pose;
mod signal;
mod sphere;

pub use config::NavigationConfig;
pub use error::SenseError;
pub use pose::SensorPose;
pub use signal::{CurrentSignal, VelocityCommand};
pub use sphere::{CONDUCTOR_CONTRAST, INSULATOR_CONTRAST, Sphere};

// Re-export math types for convenience
pub use nalgebra::{Matrix3, Matrix5, Point2, Point3, Rotation3, Vector3, Vector5};

/// Result type for electrosensing operations.
pub type Result<T> = std::result::Result<T, SenseError>;
