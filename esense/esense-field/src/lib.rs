//! Field models for electric-sense simulation.
//!
//! This crate provides two independently-derived physical models:
//!
//! - [`ElectricSensor`] - the electrode-impedance model: a 5-electrode sensor
//!   whose mutual conductance is perturbed by polarizable spheres. This is
//!   the model the navigation loop consumes.
//! - [`DipoleModel`] - a standalone scalar-potential dipole-superposition
//!   model over a planar grid, with an orientation-swept polar response.
//!
//! The two models share vocabulary (contrast, polarization, dipole fields)
//! but different math, and their outputs are **not** interchangeable. They
//! are deliberately kept as separate components with no common trait.
//!
//! # Example
//!
//! ```
//! use esense_field::{ElectricSensor, SensorGeometry};
//! use esense_types::{SensorPose, Sphere};
//! use nalgebra::Point3;
//!
//! let sensor = ElectricSensor::default();
//! let sphere = Sphere::conductor(Point3::new(0.5, 0.0, 0.0), 0.1);
//!
//! let signal = sensor.sense(&[sphere], &SensorPose::origin());
//! assert!(signal.is_finite());
//! ```

#![doc(html_root_url = "https://docs.rs/esense-field/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]
#![allow(clippy::missing_const_for_fn, clippy::suboptimal_flops)]

mod dipole;
mod geometry;
mod sensor;

pub use dipole::{DipoleModel, DipoleObject, DipoleParams, FieldGrid, PolarSample};
pub use geometry::{ELECTRODE_COUNT, SensorGeometry};
pub use sensor::ElectricSensor;
