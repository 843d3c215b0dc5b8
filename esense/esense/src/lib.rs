//! Unified API for the electric-sense navigation simulator.
//!
//! This crate re-exports the complete electrosensing stack:
//!
//! - [`esense_types`] - Core data types (spheres, poses, signals, configs)
//! - [`esense_field`] - Field models (electrode-impedance sensor, dipole solver)
//! - [`esense_nav`] - Reactive behaviors, scenes and the navigation loop
//!
//! The simulator models a 5-electrode underwater probe that perceives
//! polarizable spheres through perturbations of its self-generated electric
//! field, and steers with one of four bio-inspired reactive laws.
//!
//! # Quick Start
//!
//! ```
//! use esense::prelude::*;
//!
//! // A seeded random scene of conductive and insulating spheres
//! let spheres = SceneConfig::default().generate(42);
//!
//! // Behavior 1: attracted to all objects
//! let simulator = Simulator::new(
//!     ElectricSensor::default(),
//!     BehaviorPolicy::new(Behavior::AttractAll),
//!     NavigationConfig::default(),
//! )
//! .unwrap();
//!
//! let trajectory = simulator.run(&spheres);
//! println!("run ended: {}", trajectory.outcome());
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │              esense (this crate)            │
//! │            Unified API / re-exports         │
//! └─────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!             ┌──────────────────┐
//!             │    esense-nav    │
//!             │ Behaviors, loop  │
//!             └────────┬─────────┘
//!                      │
//!                      ▼
//!             ┌──────────────────┐
//!             │   esense-field   │
//!             │  Sensor, dipole  │
//!             └────────┬─────────┘
//!                      │
//!                      ▼
//!             ┌──────────────────┐
//!             │   esense-types   │
//!             │   Data structs   │
//!             └──────────────────┘
//! ```

#![doc(html_root_url = "https://docs.rs/esense/0.1.0")]
#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

// Re-export sub-crates
pub use esense_field;
pub use esense_nav;
pub use esense_types;

// Re-export nalgebra for convenience
pub use nalgebra;

/// Prelude module for convenient imports.
///
/// Import everything you need with a single line:
///
/// ```
/// use esense::prelude::*;
/// ```
pub mod prelude {
    // ========================================================================
    // Core types from esense-types
    // ========================================================================

    // Scene objects and poses
    pub use esense_types::{
        CONDUCTOR_CONTRAST, INSULATOR_CONTRAST, CurrentSignal, SensorPose, Sphere, VelocityCommand,
    };

    // Configuration
    pub use esense_types::NavigationConfig;

    // Errors
    pub use esense_types::{Result, SenseError};

    // ========================================================================
    // Field models from esense-field
    // ========================================================================

    pub use esense_field::{ELECTRODE_COUNT, ElectricSensor, SensorGeometry};

    // Standalone dipole solver
    pub use esense_field::{DipoleModel, DipoleObject, DipoleParams, FieldGrid, PolarSample};

    // ========================================================================
    // Navigation from esense-nav
    // ========================================================================

    pub use esense_nav::{
        AXIAL_EPSILON, BatchRunner, Behavior, BehaviorPolicy, Outcome, SceneConfig, SeedRun,
        Simulator, Trajectory, TrajectorySample,
    };

    // ========================================================================
    // Math types from nalgebra
    // ========================================================================

    pub use nalgebra::{Point2, Point3, Vector2, Vector3};
}
