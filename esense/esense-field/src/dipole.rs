//! Standalone dipole-superposition field solver.
//!
//! A second, simpler physical model of the same sensor: the probe is treated
//! as a point dipole current source, each object polarizes under the initial
//! field and re-radiates a dipole perturbation field. The solver samples the
//! fields over a planar grid (for an external renderer) and sweeps the probe
//! orientation for a polar response diagram.
//!
//! This model is **not** numerically reconciled with the electrode-impedance
//! model in [`sensor`](crate::ElectricSensor); they are distinct physical
//! approximations and share no interface. In particular this solver masks a
//! radius around its singularities while the electrode model does not.

use std::f64::consts::{PI, TAU};

use nalgebra::{Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Physical parameters of the dipole solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DipoleParams {
    /// Medium conductivity γ (S/m).
    pub conductivity: f64,
    /// No-load conductance of the probe (S).
    pub base_conductance: f64,
    /// Applied voltage (V).
    pub drive_voltage: f64,
    /// Radius of the perturbing spheres (m).
    pub object_radius: f64,
    /// Contrast of conductive objects (χ > 0).
    pub conductor_contrast: f64,
    /// Contrast of insulating objects (χ < 0).
    pub insulator_contrast: f64,
    /// Fields evaluate to zero within this radius of a singularity (m).
    pub masking_radius: f64,
}

impl Default for DipoleParams {
    fn default() -> Self {
        Self {
            conductivity: 1.0,
            base_conductance: 1.0,
            drive_voltage: 1.0,
            object_radius: 0.3,
            conductor_contrast: 20.0,
            insulator_contrast: -20.0,
            masking_radius: 0.3,
        }
    }
}

impl DipoleParams {
    /// Source current I = C0·U.
    #[must_use]
    pub fn source_current(&self) -> f64 {
        self.base_conductance * self.drive_voltage
    }
}

/// A perturbing object seen by the dipole solver.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DipoleObject {
    /// Planar position of the object (m).
    pub position: Point2<f64>,
    /// Whether the object is conductive (true) or insulating (false).
    pub conductive: bool,
}

impl DipoleObject {
    /// Create a conductive object.
    #[must_use]
    pub fn conductor(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            conductive: true,
        }
    }

    /// Create an insulating object.
    #[must_use]
    pub fn insulator(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            conductive: false,
        }
    }
}

/// One sample of the orientation-swept polar response.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolarSample {
    /// Probe orientation (radians).
    pub angle: f64,
    /// Current variation ΔI at this orientation.
    pub delta_current: f64,
}

/// Planar field samples over a regular grid, row-major in y then x.
///
/// Produced for an external renderer; the solver itself never draws.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FieldGrid {
    /// Grid x coordinates (length = resolution).
    pub xs: Vec<f64>,
    /// Grid y coordinates (length = resolution).
    pub ys: Vec<f64>,
    /// Initial probe field E0 at each grid point.
    pub initial: Vec<Vector2<f64>>,
    /// Summed perturbation field E1 at each grid point.
    pub perturbation: Vec<Vector2<f64>>,
}

impl FieldGrid {
    /// Total field E0 + E1 at grid index (row, col).
    ///
    /// Returns `None` if the index is out of range.
    #[must_use]
    pub fn total(&self, row: usize, col: usize) -> Option<Vector2<f64>> {
        let idx = row.checked_mul(self.xs.len())?.checked_add(col)?;
        if col >= self.xs.len() {
            return None;
        }
        Some(self.initial.get(idx)? + self.perturbation.get(idx)?)
    }
}

/// Dipole-superposition model of the probe and its perturbers.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DipoleModel {
    params: DipoleParams,
    objects: Vec<DipoleObject>,
    probe: Point2<f64>,
}

impl DipoleModel {
    /// Create a model with the probe at the origin.
    #[must_use]
    pub fn new(params: DipoleParams, objects: Vec<DipoleObject>) -> Self {
        Self {
            params,
            objects,
            probe: Point2::origin(),
        }
    }

    /// The solver parameters.
    #[must_use]
    pub fn params(&self) -> &DipoleParams {
        &self.params
    }

    /// The perturbing objects.
    #[must_use]
    pub fn objects(&self) -> &[DipoleObject] {
        &self.objects
    }

    fn contrast(&self, object: &DipoleObject) -> f64 {
        if object.conductive {
            self.params.conductor_contrast
        } else {
            self.params.insulator_contrast
        }
    }

    /// Initial probe field E0(r) = I·r/(4πγ‖r‖³).
    ///
    /// Evaluates to zero within the masking radius of the probe.
    #[must_use]
    pub fn initial_field(&self, at: &Point2<f64>) -> Vector2<f64> {
        let r = at - self.probe;
        let norm = r.norm();
        if norm <= self.params.masking_radius {
            return Vector2::zeros();
        }
        r * (self.params.source_current() / (4.0 * PI * self.params.conductivity * norm.powi(3)))
    }

    /// Dipole moment induced on an object: P = χ·a³·E0(object position).
    ///
    /// The moment is evaluated from the unmasked field formula; only grid
    /// evaluation is masked.
    #[must_use]
    pub fn induced_moment(&self, object: &DipoleObject) -> Vector2<f64> {
        let r = object.position - self.probe;
        let norm = r.norm();
        let e0 = r * (self.params.source_current()
            / (4.0 * PI * self.params.conductivity * norm.powi(3)));
        e0 * (self.contrast(object) * self.params.object_radius.powi(3))
    }

    /// Perturbation field of one object:
    /// E1(r) = (3(P·r)r − ‖r‖²P)/(4πγ‖r‖⁵).
    ///
    /// Evaluates to zero within the masking radius of the object.
    #[must_use]
    pub fn perturbation_field(&self, at: &Point2<f64>, object: &DipoleObject) -> Vector2<f64> {
        let r = at - object.position;
        let norm = r.norm();
        if norm <= self.params.masking_radius {
            return Vector2::zeros();
        }

        let moment = self.induced_moment(object);
        let numerator = r * (3.0 * moment.dot(&r)) - moment * norm.powi(2);
        numerator / (4.0 * PI * self.params.conductivity * norm.powi(5))
    }

    /// Total field E0 + Σ E1 at a point.
    #[must_use]
    pub fn total_field(&self, at: &Point2<f64>) -> Vector2<f64> {
        let mut field = self.initial_field(at);
        for object in &self.objects {
            field += self.perturbation_field(at, object);
        }
        field
    }

    /// Sample E0 and Σ E1 over a square grid of `resolution` × `resolution`
    /// points covering [−half_extent, half_extent]².
    #[must_use]
    pub fn sample_grid(&self, half_extent: f64, resolution: usize) -> FieldGrid {
        let coords = |i: usize| {
            if resolution < 2 {
                return 0.0;
            }
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / (resolution - 1) as f64;
            -half_extent + 2.0 * half_extent * t
        };

        let xs: Vec<f64> = (0..resolution).map(coords).collect();
        let ys: Vec<f64> = (0..resolution).map(coords).collect();

        let mut initial = Vec::with_capacity(resolution * resolution);
        let mut perturbation = Vec::with_capacity(resolution * resolution);
        for &y in &ys {
            for &x in &xs {
                let at = Point2::new(x, y);
                initial.push(self.initial_field(&at));
                let mut e1 = Vector2::zeros();
                for object in &self.objects {
                    e1 += self.perturbation_field(&at, object);
                }
                perturbation.push(e1);
            }
        }

        FieldGrid {
            xs,
            ys,
            initial,
            perturbation,
        }
    }

    /// Current variation for a probe orientation:
    /// ΔI(angle) = −C0·Σ (P·d̂)/(4πγ‖r‖²) over all objects,
    /// with d̂ the unit vector along the probe axis.
    #[must_use]
    pub fn response(&self, angle: f64) -> f64 {
        let direction = Vector2::new(angle.cos(), angle.sin());
        let mut potential = 0.0;
        for object in &self.objects {
            let r = object.position - self.probe;
            let moment = self.induced_moment(object);
            potential += moment.dot(&direction)
                / (4.0 * PI * self.params.conductivity * r.norm_squared());
        }
        -self.params.base_conductance * potential
    }

    /// Full-circle orientation sweep with `samples` evenly spaced angles.
    #[must_use]
    pub fn response_sweep(&self, samples: usize) -> Vec<PolarSample> {
        #[allow(clippy::cast_precision_loss)]
        (0..samples)
            .map(|i| {
                let angle = TAU * i as f64 / samples.max(1) as f64;
                PolarSample {
                    angle,
                    delta_current: self.response(angle),
                }
            })
            .collect()
    }
}
