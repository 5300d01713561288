//! Tube, bend, and material specification records.
//!
//! These are the plain-data inputs of the bending engine. They carry no
//! behavior beyond small derived quantities and are serializable so that
//! projects and exports can persist them verbatim.

use serde::{Deserialize, Serialize};

/// Geometry of the straight tube stock before any bend is applied.
///
/// Immutable for the duration of a simulation run. All dimensions are in
/// millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeSpec {
    /// Outer diameter of the tube in mm.
    pub outer_diameter: f64,
    /// Wall thickness in mm. Must be less than half the outer diameter for
    /// the tube to have a bore at all; the validator enforces this.
    pub wall_thickness: f64,
    /// Total straight length of the stock in mm.
    pub total_length: f64,
}

impl TubeSpec {
    /// Creates a new tube specification.
    pub fn new(outer_diameter: f64, wall_thickness: f64, total_length: f64) -> Self {
        Self {
            outer_diameter,
            wall_thickness,
            total_length,
        }
    }

    /// Inner (bore) diameter in mm.
    pub fn inner_diameter(&self) -> f64 {
        self.outer_diameter - 2.0 * self.wall_thickness
    }
}

/// A single bend applied to the tube.
///
/// The angle sign encodes the turn direction in the tube's local 2D plane:
/// positive bends turn counter-clockwise, negative bends clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BendSpec {
    /// Signed bend angle in degrees. Magnitude is typically at most 180 but
    /// larger values are accepted (the validator warns, never rejects).
    pub angle_degrees: f64,
    /// Inside bend radius in mm, before springback compensation.
    pub bend_radius: f64,
    /// Distance along the tube from the stock start to the bend's nominal
    /// location, in mm.
    pub position_mm: f64,
}

impl BendSpec {
    /// Creates a new bend specification.
    pub fn new(angle_degrees: f64, bend_radius: f64, position_mm: f64) -> Self {
        Self {
            angle_degrees,
            bend_radius,
            position_mm,
        }
    }

    /// Signed bend angle in radians.
    pub fn angle_radians(&self) -> f64 {
        self.angle_degrees.to_radians()
    }

    /// True when the bend turns clockwise (negative angle).
    pub fn is_clockwise(&self) -> bool {
        self.angle_degrees < 0.0
    }
}

/// Bending behavior of a tube material.
///
/// Supplied by the material catalog (or directly by the caller) and consumed
/// by the validator, path generator, and metrics calculator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Springback compensation coefficient in (0, 1]. Dividing the nominal
    /// radius or angle by this coefficient over-bends the tube so that
    /// elastic recovery lands on the desired final geometry.
    pub springback_coefficient: f64,
    /// Multiplied by the outer diameter to obtain the minimum safe bend
    /// radius for this material.
    pub min_radius_factor: f64,
}

impl MaterialProfile {
    /// Creates a new material profile.
    pub fn new(springback_coefficient: f64, min_radius_factor: f64) -> Self {
        Self {
            springback_coefficient,
            min_radius_factor,
        }
    }

    /// Radius actually swept by the forming tool once springback is
    /// compensated: `bend_radius / springback_coefficient`.
    pub fn applied_radius(&self, bend_radius: f64) -> f64 {
        bend_radius / self.springback_coefficient
    }

    /// Minimum safe bend radius for a tube of the given outer diameter.
    pub fn minimum_radius(&self, outer_diameter: f64) -> f64 {
        self.min_radius_factor * outer_diameter
    }
}
