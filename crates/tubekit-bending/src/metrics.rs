//! Manufacturing metrics.
//!
//! Closed-form scalar quantities derived from the same tube/sequence/
//! material triple the path generator consumes, but independent of the
//! tessellated polyline:
//!
//! - developed length (stock length to cut)
//! - springback-compensated angle (angle to actually impart)
//! - bend deduction "A" value (mark-to-mark layout correction)
//! - minimum safe bend radius
//!
//! Like the path generator, these assume validated inputs and do not
//! re-check them.

use serde::{Deserialize, Serialize};

use tubekit_core::{MaterialProfile, TubeSpec};

use crate::sequence::BendSequence;

/// Per-bend manufacturing quantities, in sequence order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerBendMetrics {
    /// Angle to impart on the bender so that springback lands on the
    /// specified angle, in signed degrees.
    pub applied_angle: f64,
    /// Bend deduction "A" value in mm, subtracted from mark-to-mark
    /// measurements to place the bend apex correctly.
    pub deduction_value: f64,
}

/// Metrics for a whole bend sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BendMetrics {
    /// Straight stock length in mm required to produce the bent tube.
    pub developed_length: f64,
    /// One entry per bend, ascending by position.
    pub per_bend: Vec<PerBendMetrics>,
}

/// Straight stock length consumed by the bent tube.
///
/// Each bend replaces a chord of the layout by its arc, so the correction
/// per bend is `θ·r − 2·r·sin(θ/2)` with θ the angle magnitude in radians
/// and r the nominal bend radius. Material consumption does not depend on
/// the turn direction.
pub fn developed_length(tube: &TubeSpec, sequence: &BendSequence) -> f64 {
    let mut total = tube.total_length;
    for bend in sequence.bends() {
        let angle = bend.angle_radians().abs();
        let arc_length = angle * bend.bend_radius;
        total += arc_length - 2.0 * bend.bend_radius * (angle / 2.0).sin();
    }
    total
}

/// Angle to actually impart so that elastic recovery yields the desired
/// final angle: `desired / springback_coefficient`.
pub fn springback_compensated_angle(desired_degrees: f64, material: &MaterialProfile) -> f64 {
    desired_degrees / material.springback_coefficient
}

/// Bend deduction "A" value: `r · tan(|θ|/2)`.
///
/// The general tangent formula holds for every angle; at 90° it reduces to
/// the radius itself since `tan(45°) = 1`.
pub fn bend_deduction(radius: f64, angle_degrees: f64) -> f64 {
    radius * (angle_degrees.abs().to_radians() / 2.0).tan()
}

/// Minimum safe bend radius for the tube/material pair.
pub fn minimum_radius(outer_diameter: f64, material: &MaterialProfile) -> f64 {
    material.minimum_radius(outer_diameter)
}

/// Computes the full metrics report for a bend sequence.
pub fn compute_metrics(
    tube: &TubeSpec,
    sequence: &BendSequence,
    material: &MaterialProfile,
) -> BendMetrics {
    let per_bend = sequence
        .bends()
        .iter()
        .map(|bend| PerBendMetrics {
            applied_angle: springback_compensated_angle(bend.angle_degrees, material),
            deduction_value: bend_deduction(bend.bend_radius, bend.angle_degrees),
        })
        .collect();

    BendMetrics {
        developed_length: developed_length(tube, sequence),
        per_bend,
    }
}
