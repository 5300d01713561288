//! Physical feasibility checks for a candidate bend.
//!
//! Validation never fails as such: every rule is evaluated and the outcome
//! is collected into a [`ValidationResult`] of blocking errors and
//! non-blocking warnings. Sequence-level spacing is not checked here; that
//! invariant belongs to [`crate::sequence::BendSequence`].
//!
//! All user-facing error and warning text is produced in this module and
//! nowhere else; callers display it verbatim.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tubekit_core::{BendSpec, MaterialProfile, TubeSpec};

/// Smallest bend angle magnitude, in degrees, that the engine treats as a
/// real bend rather than numeric noise.
const MIN_BEND_ANGLE_DEG: f64 = 0.1;

/// Radius margin above the minimum, as a factor, below which a bend is
/// formable but at risk of collapse or wrinkling.
const NEAR_LIMIT_FACTOR: f64 = 1.2;

/// Outcome of validating one bend against a tube and material.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True when no blocking error was found. Warnings never clear this.
    pub is_valid: bool,
    /// Blocking problems, in rule-evaluation order.
    pub errors: Vec<String>,
    /// Non-blocking cautions, in rule-evaluation order.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    fn error(&mut self, message: String) {
        self.errors.push(message);
        self.is_valid = false;
    }

    fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }
}

/// Checks a candidate bend for physical sanity.
///
/// The four rules are evaluated independently and in a fixed order (radius,
/// position, angle, wall thickness), so message ordering is deterministic.
/// `is_valid` is the conjunction of the hard checks.
pub fn validate_bend(
    tube: &TubeSpec,
    bend: &BendSpec,
    material: &MaterialProfile,
) -> ValidationResult {
    let mut result = ValidationResult {
        is_valid: true,
        ..ValidationResult::default()
    };

    // Rule 1: minimum bend radius for this material and diameter.
    let min_radius = material.minimum_radius(tube.outer_diameter);
    if bend.bend_radius < min_radius {
        result.error(format!(
            "bend radius {:.1} mm is below the minimum {:.1} mm for this tube and material",
            bend.bend_radius, min_radius
        ));
    } else if bend.bend_radius < min_radius * NEAR_LIMIT_FACTOR {
        result.warning(format!(
            "bend radius {:.1} mm is close to the minimum {:.1} mm: risk of collapse or wrinkling",
            bend.bend_radius, min_radius
        ));
    }

    // Rule 2: bend position must lie on the tube.
    if bend.position_mm < 0.0 || bend.position_mm > tube.total_length {
        result.error(format!(
            "bend position {:.1} mm is outside the tube (0 to {:.1} mm)",
            bend.position_mm, tube.total_length
        ));
    }

    // Rule 3: angle magnitude.
    if bend.angle_degrees.abs() < MIN_BEND_ANGLE_DEG {
        result.error(format!(
            "bend angle {:.2}° is too small to form",
            bend.angle_degrees
        ));
    } else if bend.angle_degrees.abs() > 180.0 {
        result.warning(format!(
            "bend angle {:.1}° exceeds 180°, verify the intended angle",
            bend.angle_degrees
        ));
    }

    // Rule 4: wall thickness must leave a bore.
    if tube.wall_thickness >= tube.outer_diameter / 2.0 {
        result.error(format!(
            "wall thickness {:.1} mm is invalid, it must be less than the tube radius {:.1} mm",
            tube.wall_thickness,
            tube.outer_diameter / 2.0
        ));
    }

    debug!(
        is_valid = result.is_valid,
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "validated bend"
    );
    result
}
