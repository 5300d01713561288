//! # TubeKit Bending
//!
//! The bend geometry engine. Turns an ordered list of bend specifications
//! plus a straight tube length into the 2D centerline of the bent tube and
//! the scalar quantities a workshop needs to actually make it.
//!
//! ## Core Components
//!
//! - **Sequence**: ordered, non-overlapping collection of bends with a
//!   minimum 10 mm clearance between bend positions
//! - **Validator**: physical-feasibility checks producing blocking errors
//!   and non-blocking warnings
//! - **Path**: incremental frame walk emitting a tessellated centerline
//!   polyline (straight runs plus 40-step arcs)
//! - **Metrics**: developed length, springback compensation, bend
//!   deduction, minimum safe radius
//!
//! ## Usage
//!
//! ```
//! use tubekit_core::{BendSpec, MaterialProfile, TubeSpec};
//! use tubekit_bending::{compute_metrics, compute_path, BendSequence};
//!
//! let tube = TubeSpec::new(22.0, 1.0, 1500.0);
//! let material = MaterialProfile::new(0.985, 15.0);
//!
//! let mut bends = BendSequence::new();
//! bends.insert(BendSpec::new(90.0, 330.0, 500.0))?;
//! bends.insert(BendSpec::new(-45.0, 330.0, 900.0))?;
//!
//! let centerline = compute_path(&tube, &bends, &material);
//! let metrics = compute_metrics(&tube, &bends, &material);
//! assert!(metrics.developed_length > tube.total_length);
//! assert_eq!(centerline.len(), 2 + 41 * bends.len());
//! # Ok::<(), tubekit_bending::SequenceError>(())
//! ```
//!
//! The engine is synchronous and allocation-light: every operation is a
//! pure function of its inputs (or a local mutation of the sequence) and
//! completes in O(bends). Inputs are assumed to have passed validation;
//! see [`validator`] for the gate callers are expected to apply.

pub mod metrics;
pub mod path;
pub mod sequence;
pub mod validator;

pub use metrics::{
    bend_deduction, compute_metrics, developed_length, minimum_radius,
    springback_compensated_angle, BendMetrics, PerBendMetrics,
};
pub use path::{compute_path, Point, ARC_SEGMENTS};
pub use sequence::{BendSequence, SequenceError, MIN_BEND_SPACING_MM};
pub use validator::{validate_bend, ValidationResult};
