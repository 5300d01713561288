//! Centerline path generation.
//!
//! Walks the bend sequence with a running position and heading, emitting a
//! tessellated polyline: straight runs between bends, then a circular arc
//! per bend swept around a center offset perpendicular to the heading.
//! A single signed-rotation formula covers both turn directions; clockwise
//! is a negative rotation throughout, never a mirrored code path.
//!
//! Inputs are assumed to have passed validation (see [`crate::validator`]);
//! in particular the springback coefficient must be non-zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tubekit_core::{MaterialProfile, TubeSpec};

use crate::sequence::BendSequence;

/// Number of sub-segments each arc is tessellated into.
///
/// An arc therefore spans `ARC_SEGMENTS + 1` polyline points, the first of
/// which coincides with the end of the preceding straight run.
pub const ARC_SEGMENTS: usize = 40;

/// A point of the tube centerline, in tube-local mm coordinates.
///
/// The x axis is aligned with the tube's initial heading, y is
/// perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Computes the tessellated centerline of the bent tube.
///
/// The returned polyline always starts at `(0, 0)` and has at least two
/// points; an empty sequence yields the straight tube
/// `[(0, 0), (total_length, 0)]`. Each bend contributes its arc points and,
/// when the run from the previous bend is positive, the straight-segment
/// join point. The output is a pure function of the inputs.
pub fn compute_path(
    tube: &TubeSpec,
    sequence: &BendSequence,
    material: &MaterialProfile,
) -> Vec<Point> {
    let mut points = Vec::with_capacity(2 + (ARC_SEGMENTS + 1) * sequence.len());

    let mut position = Point::new(0.0, 0.0);
    let mut heading = 0.0_f64;
    points.push(position);

    let mut previous_position_mm = 0.0;
    for bend in sequence.bends() {
        // Straight run up to the bend; a zero-length run is omitted rather
        // than emitted as a duplicate point.
        let run = bend.position_mm - previous_position_mm;
        if run > 0.0 {
            position = Point::new(
                position.x + run * heading.cos(),
                position.y + run * heading.sin(),
            );
            points.push(position);
        }

        let applied_radius = material.applied_radius(bend.bend_radius);
        let angle = bend.angle_radians();
        let turn = if angle < 0.0 { -1.0 } else { 1.0 };
        let sweep_total = angle.abs();

        // Arc center sits perpendicular to the heading, on the turn side.
        let center = Point::new(
            position.x - turn * applied_radius * heading.sin(),
            position.y + turn * applied_radius * heading.cos(),
        );

        // Step 0 coincides with the segment join emitted above, so the
        // sweep starts at step 1.
        for step in 1..=ARC_SEGMENTS {
            let sweep = sweep_total * step as f64 / ARC_SEGMENTS as f64;
            let theta = heading + turn * sweep;
            position = Point::new(
                center.x + turn * applied_radius * theta.sin(),
                center.y - turn * applied_radius * theta.cos(),
            );
            points.push(position);
        }

        heading += angle;
        previous_position_mm = bend.position_mm;
    }

    // Remaining straight tail after the last bend.
    let tail = tube.total_length - previous_position_mm;
    if tail > 0.0 {
        position = Point::new(
            position.x + tail * heading.cos(),
            position.y + tail * heading.sin(),
        );
        points.push(position);
    }

    debug!(
        bends = sequence.len(),
        points = points.len(),
        "computed centerline path"
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubekit_core::BendSpec;

    const TOLERANCE: f64 = 1e-9;

    fn tube(length: f64) -> TubeSpec {
        TubeSpec::new(20.0, 1.5, length)
    }

    fn no_springback() -> MaterialProfile {
        // Coefficient 1.0 keeps the applied radius equal to the nominal
        // radius, which makes expected coordinates easy to state.
        MaterialProfile::new(1.0, 20.0)
    }

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < TOLERANCE && (actual.y - y).abs() < TOLERANCE,
            "expected ({x}, {y}), got ({}, {})",
            actual.x,
            actual.y
        );
    }

    #[test]
    fn test_empty_sequence_is_straight_tube() {
        let points = compute_path(&tube(1000.0), &BendSequence::new(), &no_springback());
        assert_eq!(points.len(), 2);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[1], 1000.0, 0.0);
    }

    #[test]
    fn test_single_ccw_bend_geometry() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 50.0, 300.0)).unwrap();
        let points = compute_path(&tube(1000.0), &sequence, &no_springback());

        assert_eq!(points.len(), 2 + 41);
        assert_point(points[0], 0.0, 0.0);
        // Straight run to the bend position.
        assert_point(points[1], 300.0, 0.0);
        // Arc end: quarter circle of radius 50 turning left.
        assert_point(points[1 + ARC_SEGMENTS], 350.0, 50.0);
        // Tail: remaining 700 mm straight up.
        assert_point(points[2 + ARC_SEGMENTS], 350.0, 750.0);
    }

    #[test]
    fn test_clockwise_bend_mirrors_counter_clockwise() {
        let mut left = BendSequence::new();
        left.insert(BendSpec::new(90.0, 50.0, 300.0)).unwrap();
        let mut right = BendSequence::new();
        right.insert(BendSpec::new(-90.0, 50.0, 300.0)).unwrap();

        let left_points = compute_path(&tube(1000.0), &left, &no_springback());
        let right_points = compute_path(&tube(1000.0), &right, &no_springback());

        assert_eq!(left_points.len(), right_points.len());
        for (l, r) in left_points.iter().zip(&right_points) {
            assert!((l.x - r.x).abs() < TOLERANCE);
            assert!((l.y + r.y).abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_arc_points_stay_on_the_applied_radius() {
        let material = MaterialProfile::new(0.975, 20.0);
        let applied = material.applied_radius(50.0);

        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 50.0, 300.0)).unwrap();
        let points = compute_path(&tube(1000.0), &sequence, &material);

        // Center for a left turn from (300, 0) heading +x.
        let center = Point::new(300.0, applied);
        for point in &points[1..=1 + ARC_SEGMENTS] {
            assert!((point.distance_to(&center) - applied).abs() < 1e-6);
        }
    }

    #[test]
    fn test_point_count_for_interior_bends() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(45.0, 60.0, 200.0)).unwrap();
        sequence.insert(BendSpec::new(-120.0, 60.0, 400.0)).unwrap();
        sequence.insert(BendSpec::new(30.0, 60.0, 700.0)).unwrap();

        let points = compute_path(&tube(1000.0), &sequence, &no_springback());
        assert_eq!(points.len(), 2 + 41 * 3);
        assert_point(points[0], 0.0, 0.0);
    }

    #[test]
    fn test_bend_at_tube_start_omits_straight_run() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 50.0, 0.0)).unwrap();
        let points = compute_path(&tube(1000.0), &sequence, &no_springback());

        // Start point, 40 swept arc points, tail point.
        assert_eq!(points.len(), 1 + ARC_SEGMENTS + 1);
        assert_point(points[0], 0.0, 0.0);
        assert_point(points[ARC_SEGMENTS], 50.0, 50.0);
    }

    #[test]
    fn test_bend_at_tube_end_omits_tail() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 50.0, 1000.0)).unwrap();
        let points = compute_path(&tube(1000.0), &sequence, &no_springback());

        assert_eq!(points.len(), 1 + 1 + ARC_SEGMENTS);
        assert_point(points[1], 1000.0, 0.0);
        assert_point(points[1 + ARC_SEGMENTS], 1050.0, 50.0);
    }

    #[test]
    fn test_compute_path_is_pure() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(75.0, 80.0, 250.0)).unwrap();
        sequence.insert(BendSpec::new(-30.0, 80.0, 600.0)).unwrap();

        let material = MaterialProfile::new(0.965, 22.0);
        let first = compute_path(&tube(1200.0), &sequence, &material);
        let second = compute_path(&tube(1200.0), &sequence, &material);
        assert_eq!(first, second);
    }

    #[test]
    fn test_heading_carries_across_bends() {
        // Two opposite 90° bends bring the heading back to +x.
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 50.0, 200.0)).unwrap();
        sequence.insert(BendSpec::new(-90.0, 50.0, 500.0)).unwrap();
        let points = compute_path(&tube(1000.0), &sequence, &no_springback());

        let last = points[points.len() - 1];
        let before_tail = points[points.len() - 2];
        // The tail is horizontal again after the opposing bends.
        assert!((last.y - before_tail.y).abs() < TOLERANCE);
        assert!(last.x > before_tail.x);
    }
}
