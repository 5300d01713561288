//! Property tests for the bend sequence ordering and clearance invariants.

use proptest::prelude::*;

use tubekit_bending::{BendSequence, MIN_BEND_SPACING_MM};
use tubekit_core::BendSpec;

proptest! {
    /// Any series of inserts, keeping only those that individually succeed,
    /// leaves the sequence sorted ascending with at least the minimum
    /// clearance between adjacent bends.
    #[test]
    fn inserts_preserve_order_and_clearance(positions in prop::collection::vec(0.0f64..5000.0, 0..40)) {
        let mut sequence = BendSequence::new();
        for position in positions {
            // Rejected inserts must leave the sequence untouched.
            let len_before = sequence.len();
            if sequence.insert(BendSpec::new(90.0, 100.0, position)).is_err() {
                prop_assert_eq!(sequence.len(), len_before);
            }
        }

        let bends = sequence.bends();
        for pair in bends.windows(2) {
            prop_assert!(pair[0].position_mm < pair[1].position_mm);
            prop_assert!(pair[1].position_mm - pair[0].position_mm >= MIN_BEND_SPACING_MM);
        }
    }

    /// A snapshot taken at any point rebuilds into an equivalent sequence.
    #[test]
    fn snapshot_rebuild_is_lossless(positions in prop::collection::vec(0.0f64..5000.0, 0..40)) {
        let mut sequence = BendSequence::new();
        for position in positions {
            let _ = sequence.insert(BendSpec::new(-45.0, 80.0, position));
        }

        let rebuilt = BendSequence::from_bends(sequence.snapshot()).unwrap();
        prop_assert_eq!(rebuilt.bends(), sequence.bends());
    }
}
