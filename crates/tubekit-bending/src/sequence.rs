//! Ordered bend sequence management.
//!
//! A [`BendSequence`] is the authoritative set of bends for one tube. It
//! owns its collection privately: callers mutate it only through
//! [`insert`](BendSequence::insert), [`remove`](BendSequence::remove), and
//! [`clear`](BendSequence::clear), and read it through [`bends`](BendSequence::bends)
//! or a value-copy [`snapshot`](BendSequence::snapshot). History or undo
//! layers must operate on snapshots, never on references into the live
//! collection.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use tubekit_core::BendSpec;

/// Minimum distance between the positions of two bends, in mm.
///
/// Below this clearance the bender dies would overlap and the second bend
/// could not be formed.
pub const MIN_BEND_SPACING_MM: f64 = 10.0;

/// Errors raised by sequence mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    /// Two bends would sit closer than the minimum clearance.
    #[error(
        "bends are too close: {candidate_mm:.1} mm is within {MIN_BEND_SPACING_MM} mm of the existing bend at {existing_mm:.1} mm"
    )]
    TooClose {
        /// Position of the already-inserted bend, in mm.
        existing_mm: f64,
        /// Position of the rejected candidate, in mm.
        candidate_mm: f64,
    },
}

/// Ordered, non-overlapping collection of bends for one tube.
///
/// Invariant: always sorted ascending by `position_mm`, and no two entries
/// are closer than [`MIN_BEND_SPACING_MM`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BendSequence {
    bends: Vec<BendSpec>,
}

impl BendSequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { bends: Vec::new() }
    }

    /// Rebuilds a sequence from a snapshot, inserting each bend in turn.
    ///
    /// Fails on the first bend that violates the clearance invariant and
    /// leaves the partially-built sequence behind the error.
    pub fn from_bends(bends: impl IntoIterator<Item = BendSpec>) -> Result<Self, SequenceError> {
        let mut sequence = Self::new();
        for bend in bends {
            sequence.insert(bend)?;
        }
        Ok(sequence)
    }

    /// Inserts a bend, keeping the sequence sorted by position.
    ///
    /// Fails with [`SequenceError::TooClose`] when any existing bend lies
    /// within [`MIN_BEND_SPACING_MM`] of the candidate's position; the
    /// sequence is unchanged in that case.
    pub fn insert(&mut self, bend: BendSpec) -> Result<(), SequenceError> {
        for existing in &self.bends {
            if (existing.position_mm - bend.position_mm).abs() < MIN_BEND_SPACING_MM {
                return Err(SequenceError::TooClose {
                    existing_mm: existing.position_mm,
                    candidate_mm: bend.position_mm,
                });
            }
        }
        self.bends.push(bend);
        self.bends
            .sort_by(|a, b| a.position_mm.total_cmp(&b.position_mm));
        debug!(
            position_mm = bend.position_mm,
            count = self.bends.len(),
            "inserted bend"
        );
        Ok(())
    }

    /// Removes the bend at the given positional index.
    ///
    /// Out-of-range indices are a no-op. Indices refer to the current
    /// sorted order and are invalidated by any insert or remove.
    pub fn remove(&mut self, index: usize) {
        if index < self.bends.len() {
            let removed = self.bends.remove(index);
            debug!(position_mm = removed.position_mm, "removed bend");
        }
    }

    /// Removes all bends.
    pub fn clear(&mut self) {
        self.bends.clear();
        debug!("cleared bend sequence");
    }

    /// The bends in ascending position order.
    pub fn bends(&self) -> &[BendSpec] {
        &self.bends
    }

    /// A value copy of the current bends, safe to hand to history layers
    /// or across a thread boundary.
    pub fn snapshot(&self) -> Vec<BendSpec> {
        self.bends.clone()
    }

    /// Number of bends in the sequence.
    pub fn len(&self) -> usize {
        self.bends.len()
    }

    /// Checks whether the sequence has no bends.
    pub fn is_empty(&self) -> bool {
        self.bends.is_empty()
    }
}
