//! Undo/redo history.
//!
//! The history never holds references into the live bend sequence: every
//! entry stores immutable before/after value copies of the session state
//! ([`SessionSnapshot`]), so undoing and redoing is plain state
//! substitution with no aliasing into the manager's collection.

use serde::{Deserialize, Serialize};
use tracing::debug;

use tubekit_bending::BendSequence;
use tubekit_core::{BendSpec, MaterialId, TubeSpec};

/// Default maximum number of history entries kept.
pub const DEFAULT_HISTORY_DEPTH: usize = 50;

/// What a history entry changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// A bend was inserted.
    BendAdded,
    /// A bend was removed.
    BendRemoved,
    /// Tube or material parameters changed.
    TubeChanged,
    /// The whole session was reset or replaced (e.g. project load).
    Reset,
}

/// A value copy of everything the session can mutate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub tube: TubeSpec,
    pub material_id: MaterialId,
    pub bends: Vec<BendSpec>,
}

impl SessionSnapshot {
    /// Captures the current session state as a detached value copy.
    pub fn capture(tube: &TubeSpec, material_id: &MaterialId, sequence: &BendSequence) -> Self {
        Self {
            tube: *tube,
            material_id: material_id.clone(),
            bends: sequence.snapshot(),
        }
    }
}

/// One recorded state transition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Kind of change.
    pub kind: ActionKind,
    /// Human-readable label for history listings.
    pub description: String,
    /// State before the change; returned by undo.
    pub before: SessionSnapshot,
    /// State after the change; returned by redo.
    pub after: SessionSnapshot,
}

impl HistoryEntry {
    /// Creates a new entry.
    pub fn new(
        kind: ActionKind,
        description: impl Into<String>,
        before: SessionSnapshot,
        after: SessionSnapshot,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            before,
            after,
        }
    }
}

/// Bounded undo/redo stack over session snapshots.
///
/// The cursor sits between the applied and the undone entries. Recording
/// while entries are undone drops the redo tail, and exceeding the depth
/// limit evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct UndoRedoManager {
    entries: Vec<HistoryEntry>,
    /// Number of currently applied entries; next undo takes `entries[cursor-1]`.
    cursor: usize,
    max_depth: usize,
}

impl UndoRedoManager {
    /// Creates a manager holding at most `max_depth` entries.
    pub fn new(max_depth: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: 0,
            max_depth,
        }
    }

    /// Records a transition, dropping any redoable tail.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor);
        self.entries.push(entry);
        if self.entries.len() > self.max_depth {
            self.entries.remove(0);
        }
        self.cursor = self.entries.len();
        debug!(depth = self.cursor, "recorded history entry");
    }

    /// True when at least one entry can be undone.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// True when at least one undone entry can be redone.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Steps back one entry and returns the state to restore.
    pub fn undo(&mut self) -> Option<SessionSnapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        let entry = &self.entries[self.cursor];
        debug!(description = %entry.description, "undo");
        Some(entry.before.clone())
    }

    /// Re-applies the next undone entry and returns the state to restore.
    pub fn redo(&mut self) -> Option<SessionSnapshot> {
        if self.cursor == self.entries.len() {
            return None;
        }
        let entry = &self.entries[self.cursor];
        self.cursor += 1;
        debug!(description = %entry.description, "redo");
        Some(entry.after.clone())
    }

    /// Number of entries available to undo.
    pub fn undo_depth(&self) -> usize {
        self.cursor
    }

    /// Number of entries available to redo.
    pub fn redo_depth(&self) -> usize {
        self.entries.len() - self.cursor
    }

    /// Drops all history.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for UndoRedoManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(bend_count: usize) -> SessionSnapshot {
        let mut sequence = BendSequence::new();
        for i in 0..bend_count {
            sequence
                .insert(BendSpec::new(90.0, 450.0, 100.0 * (i as f64 + 1.0)))
                .unwrap();
        }
        SessionSnapshot::capture(
            &TubeSpec::new(20.0, 1.5, 1000.0),
            &MaterialId::new("steel"),
            &sequence,
        )
    }

    fn entry(description: &str, before: SessionSnapshot, after: SessionSnapshot) -> HistoryEntry {
        HistoryEntry::new(ActionKind::BendAdded, description, before, after)
    }

    #[test]
    fn test_new_manager_is_empty() {
        let manager = UndoRedoManager::new(DEFAULT_HISTORY_DEPTH);
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
        assert_eq!(manager.undo_depth(), 0);
        assert_eq!(manager.redo_depth(), 0);
    }

    #[test]
    fn test_record_then_undo_returns_before_state() {
        let mut manager = UndoRedoManager::new(DEFAULT_HISTORY_DEPTH);
        manager.record(entry("add bend", snapshot(0), snapshot(1)));

        assert!(manager.can_undo());
        let restored = manager.undo().unwrap();
        assert!(restored.bends.is_empty());
        assert!(!manager.can_undo());
        assert!(manager.can_redo());
    }

    #[test]
    fn test_redo_returns_after_state() {
        let mut manager = UndoRedoManager::new(DEFAULT_HISTORY_DEPTH);
        manager.record(entry("add bend", snapshot(0), snapshot(1)));
        manager.undo();

        let restored = manager.redo().unwrap();
        assert_eq!(restored.bends.len(), 1);
        assert!(manager.can_undo());
        assert!(!manager.can_redo());
        assert!(manager.redo().is_none());
    }

    #[test]
    fn test_record_after_undo_drops_redo_tail() {
        let mut manager = UndoRedoManager::new(DEFAULT_HISTORY_DEPTH);
        manager.record(entry("first", snapshot(0), snapshot(1)));
        manager.record(entry("second", snapshot(1), snapshot(2)));
        manager.undo();

        manager.record(entry("branch", snapshot(1), snapshot(3)));
        assert!(!manager.can_redo());
        assert_eq!(manager.undo_depth(), 2);

        // The dropped "second" entry is unreachable; undo walks the branch.
        let restored = manager.undo().unwrap();
        assert_eq!(restored.bends.len(), 1);
    }

    #[test]
    fn test_depth_limit_evicts_oldest() {
        let mut manager = UndoRedoManager::new(2);
        manager.record(entry("a", snapshot(0), snapshot(1)));
        manager.record(entry("b", snapshot(1), snapshot(2)));
        manager.record(entry("c", snapshot(2), snapshot(3)));

        assert_eq!(manager.undo_depth(), 2);
        manager.undo();
        manager.undo();
        // "a" was evicted, so the deepest reachable state is b's before.
        assert!(!manager.can_undo());
    }

    #[test]
    fn test_snapshots_are_detached_from_live_sequence() {
        let mut sequence = BendSequence::new();
        sequence.insert(BendSpec::new(90.0, 450.0, 100.0)).unwrap();
        let captured = SessionSnapshot::capture(
            &TubeSpec::new(20.0, 1.5, 1000.0),
            &MaterialId::new("steel"),
            &sequence,
        );

        sequence.clear();
        assert_eq!(captured.bends.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut manager = UndoRedoManager::new(DEFAULT_HISTORY_DEPTH);
        manager.record(entry("a", snapshot(0), snapshot(1)));
        manager.clear();
        assert!(!manager.can_undo());
        assert!(!manager.can_redo());
    }
}
