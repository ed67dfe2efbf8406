//! Linear undo/redo over board snapshots.

use tracing::info;

use crate::position::{BoardState, Snapshot};

/// Stack of past positions plus a redo buffer.
///
/// `history` is never empty: index 0 is the position the game started from.
#[derive(Clone, Debug)]
pub struct HistoryManager {
    history: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
}

impl HistoryManager {
    pub fn new(initial: Snapshot) -> Self {
        Self {
            history: vec![initial],
            redo_stack: Vec::new(),
        }
    }

    /// Record the position after a fresh placement or pass. Clears redo.
    pub fn push(&mut self, snapshot: Snapshot) {
        self.history.push(snapshot);
        self.redo_stack.clear();
    }

    /// Step back one position and restore it into `state`.
    ///
    /// Returns `None` (and leaves `state` alone) at the initial position.
    pub fn undo(&mut self, state: &mut BoardState) -> Option<&Snapshot> {
        if self.history.len() <= 1 {
            return None;
        }
        let top = self.history.pop()?;
        self.redo_stack.push(top);
        let current = self.history.last()?;
        state.set_snapshot(current);
        info!(depth = self.history.len(), "undo");
        Some(current)
    }

    /// Re-apply the most recently undone position.
    pub fn redo(&mut self, state: &mut BoardState) -> Option<&Snapshot> {
        let snapshot = self.redo_stack.pop()?;
        self.history.push(snapshot);
        let current = self.history.last()?;
        state.set_snapshot(current);
        info!(depth = self.history.len(), "redo");
        Some(current)
    }

    /// The snapshot matching the live position.
    pub fn current(&self) -> &Snapshot {
        // `history` always holds the initial snapshot.
        &self.history[self.history.len() - 1]
    }

    /// Number of recorded positions, including the initial one.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.history.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }
}
