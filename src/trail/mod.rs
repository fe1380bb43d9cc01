// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the seating search.
//!
//! Every change to a guest's seat is recorded on the trail together with the
//! value it replaced. Backtracking rewinds the trail to a checkpoint, handing
//! each old value back to the owner of the state so it can be restored.
//!
//! The trail never holds pointers into the state it protects: it only knows
//! slot indices and encoded old values. The caller supplies the restore step,
//! which keeps the undo an explicit operation on exclusively-held state.

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    /// Index of the slot that was changed (a guest id for seat slots).
    slot: usize,
    /// The encoded value held by the slot before the change.
    old_value: u64,
}

/// Undo log for the search state.
///
/// # Memory Model
///
/// - DYNAMIC: the trail is mutable state that changes during search
/// - Each `SeatingContext` owns its own trail, so independent searches can
///   run on separate threads
#[derive(Debug)]
pub struct Trail {
    /// All trail entries recorded so far, oldest first.
    entries: Vec<TrailEntry>,
    /// Upper bound on live entries.
    capacity: usize,
}

impl Trail {
    /// Create an empty trail able to hold `capacity` live entries.
    ///
    /// A seating search changes each guest's seat at most once along any
    /// search path, so the guest count is the natural capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a checkpoint for later backtracking.
    ///
    /// The checkpoint is simply the current trail length.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change in the trail.
    ///
    /// # Panics
    ///
    /// Panics if the trail exceeds its capacity (indicates a bug in the search:
    /// a slot was changed twice on one path without an intervening rewind).
    pub(crate) fn record_change(&mut self, slot: usize, old_value: u64) {
        if self.entries.len() >= self.capacity {
            panic!("Trail overflow: exceeded {} entries", self.capacity);
        }

        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Rewind the trail to `checkpoint`, most recent change first.
    ///
    /// `restore` is called once per undone entry with the slot and the value
    /// it held before the change. Returns the number of entries undone.
    /// Rewinding to a checkpoint at or beyond the current length is a no-op.
    pub fn rewind_to<F>(&mut self, checkpoint: usize, mut restore: F) -> usize
    where
        F: FnMut(usize, u64),
    {
        let mut undone = 0;
        while self.entries.len() > checkpoint {
            if let Some(entry) = self.entries.pop() {
                restore(entry.slot, entry.old_value);
                undone += 1;
            }
        }
        undone
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
