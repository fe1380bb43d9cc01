// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SeatingContext is the core data structure that combines:
//! - Tier 1 (MEMO): the problem dimensions and the conflict graph
//! - Tier 2 (DYNAMIC): the partial seating, with trail-based backtracking
//!
//! A context is created per search and owns everything the search mutates.
//! Nothing is shared between contexts, so searches on separate threads
//! never interfere.

use crate::memo::ConflictGraph;
use crate::state::{Counters, Seating, Statistics};
use crate::trail::Trail;
use crate::{GuestId, TableId};

/// Immutable per-search data (Tier 1: MEMO).
#[derive(Debug, Clone)]
pub struct MemoizedData {
    /// Number of guests, N.
    pub guests: usize,

    /// Number of tables, C.
    pub tables: usize,

    /// Symmetric conflict lookup over `0..guests`.
    pub conflicts: ConflictGraph,
}

impl MemoizedData {
    pub fn new(guests: usize, tables: usize, conflicts: &[(GuestId, GuestId)]) -> Self {
        Self {
            guests,
            tables,
            conflicts: ConflictGraph::new(guests, conflicts),
        }
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// Every change goes through `SeatingContext::seat`, which records it on the
/// trail.
#[derive(Debug)]
pub struct DynamicState {
    /// Current table of each guest, `None` while unseated.
    pub seats: Vec<Option<TableId>>,
}

impl DynamicState {
    pub fn new(memo: &MemoizedData) -> Self {
        Self {
            seats: vec![None; memo.guests],
        }
    }
}

/// Search context combining MEMO and DYNAMIC state.
///
/// # Memory Model
///
/// ```text
/// SeatingContext {
///     memo: MemoizedData,        // Tier 1: Immutable
///     trail: Trail,              // Tier 2: Mutable, owned
///     state: DynamicState,       // Tier 2: Mutable, owned
///     statistics: Statistics,    // Counters, never rewound
/// }
/// ```
///
/// # Example
///
/// ```
/// use seating_search::SeatingContext;
///
/// let mut ctx = SeatingContext::new(2, 2, &[(0, 1)]);
/// let checkpoint = ctx.trail.checkpoint();
/// ctx.seat(0, 1);
/// assert_eq!(ctx.table_of(0), Some(1));
///
/// ctx.rewind_to(checkpoint);
/// assert_eq!(ctx.table_of(0), None);
/// ```
#[derive(Debug)]
pub struct SeatingContext {
    /// Immutable per-search data (Tier 1)
    pub memo: MemoizedData,
    /// Trail for backtracking (Tier 2)
    pub trail: Trail,
    /// Mutable search state (Tier 2)
    pub state: DynamicState,
    /// Search counters
    pub statistics: Statistics,
}

impl SeatingContext {
    /// Create a context for seating `guests` guests at `tables` tables.
    pub fn new(guests: usize, tables: usize, conflicts: &[(GuestId, GuestId)]) -> Self {
        Self::with_memo(MemoizedData::new(guests, tables, conflicts))
    }

    /// Create a context from prepared MEMO data.
    pub fn with_memo(memo: MemoizedData) -> Self {
        let state = DynamicState::new(&memo);
        Self {
            trail: Trail::with_capacity(memo.guests),
            memo,
            state,
            statistics: Statistics::new(),
        }
    }

    /// Current table of `guest`, `None` if unseated or out of range.
    pub fn table_of(&self, guest: GuestId) -> Option<TableId> {
        self.state.seats.get(guest).copied().flatten()
    }

    /// Returns true if no seated neighbour of `guest` sits at `table`.
    ///
    /// Only guests already committed to the partial seating are considered.
    pub fn can_seat(&self, guest: GuestId, table: TableId) -> bool {
        self.memo
            .conflicts
            .allows(guest, table, |other| self.table_of(other))
    }

    /// Commit `guest` to `table`, recording the previous seat on the trail.
    ///
    /// # Panics
    ///
    /// Panics if `guest` is out of range.
    pub fn seat(&mut self, guest: GuestId, table: TableId) {
        assert!(
            guest < self.state.seats.len(),
            "Guest out of bounds: {}",
            guest
        );
        let slot = &mut self.state.seats[guest];
        self.trail.record_change(guest, encode_seat(*slot));
        *slot = Some(table);
        self.statistics.increment_counter(Counters::Placements);
        tracing::trace!(guest, table, "seated");
    }

    /// Undo every seat change made since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        let seats = &mut self.state.seats;
        let undone = self.trail.rewind_to(checkpoint, |guest, old_value| {
            tracing::trace!(guest, "unseated");
            seats[guest] = decode_seat(old_value);
        });
        self.statistics.add(Counters::Undos, undone as u64);
    }

    /// The seating if every guest is seated, otherwise `None`.
    pub fn seating(&self) -> Option<Seating> {
        self.state
            .seats
            .iter()
            .copied()
            .collect::<Option<Vec<_>>>()
            .map(Seating::new)
    }

    /// Number of guests currently seated.
    pub fn seated_count(&self) -> usize {
        self.state.seats.iter().filter(|seat| seat.is_some()).count()
    }
}

/// Trail encoding for a seat: 0 for unseated, table + 1 for seated.
fn encode_seat(seat: Option<TableId>) -> u64 {
    match seat {
        None => 0,
        Some(table) => table as u64 + 1,
    }
}

fn decode_seat(value: u64) -> Option<TableId> {
    value.checked_sub(1).map(|table| table as TableId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seating_context_new() {
        let ctx = SeatingContext::new(3, 2, &[(0, 1)]);
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.seated_count(), 0);
        assert_eq!(ctx.memo.conflicts.len(), 1);
        assert!(ctx.seating().is_none());
    }

    #[test]
    fn test_seat_encoding() {
        for seat in [None, Some(0), Some(1), Some(41)] {
            assert_eq!(decode_seat(encode_seat(seat)), seat);
        }
    }

    #[test]
    fn test_seat_and_rewind() {
        let mut ctx = SeatingContext::new(3, 2, &[]);

        let cp1 = ctx.trail.checkpoint();
        ctx.seat(0, 0);
        ctx.seat(1, 1);
        let cp2 = ctx.trail.checkpoint();
        ctx.seat(2, 1);
        assert_eq!(ctx.seating(), Some(Seating::new(vec![0, 1, 1])));

        ctx.rewind_to(cp2);
        assert_eq!(ctx.table_of(2), None);
        assert_eq!(ctx.table_of(1), Some(1));

        ctx.rewind_to(cp1);
        assert_eq!(ctx.seated_count(), 0);
        assert_eq!(ctx.statistics.get(Counters::Placements), 3);
        assert_eq!(ctx.statistics.get(Counters::Undos), 3);
    }

    #[test]
    fn test_can_seat_ignores_unseated_neighbours() {
        let mut ctx = SeatingContext::new(3, 2, &[(0, 2), (1, 2)]);
        ctx.seat(0, 0);

        assert!(!ctx.can_seat(2, 0));
        assert!(ctx.can_seat(2, 1));
        assert!(ctx.can_seat(1, 0));
    }

    #[test]
    fn test_empty_problem_is_seated() {
        let ctx = SeatingContext::new(0, 0, &[]);
        assert_eq!(ctx.seating(), Some(Seating::default()));
    }

    #[test]
    fn test_independent_contexts() {
        let mut ctx1 = SeatingContext::new(2, 2, &[]);
        let ctx2 = SeatingContext::new(2, 2, &[]);

        ctx1.seat(0, 1);
        assert_eq!(ctx1.trail.len(), 1);
        assert_eq!(ctx2.trail.len(), 0);
        assert_eq!(ctx2.table_of(0), None);
    }
}
