// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetric conflict lookup, built once per search.
//!
//! The input conflict list is undirected: a pair `(a, b)` forbids `a` and `b`
//! from sharing a table in either order. The graph stores one sorted,
//! de-duplicated adjacency list per guest so a feasibility check only looks
//! at the guest's own neighbours.
//!
//! # Inert entries
//!
//! Pairs naming a guest outside `0..guests` can never match a seated guest,
//! so they are dropped and counted rather than rejected. A self-conflict
//! `(a, a)` can never block a placement either (a guest is never compared
//! against itself) and is likewise dropped and counted.

use crate::{GuestId, TableId};

/// Summary of conflict entries that had no effect on the graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IgnoredConflicts {
    /// Pairs with at least one guest outside `0..guests`.
    pub out_of_range: usize,
    /// Pairs of the form `(a, a)`.
    pub self_conflicts: usize,
}

impl IgnoredConflicts {
    /// Total number of ignored entries.
    pub fn total(&self) -> usize {
        self.out_of_range + self.self_conflicts
    }
}

/// Adjacency-list view of the conflict pairs for one search.
///
/// # Memory Model
///
/// - MEMO: immutable after construction, read by every feasibility check
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictGraph {
    /// `adjacency[g]` lists every guest that may not sit with `g`, ascending.
    adjacency: Vec<Vec<GuestId>>,
    /// Number of distinct undirected edges.
    edges: usize,
    ignored: IgnoredConflicts,
}

impl ConflictGraph {
    /// Build the symmetric conflict graph for `guests` guests.
    pub fn new(guests: usize, conflicts: &[(GuestId, GuestId)]) -> Self {
        let mut adjacency = vec![Vec::new(); guests];
        let mut ignored = IgnoredConflicts::default();

        for &(a, b) in conflicts {
            if a >= guests || b >= guests {
                ignored.out_of_range += 1;
                continue;
            }
            if a == b {
                ignored.self_conflicts += 1;
                continue;
            }
            adjacency[a].push(b);
            adjacency[b].push(a);
        }

        for neighbours in &mut adjacency {
            neighbours.sort_unstable();
            neighbours.dedup();
        }

        // Each undirected edge appears in exactly two lists.
        let edges = adjacency.iter().map(Vec::len).sum::<usize>() / 2;

        Self {
            adjacency,
            edges,
            ignored,
        }
    }

    /// Number of guests the graph was built for.
    pub fn guests(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if `a` and `b` may not share a table.
    ///
    /// Out-of-range guests conflict with nobody.
    pub fn conflicts_with(&self, a: GuestId, b: GuestId) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|neighbours| neighbours.binary_search(&b).is_ok())
    }

    /// Guests that may not sit with `guest`, ascending.
    pub fn neighbours(&self, guest: GuestId) -> &[GuestId] {
        self.adjacency.get(guest).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct guests `guest` conflicts with.
    pub fn degree(&self, guest: GuestId) -> usize {
        self.neighbours(guest).len()
    }

    /// Number of distinct undirected conflict edges.
    pub fn len(&self) -> usize {
        self.edges
    }

    /// Returns true if no conflict constrains the search.
    pub fn is_empty(&self) -> bool {
        self.edges == 0
    }

    /// Entries from the input list that were dropped.
    pub fn ignored(&self) -> IgnoredConflicts {
        self.ignored
    }

    /// Returns true if `guest` may sit at `table` given the seats so far.
    ///
    /// `seat_of` reports the table of each already-seated guest; unseated
    /// guests never block a placement.
    pub fn allows<F>(&self, guest: GuestId, table: TableId, seat_of: F) -> bool
    where
        F: Fn(GuestId) -> Option<TableId>,
    {
        self.neighbours(guest)
            .iter()
            .all(|&other| seat_of(other) != Some(table))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicts_are_symmetric() {
        let graph = ConflictGraph::new(4, &[(0, 2), (1, 3)]);
        assert!(graph.conflicts_with(0, 2));
        assert!(graph.conflicts_with(2, 0));
        assert!(graph.conflicts_with(3, 1));
        assert!(!graph.conflicts_with(0, 1));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_duplicates_collapse() {
        let graph = ConflictGraph::new(3, &[(0, 1), (1, 0), (0, 1)]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.neighbours(0), &[1]);
        assert_eq!(graph.neighbours(1), &[0]);
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_out_of_range_pairs_are_inert() {
        let graph = ConflictGraph::new(2, &[(0, 5), (7, 1), (9, 9), (0, 1)]);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.ignored().out_of_range, 3);
        assert!(!graph.conflicts_with(0, 5));
        assert!(!graph.conflicts_with(7, 1));
        assert!(graph.neighbours(7).is_empty());
    }

    #[test]
    fn test_self_conflicts_are_noops() {
        let graph = ConflictGraph::new(2, &[(1, 1)]);
        assert!(graph.is_empty());
        assert_eq!(
            graph.ignored(),
            IgnoredConflicts {
                out_of_range: 0,
                self_conflicts: 1
            }
        );
        assert_eq!(graph.ignored().total(), 1);
    }

    #[test]
    fn test_zero_guests() {
        let graph = ConflictGraph::new(0, &[(0, 1)]);
        assert_eq!(graph.guests(), 0);
        assert!(graph.is_empty());
        assert_eq!(graph.ignored().out_of_range, 1);
    }

    #[test]
    fn test_allows_checks_only_seated_neighbours() {
        let graph = ConflictGraph::new(3, &[(0, 2), (1, 2)]);
        let seats = [Some(0), None, None];
        let seat_of = |g: GuestId| seats[g];

        assert!(!graph.allows(2, 0, seat_of));
        // Guest 1 is a neighbour but not seated yet.
        assert!(graph.allows(2, 1, seat_of));
    }
}
