// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use seating_search::{GuestId, Seating, TableId};

/// Enumerate every seating in lexicographic order (guest 0 most significant)
/// and return the first valid one.
///
/// Exponential; only for small cross-checks.
pub fn brute_force(
    guests: usize,
    tables: usize,
    conflicts: &[(GuestId, GuestId)],
) -> Option<Vec<TableId>> {
    if guests == 0 {
        return Some(Vec::new());
    }
    if tables == 0 {
        return None;
    }

    let mut candidate = vec![0; guests];
    loop {
        if is_valid(&candidate, conflicts) {
            return Some(candidate);
        }
        // Odometer increment, last guest fastest
        let mut position = guests;
        loop {
            if position == 0 {
                return None;
            }
            position -= 1;
            candidate[position] += 1;
            if candidate[position] < tables {
                break;
            }
            candidate[position] = 0;
        }
    }
}

fn is_valid(tables: &[TableId], conflicts: &[(GuestId, GuestId)]) -> bool {
    conflicts.iter().all(|&(a, b)| {
        a == b || a >= tables.len() || b >= tables.len() || tables[a] != tables[b]
    })
}

/// Assert a seating is total, in range, and conflict-free.
pub fn assert_valid_seating(
    seating: &Seating,
    guests: usize,
    tables: usize,
    conflicts: &[(GuestId, GuestId)],
) {
    assert_eq!(seating.len(), guests, "seating is not total: {seating}");
    for (guest, table) in seating.iter() {
        assert!(
            table < tables,
            "guest {guest} at table {table}, but only {tables} tables exist"
        );
    }
    for &(a, b) in conflicts {
        if a != b && a < guests && b < guests {
            assert_ne!(
                seating.table_of(a),
                seating.table_of(b),
                "conflicting guests {a} and {b} share a table in {seating}"
            );
        }
    }
}
