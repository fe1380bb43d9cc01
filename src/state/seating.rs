// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Total seating produced by a successful search.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::{GuestId, TableId};

/// A total mapping from every guest in `0..len()` to a table.
///
/// Serializes as a guest → table map, e.g. `{"0": 0, "1": 1}` in JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<GuestId, TableId>",
    into = "BTreeMap<GuestId, TableId>"
)]
pub struct Seating {
    /// `tables[g]` is the table of guest `g`.
    tables: Vec<TableId>,
}

impl Seating {
    pub(crate) fn new(tables: Vec<TableId>) -> Self {
        Self { tables }
    }

    /// Table assigned to `guest`, or `None` if the guest is out of range.
    pub fn table_of(&self, guest: GuestId) -> Option<TableId> {
        self.tables.get(guest).copied()
    }

    /// Number of seated guests.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// `(guest, table)` pairs in guest order.
    pub fn iter(&self) -> impl Iterator<Item = (GuestId, TableId)> + '_ {
        self.tables.iter().copied().enumerate()
    }

    /// Guests grouped by occupied table, both ascending.
    pub fn tables(&self) -> BTreeMap<TableId, Vec<GuestId>> {
        let mut grouped: BTreeMap<TableId, Vec<GuestId>> = BTreeMap::new();
        for (guest, table) in self.iter() {
            grouped.entry(table).or_default().push(guest);
        }
        grouped
    }

    /// The table of every guest, indexed by guest.
    pub fn as_slice(&self) -> &[TableId] {
        &self.tables
    }

    /// Returns true if no pair in `conflicts` shares a table.
    ///
    /// Pairs naming an unseated guest, and self-conflicts, are ignored just as
    /// the search ignores them.
    pub fn satisfies(&self, conflicts: &[(GuestId, GuestId)]) -> bool {
        conflicts.iter().all(|&(a, b)| {
            a == b
                || match (self.table_of(a), self.table_of(b)) {
                    (Some(ta), Some(tb)) => ta != tb,
                    _ => true,
                }
        })
    }
}

impl fmt::Display for Seating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (guest, table) in self.iter() {
            if guest > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{guest}: {table}")?;
        }
        write!(f, "}}")
    }
}

impl From<Seating> for BTreeMap<GuestId, TableId> {
    fn from(seating: Seating) -> Self {
        seating.iter().collect()
    }
}

impl TryFrom<BTreeMap<GuestId, TableId>> for Seating {
    type Error = SolveError;

    /// Accepts only dense maps whose keys are exactly `0..len`.
    fn try_from(map: BTreeMap<GuestId, TableId>) -> Result<Self, Self::Error> {
        let mut tables = Vec::with_capacity(map.len());
        for (expected, (guest, table)) in map.into_iter().enumerate() {
            if guest != expected {
                return Err(SolveError::SparseSeating { missing: expected });
            }
            tables.push(table);
        }
        Ok(Self { tables })
    }
}
