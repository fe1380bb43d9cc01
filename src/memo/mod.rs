// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tier 1: MEMO data (immutable, computed once per search).
//!
//! - Symmetric conflict adjacency lists

pub mod conflicts;

pub use conflicts::{ConflictGraph, IgnoredConflicts};
