// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact backtracking search for seating guests at tables.
//!
//! Given `N` guests, `C` tables, and a list of pairs of guests who must not
//! share a table, find one seating that keeps every conflicting pair apart,
//! or report that none exists.
//!
//! ```
//! use seating_search::{solve, SearchResult};
//!
//! match solve(4, 2, &[(0, 2), (1, 3)]) {
//!     SearchResult::Seated(seating) => println!("{seating}"), // {0: 0, 1: 0, 2: 1, 3: 1}
//!     SearchResult::Infeasible => println!("no seating"),
//!     SearchResult::Aborted { .. } => unreachable!("no step limit was set"),
//! }
//! ```
//!
//! # Architecture
//!
//! The implementation uses a two-tier memory model:
//!
//! ## Tier 1: MEMO Data (Immutable)
//!
//! Built once per search and never changed while searching:
//! - Guest and table counts
//! - Symmetric conflict adjacency lists
//!
//! ## Tier 2: DYNAMIC Data (Mutable)
//!
//! Search state that changes during search, tracked on the trail:
//! - Trail - records seat changes for backtracking
//! - Seats - the current partial seating
//!
//! # Search Algorithm
//!
//! A single predicate, `SeatGuestPredicate`, runs once per guest in
//! increasing guest order and offers tables in increasing table order. A
//! table is legal when no already-seated guest at it conflicts with the
//! current guest. The engine's explicit choice-point stack backtracks on
//! dead ends, rewinding the trail so each undo is one explicit step.
//!
//! The first complete seating found is returned, which makes the result
//! deterministic: it is the lexicographically smallest valid seating.
//!
//! # Concurrency
//!
//! There is no global state. Every call builds its own context and engine,
//! so independent searches can run on separate threads.

pub mod context;
pub mod engine;
pub mod error;
pub mod memo;
pub mod predicates;
pub mod problem;
pub mod solver;
pub mod state;
pub mod trail;

/// Identifies a guest, in `0..N`.
pub type GuestId = usize;

/// Identifies a table, in `0..C`.
pub type TableId = usize;

// Re-export commonly used types
pub use context::SeatingContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use error::SolveError;
pub use problem::{Problem, ProblemFormat};
pub use solver::{solve, SearchResult, SolveOptions, SolveReport, Solver};
pub use state::{Seating, SearchStatistics};
pub use trail::Trail;
