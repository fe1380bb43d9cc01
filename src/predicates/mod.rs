// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the seating search.
//!
//! # Organization
//!
//! - `seat`: SeatGuestPredicate, the guest-by-guest choice point
//! - Built-in terminals: `FailPredicate`, `SuspendPredicate`

pub mod seat;

pub use seat::SeatGuestPredicate;

use crate::context::SeatingContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. Ending a sequence with
/// it explores every alternative, which is useful for counting solutions via
/// a counting predicate placed just before it.
///
/// # Example
///
/// ```
/// use seating_search::context::SeatingContext;
/// use seating_search::engine::{EngineBuilder, SearchStatus};
/// use seating_search::predicates::{FailPredicate, SeatGuestPredicate};
/// use seating_search::state::{Counters, Statistics};
///
/// let mut ctx = SeatingContext::new(2, 2, &[(0, 1)]);
/// let engine = EngineBuilder::new()
///     .add(Box::new(SeatGuestPredicate))
///     .add(Statistics::counting_predicate(Counters::Solutions, None))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
/// assert_eq!(ctx.statistics.get(Counters::Solutions), 2);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Stops the search with the current state intact. The solver ends its
/// predicate sequence with this so the first complete seating is kept.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
