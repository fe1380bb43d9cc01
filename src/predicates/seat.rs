// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! SeatGuestPredicate - places one guest per round.
//!
//! Round `g` chooses a table for guest `g`. Guests are therefore placed in
//! increasing id order, and for each guest the tables are offered in
//! increasing id order, so the first complete seating found is the
//! lexicographically smallest valid one.

use crate::context::SeatingContext;
use crate::engine::{Predicate, PredicateResult};
use crate::state::Counters;

/// SeatGuestPredicate runs for rounds `0..=guests`.
///
/// # Choices
///
/// For round `g < guests`, choice `t` tries table `t`:
/// - Choice 0 → table 0
/// - ...
/// - Choice tables-1 → table tables-1
///
/// A choice fails without touching the state if a guest already seated at
/// that table conflicts with `g`. Otherwise `g` is seated (trail-recorded)
/// and the predicate moves on to the next round.
///
/// Round `guests` means everyone is seated and succeeds immediately.
#[derive(Debug)]
pub struct SeatGuestPredicate;

impl Predicate for SeatGuestPredicate {
    fn try_pred(&mut self, ctx: &mut SeatingContext, round: usize) -> PredicateResult {
        if round >= ctx.memo.guests {
            return PredicateResult::Success;
        }
        match ctx.memo.tables {
            0 => PredicateResult::Failure,
            tables => PredicateResult::Choices(tables),
        }
    }

    fn retry_pred(&mut self, ctx: &mut SeatingContext, round: usize, choice: usize) -> PredicateResult {
        let (guest, table) = (round, choice);
        if !ctx.can_seat(guest, table) {
            ctx.statistics.increment_counter(Counters::Rejections);
            return PredicateResult::Failure;
        }
        ctx.seat(guest, table);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "SeatGuest"
    }
}
