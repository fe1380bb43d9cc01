// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the search engine driving the seating predicate.
//!
//! These tests validate that the engine correctly:
//! - Enumerates every valid seating, in lexicographic order, on resume
//! - Restores seats via the trail between alternatives
//! - Counts solutions with a counting predicate
//! - Stops at the step limit

mod common;

use common::brute_force;
use seating_search::context::SeatingContext;
use seating_search::engine::{EngineBuilder, SearchStatus};
use seating_search::predicates::{FailPredicate, SeatGuestPredicate, SuspendPredicate};
use seating_search::state::{Counters, Statistics};
use seating_search::TableId;

fn enumerate(guests: usize, tables: usize, conflicts: &[(usize, usize)]) -> Vec<Vec<TableId>> {
    let mut ctx = SeatingContext::new(guests, tables, conflicts);
    let mut engine = EngineBuilder::new()
        .add(Box::new(SeatGuestPredicate))
        .terminal(Box::new(SuspendPredicate))
        .build();

    let mut found = Vec::new();
    loop {
        match engine.search(&mut ctx) {
            SearchStatus::Suspended(next) => {
                let seating = ctx.seating().expect("suspended with a partial seating");
                found.push(seating.as_slice().to_vec());
                engine = next;
            }
            SearchStatus::Exhausted { .. } => return found,
            SearchStatus::Aborted { .. } => panic!("no step limit was set"),
        }
    }
}

#[test]
fn test_resume_enumerates_all_seatings_in_order() {
    let seatings = enumerate(3, 2, &[(0, 1)]);
    assert_eq!(
        seatings,
        vec![vec![0, 1, 0], vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 1]]
    );
}

#[test]
fn test_resume_moves_past_completed_seating() {
    assert_eq!(enumerate(2, 2, &[(0, 1)]), vec![vec![0, 1], vec![1, 0]]);
    assert_eq!(enumerate(0, 3, &[]), vec![Vec::<TableId>::new()]);
    assert!(enumerate(2, 1, &[(0, 1)]).is_empty());
}

#[test]
fn test_first_enumerated_matches_brute_force() {
    let conflicts = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
    let seatings = enumerate(4, 3, &conflicts);
    assert_eq!(seatings.first().cloned(), brute_force(4, 3, &conflicts));

    let mut sorted = seatings.clone();
    sorted.sort();
    assert_eq!(seatings, sorted);
}

#[test]
fn test_counting_predicate_counts_every_solution() {
    // Proper 3-colourings of a 4-cycle.
    let conflicts = [(0, 1), (1, 2), (2, 3), (3, 0)];
    let mut ctx = SeatingContext::new(4, 3, &conflicts);
    let engine = EngineBuilder::new()
        .add(Box::new(SeatGuestPredicate))
        .add(Statistics::counting_predicate(Counters::Solutions, None))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
    assert_eq!(ctx.statistics.get(Counters::Solutions), 18);
    // Exhaustion rewinds every placement.
    assert_eq!(
        ctx.statistics.get(Counters::Placements),
        ctx.statistics.get(Counters::Undos)
    );
    assert_eq!(ctx.seated_count(), 0);
    assert!(ctx.trail.is_empty());
}

#[test]
fn test_filtered_counting_predicate() {
    fn guest_zero_alone(ctx: &SeatingContext) -> bool {
        (1..ctx.memo.guests).all(|guest| ctx.table_of(guest) != ctx.table_of(0))
    }

    let mut ctx = SeatingContext::new(3, 2, &[(1, 2)]);
    let engine = EngineBuilder::new()
        .add(Box::new(SeatGuestPredicate))
        .add(Statistics::counting_predicate(
            Counters::Solutions,
            Some(guest_zero_alone),
        ))
        .terminal(Box::new(FailPredicate))
        .build();

    assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
    // Guests 1 and 2 must be apart on two tables, so guest 0 always has company.
    assert_eq!(ctx.statistics.get(Counters::Solutions), 0);
}

#[test]
fn test_step_limit_aborts_and_reports_counts() {
    let mut ctx = SeatingContext::new(6, 2, &[(0, 1), (1, 2), (2, 0)]);
    let engine = EngineBuilder::new()
        .add(Box::new(SeatGuestPredicate))
        .step_limit(Some(7))
        .terminal(Box::new(SuspendPredicate))
        .build();

    match engine.search(&mut ctx) {
        SearchStatus::Aborted { tries, retries } => assert_eq!(tries + retries, 7),
        other => panic!("expected abort, got {:?}", other),
    }
}
