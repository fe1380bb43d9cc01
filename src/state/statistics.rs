// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by the context's own seat bookkeeping.

use crate::context::SeatingContext;
use crate::engine::{Predicate, PredicateResult};
use serde::Serialize;
use strum::EnumCount;

#[derive(EnumCount, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// A guest was committed to a table.
    Placements,
    /// A committed seat was undone on backtrack.
    Undos,
    /// A candidate table was skipped because a seated neighbour was there.
    Rejections,
    /// A complete seating reached the end of the predicate sequence.
    Solutions,
}

#[derive(Debug, Default)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SeatingContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub(crate) fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }
}

/// Counters reported to callers after a search.
///
/// `tries` and `retries` are the engine's predicate call counts; together
/// they are the step count a step limit is measured against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStatistics {
    pub placements: u64,
    pub undos: u64,
    pub rejections: u64,
    pub solutions: u64,
    pub tries: u64,
    pub retries: u64,
}

impl SearchStatistics {
    pub(crate) fn collect(statistics: &Statistics, (tries, retries): (u64, u64)) -> Self {
        Self {
            placements: statistics.get(Counters::Placements),
            undos: statistics.get(Counters::Undos),
            rejections: statistics.get(Counters::Rejections),
            solutions: statistics.get(Counters::Solutions),
            tries,
            retries,
        }
    }

    /// Total predicate calls made by the engine.
    pub fn steps(&self) -> u64 {
        self.tries + self.retries
    }
}

#[derive(Debug)]
struct CountingPredicate {
    filter: fn(&SeatingContext) -> bool,
    counter: Counters,
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}
