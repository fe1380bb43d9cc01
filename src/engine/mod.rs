// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail to restore state on
//! backtracking, so predicates never undo their own changes.
//!
//! # Architecture
//!
//! The engine maintains an explicit stack of predicate execution states
//! instead of recursing. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Next choice index (when in choice mode)
//! - The trail checkpoint to rewind to before each attempt
//!
//! The execution model is WAM-like:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1) in order
//! 5. If Failure: backtrack to previous stack entry
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use seating_search::context::SeatingContext;
//! use seating_search::engine::{EngineBuilder, SearchStatus};
//! use seating_search::predicates::{SeatGuestPredicate, SuspendPredicate};
//!
//! let mut ctx = SeatingContext::new(2, 2, &[(0, 1)]);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(SeatGuestPredicate))
//!     .terminal(Box::new(SuspendPredicate))
//!     .build();
//!
//! match engine.search(&mut ctx) {
//!     SearchStatus::Suspended(_engine) => {
//!         assert_eq!(ctx.table_of(1), Some(1));
//!     }
//!     other => panic!("expected a seating, got {:?}", other),
//! }
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SeatingContext;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Next choice to try (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// How a call to `SearchEngine::search` ended.
#[derive(Debug)]
pub enum SearchStatus {
    /// A terminal predicate suspended; the context holds the current state.
    /// Calling `search` again on the engine resumes with the next alternative.
    Suspended(SearchEngine),

    /// Backtracked past the first predicate; every alternative failed.
    Exhausted { tries: u64, retries: u64 },

    /// The step limit was reached before the search finished.
    Aborted { tries: u64, retries: u64 },
}

/// Search engine that coordinates predicate execution and backtracking.
#[derive(Debug)]
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Maximum number of predicate calls (try + retry), if bounded.
    step_limit: Option<u64>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls.
    retry_count: u64,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Prefer `EngineBuilder`, which guarantees the sequence ends with a
    /// terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::new(),
            step_limit: None,
            try_count: 0,
            retry_count: 0,
        }
    }

    /// Bound the total number of predicate calls.
    pub fn with_step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Run the search until it suspends, exhausts, or runs out of steps.
    ///
    /// Consumes the engine. A suspended engine is handed back inside
    /// `SearchStatus::Suspended` and can be resumed by calling `search` again
    /// with the same context: the suspending predicate is treated as having
    /// failed, so the search continues with the next alternative.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL
    /// or SUSPEND), or if a retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SeatingContext) -> SearchStatus {
        if self.stack.is_empty() {
            if self.predicates.is_empty() {
                return self.exhausted();
            }
            self.stack
                .push(StackEntry::new(0, 0, ctx.trail.checkpoint()));
        } else {
            // Resuming after Suspend: the suspending entry fails.
            self.stack.pop();
        }

        loop {
            let Some(entry) = self.stack.last_mut() else {
                tracing::debug!(
                    tries = self.try_count,
                    retries = self.retry_count,
                    "search exhausted"
                );
                return self.exhausted();
            };

            // Rewind trail to this entry's checkpoint
            ctx.rewind_to(entry.trail_checkpoint);

            if entry.in_choice_mode && entry.current_choice >= entry.num_choices {
                // All choices tried: backtrack
                self.stack.pop();
                continue;
            }

            if let Some(limit) = self.step_limit {
                if self.try_count + self.retry_count >= limit {
                    tracing::debug!(limit, "step limit reached");
                    return SearchStatus::Aborted {
                        tries: self.try_count,
                        retries: self.retry_count,
                    };
                }
            }

            let pred_idx = entry.predicate_index;
            let round = entry.round;
            let retrying = entry.in_choice_mode;

            let result = if retrying {
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                self.predicates[pred_idx].retry_pred(ctx, round, choice)
            } else {
                self.try_count += 1;
                self.predicates[pred_idx].try_pred(ctx, round)
            };

            if !retrying
                && matches!(
                    result,
                    PredicateResult::Success | PredicateResult::SuccessSamePredicate
                )
            {
                // A deterministic success leaves no choice point: backtracking pops it.
                if let Some(entry) = self.stack.last_mut() {
                    entry.in_choice_mode = true;
                    entry.current_choice = 0;
                    entry.num_choices = 0;
                }
            }

            match (retrying, result) {
                (_, PredicateResult::Success) => {
                    self.push_next_predicate(ctx, pred_idx);
                }
                (_, PredicateResult::SuccessSamePredicate) => {
                    self.stack
                        .push(StackEntry::new(pred_idx, round + 1, ctx.trail.checkpoint()));
                }
                (false, PredicateResult::Failure) => {
                    self.stack.pop();
                }
                (true, PredicateResult::Failure) => {
                    // Try next choice (loop continues)
                }
                (false, PredicateResult::Choices(n)) => {
                    if let Some(entry) = self.stack.last_mut() {
                        entry.in_choice_mode = true;
                        entry.current_choice = 0;
                        entry.num_choices = n;
                        entry.trail_checkpoint = ctx.trail.checkpoint();
                    }
                }
                (false, PredicateResult::Suspend) => {
                    return SearchStatus::Suspended(self);
                }
                (true, PredicateResult::Choices(_) | PredicateResult::Suspend) => {
                    panic!(
                        "{}::retry_pred returned invalid result: {:?}",
                        self.predicates[pred_idx].name(),
                        result
                    );
                }
            }
        }
    }

    /// Push a new stack entry for the predicate after `current`.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SeatingContext, current: usize) {
        let next_index = current + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All predicate sequences must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.checkpoint()));
    }

    fn exhausted(&self) -> SearchStatus {
        SearchStatus::Exhausted {
            tries: self.try_count,
            retries: self.retry_count,
        }
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Builder for predicate sequences that always end in a terminal predicate.
#[derive(Debug, Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    step_limit: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the sequence.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Bound the total number of predicate calls.
    pub fn step_limit(mut self, step_limit: Option<u64>) -> Self {
        self.step_limit = step_limit;
        self
    }

    /// Close the sequence with a terminal predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: Box<T>) -> TerminatedBuilder {
        self.predicates.push(predicate);
        TerminatedBuilder { inner: self }
    }
}

/// An `EngineBuilder` whose sequence has been closed; only `build` remains.
#[derive(Debug)]
pub struct TerminatedBuilder {
    inner: EngineBuilder,
}

impl TerminatedBuilder {
    pub fn build(self) -> SearchEngine {
        SearchEngine::new(self.inner.predicates).with_step_limit(self.inner.step_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicates::{FailPredicate, SuspendPredicate};

    /// Test predicate that always succeeds.
    #[derive(Debug)]
    struct AlwaysSucceed;

    impl Predicate for AlwaysSucceed {
        fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
            PredicateResult::Success
        }
    }

    /// Test predicate that always fails.
    #[derive(Debug)]
    struct AlwaysFail;

    impl Predicate for AlwaysFail {
        fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
            PredicateResult::Failure
        }
    }

    /// Seats guest 0 at each of `n` tables in turn.
    #[derive(Debug)]
    struct SeatFirstGuest(usize);

    impl Predicate for SeatFirstGuest {
        fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(self.0)
        }

        fn retry_pred(&mut self, ctx: &mut SeatingContext, _round: usize, choice: usize) -> PredicateResult {
            ctx.seat(0, choice);
            PredicateResult::Success
        }
    }

    /// Broken predicate that suspends from retry_pred.
    #[derive(Debug)]
    struct SuspendOnRetry;

    impl Predicate for SuspendOnRetry {
        fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
            PredicateResult::Choices(1)
        }

        fn retry_pred(&mut self, _ctx: &mut SeatingContext, _round: usize, _choice: usize) -> PredicateResult {
            PredicateResult::Suspend
        }
    }

    fn context() -> SeatingContext {
        SeatingContext::new(1, 3, &[])
    }

    #[test]
    fn test_simple_success_with_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        match engine.search(&mut ctx) {
            SearchStatus::Suspended(engine) => {
                assert_eq!(engine.statistics(), (2, 0)); // AlwaysSucceed + Suspend, no retries
            }
            other => panic!("expected suspension, got {:?}", other),
        }
    }

    #[test]
    fn test_immediate_failure() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(AlwaysFail))
            .terminal(Box::new(SuspendPredicate))
            .build();

        assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
    }

    #[test]
    fn test_empty_predicates() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![]);
        assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
    }

    #[test]
    fn test_resume_enumerates_choices_in_order() {
        let mut ctx = context();
        let mut engine = EngineBuilder::new()
            .add(Box::new(SeatFirstGuest(3)))
            .terminal(Box::new(SuspendPredicate))
            .build();

        for expected in 0..3 {
            engine = match engine.search(&mut ctx) {
                SearchStatus::Suspended(engine) => engine,
                other => panic!("expected suspension, got {:?}", other),
            };
            assert_eq!(ctx.table_of(0), Some(expected));
        }

        assert!(matches!(engine.search(&mut ctx), SearchStatus::Exhausted { .. }));
        // Exhaustion rewinds everything
        assert_eq!(ctx.table_of(0), None);
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn test_resume_backtracks_through_deterministic_success() {
        let mut ctx = context();
        let mut engine = EngineBuilder::new()
            .add(Box::new(AlwaysSucceed))
            .add(Box::new(SeatFirstGuest(2)))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let mut seen = Vec::new();
        let (tries, retries) = loop {
            engine = match engine.search(&mut ctx) {
                SearchStatus::Suspended(engine) => {
                    seen.push(ctx.table_of(0));
                    engine
                }
                SearchStatus::Exhausted { tries, retries } => break (tries, retries),
                other => panic!("expected suspension or exhaustion, got {:?}", other),
            };
        };

        assert_eq!(seen, vec![Some(0), Some(1)]);
        // AlwaysSucceed and SeatFirstGuest tried once; the tail twice per seating
        assert_eq!((tries, retries), (6, 2));
        assert!(ctx.trail.is_empty());
    }

    #[test]
    fn test_fail_terminal_behind_deterministic_success_exhausts() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(SeatFirstGuest(3)))
            .add(Box::new(AlwaysSucceed))
            .terminal(Box::new(FailPredicate))
            .build();

        match engine.search(&mut ctx) {
            // 1 + 3 * (AlwaysSucceed + Fail) tries, one retry per table
            SearchStatus::Exhausted { tries, retries } => assert_eq!((tries, retries), (7, 3)),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_fail_terminal_exhausts_all_choices() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(SeatFirstGuest(3)))
            .terminal(Box::new(FailPredicate))
            .build();

        let status = engine.search(&mut ctx);
        assert!(matches!(status, SearchStatus::Exhausted { .. }));
        assert_eq!(ctx.trail.len(), 0);
    }

    #[test]
    fn test_step_limit_aborts() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(SeatFirstGuest(3)))
            .step_limit(Some(3))
            .terminal(Box::new(FailPredicate))
            .build();

        // try + retry(0) + Fail.try = 3 steps, then the budget is spent
        assert!(matches!(engine.search(&mut ctx), SearchStatus::Aborted { .. }));
    }

    #[test]
    #[should_panic(expected = "Invalid predicate sequence")]
    fn test_invalid_program_without_terminal() {
        let mut ctx = context();
        let engine = SearchEngine::new(vec![
            Box::new(AlwaysSucceed), // Missing terminal predicate!
        ]);

        let _ = engine.search(&mut ctx); // Should panic
    }

    #[test]
    #[should_panic(expected = "returned invalid result")]
    fn test_retry_cannot_suspend() {
        let mut ctx = context();
        let engine = EngineBuilder::new()
            .add(Box::new(SuspendOnRetry))
            .terminal(Box::new(SuspendPredicate))
            .build();

        let _ = engine.search(&mut ctx);
    }
}
