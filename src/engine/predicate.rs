// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicate trait for non-deterministic search.
//!
//! The search engine works by trying predicates in sequence. Each predicate
//! represents a choice point in the search space. Predicates can succeed,
//! fail, or offer numbered choices that the engine explores in order.
//!
//! # Example
//!
//! ```
//! use seating_search::engine::{Predicate, PredicateResult};
//! use seating_search::context::SeatingContext;
//!
//! #[derive(Debug)]
//! struct TwoWay;
//!
//! impl Predicate for TwoWay {
//!     fn try_pred(&mut self, _ctx: &mut SeatingContext, _round: usize) -> PredicateResult {
//!         // Return Choices(2) to try two alternatives
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, _ctx: &mut SeatingContext, _round: usize, choice: usize) -> PredicateResult {
//!         if choice < 2 {
//!             PredicateResult::Success  // This choice works
//!         } else {
//!             PredicateResult::Failure  // No more options
//!         }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "TwoWay"
//!     }
//! }
//! ```

use std::fmt::Debug;

use crate::context::SeatingContext;

/// Result of attempting a predicate.
///
/// Predicates can return:
/// - `Success`: Move to next predicate in the sequence
/// - `SuccessSamePredicate`: Stay at same predicate, increment round (for iterative predicates)
/// - `Failure`: Backtrack to previous predicate
/// - `Choices(n)`: Predicate has n choices to explore via retry_pred
/// - `Suspend`: Pause execution with the current state intact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Predicate succeeded. Move to next predicate in sequence.
    Success,

    /// Predicate succeeded but stay at same predicate with next round.
    /// Allows a single predicate to execute multiple times (e.g., once per guest).
    SuccessSamePredicate,

    /// Predicate has no (more) valid choices. Backtrack to previous predicate.
    Failure,

    /// Predicate has multiple choices to explore.
    /// Engine will call retry_pred(round, choice) for each choice in 0..n.
    Choices(usize),

    /// Suspend execution. Engine returns control with state preserved.
    Suspend,
}

/// A terminal predicate that ends a predicate sequence.
///
/// Terminal predicates are FAIL or SUSPEND - they never return Success.
/// `EngineBuilder::terminal` only accepts these, so every sequence the
/// builder produces ends properly.
pub trait TerminalPredicate: Predicate {}

/// Trait for search predicates in the non-deterministic engine.
///
/// # Lifecycle
///
/// 1. Engine calls `try_pred` when first encountering the predicate
/// 2. If Success: engine advances to next predicate
/// 3. If Choices(n): engine calls `retry_pred` for choice 0, 1, ... in order
/// 4. If Failure: engine backtracks to the most recent unexplored choice
///
/// # Trail Integration
///
/// Predicates modify `SeatingContext` through its trail-recording methods.
/// Before every `try_pred` or `retry_pred` call the engine rewinds the
/// context to the checkpoint of the current stack entry, so a choice always
/// starts from the state that existed before any sibling choice was tried.
pub trait Predicate: Debug {
    /// Try this predicate for a given round.
    ///
    /// The round starts at 0 and increments each time the predicate returns
    /// `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SeatingContext, round: usize) -> PredicateResult;

    /// Retry this predicate with a specific choice.
    ///
    /// Called after try_pred returns Choices(n), for each choice in 0..n.
    ///
    /// Can return:
    /// - `Success`: This choice succeeded, move to next predicate
    /// - `SuccessSamePredicate`: This choice succeeded, stay at this predicate
    /// - `Failure`: This choice failed, try next choice (or backtrack if no more)
    ///
    /// Note: retry_pred cannot return Choices or Suspend (we're already in choice mode).
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SeatingContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        // Predicates that return Choices must implement this.
        panic!("{}::retry_pred should never be called", self.name());
    }

    /// Get a name for this predicate (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
