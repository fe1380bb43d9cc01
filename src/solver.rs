// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Seating solver: the public entry points.
//!
//! `solve` is the plain contract: guests, tables, and conflicts in, a
//! `SearchResult` out. `Solver` adds options (a step limit, strict input
//! validation) and reports search statistics.
//!
//! Each call builds its own `SeatingContext` and `SearchEngine`, so calls
//! are independent and may run concurrently on separate threads.

use crate::context::SeatingContext;
use crate::engine::{EngineBuilder, SearchStatus};
use crate::error::SolveError;
use crate::predicates::{SeatGuestPredicate, SuspendPredicate};
use crate::state::{Counters, Seating, SearchStatistics, Statistics};
use crate::GuestId;

/// Outcome of a seating search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// Every guest is seated and no conflicting pair shares a table.
    Seated(Seating),

    /// No valid seating exists.
    Infeasible,

    /// The step limit ran out before the search could decide.
    Aborted { steps: u64 },
}

impl SearchResult {
    pub fn is_seated(&self) -> bool {
        matches!(self, SearchResult::Seated(_))
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, SearchResult::Infeasible)
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchResult::Aborted { .. })
    }

    /// The seating, if one was found.
    pub fn seating(&self) -> Option<&Seating> {
        match self {
            SearchResult::Seated(seating) => Some(seating),
            _ => None,
        }
    }

    pub fn into_seating(self) -> Option<Seating> {
        match self {
            SearchResult::Seated(seating) => Some(seating),
            _ => None,
        }
    }
}

/// Knobs for a `Solver` run. The default reproduces `solve` exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveOptions {
    /// Abort after this many engine steps (predicate calls).
    pub step_limit: Option<u64>,

    /// Reject self-conflicts and out-of-range guests instead of ignoring them.
    pub strict: bool,
}

impl SolveOptions {
    pub fn with_step_limit(mut self, step_limit: u64) -> Self {
        self.step_limit = Some(step_limit);
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// A search result together with the counters gathered while finding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub result: SearchResult,
    pub statistics: SearchStatistics,
}

/// A seating problem ready to be searched.
///
/// # Example
///
/// ```
/// use seating_search::{SearchResult, SolveOptions, Solver};
///
/// let report = Solver::new(4, 2, [(0, 2), (1, 3)])
///     .with_options(SolveOptions::default().with_step_limit(1_000))
///     .run()
///     .unwrap();
/// assert_eq!(report.result.seating().unwrap().to_string(), "{0: 0, 1: 0, 2: 1, 3: 1}");
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    guests: usize,
    tables: usize,
    conflicts: Vec<(GuestId, GuestId)>,
    options: SolveOptions,
}

impl Solver {
    pub fn new(
        guests: usize,
        tables: usize,
        conflicts: impl IntoIterator<Item = (GuestId, GuestId)>,
    ) -> Self {
        Self {
            guests,
            tables,
            conflicts: conflicts.into_iter().collect(),
            options: SolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &SolveOptions {
        &self.options
    }

    /// Validate (in strict mode) and search.
    pub fn run(&self) -> Result<SolveReport, SolveError> {
        if self.options.strict {
            self.validate()?;
        }
        Ok(self.search())
    }

    /// Strict validation: every conflict names two distinct guests in range.
    pub fn validate(&self) -> Result<(), SolveError> {
        for &(a, b) in &self.conflicts {
            for guest in [a, b] {
                if guest >= self.guests {
                    return Err(SolveError::GuestOutOfRange {
                        guest,
                        guests: self.guests,
                    });
                }
            }
            if a == b {
                return Err(SolveError::SelfConflict { guest: a });
            }
        }
        Ok(())
    }

    fn search(&self) -> SolveReport {
        let _span = tracing::debug_span!("solve", guests = self.guests, tables = self.tables)
            .entered();

        let mut ctx = SeatingContext::new(self.guests, self.tables, &self.conflicts);
        let ignored = ctx.memo.conflicts.ignored();
        if ignored.total() > 0 {
            tracing::warn!(
                out_of_range = ignored.out_of_range,
                self_conflicts = ignored.self_conflicts,
                "ignoring conflicts that cannot affect the seating"
            );
        }
        tracing::debug!(
            conflicts = ctx.memo.conflicts.len(),
            step_limit = ?self.options.step_limit,
            "starting search"
        );

        let engine = EngineBuilder::new()
            .add(Box::new(SeatGuestPredicate))
            .add(Statistics::counting_predicate(Counters::Solutions, None))
            .step_limit(self.options.step_limit)
            .terminal(Box::new(SuspendPredicate))
            .build();

        let (result, engine_counts) = match engine.search(&mut ctx) {
            SearchStatus::Suspended(engine) => match ctx.seating() {
                Some(seating) => (SearchResult::Seated(seating), engine.statistics()),
                None => panic!(
                    "search suspended with {} of {} guests seated",
                    ctx.seated_count(),
                    self.guests
                ),
            },
            SearchStatus::Exhausted { tries, retries } => {
                (SearchResult::Infeasible, (tries, retries))
            }
            SearchStatus::Aborted { tries, retries } => (
                SearchResult::Aborted {
                    steps: tries + retries,
                },
                (tries, retries),
            ),
        };

        let statistics = SearchStatistics::collect(&ctx.statistics, engine_counts);
        tracing::info!(
            outcome = outcome_name(&result),
            placements = statistics.placements,
            undos = statistics.undos,
            rejections = statistics.rejections,
            steps = statistics.steps(),
            "search finished"
        );

        SolveReport { result, statistics }
    }
}

fn outcome_name(result: &SearchResult) -> &'static str {
    match result {
        SearchResult::Seated(_) => "seated",
        SearchResult::Infeasible => "infeasible",
        SearchResult::Aborted { .. } => "aborted",
    }
}

/// Seat `guests` guests at `tables` tables so no conflicting pair shares one.
///
/// Guests are placed in increasing id order, each at the lowest-numbered
/// table that does not clash with an already-seated guest, backtracking on
/// dead ends. The result is deterministic: the lexicographically smallest
/// valid seating, or `SearchResult::Infeasible`.
///
/// Conflicts are undirected. Pairs naming a guest outside `0..guests`, and
/// self-conflicts, have no effect.
///
/// # Example
///
/// ```
/// use seating_search::{solve, SearchResult};
///
/// let result = solve(4, 2, &[(0, 2), (1, 3)]);
/// assert_eq!(result.seating().unwrap().as_slice(), &[0, 0, 1, 1]);
///
/// assert_eq!(solve(3, 1, &[(0, 1), (1, 2)]), SearchResult::Infeasible);
/// ```
pub fn solve(guests: usize, tables: usize, conflicts: &[(GuestId, GuestId)]) -> SearchResult {
    Solver::new(guests, tables, conflicts.iter().copied())
        .search()
        .result
}
