// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search results and bookkeeping that outlive a single search step.

pub mod seating;
pub mod statistics;

pub use seating::Seating;
pub use statistics::{Counters, SearchStatistics, Statistics};
