// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the seating solver.
//!
//! An infeasible or aborted search is a `SearchResult`, never an error.
//! Errors only arise from strict input validation and problem-file loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::GuestId;

#[derive(Debug, Error)]
pub enum SolveError {
    /// Strict mode: a conflict pairs a guest with itself.
    #[error("guest {guest} is listed as conflicting with itself")]
    SelfConflict { guest: GuestId },

    /// Strict mode: a conflict names a guest outside `0..guests`.
    #[error("conflict names guest {guest}, but only guests 0..{guests} exist")]
    GuestOutOfRange { guest: GuestId, guests: usize },

    /// A seating map does not cover every guest from 0 upwards.
    #[error("seating has no table for guest {missing}")]
    SparseSeating { missing: GuestId },

    #[error("failed to read problem file {path}")]
    ReadProblem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unrecognized problem format {0:?} (expected toml or json)")]
    UnknownFormat(String),

    #[error("invalid TOML problem: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON problem: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolveError>;
