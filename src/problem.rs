// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem files.
//!
//! A problem can be written as TOML:
//!
//! ```toml
//! guests = 4
//! tables = 2
//! conflicts = [[0, 2], [1, 3]]
//! # optional
//! strict = false
//! step_limit = 10000
//! ```
//!
//! or as the equivalent JSON object.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolveError};
use crate::solver::{SolveOptions, Solver};
use crate::GuestId;

/// Serialization format of a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemFormat {
    Toml,
    Json,
}

impl ProblemFormat {
    /// Guess the format from a file extension, defaulting to TOML.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            None => Ok(ProblemFormat::Toml),
            Some(ext) => ext.parse(),
        }
    }
}

impl FromStr for ProblemFormat {
    type Err = SolveError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ProblemFormat::Toml),
            "json" => Ok(ProblemFormat::Json),
            _ => Err(SolveError::UnknownFormat(s.to_string())),
        }
    }
}

/// A seating problem plus the options to solve it with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub guests: usize,
    pub tables: usize,
    #[serde(default)]
    pub conflicts: Vec<(GuestId, GuestId)>,
    #[serde(default)]
    pub strict: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_limit: Option<u64>,
}

impl Problem {
    pub fn new(guests: usize, tables: usize) -> Self {
        Self {
            guests,
            tables,
            ..Self::default()
        }
    }

    /// Read a problem file. `format` overrides detection by extension.
    pub fn load(path: &Path, format: Option<ProblemFormat>) -> Result<Self> {
        let format = match format {
            Some(format) => format,
            None => ProblemFormat::from_path(path)?,
        };
        let text = fs::read_to_string(path).map_err(|source| SolveError::ReadProblem {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?format, "loaded problem file");
        Self::parse(&text, format)
    }

    pub fn parse(text: &str, format: ProblemFormat) -> Result<Self> {
        Ok(match format {
            ProblemFormat::Toml => toml::from_str(text)?,
            ProblemFormat::Json => serde_json::from_str(text)?,
        })
    }

    pub fn options(&self) -> SolveOptions {
        SolveOptions {
            step_limit: self.step_limit,
            strict: self.strict,
        }
    }

    pub fn solver(&self) -> Solver {
        Solver::new(self.guests, self.tables, self.conflicts.iter().copied())
            .with_options(self.options())
    }
}
