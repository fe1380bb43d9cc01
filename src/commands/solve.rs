// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solve command.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, ValueEnum};
use seating_search::{GuestId, Problem, ProblemFormat, SearchResult, SolveReport};
use serde_json::json;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Toml,
    Json,
}

impl From<FormatArg> for ProblemFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Toml => ProblemFormat::Toml,
            FormatArg::Json => ProblemFormat::Json,
        }
    }
}

#[derive(Debug, Args)]
pub struct SolveArgs {
    /// Problem file (TOML or JSON); flags below override its values
    pub problem: Option<PathBuf>,

    /// Problem file format (auto-detect from extension if not specified)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Number of guests
    #[arg(short = 'n', long)]
    pub guests: Option<usize>,

    /// Number of tables
    #[arg(short = 'c', long)]
    pub tables: Option<usize>,

    /// A pair of guests who must not share a table, as A,B (repeatable)
    #[arg(long = "conflict", value_name = "A,B", value_parser = parse_conflict)]
    pub conflicts: Vec<(GuestId, GuestId)>,

    /// Reject self-conflicts and conflicts naming unknown guests
    #[arg(long)]
    pub strict: bool,

    /// Give up after this many search steps
    #[arg(long)]
    pub step_limit: Option<u64>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_conflict(s: &str) -> Result<(GuestId, GuestId), String> {
    let (a, b) = s
        .split_once(',')
        .ok_or_else(|| format!("expected A,B but got {s:?}"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<GuestId>()
            .map_err(|err| format!("invalid guest {part:?}: {err}"))
    };
    Ok((parse(a)?, parse(b)?))
}

/// Merge the problem file (if any) with command-line overrides.
fn build_problem(args: &SolveArgs) -> anyhow::Result<Problem> {
    let mut problem = match &args.problem {
        Some(path) => Problem::load(path, args.format.map(Into::into))
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            let guests = args
                .guests
                .context("--guests is required without a problem file")?;
            let tables = args
                .tables
                .context("--tables is required without a problem file")?;
            Problem::new(guests, tables)
        }
    };

    if let Some(guests) = args.guests {
        problem.guests = guests;
    }
    if let Some(tables) = args.tables {
        problem.tables = tables;
    }
    problem.conflicts.extend(args.conflicts.iter().copied());
    problem.strict |= args.strict;
    if args.step_limit.is_some() {
        problem.step_limit = args.step_limit;
    }
    Ok(problem)
}

pub(crate) fn render_text(result: &SearchResult) -> String {
    match result {
        SearchResult::Seated(seating) => seating.to_string(),
        SearchResult::Infeasible => "infeasible".to_string(),
        SearchResult::Aborted { steps } => format!("aborted after {steps} steps"),
    }
}

pub(crate) fn render_json(report: &SolveReport) -> serde_json::Value {
    let (status, seating) = match &report.result {
        SearchResult::Seated(seating) => ("seated", json!(seating)),
        SearchResult::Infeasible => ("infeasible", serde_json::Value::Null),
        SearchResult::Aborted { .. } => ("aborted", serde_json::Value::Null),
    };
    json!({
        "status": status,
        "seating": seating,
        "statistics": report.statistics,
    })
}

/// 0 when seated, 1 when infeasible, 2 when the step limit ran out.
fn exit_status(result: &SearchResult) -> u8 {
    match result {
        SearchResult::Seated(_) => 0,
        SearchResult::Infeasible => 1,
        SearchResult::Aborted { .. } => 2,
    }
}

pub fn run(args: SolveArgs) -> anyhow::Result<ExitCode> {
    let problem = build_problem(&args)?;
    tracing::info!(
        guests = problem.guests,
        tables = problem.tables,
        conflicts = problem.conflicts.len(),
        "solving"
    );

    let report = problem.solver().run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render_json(&report))?);
    } else {
        println!("{}", render_text(&report.result));
    }

    Ok(ExitCode::from(exit_status(&report.result)))
}
