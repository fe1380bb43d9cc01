// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `seating` - command-line driver for the seating solver.

mod commands;

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seating")]
#[command(author, version, about = "Seat guests at tables so that no conflicting pair shares one", long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv); RUST_LOG overrides it
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one seating problem
    Solve(commands::solve::SolveArgs),
    /// Run the two worked examples
    Demo,
    /// Simulate strong vs weak memory consistency between two workers
    Consistency(commands::consistency::ConsistencyArgs),
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve(args) => commands::solve::run(args),
        Commands::Demo => commands::demo::run(),
        Commands::Consistency(args) => commands::consistency::run(args),
    }
}
