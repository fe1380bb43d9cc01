// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Consistency command: a toy simulation of strong vs weak memory consistency.
//!
//! Two worker "nodes" share one cell. In strong mode every read and write
//! goes through a lock on the shared cell. In weak mode each node works on a
//! local copy and the writer's value only reaches the shared cell after a
//! propagation delay, so the reader sees the stale value.
//!
//! This is an illustration only. Thread interleaving in strong mode is up to
//! the scheduler, so the value read there may be either the old or new one.

use std::process::ExitCode;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use anyhow::anyhow;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Strong,
    Weak,
    Both,
}

#[derive(Debug, Args)]
pub struct ConsistencyArgs {
    /// Which simulation to run
    #[arg(long, value_enum, default_value = "both")]
    pub mode: Mode,

    /// Delay before the weak-mode write propagates, in milliseconds
    #[arg(long, default_value_t = 3000)]
    pub delay_ms: u64,
}

/// What the strong-mode reader observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StrongObservation {
    read: i64,
    final_value: i64,
}

/// What the weak-mode reader observed, and the shared value after propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WeakObservation {
    read: i64,
    final_value: i64,
}

fn join<T>(handle: thread::ScopedJoinHandle<'_, T>, node: u32) -> anyhow::Result<T> {
    handle
        .join()
        .map_err(|_| anyhow!("node {node} panicked"))
}

fn simulate_strong(shared: &Mutex<i64>) -> anyhow::Result<StrongObservation> {
    println!("\n=== STRONG CONSISTENCY SIMULATION ===");

    let read = thread::scope(|scope| -> anyhow::Result<i64> {
        let writer = scope.spawn(|| -> anyhow::Result<()> {
            let mut cell = shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
            println!("[Node 1] Writing 10 (strong)");
            *cell = 10;
            println!("[Node 1] Memory after write: {}", *cell);
            Ok(())
        });
        let reader = scope.spawn(|| -> anyhow::Result<i64> {
            let cell = shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
            println!("[Node 2] Read {} (strong)", *cell);
            Ok(*cell)
        });
        join(writer, 1)??;
        join(reader, 2)?
    })?;

    let final_value = *shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
    Ok(StrongObservation { read, final_value })
}

fn simulate_weak(shared: &Mutex<i64>, delay: Duration) -> anyhow::Result<WeakObservation> {
    println!("\n=== WEAK CONSISTENCY SIMULATION ===");

    let snapshot = *shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
    let mut local1 = snapshot;
    let local2 = snapshot;

    let read = thread::scope(|scope| -> anyhow::Result<i64> {
        let writer = scope.spawn(|| {
            println!("[Node 1] Writing 20 (weak)");
            local1 = 20;
            println!("[Node 1] Local memory after write: {local1}");
        });
        thread::sleep(delay / 3);
        let reader = scope.spawn(|| {
            println!("[Node 2] Read {local2} (weak)");
            local2
        });
        join(writer, 1)?;
        join(reader, 2)
    })?;

    thread::scope(|scope| -> anyhow::Result<()> {
        let propagator = scope.spawn(|| -> anyhow::Result<()> {
            thread::sleep(delay);
            let mut cell = shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
            *cell = local1;
            println!(
                "[Node 1] Propagated {local1} to shared memory after {:.1}s",
                delay.as_secs_f64()
            );
            Ok(())
        });
        join(propagator, 1)?
    })?;

    let final_value = *shared.lock().map_err(|_| anyhow!("shared cell poisoned"))?;
    Ok(WeakObservation { read, final_value })
}

pub fn run(args: ConsistencyArgs) -> anyhow::Result<ExitCode> {
    let shared = Mutex::new(0);
    let delay = Duration::from_millis(args.delay_ms);

    if matches!(args.mode, Mode::Strong | Mode::Both) {
        let observed = simulate_strong(&shared)?;
        tracing::info!(read = observed.read, final_value = observed.final_value, "strong mode done");
    }
    if matches!(args.mode, Mode::Weak | Mode::Both) {
        let observed = simulate_weak(&shared, delay)?;
        tracing::info!(read = observed.read, final_value = observed.final_value, "weak mode done");
    }
    Ok(ExitCode::SUCCESS)
}
