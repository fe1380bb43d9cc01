// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Demo command: the two worked examples, one feasible and one not.

use std::process::ExitCode;

use seating_search::{solve, GuestId};

use super::solve::render_text;

/// (title, guests, tables, conflicts)
pub(crate) const SCENARIOS: [(&str, usize, usize, &[(GuestId, GuestId)]); 2] = [
    ("a seating exists", 4, 2, &[(0, 2), (1, 3)]),
    ("no seating exists", 3, 1, &[(0, 1), (1, 2)]),
];

pub fn run() -> anyhow::Result<ExitCode> {
    for (title, guests, tables, conflicts) in SCENARIOS {
        println!("=== {title}: {guests} guests, {tables} tables, conflicts {conflicts:?} ===");
        println!("{}", render_text(&solve(guests, tables, conflicts)));
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenarios_have_expected_outcomes() {
        let outcomes: Vec<String> = SCENARIOS
            .iter()
            .map(|&(_, guests, tables, conflicts)| render_text(&solve(guests, tables, conflicts)))
            .collect();
        assert_eq!(outcomes, vec!["{0: 0, 1: 0, 2: 1, 3: 1}", "infeasible"]);
    }
}
