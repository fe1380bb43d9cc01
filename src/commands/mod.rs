// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Subcommands of the `seating` binary.

pub mod consistency;
pub mod demo;
pub mod solve;
