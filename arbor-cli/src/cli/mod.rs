//! Command-line interface for carving and solving mazes.
//!
//! The single `maze` command carves a maze from the supplied dimensions and
//! seed, optionally solves it from the top-left to the bottom-right room, and
//! renders the result as ASCII art.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, MazeCommand, render_summary, run_cli};
