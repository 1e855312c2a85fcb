//! Command implementations and argument parsing for the arbor CLI.

use std::io::{self, Write};

use arbor_core::{Maze, MazeError, MazeErrorCode, MazeParams, Room};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_WIDTH: usize = 16;
const DEFAULT_HEIGHT: usize = 8;
const DEFAULT_MAX_WEIGHT: u32 = 100;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "arbor", about = "Carve and solve random mazes.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Carve a random maze and print it.
    Maze(MazeCommand),
}

/// Options accepted by the `maze` command.
#[derive(Debug, Args, Clone)]
pub struct MazeCommand {
    /// Number of columns.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Number of rows.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Seed for the wall-weight generator.
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Exclusive upper bound for random wall weights.
    #[arg(long = "max-weight", default_value_t = DEFAULT_MAX_WEIGHT)]
    pub max_weight: u32,

    /// Solve from the top-left room to the bottom-right room.
    #[arg(long)]
    pub solve: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Carving or solving the maze failed.
    #[error(transparent)]
    Maze(#[from] MazeError),
}

impl CliError {
    /// Returns the stable code of the underlying library error.
    #[must_use]
    pub const fn maze_code(&self) -> Option<MazeErrorCode> {
        match self {
            Self::Maze(error) => Some(error.code()),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Parameters the maze was carved with.
    pub params: MazeParams,
    /// Number of open passages.
    pub passages: usize,
    /// Solution route, when one was requested.
    pub route: Option<Vec<Room>>,
    /// ASCII rendering of the maze, including the route if any.
    pub drawing: String,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when carving or solving fails.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{Cli, Command, MazeCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Maze(MazeCommand {
///         width: 3,
///         height: 2,
///         seed: 1,
///         max_weight: 10,
///         solve: true,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.passages, 5);
/// assert!(summary.route.is_some());
/// # Ok::<(), arbor_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Maze(maze) => {
            Span::current().record("command", field::display("maze"));
            run_maze(&maze)
        }
    }
}

#[instrument(
    name = "cli.maze",
    err,
    skip(command),
    fields(
        width = command.width,
        height = command.height,
        seed = command.seed,
        solve = command.solve,
    ),
)]
pub(super) fn run_maze(command: &MazeCommand) -> Result<ExecutionSummary, CliError> {
    let params = MazeParams {
        width: command.width,
        height: command.height,
        seed: command.seed,
        max_weight: command.max_weight,
    };
    let maze = Maze::carve(params)?;

    let route = if command.solve {
        let exit = Room::new(
            params.height.saturating_sub(1),
            params.width.saturating_sub(1),
        );
        Some(maze.solve(Room::new(0, 0), exit)?)
    } else {
        None
    };
    let drawing = maze.render(route.as_deref().unwrap_or_default());

    info!(
        passages = maze.passage_count(),
        route_rooms = route.as_ref().map(Vec::len),
        "maze command completed"
    );
    Ok(ExecutionSummary {
        params,
        passages: maze.passage_count(),
        route,
        drawing,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use arbor_cli::cli::{ExecutionSummary, render_summary};
/// use arbor_core::{MazeParams, Room};
///
/// let summary = ExecutionSummary {
///     params: MazeParams { width: 1, height: 1, seed: 0, max_weight: 100 },
///     passages: 0,
///     route: Some(vec![Room::new(0, 0)]),
///     drawing: "###\n#S#\n###\n".to_owned(),
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8_lossy(&buffer).starts_with("maze: 1x1"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let MazeParams {
        width,
        height,
        seed,
        max_weight,
    } = summary.params;
    writeln!(writer, "maze: {width}x{height} (seed {seed}, max weight {max_weight})")?;
    writeln!(writer, "passages: {}", summary.passages)?;
    if let Some(route) = &summary.route
        && let (Some(first), Some(last)) = (route.first(), route.last())
    {
        writeln!(writer, "route: {} rooms from {first} to {last}", route.len())?;
    }
    writer.write_all(summary.drawing.as_bytes())
}
