//! Algorithm visualizer CLI.
//!
//! Provides the `stepviz` binary with subcommands for generating sorting and
//! pathfinding step traces. Traces are printed as JSON to stdout (full,
//! summarized, or replayed frame-by-frame at a chosen speed); diagnostics go
//! to stderr.
//!
//! Uses the same tracers as the HTTP server endpoints, ensuring identical
//! traces from both entry points.

mod player;

use std::process;

use clap::{Parser, Subcommand};

use stepviz_core::{CoreError, GridConfig, PathAlgorithm, Pos, SortAlgorithm, Step};
use stepviz_trace::gen::{entropy_seed, DEFAULT_WALL_DENSITY};
use stepviz_trace::{InputGen, PathStepTracer, SortStepTracer};

use crate::player::Player;

/// Sorting and pathfinding trace tools.
#[derive(Parser)]
#[command(name = "stepviz", about = "Sorting and pathfinding step-trace tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Trace a sorting algorithm over a value sequence.
    Sort {
        /// Algorithm id: bubble, selection, insertion, merge, quick.
        /// Unknown ids fall back to bubble.
        #[arg(short, long, default_value = "bubble")]
        algorithm: String,

        /// Comma-separated input values. Generated when omitted.
        #[arg(short, long, value_delimiter = ',')]
        values: Option<Vec<u64>>,

        /// Length of the generated input when --values is omitted.
        #[arg(long, default_value_t = 30)]
        size: usize,

        /// Seed for the generated input (wall-clock derived when omitted).
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        output: OutputMode,
    },

    /// Trace a pathfinding algorithm across a grid.
    Path {
        /// Algorithm id: dijkstra, bfs, dfs. Unknown ids fall back to bfs.
        #[arg(short, long, default_value = "bfs")]
        algorithm: String,

        /// Start position as row,col.
        #[arg(short, long, default_value = "5,5")]
        start: String,

        /// End position as row,col.
        #[arg(short, long, default_value = "15,25")]
        end: String,

        /// Semicolon-separated wall positions, e.g. "1,2;3,4".
        /// Generated when omitted.
        #[arg(short, long)]
        walls: Option<String>,

        /// Grid rows.
        #[arg(long, default_value_t = 20)]
        rows: usize,

        /// Grid columns.
        #[arg(long, default_value_t = 30)]
        cols: usize,

        /// Seed for generated walls (wall-clock derived when omitted).
        #[arg(long)]
        seed: Option<u64>,

        /// Wall probability per cell for generated walls.
        #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
        density: f64,

        #[command(flatten)]
        output: OutputMode,
    },
}

/// How to present the finished trace.
#[derive(clap::Args)]
struct OutputMode {
    /// Pretty-print the JSON trace.
    #[arg(long)]
    pretty: bool,

    /// Print step count and final snapshot instead of the full trace.
    #[arg(long)]
    summary: bool,

    /// Replay the trace one JSON line per frame at the given speed (1-100).
    #[arg(long, value_name = "SPEED")]
    play: Option<u8>,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Sort {
            algorithm,
            values,
            size,
            seed,
            output,
        } => run_sort(&algorithm, values, size, seed, &output),
        Commands::Path {
            algorithm,
            start,
            end,
            walls,
            rows,
            cols,
            seed,
            density,
            output,
        } => run_path(&algorithm, &start, &end, walls, rows, cols, seed, density, &output),
    };

    process::exit(exit_code);
}

/// Execute the sort subcommand.
///
/// Returns exit code: 0 = success, 1 = bad input.
fn run_sort(
    algorithm_id: &str,
    values: Option<Vec<u64>>,
    size: usize,
    seed: Option<u64>,
    output: &OutputMode,
) -> i32 {
    let algorithm = SortAlgorithm::from_id(algorithm_id);

    let values = values.unwrap_or_else(|| {
        let seed = seed.unwrap_or_else(entropy_seed);
        eprintln!("generating {size} values with seed {seed}");
        InputGen::from_seed(seed).values(size)
    });

    let steps = SortStepTracer::run(algorithm, &values);
    let summary = serde_json::json!({
        "algorithm": algorithm.id(),
        "input": values,
        "step_count": steps.len(),
        "final": steps.last(),
    });

    emit_trace(steps.into_iter().map(Step::Sort).collect(), summary, output)
}

/// Execute the path subcommand.
///
/// Returns exit code: 0 = success, 1 = bad input.
#[allow(clippy::too_many_arguments)]
fn run_path(
    algorithm_id: &str,
    start: &str,
    end: &str,
    walls: Option<String>,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
    density: f64,
    output: &OutputMode,
) -> i32 {
    let algorithm = PathAlgorithm::from_id(algorithm_id);

    let config = GridConfig { rows, cols };
    let setup = || -> Result<(Pos, Pos, Vec<Pos>), CoreError> {
        config.validate()?;
        let start: Pos = start.parse()?;
        let end: Pos = end.parse()?;
        config.check_bounds(start)?;
        config.check_bounds(end)?;

        let walls = match walls {
            Some(list) => parse_walls(&list)?,
            None => {
                let seed = seed.unwrap_or_else(entropy_seed);
                eprintln!("generating walls with seed {seed} and density {density}");
                InputGen::from_seed(seed).walls(config, start, end, density)
            }
        };
        Ok((start, end, walls))
    };

    let (start, end, walls) = match setup() {
        Ok(parts) => parts,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let steps = PathStepTracer::new(config).run(algorithm, start, end, &walls);
    let summary = serde_json::json!({
        "algorithm": algorithm.id(),
        "start": start,
        "end": end,
        "wall_count": walls.len(),
        "step_count": steps.len(),
        "path_found": steps.last().is_some_and(|s| !s.path.is_empty()),
        "final": steps.last(),
    });

    emit_trace(steps.into_iter().map(Step::Path).collect(), summary, output)
}

/// Parses a "row,col;row,col;..." wall list.
fn parse_walls(list: &str) -> Result<Vec<Pos>, CoreError> {
    list.split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect()
}

/// Writes the trace in the selected output mode.
fn emit_trace(steps: Vec<Step>, summary: serde_json::Value, output: &OutputMode) -> i32 {
    let rendered = if let Some(speed) = output.play {
        let player = Player::new(speed);
        let mut stdout = std::io::stdout();
        player.play(&steps, &mut stdout).map(|_| ())
    } else {
        let value = if output.summary {
            summary
        } else {
            match serde_json::to_value(&steps) {
                Ok(v) => v,
                Err(e) => {
                    eprintln!("Error: failed to serialize trace: {e}");
                    return 1;
                }
            }
        };
        let text = if output.pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        };
        match text {
            Ok(text) => {
                println!("{text}");
                Ok(())
            }
            Err(e) => Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
        }
    };

    match rendered {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}
