//! mazepath: shortest paths through grid maps.
//!
//! Run: cargo run -- demo

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use mazepath_core::{Coord, Grid};
use mazepath_maze::{MazeGen, PathRenderer, RenderStyle, Scenario, Solution, build_graph, solve_grid};
use mazepath_paths::Strategy;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(name = "mazepath")]
#[command(about = "Dijkstra shortest paths over occupancy grids")]
#[command(version)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the built-in 10x10 floor plan
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Solve a grid given inline, as a map file or as a JSON scenario
    Solve {
        /// Number of rows of an open grid
        #[arg(long, conflicts_with_all = ["map", "config"], requires = "cols")]
        rows: Option<i32>,

        /// Number of columns of an open grid
        #[arg(long, conflicts_with_all = ["map", "config"], requires = "rows")]
        cols: Option<i32>,

        /// Blocked cell as "row,col" (repeatable)
        #[arg(long, conflicts_with_all = ["map", "config"])]
        blocked: Vec<Coord>,

        /// ASCII map file: '#' or '1' blocked, '.' or '0' open
        #[arg(long, conflicts_with = "config")]
        map: Option<PathBuf>,

        /// JSON scenario file with rows, cols, blocked, source and target
        #[arg(long)]
        config: Option<PathBuf>,

        /// Start cell as "row,col"
        #[arg(long, required_unless_present = "config")]
        source: Option<Coord>,

        /// Goal cell as "row,col"
        #[arg(long, required_unless_present = "config")]
        target: Option<Coord>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Generate a perfect maze and solve it
    Maze {
        /// Maze height; odd values give a closed border
        #[arg(long, default_value = "21")]
        rows: i32,

        /// Maze width; odd values give a closed border
        #[arg(long, default_value = "21")]
        cols: i32,

        /// Random seed for reproducible mazes
        #[arg(long)]
        seed: Option<u64>,

        /// Start cell (default: top-left room)
        #[arg(long)]
        source: Option<Coord>,

        /// Goal cell (default: bottom-right room)
        #[arg(long)]
        target: Option<Coord>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Search strategy
    #[arg(long, value_enum, default_value_t = StrategyArg::Dense)]
    strategy: StrategyArg,

    /// Mark cells settled by the search with '.'
    #[arg(long)]
    explored: bool,

    /// Also print the graph's cost table
    #[arg(long)]
    table: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Dense,
    Heap,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Dense => Strategy::Dense,
            StrategyArg::Heap => Strategy::BinaryHeap,
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    print!("{}", run(cli.command)?);
    Ok(())
}

/// Execute one subcommand and return the text to print.
fn run(command: Commands) -> Result<String, Box<dyn Error>> {
    match command {
        Commands::Demo { output } => {
            let solution = Scenario::demo().solve(output.strategy.into())?;
            report(&solution, &output)
        }
        Commands::Solve {
            rows,
            cols,
            blocked,
            map,
            config,
            source,
            target,
            output,
        } => cmd_solve(GridSource { rows, cols, blocked, map, config }, source, target, &output),
        Commands::Maze {
            rows,
            cols,
            seed,
            source,
            target,
            output,
        } => cmd_maze(rows, cols, seed, source, target, &output),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Where `solve` reads its grid from.
struct GridSource {
    rows: Option<i32>,
    cols: Option<i32>,
    blocked: Vec<Coord>,
    map: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn cmd_solve(
    grid: GridSource,
    source: Option<Coord>,
    target: Option<Coord>,
    output: &OutputArgs,
) -> Result<String, Box<dyn Error>> {
    let strategy = output.strategy.into();

    if let Some(path) = grid.config {
        let text = fs::read_to_string(&path)?;
        let mut scenario: Scenario = serde_json::from_str(&text)?;
        // Command-line endpoints override the file.
        scenario.source = source.unwrap_or(scenario.source);
        scenario.target = target.unwrap_or(scenario.target);
        let solution = scenario.solve(strategy)?;
        return report(&solution, output);
    }

    let (Some(source), Some(target)) = (source, target) else {
        return Err("--source and --target are required".into());
    };

    let map = match grid.map {
        Some(path) => Grid::parse(&fs::read_to_string(&path)?)?,
        None => {
            let (Some(rows), Some(cols)) = (grid.rows, grid.cols) else {
                return Err("give --rows and --cols, --map or --config".into());
            };
            Grid::with_blocked(rows, cols, &grid.blocked)?
        }
    };
    let solution = solve_grid(map, source, target, strategy)?;
    report(&solution, output)
}

fn cmd_maze(
    rows: i32,
    cols: i32,
    seed: Option<u64>,
    source: Option<Coord>,
    target: Option<Coord>,
    output: &OutputArgs,
) -> Result<String, Box<dyn Error>> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = MazeGen::new(rng).wilson(rows, cols)?;
    let source = source.unwrap_or(Coord::ZERO);
    // Rooms sit on even rows and columns.
    let target = target.unwrap_or(Coord::new((rows - 1) / 2 * 2, (cols - 1) / 2 * 2));
    let solution = solve_grid(grid, source, target, output.strategy.into())?;
    report(&solution, output)
}

/// The rendered grid, a blank line, then the route; with `--table` the cost
/// table follows after another blank line.
fn report(solution: &Solution, output: &OutputArgs) -> Result<String, Box<dyn Error>> {
    let renderer = PathRenderer::new(RenderStyle {
        explored: output.explored.then_some('.'),
        ..RenderStyle::default()
    });
    let mut out = solution.render(&renderer);
    out.push('\n');
    if solution.route.is_reachable() {
        out.push_str(&solution.route.to_string());
    } else {
        out.push_str("Unreachable destination");
    }
    out.push('\n');
    if output.table {
        let graph = build_graph(&solution.grid)?;
        out.push('\n');
        out.push_str(&graph.table().to_string());
    }
    Ok(out)
}
