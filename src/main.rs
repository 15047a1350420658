use std::path::PathBuf;
use std::process;
use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use rand::rngs::StdRng;
use rand::SeedableRng;
use silhouette_hull::process_silhouette;
use silhouette_hull::silhouette::{minimum_capacity, random_heights, read_heights};

/// Traces the convex upper hull of a histogram silhouette.
///
/// The heights are turned into a binary grid (each column filled from row 0 up to its height), the topmost filled
/// cell of every column is extracted, and those points are folded into a convex chain starting at the top-left
/// corner of the grid.
///
/// Provide the heights with exactly one of --heights, --input or --random.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Comma separated column heights, e.g. `5,2,2,2,1,1,3`.
    #[arg(short = 'H', long, value_delimiter = ',', conflicts_with_all = ["input", "random"])]
    heights: Vec<usize>,

    /// Text file holding the heights, separated by commas and/or whitespace.
    #[arg(short, long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Generate this many random column heights in `0..=capacity`.
    #[arg(short, long)]
    random: Option<usize>,

    /// Seed for --random. A random seed is used when missing.
    #[arg(short, long, requires = "random")]
    seed: Option<u64>,

    /// Number of rows of the grid. Defaults to the tallest height (and to 8 rows for --random).
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Write an HTML chart of the silhouette and its hull to this path.
    #[arg(short, long)]
    plot: Option<PathBuf>,

    /// Do not print the grid.
    #[arg(short, long)]
    quiet_grid: bool,
}

const DEFAULT_RANDOM_CAPACITY: usize = 8;

fn main() {
    env_logger::init();
    let args = Cli::parse();

    if args.capacity == Some(0) {
        let mut cmd = Cli::command();
        cmd.error(
            ErrorKind::ValueValidation,
            "The --capacity argument must be at least 1.",
        )
            .exit();
    }

    let (heights, capacity) = if let Some(columns) = args.random {
        let capacity = args.capacity.unwrap_or(DEFAULT_RANDOM_CAPACITY);
        let mut rng = match args.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let heights = random_heights(&mut rng, columns, capacity);
        log::info!("Generated random heights: {:?}", heights);
        (heights, capacity)
    } else {
        let heights = if let Some(input) = &args.input {
            match read_heights(input) {
                Ok(heights) => heights,
                Err(err) => {
                    log::error!("Could not read heights from {:?}: {}", input, err);
                    process::exit(1);
                }
            }
        } else if !args.heights.is_empty() {
            args.heights.clone()
        } else {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::MissingRequiredArgument,
                "You must provide the heights with --heights, --input or --random.",
            )
                .exit();
        };
        let capacity = args.capacity.unwrap_or_else(|| minimum_capacity(&heights));
        (heights, capacity)
    };

    let mut report = match process_silhouette(&heights, capacity) {
        Ok(report) => report,
        Err(err) => {
            log::error!("Could not trace the upper hull: {}", err);
            process::exit(1);
        }
    };
    report.show_grid = !args.quiet_grid;
    print!("{}", report);

    if !report.is_convex() {
        log::warn!("The traced chain is not convex: {:?}", report.chain);
    }

    if let Some(path) = args.plot {
        if let Err(err) = report.draw_plot(&path) {
            log::error!("Could not write the hull plot to {:?}: {}", path, err);
            process::exit(1);
        }
    }
}
