//! Terminal front end for the sparse Game of Life simulator

use anyhow::{Context, Result};
use clap::Parser;
use sparse_life::{
    config::{CliOverrides, Settings},
    life::load_cells_from_file,
    simulate,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sparse_life")]
#[command(about = "Sparse Game of Life simulator on an unbounded lattice")]
#[command(version = "0.1.0")]
struct Cli {
    /// Input file of whitespace-separated x y integer pairs, one per live cell
    input: PathBuf,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum frame interval in milliseconds (overrides config)
    #[arg(short = 'i', long)]
    interval_ms: Option<u64>,

    /// Glyph for live cells (overrides config)
    #[arg(long)]
    alive: Option<String>,

    /// Glyph for dead cells inside the rendered window (overrides config)
    #[arg(long)]
    dead: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Bad invocations are usage errors with exit status 1; --help
            // and --version stay on stdout with status 0.
            let status = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(status);
        }
    };

    if let Err(err) = run(cli) {
        eprintln!("ERROR: {err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = match cli.config {
        Some(ref path) => Settings::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Settings::default(),
    };

    let cli_overrides = CliOverrides {
        frame_interval_ms: cli.interval_ms,
        alive_glyph: cli.alive,
        dead_glyph: cli.dead,
    };
    settings.merge_with_cli(&cli_overrides);
    settings
        .validate()
        .context("configuration validation failed")?;

    let grid = load_cells_from_file(&cli.input)?;
    log::info!(
        "loaded {} live cells from {}",
        grid.len(),
        cli.input.display()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = simulate(grid, &settings, &mut out)?;

    log::info!(
        "grid died out after {} generations (peak population {})",
        summary.generations,
        summary.peak_population
    );

    Ok(())
}
