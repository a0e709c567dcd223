//! CLI runner for the cellular assignment optimizer.
//!
//! Runs the PCA engine on a cost matrix (JSON file or the built-in demo)
//! and prints every generation's grid plus the running best.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pca_alloc::models::CostMatrix;
use pca_alloc::pca::{PcaConfig, PcaEngine, RunOutcome};

#[derive(Parser, Debug)]
#[command(name = "pca-alloc", about = "Parallel cellular assignment optimizer")]
struct Args {
    /// JSON file holding a square cost matrix, e.g. [[8,6,10],[7,5,9],[9,8,4]].
    /// Defaults to that demo matrix when omitted.
    #[arg(long)]
    matrix: Option<PathBuf>,
    /// Grid rows (M).
    #[arg(long, default_value_t = 3)]
    rows: usize,
    /// Grid columns (N).
    #[arg(long, default_value_t = 3)]
    cols: usize,
    /// Number of generations to run.
    #[arg(long, default_value_t = 5)]
    iterations: usize,
    /// Per-cell mutation probability in [0, 1].
    #[arg(long, default_value_t = 0.1)]
    mutation_probability: f64,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
}

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn load_matrix(path: Option<&PathBuf>) -> Result<CostMatrix, Box<dyn Error>> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(CostMatrix::new(vec![
            vec![8.0, 6.0, 10.0],
            vec![7.0, 5.0, 9.0],
            vec![9.0, 8.0, 4.0],
        ])?),
    }
}

fn print_report(outcome: &RunOutcome, cols: usize) {
    for snapshot in &outcome.generations {
        println!("\nIteration {}:", snapshot.generation);
        for row in snapshot.cells.chunks(cols) {
            let line: Vec<String> = row
                .iter()
                .map(|c| format!("{} -> {}", c.allocation, c.cost))
                .collect();
            println!("{}", line.join("   "));
        }
        println!(
            "Best so far: {} Cost: {}",
            snapshot.incumbent.allocation, snapshot.incumbent.cost
        );
    }
    println!("\nFinal Best Allocation: {}", outcome.best.allocation);
    println!("Minimum Total Cost: {}", outcome.best.cost);
}

fn main() -> Result<(), Box<dyn Error>> {
    enable_tracing();
    let args = Args::parse();

    let matrix = load_matrix(args.matrix.as_ref())?;
    let config = PcaConfig {
        grid_rows: args.rows,
        grid_cols: args.cols,
        max_iterations: args.iterations,
        mutation_probability: args.mutation_probability,
        seed: args.seed,
    };

    let engine = PcaEngine::new(&matrix, config)?;
    let outcome = engine.run_seeded()?;
    print_report(&outcome, args.cols);

    Ok(())
}
