#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod domain;
pub mod models;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for dump_buckets.rs)
pub use app::App;
pub use config::{POOL, PoolSpec};
pub use domain::{Bucket, BucketRow, DistributionError, Magnitude, PriceRange, Series};
pub use models::{PoolDistribution, generate_buckets, generate_pool_buckets};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Seed the magnitude generator so every refresh sequence is reproducible
    #[arg(long)]
    pub seed: Option<u64>,

    /// Override the number of price buckets
    #[arg(long)]
    pub buckets: Option<usize>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
