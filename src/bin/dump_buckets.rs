//! Prints one generated pool distribution to stdout.
//!
//! Usage: dump_buckets --seed 42 --format json

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use pool_distribution::ui::utils::format_price;
use pool_distribution::{BucketRow, POOL, PoolDistribution};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "dump_buckets", about = "Generate and print a mocked pool distribution")]
struct Args {
    /// Seed for reproducible magnitudes (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of price buckets
    #[arg(long, default_value_t = POOL.bucket_count)]
    buckets: usize,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
}

#[derive(Tabled)]
struct TableRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "ETH")]
    primary: String,
    #[tabled(rename = "WBTC")]
    secondary: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDump {
    active_price: f64,
    transition_index: usize,
    buckets: Vec<BucketRow>,
}

fn format_optional(value: Option<f64>) -> String {
    value.map(format_price).unwrap_or_default()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let spec = POOL.with_bucket_count(args.buckets);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    log::info!(
        "Generating {} buckets over {}..{} (active {}), seed {:?}",
        spec.bucket_count,
        spec.start_price,
        spec.end_price,
        spec.active_price,
        args.seed
    );

    let distribution = PoolDistribution::generate(&spec, &mut rng)
        .context("Failed to generate pool distribution")?;

    match args.format {
        OutputFormat::Table => {
            let rows: Vec<TableRow> = distribution
                .rows()
                .into_iter()
                .enumerate()
                .map(|(index, row)| TableRow {
                    index,
                    price: format_price(row.price),
                    primary: format_optional(row.primary_value),
                    secondary: format_optional(row.secondary_value),
                })
                .collect();
            println!("{}", Table::new(rows).with(Style::rounded()));
            println!(
                "Active bin: {} {} (first {} bucket at index {})",
                spec.active_price,
                spec.pair.quote_unit,
                spec.pair.secondary,
                distribution.transition_index()
            );
        }
        OutputFormat::Json => {
            let dump = JsonDump {
                active_price: distribution.active_price,
                transition_index: distribution.transition_index(),
                buckets: distribution.rows(),
            };
            let json = serde_json::to_string_pretty(&dump).context("Failed to serialize buckets")?;
            println!("{}", json);
        }
    }

    Ok(())
}
