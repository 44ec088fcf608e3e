use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use solar_data::LocationLoader;
use solar_db_sqlite::SqliteRepository;

/// Load service-location data from a CSV file into the database.
///
/// The CSV file should have the following columns:
/// - name: The location's display name (e.g. "Washington, DC")
/// - sun_hours_per_day: Average daily sun hours
/// - electricity_rate: Retail electricity price per kWh
/// - net_metering_rate: Credit rate for excess generation per kWh
#[derive(Parser, Debug)]
#[command(name = "solar-data-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing service-location data
    #[arg(short, long)]
    file: PathBuf,

    /// SQLite database URL (e.g. sqlite:solar.db?mode=rwc to create if missing)
    #[arg(short, long, default_value = "sqlite:solar.db?mode=rwc")]
    database: String,

    /// Run database migrations before loading data
    #[arg(short, long, default_value_t = false)]
    migrate: bool,

    /// Run seed files from the specified directory after migrations
    #[arg(short, long)]
    seeds: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let repo = SqliteRepository::new(&args.database)
        .await
        .with_context(|| format!("Failed to connect to database: {}", args.database))?;

    if args.migrate {
        println!("Running migrations...");
        repo.run_migrations()
            .await
            .context("Failed to run migrations")?;
        println!("Migrations complete.");
    }

    if let Some(seeds_dir) = &args.seeds {
        println!("Running seeds from: {}", seeds_dir.display());
        repo.run_seeds(seeds_dir)
            .await
            .with_context(|| format!("Failed to run seeds from: {}", seeds_dir.display()))?;
        println!("Seeds complete.");
    }

    println!("Loading service locations from: {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let records = LocationLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    println!("Parsed {} records from CSV", records.len());

    let inserted = LocationLoader::load(&repo, &records)
        .await
        .context("Failed to load service locations into database")?;

    println!(
        "Successfully loaded {} service locations into the database.",
        inserted
    );

    Ok(())
}
