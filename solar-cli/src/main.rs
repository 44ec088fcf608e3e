mod config;
mod report;

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use solar_core::SolarRepository;
use solar_core::calculations::{EstimateInput, EstimatorConfig, SavingsEstimator};
use solar_core::db::{DbConfig, RepositoryRegistry};
use solar_db_sqlite::SqliteRepositoryFactory;

use crate::config::CliConfig;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Solar savings estimator.
///
/// Sizes a solar system from a household's monthly bill and site profile,
/// prices it after the federal tax credit, and projects 25 years of savings.
#[derive(Debug, Parser)]
#[command(name = "solar-estimate", version)]
struct Cli {
    /// Database backend to use.
    #[arg(long)]
    backend: Option<String>,

    /// Database connection string.
    /// For SQLite this is a URL (e.g. `sqlite:solar.db?mode=rwc`) or `:memory:`.
    #[arg(long)]
    db: Option<String>,

    /// Path to a TOML configuration file (default: ./solar.toml if present).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate savings for one household.
    Estimate(EstimateArgs),

    /// List the service-area locations.
    Locations,

    /// List roof directions and their production multipliers.
    Directions,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// Current monthly electricity bill.
    #[arg(long)]
    bill: Decimal,

    /// Service-area location name (e.g. "Washington, DC").
    /// Falls back to `default_location` from the config file.
    #[arg(long)]
    location: Option<String>,

    /// Usable roof area in square feet.
    #[arg(long, default_value = "1500")]
    roof_area: Decimal,

    /// Roof direction code: S, SW, SE, E, W, or N.
    #[arg(long, default_value = "S")]
    direction: String,

    /// Include a home battery in the quote.
    #[arg(long)]
    battery: bool,

    /// Account for yearly maintenance at this annual cost.
    #[arg(long)]
    maintenance: Option<Decimal>,

    /// Projection years to print (the summary always covers all 25).
    #[arg(long, default_value_t = 10)]
    years_shown: usize,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let file_config = CliConfig::load(cli.config.as_deref())?;
    let db_config = DbConfig {
        backend: file_config.backend(cli.backend.clone()),
        connection_string: file_config.database(cli.db.clone()),
    };

    debug!("connecting to {} backend", db_config.backend);

    let mut registry = RepositoryRegistry::new();
    registry.register(Box::new(SqliteRepositoryFactory));
    let repo = registry
        .create(&db_config)
        .await
        .with_context(|| format!("failed to open {} database", db_config.backend))?;

    match cli.command {
        Command::Estimate(args) => run_estimate(repo.as_ref(), &file_config, args).await,
        Command::Locations => list_locations(repo.as_ref()).await,
        Command::Directions => list_directions(repo.as_ref()).await,
    }
}

async fn run_estimate(
    repo: &dyn SolarRepository,
    file_config: &CliConfig,
    args: EstimateArgs,
) -> anyhow::Result<()> {
    let Some(location_name) = file_config.location(args.location) else {
        bail!("no location given; pass --location or set default_location in solar.toml");
    };

    let location = repo
        .get_location_by_name(&location_name)
        .await
        .with_context(|| {
            format!("unknown location '{location_name}'; run `solar-estimate locations`")
        })?;

    let code = args.direction.to_uppercase();
    let roof_direction = repo
        .get_roof_direction_by_code(&code)
        .await
        .with_context(|| {
            format!(
                "unknown roof direction '{}'; expected S, SW, SE, E, W, or N",
                args.direction
            )
        })?;

    debug!(
        location = %location.name,
        direction = %roof_direction.name,
        "reference profiles resolved"
    );

    let input = EstimateInput {
        monthly_bill: args.bill,
        location,
        roof_area_sqft: args.roof_area,
        roof_direction,
        include_battery: args.battery,
        include_maintenance: args.maintenance.is_some(),
        annual_maintenance_cost: args.maintenance.unwrap_or(Decimal::ZERO),
    };

    let estimator = SavingsEstimator::new(EstimatorConfig::default());
    let result = estimator.estimate(&input).context("estimate failed")?;

    print!(
        "{}",
        report::render(&input.location.name, &result, args.years_shown)
    );
    Ok(())
}

async fn list_locations(repo: &dyn SolarRepository) -> anyhow::Result<()> {
    let locations = repo
        .list_locations()
        .await
        .context("failed to list locations")?;

    println!(
        "{:<20} {:>9} {:>8} {:>12}",
        "Location", "Sun h/day", "Rate", "Net meter"
    );
    for location in locations {
        println!(
            "{:<20} {:>9} {:>8} {:>12}",
            location.name,
            location.sun_hours_per_day,
            location.electricity_rate,
            location.net_metering_rate,
        );
    }
    Ok(())
}

async fn list_directions(repo: &dyn SolarRepository) -> anyhow::Result<()> {
    let directions = repo
        .list_roof_directions()
        .await
        .context("failed to list roof directions")?;

    println!("{:<4} {:<12} {:>10}", "Code", "Direction", "Multiplier");
    for direction in directions {
        println!(
            "{:<4} {:<12} {:>10}",
            direction.code.as_str(),
            direction.name,
            direction.efficiency_multiplier,
        );
    }
    Ok(())
}
