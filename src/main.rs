//! Courier Storage CLI
//!
//! Small command line front end over the storage place domain, useful for
//! poking at the placement rules and grid arithmetic.
//!
//! ```text
//! courier-storage distance 2,6 4,9
//! courier-storage random-location
//! courier-storage store --capacity 10 --order-volume 5 --orders 2
//! courier-storage --config courier.json store --capacity 10 --order-volume 5 --orders 2 --unload
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use courier_storage::adapters::{InMemoryStoragePlaceRepository, LoggingEventPublisher};
use courier_storage::config::{Config, DisplayConfig, LoggingConfig};
use courier_storage::domain::ports::{EventPublisher, StoragePlaceRepository};
use courier_storage::domain::DomainEvent;
use courier_storage::{Error, Location, OrderId, StoragePlace, Volume};

// =============================================================================
// CLI Arguments
// =============================================================================

/// Courier Storage - storage place rules and grid distances
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON config file; flags given on the command line take precedence
    #[arg(long, env = "COURIER_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Log level [default: info]
    #[arg(
        long,
        env = "LOG_LEVEL",
        global = true,
        value_parser = ["trace", "debug", "info", "warn", "error"]
    )]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long, env = "LOG_JSON", global = true)]
    log_json: bool,

    /// Unit suffix used when printing volumes [default: л]
    #[arg(long, env = "VOLUME_UNIT", global = true, value_parser = parse_volume_unit)]
    volume_unit: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manhattan distance between two locations given as `x,y`
    Distance { from: Location, to: Location },

    /// Print a random location on the grid
    RandomLocation,

    /// Create a storage place and try to store orders in it one after another
    Store {
        /// Storage place name
        #[arg(long, default_value = "Bag")]
        name: String,

        /// Storage place capacity
        #[arg(long)]
        capacity: i32,

        /// Volume of every order
        #[arg(long)]
        order_volume: i32,

        /// Number of orders to attempt
        #[arg(long, default_value = "1")]
        orders: usize,

        /// Remove the stored order before each subsequent attempt
        #[arg(long)]
        unload: bool,
    },
}

fn parse_volume_unit(unit: &str) -> Result<String, String> {
    if unit.trim().is_empty() {
        return Err("volume unit must not be blank".to_string());
    }
    Ok(unit.to_string())
}

impl Args {
    /// Config file (or defaults) with command line overrides applied.
    fn config(&self) -> courier_storage::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.log_json {
            config.logging.json = true;
        }
        if let Some(unit) = &self.volume_unit {
            config.display.volume_unit = unit.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

// =============================================================================
// Main
// =============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    init_logging(&config.logging);

    for line in execute(args.command, &config.display).await? {
        println!("{}", line);
    }

    Ok(())
}

/// Run a command and return the lines it prints.
async fn execute(
    command: Command,
    units: &DisplayConfig,
) -> courier_storage::Result<Vec<String>> {
    match command {
        Command::Distance { from, to } => Ok(vec![from.distance_to(&to)?.to_string()]),
        Command::RandomLocation => Ok(vec![Location::create_random().to_string()]),
        Command::Store {
            name,
            capacity,
            order_volume,
            orders,
            unload,
        } => {
            let outcome = run_store(
                units,
                &name,
                Volume::create(capacity)?,
                Volume::create(order_volume)?,
                orders,
                unload,
            )
            .await?;
            Ok(outcome.lines)
        }
    }
}

// =============================================================================
// Store Scenario
// =============================================================================

/// Result of a store run: one line per attempt and the final place state.
#[derive(Debug)]
struct StoreOutcome {
    lines: Vec<String>,
    place: StoragePlace,
}

async fn run_store(
    units: &DisplayConfig,
    name: &str,
    capacity: Volume,
    order_volume: Volume,
    orders: usize,
    unload: bool,
) -> courier_storage::Result<StoreOutcome> {
    let repo = InMemoryStoragePlaceRepository::new();
    let publisher = LoggingEventPublisher::info_level();

    let place = StoragePlace::create(name, capacity)?;
    let id = place.id();
    repo.add(&place).await?;
    publisher
        .publish(DomainEvent::storage_place_created(id, name, capacity))
        .await?;

    let capacity_label = units.volume(capacity);
    info!(storage_place_id = %id, capacity = %capacity_label, "Storage place ready");

    let mut lines = Vec::with_capacity(orders);
    for attempt in 1..=orders {
        let stored = repo
            .get(&id)
            .await?
            .ok_or(Error::StoragePlaceNotFound { id })?;
        let (mut place, mut version) = (stored.value, stored.version);

        if unload {
            if let Some(removed) = place.remove_current_order() {
                version = repo.update(&place, version).await?;
                publisher
                    .publish(DomainEvent::order_removed(id, removed))
                    .await?;
            }
        }

        let order_id = OrderId::new(Uuid::new_v4());
        match place.store_order(order_id, order_volume) {
            Ok(()) => {
                repo.update(&place, version).await?;
                publisher
                    .publish(DomainEvent::order_stored(id, order_id, order_volume))
                    .await?;
                lines.push(format!(
                    "#{} stored order {} ({})",
                    attempt,
                    order_id,
                    units.volume(order_volume)
                ));
            }
            Err(e) if e.is_business_rule() => {
                warn!(storage_place_id = %id, code = e.code(), "Order rejected");
                publisher
                    .publish(DomainEvent::order_rejected(id, order_id, &e))
                    .await?;
                lines.push(format!(
                    "#{} rejected [{}]: {}",
                    attempt,
                    e.code(),
                    units.error_message(&e)
                ));
            }
            Err(e) => return Err(e),
        }
    }

    let place = repo
        .get(&id)
        .await?
        .ok_or(Error::StoragePlaceNotFound { id })?
        .into_inner();

    Ok(StoreOutcome { lines, place })
}

// =============================================================================
// Logging Setup
// =============================================================================

fn init_logging(config: &LoggingConfig) {
    let level = match config.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if config.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

// =============================================================================
// Tests
// =============================================================================
