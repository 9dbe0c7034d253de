//! Yatra - command line entrypoint.
//!
//! Loads configuration, builds the travel index and answers one query per
//! invocation. Results are printed to stdout as JSON; logs go to stderr.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use yatra_lib::catalog::Destination;
use yatra_lib::collaborators::{DateRange, Event, PlaceLookup, Telemetry, TracingSink};
use yatra_lib::config::{ConfigLoader, LogConfig, YatraConfig, ENV_PREFIX};
use yatra_lib::error::{report_error, ErrorContext, YatraError, YatraResult};
use yatra_lib::estimator::{DistanceEstimate, TripEstimate};
use yatra_lib::explorer::{FilterCriteria, SortKey};
use yatra_lib::routing::TransportMode;
use yatra_lib::TravelIndex;

/// Command line arguments for Yatra.
#[derive(Parser, Debug)]
#[clap(name = "yatra", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Search destinations by name
    Search {
        /// Full or partial name
        query: String,
        /// Maximum number of results
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Show one destination
    Show {
        /// Destination name
        name: String,
    },

    /// List the most popular destinations
    Popular {
        /// Number of names to list
        #[clap(short, long)]
        limit: Option<usize>,
    },

    /// Filter destinations by attributes
    Filter {
        /// Category, e.g. Beach or "Hill Station"
        #[clap(long = "type")]
        category: Option<String>,
        /// State or union territory
        #[clap(long)]
        state: Option<String>,
        /// Highest acceptable cost
        #[clap(long)]
        max_cost: Option<u32>,
        /// Lowest acceptable popularity
        #[clap(long)]
        min_popularity: Option<u32>,
        /// popularity, cost or name
        #[clap(long)]
        sort_by: Option<SortKey>,
    },

    /// Find the cheapest route between two destinations
    Route {
        /// Starting destination
        from: String,
        /// Final destination
        to: String,
        /// Favour legs of this mode (flight, train, bus, car)
        #[clap(long)]
        prefer: Option<TransportMode>,
    },

    /// List the top-ranked activities
    Activities {
        /// Number of activities
        #[clap(short = 'n', long, default_value_t = 5)]
        count: usize,
    },

    /// Estimate cost and time between two hub cities
    Estimate {
        /// Origin city
        origin: String,
        /// Destination city
        destination: String,
        /// Only this mode
        #[clap(long)]
        mode: Option<TransportMode>,
    },

    /// Look up hotels and restaurants for a city
    Places {
        /// City name
        city: String,
        /// First night (YYYY-MM-DD), today if omitted
        #[clap(long)]
        check_in: Option<NaiveDate>,
        /// Length of stay
        #[clap(long, default_value_t = 2)]
        nights: u32,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Cost estimate printed by the `estimate` command.
#[derive(Serialize)]
struct EstimateReport {
    origin: String,
    destination: String,
    distance: Option<DistanceEstimate>,
    suggested: Vec<TransportMode>,
    estimates: Vec<TripEstimate>,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> YatraResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_error::ErrorLayer::default());

    let result = if log.json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_file(log.source_location)
                    .with_line_number(log.source_location),
            )
            .try_init()
    };

    result.map_err(|e| YatraError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> YatraResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn records(destinations: &[Arc<Destination>]) -> Vec<&Destination> {
    destinations.iter().map(Arc::as_ref).collect()
}

fn load_config(loader: &ConfigLoader) -> YatraConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}

/// Main entry point for the application.
#[tokio::main]
async fn main() -> YatraResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    if let Command::GenConfig { output } = &args.command {
        init_logging(&LogConfig::default())?;

        if let Some(parent) = output.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml = toml::to_string_pretty(&YatraConfig::default())
            .map_err(|e| YatraError::Custom(format!("Failed to serialize config: {e}")))?;
        std::fs::write(output, toml)?;

        info!("Default configuration written to {:?}", output);
        return Ok(());
    }

    let config = load_config(&loader);
    init_logging(&config.log)?;
    yatra_lib::init();

    if let Command::Validate = args.command {
        info!("Configuration validated successfully");
        return Ok(());
    }

    let index = match TravelIndex::from_config(&config) {
        Ok(index) => index,
        Err(e) => {
            report_error(ErrorContext::new(e, "index").with_details("Failed to build the travel index"));
            process::exit(1);
        }
    };
    let telemetry = Telemetry::new(Arc::new(TracingSink));

    let event = match args.command {
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(config.search.default_limit);
            let results = index.search(&query, limit);
            print_json(&records(&results))?;
            Event::new("search", json!({ "query": query, "results": results.len() }))
        }
        Command::Show { name } => {
            let found = index.get_destination(&name);
            print_json(&found.as_deref())?;
            if found.is_none() {
                process::exit(1);
            }
            Event::new("show", json!({ "name": name }))
        }
        Command::Popular { limit } => {
            let limit = limit.unwrap_or(config.search.popular_limit);
            print_json(&index.get_popular(limit))?;
            Event::new("popular", json!({ "limit": limit }))
        }
        Command::Filter {
            category,
            state,
            max_cost,
            min_popularity,
            sort_by,
        } => {
            let criteria = FilterCriteria {
                category,
                state,
                max_cost,
                min_popularity,
                sort_by,
            };
            let results = index.filter(&criteria);
            print_json(&records(&results))?;
            Event::new("filter", serde_json::to_value(&criteria)?)
        }
        Command::Route { from, to, prefer } => {
            let outcome = index.find_route(&from, &to, prefer.as_ref());
            print_json(&outcome)?;
            Event::new("route", json!({ "from": from, "to": to, "found": outcome.route().is_some() }))
        }
        Command::Activities { count } => {
            print_json(&index.top_activities(count))?;
            Event::new("activities", json!({ "count": count }))
        }
        Command::Estimate {
            origin,
            destination,
            mode,
        } => {
            let estimator = index.estimator();
            let distance = estimator.distance(&origin, &destination);
            let estimates = match &mode {
                Some(mode) => estimator.estimate(&origin, &destination, mode).into_iter().collect(),
                None => estimator.estimate_all(&origin, &destination),
            };
            let report = EstimateReport {
                suggested: distance.map(|d| estimator.optimal_modes(d.km)).unwrap_or_default(),
                origin,
                destination,
                distance,
                estimates,
            };
            print_json(&report)?;
            Event::new("estimate", json!({ "origin": report.origin, "destination": report.destination }))
        }
        Command::Places {
            city,
            check_in,
            nights,
        } => {
            let check_in = check_in.unwrap_or_else(|| chrono::Local::now().date_naive());
            let dates = DateRange::starting(check_in, nights)
                .ok_or_else(|| YatraError::Custom(format!("Stay of {nights} nights from {check_in} is out of range")))?;
            let report = PlaceLookup::offline().lookup(&city, &dates).await;
            print_json(&report)?;
            Event::new("places", json!({ "city": city, "nights": nights }))
        }
        Command::Validate | Command::GenConfig { .. } => return Ok(()),
    };

    // Delivery is best-effort; waiting only keeps the log line from being cut off at exit
    if let Some(handle) = telemetry.emit(event) {
        let _ = handle.await;
    }
    Ok(())
}
