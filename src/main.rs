//! access-planner - accessible pedestrian routes from the command line.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use access_planner::catalog::InMemoryCatalog;
use access_planner::composer::{Endpoint, RouteComposer};
use access_planner::config::PlannerConfig;
use access_planner::haversine::HaversineRouter;
use access_planner::model::MobilityProfile;
use access_planner::nominatim::NominatimClient;
use access_planner::osrm::OsrmClient;
use access_planner::seed;
use access_planner::traits::Router;

/// Plan pedestrian routes that pass accessibility features.
#[derive(Parser, Debug)]
#[command(name = "access-planner")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path (TOML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build a route between two points
    Route {
        /// Origin address
        #[arg(long, required_unless_present = "from_coords")]
        from: Option<String>,

        /// Origin as "lat,lon" (the traveler's current position)
        #[arg(long, value_parser = parse_coords, conflicts_with = "from")]
        from_coords: Option<(f64, f64)>,

        /// Destination address
        #[arg(long, required_unless_present = "to_coords")]
        to: Option<String>,

        /// Destination as "lat,lon"
        #[arg(long, value_parser = parse_coords, conflicts_with = "to")]
        to_coords: Option<(f64, f64)>,

        /// wheelchair, low-vision or cane
        #[arg(short, long)]
        profile: MobilityProfile,

        /// JSON file with features; defaults to the built-in Tula sample
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Use straight-line routing instead of OSRM
        #[arg(long)]
        offline: bool,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog features relevant to a profile
    Features {
        #[arg(short, long)]
        profile: MobilityProfile,

        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => PlannerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlannerConfig::default(),
    };

    match cli.command {
        Commands::Route {
            from,
            from_coords,
            to,
            to_coords,
            profile,
            catalog,
            offline,
            json,
        } => {
            let origin = match (from, from_coords) {
                (_, Some((lat, lon))) => Endpoint::CurrentLocation { lat, lon },
                (Some(address), None) => Endpoint::Address(address),
                (None, None) => anyhow::bail!("an origin is required"),
            };
            let destination = match (to, to_coords) {
                (_, Some((lat, lon))) => Endpoint::Coordinates { lat, lon },
                (Some(address), None) => Endpoint::Address(address),
                (None, None) => anyhow::bail!("a destination is required"),
            };
            run_route(&config, origin, destination, profile, catalog, offline, json)
        }
        Commands::Features { profile, catalog } => {
            let catalog = load_catalog(catalog)?;
            for feature in catalog.features_in(&profile.relevant_categories()) {
                println!(
                    "{}\t{}\t{:.6},{:.6}\t{}\t{}",
                    feature.id, feature.category, feature.lat, feature.lon, feature.description, feature.address
                );
            }
            Ok(())
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}

fn run_route(
    config: &PlannerConfig,
    origin: Endpoint,
    destination: Endpoint,
    profile: MobilityProfile,
    catalog: Option<PathBuf>,
    offline: bool,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog)?;
    let geocoder = NominatimClient::new(config.nominatim.clone()).context("building geocoder")?;
    let osrm = OsrmClient::new(config.osrm.clone()).context("building router")?;
    let haversine = HaversineRouter::default();
    let router: &dyn Router = if offline { &haversine } else { &osrm };

    let composer = RouteComposer::with_options(&geocoder, router, &catalog, config.augment.clone());
    match composer.build_route(&origin, &destination, profile) {
        Ok(result) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.description);
            }
            Ok(())
        }
        Err(err) => {
            if json {
                println!("{}", serde_json::json!({ "reason": err.reason(), "message": err.to_string() }));
            }
            Err(err.into())
        }
    }
}

fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<InMemoryCatalog> {
    match path {
        Some(path) => InMemoryCatalog::from_json_file(&path)
            .with_context(|| format!("loading catalog {}", path.display())),
        None => {
            let features = seed::tula_features();
            info!(count = features.len(), "using built-in Tula catalog");
            Ok(InMemoryCatalog::from_features(features))
        }
    }
}

fn parse_coords(value: &str) -> Result<(f64, f64), String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected \"lat,lon\", got '{}'", value))?;
    let lat: f64 = lat.trim().parse().map_err(|err| format!("latitude: {}", err))?;
    let lon: f64 = lon.trim().parse().map_err(|err| format!("longitude: {}", err))?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(format!("coordinates out of range: {},{}", lat, lon));
    }
    Ok((lat, lon))
}
