//! Live routing against a local `osrm-routed` with foot data for Tula.
//!
//! Needs Docker and a Geofabrik download of the Central Federal District on
//! first run. Run with `cargo test -- --ignored`.

mod fixtures;

use std::env;
use std::time::{Duration, Instant};

use testcontainers::ReuseDirective;
use testcontainers::core::{IntoContainerPort, Mount};
use testcontainers::runners::SyncRunner;
use testcontainers::{Container, GenericImage, ImageExt, TestcontainersError};

use access_planner::catalog::InMemoryCatalog;
use access_planner::composer::{Endpoint, MAX_DETOUR_RATIO, RouteComposer};
use access_planner::error::ProviderError;
use access_planner::model::{MobilityProfile, RouteQuote};
use access_planner::osrm::{OsrmClient, OsrmConfig};
use access_planner::osrm_data::{GeofabrikRegion, OsrmDataset, OsrmDatasetConfig};
use access_planner::seed;
use access_planner::traits::Router;

use fixtures::{KREMLIN, LENINA_SQUARE, MAXI_MALL, MapGeocoder, RAILWAY_STATION};

fn osrm_container() -> Result<(Container<GenericImage>, String), TestcontainersError> {
    let data_root = env::var("OSRM_DATA_DIR").unwrap_or_else(|_| "osrm-data".to_string());
    let region = GeofabrikRegion::new("russia/central-fed-district");
    let config = OsrmDatasetConfig::new(region, data_root);
    let dataset = OsrmDataset::ensure(&config)
        .map_err(|err| TestcontainersError::other(format!("OSRM prep failed: {}", err)))?;
    let mtime = std::fs::metadata(dataset.osrm_base.with_extension("osrm.partition"))
        .ok()
        .and_then(|meta| meta.modified().ok())
        .and_then(|time| time.duration_since(std::time::SystemTime::UNIX_EPOCH).ok())
        .map(|duration| duration.as_secs())
        .unwrap_or(0);

    let image = GenericImage::new("osrm/osrm-backend", "latest")
        .with_exposed_port(5000.tcp())
        .with_mount(Mount::bind_mount(
            dataset.data_dir.to_string_lossy().to_string(),
            "/data",
        ))
        .with_cmd(vec![
            "osrm-routed".to_string(),
            "--algorithm".to_string(),
            "mld".to_string(),
            dataset.container_path(),
        ])
        .with_container_name(format!("osrm-tula-foot-{}", mtime))
        .with_startup_timeout(Duration::from_secs(60))
        .with_reuse(ReuseDirective::Always);

    let container = image.start()?;
    let port = container.get_host_port_ipv4(5000.tcp())?;
    Ok((container, format!("http://127.0.0.1:{}", port)))
}

fn local_client(base_url: &str) -> OsrmClient {
    OsrmClient::new(OsrmConfig {
        base_url: base_url.to_string(),
        profile: "foot".to_string(),
        timeout_secs: 10,
    })
    .expect("build OSRM client")
}

/// The server accepts connections before the dataset is loaded.
fn route_with_retry(client: &OsrmClient, waypoints: &[(f64, f64)]) -> Result<RouteQuote, ProviderError> {
    let start = Instant::now();
    loop {
        match client.route(waypoints) {
            Err(ProviderError::Http(err)) if start.elapsed() < Duration::from_secs(30) => {
                eprintln!("OSRM not ready yet: {}", err);
                std::thread::sleep(Duration::from_millis(500));
            }
            other => return other,
        }
    }
}

#[test]
#[ignore = "needs Docker and OSRM foot data"]
fn osrm_routes_between_tula_landmarks() {
    let (container, base_url) = osrm_container().expect("start OSRM container");
    let client = local_client(&base_url);

    let direct = route_with_retry(&client, &[KREMLIN.coords(), RAILWAY_STATION.coords()])
        .expect("direct route");
    assert!(direct.distance_m > 500.0 && direct.distance_m < 5_000.0, "got {}", direct.distance_m);
    assert!(direct.duration_s > 0.0);
    assert!(direct.polyline.len() >= 2);

    let via = route_with_retry(
        &client,
        &[KREMLIN.coords(), LENINA_SQUARE.coords(), RAILWAY_STATION.coords()],
    )
    .expect("multi-stop route");
    assert!(via.distance_m >= direct.distance_m * 0.99);

    drop(container);
}

#[test]
#[ignore = "needs Docker and OSRM foot data"]
fn augmented_route_over_local_osrm() {
    let (container, base_url) = osrm_container().expect("start OSRM container");
    let client = local_client(&base_url);
    let direct = route_with_retry(&client, &[KREMLIN.coords(), MAXI_MALL.coords()]).expect("warm-up route");

    let catalog = InMemoryCatalog::from_features(seed::tula_features());
    let composer = RouteComposer::new(MapGeocoder::landmarks(), &client, catalog);

    for profile in MobilityProfile::ALL {
        let result = composer
            .build_route(
                &Endpoint::address(KREMLIN.name),
                &Endpoint::address(MAXI_MALL.name),
                profile,
            )
            .expect("route");
        assert!(result.used_features.len() <= 3);
        assert!(result.total_distance_m as f64 <= (direct.distance_m * (1.0 + MAX_DETOUR_RATIO)).round());
        assert!(result.description.starts_with("ACCESSIBLE ROUTE FOR"));
        eprintln!("{}\n", result.description);
    }

    drop(container);
}
