//! Selection invariants over the built-in Tula catalog.
//!
//! Every ordered pair of landmarks is routed for every profile with the
//! offline straight-line router.

mod fixtures;

use std::thread;

use access_planner::catalog::InMemoryCatalog;
use access_planner::composer::{Endpoint, MAX_DETOUR_RATIO, RouteComposer};
use access_planner::haversine::HaversineRouter;
use access_planner::model::MobilityProfile;
use access_planner::seed;
use access_planner::selector::SelectionOptions;
use access_planner::traits::Router;

use fixtures::{LANDMARKS, Location, MapGeocoder};

fn landmark_pairs() -> impl Iterator<Item = (&'static Location, &'static Location)> {
    LANDMARKS.iter().flat_map(|from| {
        LANDMARKS
            .iter()
            .filter(move |to| to.name != from.name)
            .map(move |to| (from, to))
    })
}

fn tula_catalog() -> InMemoryCatalog {
    InMemoryCatalog::from_features(seed::tula_features())
}

#[test]
fn selection_invariants_hold_for_all_landmark_pairs() {
    let router = HaversineRouter::default();
    let composer = RouteComposer::new(MapGeocoder::landmarks(), HaversineRouter::default(), tula_catalog());
    let limits = SelectionOptions::default();

    for (from, to) in landmark_pairs() {
        let base = router.route(&[from.coords(), to.coords()]).unwrap();
        for profile in MobilityProfile::ALL {
            let selected = composer.select_waypoints(&base.polyline, profile);
            let context = format!("{} -> {} ({:?})", from.name, to.name, profile);

            assert!(selected.len() <= limits.max_waypoints, "{}: cap", context);
            for pair in selected.windows(2) {
                assert!(pair[0].progress_m <= pair[1].progress_m, "{}: order", context);
            }
            for (i, a) in selected.iter().enumerate() {
                for b in selected.iter().skip(i + 1) {
                    assert!(
                        (a.progress_m - b.progress_m).abs() > limits.min_spacing_m,
                        "{}: spacing {} vs {}",
                        context,
                        a.progress_m,
                        b.progress_m
                    );
                }
                assert!(profile.priority(a.feature.category) > 0, "{}: relevance", context);
            }
        }
    }
}

#[test]
fn selection_is_deterministic() {
    let router = HaversineRouter::default();
    let composer = RouteComposer::new(MapGeocoder::landmarks(), HaversineRouter::default(), tula_catalog());

    for (from, to) in landmark_pairs() {
        let base = router.route(&[from.coords(), to.coords()]).unwrap();
        for profile in MobilityProfile::ALL {
            let first = composer.select_waypoints(&base.polyline, profile);
            let second = composer.select_waypoints(&base.polyline, profile);
            assert_eq!(first, second, "{} -> {} ({:?})", from.name, to.name, profile);
        }
    }
}

#[test]
fn results_respect_detour_tolerance() {
    let router = HaversineRouter::default();
    let composer = RouteComposer::new(MapGeocoder::landmarks(), HaversineRouter::default(), tula_catalog());
    let mut augmented_routes = 0;

    for (from, to) in landmark_pairs() {
        let base = router.route(&[from.coords(), to.coords()]).unwrap();
        for profile in MobilityProfile::ALL {
            let result = composer
                .build_route(&Endpoint::address(from.name), &Endpoint::address(to.name), profile)
                .expect("landmarks resolve and straight-line routing never fails");

            if result.augmented {
                augmented_routes += 1;
                let limit = base.distance_m * (1.0 + MAX_DETOUR_RATIO);
                assert!(result.total_distance_m as f64 <= limit.round());
                let selected: Vec<_> = composer
                    .select_waypoints(&base.polyline, profile)
                    .into_iter()
                    .map(|candidate| candidate.feature.id)
                    .collect();
                let used: Vec<_> = result.used_features.iter().map(|feature| feature.id).collect();
                assert_eq!(used, selected);
            } else {
                assert!(result.used_features.is_empty());
                assert_eq!(result.polyline, base.polyline);
                assert_eq!(result.total_distance_m, base.distance_m.round() as u64);
            }
        }
    }

    assert!(augmented_routes > 0, "the sample catalog should augment at least one route");
}

#[test]
fn composer_serves_concurrent_requests() {
    let composer = RouteComposer::new(MapGeocoder::landmarks(), HaversineRouter::default(), tula_catalog());
    let (from, to) = (&LANDMARKS[0], &LANDMARKS[2]);
    let expected = composer
        .build_route(
            &Endpoint::address(from.name),
            &Endpoint::address(to.name),
            MobilityProfile::LowVision,
        )
        .unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    composer
                        .build_route(
                            &Endpoint::address(from.name),
                            &Endpoint::address(to.name),
                            MobilityProfile::LowVision,
                        )
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn kremlin_to_station_passes_wheelchair_features() {
    let composer = RouteComposer::new(MapGeocoder::landmarks(), HaversineRouter::default(), tula_catalog());

    let result = composer
        .build_route(
            &Endpoint::address(fixtures::KREMLIN.name),
            &Endpoint::address(fixtures::RAILWAY_STATION.name),
            MobilityProfile::Wheelchair,
        )
        .unwrap();

    // The Kremlin ramp sits on the origin itself and costs no detour.
    assert!(result.augmented);
    assert_eq!(result.used_features[0].description, "Ramp at the administration");
    assert!(result.description.contains("with improved comfort"));
}
