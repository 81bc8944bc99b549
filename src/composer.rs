//! Route composer: base route, waypoint augmentation and the detour fallback.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::description::{RouteSummary, describe};
use crate::error::RouteError;
use crate::model::{FeatureSummary, MobilityProfile, RouteQuote};
use crate::polyline::Polyline;
use crate::proximity::{CorridorOptions, find_candidates};
use crate::scorer::{ScoredCandidate, ScoringWeights, score_candidates};
use crate::selector::{SelectionOptions, select};
use crate::traits::{FeatureCatalog, Geocoder, Router};

/// Default tolerated growth of the augmented route over the base route (25%).
pub const MAX_DETOUR_RATIO: f64 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AugmentOptions {
    /// The augmented route is rejected when its distance exceeds
    /// `base * (1 + max_detour_ratio)`.
    pub max_detour_ratio: f64,
    pub corridor: CorridorOptions,
    pub scoring: ScoringWeights,
    pub selection: SelectionOptions,
}

impl Default for AugmentOptions {
    fn default() -> Self {
        Self {
            max_detour_ratio: MAX_DETOUR_RATIO,
            corridor: CorridorOptions::default(),
            scoring: ScoringWeights::default(),
            selection: SelectionOptions::default(),
        }
    }
}

/// Where a route starts or ends.
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Free-text address, resolved through the geocoder.
    Address(String),
    Coordinates { lat: f64, lon: f64 },
    /// The traveler's own position, reported by the client device.
    CurrentLocation { lat: f64, lon: f64 },
}

impl Endpoint {
    pub fn address(address: impl Into<String>) -> Self {
        Endpoint::Address(address.into())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedEndpoint {
    pub label: String,
    pub lat: f64,
    pub lon: f64,
}

impl ResolvedEndpoint {
    fn location(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResult {
    pub origin: ResolvedEndpoint,
    pub destination: ResolvedEndpoint,
    pub profile: MobilityProfile,
    pub total_distance_m: u64,
    pub total_duration_min: u64,
    pub polyline: Polyline,
    /// Features the route passes, in travel order. Empty on fallback.
    pub used_features: Vec<FeatureSummary>,
    /// Whether the returned geometry is the multi-stop route.
    pub augmented: bool,
    pub description: String,
}

/// Builds accessibility-augmented routes from injected collaborators.
///
/// Holds no mutable state; concurrent calls share only read access to the
/// catalog.
#[derive(Debug)]
pub struct RouteComposer<G, R, C> {
    geocoder: G,
    router: R,
    catalog: C,
    options: AugmentOptions,
}

impl<G, R, C> RouteComposer<G, R, C>
where
    G: Geocoder,
    R: Router,
    C: FeatureCatalog + Sync,
{
    pub fn new(geocoder: G, router: R, catalog: C) -> Self {
        Self::with_options(geocoder, router, catalog, AugmentOptions::default())
    }

    pub fn with_options(geocoder: G, router: R, catalog: C, options: AugmentOptions) -> Self {
        Self {
            geocoder,
            router,
            catalog,
            options,
        }
    }

    pub fn build_route(
        &self,
        origin: &Endpoint,
        destination: &Endpoint,
        profile: MobilityProfile,
    ) -> Result<RouteResult, RouteError> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;

        let base = self
            .router
            .route(&[origin.location(), destination.location()])
            .map_err(|source| {
                warn!(error = %source, "base route failed");
                RouteError::Route { source }
            })?;
        info!(
            distance_m = base.distance_m,
            points = base.polyline.len(),
            %profile,
            "base route"
        );

        let waypoints = self.select_waypoints(&base.polyline, profile);

        let (quote, used) = if waypoints.is_empty() {
            debug!("no waypoints selected, keeping base route");
            (base, Vec::new())
        } else {
            self.augment(&origin, &destination, base, waypoints)
        };

        let used_features: Vec<FeatureSummary> =
            used.iter().map(|candidate| FeatureSummary::from(&candidate.feature)).collect();
        let total_distance_m = quote.distance_m.max(0.0).round() as u64;
        let total_duration_min = (quote.duration_s.max(0.0) / 60.0).floor() as u64;

        let description = describe(&RouteSummary {
            origin: &origin.label,
            destination: &destination.label,
            profile,
            distance_m: total_distance_m,
            duration_min: total_duration_min,
            features: &used_features,
        });

        Ok(RouteResult {
            origin,
            destination,
            profile,
            total_distance_m,
            total_duration_min,
            polyline: quote.polyline,
            augmented: !used_features.is_empty(),
            used_features,
            description,
        })
    }

    /// Candidate search, scoring and selection against a fixed base route.
    ///
    /// Deterministic for a fixed route, catalog snapshot and profile.
    pub fn select_waypoints(&self, route: &Polyline, profile: MobilityProfile) -> Vec<ScoredCandidate> {
        let categories = profile.relevant_categories();
        let features = find_candidates(route, &categories, &self.catalog, &self.options.corridor);
        let scored = score_candidates(features, profile, route, &self.options.scoring);
        let selected = select(scored, &self.options.selection);
        debug!(
            selected = ?selected.iter().map(|c| c.feature.id.0).collect::<Vec<_>>(),
            "waypoints"
        );
        selected
    }

    fn augment(
        &self,
        origin: &ResolvedEndpoint,
        destination: &ResolvedEndpoint,
        base: RouteQuote,
        waypoints: Vec<ScoredCandidate>,
    ) -> (RouteQuote, Vec<ScoredCandidate>) {
        let mut stops = Vec::with_capacity(waypoints.len() + 2);
        stops.push(origin.location());
        stops.extend(waypoints.iter().map(|candidate| candidate.feature.location()));
        stops.push(destination.location());

        let limit = base.distance_m * (1.0 + self.options.max_detour_ratio);
        match self.router.route(&stops) {
            Ok(augmented) if augmented.distance_m <= limit => {
                info!(
                    distance_m = augmented.distance_m,
                    base_m = base.distance_m,
                    waypoints = waypoints.len(),
                    "using augmented route"
                );
                (augmented, waypoints)
            }
            Ok(augmented) => {
                info!(
                    distance_m = augmented.distance_m,
                    limit_m = limit,
                    "augmented route exceeds detour tolerance, falling back"
                );
                (base, Vec::new())
            }
            Err(err) => {
                warn!(error = %err, "augmented route failed, falling back");
                (base, Vec::new())
            }
        }
    }

    fn resolve(&self, endpoint: &Endpoint) -> Result<ResolvedEndpoint, RouteError> {
        match endpoint {
            Endpoint::Address(address) => {
                let (lat, lon) = self.geocoder.geocode(address).map_err(|source| {
                    warn!(%address, error = %source, "geocoding failed");
                    RouteError::Geocode {
                        address: address.clone(),
                        source,
                    }
                })?;
                Ok(ResolvedEndpoint {
                    label: address.clone(),
                    lat,
                    lon,
                })
            }
            Endpoint::Coordinates { lat, lon } => Ok(ResolvedEndpoint {
                label: format!("{:.6}, {:.6}", lat, lon),
                lat: *lat,
                lon: *lon,
            }),
            Endpoint::CurrentLocation { lat, lon } => Ok(ResolvedEndpoint {
                label: "Current location".to_string(),
                lat: *lat,
                lon: *lon,
            }),
        }
    }
}
