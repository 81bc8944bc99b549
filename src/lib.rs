//! access-planner core
//!
//! Pedestrian routes augmented with accessibility features (ramps, tactile
//! paving, audio signals, handrails) relevant to a mobility profile.
//!
//! A request runs one sequential pipeline: geocode both endpoints, fetch the
//! shortest route, search the feature catalog along it ([`proximity`]), rank
//! candidates ([`scorer`]), pick spaced waypoints ([`selector`]), then re-route
//! through them and fall back to the shortest route when the detour is too
//! long ([`composer`]).
//!
//! Geocoding, routing and storage are injected through the traits in
//! [`traits`].

pub mod traits;
pub mod model;
pub mod error;
pub mod polyline;
pub mod haversine;
pub mod catalog;
pub mod seed;
pub mod proximity;
pub mod scorer;
pub mod selector;
pub mod description;
pub mod composer;
pub mod osrm;
pub mod osrm_data;
pub mod nominatim;
pub mod config;

pub use composer::{AugmentOptions, Endpoint, RouteComposer, RouteResult, MAX_DETOUR_RATIO};
pub use error::{ProviderError, RouteError};
pub use model::{AccessibilityFeature, Category, MobilityProfile};
