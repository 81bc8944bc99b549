//! Central Tula landmarks for realistic fixtures.
//!
//! All lie within the built-in sample catalog's coverage area and are
//! routable with OSRM foot data for the Central Federal District.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

pub const KREMLIN: Location = Location::new("Tula Kremlin", 54.1965, 37.6140);
pub const LENINA_SQUARE: Location = Location::new("Lenina Square", 54.1928, 37.6168);
pub const RAILWAY_STATION: Location = Location::new("Tula-1 railway station", 54.1910, 37.6250);
pub const MAXI_MALL: Location = Location::new("Maxi mall", 54.2020, 37.6300);
pub const CENTRAL_PARK: Location = Location::new("Central Park", 54.1900, 37.6100);
pub const KAULYA_SCHOOL: Location = Location::new("Kaulya St school", 54.1850, 37.6100);
pub const RIO_MALL: Location = Location::new("Rio shopping center", 54.2080, 37.6350);
pub const PUZAKOVA_SHOP: Location = Location::new("Puzakova St shop", 54.1880, 37.6220);

pub const LANDMARKS: &[Location] = &[
    KREMLIN,
    LENINA_SQUARE,
    RAILWAY_STATION,
    MAXI_MALL,
    CENTRAL_PARK,
    KAULYA_SCHOOL,
    RIO_MALL,
    PUZAKOVA_SHOP,
];
