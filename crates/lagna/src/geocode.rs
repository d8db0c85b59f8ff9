//! Location text to coordinates.

use crate::ephemeris::GeoLocation;
use crate::error::ChartError;

/// Resolves free-text places to coordinates.
pub trait Geocoder: Send + Sync {
    fn resolve_location(&self, text: &str) -> Result<GeoLocation, ChartError>;
}

pub const DELHI: GeoLocation = GeoLocation { lat: 28.6139, lon: 77.2090 };

// Checked in order; the first key contained in the query wins.
const KNOWN_PLACES: &[(&str, GeoLocation)] = &[
    ("new york", GeoLocation { lat: 40.7128, lon: -74.0060 }),
    ("london", GeoLocation { lat: 51.5074, lon: -0.1278 }),
    ("tokyo", GeoLocation { lat: 35.6762, lon: 139.6503 }),
    ("delhi", DELHI),
    ("mumbai", GeoLocation { lat: 19.0760, lon: 72.8777 }),
    ("bangalore", GeoLocation { lat: 12.9716, lon: 77.5946 }),
    ("chennai", GeoLocation { lat: 13.0827, lon: 80.2707 }),
    ("hyderabad", GeoLocation { lat: 17.3850, lon: 78.4867 }),
    ("kolkata", GeoLocation { lat: 22.5726, lon: 88.3639 }),
    ("pune", GeoLocation { lat: 18.5204, lon: 73.8567 }),
];

/// Substring lookup over a fixed table of cities.
#[derive(Debug, Clone)]
pub struct StaticGeocoder {
    default: Option<GeoLocation>,
}

impl StaticGeocoder {
    /// Unmatched places resolve to Delhi.
    pub fn new() -> Self {
        Self {
            default: Some(DELHI),
        }
    }

    /// Unmatched places are an error instead of a default.
    pub fn strict() -> Self {
        Self { default: None }
    }

    pub fn lookup(text: &str) -> Option<GeoLocation> {
        let query = text.to_lowercase();
        KNOWN_PLACES
            .iter()
            .find(|(key, _)| query.contains(key))
            .map(|(_, location)| *location)
    }
}

impl Default for StaticGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for StaticGeocoder {
    fn resolve_location(&self, text: &str) -> Result<GeoLocation, ChartError> {
        match Self::lookup(text).or(self.default) {
            Some(location) => Ok(location),
            None => Err(ChartError::UnknownLocation {
                query: text.to_string(),
            }),
        }
    }
}
