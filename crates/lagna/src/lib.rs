pub mod api;
pub mod ephemeris;
pub mod error;
pub mod geocode;
pub mod insight;
pub mod time;
pub mod vedic;

pub use api::{ApiResponse, AstrologyService, BirthChartRequest, ChatRequest};
pub use error::ChartError;
pub use geocode::{Geocoder, StaticGeocoder};
pub use time::{BirthInput, JulianDay};
pub use vedic::{build_chart, Chart, ChartService, ChartStatus, FallbackPolicy, Planet, Sign};

use ephemeris::{Ephemeris, EphemerisSettings, SwissEphemerisAdapter, UnavailableEphemeris};

/// Open the Swiss Ephemeris, or an always-failing stand-in when it cannot
/// be opened so that charts degrade to synthetic ones instead of erroring.
pub fn open_ephemeris(settings: &EphemerisSettings) -> Box<dyn Ephemeris> {
    match SwissEphemerisAdapter::new(settings) {
        Ok(adapter) => Box::new(adapter),
        Err(e) => {
            log::warn!("Swiss Ephemeris unavailable, charts will be synthetic: {}", e);
            Box::new(UnavailableEphemeris::new(e.to_string()))
        }
    }
}
