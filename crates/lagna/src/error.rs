use crate::ephemeris::EphemerisError;
use thiserror::Error;

/// Errors surfaced to callers of the chart and chat operations.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid birth date '{input}': {message}")]
    InvalidDate { input: String, message: String },
    #[error("Coordinates out of range: lat {lat}, lon {lon} (expected lat in [-90, 90], lon in [-180, 180])")]
    InvalidCoordinates { lat: f64, lon: f64 },
    #[error("Could not resolve location '{query}'")]
    UnknownLocation { query: String },
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("Invalid request body: {0}")]
    InvalidRequest(#[from] serde_json::Error),
}
