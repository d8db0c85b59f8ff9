use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Geographic location coordinates
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Settings for the Swiss Ephemeris adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EphemerisSettings {
    /// Directory holding the `.se1` data files. Falls back to
    /// `SWISS_EPHEMERIS_PATH`, then the system default.
    #[serde(default)]
    pub ephemeris_path: Option<PathBuf>,
    /// House system used for the ascendant query
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

fn default_house_system() -> String {
    "placidus".to_string()
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            house_system: default_house_system(),
        }
    }
}
