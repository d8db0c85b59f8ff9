use crate::ephemeris::oracle::Ephemeris;
use crate::ephemeris::types::{EphemerisSettings, GeoLocation};
use crate::time::JulianDay;
use crate::vedic::types::{normalize_degrees, Planet};
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex, set_ephe_path};
use swisseph::AscMc;
use thiserror::Error;

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: String, valid: Vec<String> },
    #[error("Failed to calculate position for {planet_id} at JD {julian_day}: {message}")]
    CalculationFailed {
        planet_id: String,
        julian_day: f64,
        message: String,
    },
    #[error("{planet} is derived from the lunar node and cannot be queried")]
    UnsupportedBody { planet: Planet },
    #[error("Ephemeris unavailable: {reason}")]
    Unavailable { reason: String },
}

pub const DEFAULT_EPHEMERIS_PATH: &str = "/usr/local/share/swisseph";
pub const EPHEMERIS_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";

// Swiss Ephemeris body numbers. Rahu is the mean lunar node.
const PLANET_IDS: &[(Planet, i32)] = &[
    (Planet::Sun, 0),
    (Planet::Moon, 1),
    (Planet::Mercury, 2),
    (Planet::Venus, 3),
    (Planet::Mars, 4),
    (Planet::Jupiter, 5),
    (Planet::Saturn, 6),
    (Planet::Rahu, 10),
];

/// House system mapping
const HOUSE_SYSTEMS: &[(&str, u8)] = &[
    ("placidus", b'P'),
    ("whole_sign", b'W'),
    ("koch", b'K'),
    ("equal", b'E'),
    ("regiomontanus", b'R'),
    ("campanus", b'C'),
    ("alcabitius", b'A'),
    ("morinus", b'M'),
];

// FLG_SWIEPH
const FLAG_SWIEPH: i32 = 2;
// FLG_SIDEREAL, relative to the library's default sidereal mode
const FLAG_SIDEREAL: i32 = 64;

lazy_static::lazy_static! {
    // The C library keeps global state; one caller at a time.
    static ref SWE_LOCK: Mutex<()> = Mutex::new(());
}

fn swe_lock() -> MutexGuard<'static, ()> {
    SWE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Swiss Ephemeris adapter implementation
#[derive(Debug)]
pub struct SwissEphemerisAdapter {
    ephemeris_path: PathBuf,
    house_system: u8,
}

impl SwissEphemerisAdapter {
    /// Create a new adapter. The data path comes from the settings, then
    /// `SWISS_EPHEMERIS_PATH`, then the system default.
    pub fn new(settings: &EphemerisSettings) -> Result<Self, EphemerisError> {
        let path = settings.ephemeris_path.clone().unwrap_or_else(|| {
            env::var(EPHEMERIS_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_EPHEMERIS_PATH))
        });

        if !path.exists() {
            return Err(EphemerisError::FileNotFound {
                path: path.display().to_string(),
                message: "Ephemeris path does not exist. Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }

        let house_system = get_house_system_byte(&settings.house_system)?;
        {
            let _guard = swe_lock();
            set_ephe_path(&path.to_string_lossy());
        }

        let adapter = Self {
            ephemeris_path: path,
            house_system,
        };
        log::debug!(
            "Swiss Ephemeris adapter ready (path {}, house system {})",
            adapter.ephemeris_path().display(),
            settings.house_system
        );
        Ok(adapter)
    }

    pub fn ephemeris_path(&self) -> &Path {
        &self.ephemeris_path
    }

    fn calc_longitude(&self, planet: Planet, jd: f64, flags: i32) -> Result<f64, EphemerisError> {
        let planet_code = PLANET_IDS
            .iter()
            .find(|(p, _)| *p == planet)
            .map(|(_, code)| *code)
            .ok_or(EphemerisError::UnsupportedBody { planet })?;

        let result = {
            let _guard = swe_lock();
            calc_ut(jd, planet_code as u32, flags as u32)
        }
        .map_err(|e| EphemerisError::CalculationFailed {
            planet_id: planet.name().to_lowercase(),
            julian_day: jd,
            message: format!("Swiss Ephemeris error: {}", e),
        })?;

        let longitude = result.out[0];
        if !longitude.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                planet_id: planet.name().to_lowercase(),
                julian_day: jd,
                message: format!("non-finite longitude {}", longitude),
            });
        }
        Ok(normalize_degrees(longitude))
    }
}

impl Ephemeris for SwissEphemerisAdapter {
    fn ascendant(&self, jd: JulianDay, location: GeoLocation) -> Result<f64, EphemerisError> {
        let (_cusps, ascmc) = {
            let _guard = swe_lock();
            houses_ex(
                jd.value(),
                FLAG_SWIEPH,
                location.lat,
                location.lon,
                self.house_system as i32,
            )
        };
        let asc = AscMc::from_array(ascmc).ascendant;
        if !asc.is_finite() {
            return Err(EphemerisError::CalculationFailed {
                planet_id: "asc".to_string(),
                julian_day: jd.value(),
                message: format!("non-finite ascendant {}", asc),
            });
        }
        Ok(normalize_degrees(asc))
    }

    fn longitude_of(&self, planet: Planet, jd: JulianDay) -> Result<f64, EphemerisError> {
        self.calc_longitude(planet, jd.value(), FLAG_SWIEPH)
    }

    /// Difference between the tropical and sidereal solar longitude, which
    /// is the library's ayanamsa for its default sidereal mode.
    fn ayanamsa_at(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        let tropical = self.calc_longitude(Planet::Sun, jd.value(), FLAG_SWIEPH)?;
        let sidereal = self.calc_longitude(Planet::Sun, jd.value(), FLAG_SWIEPH | FLAG_SIDEREAL)?;
        Ok(normalize_degrees(tropical - sidereal))
    }
}

/// Convert house system string to byte format
fn get_house_system_byte(house_system: &str) -> Result<u8, EphemerisError> {
    HOUSE_SYSTEMS
        .iter()
        .find(|(name, _)| *name == house_system.to_lowercase())
        .map(|(_, byte)| *byte)
        .ok_or_else(|| EphemerisError::InvalidHouseSystem {
            system: house_system.to_string(),
            valid: HOUSE_SYSTEMS.iter().map(|(name, _)| name.to_string()).collect(),
        })
}
