//! The ephemeris seam used by the chart builder.

use crate::ephemeris::adapter::EphemerisError;
use crate::ephemeris::types::GeoLocation;
use crate::time::JulianDay;
use crate::vedic::types::Planet;
use std::collections::HashMap;

/// Source of raw (tropical) ecliptic longitudes.
///
/// Implementations must be safe to share between threads; the chart builder
/// only ever reads from them.
pub trait Ephemeris: Send + Sync {
    /// Tropical longitude of the ascendant for a time and place.
    fn ascendant(&self, jd: JulianDay, location: GeoLocation) -> Result<f64, EphemerisError>;

    /// Tropical longitude of a body. Ketu is not an ephemeris body.
    fn longitude_of(&self, planet: Planet, jd: JulianDay) -> Result<f64, EphemerisError>;

    /// Ayanamsa in degrees at `jd`.
    fn ayanamsa_at(&self, jd: JulianDay) -> Result<f64, EphemerisError>;
}

impl<E: Ephemeris + ?Sized> Ephemeris for Box<E> {
    fn ascendant(&self, jd: JulianDay, location: GeoLocation) -> Result<f64, EphemerisError> {
        (**self).ascendant(jd, location)
    }

    fn longitude_of(&self, planet: Planet, jd: JulianDay) -> Result<f64, EphemerisError> {
        (**self).longitude_of(planet, jd)
    }

    fn ayanamsa_at(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        (**self).ayanamsa_at(jd)
    }
}

/// Table-driven ephemeris returning the same values for every instant.
///
/// Used for replaying known charts, benches and tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    ascendant: f64,
    ayanamsa: f64,
    longitudes: HashMap<Planet, f64>,
}

impl FixedEphemeris {
    pub fn new(ascendant: f64, ayanamsa: f64) -> Self {
        Self {
            ascendant,
            ayanamsa,
            longitudes: HashMap::new(),
        }
    }

    pub fn with_longitude(mut self, planet: Planet, longitude: f64) -> Self {
        self.longitudes.insert(planet, longitude);
        self
    }

    /// Fill every queried body from `(planet, longitude)` pairs.
    pub fn with_longitudes(mut self, longitudes: &[(Planet, f64)]) -> Self {
        self.longitudes.extend(longitudes.iter().copied());
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn ascendant(&self, _jd: JulianDay, _location: GeoLocation) -> Result<f64, EphemerisError> {
        Ok(self.ascendant)
    }

    fn longitude_of(&self, planet: Planet, jd: JulianDay) -> Result<f64, EphemerisError> {
        if !planet.is_queried() {
            return Err(EphemerisError::UnsupportedBody { planet });
        }
        self.longitudes
            .get(&planet)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                planet_id: planet.name().to_lowercase(),
                julian_day: jd.value(),
                message: "no longitude in table".to_string(),
            })
    }

    fn ayanamsa_at(&self, _jd: JulianDay) -> Result<f64, EphemerisError> {
        Ok(self.ayanamsa)
    }
}

/// Ephemeris stand-in for when no data source could be opened. Every query
/// fails with the stored reason, so charts degrade to synthetic ones.
#[derive(Debug, Clone)]
pub struct UnavailableEphemeris {
    reason: String,
}

impl UnavailableEphemeris {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn fail(&self) -> EphemerisError {
        EphemerisError::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

impl Ephemeris for UnavailableEphemeris {
    fn ascendant(&self, _jd: JulianDay, _location: GeoLocation) -> Result<f64, EphemerisError> {
        Err(self.fail())
    }

    fn longitude_of(&self, _planet: Planet, _jd: JulianDay) -> Result<f64, EphemerisError> {
        Err(self.fail())
    }

    fn ayanamsa_at(&self, _jd: JulianDay) -> Result<f64, EphemerisError> {
        Err(self.fail())
    }
}
