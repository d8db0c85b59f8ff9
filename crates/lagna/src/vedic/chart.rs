//! Sidereal chart construction.
//!
//! The ephemeris supplies tropical longitudes; everything here is whole-sign
//! arithmetic on top of them: subtract the ayanamsa, bucket into 30° signs,
//! and count houses from the ascendant's sign.

use crate::ephemeris::{Ephemeris, EphemerisError};
use crate::time::BirthInput;
use crate::vedic::fallback::{generate_mock_chart, random_mock_chart, seeded_rng, FallbackPolicy};
use crate::vedic::types::{normalize_degrees, Chart, ChartStatus, Planet, PlanetPosition, Sign};

/// Build a chart from the ephemeris. Any oracle failure aborts the whole
/// chart; nothing partial is returned.
pub fn build_chart(ephemeris: &dyn Ephemeris, input: &BirthInput) -> Result<Chart, EphemerisError> {
    let jd = input.julian_day();
    let ascendant_lon = ephemeris.ascendant(jd, input.location())?;
    let ayanamsa = ephemeris.ayanamsa_at(jd)?;
    let ascendant = Sign::from_longitude(ascendant_lon - ayanamsa);

    log::debug!(
        "{}: ascendant {:.4}° tropical, ayanamsa {:.4}°, rising {}",
        jd,
        ascendant_lon,
        ayanamsa,
        ascendant
    );

    let mut planets = Vec::with_capacity(Planet::ALL.len());
    let mut rahu_sidereal = None;

    for planet in Planet::ALL {
        let sidereal = if planet.is_queried() {
            let raw = ephemeris.longitude_of(planet, jd)?;
            normalize_degrees(raw - ayanamsa)
        } else {
            // Ketu sits opposite Rahu's sidereal longitude.
            let rahu = rahu_sidereal.ok_or(EphemerisError::UnsupportedBody { planet })?;
            normalize_degrees(rahu + 180.0)
        };

        if planet == Planet::Rahu {
            rahu_sidereal = Some(sidereal);
        }
        planets.push(PlanetPosition::from_sidereal(planet, sidereal, ascendant));
    }

    Ok(Chart::assemble(ascendant, planets, ChartStatus::Computed))
}

/// Chart builder with the degrade-to-synthetic recovery policy.
pub struct ChartService {
    ephemeris: Box<dyn Ephemeris>,
    fallback: FallbackPolicy,
}

impl ChartService {
    pub fn new(ephemeris: Box<dyn Ephemeris>, fallback: FallbackPolicy) -> Self {
        Self {
            ephemeris,
            fallback,
        }
    }

    pub fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }

    /// Always returns a chart. When the ephemeris fails the result is a
    /// synthetic chart, marked with `ChartStatus::Synthetic`.
    pub fn chart_for(&self, input: &BirthInput) -> Chart {
        match build_chart(self.ephemeris.as_ref(), input) {
            Ok(chart) => chart,
            Err(e) => {
                log::warn!(
                    "Ephemeris failed for {} ({}); returning synthetic chart: {}",
                    input.timestamp(),
                    self.fallback,
                    e
                );
                match self.fallback {
                    FallbackPolicy::Random => random_mock_chart(),
                    FallbackPolicy::Seeded => generate_mock_chart(&mut seeded_rng(input)),
                }
            }
        }
    }
}
