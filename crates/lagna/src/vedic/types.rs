//! Vedic chart types and zodiac arithmetic.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SIGN_SPAN: f64 = 30.0;
pub const HOUSE_COUNT: u8 = 12;

/// The nine grahas in chart order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Rahu,
    Ketu,
}

impl Planet {
    pub const ALL: [Planet; 9] = [
        Planet::Sun,
        Planet::Moon,
        Planet::Mercury,
        Planet::Venus,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Rahu,
        Planet::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Planet::Sun => "Sun",
            Planet::Moon => "Moon",
            Planet::Mercury => "Mercury",
            Planet::Venus => "Venus",
            Planet::Mars => "Mars",
            Planet::Jupiter => "Jupiter",
            Planet::Saturn => "Saturn",
            Planet::Rahu => "Rahu",
            Planet::Ketu => "Ketu",
        }
    }

    /// Bodies whose longitude comes straight from the ephemeris. Ketu is
    /// always derived from Rahu.
    pub fn is_queried(self) -> bool {
        self != Planet::Ketu
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Wraps modulo 12.
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_longitude(longitude: f64) -> Sign {
        Self::from_index(sign_index(longitude))
    }

    /// Sign occupying `house` when `self` is rising.
    pub fn house_sign(self, house: u8) -> Sign {
        Self::from_index(self.index() + house as usize - 1)
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Normalize degrees to [0, 360).
///
/// `rem_euclid` rounds tiny negative inputs up to exactly 360.0, which is
/// folded back to 0.
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Zero-based sign index (0 = Aries) of a longitude.
pub fn sign_index(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / SIGN_SPAN).floor() as usize).min(11)
}

/// Whole-sign house of `sign` counted from the ascendant.
pub fn house_number(sign: Sign, ascendant: Sign) -> u8 {
    ((sign.index() + 12 - ascendant.index()) % 12) as u8 + 1
}

/// Where a planet sits in the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: Planet,
    pub house: u8,
    pub sign: Sign,
    /// Degrees within the sign, 0 <= d < 30.
    pub degrees: f64,
    /// Sidereal longitude in [0, 360).
    #[serde(default)]
    pub longitude: f64,
}

impl PlanetPosition {
    /// Derive sign, house and in-sign degree from a sidereal longitude.
    pub fn from_sidereal(planet: Planet, sidereal: f64, ascendant: Sign) -> Self {
        let longitude = normalize_degrees(sidereal);
        let sign = Sign::from_longitude(longitude);
        Self {
            planet,
            house: house_number(sign, ascendant),
            sign,
            degrees: longitude % SIGN_SPAN,
            longitude,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    pub number: u8,
    pub sign: Sign,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
}

/// Whether the chart came from the ephemeris or from the fallback generator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStatus {
    #[default]
    Computed,
    Synthetic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    pub ascendant: Sign,
    #[serde(default)]
    pub houses: Vec<House>,
    #[serde(default)]
    pub planets: Vec<PlanetPosition>,
    #[serde(default)]
    pub status: ChartStatus,
}

impl Chart {
    /// Lay out the twelve houses from `ascendant` and file each planet
    /// under its house, keeping planet order.
    pub fn assemble(ascendant: Sign, planets: Vec<PlanetPosition>, status: ChartStatus) -> Self {
        let mut houses: Vec<House> = (1..=HOUSE_COUNT)
            .map(|number| House {
                number,
                sign: ascendant.house_sign(number),
                planets: Vec::new(),
            })
            .collect();

        for position in &planets {
            if let Some(house) = houses.iter_mut().find(|h| h.number == position.house) {
                house.planets.push(position.clone());
            }
        }

        Self {
            ascendant,
            houses,
            planets,
            status,
        }
    }

    pub fn planet(&self, planet: Planet) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == planet)
    }

    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }

    pub fn is_synthetic(&self) -> bool {
        self.status == ChartStatus::Synthetic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }

    #[test]
    fn test_sign_from_longitude() {
        assert_eq!(Sign::from_longitude(0.0), Sign::Aries);
        assert_eq!(Sign::from_longitude(29.999), Sign::Aries);
        assert_eq!(Sign::from_longitude(30.0), Sign::Taurus);
        assert_eq!(Sign::from_longitude(359.9), Sign::Pisces);
        assert_eq!(Sign::from_longitude(-15.0), Sign::Pisces);
    }

    #[test]
    fn test_house_number_wraps() {
        assert_eq!(house_number(Sign::Leo, Sign::Leo), 1);
        assert_eq!(house_number(Sign::Cancer, Sign::Leo), 12);
        assert_eq!(house_number(Sign::Aries, Sign::Capricorn), 4);
    }

    #[test]
    fn test_assemble_files_planets_by_house() {
        let sun = PlanetPosition::from_sidereal(Planet::Sun, 95.0, Sign::Cancer);
        let moon = PlanetPosition::from_sidereal(Planet::Moon, 100.0, Sign::Cancer);
        let chart = Chart::assemble(Sign::Cancer, vec![sun, moon], ChartStatus::Computed);

        assert_eq!(chart.houses.len(), 12);
        assert_eq!(chart.houses[0].sign, Sign::Cancer);
        assert_eq!(chart.houses[11].sign, Sign::Gemini);
        let first = chart.house(1).unwrap();
        assert_eq!(first.planets.len(), 2);
        assert_eq!(first.planets[0].planet, Planet::Sun);
        assert_eq!(first.planets[1].planet, Planet::Moon);
    }

    #[test]
    fn test_status_defaults_to_computed() {
        let chart: Chart = serde_json::from_str(r#"{"ascendant":"Leo"}"#).unwrap();
        assert_eq!(chart.status, ChartStatus::Computed);
        assert!(chart.planets.is_empty());
    }
}
