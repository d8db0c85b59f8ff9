use chrono::{TimeZone, Utc};
use lagna::ephemeris::{Ephemeris, EphemerisError, FixedEphemeris, GeoLocation, UnavailableEphemeris};
use lagna::time::{BirthInput, JulianDay};
use lagna::vedic::types::{normalize_degrees, Sign};
use lagna::vedic::{build_chart, ChartService, ChartStatus, FallbackPolicy, Planet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::sync::Mutex;

const AYANAMSA: f64 = 23.85;

fn sample_ephemeris() -> FixedEphemeris {
    FixedEphemeris::new(100.0, AYANAMSA).with_longitudes(&[
        (Planet::Sun, 280.0),
        (Planet::Moon, 10.0),
        (Planet::Mercury, 265.0),
        (Planet::Venus, 300.0),
        (Planet::Mars, 330.0),
        (Planet::Jupiter, 25.0),
        (Planet::Saturn, 40.0),
        (Planet::Rahu, 125.0),
    ])
}

fn sample_birth() -> BirthInput {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    BirthInput::new(dt, GeoLocation { lat: 19.0760, lon: 72.8777 }).unwrap()
}

#[test]
fn test_build_chart_known_positions() {
    let chart = build_chart(&sample_ephemeris(), &sample_birth()).unwrap();

    assert_eq!(chart.ascendant, Sign::Gemini);
    assert_eq!(chart.status, ChartStatus::Computed);

    let expected = [
        (Planet::Sun, Sign::Sagittarius, 7, 16.15),
        (Planet::Moon, Sign::Pisces, 10, 16.15),
        (Planet::Mercury, Sign::Sagittarius, 7, 1.15),
        (Planet::Venus, Sign::Capricorn, 8, 6.15),
        (Planet::Mars, Sign::Aquarius, 9, 6.15),
        (Planet::Jupiter, Sign::Aries, 11, 1.15),
        (Planet::Saturn, Sign::Aries, 11, 16.15),
        (Planet::Rahu, Sign::Cancer, 2, 11.15),
        (Planet::Ketu, Sign::Capricorn, 8, 11.15),
    ];
    assert_eq!(chart.planets.len(), expected.len());
    for (position, (planet, sign, house, degrees)) in chart.planets.iter().zip(expected) {
        assert_eq!(position.planet, planet);
        assert_eq!(position.sign, sign, "{}", planet);
        assert_eq!(position.house, house, "{}", planet);
        assert!((position.degrees - degrees).abs() < 1e-9, "{} at {}", planet, position.degrees);
    }
}

#[test]
fn test_planets_filed_in_enumeration_order() {
    let chart = build_chart(&sample_ephemeris(), &sample_birth()).unwrap();

    let seventh = chart.house(7).unwrap();
    let names: Vec<Planet> = seventh.planets.iter().map(|p| p.planet).collect();
    assert_eq!(names, vec![Planet::Sun, Planet::Mercury]);

    let eighth = chart.house(8).unwrap();
    let names: Vec<Planet> = eighth.planets.iter().map(|p| p.planet).collect();
    assert_eq!(names, vec![Planet::Venus, Planet::Ketu]);

    assert!(chart.house(1).unwrap().planets.is_empty());
}

#[test]
fn test_chart_properties_hold_for_random_longitudes() {
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for _ in 0..200 {
        let mut ephemeris = FixedEphemeris::new(rng.gen_range(0.0..360.0), rng.gen_range(20.0..26.0));
        for planet in Planet::ALL.iter().filter(|p| p.is_queried()) {
            ephemeris = ephemeris.with_longitude(*planet, rng.gen_range(0.0..360.0));
        }
        let chart = build_chart(&ephemeris, &sample_birth()).unwrap();

        let numbers: Vec<u8> = chart.houses.iter().map(|h| h.number).collect();
        assert_eq!(numbers, (1..=12).collect::<Vec<u8>>());
        for (offset, house) in chart.houses.iter().enumerate() {
            assert_eq!(house.sign, Sign::from_index(chart.ascendant.index() + offset));
        }

        for position in &chart.planets {
            assert!(position.degrees >= 0.0 && position.degrees < 30.0);
            assert!((1..=12).contains(&position.house));
            assert!(chart.house(position.house).unwrap().planets.contains(position));
        }

        let rahu = chart.planet(Planet::Rahu).unwrap();
        let ketu = chart.planet(Planet::Ketu).unwrap();
        assert_eq!(ketu.longitude.to_bits(), normalize_degrees(rahu.longitude + 180.0).to_bits());
    }
}

#[test]
fn test_negative_sidereal_ascendant_wraps_to_pisces() {
    // 10° tropical minus 24° ayanamsa is 346° sidereal.
    let ephemeris = FixedEphemeris::new(10.0, 24.0).with_longitudes(&[
        (Planet::Sun, 0.0),
        (Planet::Moon, 0.0),
        (Planet::Mercury, 0.0),
        (Planet::Venus, 0.0),
        (Planet::Mars, 0.0),
        (Planet::Jupiter, 0.0),
        (Planet::Saturn, 0.0),
        (Planet::Rahu, 0.0),
    ]);
    let chart = build_chart(&ephemeris, &sample_birth()).unwrap();
    assert_eq!(chart.ascendant, Sign::Pisces);
    assert_eq!(chart.planet(Planet::Sun).unwrap().house, 1);
    assert_eq!(chart.planet(Planet::Ketu).unwrap().sign, Sign::Virgo);
}

#[test]
fn test_build_chart_is_idempotent() {
    let ephemeris = sample_ephemeris();
    let first = build_chart(&ephemeris, &sample_birth()).unwrap();
    let second = build_chart(&ephemeris, &sample_birth()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_body_fails_whole_chart() {
    let ephemeris = FixedEphemeris::new(100.0, AYANAMSA).with_longitude(Planet::Sun, 280.0);
    let result = build_chart(&ephemeris, &sample_birth());
    assert!(matches!(result, Err(EphemerisError::CalculationFailed { .. })));
}

#[test]
fn test_fixed_ephemeris_refuses_ketu() {
    let result = sample_ephemeris().longitude_of(Planet::Ketu, JulianDay::new(2451545.0));
    assert!(matches!(result, Err(EphemerisError::UnsupportedBody { .. })));
}

#[test]
fn test_service_marks_fallback_as_synthetic() {
    let service = ChartService::new(
        Box::new(UnavailableEphemeris::new("no data files")),
        FallbackPolicy::Random,
    );
    let chart = service.chart_for(&sample_birth());

    assert!(chart.is_synthetic());
    assert_eq!(chart.houses.len(), 12);
    assert_eq!(chart.planets.len(), 9);
}

#[test]
fn test_partial_failure_is_not_leaked() {
    let broken = FixedEphemeris::new(100.0, AYANAMSA).with_longitude(Planet::Sun, 280.0);
    let service = ChartService::new(Box::new(broken), FallbackPolicy::Seeded);
    let chart = service.chart_for(&sample_birth());

    assert_eq!(chart.status, ChartStatus::Synthetic);
    assert_eq!(chart.planets.len(), 9);
}

#[test]
fn test_seeded_fallback_repeats_for_same_birth() {
    let service = ChartService::new(Box::new(UnavailableEphemeris::new("offline")), FallbackPolicy::Seeded);
    assert_eq!(service.fallback_policy(), FallbackPolicy::Seeded);
    assert_eq!(service.chart_for(&sample_birth()), service.chart_for(&sample_birth()));
}

#[test]
fn test_service_passes_computed_chart_through() {
    let service = ChartService::new(Box::new(sample_ephemeris()), FallbackPolicy::Random);
    let chart = service.chart_for(&sample_birth());
    assert_eq!(chart.status, ChartStatus::Computed);
    assert_eq!(chart.ascendant, Sign::Gemini);
}

/// Remembers the place it was asked about.
struct RecordingEphemeris {
    inner: FixedEphemeris,
    seen: Mutex<Option<(JulianDay, GeoLocation)>>,
}

impl Ephemeris for RecordingEphemeris {
    fn ascendant(&self, jd: JulianDay, location: GeoLocation) -> Result<f64, EphemerisError> {
        *self.seen.lock().unwrap() = Some((jd, location));
        self.inner.ascendant(jd, location)
    }

    fn longitude_of(&self, planet: Planet, jd: JulianDay) -> Result<f64, EphemerisError> {
        self.inner.longitude_of(planet, jd)
    }

    fn ayanamsa_at(&self, jd: JulianDay) -> Result<f64, EphemerisError> {
        self.inner.ayanamsa_at(jd)
    }
}

#[test]
fn test_builder_queries_birth_time_and_place() {
    let ephemeris = RecordingEphemeris {
        inner: sample_ephemeris(),
        seen: Mutex::new(None),
    };
    build_chart(&ephemeris, &sample_birth()).unwrap();

    let seen = *ephemeris.seen.lock().unwrap();
    let (jd, location) = seen.unwrap();
    assert_eq!(jd.value(), 2451544.5);
    assert_eq!(location, GeoLocation { lat: 19.0760, lon: 72.8777 });
}
