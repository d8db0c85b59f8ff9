//! Birth input parsing and Julian day conversion.

use crate::ephemeris::GeoLocation;
use crate::error::ChartError;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MJD_ZERO_POINT: f64 = 2_400_000.5;
pub const J2000_JD: f64 = 2_451_545.0;

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Continuous day count (UT) used by the ephemeris.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct JulianDay(f64);

impl JulianDay {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Gregorian calendar date plus decimal hours.
    pub fn from_calendar(year: i32, month: u32, day: u32, hours: f64) -> Self {
        let month = month as i32;
        let my = (month - 14) / 12;
        let iypmy = year + my;
        let mjd = ((1461 * (iypmy + 4800)) / 4 + (367 * (month - 2 - 12 * my)) / 12
            - (3 * ((iypmy + 4900) / 100)) / 4
            + day as i32
            - 2432076) as f64;

        Self(MJD_ZERO_POINT + mjd + hours / 24.0)
    }

    /// Whole seconds only; sub-second precision is irrelevant at chart scale.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        let hours = dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;
        Self::from_calendar(dt.year(), dt.month(), dt.day(), hours)
    }
}

impl fmt::Display for JulianDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JD {:.6}", self.0)
    }
}

impl From<DateTime<Utc>> for JulianDay {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::from_datetime(dt)
    }
}

/// Validated birth moment and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BirthInput {
    timestamp: DateTime<Utc>,
    location: GeoLocation,
}

impl BirthInput {
    pub fn new(timestamp: DateTime<Utc>, location: GeoLocation) -> Result<Self, ChartError> {
        let GeoLocation { lat, lon } = location;
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        if !lat_ok || !lon_ok {
            return Err(ChartError::InvalidCoordinates { lat, lon });
        }
        Ok(Self {
            timestamp,
            location,
        })
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn location(&self) -> GeoLocation {
        self.location
    }

    pub fn julian_day(&self) -> JulianDay {
        JulianDay::from_datetime(self.timestamp)
    }
}

/// Parse an ISO-8601 birth date.
///
/// Offsets (including a trailing `Z`) are converted to UTC. Date-times
/// without an offset and bare dates are taken as UTC.
pub fn parse_birth_datetime(input: &str) -> Result<DateTime<Utc>, ChartError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ChartError::InvalidDate {
            input: input.to_string(),
            message: "date is empty".to_string(),
        });
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(naive.and_utc());
        }
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| ChartError::InvalidDate {
        input: input.to_string(),
        message: e.to_string(),
    })?;
    date.and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ChartError::InvalidDate {
            input: input.to_string(),
            message: "no midnight on this date".to_string(),
        })
}

/// Parse an `HH:MM` clock string.
pub fn parse_clock_time(input: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_j2000_epoch() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(JulianDay::from_datetime(dt).value(), J2000_JD);
    }

    #[test]
    fn test_fractional_hours() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 18, 30, 0).unwrap();
        let jd = JulianDay::from_datetime(dt).value();
        assert!((jd - (J2000_JD + 6.5 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn test_parse_trailing_z() {
        let dt = parse_birth_datetime("2000-01-01T00:00:00.000Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_offset_converts_to_utc() {
        let dt = parse_birth_datetime("1991-06-18T07:10:00+05:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(1991, 6, 18, 1, 40, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_and_bare_date() {
        let naive = parse_birth_datetime("1991-06-18T07:10").unwrap();
        assert_eq!(naive, Utc.with_ymd_and_hms(1991, 6, 18, 7, 10, 0).unwrap());
        let bare = parse_birth_datetime("1991-06-18").unwrap();
        assert_eq!(bare, Utc.with_ymd_and_hms(1991, 6, 18, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(
            parse_birth_datetime("yesterday"),
            Err(ChartError::InvalidDate { .. })
        ));
        assert!(parse_birth_datetime("   ").is_err());
    }

    #[test]
    fn test_birth_input_rejects_bad_coordinates() {
        let dt = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(BirthInput::new(dt, GeoLocation { lat: 91.0, lon: 0.0 }).is_err());
        assert!(BirthInput::new(dt, GeoLocation { lat: 0.0, lon: -180.5 }).is_err());
        assert!(BirthInput::new(dt, GeoLocation { lat: f64::NAN, lon: 0.0 }).is_err());
        assert!(BirthInput::new(dt, GeoLocation { lat: -90.0, lon: 180.0 }).is_ok());
    }
}
