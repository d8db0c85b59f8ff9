pub mod adapter;
pub mod oracle;
pub mod types;

pub use adapter::{EphemerisError, SwissEphemerisAdapter};
pub use oracle::{Ephemeris, FixedEphemeris, UnavailableEphemeris};
pub use types::{EphemerisSettings, GeoLocation};
