//! Synthetic charts for when the ephemeris cannot be queried.

use crate::time::BirthInput;
use crate::vedic::types::{Chart, ChartStatus, Planet, PlanetPosition, Sign, HOUSE_COUNT, SIGN_SPAN};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// How a synthetic chart is randomized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackPolicy {
    /// Fresh randomness per request.
    #[default]
    Random,
    /// Seeded from the birth details, so a given birth always degrades to
    /// the same chart.
    Seeded,
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FallbackPolicy::Random => write!(f, "random fallback"),
            FallbackPolicy::Seeded => write!(f, "seeded fallback"),
        }
    }
}

/// Structurally valid, astronomically meaningless chart.
///
/// Random ascendant; each planet gets an independent random house and
/// in-sign degree, and its sign follows from the house.
pub fn generate_mock_chart<R: Rng>(rng: &mut R) -> Chart {
    let ascendant = Sign::from_index(rng.gen_range(0..12));

    let planets = Planet::ALL
        .iter()
        .map(|&planet| {
            let house = rng.gen_range(1..=HOUSE_COUNT);
            let sign = ascendant.house_sign(house);
            let degrees = rng.gen_range(0.0..SIGN_SPAN);
            PlanetPosition {
                planet,
                house,
                sign,
                degrees,
                longitude: sign.index() as f64 * SIGN_SPAN + degrees,
            }
        })
        .collect();

    Chart::assemble(ascendant, planets, ChartStatus::Synthetic)
}

/// `generate_mock_chart` on the thread RNG.
pub fn random_mock_chart() -> Chart {
    generate_mock_chart(&mut rand::thread_rng())
}

/// ChaCha stream keyed by the SHA-256 of the birth moment and place.
pub fn seeded_rng(input: &BirthInput) -> ChaCha20Rng {
    let location = input.location();
    let mut hasher = Sha256::new();
    hasher.update(input.timestamp().timestamp().to_le_bytes());
    hasher.update(location.lat.to_le_bytes());
    hasher.update(location.lon.to_le_bytes());
    let digest = hasher.finalize();
    let mut seed = [0u8; 32];
    seed.copy_from_slice(&digest);
    ChaCha20Rng::from_seed(seed)
}
