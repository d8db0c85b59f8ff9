pub mod chart;
pub mod fallback;
pub mod types;

pub use chart::{build_chart, ChartService};
pub use fallback::{generate_mock_chart, random_mock_chart, seeded_rng, FallbackPolicy};
pub use types::{Chart, ChartStatus, House, Planet, PlanetPosition, Sign};
