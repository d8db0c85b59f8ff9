use lagna::ephemeris::adapter::EPHEMERIS_PATH_ENV;
use lagna::ephemeris::EphemerisSettings;
use lagna::FallbackPolicy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations probed for `lagna.toml`, from the repo root and from
/// a crate directory.
pub const CONFIG_PATHS: [&str; 2] = ["configs/lagna.toml", "../../configs/lagna.toml"];

#[derive(Debug, Clone, Default)]
pub struct LagnaSettings {
    pub ephemeris: EphemerisSettings,
    pub fallback: FallbackPolicy,
    /// File the settings came from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default)]
    house_system: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FallbackToml {
    #[serde(default)]
    mode: FallbackPolicy,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    fallback: FallbackToml,
}

/// Try the common relative paths for `configs/lagna.toml`.
pub fn read_lagna_toml_text() -> Option<(PathBuf, String)> {
    CONFIG_PATHS.iter().find_map(|p| {
        fs::read_to_string(p)
            .ok()
            .map(|text| (PathBuf::from(p), text))
    })
}

pub fn parse_settings(text: &str) -> anyhow::Result<LagnaSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse lagna.toml: {e}"))?;

    let mut ephemeris = EphemerisSettings::default();
    ephemeris.ephemeris_path = root.ephemeris.path;
    if let Some(house_system) = root.ephemeris.house_system {
        ephemeris.house_system = house_system;
    }

    Ok(LagnaSettings {
        ephemeris,
        fallback: root.fallback.mode,
        source: None,
    })
}

/// A set environment variable wins over the configured data path.
pub fn apply_env_override(settings: &mut LagnaSettings, env_path: Option<String>) {
    if let Some(path) = env_path.filter(|p| !p.trim().is_empty()) {
        settings.ephemeris.ephemeris_path = Some(PathBuf::from(path));
    }
}

/// Load settings from `explicit` when given (it must exist), otherwise from
/// the first probed path. No file at all means defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<LagnaSettings> {
    let found = match explicit {
        Some(path) => {
            let text = fs::read_to_string(path)
                .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
            Some((path.to_path_buf(), text))
        }
        None => read_lagna_toml_text(),
    };

    let mut settings = match found {
        Some((path, text)) => {
            let mut settings = parse_settings(&text)
                .map_err(|e| anyhow::anyhow!("{e} ({})", path.display()))?;
            settings.source = Some(path);
            settings
        }
        None => LagnaSettings::default(),
    };

    apply_env_override(&mut settings, std::env::var(EPHEMERIS_PATH_ENV).ok());
    Ok(settings)
}
