//! Layered engine configuration, loaded the way the teacher engine loads its own `configs`
//! tree: a `serde`-deserializable struct with a hard-coded `Default`, optionally overridden by a
//! YAML file via the `config` crate.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub overpass_url: String,
    /// Overpass fetch timeout, in seconds, at the YAML layer; exposed as a [`Duration`] below.
    pub timeout_secs: u64,
    /// Bbox padding in degrees on every side (§6.3); default 0.05 (~5.5 km).
    pub bbox_padding_deg: f64,
    /// Number of nearest OSM nodes a terminal snaps connector edges to (§4.3); default 5.
    pub terminal_candidates: usize,
}

impl EngineConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Loads config from a YAML file, falling back to [`Default`] for any field the file omits.
    pub fn try_from_yaml(path: &Path) -> Result<Self, config::ConfigError> {
        let defaults = EngineConfig::default();
        config::Config::builder()
            .set_default("overpass_url", defaults.overpass_url)?
            .set_default("timeout_secs", defaults.timeout_secs)?
            .set_default("bbox_padding_deg", defaults.bbox_padding_deg)?
            .set_default("terminal_candidates", defaults.terminal_candidates as i64)?
            .add_source(config::File::from(path))
            .build()?
            .try_deserialize()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            overpass_url: String::from("https://overpass-api.de/api/interpreter"),
            timeout_secs: 60,
            bbox_padding_deg: 0.05,
            terminal_candidates: 5,
        }
    }
}
