//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – tick ordering and recording frame
//! - [`ParametersConfig`] – time step, decimation, tick count, G
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   ordering: sequential    # or "snapshot"
//!   origin: earth           # optional, record relative to this body
//!
//! parameters:
//!   time_step: 1000.0       # seconds
//!   decimation_stride: 100  # ticks between samples
//!   tick_count: 100000
//!   G: 6.67430e-11          # optional
//!
//! bodies:
//!   - name: sun
//!     kind: star
//!     m: 1.9885e30
//!     x: [0.0, 0.0, 0.0]
//!     v: [0.0, 0.0, 0.0]
//!   - name: earth
//!     m: 5.972e24
//!     orbit: { central_mass: 1.9885e30, radius: 1.5e11 }
//! ```
//!
//! Every section and most fields are optional and fall back to the defaults in
//! [`crate::simulation::params`]. The engine maps this configuration into its
//! runtime types in [`crate::simulation::scenario`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::configuration::error::ConfigError;
use crate::simulation::params::{DEFAULT_DECIMATION_STRIDE, DEFAULT_TICK_COUNT, DEFAULT_TIME_STEP, G};
use crate::simulation::states::BodyKind;

/// How bodies are advanced within one tick
/// `ordering: "sequential"` or `ordering: "snapshot"`
#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TickOrdering {
    /// Bodies are stepped one after another in place; later bodies see the
    /// already-moved earlier ones. Order dependent, reproducible.
    #[default]
    #[serde(rename = "sequential")]
    Sequential,

    /// All accelerations are taken from the pre-tick positions, then every
    /// body moves. Gives different trajectories from `Sequential`.
    #[serde(rename = "snapshot")]
    Snapshot,
}

#[derive(Deserialize, Debug, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub ordering: TickOrdering,
    #[serde(default)]
    pub origin: Option<String>, // name of the body to record relative to
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ParametersConfig {
    #[serde(default = "default_time_step")]
    pub time_step: f64,
    #[serde(default = "default_decimation_stride")]
    pub decimation_stride: u64,
    #[serde(default = "default_tick_count")]
    pub tick_count: u64,
    #[serde(rename = "G", default = "default_g")]
    pub g: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            decimation_stride: DEFAULT_DECIMATION_STRIDE,
            tick_count: DEFAULT_TICK_COUNT,
            g: G,
        }
    }
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

fn default_decimation_stride() -> u64 {
    DEFAULT_DECIMATION_STRIDE
}

fn default_tick_count() -> u64 {
    DEFAULT_TICK_COUNT
}

fn default_g() -> f64 {
    G
}

fn default_record() -> bool {
    true
}

/// Circular-orbit seed around a central mass at the origin
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct OrbitConfig {
    pub central_mass: f64,
    pub radius: f64,
}

/// Configuration for a single body's initial state.
/// Exactly one of `x` (with optional `v`) or `orbit` must be given.
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub kind: BodyKind,
    #[serde(default)]
    pub color: Option<String>,
    pub m: f64,
    #[serde(default)]
    pub x: Option<Vec<f64>>,
    #[serde(default)]
    pub v: Option<Vec<f64>>,
    #[serde(default)]
    pub orbit: Option<OrbitConfig>,
    #[serde(default = "default_record")]
    pub record: bool,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scenario_uses_defaults() {
        let cfg = ScenarioConfig::from_yaml_str(
            "bodies:\n  - name: sun\n    m: 1.0\n    x: [0.0, 0.0, 0.0]\n",
        )
        .unwrap();
        assert_eq!(cfg.engine.ordering, TickOrdering::Sequential);
        assert!(cfg.engine.origin.is_none());
        assert_eq!(cfg.parameters, ParametersConfig::default());
        assert_eq!(cfg.bodies[0].kind, BodyKind::Planet);
        assert!(cfg.bodies[0].record);
        assert!(cfg.bodies[0].v.is_none());
    }

    #[test]
    fn full_scenario_parses() {
        let yaml = r#"
engine:
  ordering: snapshot
  origin: earth
parameters:
  time_step: 10.0
  decimation_stride: 10
  tick_count: 50
  G: 1.0
bodies:
  - name: earth
    kind: planet
    color: blue
    m: 5.972e24
    orbit: { central_mass: 1.9885e30, radius: 1.5e11 }
    record: false
  - name: sun
    kind: star
    m: 1.9885e30
    x: [0.0, 0.0, 0.0]
    v: [0.0, 0.0, 0.0]
"#;
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.engine.ordering, TickOrdering::Snapshot);
        assert_eq!(cfg.engine.origin.as_deref(), Some("earth"));
        assert_eq!(cfg.parameters.g, 1.0);
        assert_eq!(cfg.parameters.decimation_stride, 10);
        assert_eq!(cfg.bodies[0].orbit, Some(OrbitConfig { central_mass: 1.9885e30, radius: 1.5e11 }));
        assert!(!cfg.bodies[0].record);
        assert_eq!(cfg.bodies[1].kind, BodyKind::Star);
    }

    #[test]
    fn unknown_ordering_is_rejected() {
        let err = ScenarioConfig::from_yaml_str("engine:\n  ordering: leapfrog\nbodies: []\n");
        assert!(matches!(err, Err(ConfigError::Yaml(_))));
    }
}
