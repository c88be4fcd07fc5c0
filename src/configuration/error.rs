//! Errors raised while loading and validating a scenario.
//!
//! These only ever surface at the configuration boundary; the simulation core
//! itself never fails.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body '{body}': `{field}` needs 3 components, got {len}")]
    VectorLength {
        body: String,
        field: &'static str,
        len: usize,
    },

    #[error("body '{body}': give either `x`/`v` or `orbit`, not both")]
    AmbiguousInitialState { body: String },

    #[error("body '{body}': missing initial state, expected `x` or `orbit`")]
    MissingInitialState { body: String },

    #[error("time_step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("decimation_stride must be at least 1")]
    ZeroDecimationStride,

    #[error("origin '{0}' does not name a body in the scenario")]
    UnknownOrigin(String),
}
