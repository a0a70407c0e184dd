//! File-based run configuration.
//!
//! Every field has a default, so an empty file (or no file) describes the
//! reference case: a 1 m rod in 20 points with α = 1e-4 m²/s, simulated for
//! 10 s in 0.01 s steps, ends held at 100 °C and 50 °C, starting at 25 °C.
//!
//! ```toml
//! initial_c = 25.0
//!
//! [rod]
//! length_m = 1.0
//! points = 20
//! diffusivity_m2_per_s = 1e-4
//!
//! [time]
//! total_time_s = 10.0
//! time_step_s = 0.01
//! record_every = 1
//!
//! [boundary]
//! left = { dirichlet = 100.0 }
//! right = "insulated"
//! ```

use std::{fs, path::Path};

use rodheat_core::{Boundary, InitialTemperature};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a [`Config`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub rod: RodConfig,
    pub time: TimeConfig,
    pub boundary: BoundaryConfig,

    /// Initial temperature in °C, either one value or one per point.
    pub initial_c: InitialTemperature,
}

/// Rod geometry and material.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RodConfig {
    pub length_m: f64,
    pub points: usize,
    pub diffusivity_m2_per_s: f64,
}

/// Time stepping and recording.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    pub total_time_s: f64,
    pub time_step_s: f64,

    /// Explicit step count; overrides `total_time_s` when set.
    pub steps: Option<i64>,

    pub record_every: i64,
}

/// Conditions at the two ends of the rod, in °C and °C/m.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoundaryConfig {
    pub left: Boundary,
    pub right: Boundary,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rod: RodConfig::default(),
            time: TimeConfig::default(),
            boundary: BoundaryConfig::default(),
            initial_c: InitialTemperature::Uniform(25.0),
        }
    }
}

impl Default for RodConfig {
    fn default() -> Self {
        Self {
            length_m: 1.0,
            points: 20,
            diffusivity_m2_per_s: 1e-4,
        }
    }
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            total_time_s: 10.0,
            time_step_s: 0.01,
            steps: None,
            record_every: 1,
        }
    }
}

impl Default for BoundaryConfig {
    fn default() -> Self {
        Self {
            left: Boundary::Dirichlet(100.0),
            right: Boundary::Dirichlet(50.0),
        }
    }
}

impl Config {
    /// Reads a config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid config.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid config.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
