//! Error types for flockchase.
//!
//! Ticking the simulation never fails; numeric edge cases are absorbed by
//! policy inside the steering and agent code. Errors only come from
//! building a simulation out of configuration.

use thiserror::Error;

/// Errors that can occur while loading or validating a [`ChaseConfig`](crate::ChaseConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file was read but is not valid config JSON.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A parameter is out of its allowed range.
    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field, e.g. `prey.max_energy`.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Errors that can occur when constructing a simulation.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// The configuration was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    /// The initial arena has no usable area.
    #[error("arena must have positive finite size, got {width}x{height}")]
    EmptyArena {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
}
