//! Error types for the invasion binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup and the simulation run.

/// Top-level error for the invasion binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: invasion_core::ConfigError,
    },

    /// Reading, parsing, or writing a map failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: invasion_world::WorldError,
    },

    /// The aliens could not be placed on the map.
    #[error("placement error: {source}")]
    Placement {
        /// The underlying placement error.
        #[from]
        source: invasion_core::PlacementError,
    },

    /// The simulation run failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: invasion_core::RunnerError,
    },
}
