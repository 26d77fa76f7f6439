//! Turn cycle and orchestration for the alien invasion simulation.
//!
//! Aliens are dropped onto random cities and then wander the city graph.
//! Every turn first destroys each city holding two or more aliens (killing
//! all of them), then moves one alien out of every occupied city along a
//! random outbound edge. The run ends when no alien is left or after
//! [`MAX_TURNS`] turns.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration: seed, file paths, log level.
//! - [`occupancy`] -- [`Occupancy`], the city -> aliens position map.
//! - [`placement`] -- Initial random placement of aliens.
//! - [`tick`] -- A single two-phase turn: destruction, then movement.
//! - [`runner`] -- The turn loop, end reasons, and per-turn callbacks.

pub mod config;
pub mod occupancy;
pub mod placement;
pub mod runner;
pub mod tick;

// Re-export primary types at crate root.
pub use config::{ConfigError, InvasionConfig, MAP_PATH_ENV, RESULT_PATH_ENV};
pub use occupancy::Occupancy;
pub use placement::{MAX_ALIENS_PER_START_CITY, PlacementError, populate_aliens};
pub use runner::{
    EndReason, MAX_TURNS, NoOpCallback, RunnerError, SimulationResult, TurnCallback,
    log_simulation_end, run_simulation,
};
pub use tick::{
    AlienMove, DESTRUCTION_THRESHOLD, Destruction, InvasionState, TickError, TurnSummary,
    run_turn,
};
