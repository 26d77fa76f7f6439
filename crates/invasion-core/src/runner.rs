//! Simulation loop runner.
//!
//! This module provides [`run_simulation`], the top-level function that
//! drives the turn loop until one of two conditions holds:
//!
//! - **Annihilation**: no alien is left alive.
//! - **Turn limit**: [`MAX_TURNS`] turns have completed; the remaining
//!   aliens are presumed to be wandering forever.
//!
//! Both conditions are checked before a turn starts, so a turn always runs
//! both of its phases or does not run at all.
//!
//! The runner wraps the single-turn [`run_turn`] function and reports every
//! completed turn to a [`TurnCallback`].
//!
//! [`run_turn`]: crate::tick::run_turn

use rand::Rng;
use tracing::{info, warn};

use crate::tick::{self, InvasionState, TickError, TurnSummary};

/// Number of turns after which the simulation stops regardless of how many
/// aliens are still alive.
pub const MAX_TURNS: u64 = 10_000;

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A turn execution failed.
    #[error("turn error: {source}")]
    Tick {
        /// The underlying turn error.
        #[from]
        source: TickError,
    },
}

/// Why the simulation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Every alien died (or none was placed to begin with).
    AllAliensDestroyed,
    /// [`MAX_TURNS`] turns completed with aliens still alive.
    TurnLimitReached,
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: EndReason,
    /// The last turn summary, if any turn completed.
    pub final_summary: Option<TurnSummary>,
    /// Total number of turns executed.
    pub total_turns: u64,
    /// Total number of cities destroyed over the run.
    pub cities_destroyed: usize,
}

/// Callback invoked after each turn completes.
///
/// Implementations receive the turn summary and the state as it stands
/// after the turn. The binary uses this to report destroyed cities.
pub trait TurnCallback {
    /// Called after a turn completes successfully.
    fn on_turn(&mut self, summary: &TurnSummary, state: &InvasionState);
}

/// A no-op turn callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl TurnCallback for NoOpCallback {
    fn on_turn(&mut self, _summary: &TurnSummary, _state: &InvasionState) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// # Arguments
///
/// * `state` - Mutable simulation state (graph, positions, turn counter)
/// * `rng` - The run's single random source, shared with placement
/// * `callback` - Called after each turn
///
/// # Errors
///
/// Returns [`RunnerError`] if a turn finds the position map holding an
/// empty city.
pub fn run_simulation(
    state: &mut InvasionState,
    rng: &mut impl Rng,
    callback: &mut dyn TurnCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut final_summary: Option<TurnSummary> = None;
    let mut total_turns: u64 = 0;
    let mut cities_destroyed: usize = 0;

    info!(
        cities = state.city_map.city_count(),
        aliens = state.occupancy.alien_count(),
        max_turns = MAX_TURNS,
        "Simulation starting"
    );

    let end_reason = loop {
        if state.occupancy.is_empty() {
            info!(turn = state.turn, "No aliens left");
            break EndReason::AllAliensDestroyed;
        }
        if state.turn >= MAX_TURNS {
            info!(
                turn = state.turn,
                aliens = state.occupancy.alien_count(),
                "Turn limit reached"
            );
            break EndReason::TurnLimitReached;
        }

        let summary = tick::run_turn(state, rng)?;

        total_turns = total_turns.saturating_add(1);
        cities_destroyed = cities_destroyed.saturating_add(summary.destructions.len());

        callback.on_turn(&summary, state);
        final_summary = Some(summary);
    };

    Ok(SimulationResult {
        end_reason,
        final_summary,
        total_turns,
        cities_destroyed,
    })
}

/// Log the simulation end sequence.
///
/// Call after [`run_simulation`] returns.
pub fn log_simulation_end(result: &SimulationResult, state: &InvasionState) {
    info!(
        reason = ?result.end_reason,
        total_turns = result.total_turns,
        cities_destroyed = result.cities_destroyed,
        cities_remaining = state.city_map.city_count(),
        aliens_remaining = state.occupancy.alien_count(),
        "Simulation ended"
    );

    if result.end_reason == EndReason::TurnLimitReached {
        for (city, aliens) in state.occupancy.iter() {
            warn!(city = %city, aliens = ?aliens, "Aliens still at large");
        }
    }

    if result.final_summary.is_none() {
        warn!("Simulation ended with no turns executed");
    }
}
