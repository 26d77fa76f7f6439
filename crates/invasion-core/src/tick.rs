//! Turn cycle: the two-phase loop body that drives the invasion.
//!
//! Each turn runs through these phases, strictly in order:
//!
//! 1. **Destruction** -- snapshot every city holding
//!    [`DESTRUCTION_THRESHOLD`] or more aliens, then destroy each one: the
//!    city leaves the graph, every edge pointing at it is removed, and all
//!    of its occupants die.
//!
//! 2. **Movement** -- snapshot every city still occupied, then move the
//!    front alien of each along one outbound edge chosen uniformly at
//!    random. Aliens on a dead end stay where they are. A city that was
//!    only ever named as an edge target has no edges and counts as a dead
//!    end.
//!
//! All destructions complete before any alien moves, so a city that falls
//! this turn never also sends an alien away, and no city is ever reached by
//! a third alien through interleaving.

use std::fmt;

use invasion_types::{AlienId, CityName};
use invasion_world::CityMap;
use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::{debug, info};

use crate::occupancy::Occupancy;

/// Number of aliens that destroy a city by meeting in it.
pub const DESTRUCTION_THRESHOLD: usize = 2;

/// Errors that can occur during turn execution.
///
/// This only happens when the position map lists a city without any
/// alien in it, which breaks the pruning invariant of [`Occupancy`].
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// An occupied city had nobody left to move.
    #[error("city {0} was listed as occupied but has no aliens")]
    NoOccupant(CityName),
}

/// The mutable simulation state passed through the turn cycle.
#[derive(Debug, Clone)]
pub struct InvasionState {
    /// Number of turns completed so far.
    pub turn: u64,
    /// The surviving city graph.
    pub city_map: CityMap,
    /// Current alien positions.
    pub occupancy: Occupancy,
}

impl InvasionState {
    /// Assemble the state for turn zero.
    pub const fn new(city_map: CityMap, occupancy: Occupancy) -> Self {
        Self {
            turn: 0,
            city_map,
            occupancy,
        }
    }

    /// Give back the surviving graph once the run is over.
    pub fn into_city_map(self) -> CityMap {
        self.city_map
    }
}

/// A city destroyed during the destruction phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destruction {
    /// The destroyed city.
    pub city: CityName,
    /// Every alien that died with it, in arrival order.
    pub aliens: Vec<AlienId>,
    /// Number of edges removed from other cities.
    pub edges_repaired: usize,
}

impl Destruction {
    /// The two aliens credited with the destruction: the first two to
    /// arrive.
    pub fn destroyers(&self) -> Option<(AlienId, AlienId)> {
        match self.aliens.as_slice() {
            [first, second, ..] => Some((*first, *second)),
            _ => None,
        }
    }
}

impl fmt::Display for Destruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.destroyers() {
            Some((first, second)) => write!(
                f,
                "{} has been destroyed by alien {first} and alien {second}!",
                self.city
            ),
            None => write!(f, "{} has been destroyed!", self.city),
        }
    }
}

/// An alien that moved during the movement phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlienMove {
    /// The alien that moved.
    pub alien: AlienId,
    /// The city it left.
    pub from: CityName,
    /// The city it arrived in.
    pub to: CityName,
    /// Direction label of the edge it took.
    pub direction: String,
}

/// Summary of a single turn's execution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnSummary {
    /// The turn number that was executed (starting at 1).
    pub turn: u64,
    /// Cities destroyed this turn, in the order they fell.
    pub destructions: Vec<Destruction>,
    /// Aliens that moved this turn.
    pub moves: Vec<AlienMove>,
    /// Aliens that could not move because their city is a dead end.
    pub stranded: Vec<AlienId>,
    /// Living aliens at the end of the turn.
    pub aliens_remaining: usize,
    /// Surviving cities at the end of the turn.
    pub cities_remaining: usize,
}

impl TurnSummary {
    /// Total number of aliens killed this turn.
    pub fn aliens_killed(&self) -> usize {
        self.destructions
            .iter()
            .fold(0_usize, |total, d| total.saturating_add(d.aliens.len()))
    }
}

/// Execute one full turn: destruction, then movement.
///
/// # Errors
///
/// Returns a [`TickError`] if the position map lists an empty city.
pub fn run_turn(
    state: &mut InvasionState,
    rng: &mut impl Rng,
) -> Result<TurnSummary, TickError> {
    let turn = state.turn.saturating_add(1);

    let destructions = destroy_crowded_cities(state, turn);
    let (moves, stranded) = move_aliens(state, rng)?;

    state.turn = turn;

    let summary = TurnSummary {
        turn,
        destructions,
        moves,
        stranded,
        aliens_remaining: state.occupancy.alien_count(),
        cities_remaining: state.city_map.city_count(),
    };
    debug!(
        turn,
        destroyed = summary.destructions.len(),
        moved = summary.moves.len(),
        stranded = summary.stranded.len(),
        aliens_remaining = summary.aliens_remaining,
        "Turn complete"
    );
    Ok(summary)
}

/// Phase 1: destroy every city at or above the threshold.
fn destroy_crowded_cities(state: &mut InvasionState, turn: u64) -> Vec<Destruction> {
    let doomed = state.occupancy.crowded(DESTRUCTION_THRESHOLD);
    let mut destructions = Vec::with_capacity(doomed.len());

    for city in doomed {
        let edges_repaired = state.city_map.remove_city(city.as_str());
        let aliens = state.occupancy.evict(city.as_str());

        info!(
            turn,
            city = %city,
            aliens = ?aliens,
            edges_repaired,
            "City destroyed"
        );
        destructions.push(Destruction {
            city,
            aliens,
            edges_repaired,
        });
    }

    destructions
}

/// Phase 2: move the front alien out of every occupied city.
fn move_aliens(
    state: &mut InvasionState,
    rng: &mut impl Rng,
) -> Result<(Vec<AlienMove>, Vec<AlienId>), TickError> {
    let occupied = state.occupancy.occupied_cities();
    let mut moves = Vec::with_capacity(occupied.len());
    let mut stranded = Vec::new();

    for city in occupied {
        let edges = state.city_map.neighbors(city.as_str()).unwrap_or_default();
        let Some(edge) = edges.choose(rng).cloned() else {
            stranded.extend_from_slice(state.occupancy.occupants(city.as_str()));
            continue;
        };

        let Some(alien) = state.occupancy.take_front(city.as_str()) else {
            return Err(TickError::NoOccupant(city));
        };
        state.occupancy.place(edge.target.clone(), alien);

        debug!(
            alien = %alien,
            from = %city,
            to = %edge.target,
            direction = %edge.direction,
            "Alien moved"
        );
        moves.push(AlienMove {
            alien,
            from: city,
            to: edge.target,
            direction: edge.direction,
        });
    }

    Ok((moves, stranded))
}
