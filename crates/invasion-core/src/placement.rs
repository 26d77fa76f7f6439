//! Initial placement of aliens on the city graph.
//!
//! Aliens are created with ids `0..N` and dropped one at a time onto a city
//! drawn uniformly from those that can still take another starter. No city
//! receives more than [`MAX_ALIENS_PER_START_CITY`] aliens, so a city may
//! be destroyed on the very first turn but never by three or more aliens.

use invasion_types::{AlienId, CityName};
use invasion_world::CityMap;
use rand::Rng;
use tracing::{debug, info};

use crate::occupancy::Occupancy;

/// Maximum number of aliens that may start in the same city.
pub const MAX_ALIENS_PER_START_CITY: usize = 2;

/// Errors that can occur while placing aliens.
#[derive(Debug, thiserror::Error)]
pub enum PlacementError {
    /// More aliens were requested than the starting cities can hold.
    #[error(
        "cannot place {requested} aliens on {cities} cities (at most {capacity} fit)"
    )]
    TooManyAliens {
        /// Number of aliens requested.
        requested: u32,
        /// Number of cities in the map.
        cities: usize,
        /// Maximum number of aliens the map can start with.
        capacity: usize,
    },
}

/// Create `count` aliens and place them on random cities.
///
/// Each alien picks uniformly among the cities still below
/// [`MAX_ALIENS_PER_START_CITY`]; a city drops out of the draw as soon as
/// it fills up.
///
/// # Errors
///
/// Returns [`PlacementError::TooManyAliens`] if `count` exceeds
/// `MAX_ALIENS_PER_START_CITY` times the number of cities.
pub fn populate_aliens(
    count: u32,
    map: &CityMap,
    rng: &mut impl Rng,
) -> Result<Occupancy, PlacementError> {
    let cities = map.city_count();
    let capacity = cities.saturating_mul(MAX_ALIENS_PER_START_CITY);
    let too_many = || PlacementError::TooManyAliens {
        requested: count,
        cities,
        capacity,
    };

    let fits = usize::try_from(count).is_ok_and(|requested| requested <= capacity);
    if !fits {
        return Err(too_many());
    }

    let mut open: Vec<CityName> = map.city_names();
    let mut occupancy = Occupancy::new();

    for id in 0..count {
        if open.is_empty() {
            return Err(too_many());
        }
        let idx = rng.random_range(0..open.len());
        let Some(city) = open.get(idx).cloned() else {
            return Err(too_many());
        };

        let alien = AlienId(id);
        debug!(alien = %alien, city = %city, "Placed alien");
        occupancy.place(city.clone(), alien);

        if occupancy.occupant_count(city.as_str()) >= MAX_ALIENS_PER_START_CITY {
            open.swap_remove(idx);
        }
    }

    info!(
        aliens = count,
        cities,
        occupied_cities = occupancy.city_count(),
        "Aliens placed"
    );
    Ok(occupancy)
}
