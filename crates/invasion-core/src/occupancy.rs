//! Alien positions: which aliens stand in which city.
//!
//! A city appears as a key only while at least one alien occupies it.
//! Every operation that removes aliens prunes the entry it emptied, so the
//! invariant holds after each call rather than being restored later.

use std::collections::BTreeMap;

use invasion_types::{AlienId, CityName};

/// Mapping from city to the aliens currently in it, in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Occupancy {
    /// Occupants per city. Never holds an empty list.
    cities: BTreeMap<CityName, Vec<AlienId>>,
}

impl Occupancy {
    /// Create an empty position map.
    pub const fn new() -> Self {
        Self {
            cities: BTreeMap::new(),
        }
    }

    /// Append an alien to a city's occupants.
    pub fn place(&mut self, city: CityName, alien: AlienId) {
        self.cities.entry(city).or_default().push(alien);
    }

    /// Remove a city's entry and return every alien that was in it.
    ///
    /// Returns an empty list if the city was not occupied.
    pub fn evict(&mut self, city: &str) -> Vec<AlienId> {
        self.cities.remove(city).unwrap_or_default()
    }

    /// Remove the alien at the front of a city's occupant list.
    ///
    /// The city's entry is pruned if this empties it.
    pub fn take_front(&mut self, city: &str) -> Option<AlienId> {
        let occupants = self.cities.get_mut(city)?;
        let alien = if occupants.is_empty() {
            None
        } else {
            Some(occupants.remove(0))
        };
        if occupants.is_empty() {
            self.cities.remove(city);
        }
        alien
    }

    /// Snapshot of every city holding at least `threshold` aliens.
    pub fn crowded(&self, threshold: usize) -> Vec<CityName> {
        self.cities
            .iter()
            .filter(|(_, occupants)| occupants.len() >= threshold)
            .map(|(city, _)| city.clone())
            .collect()
    }

    /// Snapshot of every occupied city.
    pub fn occupied_cities(&self) -> Vec<CityName> {
        self.cities.keys().cloned().collect()
    }

    /// Aliens currently in a city, in arrival order.
    pub fn occupants(&self, city: &str) -> &[AlienId] {
        self.cities.get(city).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of aliens in a city.
    pub fn occupant_count(&self, city: &str) -> usize {
        self.occupants(city).len()
    }

    /// Total number of living aliens.
    pub fn alien_count(&self) -> usize {
        self.cities
            .values()
            .fold(0_usize, |total, occupants| total.saturating_add(occupants.len()))
    }

    /// Number of occupied cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Whether every alien is gone.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterate over occupied cities and their aliens.
    pub fn iter(&self) -> impl Iterator<Item = (&CityName, &[AlienId])> {
        self.cities
            .iter()
            .map(|(city, occupants)| (city, occupants.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(name: &str) -> CityName {
        CityName::from(name)
    }

    #[test]
    fn place_appends_in_arrival_order() {
        let mut occupancy = Occupancy::new();
        occupancy.place(city("A"), AlienId(3));
        occupancy.place(city("A"), AlienId(1));
        assert_eq!(occupancy.occupants("A"), &[AlienId(3), AlienId(1)]);
        assert_eq!(occupancy.alien_count(), 2);
        assert_eq!(occupancy.city_count(), 1);
    }

    #[test]
    fn take_front_prunes_emptied_city() {
        let mut occupancy = Occupancy::new();
        occupancy.place(city("A"), AlienId(0));
        assert_eq!(occupancy.take_front("A"), Some(AlienId(0)));
        assert!(occupancy.is_empty());
        assert_eq!(occupancy.take_front("A"), None);
    }

    #[test]
    fn take_front_keeps_remaining_occupants() {
        let mut occupancy = Occupancy::new();
        occupancy.place(city("A"), AlienId(0));
        occupancy.place(city("A"), AlienId(1));
        assert_eq!(occupancy.take_front("A"), Some(AlienId(0)));
        assert_eq!(occupancy.occupants("A"), &[AlienId(1)]);
    }

    #[test]
    fn evict_removes_all_occupants() {
        let mut occupancy = Occupancy::new();
        for id in 0..3 {
            occupancy.place(city("A"), AlienId(id));
        }
        occupancy.place(city("B"), AlienId(3));
        assert_eq!(
            occupancy.evict("A"),
            vec![AlienId(0), AlienId(1), AlienId(2)]
        );
        assert_eq!(occupancy.occupant_count("A"), 0);
        assert_eq!(occupancy.occupied_cities(), vec![city("B")]);
        assert!(occupancy.evict("A").is_empty());
    }

    #[test]
    fn crowded_uses_threshold() {
        let mut occupancy = Occupancy::new();
        occupancy.place(city("A"), AlienId(0));
        occupancy.place(city("B"), AlienId(1));
        occupancy.place(city("B"), AlienId(2));
        occupancy.place(city("C"), AlienId(3));
        occupancy.place(city("C"), AlienId(4));
        occupancy.place(city("C"), AlienId(5));
        assert_eq!(occupancy.crowded(2), vec![city("B"), city("C")]);
        assert_eq!(occupancy.crowded(3), vec![city("C")]);
    }
}
