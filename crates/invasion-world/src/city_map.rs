//! City graph: cities as nodes, direction-labelled directed edges.
//!
//! The [`CityMap`] is the spatial backbone of the simulation. It stores
//! every surviving city together with its outbound [`Edge`]s and offers
//! the two mutation primitives the engine relies on: removing a city and
//! repairing every reference to it.
//!
//! Edges need not be symmetric. City `A` may list `B` as a neighbor while
//! `B` never mentions `A`; removal therefore scans every remaining city
//! rather than trusting the destroyed city's own neighbor list.
//!
//! An edge may also name a city that has no line of its own. Such a city
//! is not counted and never written out, but aliens can walk into it. It
//! has no outbound edges, so it behaves as a dead end, and destroying it
//! strips every edge that leads there.

use std::collections::BTreeMap;

use invasion_types::{CityName, Edge};
use tracing::debug;

use crate::error::WorldError;

/// The invasion graph holding all surviving cities and their edges.
///
/// Cities are kept in a [`BTreeMap`], so every iteration visits them in
/// name order. With a seeded random source this makes runs reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CityMap {
    /// Outbound edges indexed by the city they leave from.
    cities: BTreeMap<CityName, Vec<Edge>>,
}

impl CityMap {
    /// Build the graph from map lines.
    ///
    /// Each line is `<city> [<direction>=<neighbor> ...]`. Blank lines are
    /// skipped, a city repeated on several lines accumulates the edges of
    /// all of them, and edges leading back to their own city are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::MalformedEdge`] for a token that is not
    /// `direction=target` and [`WorldError::EmptyMap`] when no city was
    /// described. Edge targets are not checked against the declared cities.
    pub fn from_lines<'a, I>(lines: I) -> Result<Self, WorldError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut cities: BTreeMap<CityName, Vec<Edge>> = BTreeMap::new();

        for line in lines {
            let mut tokens = line.split_whitespace();
            let Some(name) = tokens.next() else {
                continue;
            };
            let city = CityName::from(name);

            let mut edges = Vec::new();
            for token in tokens {
                let edge: Edge = token.parse().map_err(|source| WorldError::MalformedEdge {
                    city: city.clone(),
                    source,
                })?;
                if edge.leads_to(name) {
                    debug!(city = name, direction = %edge.direction, "Dropping self-loop");
                    continue;
                }
                edges.push(edge);
            }

            cities.entry(city).or_default().extend(edges);
        }

        if cities.is_empty() {
            return Err(WorldError::EmptyMap);
        }

        Ok(Self { cities })
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    /// Whether the city has a line of its own and is still standing.
    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// Return the outbound edges of a city.
    ///
    /// `None` means the city has no line of its own (never declared, or
    /// destroyed); an empty slice means it exists but is a dead end.
    pub fn neighbors(&self, name: &str) -> Option<&[Edge]> {
        self.cities.get(name).map(Vec::as_slice)
    }

    /// Whether the city exists and has no outbound edges.
    pub fn is_dead_end(&self, name: &str) -> bool {
        self.cities.get(name).is_some_and(Vec::is_empty)
    }

    /// Return the number of surviving cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Return the total number of edges across all cities.
    pub fn edge_count(&self) -> usize {
        self.cities
            .values()
            .fold(0_usize, |total, edges| total.saturating_add(edges.len()))
    }

    /// Return all surviving city names in order.
    pub fn city_names(&self) -> Vec<CityName> {
        self.cities.keys().cloned().collect()
    }

    /// Iterate over all cities with their edges.
    pub fn cities(&self) -> impl Iterator<Item = (&CityName, &[Edge])> {
        self.cities
            .iter()
            .map(|(name, edges)| (name, edges.as_slice()))
    }

    // -------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------

    /// Remove a city and every edge that leads to it.
    ///
    /// Targets are compared exactly, so destroying `Foo` leaves an edge to
    /// `Foobar` untouched. Cities that lose their last edge stay in the
    /// graph as dead ends. The edges are stripped even when `name` was only
    /// ever an edge target, so no reference to it survives either way.
    ///
    /// Returns the number of reverse edges stripped from other cities.
    pub fn remove_city(&mut self, name: &str) -> usize {
        if self.cities.remove(name).is_none() {
            debug!(city = name, "Removing undeclared city");
        }

        let mut repaired: usize = 0;
        for (city, edges) in &mut self.cities {
            let before = edges.len();
            edges.retain(|edge| !edge.leads_to(name));
            let stripped = before.saturating_sub(edges.len());
            if stripped == 0 {
                continue;
            }
            debug!(
                city = %city,
                destroyed = name,
                stripped,
                dead_end = edges.is_empty(),
                "Removed edges to destroyed city"
            );
            repaired = repaired.saturating_add(stripped);
        }

        repaired
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn make_square_map() -> CityMap {
        CityMap::from_lines([
            "Foo north=Bar west=Baz south=Qu-ux",
            "Bar south=Foo west=Bee",
            "Baz east=Foo",
            "Qu-ux north=Foo",
            "Bee east=Bar",
        ])
        .unwrap()
    }

    #[test]
    fn construct_counts_cities_and_edges() {
        let map = make_square_map();
        assert_eq!(map.city_count(), 5);
        assert_eq!(map.edge_count(), 8);
    }

    #[test]
    fn construct_keeps_direction_labels() {
        let map = make_square_map();
        let edges = map.neighbors("Foo").unwrap();
        assert_eq!(edges.len(), 3);
        assert_eq!(edges.first(), Some(&Edge::new("north", "Bar")));
    }

    #[test]
    fn construct_drops_self_loops() {
        let map = CityMap::from_lines(["A north=A east=B", "B west=A"]).unwrap();
        assert_eq!(map.neighbors("A"), Some([Edge::new("east", "B")].as_slice()));
        assert_eq!(map.edge_count(), 2);
    }

    #[test]
    fn self_loop_check_is_exact() {
        let map = CityMap::from_lines(["Foo east=Foobar", "Foobar west=Foo"]).unwrap();
        assert_eq!(map.edge_count(), 2);
    }

    #[test]
    fn construct_skips_blank_lines() {
        let map = CityMap::from_lines(["A", "", "   ", "B"]).unwrap();
        assert_eq!(map.city_count(), 2);
        assert!(map.is_dead_end("A"));
    }

    #[test]
    fn construct_merges_repeated_city_lines() {
        let map = CityMap::from_lines(["A east=B", "B", "A west=B"]).unwrap();
        assert_eq!(map.city_count(), 2);
        assert_eq!(map.neighbors("A").map(<[Edge]>::len), Some(2));
    }

    #[test]
    fn construct_rejects_empty_map() {
        assert!(matches!(
            CityMap::from_lines(std::iter::empty::<&str>()),
            Err(WorldError::EmptyMap)
        ));
        assert!(matches!(
            CityMap::from_lines(["", "  "]),
            Err(WorldError::EmptyMap)
        ));
    }

    #[test]
    fn construct_rejects_malformed_token() {
        let result = CityMap::from_lines(["A Bnorth", "B"]);
        assert!(matches!(result, Err(WorldError::MalformedEdge { .. })));
    }

    #[test]
    fn construct_accepts_undeclared_neighbors() {
        let map = CityMap::from_lines([
            "Foo north=Bar west=Baz south=Qu-ux",
            "Bar south=Foo west=Bee",
        ])
        .unwrap();
        assert_eq!(map.city_count(), 2);
        assert_eq!(map.edge_count(), 5);
        assert!(!map.contains("Baz"));
        assert_eq!(map.neighbors("Baz"), None);
        assert_eq!(map.city_names(), vec![CityName::from("Bar"), CityName::from("Foo")]);
    }

    #[test]
    fn remove_undeclared_city_strips_edges_to_it() {
        let mut map = CityMap::from_lines(["A east=Z north=B", "B west=Z"]).unwrap();
        assert_eq!(map.remove_city("Z"), 2);
        assert_eq!(map.city_count(), 2);
        assert_eq!(map.neighbors("A"), Some([Edge::new("north", "B")].as_slice()));
        assert!(map.is_dead_end("B"));
    }

    #[test]
    fn remove_city_strips_reverse_edges() {
        let mut map = make_square_map();
        let repaired = map.remove_city("Foo");
        assert_eq!(repaired, 3);
        assert!(!map.contains("Foo"));
        assert_eq!(map.city_count(), 4);
        for (_, edges) in map.cities() {
            assert!(edges.iter().all(|edge| !edge.leads_to("Foo")));
        }
        assert!(map.is_dead_end("Baz"));
        assert!(map.is_dead_end("Qu-ux"));
        assert_eq!(map.neighbors("Bar"), Some([Edge::new("west", "Bee")].as_slice()));
    }

    #[test]
    fn remove_city_handles_asymmetric_edges() {
        // C points at A but A does not point back at C.
        let mut map = CityMap::from_lines(["A east=B", "B west=A", "C north=A"]).unwrap();
        assert_eq!(map.remove_city("A"), 2);
        assert!(map.is_dead_end("B"));
        assert!(map.is_dead_end("C"));
    }

    #[test]
    fn remove_city_ignores_name_prefixes() {
        let mut map =
            CityMap::from_lines(["Foo east=Foobar", "Foobar west=Foo", "Bar north=Foobar"]).unwrap();
        assert_eq!(map.remove_city("Foo"), 1);
        assert_eq!(
            map.neighbors("Bar"),
            Some([Edge::new("north", "Foobar")].as_slice())
        );
        assert!(map.is_dead_end("Foobar"));
    }

    #[test]
    fn remove_city_removes_duplicate_references() {
        let mut map = CityMap::from_lines(["A east=B north=B", "B"]).unwrap();
        assert_eq!(map.remove_city("B"), 2);
        assert!(map.is_dead_end("A"));
    }

    #[test]
    fn remove_unknown_city_is_noop() {
        let mut map = make_square_map();
        let before = map.clone();
        assert_eq!(map.remove_city("Atlantis"), 0);
        assert_eq!(map, before);
    }

    #[test]
    fn removing_every_city_empties_the_map() {
        let mut map = make_square_map();
        for name in map.city_names() {
            map.remove_city(name.as_str());
        }
        assert_eq!(map.city_count(), 0);
        assert_eq!(map.edge_count(), 0);
    }

    #[test]
    fn neighbors_of_unknown_city() {
        let map = make_square_map();
        assert_eq!(map.neighbors("Atlantis"), None);
        assert!(!map.is_dead_end("Atlantis"));
    }
}
