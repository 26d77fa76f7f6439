//! Shared type definitions for the alien invasion simulation.
//!
//! This crate is the common vocabulary between the graph store and the
//! simulation engine. It has no logic beyond parsing and rendering the
//! labelled neighbor tokens of the map format.
//!
//! # Modules
//!
//! - [`ids`] -- Strongly-typed identifiers: [`CityName`] and [`AlienId`].
//! - [`edge`] -- [`Edge`], a direction-labelled reference to a neighbor city.

pub mod edge;
pub mod ids;

// Re-export primary types at crate root.
pub use edge::{Edge, EdgeParseError};
pub use ids::{AlienId, CityName};
