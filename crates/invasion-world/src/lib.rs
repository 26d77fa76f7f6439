//! City graph and map file handling for the alien invasion simulation.
//!
//! This crate models the physical world: cities as nodes of a directed
//! graph whose edges carry a direction label. The graph only ever shrinks;
//! destroying a city removes its node and every edge that pointed at it.
//!
//! # Modules
//!
//! - [`error`] -- Error types for graph construction and map I/O.
//! - [`city_map`] -- [`CityMap`], the graph store with its removal
//!   primitives and neighbor queries.
//! - [`map_io`] -- Parsing and rendering of the line-based map format, and
//!   the file wrappers around them.

pub mod city_map;
pub mod error;
pub mod map_io;

// Re-export primary types at crate root.
pub use city_map::CityMap;
pub use error::WorldError;
pub use map_io::{
    DEFAULT_MAP_PATH, DEFAULT_RESULT_PATH, parse_map, read_map, render_map, write_map,
};
