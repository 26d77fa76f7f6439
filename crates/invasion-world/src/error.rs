//! Error types for the `invasion-world` crate.
//!
//! All fallible operations in this crate return [`WorldError`] through the
//! standard [`Result`] type.

use std::path::PathBuf;

use invasion_types::{CityName, EdgeParseError};

/// Errors that can occur while building the city graph or moving it to and
/// from disk.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// The map describes no cities at all; there is nothing to invade.
    #[error("map contains no cities")]
    EmptyMap,

    /// A neighbor token on a city's line could not be parsed.
    #[error("invalid neighbor for city {city}: {source}")]
    MalformedEdge {
        /// The city whose line holds the bad token.
        city: CityName,
        /// The underlying parse error.
        source: EdgeParseError,
    },

    /// Reading or writing a map file failed.
    #[error("map file {}: {source}", path.display())]
    Io {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
