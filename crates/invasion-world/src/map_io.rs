//! Line-based map format.
//!
//! One line per city, tokens separated by whitespace:
//!
//! ```text
//! Foo north=Bar west=Baz south=Qu-ux
//! Bar south=Foo west=Bee
//! ```
//!
//! The first token is the city name; the rest are `direction=target`
//! neighbor references. The same shape is used for the result file, so a
//! result can be fed back in as a new map.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::city_map::CityMap;
use crate::error::WorldError;

/// Default map file read when no path is configured.
pub const DEFAULT_MAP_PATH: &str = "cities";

/// Default file the surviving map is written to.
pub const DEFAULT_RESULT_PATH: &str = "result";

/// Parse a map from its text form.
///
/// # Errors
///
/// Propagates every [`CityMap::from_lines`] error.
pub fn parse_map(text: &str) -> Result<CityMap, WorldError> {
    CityMap::from_lines(text.lines())
}

/// Read and parse a map file.
///
/// # Errors
///
/// Returns [`WorldError::Io`] if the file cannot be read, otherwise any
/// parse error from [`parse_map`].
pub fn read_map(path: &Path) -> Result<CityMap, WorldError> {
    let text = std::fs::read_to_string(path).map_err(|source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let map = parse_map(&text)?;
    debug!(
        path = %path.display(),
        cities = map.city_count(),
        edges = map.edge_count(),
        "Map file parsed"
    );
    Ok(map)
}

/// Render the map in the same line format it was read from.
///
/// Cities come out in name order. A city without edges is written as its
/// bare name.
pub fn render_map(map: &CityMap) -> String {
    let mut out = String::new();
    for (city, edges) in map.cities() {
        out.push_str(city.as_str());
        for edge in edges {
            out.push(' ');
            out.push_str(&edge.to_string());
        }
        out.push('\n');
    }
    out
}

/// Write the map to a file, replacing any previous content.
///
/// # Errors
///
/// Returns [`WorldError::Io`] if the file cannot be created or written.
pub fn write_map(path: &Path, map: &CityMap) -> Result<(), WorldError> {
    let io_err = |source| WorldError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_map(map).as_bytes())
        .map_err(io_err)?;
    writer.flush().map_err(io_err)?;
    debug!(path = %path.display(), cities = map.city_count(), "Map file written");
    Ok(())
}
