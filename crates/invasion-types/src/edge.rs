//! Direction-labelled neighbor references.
//!
//! In the map format every neighbor appears as a single `direction=target`
//! token, e.g. `north=Foo`. [`Edge`] keeps the two halves apart so the
//! graph store can compare targets exactly instead of searching inside the
//! raw token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::CityName;

/// Errors produced when a neighbor token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EdgeParseError {
    /// The token has no `=` separating direction and target.
    #[error("neighbor token {0:?} is missing a '=' separator")]
    MissingSeparator(String),

    /// The direction label before `=` is empty.
    #[error("neighbor token {0:?} has an empty direction")]
    EmptyDirection(String),

    /// The target city after `=` is empty.
    #[error("neighbor token {0:?} has an empty target city")]
    EmptyTarget(String),
}

/// A directed edge from one city to a neighbor, labelled with a direction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Direction label, e.g. `north`. Not interpreted by the simulation.
    pub direction: String,
    /// The city this edge leads to.
    pub target: CityName,
}

impl Edge {
    /// Create an edge from a direction label and a target city.
    pub fn new(direction: impl Into<String>, target: impl Into<CityName>) -> Self {
        Self {
            direction: direction.into(),
            target: target.into(),
        }
    }

    /// Whether this edge points at the given city.
    pub fn leads_to(&self, city: &str) -> bool {
        self.target.as_str() == city
    }
}

impl FromStr for Edge {
    type Err = EdgeParseError;

    /// Parse a `direction=target` token, splitting on the first `=`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let Some((direction, target)) = token.split_once('=') else {
            return Err(EdgeParseError::MissingSeparator(token.to_owned()));
        };
        if direction.is_empty() {
            return Err(EdgeParseError::EmptyDirection(token.to_owned()));
        }
        if target.is_empty() {
            return Err(EdgeParseError::EmptyTarget(token.to_owned()));
        }
        Ok(Self::new(direction, target))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.direction, self.target)
    }
}
