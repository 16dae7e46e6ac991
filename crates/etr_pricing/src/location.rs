use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::decimal::Distance;
use crate::error::ConfigError;

/// Topology key of a location. The id is kept as written in the configuration,
/// together with its integer ordinal which drives equality, hashing and ordering.
#[derive(Debug, Clone)]
pub struct LocationId {
    raw: String,
    ordinal: u64,
}

impl LocationId {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        let ordinal = trimmed
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidLocationId(raw.to_owned()))?;

        Ok(Self {
            raw: trimmed.to_owned(),
            ordinal,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn ordinal(&self) -> u64 {
        self.ordinal
    }
}

impl From<u64> for LocationId {
    fn from(ordinal: u64) -> Self {
        Self {
            raw: ordinal.to_string(),
            ordinal,
        }
    }
}

impl PartialEq for LocationId {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal == other.ordinal
    }
}

impl Eq for LocationId {}

impl Hash for LocationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordinal.hash(state);
    }
}

impl PartialOrd for LocationId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocationId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ordinal.cmp(&other.ordinal)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Directed edge to a neighbouring location.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    to_id: LocationId,
    distance: Distance,
}

impl Route {
    pub fn new(to_id: LocationId, distance: Distance) -> Self {
        Self { to_id, distance }
    }

    pub fn to_id(&self) -> &LocationId {
        &self.to_id
    }

    pub fn distance(&self) -> Distance {
        self.distance
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    id: LocationId,
    name: String,
    point: geo_types::Point<f64>,
    routes: Vec<Route>,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            id,
            name: name.into(),
            point: geo_types::Point::new(lng, lat),
            routes: Vec::new(),
        }
    }

    pub fn with_routes(mut self, routes: Vec<Route>) -> Self {
        self.routes = routes;
        self
    }

    pub fn id(&self) -> &LocationId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lng(&self) -> f64 {
        self.point.x()
    }

    /// Outgoing routes, in configuration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

impl From<&Location> for geo_types::Point<f64> {
    fn from(location: &Location) -> Self {
        location.point
    }
}

/// A location reached by the linearization walk, with its distance from the root.
///
/// Only the linearizer creates these, so a location without a cumulative distance
/// cannot be priced by accident.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearizedLocation {
    location: Location,
    cumulative_distance: Distance,
}

impl LinearizedLocation {
    pub(crate) fn new(location: Location, cumulative_distance: Distance) -> Self {
        Self {
            location,
            cumulative_distance,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn id(&self) -> &LocationId {
        self.location.id()
    }

    pub fn name(&self) -> &str {
        self.location.name()
    }

    pub fn cumulative_distance(&self) -> Distance {
        self.cumulative_distance
    }

    /// Direction-agnostic distance between two locations on the path.
    pub fn distance_to(&self, other: &LinearizedLocation) -> Distance {
        (self.cumulative_distance - other.cumulative_distance).abs()
    }
}
