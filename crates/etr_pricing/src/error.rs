use std::path::PathBuf;

use thiserror::Error;

use crate::location::LocationId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    #[error("The input location name doesn't exist: {0}")]
    UnknownLocation(String),
}

/// Raised while building the engine from its configuration documents. Any of these
/// leaves the engine unable to serve queries.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {document}: {source}")]
    Parse {
        document: String,
        source: serde_json::Error,
    },

    #[error("Invalid location id {0:?}, expected a non-negative integer")]
    InvalidLocationId(String),

    #[error("Location id {0} is defined more than once")]
    DuplicateLocationId(LocationId),

    #[error("Location name {0:?} is used by more than one location")]
    DuplicateLocationName(String),

    #[error("Route from {from} to {to} has a negative distance")]
    NegativeRouteDistance { from: LocationId, to: LocationId },

    #[error("Cumulative distance overflows on the route from {from} to {to}")]
    DistanceOverflow { from: LocationId, to: LocationId },

    #[error("Vehicle class {0:?} has a negative charge")]
    NegativeCharge(String),

    #[error("Root location {0} is not part of the topology")]
    MissingRootLocation(LocationId),
}
