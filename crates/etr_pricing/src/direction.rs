use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

use crate::location::LocationId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Eastbound,
    Westbound,
}

impl Direction {
    /// Travel direction is derived from the id ordering of the two ends, not from
    /// their position on the path: a lower `from` id means westbound.
    pub fn between(from: &LocationId, to: &LocationId) -> Self {
        if from < to {
            Direction::Westbound
        } else {
            Direction::Eastbound
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Eastbound => "eastbound",
            Direction::Westbound => "westbound",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
