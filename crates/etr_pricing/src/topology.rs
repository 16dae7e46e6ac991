use fxhash::{FxHashMap, FxHashSet};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::decimal::Distance;
use crate::error::ConfigError;
use crate::location::{LinearizedLocation, Location, LocationId};

/// The path obtained by walking the location graph from its root, indexed by
/// location name.
#[derive(Debug, Default)]
pub struct Topology {
    /// Walk order, root first.
    locations: Vec<LinearizedLocation>,
    by_name: FxHashMap<String, usize>,
}

impl Topology {
    fn from_walk(locations: Vec<LinearizedLocation>) -> Self {
        let by_name = locations
            .iter()
            .enumerate()
            .map(|(index, location)| (location.name().to_owned(), index))
            .collect();

        Self { locations, by_name }
    }

    pub fn get(&self, name: &str) -> Option<&LinearizedLocation> {
        self.by_name.get(name).map(|&index| &self.locations[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LinearizedLocation> {
        self.locations.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.by_name.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Cumulative distance of the last location on the walk.
    pub fn total_distance(&self) -> Distance {
        self.locations
            .last()
            .map(LinearizedLocation::cumulative_distance)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Walks the graph from `root_id`, always following the first route whose target
/// has not been visited yet, and assigns every reached location its cumulative
/// distance from the root.
///
/// Routes back to visited locations are skipped, so bidirectional route pairs and
/// cycles cannot loop. The walk ends at the first location without an unvisited
/// route target. Locations never reached are left out of the result.
///
/// Fails when a cumulative distance no longer fits a decimal.
pub fn linearize(
    mut locations_by_id: FxHashMap<LocationId, Location>,
    root_id: &LocationId,
) -> Result<Topology, ConfigError> {
    let mut visited: FxHashSet<LocationId> = FxHashSet::default();
    let mut walk: Vec<LinearizedLocation> = Vec::with_capacity(locations_by_id.len());
    let mut cumulative_distance = Decimal::ZERO;

    visited.insert(root_id.clone());
    let mut current_id = Some(root_id.clone());

    while let Some(id) = current_id.take() {
        let Some(location) = locations_by_id.remove(&id) else {
            warn!(location_id = %id, "Location is not part of the topology, the walk ends here");
            break;
        };

        let next = location
            .routes()
            .iter()
            .find(|route| !visited.contains(route.to_id()))
            .map(|route| (route.to_id().clone(), route.distance()));

        debug!(
            location_id = %location.id(),
            name = location.name(),
            cumulative_distance = %cumulative_distance,
            "Visited location"
        );

        walk.push(LinearizedLocation::new(location, cumulative_distance));

        if let Some((next_id, distance)) = next {
            cumulative_distance = cumulative_distance
                .checked_add(distance)
                .ok_or_else(|| ConfigError::DistanceOverflow {
                    from: id.clone(),
                    to: next_id.clone(),
                })?;
            visited.insert(next_id.clone());
            current_id = Some(next_id);
        }
    }

    if !locations_by_id.is_empty() {
        warn!(
            count = locations_by_id.len(),
            "Locations not reachable from the root were left out"
        );
    }

    let topology = Topology::from_walk(walk);

    info!(
        locations = topology.len(),
        total_distance = %topology.total_distance(),
        "Linearized topology"
    );

    Ok(topology)
}
