//! Decoding of the two configuration documents.
//!
//! The topology document maps location ids to their description:
//!
//! ```json
//! { "locations": { "1": { "name": "QEW", "lat": 43.34, "lng": -79.80,
//!                         "routes": [{ "toId": 2, "distance": 6.062 }] } } }
//! ```
//!
//! The rate document maps vehicle classes to their charges:
//!
//! ```json
//! { "rates": { "light": { "trip_toll_charge": 1.0, "camera_charge": 4.2,
//!                         "eastbound": 0.47, "westbound": 0.42 } } }
//! ```

pub mod types;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use fxhash::{FxHashMap, FxHashSet};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::ConfigError;
use crate::location::{Location, LocationId, Route};
use crate::vehicle_rate::{VehicleRate, VehicleRates};

use self::types::{JsonInterchanges, JsonRates};

pub type LocationsById = FxHashMap<LocationId, Location>;

fn read_document<T, P>(path: P) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
        document: path.display().to_string(),
        source,
    })
}

fn parse_document<T: DeserializeOwned>(json: &str, document: &str) -> Result<T, ConfigError> {
    serde_json::from_str(json).map_err(|source| ConfigError::Parse {
        document: document.to_owned(),
        source,
    })
}

/// Reads the topology document at `path` into locations keyed by id.
pub fn read_interchanges<P: AsRef<Path>>(path: P) -> Result<LocationsById, ConfigError> {
    let document: JsonInterchanges = read_document(&path)?;
    let locations = build_locations(document)?;

    info!(
        path = %path.as_ref().display(),
        locations = locations.len(),
        "Loaded interchanges"
    );

    Ok(locations)
}

pub fn interchanges_from_str(json: &str) -> Result<LocationsById, ConfigError> {
    build_locations(parse_document(json, "interchanges document")?)
}

/// Reads the rate document at `path`.
pub fn read_vehicle_rates<P: AsRef<Path>>(path: P) -> Result<VehicleRates, ConfigError> {
    let document: JsonRates = read_document(&path)?;
    let rates = build_vehicle_rates(document)?;

    info!(
        path = %path.as_ref().display(),
        vehicle_classes = rates.len(),
        "Loaded vehicle rates"
    );

    Ok(rates)
}

pub fn vehicle_rates_from_str(json: &str) -> Result<VehicleRates, ConfigError> {
    build_vehicle_rates(parse_document(json, "rates document")?)
}

fn build_locations(document: JsonInterchanges) -> Result<LocationsById, ConfigError> {
    let mut locations = FxHashMap::default();
    let mut names: FxHashSet<String> = FxHashSet::default();

    for (raw_id, json_location) in document.locations {
        let id = LocationId::parse(&raw_id)?;
        let name = json_location.name.trim().to_owned();

        if !names.insert(name.clone()) {
            return Err(ConfigError::DuplicateLocationName(name));
        }

        let routes = json_location
            .routes
            .into_iter()
            .map(|route| {
                let to_id = LocationId::from(route.to_id);
                if route.distance.is_sign_negative() && !route.distance.is_zero() {
                    return Err(ConfigError::NegativeRouteDistance {
                        from: id.clone(),
                        to: to_id,
                    });
                }
                Ok(Route::new(to_id, route.distance))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let location =
            Location::new(id.clone(), name, json_location.lat, json_location.lng).with_routes(routes);

        if locations.insert(id.clone(), location).is_some() {
            return Err(ConfigError::DuplicateLocationId(id));
        }
    }

    Ok(locations)
}

fn build_vehicle_rates(document: JsonRates) -> Result<VehicleRates, ConfigError> {
    document
        .rates
        .into_iter()
        .map(|(vehicle_class, json_rate)| {
            let rate = VehicleRate::new(
                json_rate.trip_toll_charge,
                json_rate.camera_charge,
                json_rate.eastbound,
                json_rate.westbound,
            );

            if rate.has_negative_charge() {
                return Err(ConfigError::NegativeCharge(vehicle_class));
            }

            Ok((vehicle_class, rate))
        })
        .collect()
}
