use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::EtrConfig;
use crate::decimal::{
    DISTANCE_SCALE, Distance, MONEY_SCALE, Money, round_half_even, serialize_number,
    serialize_optional_number,
};
use crate::direction::Direction;
use crate::error::{ConfigError, PricingError};
use crate::json::{read_interchanges, read_vehicle_rates};
use crate::location::LinearizedLocation;
use crate::topology::{Topology, linearize};
use crate::vehicle_rate::{VehicleClass, VehicleRates};

/// Flat charge per kilometre, 0.25.
pub const RATE_PER_KM: Money = Decimal::from_parts(25, 0, 0, false, 2);

/// Distance rounded to 3 digits and its flat-rate cost rounded to 2.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CostResponse {
    #[serde(serialize_with = "serialize_number")]
    #[schemars(with = "f64")]
    pub distance: Distance,
    #[serde(serialize_with = "serialize_number")]
    #[schemars(with = "f64")]
    pub cost: Money,
}

/// `km_rate` and `trip_charge` are only present when the vehicle class has a rate.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCostResponse {
    #[serde(serialize_with = "serialize_number")]
    #[schemars(with = "f64")]
    pub distance: Distance,
    pub direction: Direction,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_number"
    )]
    #[schemars(with = "Option<f64>")]
    pub km_rate: Option<Money>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_optional_number"
    )]
    #[schemars(with = "Option<f64>")]
    pub trip_charge: Option<Money>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum TripCost {
    Distance(CostResponse),
    Vehicle(VehicleCostResponse),
}

/// Answers toll queries against a linearized topology and a rate table. Both are
/// built once and only read afterwards, so the engine can be shared freely between
/// threads.
pub struct PricingEngine {
    topology: Topology,
    rates: VehicleRates,
}

impl PricingEngine {
    pub fn new(topology: Topology, rates: VehicleRates) -> Self {
        Self { topology, rates }
    }

    pub fn from_config(config: &EtrConfig) -> Result<Self, ConfigError> {
        let locations = read_interchanges(&config.interchanges_path)?;

        if !locations.contains_key(&config.root_location_id) {
            return Err(ConfigError::MissingRootLocation(
                config.root_location_id.clone(),
            ));
        }

        let topology = linearize(locations, &config.root_location_id)?;
        let rates = read_vehicle_rates(&config.rates_path)?;

        Ok(Self::new(topology, rates))
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn rates(&self) -> &VehicleRates {
        &self.rates
    }

    /// Linearized locations in walk order, root first.
    pub fn locations(&self) -> impl Iterator<Item = &LinearizedLocation> {
        self.topology.iter()
    }

    pub fn location_names(&self) -> Vec<&str> {
        self.topology.names()
    }

    fn resolve(
        &self,
        from_name: &str,
        to_name: &str,
    ) -> Result<(&LinearizedLocation, &LinearizedLocation), PricingError> {
        let from_name = from_name.trim();
        let to_name = to_name.trim();

        match (self.topology.get(from_name), self.topology.get(to_name)) {
            (Some(from), Some(to)) => Ok((from, to)),
            (from, _) => {
                let missing = if from.is_none() { from_name } else { to_name };
                warn!(from = from_name, to = to_name, missing, "The input location name doesn't exist");
                debug!(known_locations = ?self.location_names(), "Current locations");

                Err(PricingError::UnknownLocation(missing.to_owned()))
            }
        }
    }

    /// Unrounded, direction-agnostic distance between two named locations.
    pub fn distance_between(&self, from_name: &str, to_name: &str) -> Result<Distance, PricingError> {
        let (from, to) = self.resolve(from_name, to_name)?;
        Ok(from.distance_to(to))
    }

    pub fn cost_between(&self, from_name: &str, to_name: &str) -> Result<CostResponse, PricingError> {
        let (from, to) = self.resolve(from_name, to_name)?;
        Ok(distance_cost(from.distance_to(to)))
    }

    /// Distance cost plus the vehicle charges of `vehicle_class`. A class missing from
    /// the rate table leaves `km_rate` and `trip_charge` out of the response.
    pub fn cost_with_vehicle(
        &self,
        from_name: &str,
        to_name: &str,
        vehicle_class: &str,
    ) -> Result<VehicleCostResponse, PricingError> {
        let (from, to) = self.resolve(from_name, to_name)?;
        let base = distance_cost(from.distance_to(to));
        let direction = Direction::between(from.id(), to.id());

        let km_rate = self
            .rates
            .get(vehicle_class)
            .map(|rate| round_half_even(rate.km_rate(direction), MONEY_SCALE));

        // Both operands are already rounded to cents, so is their sum.
        let trip_charge = km_rate.map(|km_rate| base.cost + km_rate);

        if km_rate.is_none() {
            debug!(vehicle_class, "No rate for vehicle class");
        }

        Ok(VehicleCostResponse {
            distance: base.distance,
            direction,
            km_rate,
            trip_charge,
        })
    }

    pub fn cost_of_trip(
        &self,
        from_name: &str,
        to_name: &str,
        vehicle_class: Option<VehicleClass>,
    ) -> Result<TripCost, PricingError> {
        match vehicle_class {
            None => self.cost_between(from_name, to_name).map(TripCost::Distance),
            Some(class) => self
                .cost_with_vehicle(from_name, to_name, class.as_str())
                .map(TripCost::Vehicle),
        }
    }
}

fn distance_cost(distance: Distance) -> CostResponse {
    CostResponse {
        distance: round_half_even(distance, DISTANCE_SCALE),
        cost: round_half_even(distance * RATE_PER_KM, MONEY_SCALE),
    }
}
