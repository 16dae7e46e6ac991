use std::fmt;
use std::str::FromStr;

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decimal::{Money, SURCHARGE_SCALE, round_half_even};
use crate::direction::Direction;

/// Vehicle classes accepted at the query boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    Light,
    Heavy,
    Multi,
}

impl VehicleClass {
    pub const ALL: [VehicleClass; 3] = [VehicleClass::Light, VehicleClass::Heavy, VehicleClass::Multi];

    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleClass::Light => "light",
            VehicleClass::Heavy => "heavy",
            VehicleClass::Multi => "multi",
        }
    }
}

impl fmt::Display for VehicleClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown vehicle class {0:?}, expected one of light, heavy, multi")]
pub struct ParseVehicleClassError(String);

impl FromStr for VehicleClass {
    type Err = ParseVehicleClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VehicleClass::ALL
            .into_iter()
            .find(|class| class.as_str() == s.trim())
            .ok_or_else(|| ParseVehicleClassError(s.to_owned()))
    }
}

/// Charges applied to one vehicle class on top of the distance cost.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleRate {
    trip_toll_charge: Money,
    camera_charge: Money,
    eastbound: Money,
    westbound: Money,
}

impl VehicleRate {
    /// Directional surcharges are stored at 4 fractional digits.
    pub fn new(trip_toll_charge: Money, camera_charge: Money, eastbound: Money, westbound: Money) -> Self {
        Self {
            trip_toll_charge,
            camera_charge,
            eastbound: round_half_even(eastbound, SURCHARGE_SCALE),
            westbound: round_half_even(westbound, SURCHARGE_SCALE),
        }
    }

    pub fn trip_toll_charge(&self) -> Money {
        self.trip_toll_charge
    }

    pub fn camera_charge(&self) -> Money {
        self.camera_charge
    }

    pub fn eastbound(&self) -> Money {
        self.eastbound
    }

    pub fn westbound(&self) -> Money {
        self.westbound
    }

    pub fn surcharge(&self, direction: Direction) -> Money {
        match direction {
            Direction::Eastbound => self.eastbound,
            Direction::Westbound => self.westbound,
        }
    }

    /// Unrounded per-trip vehicle charge. Not scaled by distance despite the name.
    pub fn km_rate(&self, direction: Direction) -> Money {
        self.trip_toll_charge + self.camera_charge + self.surcharge(direction)
    }

    pub(crate) fn has_negative_charge(&self) -> bool {
        [self.trip_toll_charge, self.camera_charge, self.eastbound, self.westbound]
            .iter()
            .any(|charge| charge.is_sign_negative() && !charge.is_zero())
    }
}

/// Rate table keyed by vehicle class name. A class without an entry is a valid
/// lookup miss, not an error.
#[derive(Debug, Clone, Default)]
pub struct VehicleRates {
    rates: FxHashMap<String, VehicleRate>,
}

impl VehicleRates {
    pub fn new(rates: FxHashMap<String, VehicleRate>) -> Self {
        Self { rates }
    }

    pub fn get(&self, vehicle_class: &str) -> Option<&VehicleRate> {
        self.rates.get(vehicle_class)
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        classes.sort_unstable();
        classes
    }
}

impl FromIterator<(String, VehicleRate)> for VehicleRates {
    fn from_iter<T: IntoIterator<Item = (String, VehicleRate)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_vehicle_class_from_str() {
        assert_eq!("light".parse::<VehicleClass>(), Ok(VehicleClass::Light));
        assert_eq!(" heavy ".parse::<VehicleClass>(), Ok(VehicleClass::Heavy));
        assert_eq!("multi".parse::<VehicleClass>(), Ok(VehicleClass::Multi));
        assert!("bicycle".parse::<VehicleClass>().is_err());
        assert!("Light".parse::<VehicleClass>().is_err());
    }

    #[test]
    fn test_vehicle_class_serde() {
        assert_eq!(serde_json::to_string(&VehicleClass::Multi).unwrap(), "\"multi\"");
        let class: VehicleClass = serde_json::from_str("\"heavy\"").unwrap();
        assert_eq!(class, VehicleClass::Heavy);
    }

    #[test]
    fn test_surcharges_are_stored_at_four_digits() {
        let rate = VehicleRate::new(dec!(1), dec!(4.2), dec!(0.46995), dec!(0.42));

        assert_eq!(rate.eastbound().to_string(), "0.4700");
        assert_eq!(rate.westbound().to_string(), "0.4200");
        assert_eq!(rate.trip_toll_charge(), dec!(1));
    }

    #[test]
    fn test_km_rate_uses_direction_surcharge() {
        let rate = VehicleRate::new(dec!(2), dec!(44.8), dec!(1.04), dec!(0.94));

        assert_eq!(rate.km_rate(Direction::Westbound), dec!(47.74));
        assert_eq!(rate.km_rate(Direction::Eastbound), dec!(47.84));
    }

    #[test]
    fn test_missing_class_is_a_miss() {
        let rates: VehicleRates = [(
            "light".to_owned(),
            VehicleRate::new(dec!(1), dec!(4.2), dec!(0.47), dec!(0.42)),
        )]
        .into_iter()
        .collect();

        assert!(rates.get("light").is_some());
        assert!(rates.get("unknown_class").is_none());
        assert_eq!(rates.classes(), vec!["light"]);
    }

    #[test]
    fn test_has_negative_charge() {
        let rate = VehicleRate::new(dec!(1), dec!(-0.01), dec!(0), dec!(0));
        assert!(rate.has_negative_charge());

        let rate = VehicleRate::new(dec!(0), dec!(0), dec!(0), dec!(0));
        assert!(!rate.has_negative_charge());
    }
}
