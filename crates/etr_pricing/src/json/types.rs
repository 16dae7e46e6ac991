use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::decimal::deserialize_number;

#[derive(Deserialize)]
pub struct JsonInterchanges {
    pub locations: BTreeMap<String, JsonLocation>,
}

#[derive(Deserialize)]
pub struct JsonLocation {
    pub name: String,
    #[serde(default)]
    pub lat: f64,
    #[serde(default)]
    pub lng: f64,
    #[serde(default)]
    pub routes: Vec<JsonRoute>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonRoute {
    pub to_id: u64,
    #[serde(deserialize_with = "deserialize_number")]
    pub distance: Decimal,
}

#[derive(Deserialize)]
pub struct JsonRates {
    pub rates: BTreeMap<String, JsonVehicleRate>,
}

#[derive(Deserialize)]
pub struct JsonVehicleRate {
    #[serde(deserialize_with = "deserialize_number")]
    pub trip_toll_charge: Decimal,
    #[serde(deserialize_with = "deserialize_number")]
    pub camera_charge: Decimal,
    #[serde(deserialize_with = "deserialize_number")]
    pub eastbound: Decimal,
    #[serde(deserialize_with = "deserialize_number")]
    pub westbound: Decimal,
}
