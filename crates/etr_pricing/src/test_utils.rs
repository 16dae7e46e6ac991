use fxhash::FxHashMap;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::location::{Location, LocationId, Route};
use crate::pricing::PricingEngine;
use crate::topology::linearize;
use crate::vehicle_rate::{VehicleRate, VehicleRates};

pub fn location(id: u64, name: &str, routes: &[(u64, Decimal)]) -> Location {
    Location::new(LocationId::from(id), name, 43.0, -79.0).with_routes(
        routes
            .iter()
            .map(|&(to_id, distance)| Route::new(LocationId::from(to_id), distance))
            .collect(),
    )
}

pub fn locations_by_id(locations: Vec<Location>) -> FxHashMap<LocationId, Location> {
    locations
        .into_iter()
        .map(|location| (location.id().clone(), location))
        .collect()
}

/// Builds a path with ids `1..=n`. Each stop carries the distance from the previous
/// stop (ignored for the first one) and routes both ways, previous stop first.
pub fn bidirectional_path(stops: &[(&str, Decimal)]) -> FxHashMap<LocationId, Location> {
    let locations = stops
        .iter()
        .enumerate()
        .map(|(index, &(name, _))| {
            let id = index as u64 + 1;
            let mut routes = vec![];
            if index > 0 {
                routes.push((id - 1, stops[index].1));
            }
            if let Some(&(_, distance)) = stops.get(index + 1) {
                routes.push((id + 1, distance));
            }
            location(id, name, &routes)
        })
        .collect();

    locations_by_id(locations)
}

pub fn reference_rates() -> VehicleRates {
    [
        ("light", VehicleRate::new(dec!(1.00), dec!(4.20), dec!(0.47), dec!(0.42))),
        ("heavy", VehicleRate::new(dec!(2.00), dec!(44.80), dec!(1.04), dec!(0.94))),
        ("multi", VehicleRate::new(dec!(2.00), dec!(51.20), dec!(1.10), dec!(0.91))),
    ]
    .into_iter()
    .map(|(class, rate)| (class.to_owned(), rate))
    .collect()
}

pub fn create_test_engine(stops: &[(&str, Decimal)]) -> PricingEngine {
    PricingEngine::new(
        linearize(bidirectional_path(stops), &LocationId::from(1)).unwrap(),
        reference_rates(),
    )
}
