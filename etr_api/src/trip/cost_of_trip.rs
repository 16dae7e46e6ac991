use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use etr_pricing::pricing::TripCost;
use etr_pricing::vehicle_rate::VehicleClass;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostOfTripQuery {
    pub from_location: String,
    pub to_location: String,
    /// Adds the vehicle charges of this class to the response.
    pub vehicle_type: Option<VehicleClass>,
}

pub async fn cost_of_trip_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CostOfTripQuery>,
) -> Result<Json<TripCost>, ApiError> {
    let trip_cost = state.engine.cost_of_trip(
        &query.from_location,
        &query.to_location,
        query.vehicle_type,
    )?;

    Ok(Json(trip_cost))
}
