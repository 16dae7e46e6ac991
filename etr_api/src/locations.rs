use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use etr_pricing::decimal::{Distance, serialize_number};
use etr_pricing::location::LinearizedLocation;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{error::ApiError, state::AppState};

/// A location of the toll highway, in walk order from the root.
#[derive(Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiLocation {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(serialize_with = "serialize_number")]
    #[schemars(with = "f64")]
    pub cumulative_distance: Distance,
}

impl From<&LinearizedLocation> for ApiLocation {
    fn from(location: &LinearizedLocation) -> Self {
        ApiLocation {
            id: location.id().to_string(),
            name: location.name().to_owned(),
            lat: location.location().lat(),
            lng: location.location().lng(),
            cumulative_distance: location.cumulative_distance(),
        }
    }
}

pub async fn locations_handler(State(state): State<Arc<AppState>>) -> Json<Vec<ApiLocation>> {
    let locations = state.engine.locations().map(ApiLocation::from).collect();

    Json(locations)
}

pub async fn location_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ApiLocation>, ApiError> {
    state
        .engine
        .topology()
        .get(name.trim())
        .map(|location| Json(ApiLocation::from(location)))
        .ok_or_else(|| ApiError::NotFound(format!("Location not found: {name}")))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::test_utils::{get, get_json};

    #[tokio::test]
    async fn test_list_locations_in_walk_order() {
        let (status, body) = get_json("/locations").await;

        assert_eq!(status, StatusCode::OK);

        let locations = body.as_array().unwrap();
        assert_eq!(locations.len(), 44);
        assert_eq!(locations[0]["name"], "QEW");
        assert_eq!(locations[0]["cumulativeDistance"], json!(0));
        assert_eq!(locations[43]["name"], "Simcoe Street");
    }

    #[tokio::test]
    async fn test_get_location_by_name() {
        let (status, body) = get("/locations/Dundas%20Street").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            r#"{"id":"2","name":"Dundas Street","lat":43.383554,"lng":-79.833478,"cumulativeDistance":6.062}"#
        );
    }

    #[tokio::test]
    async fn test_unknown_location_is_not_found() {
        let (status, body) = get("/locations/Nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Location not found: Nowhere");
    }
}
