use std::sync::Arc;

use aide::axum::ApiRouter;
use aide::axum::routing::get;
use aide::openapi::OpenApi;
use aide::transform::TransformOpenApi;
use axum::http::Method;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::docs::docs_routes;
use crate::locations::{location_handler, locations_handler};
use crate::state::AppState;
use crate::trip::cost_of_trip::cost_of_trip_handler;

pub fn app(state: Arc<AppState>) -> (Router, Arc<OpenApi>) {
    let cors_layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(Any)
        .allow_headers(Any);

    let mut api = OpenApi::default();

    aide::generate::infer_responses(true);

    let app = ApiRouter::new()
        .nest_api_service("/docs", docs_routes(state.clone()))
        .api_route("/costoftrip", get(cost_of_trip_handler))
        .api_route("/locations", get(locations_handler))
        .api_route("/locations/{name}", get(location_handler))
        .finish_api_with(&mut api, api_docs);

    aide::generate::infer_responses(false);

    let api = Arc::new(api);

    let app = app
        .layer(ServiceBuilder::new().layer(cors_layer))
        .layer(Extension(Arc::clone(&api)))
        .with_state(state);

    (app, api)
}

fn api_docs(api: TransformOpenApi) -> TransformOpenApi {
    api.title("ETR Toll Pricing API")
        .description("Toll cost between two interchanges of the toll road network.")
}
