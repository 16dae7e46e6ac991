use std::path::PathBuf;
use std::sync::Arc;

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use etr_pricing::config::EtrConfig;
use etr_pricing::pricing::PricingEngine;
use tower::ServiceExt;

use crate::{router, state::AppState};

pub fn create_test_state() -> Arc<AppState> {
    let config = EtrConfig::with_data_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data"));

    let engine = PricingEngine::from_config(&config).expect("reference data should load");

    Arc::new(AppState { engine })
}

pub async fn get(uri: &str) -> (StatusCode, String) {
    let (app, _) = router::app(create_test_state());

    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(uri).await;

    (status, serde_json::from_str(&body).unwrap())
}
