mod docs;
mod error;
mod locations;
mod router;
mod state;
mod trip;

#[cfg(test)]
mod test_utils;

use std::fs::File;
use std::io::Write;
use std::sync::Arc;

use axum::serve;
use etr_pricing::config::EtrConfig;
use etr_pricing::pricing::PricingEngine;
use tracing::{Level, info};

use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const API_ADDRESS_ENV_VAR: &str = "ETR_API_ADDRESS";
const DEFAULT_API_ADDRESS: &str = "127.0.0.1:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = EtrConfig::from_env()?;
    let engine = PricingEngine::from_config(&config)?;

    info!(
        locations = engine.topology().len(),
        vehicle_classes = engine.rates().len(),
        "Pricing engine ready"
    );

    let state = Arc::new(AppState { engine });
    let (app, api) = router::app(state);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        let mut file = File::create("schemas/openapi.json")?;
        let spec = serde_json::to_string_pretty(api.as_ref())?;
        file.write_all(spec.as_bytes())?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let address =
        std::env::var(API_ADDRESS_ENV_VAR).unwrap_or_else(|_| DEFAULT_API_ADDRESS.to_owned());
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(address, "Listening");

    serve(listener, app).await?;

    Ok(())
}
