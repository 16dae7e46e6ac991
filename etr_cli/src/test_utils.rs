use std::path::PathBuf;

use etr_pricing::config::EtrConfig;
use etr_pricing::pricing::PricingEngine;

pub fn reference_engine() -> PricingEngine {
    let config = EtrConfig::with_data_dir(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data"));

    PricingEngine::from_config(&config).unwrap()
}
