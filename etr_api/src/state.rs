use etr_pricing::pricing::PricingEngine;

pub struct AppState {
    pub engine: PricingEngine,
}
