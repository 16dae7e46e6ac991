pub mod config;
pub mod decimal;
pub mod direction;
pub mod error;
pub mod json;
pub mod location;
pub mod pricing;
pub mod topology;
pub mod vehicle_rate;

#[cfg(test)]
pub(crate) mod test_utils;
