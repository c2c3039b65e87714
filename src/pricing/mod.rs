mod calculator;
mod loader;
mod resolver;
mod types;

pub(crate) use calculator::calculate_cost;
pub(crate) use loader::{builtin_model, load_model};
pub(crate) use types::{CostResult, PriceTier, PricingModel};
