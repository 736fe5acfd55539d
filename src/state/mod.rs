mod manager;
mod ingest;

pub use manager::HouseholdStore;
pub use ingest::{load_households, load_plan, load_recipe, parse_plan, parse_recipe};
