//! Configuration for the planner.
//!
//! Settings come from an optional TOML file; CLI flags override them.

mod settings;

pub use settings::{
    GeneralSettings, HealthEntry, PlanningSettings, Settings, TableSettings, DEFAULT_CONFIG_FILE,
};
