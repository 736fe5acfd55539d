pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod state;
pub mod tables;
pub mod tools;

pub use error::{MealError, Result};
pub use models::{Day, IngredientLine, Meal, MealPlan, MealType, Recipe};
pub use tables::ReferenceTables;
