use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::{HouseholdProfile, MealPlan, Recipe};

/// Parse and validate a meal plan from JSON text.
///
/// Missing optional fields take their defaults; anything structurally wrong
/// or out of range is a `MalformedInput` error.
pub fn parse_plan(json: &str) -> Result<MealPlan> {
    let plan: MealPlan =
        serde_json::from_str(json).map_err(|e| MealError::malformed("meal plan", e.to_string()))?;
    plan.validate()?;
    debug!(days = plan.len(), "parsed meal plan");
    Ok(plan)
}

/// Parse and validate a recipe from JSON text.
pub fn parse_recipe(json: &str) -> Result<Recipe> {
    let recipe: Recipe =
        serde_json::from_str(json).map_err(|e| MealError::malformed("recipe", e.to_string()))?;
    recipe.validate()?;
    Ok(recipe)
}

/// Load a meal plan from a JSON file.
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let content = fs::read_to_string(path)?;
    parse_plan(&content)
}

/// Load a recipe from a JSON file.
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<Recipe> {
    let content = fs::read_to_string(path)?;
    parse_recipe(&content)
}

/// Load and validate household profiles from a JSON array.
///
/// Duplicate ids are kept in file order; [`HouseholdStore::from_profiles`]
/// resolves them (last one wins).
///
/// [`HouseholdStore::from_profiles`]: crate::state::HouseholdStore::from_profiles
pub fn load_households<P: AsRef<Path>>(path: P) -> Result<Vec<HouseholdProfile>> {
    let content = fs::read_to_string(path)?;
    let profiles: Vec<HouseholdProfile> =
        serde_json::from_str(&content).map_err(|e| MealError::malformed("households", e.to_string()))?;
    for profile in &profiles {
        profile.validate()?;
    }
    debug!(households = profiles.len(), "loaded households");
    Ok(profiles)
}
