//! JSON tool boundary for the agent layer.
//!
//! Agents hand over JSON text produced by a model, which may be malformed.
//! These entry points never fail: parse, validation and range errors come
//! back as a [`ToolResponse::Error`] that serializes to `{"error": "..."}`.

use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::error::Result;
use crate::models::HouseholdConstraints;
use crate::planner::{
    self, check_budget, check_grams, check_target_minutes, AllergenReport, CookingStats,
    GroceryList, OptimizationReport, PlanCost, RecipeNutrition, ReuseReport, ShoppingList,
};
use crate::state::{parse_plan, parse_recipe, HouseholdStore};
use crate::tables::{CostEstimate, HealthGuidelines, NutritionLookup, ReferenceTables};

/// Either a report or an error message, serialized untagged.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResponse<T> {
    Ok(T),
    Error { error: String },
}

impl<T> ToolResponse<T> {
    pub fn from_result(result: Result<T>) -> Self {
        match result {
            Ok(value) => ToolResponse::Ok(value),
            Err(e) => {
                warn!(error = %e, "tool call failed");
                ToolResponse::Error {
                    error: e.to_string(),
                }
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ToolResponse::Error { .. })
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ToolResponse::Ok(value) => Some(value),
            ToolResponse::Error { .. } => None,
        }
    }
}

impl<T: Serialize> ToolResponse<T> {
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|e| json!({ "error": e.to_string() }))
    }
}

/// Tool entry points bound to a set of reference tables.
#[derive(Debug, Clone, Default)]
pub struct Toolkit {
    tables: ReferenceTables,
}

impl Toolkit {
    pub fn new(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn nutrition_lookup(
        &self,
        ingredient: &str,
        amount_grams: f64,
    ) -> ToolResponse<NutritionLookup> {
        ToolResponse::from_result(
            check_grams(amount_grams).map(|grams| self.tables.nutrition.lookup(ingredient, grams)),
        )
    }

    pub fn estimate_ingredient_cost(
        &self,
        ingredient: &str,
        amount_grams: f64,
    ) -> ToolResponse<CostEstimate> {
        ToolResponse::from_result(
            check_grams(amount_grams).map(|grams| self.tables.cost.lookup(ingredient, grams)),
        )
    }

    pub fn get_health_guidelines(&self, condition: &str) -> HealthGuidelines {
        self.tables.health.lookup(condition)
    }

    pub fn calculate_recipe_nutrition(&self, recipe_json: &str) -> ToolResponse<RecipeNutrition> {
        ToolResponse::from_result(parse_recipe(recipe_json).map(|recipe| {
            planner::calculate_recipe_nutrition(&recipe, &self.tables.nutrition)
        }))
    }

    pub fn check_allergens_in_recipe(
        &self,
        recipe_json: &str,
        allergies: &str,
    ) -> ToolResponse<AllergenReport> {
        ToolResponse::from_result(
            parse_recipe(recipe_json)
                .map(|recipe| planner::check_allergens(&recipe.ingredients, allergies)),
        )
    }

    pub fn calculate_meal_plan_cost(&self, plan_json: &str) -> ToolResponse<PlanCost> {
        ToolResponse::from_result(
            parse_plan(plan_json).map(|plan| planner::calculate_plan_cost(&plan, &self.tables.cost)),
        )
    }

    pub fn analyze_cooking_time(
        &self,
        plan_json: &str,
        target_minutes: f64,
    ) -> ToolResponse<CookingStats> {
        ToolResponse::from_result(check_target_minutes(target_minutes).and_then(|target| {
            parse_plan(plan_json).map(|plan| planner::analyze_cooking_time(&plan, target))
        }))
    }

    pub fn find_ingredient_reuse(&self, plan_json: &str) -> ToolResponse<ReuseReport> {
        ToolResponse::from_result(parse_plan(plan_json).map(|plan| planner::find_ingredient_reuse(&plan)))
    }

    pub fn aggregate_ingredients_for_shopping(&self, plan_json: &str) -> ToolResponse<ShoppingList> {
        ToolResponse::from_result(
            parse_plan(plan_json)
                .map(|plan| planner::aggregate_ingredients(&plan, &self.tables.cost)),
        )
    }

    pub fn generate_grocery_list(&self, plan_json: &str, budget: f64) -> ToolResponse<GroceryList> {
        ToolResponse::from_result(check_budget(budget).and_then(|budget| {
            parse_plan(plan_json)
                .map(|plan| planner::generate_grocery_list(&plan, &self.tables.cost, budget))
        }))
    }

    pub fn optimize_schedule(
        &self,
        plan_json: &str,
        target_minutes: f64,
    ) -> ToolResponse<OptimizationReport> {
        ToolResponse::from_result(check_target_minutes(target_minutes).and_then(|target| {
            parse_plan(plan_json).map(|plan| planner::optimize_schedule(&plan, target))
        }))
    }

    pub fn get_household_constraints(
        &self,
        store: &HouseholdStore,
        household_id: &str,
    ) -> ToolResponse<HouseholdConstraints> {
        ToolResponse::from_result(store.constraints(household_id))
    }
}
