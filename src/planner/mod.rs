//! Deterministic analysis over a meal plan.
//!
//! Every function here is a pure transform: it reads the plan and the
//! reference tables and returns a fresh report.

pub mod allergens;
pub mod calculations;
pub mod constants;
pub mod grocery;
pub mod limits;
pub mod nutrition;
pub mod report;
pub mod schedule;
pub mod scoring;

pub use allergens::{check_allergens, check_plan_allergens, AllergenReport, MealAllergenFinding};
pub use grocery::{
    aggregate_ingredients, assess_budget, calculate_plan_cost, generate_grocery_list,
    BudgetStatus, GroceryList, PlanCost, ShoppingItem, ShoppingList,
};
pub use limits::{check_budget, check_grams, check_target_minutes};
pub use nutrition::{calculate_recipe_nutrition, RecipeNutrition};
pub use report::{build_plan_report, MealSummary, PlanReport, PlanningConstraints};
pub use schedule::{analyze_cooking_time, find_ingredient_reuse, CookingStats, ReuseReport};
pub use scoring::{
    calculate_optimization_score, generate_suggestions, optimize_schedule, OptimizationReport,
};
