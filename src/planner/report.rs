use serde::Serialize;
use tracing::info;

use crate::config::PlanningSettings;
use crate::error::Result;
use crate::models::{HouseholdConstraints, MealPlan, MealType};
use crate::planner::allergens::{check_plan_allergens, MealAllergenFinding};
use crate::planner::grocery::{calculate_plan_cost, dish_cost, generate_grocery_list, GroceryList, PlanCost};
use crate::planner::limits::{check_budget, check_target_minutes};
use crate::planner::nutrition::{calculate_recipe_nutrition, RecipeNutrition};
use crate::planner::scoring::{optimize_schedule, OptimizationReport};
use crate::tables::{HealthGuidelines, ReferenceTables};

/// Limits and household constraints a plan is evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanningConstraints {
    pub cooking_time_max: f64,
    pub budget: f64,
    /// Allergy terms, matched as substrings.
    pub allergies: Vec<String>,
    pub health_conditions: Vec<String>,
}

impl PlanningConstraints {
    pub fn new(cooking_time_max: f64, budget: f64) -> Self {
        Self {
            cooking_time_max,
            budget,
            allergies: Vec::new(),
            health_conditions: Vec::new(),
        }
    }

    pub fn from_settings(settings: &PlanningSettings) -> Self {
        Self::new(settings.cooking_time_max, settings.budget_weekly)
    }

    pub fn from_household(constraints: &HouseholdConstraints) -> Self {
        Self {
            cooking_time_max: constraints.cooking_time_max,
            budget: constraints.budget_weekly,
            allergies: constraints.allergies.clone(),
            health_conditions: constraints.health_conditions.clone(),
        }
    }

    /// Reject a non-positive cooking target or a negative budget.
    pub fn validate(&self) -> Result<()> {
        check_target_minutes(self.cooking_time_max)?;
        check_budget(self.budget)?;
        Ok(())
    }
}

/// Nutrition and cost of one meal in the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealSummary {
    /// 1-based day number.
    pub day: usize,
    pub name: String,
    pub meal_type: MealType,
    pub cooking_time_minutes: u32,
    pub cost: f64,
    pub nutrition: RecipeNutrition,
}

/// Every component report for one plan, merged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub days: usize,
    pub meals: Vec<MealSummary>,
    pub grocery: GroceryList,
    pub plan_cost: PlanCost,
    pub optimization: OptimizationReport,
    pub allergen_findings: Vec<MealAllergenFinding>,
    pub health_guidelines: Vec<HealthGuidelines>,
}

/// Run every analysis over the plan.
pub fn build_plan_report(
    plan: &MealPlan,
    tables: &ReferenceTables,
    constraints: &PlanningConstraints,
) -> PlanReport {
    let meals = plan
        .days
        .iter()
        .enumerate()
        .flat_map(|(i, day)| {
            day.meals.iter().map(move |meal| MealSummary {
                day: i + 1,
                name: meal.name.clone(),
                meal_type: meal.meal_type,
                cooking_time_minutes: meal.cooking_time_minutes,
                cost: dish_cost(meal, &tables.cost),
                nutrition: calculate_recipe_nutrition(meal, &tables.nutrition),
            })
        })
        .collect();

    let allergies = constraints.allergies.join(",");
    let report = PlanReport {
        days: plan.len(),
        meals,
        grocery: generate_grocery_list(plan, &tables.cost, constraints.budget),
        plan_cost: calculate_plan_cost(plan, &tables.cost),
        optimization: optimize_schedule(plan, constraints.cooking_time_max),
        allergen_findings: check_plan_allergens(plan, &allergies),
        health_guidelines: constraints
            .health_conditions
            .iter()
            .map(|c| tables.health.lookup(c))
            .collect(),
    };

    info!(
        days = report.days,
        score = report.optimization.optimization_score,
        total_cost = report.grocery.list.total_cost,
        "built plan report"
    );
    report
}
