use serde::Serialize;
use tracing::warn;

use crate::models::{Dish, NutritionProfile};
use crate::planner::constants::PER_SERVING_DECIMALS;
use crate::tables::NutritionTable;

/// Per-serving nutrition for a recipe or meal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeNutrition {
    #[serde(flatten)]
    pub per_serving: NutritionProfile,

    pub servings: u32,

    /// Ingredients that were not in the table and used estimated values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub estimated_ingredients: Vec<String>,
}

impl RecipeNutrition {
    pub fn has_estimates(&self) -> bool {
        !self.estimated_ingredients.is_empty()
    }
}

/// Sum ingredient nutrition over a dish and divide by its servings.
///
/// Zero servings is treated as one so the division is always defined.
pub fn calculate_recipe_nutrition<D: Dish>(dish: &D, table: &NutritionTable) -> RecipeNutrition {
    let servings = match dish.servings() {
        0 => {
            warn!(dish = dish.dish_name(), "zero servings, treating as 1");
            1
        }
        n => n,
    };

    let mut total = NutritionProfile::default();
    let mut estimated_ingredients = Vec::new();

    for line in dish.ingredients() {
        let lookup = table.lookup(&line.name, line.amount);
        if lookup.estimated {
            estimated_ingredients.push(line.name.clone());
        }
        total += lookup.profile;
    }

    RecipeNutrition {
        per_serving: total
            .scaled(1.0 / f64::from(servings))
            .rounded(PER_SERVING_DECIMALS),
        servings,
        estimated_ingredients,
    }
}
