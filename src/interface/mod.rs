pub mod export;
pub mod render;

pub use export::{write_shopping_csv, write_shopping_csv_to};
pub use render::{
    display_allergens, display_cooking_stats, display_cost_estimate, display_grocery_list,
    display_guidelines, display_nutrition_lookup, display_optimization, display_plan_cost,
    display_plan_report, display_recipe_nutrition,
};
