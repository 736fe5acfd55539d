mod household;
mod ingredient;
mod nutrition;
mod plan;

pub use household::{HouseholdConstraints, HouseholdProfile, Member};
pub use ingredient::{IngredientLine, DEFAULT_UNIT};
pub use nutrition::NutritionProfile;
pub use plan::{Day, Dish, Meal, MealPlan, MealType, Recipe, DEFAULT_SERVINGS};
