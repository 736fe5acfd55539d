use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};
use crate::models::IngredientLine;

/// Servings assumed when a meal or recipe does not say.
pub const DEFAULT_SERVINGS: u32 = 4;

fn default_servings() -> u32 {
    DEFAULT_SERVINGS
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    #[serde(alias = "Breakfast", alias = "BREAKFAST")]
    Breakfast,
    #[serde(alias = "Lunch", alias = "LUNCH")]
    Lunch,
    #[serde(alias = "Dinner", alias = "DINNER")]
    Dinner,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealType::Breakfast => write!(f, "breakfast"),
            MealType::Lunch => write!(f, "lunch"),
            MealType::Dinner => write!(f, "dinner"),
        }
    }
}

/// Anything with a serving count and a list of ingredient lines.
pub trait Dish {
    fn dish_name(&self) -> &str;
    fn servings(&self) -> u32;
    fn ingredients(&self) -> &[IngredientLine];
}

/// A single meal within a day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(default)]
    pub name: String,

    pub meal_type: MealType,

    #[serde(default)]
    pub cooking_time_minutes: u32,

    #[serde(default = "default_servings")]
    pub servings: u32,

    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Meal {
    pub fn new(name: impl Into<String>, meal_type: MealType, cooking_time_minutes: u32) -> Self {
        Self {
            name: name.into(),
            meal_type,
            cooking_time_minutes,
            servings: DEFAULT_SERVINGS,
            ingredients: Vec::new(),
        }
    }

    /// Builder-style helper for adding an ingredient line.
    pub fn with_ingredient(mut self, line: IngredientLine) -> Self {
        self.ingredients.push(line);
        self
    }
}

impl Dish for Meal {
    fn dish_name(&self) -> &str {
        &self.name
    }

    fn servings(&self) -> u32 {
        self.servings
    }

    fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }
}

/// A standalone recipe, as produced by the recipe generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub name: String,

    #[serde(default = "default_servings")]
    pub servings: u32,

    #[serde(default)]
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    pub fn validate(&self) -> Result<()> {
        validate_dish(self, "recipe")
    }
}

impl Dish for Recipe {
    fn dish_name(&self) -> &str {
        &self.name
    }

    fn servings(&self) -> u32 {
        self.servings
    }

    fn ingredients(&self) -> &[IngredientLine] {
        &self.ingredients
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Day {
    #[serde(default)]
    pub meals: Vec<Meal>,
}

impl Day {
    pub fn new(meals: Vec<Meal>) -> Self {
        Self { meals }
    }

    /// Total cooking minutes across the day's meals.
    pub fn cooking_minutes(&self) -> u64 {
        self.meals
            .iter()
            .map(|m| u64::from(m.cooking_time_minutes))
            .sum()
    }
}

/// Ordered sequence of days. Serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    pub days: Vec<Day>,
}

impl MealPlan {
    pub fn new(days: Vec<Day>) -> Self {
        Self { days }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Every meal in plan order, day by day.
    pub fn meals(&self) -> impl Iterator<Item = &Meal> {
        self.days.iter().flat_map(|d| d.meals.iter())
    }

    /// Every ingredient line in plan order.
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &IngredientLine> {
        self.meals().flat_map(|m| m.ingredients.iter())
    }

    pub fn validate(&self) -> Result<()> {
        for meal in self.meals() {
            validate_dish(meal, "meal plan")?;
        }
        Ok(())
    }
}

fn validate_dish<D: Dish>(dish: &D, what: &'static str) -> Result<()> {
    if dish.servings() == 0 {
        return Err(MealError::malformed(
            what,
            format!("'{}' has zero servings", dish.dish_name()),
        ));
    }
    for line in dish.ingredients() {
        line.validate(what)?;
    }
    Ok(())
}
