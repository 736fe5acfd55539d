use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};

/// Unit assumed when an ingredient line does not name one.
pub const DEFAULT_UNIT: &str = "grams";

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

/// One ingredient occurrence within a meal or recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub name: String,

    #[serde(default)]
    pub amount: f64,

    #[serde(default = "default_unit")]
    pub unit: String,
}

impl IngredientLine {
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
        }
    }

    /// Shorthand for a line measured in grams.
    pub fn grams(name: impl Into<String>, amount: f64) -> Self {
        Self::new(name, amount, DEFAULT_UNIT)
    }

    /// Canonical key for aggregation and table lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub(crate) fn validate(&self, what: &'static str) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(MealError::malformed(what, "ingredient with empty name"));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(MealError::malformed(
                what,
                format!("ingredient '{}' has invalid amount {}", self.name, self.amount),
            ));
        }
        Ok(())
    }
}
