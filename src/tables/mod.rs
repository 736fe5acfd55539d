//! Static reference tables: nutrition, cost and health guidelines.
//!
//! Tables are plain owned values. Callers build them once (usually via
//! [`ReferenceTables::default`]) and pass them by reference into the
//! planner, so nothing here is global or mutable after construction.

mod cost;
mod health;
mod nutrition;

use strsim::jaro_winkler;

pub use cost::{CostEstimate, CostTable};
pub use health::{HealthGuidelineTable, HealthGuidelines};
pub use nutrition::{NutritionLookup, NutritionTable, DEFAULT_NUTRITION_PER_100G};

use crate::config::TableSettings;
use crate::error::{MealError, Result};
use crate::planner::constants::SUGGESTION_SIMILARITY;

/// The three reference tables bundled together for injection.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    pub nutrition: NutritionTable,
    pub cost: CostTable,
    pub health: HealthGuidelineTable,
}

impl ReferenceTables {
    /// Built-in tables extended with entries from configuration.
    ///
    /// Configured entries replace built-in ones with the same name.
    pub fn from_settings(settings: &TableSettings) -> Result<Self> {
        let mut tables = Self::default();

        for (name, profile) in &settings.nutrition {
            if !profile.is_valid() {
                return Err(MealError::Config(format!(
                    "nutrition entry '{}' has negative or non-finite values",
                    name
                )));
            }
            tables.nutrition.insert(name, *profile);
        }

        for (name, price) in &settings.cost {
            if !price.is_finite() || *price < 0.0 {
                return Err(MealError::Config(format!(
                    "cost entry '{}' must be a non-negative price, got {}",
                    name, price
                )));
            }
            tables.cost.insert(name, *price);
        }

        for (condition, guidelines) in &settings.health {
            tables
                .health
                .insert(condition, guidelines.avoid.clone(), guidelines.prefer.clone());
        }

        Ok(tables)
    }
}

/// Closest table key to `name` by Jaro-Winkler similarity, if close enough.
fn closest_key<'a, I>(keys: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a String>,
{
    let needle = name.trim().to_lowercase();
    keys.into_iter()
        .map(|k| (k, jaro_winkler(k, &needle)))
        .filter(|(_, score)| *score >= SUGGESTION_SIMILARITY)
        .max_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                // Prefer the alphabetically first key on ties.
                .then_with(|| b.0.cmp(a.0))
        })
        .map(|(k, _)| k.clone())
}
