use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::models::NutritionProfile;
use crate::planner::calculations::per_100g_factor;
use crate::planner::constants::{NUTRITION_DECIMALS, NUTRITION_ESTIMATE_NOTE};

/// Profile assumed per 100 g of an ingredient missing from the table.
pub const DEFAULT_NUTRITION_PER_100G: NutritionProfile =
    NutritionProfile::new(100.0, 5.0, 15.0, 3.0, 2.0);

/// Built-in per-100 g profiles.
const BUILTIN_NUTRITION: &[(&str, NutritionProfile)] = &[
    ("chicken breast", NutritionProfile::new(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("brown rice", NutritionProfile::new(112.0, 2.6, 24.0, 0.9, 1.8)),
    ("broccoli", NutritionProfile::new(34.0, 2.8, 7.0, 0.4, 2.6)),
    ("salmon", NutritionProfile::new(206.0, 22.0, 0.0, 13.0, 0.0)),
    ("quinoa", NutritionProfile::new(120.0, 4.4, 21.0, 1.9, 2.8)),
    ("spinach", NutritionProfile::new(23.0, 2.9, 3.6, 0.4, 2.2)),
    ("sweet potato", NutritionProfile::new(86.0, 1.6, 20.0, 0.1, 3.0)),
    ("eggs", NutritionProfile::new(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("olive oil", NutritionProfile::new(884.0, 0.0, 0.0, 100.0, 0.0)),
    ("tofu", NutritionProfile::new(76.0, 8.0, 1.9, 4.8, 0.3)),
];

/// Result of a nutrition lookup, scaled to the requested mass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionLookup {
    pub ingredient: String,
    pub amount_grams: f64,

    #[serde(flatten)]
    pub profile: NutritionProfile,

    /// True when the ingredient was not in the table and defaults were used.
    pub estimated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// Closest known ingredient, offered only for estimates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
}

/// Ingredient -> per-100 g nutrition profile, keyed by lowercase name.
#[derive(Debug, Clone)]
pub struct NutritionTable {
    entries: HashMap<String, NutritionProfile>,
}

impl NutritionTable {
    /// Table with no entries; every lookup is an estimate.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let entries = BUILTIN_NUTRITION
            .iter()
            .map(|(name, profile)| (name.to_string(), *profile))
            .collect();
        Self { entries }
    }

    /// Add or replace an entry (case-insensitive).
    pub fn insert(&mut self, name: &str, per_100g: NutritionProfile) {
        self.entries.insert(name.trim().to_lowercase(), per_100g);
    }

    /// Per-100 g profile for an ingredient, if known.
    pub fn get(&self, name: &str) -> Option<&NutritionProfile> {
        self.entries.get(&name.trim().to_lowercase())
    }

    /// Nutrition for `amount_grams` of `ingredient`, rounded to 1 decimal.
    ///
    /// Unknown ingredients fall back to [`DEFAULT_NUTRITION_PER_100G`], scaled
    /// the same way, and are tagged as estimates.
    pub fn lookup(&self, ingredient: &str, amount_grams: f64) -> NutritionLookup {
        match self.get(ingredient) {
            Some(base) => NutritionLookup {
                ingredient: ingredient.to_string(),
                amount_grams,
                profile: base
                    .scaled(per_100g_factor(amount_grams))
                    .rounded(NUTRITION_DECIMALS),
                estimated: false,
                note: None,
                did_you_mean: None,
            },
            None => {
                debug!(ingredient, "nutrition table miss, using estimate");
                NutritionLookup {
                    ingredient: ingredient.to_string(),
                    amount_grams,
                    profile: DEFAULT_NUTRITION_PER_100G
                        .scaled(per_100g_factor(amount_grams))
                        .rounded(NUTRITION_DECIMALS),
                    estimated: true,
                    note: Some(NUTRITION_ESTIMATE_NOTE.to_string()),
                    did_you_mean: self.closest_match(ingredient),
                }
            }
        }
    }

    /// Closest known ingredient name for a misspelled one.
    pub fn closest_match(&self, name: &str) -> Option<String> {
        super::closest_key(self.entries.keys(), name)
    }

    /// Known ingredient names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for NutritionTable {
    fn default() -> Self {
        Self::builtin()
    }
}
