use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::planner::calculations::{per_100g_factor, round_to};
use crate::planner::constants::{COST_ESTIMATE_NOTE, CURRENCY_DECIMALS, ESTIMATED_COST_PER_100G};

/// Built-in prices per 100 g.
const BUILTIN_COSTS: &[(&str, f64)] = &[
    ("chicken breast", 1.20),
    ("brown rice", 0.15),
    ("broccoli", 0.40),
    ("salmon", 2.50),
    ("quinoa", 0.80),
    ("spinach", 0.60),
    ("sweet potato", 0.30),
    ("eggs", 0.25),
    ("olive oil", 1.00),
    ("tofu", 0.90),
];

/// Cost of a given mass of one ingredient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    pub ingredient: String,
    pub amount_grams: f64,
    pub total_cost: f64,
    pub estimated: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_you_mean: Option<String>,
}

/// Ingredient -> price per 100 g, keyed by lowercase name.
#[derive(Debug, Clone)]
pub struct CostTable {
    prices: HashMap<String, f64>,
}

impl CostTable {
    pub fn empty() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }

    pub fn builtin() -> Self {
        let prices = BUILTIN_COSTS
            .iter()
            .map(|(name, price)| (name.to_string(), *price))
            .collect();
        Self { prices }
    }

    pub fn insert(&mut self, name: &str, price_per_100g: f64) {
        self.prices.insert(name.trim().to_lowercase(), price_per_100g);
    }

    /// Price per 100 g and whether it came from the table.
    pub fn price_per_100g(&self, name: &str) -> (f64, bool) {
        match self.prices.get(&name.trim().to_lowercase()) {
            Some(price) => (*price, true),
            None => (ESTIMATED_COST_PER_100G, false),
        }
    }

    /// Cost of `amount_grams` of `ingredient`, rounded to cents.
    pub fn lookup(&self, ingredient: &str, amount_grams: f64) -> CostEstimate {
        let (price, known) = self.price_per_100g(ingredient);
        let total_cost = round_to(per_100g_factor(amount_grams) * price, CURRENCY_DECIMALS);

        if !known {
            debug!(ingredient, "cost table miss, using estimate");
        }

        CostEstimate {
            ingredient: ingredient.to_string(),
            amount_grams,
            total_cost,
            estimated: !known,
            note: (!known).then(|| COST_ESTIMATE_NOTE.to_string()),
            did_you_mean: if known { None } else { self.closest_match(ingredient) },
        }
    }

    pub fn closest_match(&self, name: &str) -> Option<String> {
        super::closest_key(self.prices.keys(), name)
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ingredient_cost() {
        let table = CostTable::builtin();
        let estimate = table.lookup("Salmon", 300.0);
        assert_eq!(estimate.total_cost, 7.5);
        assert!(!estimate.estimated);
        assert!(estimate.note.is_none());
    }

    #[test]
    fn test_unknown_ingredient_uses_default_price() {
        let table = CostTable::builtin();
        let estimate = table.lookup("dragonfruit", 250.0);
        assert_eq!(estimate.total_cost, 1.25);
        assert!(estimate.estimated);
        assert_eq!(estimate.note.as_deref(), Some("Estimated"));
    }

    #[test]
    fn test_cost_rounds_to_cents() {
        let table = CostTable::builtin();
        // 0.15 * 1.23 = 0.1845
        assert_eq!(table.lookup("brown rice", 123.0).total_cost, 0.18);
    }

    #[test]
    fn test_insert_overrides_builtin() {
        let mut table = CostTable::builtin();
        table.insert("Tofu", 1.10);
        assert_eq!(table.price_per_100g("tofu"), (1.10, true));
    }
}
