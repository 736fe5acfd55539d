use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::models::MealPlan;
use crate::planner::calculations::{round_to, safe_ratio};
use crate::planner::constants::{MINUTES_DECIMALS, REUSE_MIN_OCCURRENCES};

/// Cooking-time statistics for a plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CookingStats {
    pub total_minutes: u64,
    /// Mean minutes per day, rounded to 1 decimal; 0 for an empty plan.
    pub average_per_day: f64,
    pub max_day: u64,
    pub min_day: u64,
    pub daily_times: Vec<u64>,
    pub within_limit: bool,
}

/// Ingredients that occur in more than one place across the plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReuseReport {
    /// Lowercase name -> occurrence count, for names seen at least twice.
    pub reused_ingredients: BTreeMap<String, u32>,
    pub reuse_count: usize,
    pub total_unique: usize,
}

impl ReuseReport {
    /// Share of distinct ingredients that are reused, 0 when there are none.
    pub fn reuse_ratio(&self) -> f64 {
        safe_ratio(self.reuse_count as f64, self.total_unique as f64)
    }

    /// Reused ingredient names, most frequent first, ties by name.
    pub fn ranked(&self) -> Vec<(&str, u32)> {
        let mut ranked: Vec<(&str, u32)> = self
            .reused_ingredients
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Per-day cooking totals and their aggregate statistics.
///
/// `within_limit` compares the (rounded) daily average against `target_minutes`.
pub fn analyze_cooking_time(plan: &MealPlan, target_minutes: f64) -> CookingStats {
    let daily_times: Vec<u64> = plan.days.iter().map(|d| d.cooking_minutes()).collect();
    let total_minutes: u64 = daily_times.iter().sum();
    let average_per_day = round_to(
        safe_ratio(total_minutes as f64, daily_times.len() as f64),
        MINUTES_DECIMALS,
    );

    CookingStats {
        total_minutes,
        average_per_day,
        max_day: daily_times.iter().copied().max().unwrap_or(0),
        min_day: daily_times.iter().copied().min().unwrap_or(0),
        within_limit: average_per_day <= target_minutes,
        daily_times,
    }
}

/// Count ingredient occurrences (not mass) and keep those seen at least twice.
pub fn find_ingredient_reuse(plan: &MealPlan) -> ReuseReport {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for line in plan.ingredient_lines() {
        *counts.entry(line.key()).or_insert(0) += 1;
    }

    let total_unique = counts.len();
    let reused_ingredients: BTreeMap<String, u32> = counts
        .into_iter()
        .filter(|(_, count)| *count >= REUSE_MIN_OCCURRENCES)
        .collect();

    ReuseReport {
        reuse_count: reused_ingredients.len(),
        total_unique,
        reused_ingredients,
    }
}
