use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::MealPlan;
use crate::planner::calculations::round_to;
use crate::planner::constants::{
    BASE_SCORE, BATCH_COOK_TOP_N, REUSE_BONUS_WEIGHT, SCORE_DECIMALS, SCORE_MAX, SCORE_MIN,
    TIME_OVERSHOOT_WEIGHT,
};
use crate::planner::schedule::{analyze_cooking_time, find_ingredient_reuse, CookingStats, ReuseReport};

/// Score and advice for a plan's schedule.
///
/// This only scores and advises; meals are never reordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationReport {
    pub cooking_stats: CookingStats,
    pub reused_ingredients: BTreeMap<String, u32>,
    pub optimization_score: f64,
    pub suggestions: Vec<String>,
}

/// Heuristic 0-100 score from cooking time against target and ingredient reuse.
///
/// Overshooting the target costs `TIME_OVERSHOOT_WEIGHT` points per 100% over;
/// reuse earns up to `REUSE_BONUS_WEIGHT`. A non-positive target disables the
/// time penalty.
pub fn calculate_optimization_score(
    stats: &CookingStats,
    reuse: &ReuseReport,
    target_minutes: f64,
) -> f64 {
    let mut score = BASE_SCORE;

    if target_minutes > 0.0 && stats.average_per_day > target_minutes {
        score -= ((stats.average_per_day - target_minutes) / target_minutes) * TIME_OVERSHOOT_WEIGHT;
    }

    score += reuse.reuse_ratio() * REUSE_BONUS_WEIGHT;

    round_to(score.clamp(SCORE_MIN, SCORE_MAX), SCORE_DECIMALS)
}

/// Rule-based suggestions: a time warning, then a batch-cooking hint.
///
/// Like the score, a non-positive target produces no time warning.
pub fn generate_suggestions(
    stats: &CookingStats,
    reuse: &ReuseReport,
    target_minutes: f64,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if target_minutes > 0.0 && stats.average_per_day > target_minutes {
        suggestions.push(format!(
            "Average time ({:.1} min) exceeds target. Consider simpler recipes.",
            stats.average_per_day
        ));
    }

    let batch: Vec<&str> = reuse
        .ranked()
        .into_iter()
        .take(BATCH_COOK_TOP_N)
        .map(|(name, _)| name)
        .collect();
    if !batch.is_empty() {
        suggestions.push(format!("Batch cook: {}", batch.join(", ")));
    }

    suggestions
}

/// Analyze cooking time and reuse, then score and advise.
pub fn optimize_schedule(plan: &MealPlan, target_minutes: f64) -> OptimizationReport {
    let cooking_stats = analyze_cooking_time(plan, target_minutes);
    let reuse = find_ingredient_reuse(plan);

    OptimizationReport {
        optimization_score: calculate_optimization_score(&cooking_stats, &reuse, target_minutes),
        suggestions: generate_suggestions(&cooking_stats, &reuse, target_minutes),
        cooking_stats,
        reused_ingredients: reuse.reused_ingredients,
    }
}
