/// Default maximum cooking time per day, in minutes.
pub const DEFAULT_COOKING_TIME_MAX: f64 = 45.0;

/// Default weekly grocery budget, in currency units.
pub const DEFAULT_BUDGET_WEEKLY: f64 = 150.0;

// ─────────────────────────────────────────────────────────────────────────────
// Table fallbacks
// ─────────────────────────────────────────────────────────────────────────────

/// Price per 100 g used for ingredients missing from the cost table.
pub const ESTIMATED_COST_PER_100G: f64 = 0.50;

/// Note attached to nutrition lookups that fell back to the default profile.
pub const NUTRITION_ESTIMATE_NOTE: &str = "Estimated values";

/// Note attached to cost lookups that fell back to the default price.
pub const COST_ESTIMATE_NOTE: &str = "Estimated";

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_SIMILARITY: f64 = 0.85;

// ─────────────────────────────────────────────────────────────────────────────
// Rounding precision
// ─────────────────────────────────────────────────────────────────────────────

pub const NUTRITION_DECIMALS: u32 = 1;
pub const PER_SERVING_DECIMALS: u32 = 2;
pub const CURRENCY_DECIMALS: u32 = 2;
pub const MINUTES_DECIMALS: u32 = 1;
pub const SCORE_DECIMALS: u32 = 1;

// ─────────────────────────────────────────────────────────────────────────────
// Optimization score
// ─────────────────────────────────────────────────────────────────────────────

/// Starting score before penalties and bonuses.
pub const BASE_SCORE: f64 = 100.0;

/// Points lost per 100% overshoot of the daily cooking target.
pub const TIME_OVERSHOOT_WEIGHT: f64 = 30.0;

/// Points gained when every distinct ingredient is reused.
pub const REUSE_BONUS_WEIGHT: f64 = 15.0;

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

/// Occurrences needed before an ingredient counts as reused.
pub const REUSE_MIN_OCCURRENCES: u32 = 2;

/// Number of reused ingredients named in the batch-cook suggestion.
pub const BATCH_COOK_TOP_N: usize = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping tips
// ─────────────────────────────────────────────────────────────────────────────

/// Meal occurrences needed before an item is suggested for bulk buying.
pub const BULK_BUY_MIN_USES: usize = 3;

/// Number of items named in the bulk-buy tip.
pub const BULK_BUY_TOP_N: usize = 3;

pub fn default_cooking_time_max() -> f64 {
    DEFAULT_COOKING_TIME_MAX
}

pub fn default_budget_weekly() -> f64 {
    DEFAULT_BUDGET_WEEKLY
}
