//! Range checks for caller-supplied quantities and planning limits.

use crate::error::{MealError, Result};

/// Ingredient mass in grams: finite and non-negative.
pub fn check_grams(grams: f64) -> Result<f64> {
    if grams.is_finite() && grams >= 0.0 {
        Ok(grams)
    } else {
        Err(MealError::InvalidInput(format!(
            "amount must be a non-negative number of grams, got {}",
            grams
        )))
    }
}

/// Daily cooking target in minutes: finite and strictly positive.
pub fn check_target_minutes(minutes: f64) -> Result<f64> {
    if minutes.is_finite() && minutes > 0.0 {
        Ok(minutes)
    } else {
        Err(MealError::InvalidInput(format!(
            "cooking time target must be a positive number of minutes, got {}",
            minutes
        )))
    }
}

/// Grocery budget: finite and non-negative.
pub fn check_budget(budget: f64) -> Result<f64> {
    if budget.is_finite() && budget >= 0.0 {
        Ok(budget)
    } else {
        Err(MealError::InvalidInput(format!(
            "budget must be a non-negative amount, got {}",
            budget
        )))
    }
}
