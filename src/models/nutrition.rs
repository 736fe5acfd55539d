use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::planner::calculations::round_to;

/// Macro-nutrient profile. Table entries are per 100 g.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub calories: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
}

impl NutritionProfile {
    pub const fn new(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64, fiber_g: f64) -> Self {
        Self {
            calories,
            protein_g,
            carbs_g,
            fat_g,
            fiber_g,
        }
    }

    /// Multiply every field by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        self.map(|v| v * factor)
    }

    /// Round every field to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        self.map(|v| round_to(v, decimals))
    }

    /// All fields non-negative and finite.
    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.fiber_g,
        ]
        .into_iter()
        .all(|v| v.is_finite() && v >= 0.0)
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            calories: f(self.calories),
            protein_g: f(self.protein_g),
            carbs_g: f(self.carbs_g),
            fat_g: f(self.fat_g),
            fiber_g: f(self.fiber_g),
        }
    }
}

impl AddAssign for NutritionProfile {
    fn add_assign(&mut self, rhs: Self) {
        self.calories += rhs.calories;
        self.protein_g += rhs.protein_g;
        self.carbs_g += rhs.carbs_g;
        self.fat_g += rhs.fat_g;
        self.fiber_g += rhs.fiber_g;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaled_is_linear() {
        let p = NutritionProfile::new(100.0, 10.0, 20.0, 5.0, 2.0);
        let doubled = p.scaled(2.0);
        assert_eq!(doubled.calories, 200.0);
        assert_eq!(doubled.fiber_g, 4.0);
    }

    #[test]
    fn test_add_assign() {
        let mut total = NutritionProfile::default();
        total += NutritionProfile::new(1.0, 2.0, 3.0, 4.0, 5.0);
        total += NutritionProfile::new(1.0, 2.0, 3.0, 4.0, 5.0);
        assert_eq!(total, NutritionProfile::new(2.0, 4.0, 6.0, 8.0, 10.0));
    }

    #[test]
    fn test_is_valid() {
        assert!(NutritionProfile::default().is_valid());
        assert!(!NutritionProfile::new(-1.0, 0.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!NutritionProfile::new(f64::NAN, 0.0, 0.0, 0.0, 0.0).is_valid());
    }
}
