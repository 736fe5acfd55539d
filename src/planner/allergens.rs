use serde::Serialize;

use crate::models::{IngredientLine, MealPlan};
use crate::planner::calculations::split_list;

/// Allergen matches found in a list of ingredients.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AllergenReport {
    pub has_allergens: bool,
    /// Entries of the form "<allergen> in <ingredient>".
    pub found_allergens: Vec<String>,
}

/// Allergen matches for one meal of a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealAllergenFinding {
    /// 1-based day number.
    pub day: usize,
    pub meal: String,
    pub found_allergens: Vec<String>,
}

/// Parse a comma-separated allergy list into lowercase terms.
pub fn parse_allergies(allergies: &str) -> Vec<String> {
    split_list(allergies)
        .into_iter()
        .map(|a| a.to_lowercase())
        .collect()
}

/// Flag every ingredient whose name contains an allergy term.
///
/// Matching is a case-insensitive substring test, so "egg" also flags
/// "eggplant". False positives are accepted over missed allergens.
pub fn check_allergens(ingredients: &[IngredientLine], allergies: &str) -> AllergenReport {
    let terms = parse_allergies(allergies);
    let found_allergens = find_matches(ingredients, &terms);

    AllergenReport {
        has_allergens: !found_allergens.is_empty(),
        found_allergens,
    }
}

/// Check every meal of a plan; only meals with matches are returned.
pub fn check_plan_allergens(plan: &MealPlan, allergies: &str) -> Vec<MealAllergenFinding> {
    let terms = parse_allergies(allergies);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut findings = Vec::new();
    for (i, day) in plan.days.iter().enumerate() {
        for meal in &day.meals {
            let found = find_matches(&meal.ingredients, &terms);
            if !found.is_empty() {
                findings.push(MealAllergenFinding {
                    day: i + 1,
                    meal: meal.name.clone(),
                    found_allergens: found,
                });
            }
        }
    }
    findings
}

fn find_matches(ingredients: &[IngredientLine], terms: &[String]) -> Vec<String> {
    let mut found = Vec::new();
    for ingredient in ingredients {
        let name = ingredient.name.to_lowercase();
        for term in terms {
            if name.contains(term.as_str()) {
                found.push(format!("{} in {}", term, ingredient.name));
            }
        }
    }
    found
}
