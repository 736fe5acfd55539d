use assert_float_eq::assert_float_absolute_eq;

use meal_mind_rs::state::HouseholdStore;
use meal_mind_rs::tools::{ToolResponse, Toolkit};

const PLAN_JSON: &str = r#"[
    {"day": 1, "meals": [
        {"name": "Chicken Rice", "meal_type": "lunch", "cooking_time_minutes": 30,
         "ingredients": [{"name": "Chicken Breast", "amount": 150, "unit": "grams"},
                         {"name": "Brown Rice", "amount": 100}]},
        {"name": "Salmon Greens", "meal_type": "dinner", "cooking_time_minutes": 25,
         "ingredients": [{"name": "Salmon", "amount": 200}, {"name": "Spinach", "amount": 80}]}
    ]},
    {"day": 2, "meals": [
        {"name": "Chicken Wrap", "meal_type": "Lunch", "cooking_time_minutes": 15,
         "ingredients": [{"name": "chicken breast", "amount": 100}]}
    ]}
]"#;

#[test]
fn test_nutrition_lookup_scales_linearly() {
    let toolkit = Toolkit::default();
    let single = toolkit.nutrition_lookup("salmon", 100.0).ok().unwrap();
    let double = toolkit.nutrition_lookup("salmon", 200.0).ok().unwrap();
    assert_float_absolute_eq!(double.profile.calories, 2.0 * single.profile.calories, 1e-9);
    assert_float_absolute_eq!(single.profile.calories, 206.0, 1e-9);
}

#[test]
fn test_unknown_ingredient_returns_default_profile() {
    let toolkit = Toolkit::default();
    let lookup = toolkit.nutrition_lookup("unobtainium", 100.0).ok().unwrap();
    assert!(lookup.estimated);
    assert_eq!(lookup.profile.calories, 100.0);
    assert_eq!(lookup.profile.protein_g, 5.0);
    assert_eq!(lookup.profile.carbs_g, 15.0);
    assert_eq!(lookup.profile.fat_g, 3.0);
    assert_eq!(lookup.profile.fiber_g, 2.0);

    let json = serde_json::to_value(&lookup).unwrap();
    assert_eq!(json["note"], "Estimated values");
}

#[test]
fn test_allergen_check_over_recipe_json() {
    let toolkit = Toolkit::default();
    let recipe = r#"{"name": "PB Toast", "servings": 1,
        "ingredients": [{"name": "Peanut Butter", "amount": 30}, {"name": "Bread", "amount": 60}]}"#;

    let hit = toolkit.check_allergens_in_recipe(recipe, "peanut").ok().unwrap();
    assert!(hit.has_allergens);
    assert_eq!(hit.found_allergens, vec!["peanut in Peanut Butter"]);

    let miss = toolkit.check_allergens_in_recipe(recipe, "shellfish").ok().unwrap();
    assert!(!miss.has_allergens);
    assert!(miss.found_allergens.is_empty());
}

#[test]
fn test_recipe_nutrition_uses_default_servings() {
    let toolkit = Toolkit::default();
    let recipe = r#"{"ingredients": [{"name": "Tofu", "amount": 400}]}"#;
    let nutrition = toolkit.calculate_recipe_nutrition(recipe).ok().unwrap();
    assert_eq!(nutrition.servings, 4);
    assert_float_absolute_eq!(nutrition.per_serving.calories, 76.0, 1e-9);
}

#[test]
fn test_malformed_json_becomes_error_response() {
    let toolkit = Toolkit::default();

    let responses = vec![
        toolkit.aggregate_ingredients_for_shopping("{oops").to_json(),
        toolkit.optimize_schedule("[{\"meals\": 3}]", 45.0).to_json(),
        toolkit.calculate_meal_plan_cost("").to_json(),
        toolkit.calculate_recipe_nutrition("42").to_json(),
    ];

    for json in responses {
        let error = json["error"].as_str().unwrap();
        assert!(error.starts_with("Invalid "), "unexpected error: {}", error);
        assert!(error.contains("JSON"));
    }
}

#[test]
fn test_invalid_amount_rejected_at_boundary() {
    let toolkit = Toolkit::default();
    let plan = r#"[{"meals": [{"name": "X", "meal_type": "dinner",
        "ingredients": [{"name": "Salmon", "amount": -100}]}]}]"#;
    assert!(toolkit.generate_grocery_list(plan, 150.0).is_error());
}

#[test]
fn test_lookups_reject_negative_or_nan_grams() {
    let toolkit = Toolkit::default();

    let negative = toolkit.nutrition_lookup("salmon", -200.0);
    assert!(negative.is_error());
    assert!(negative.to_json()["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid input"));

    let json = toolkit.estimate_ingredient_cost("salmon", f64::NAN).to_json();
    assert!(json["error"].is_string());
    assert!(json.get("total_cost").is_none());

    let cost = toolkit.estimate_ingredient_cost("salmon", 200.0).ok().unwrap();
    assert!(cost.total_cost > 0.0);
}

#[test]
fn test_schedule_tools_reject_non_positive_target() {
    let toolkit = Toolkit::default();
    for target in [0.0, -10.0, f64::NAN] {
        let json = toolkit.optimize_schedule(PLAN_JSON, target).to_json();
        assert!(json["error"].as_str().unwrap().contains("cooking time target"));
        assert!(json.get("optimization_score").is_none());

        assert!(toolkit.analyze_cooking_time(PLAN_JSON, target).is_error());
    }
}

#[test]
fn test_grocery_list_rejects_negative_budget() {
    let toolkit = Toolkit::default();
    assert!(toolkit.generate_grocery_list(PLAN_JSON, -1.0).is_error());
    assert!(!toolkit.generate_grocery_list(PLAN_JSON, 0.0).is_error());
}

#[test]
fn test_shopping_list_over_json() {
    let toolkit = Toolkit::default();
    let list = toolkit.aggregate_ingredients_for_shopping(PLAN_JSON).ok().unwrap();
    assert_eq!(list.total_items, 4);

    let chicken = list.get("chicken breast").unwrap();
    assert_eq!(chicken.total_amount, 250.0);
    assert_eq!(chicken.used_in, 2);
    assert_eq!(chicken.unit, "grams");
}

#[test]
fn test_grocery_list_json_shape() {
    let toolkit = Toolkit::default();
    let json = toolkit.generate_grocery_list(PLAN_JSON, 150.0).to_json();
    assert_eq!(json["total_items"], 4);
    assert_eq!(json["within_budget"], true);
    assert_eq!(json["budget"], 150.0);
    assert!(json["shopping_list"].is_array());
    assert!(json["shopping_tips"][0]
        .as_str()
        .unwrap()
        .starts_with("Within budget!"));
}

#[test]
fn test_cooking_time_over_json() {
    let toolkit = Toolkit::default();
    let stats = toolkit.analyze_cooking_time(PLAN_JSON, 45.0).ok().unwrap();
    assert_eq!(stats.daily_times, vec![55, 15]);
    assert_eq!(stats.average_per_day, 35.0);
    assert!(stats.within_limit);
}

#[test]
fn test_empty_plan_over_json() {
    let toolkit = Toolkit::default();
    let list = toolkit.aggregate_ingredients_for_shopping("[]").ok().unwrap();
    assert_eq!(list.total_items, 0);
    assert_eq!(list.total_cost, 0.0);

    let report = toolkit.optimize_schedule("[]", 45.0).ok().unwrap();
    assert_eq!(report.cooking_stats.total_minutes, 0);
    assert_eq!(report.optimization_score, 100.0);
    assert!(report.suggestions.is_empty());
}

#[test]
fn test_health_guidelines_fallback() {
    let toolkit = Toolkit::default();
    let known = toolkit.get_health_guidelines("High Blood Pressure");
    assert!(known.avoid.contains(&"high sodium".to_string()));

    let unknown = toolkit.get_health_guidelines("celiac");
    assert_eq!(unknown.note.as_deref(), Some("No guidelines for celiac"));
}

#[test]
fn test_household_constraints_response() {
    let toolkit = Toolkit::default();
    let mut store = HouseholdStore::new();
    store
        .create_household("h1", "Lee Family", 30.0, 120.0, "korean")
        .unwrap();
    store.add_member("h1", "Jin", 35, "", "sesame", "").unwrap();

    match toolkit.get_household_constraints(&store, "h1") {
        ToolResponse::Ok(c) => {
            assert_eq!(c.allergies, vec!["sesame"]);
            assert_eq!(c.member_count, 1);
        }
        ToolResponse::Error { error } => panic!("unexpected error: {}", error),
    }
}
