use assert_float_eq::assert_float_absolute_eq;

use meal_mind_rs::models::{Day, IngredientLine, Meal, MealPlan, MealType};
use meal_mind_rs::planner::{
    aggregate_ingredients, analyze_cooking_time, assess_budget, calculate_plan_cost,
    generate_grocery_list, optimize_schedule,
};
use meal_mind_rs::tables::CostTable;

fn make_meal(name: &str, meal_type: MealType, minutes: u32, lines: &[(&str, f64)]) -> Meal {
    let mut meal = Meal::new(name, meal_type, minutes);
    for (ingredient, grams) in lines {
        meal.ingredients.push(IngredientLine::grams(*ingredient, *grams));
    }
    meal
}

fn week_plan() -> MealPlan {
    MealPlan::new(vec![
        Day::new(vec![
            make_meal("Egg Scramble", MealType::Breakfast, 10, &[("Eggs", 120.0), ("Spinach", 40.0)]),
            make_meal("Chicken Quinoa", MealType::Lunch, 25, &[("Chicken Breast", 150.0), ("Quinoa", 90.0)]),
            make_meal("Salmon Traybake", MealType::Dinner, 35, &[("Salmon", 180.0), ("Sweet Potato", 200.0)]),
        ]),
        Day::new(vec![
            make_meal("Tofu Bowl", MealType::Lunch, 20, &[("Tofu", 150.0), ("Brown Rice", 100.0)]),
            make_meal("Chicken Stir Fry", MealType::Dinner, 30, &[("chicken breast", 100.0), ("Broccoli", 150.0)]),
        ]),
        Day::new(vec![make_meal(
            "Green Omelette",
            MealType::Breakfast,
            15,
            &[("eggs", 100.0), ("SPINACH", 60.0), ("Feta", 30.0)],
        )]),
    ])
}

#[test]
fn test_amounts_are_additive_across_days() {
    let list = aggregate_ingredients(&week_plan(), &CostTable::builtin());

    let chicken = list.get("Chicken Breast").unwrap();
    assert_float_absolute_eq!(chicken.total_amount, 250.0, 1e-9);
    assert_eq!(chicken.used_in, 2);

    let spinach = list.get("spinach").unwrap();
    assert_float_absolute_eq!(spinach.total_amount, 100.0, 1e-9);
}

#[test]
fn test_total_amount_matches_sum_of_lines() {
    let plan = week_plan();
    let list = aggregate_ingredients(&plan, &CostTable::builtin());

    for item in &list.shopping_list {
        let expected: f64 = plan
            .ingredient_lines()
            .filter(|line| line.key() == item.name.to_lowercase())
            .map(|line| line.amount)
            .sum();
        assert_float_absolute_eq!(item.total_amount, expected, 1e-9);
    }
}

#[test]
fn test_total_items_counts_distinct_names() {
    let list = aggregate_ingredients(&week_plan(), &CostTable::builtin());
    // eggs, spinach, chicken breast, quinoa, salmon, sweet potato, tofu, brown rice, broccoli, feta
    assert_eq!(list.total_items, 10);
    assert_eq!(list.shopping_list.len(), 10);
}

#[test]
fn test_total_cost_is_sum_of_item_costs() {
    let list = aggregate_ingredients(&week_plan(), &CostTable::builtin());
    let sum: f64 = list.shopping_list.iter().map(|i| i.cost).sum();
    assert_float_absolute_eq!(list.total_cost, sum, 0.005);
}

#[test]
fn test_unknown_ingredient_priced_as_estimate() {
    let list = aggregate_ingredients(&week_plan(), &CostTable::builtin());
    let feta = list.get("Feta").unwrap();
    assert!(feta.estimated_cost);
    assert_float_absolute_eq!(feta.cost, 0.15, 1e-9);
}

#[test]
fn test_aggregation_is_idempotent() {
    let plan = week_plan();
    let costs = CostTable::builtin();
    let first = aggregate_ingredients(&plan, &costs);
    let second = aggregate_ingredients(&plan, &costs);
    assert_eq!(first, second);
}

#[test]
fn test_shopping_list_is_sorted() {
    let list = aggregate_ingredients(&week_plan(), &CostTable::builtin());
    let names: Vec<&String> = list.shopping_list.iter().map(|i| &i.name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names[0], "Broccoli");
}

#[test]
fn test_budget_overage_rounded_to_cents() {
    let status = assess_budget(162.37, 150.00);
    assert!(!status.within_budget);
    assert_float_absolute_eq!(status.overage, 12.37, 1e-9);
}

#[test]
fn test_grocery_list_over_budget_tip() {
    let grocery = generate_grocery_list(&week_plan(), &CostTable::builtin(), 5.0);
    assert!(!grocery.budget.within_budget);
    assert!(grocery.shopping_tips[0].starts_with("Over budget by $"));
}

#[test]
fn test_empty_plan_yields_zeroed_reports() {
    let plan = MealPlan::default();
    let costs = CostTable::builtin();

    let list = aggregate_ingredients(&plan, &costs);
    assert_eq!(list.total_items, 0);
    assert_eq!(list.total_cost, 0.0);
    assert!(list.shopping_list.is_empty());

    let stats = analyze_cooking_time(&plan, 45.0);
    assert_eq!(stats.total_minutes, 0);
    assert_eq!(stats.average_per_day, 0.0);

    let cost = calculate_plan_cost(&plan, &costs);
    assert_eq!(cost.total_cost, 0.0);
    assert_eq!(cost.average_per_day, 0.0);
}

#[test]
fn test_days_without_meals_count_as_zero_minutes() {
    let plan = MealPlan::new(vec![Day::default(), Day::default()]);
    let stats = analyze_cooking_time(&plan, 45.0);
    assert_eq!(stats.daily_times, vec![0, 0]);
    assert_eq!(stats.min_day, 0);
    assert!(stats.within_limit);
}

#[test]
fn test_average_exactly_at_target_is_within_limit() {
    // (30 + 60) / 2 = 45.0
    let plan = MealPlan::new(vec![
        Day::new(vec![make_meal("Tofu Bowl", MealType::Lunch, 30, &[("Tofu", 150.0)])]),
        Day::new(vec![make_meal("Salmon Bake", MealType::Dinner, 60, &[("Salmon", 180.0)])]),
    ]);

    let stats = analyze_cooking_time(&plan, 45.0);
    assert_eq!(stats.average_per_day, 45.0);
    assert!(stats.within_limit);

    let report = optimize_schedule(&plan, 45.0);
    assert_eq!(report.optimization_score, 100.0);
    assert!(report.suggestions.is_empty());
}
