use crate::planner::{
    AllergenReport, CookingStats, GroceryList, OptimizationReport, PlanCost, PlanReport,
    RecipeNutrition, ReuseReport,
};
use crate::tables::{CostEstimate, HealthGuidelines, NutritionLookup};

/// Display a single nutrition lookup.
pub fn display_nutrition_lookup(lookup: &NutritionLookup) {
    let p = &lookup.profile;
    println!(
        "{} ({:.0} g): {:.1} kcal | P {:.1} g  C {:.1} g  F {:.1} g  Fiber {:.1} g",
        lookup.ingredient,
        lookup.amount_grams,
        p.calories,
        p.protein_g,
        p.carbs_g,
        p.fat_g,
        p.fiber_g
    );
    print_estimate_note(lookup.note.as_deref(), lookup.did_you_mean.as_deref());
}

/// Display a single cost estimate.
pub fn display_cost_estimate(estimate: &CostEstimate) {
    println!(
        "{} ({:.0} g): ${:.2}",
        estimate.ingredient, estimate.amount_grams, estimate.total_cost
    );
    print_estimate_note(estimate.note.as_deref(), estimate.did_you_mean.as_deref());
}

fn print_estimate_note(note: Option<&str>, did_you_mean: Option<&str>) {
    if let Some(note) = note {
        match did_you_mean {
            Some(name) => println!("  ({}; did you mean '{}'?)", note, name),
            None => println!("  ({})", note),
        }
    }
}

/// Display per-serving nutrition for a recipe.
pub fn display_recipe_nutrition(name: &str, nutrition: &RecipeNutrition) {
    let p = &nutrition.per_serving;
    let title = if name.is_empty() { "Recipe" } else { name };

    println!();
    println!("=== {} (per serving, {} servings) ===", title, nutrition.servings);
    println!("Calories: {:.2}", p.calories);
    println!("Protein:  {:.2} g", p.protein_g);
    println!("Carbs:    {:.2} g", p.carbs_g);
    println!("Fat:      {:.2} g", p.fat_g);
    println!("Fiber:    {:.2} g", p.fiber_g);

    if nutrition.has_estimates() {
        println!(
            "Estimated values used for: {}",
            nutrition.estimated_ingredients.join(", ")
        );
    }
    println!();
}

/// Display allergen check results.
pub fn display_allergens(report: &AllergenReport) {
    if !report.has_allergens {
        println!("No allergens found.");
        return;
    }

    println!("Allergens found:");
    for entry in &report.found_allergens {
        println!("  - {}", entry);
    }
}

/// Display health guidelines for a condition.
pub fn display_guidelines(guidelines: &HealthGuidelines) {
    if let Some(note) = &guidelines.note {
        println!("{}", note);
        return;
    }

    println!("Guidelines for {}:", guidelines.condition);
    println!("  Avoid:  {}", guidelines.avoid.join(", "));
    println!("  Prefer: {}", guidelines.prefer.join(", "));
}

/// Display a shopping list in a formatted table with budget status.
pub fn display_grocery_list(grocery: &GroceryList) {
    let list = &grocery.list;
    if list.shopping_list.is_empty() {
        println!("Shopping list is empty (the plan has no ingredients).");
        return;
    }

    println!();
    println!("=== Shopping List ({} items) ===", list.total_items);
    println!();

    // Find max item name length for alignment
    let max_name_len = list
        .shopping_list
        .iter()
        .map(|i| i.name.len())
        .max()
        .unwrap_or(10);

    for item in &list.shopping_list {
        let mut tags = Vec::new();
        if item.mixed_units {
            tags.push("[mixed units]");
        }
        if item.estimated_cost {
            tags.push("[est. price]");
        }
        let tags_str = if tags.is_empty() {
            String::new()
        } else {
            format!("  {}", tags.join(" "))
        };

        println!(
            "  {:<width$}  {:>8.1} {:<6} ${:>7.2}  x{}{}",
            item.name,
            item.total_amount,
            item.unit,
            item.cost,
            item.used_in,
            tags_str,
            width = max_name_len
        );
    }

    println!();
    println!("Total cost: ${:.2} (budget ${:.2})", list.total_cost, grocery.budget.budget);
    for tip in &grocery.shopping_tips {
        println!("  * {}", tip);
    }
    println!();
}

/// Display per-day plan cost.
pub fn display_plan_cost(cost: &PlanCost) {
    for (i, day_cost) in cost.daily_costs.iter().enumerate() {
        println!("  Day {:>2}: ${:.2}", i + 1, day_cost);
    }
    println!(
        "Total: ${:.2} (average ${:.2}/day)",
        cost.total_cost, cost.average_per_day
    );
}

/// Display cooking-time statistics and reused ingredients.
pub fn display_cooking_stats(stats: &CookingStats, reuse: Option<&ReuseReport>) {
    println!("--- Cooking Time ---");
    for (i, minutes) in stats.daily_times.iter().enumerate() {
        println!("  Day {:>2}: {:>4} min", i + 1, minutes);
    }
    println!("Total: {} min", stats.total_minutes);
    println!(
        "Average per day: {:.1} min ({})",
        stats.average_per_day,
        if stats.within_limit {
            "within limit"
        } else {
            "exceeds limit"
        }
    );
    println!("Longest day: {} min, shortest day: {} min", stats.max_day, stats.min_day);

    if let Some(reuse) = reuse {
        println!(
            "Reused ingredients: {} of {}",
            reuse.reuse_count, reuse.total_unique
        );
        for (name, count) in reuse.ranked() {
            println!("  {} x{}", name, count);
        }
    }
}

/// Display an optimization report.
pub fn display_optimization(report: &OptimizationReport) {
    println!();
    println!("=== Schedule Optimization ===");
    println!();
    display_cooking_stats(&report.cooking_stats, None);
    if !report.reused_ingredients.is_empty() {
        let reused: Vec<String> = report
            .reused_ingredients
            .iter()
            .map(|(name, count)| format!("{} x{}", name, count))
            .collect();
        println!("Reused: {}", reused.join(", "));
    }
    println!();
    println!("Optimization score: {:.1}/100", report.optimization_score);
    for suggestion in &report.suggestions {
        println!("  * {}", suggestion);
    }
    println!();
}

/// Display the full merged report for a plan.
pub fn display_plan_report(report: &PlanReport) {
    if report.days == 0 {
        println!("Meal plan is empty.");
        return;
    }

    println!();
    println!("=== Meal Plan Report ({} days) ===", report.days);

    let mut current_day = 0;
    for meal in &report.meals {
        if meal.day != current_day {
            current_day = meal.day;
            println!();
            println!("Day {}", current_day);
        }
        let estimated = if meal.nutrition.has_estimates() { " *" } else { "" };
        println!(
            "  {:<9} {:<28} {:>3} min  ${:>6.2}  {:>6.1} kcal/serving{}",
            meal.meal_type.to_string(),
            meal.name,
            meal.cooking_time_minutes,
            meal.cost,
            meal.nutrition.per_serving.calories,
            estimated
        );
    }
    if report.meals.iter().any(|m| m.nutrition.has_estimates()) {
        println!("  (* includes estimated nutrition values)");
    }

    display_grocery_list(&report.grocery);

    println!("--- Daily Cost ---");
    display_plan_cost(&report.plan_cost);

    display_optimization(&report.optimization);

    if !report.allergen_findings.is_empty() {
        println!("--- Allergen Warnings ---");
        for finding in &report.allergen_findings {
            println!(
                "  Day {} {}: {}",
                finding.day,
                finding.meal,
                finding.found_allergens.join(", ")
            );
        }
        println!();
    }

    for guidelines in &report.health_guidelines {
        display_guidelines(guidelines);
    }
}
