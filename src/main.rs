use std::path::Path;

use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use meal_mind_rs::cli::{Cli, Command};
use meal_mind_rs::config::Settings;
use meal_mind_rs::error::Result;
use meal_mind_rs::interface::{
    display_allergens, display_cooking_stats, display_cost_estimate, display_grocery_list,
    display_guidelines, display_nutrition_lookup, display_optimization, display_plan_cost,
    display_plan_report, display_recipe_nutrition, write_shopping_csv,
};
use meal_mind_rs::planner::calculations::split_list;
use meal_mind_rs::planner::{
    analyze_cooking_time, build_plan_report, calculate_plan_cost, calculate_recipe_nutrition,
    check_allergens, check_budget, check_grams, check_target_minutes, find_ingredient_reuse,
    generate_grocery_list, optimize_schedule, CookingStats, PlanningConstraints, ReuseReport,
};
use meal_mind_rs::state::{load_households, load_plan, load_recipe, HouseholdStore};
use meal_mind_rs::tables::ReferenceTables;

#[derive(Serialize)]
struct ScheduleOutput<'a> {
    cooking_stats: &'a CookingStats,
    reuse: &'a ReuseReport,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load_from(cli.config.as_deref())?;
    init_logging(cli.verbose, &settings.general.log_level);

    let tables = ReferenceTables::from_settings(&settings.tables)?;
    info!(
        nutrition = tables.nutrition.len(),
        cost = tables.cost.len(),
        health = tables.health.len(),
        "reference tables ready"
    );

    let planning = &settings.planning;
    let json = cli.json;

    match cli.command {
        Command::Nutrition { ingredient, grams } => {
            let lookup = tables.nutrition.lookup(&ingredient, check_grams(grams)?);
            emit(json, &lookup, display_nutrition_lookup)
        }
        Command::Cost { ingredient, grams } => {
            let estimate = tables.cost.lookup(&ingredient, check_grams(grams)?);
            emit(json, &estimate, display_cost_estimate)
        }
        Command::Guidelines { condition } => {
            let guidelines = tables.health.lookup(&condition);
            emit(json, &guidelines, display_guidelines)
        }
        Command::Recipe { file } => {
            let recipe = load_recipe(&file)?;
            let nutrition = calculate_recipe_nutrition(&recipe, &tables.nutrition);
            emit(json, &nutrition, |n| display_recipe_nutrition(&recipe.name, n))
        }
        Command::Allergens { file, allergies } => {
            let recipe = load_recipe(&file)?;
            let report = check_allergens(&recipe.ingredients, &allergies);
            emit(json, &report, display_allergens)
        }
        Command::Shop { plan, budget, csv } => {
            let plan = load_plan(&plan)?;
            let budget = check_budget(budget.unwrap_or(planning.budget_weekly))?;
            let grocery = generate_grocery_list(&plan, &tables.cost, budget);
            if let Some(path) = csv {
                write_shopping_csv(&path, &grocery.list)?;
                info!(path = %path.display(), "wrote shopping list CSV");
            }
            emit(json, &grocery, display_grocery_list)
        }
        Command::PlanCost { plan } => {
            let plan = load_plan(&plan)?;
            let cost = calculate_plan_cost(&plan, &tables.cost);
            emit(json, &cost, display_plan_cost)
        }
        Command::Schedule { plan, target } => {
            let target = check_target_minutes(target.unwrap_or(planning.cooking_time_max))?;
            let plan = load_plan(&plan)?;
            let stats = analyze_cooking_time(&plan, target);
            let reuse = find_ingredient_reuse(&plan);
            if json {
                print_json(&ScheduleOutput {
                    cooking_stats: &stats,
                    reuse: &reuse,
                })
            } else {
                display_cooking_stats(&stats, Some(&reuse));
                Ok(())
            }
        }
        Command::Optimize { plan, target } => {
            let target = check_target_minutes(target.unwrap_or(planning.cooking_time_max))?;
            let plan = load_plan(&plan)?;
            let report = optimize_schedule(&plan, target);
            emit(json, &report, display_optimization)
        }
        Command::Report {
            plan,
            target,
            budget,
            allergies,
            conditions,
            households,
            household,
        } => {
            let plan = load_plan(&plan)?;

            let mut constraints = match (households, household) {
                (Some(path), Some(id)) => household_constraints(&path, &id)?,
                _ => PlanningConstraints::from_settings(planning),
            };
            if let Some(target) = target {
                constraints.cooking_time_max = target;
            }
            if let Some(budget) = budget {
                constraints.budget = budget;
            }
            if let Some(allergies) = allergies {
                constraints.allergies.extend(split_list(&allergies));
            }
            if let Some(conditions) = conditions {
                constraints.health_conditions.extend(split_list(&conditions));
            }
            constraints.validate()?;

            let report = build_plan_report(&plan, &tables, &constraints);
            emit(json, &report, display_plan_report)
        }
        Command::Household { file, id } => {
            let store = HouseholdStore::from_profiles(load_households(&file)?);
            let constraints = store.constraints(&id)?;
            print_json(&constraints)
        }
    }
}

/// Log filter from `RUST_LOG`, else the `-v` count, else the settings file.
fn init_logging(verbose: u8, configured_level: &str) {
    let log_level = match verbose {
        0 => configured_level,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("meal_mind_rs={0},mealmind={0}", log_level)),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn household_constraints(path: &Path, id: &str) -> Result<PlanningConstraints> {
    let store = HouseholdStore::from_profiles(load_households(path)?);
    let constraints = store.constraints(id)?;
    Ok(PlanningConstraints::from_household(&constraints))
}

fn emit<T: Serialize>(json: bool, value: &T, render: impl FnOnce(&T)) -> Result<()> {
    if json {
        print_json(value)
    } else {
        render(value);
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
