use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// MealMind: deterministic analysis of household meal plans.
#[derive(Parser, Debug)]
#[command(name = "mealmind")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a TOML settings file (defaults to ./mealmind.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print reports as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Look up nutrition for an amount of one ingredient.
    Nutrition {
        ingredient: String,

        /// Amount in grams.
        #[arg(short, long, default_value = "100")]
        grams: f64,
    },

    /// Estimate the cost of an amount of one ingredient.
    Cost {
        ingredient: String,

        /// Amount in grams.
        #[arg(short, long, default_value = "100")]
        grams: f64,
    },

    /// Show dietary guidelines for a health condition.
    Guidelines { condition: String },

    /// Per-serving nutrition for a recipe JSON file.
    Recipe { file: PathBuf },

    /// Check a recipe JSON file against a list of allergies.
    Allergens {
        file: PathBuf,

        /// Comma-separated allergy terms.
        #[arg(short, long)]
        allergies: String,
    },

    /// Aggregate a meal plan into a costed shopping list.
    Shop {
        plan: PathBuf,

        /// Weekly budget (overrides settings).
        #[arg(short, long)]
        budget: Option<f64>,

        /// Also write the list as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Per-day cost of a meal plan.
    PlanCost { plan: PathBuf },

    /// Cooking-time statistics and ingredient reuse for a meal plan.
    Schedule {
        plan: PathBuf,

        /// Target cooking minutes per day (overrides settings).
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Score a meal plan's schedule and suggest improvements.
    Optimize {
        plan: PathBuf,

        /// Target cooking minutes per day (overrides settings).
        #[arg(short, long)]
        target: Option<f64>,
    },

    /// Run every analysis over a meal plan.
    Report {
        plan: PathBuf,

        /// Target cooking minutes per day (overrides settings and household).
        #[arg(short, long)]
        target: Option<f64>,

        /// Weekly budget (overrides settings and household).
        #[arg(short, long)]
        budget: Option<f64>,

        /// Comma-separated allergy terms, added to the household's.
        #[arg(short, long)]
        allergies: Option<String>,

        /// Comma-separated health conditions, added to the household's.
        #[arg(long)]
        conditions: Option<String>,

        /// Households JSON file to take constraints from.
        #[arg(long, requires = "household")]
        households: Option<PathBuf>,

        /// Household id within the households file.
        #[arg(long, requires = "households")]
        household: Option<String>,
    },

    /// Show aggregated constraints for a household.
    Household {
        /// Households JSON file.
        file: PathBuf,

        /// Household id.
        id: String,
    },
}
