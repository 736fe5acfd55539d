use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{Dish, MealPlan};
use crate::planner::calculations::{round_to, safe_ratio, title_case};
use crate::planner::constants::{BULK_BUY_MIN_USES, BULK_BUY_TOP_N, CURRENCY_DECIMALS};
use crate::tables::CostTable;

/// One aggregated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    /// Title-cased ingredient name.
    pub name: String,
    /// Sum of every occurrence's amount.
    pub total_amount: f64,
    /// Unit of the last occurrence seen.
    pub unit: String,
    pub cost: f64,
    /// Number of ingredient-line occurrences across the plan.
    pub used_in: usize,
    /// Set when occurrences disagreed on unit; `total_amount` is then unreliable.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mixed_units: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub estimated_cost: bool,
}

/// Aggregated shopping list for a whole plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingList {
    pub shopping_list: Vec<ShoppingItem>,
    pub total_items: usize,
    pub total_cost: f64,
}

impl ShoppingList {
    pub fn get(&self, name: &str) -> Option<&ShoppingItem> {
        let wanted = name.trim().to_lowercase();
        self.shopping_list
            .iter()
            .find(|item| item.name.to_lowercase() == wanted)
    }
}

/// Shopping list total compared with a budget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BudgetStatus {
    pub budget: f64,
    pub within_budget: bool,
    /// Unspent budget, 0 when over.
    pub remaining: f64,
    /// Amount over budget, 0 when within.
    pub overage: f64,
}

/// Shopping list with budget assessment and tips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroceryList {
    #[serde(flatten)]
    pub list: ShoppingList,
    #[serde(flatten)]
    pub budget: BudgetStatus,
    pub shopping_tips: Vec<String>,
}

/// Cost of a plan broken down by day.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanCost {
    pub total_cost: f64,
    pub daily_costs: Vec<f64>,
    pub average_per_day: f64,
}

#[derive(Debug)]
struct Aggregate {
    total_amount: f64,
    unit: String,
    uses: usize,
    mixed_units: bool,
}

/// Merge every ingredient line of the plan into a costed shopping list.
///
/// Lines are keyed by lowercase name. Amounts are summed without unit
/// conversion; the last seen unit wins and disagreement is flagged.
/// The list is sorted by name.
pub fn aggregate_ingredients(plan: &MealPlan, costs: &CostTable) -> ShoppingList {
    let mut aggregated: HashMap<String, Aggregate> = HashMap::new();

    for line in plan.ingredient_lines() {
        let key = line.key();
        match aggregated.get_mut(&key) {
            Some(agg) => {
                if !agg.unit.eq_ignore_ascii_case(&line.unit) {
                    agg.mixed_units = true;
                }
                agg.total_amount += line.amount;
                agg.unit = line.unit.clone();
                agg.uses += 1;
            }
            None => {
                aggregated.insert(
                    key,
                    Aggregate {
                        total_amount: line.amount,
                        unit: line.unit.clone(),
                        uses: 1,
                        mixed_units: false,
                    },
                );
            }
        }
    }

    let mut items: Vec<ShoppingItem> = aggregated
        .into_iter()
        .map(|(key, agg)| {
            if agg.mixed_units {
                warn!(ingredient = %key, "mixed units summed without conversion");
            }
            let estimate = costs.lookup(&key, agg.total_amount);
            ShoppingItem {
                name: title_case(&key),
                total_amount: agg.total_amount,
                unit: agg.unit,
                cost: estimate.total_cost,
                used_in: agg.uses,
                mixed_units: agg.mixed_units,
                estimated_cost: estimate.estimated,
            }
        })
        .collect();

    items.sort_by(|a, b| a.name.cmp(&b.name));

    let total_cost = round_to(items.iter().map(|i| i.cost).sum(), CURRENCY_DECIMALS);
    debug!(items = items.len(), total_cost, "aggregated shopping list");

    ShoppingList {
        total_items: items.len(),
        total_cost,
        shopping_list: items,
    }
}

/// Compare a total against a budget, rounding differences to cents.
pub fn assess_budget(total_cost: f64, budget: f64) -> BudgetStatus {
    let within_budget = total_cost <= budget;
    let difference = round_to((budget - total_cost).abs(), CURRENCY_DECIMALS);
    BudgetStatus {
        budget,
        within_budget,
        remaining: if within_budget { difference } else { 0.0 },
        overage: if within_budget { 0.0 } else { difference },
    }
}

/// Shopping tips: a budget line, then bulk-buy advice for frequently used items.
pub fn shopping_tips(list: &ShoppingList, status: &BudgetStatus) -> Vec<String> {
    let mut tips = Vec::new();

    if status.within_budget {
        tips.push(format!("Within budget! ${:.2} remaining", status.remaining));
    } else {
        tips.push(format!("Over budget by ${:.2}", status.overage));
    }

    let frequent: Vec<&str> = list
        .shopping_list
        .iter()
        .filter(|item| item.used_in >= BULK_BUY_MIN_USES)
        .take(BULK_BUY_TOP_N)
        .map(|item| item.name.as_str())
        .collect();
    if !frequent.is_empty() {
        tips.push(format!("Buy in bulk: {}", frequent.join(", ")));
    }

    tips
}

/// Aggregate the plan and assess it against a weekly budget.
pub fn generate_grocery_list(plan: &MealPlan, costs: &CostTable, budget: f64) -> GroceryList {
    let list = aggregate_ingredients(plan, costs);
    let status = assess_budget(list.total_cost, budget);
    let shopping_tips = shopping_tips(&list, &status);
    GroceryList {
        list,
        budget: status,
        shopping_tips,
    }
}

/// Cost of one dish: each line costed on its own amount, rounded to cents.
pub fn dish_cost<D: Dish>(dish: &D, costs: &CostTable) -> f64 {
    let total: f64 = dish
        .ingredients()
        .iter()
        .map(|line| costs.lookup(&line.name, line.amount).total_cost)
        .sum();
    round_to(total, CURRENCY_DECIMALS)
}

/// Per-day and total plan cost.
pub fn calculate_plan_cost(plan: &MealPlan, costs: &CostTable) -> PlanCost {
    let daily_costs: Vec<f64> = plan
        .days
        .iter()
        .map(|day| {
            let total: f64 = day.meals.iter().map(|m| dish_cost(m, costs)).sum();
            round_to(total, CURRENCY_DECIMALS)
        })
        .collect();

    let total: f64 = daily_costs.iter().sum();
    PlanCost {
        total_cost: round_to(total, CURRENCY_DECIMALS),
        average_per_day: round_to(
            safe_ratio(total, daily_costs.len() as f64),
            CURRENCY_DECIMALS,
        ),
        daily_costs,
    }
}
