use serde::{Deserialize, Serialize};

use crate::error::{MealError, Result};
use crate::planner::limits::{check_budget, check_target_minutes};

/// A household member and their dietary constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,

    #[serde(default)]
    pub age: u32,

    #[serde(default)]
    pub dietary_restrictions: Vec<String>,

    #[serde(default)]
    pub allergies: Vec<String>,

    #[serde(default)]
    pub health_conditions: Vec<String>,
}

/// A household and its planning limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdProfile {
    pub household_id: String,

    #[serde(default)]
    pub household_name: String,

    #[serde(default = "crate::planner::constants::default_cooking_time_max")]
    pub cooking_time_max: f64,

    #[serde(default = "crate::planner::constants::default_budget_weekly")]
    pub budget_weekly: f64,

    #[serde(default)]
    pub cuisine_preferences: Vec<String>,

    #[serde(default)]
    pub members: Vec<Member>,
}

impl HouseholdProfile {
    /// Reject a blank id or planning limits the planner cannot score against.
    pub fn validate(&self) -> Result<()> {
        if self.household_id.trim().is_empty() {
            return Err(MealError::malformed("households", "household_id is empty"));
        }
        check_target_minutes(self.cooking_time_max)
            .and_then(|_| check_budget(self.budget_weekly))
            .map_err(|e| match e {
                MealError::InvalidInput(detail) => MealError::malformed(
                    "households",
                    format!("household '{}': {}", self.household_id, detail),
                ),
                other => other,
            })?;
        Ok(())
    }
}

/// Constraints aggregated over every member of a household.
///
/// Lists are deduplicated and sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseholdConstraints {
    pub household_id: String,
    pub dietary_restrictions: Vec<String>,
    pub allergies: Vec<String>,
    pub health_conditions: Vec<String>,
    pub cooking_time_max: f64,
    pub budget_weekly: f64,
    pub cuisine_preferences: Vec<String>,
    pub member_count: usize,
}

impl HouseholdConstraints {
    /// Allergies joined into the comma-separated form the allergen checker takes.
    pub fn allergy_list(&self) -> String {
        self.allergies.join(", ")
    }
}
