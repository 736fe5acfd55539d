use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::{HouseholdConstraints, HouseholdProfile, Member};
use crate::planner::calculations::split_list;

/// In-memory repository of household profiles.
///
/// Owned by the caller and passed to whatever needs it; nothing is shared
/// between instances and nothing is written to disk.
#[derive(Debug, Clone, Default)]
pub struct HouseholdStore {
    /// Households keyed by id.
    households: HashMap<String, HouseholdProfile>,
}

impl HouseholdStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing profiles. Later duplicates of an id win.
    pub fn from_profiles(profiles: Vec<HouseholdProfile>) -> Self {
        let mut households = HashMap::new();
        for profile in profiles {
            households.insert(profile.household_id.clone(), profile);
        }
        Self { households }
    }

    /// Create (or replace) a household.
    ///
    /// `cuisine_preferences` is a comma-separated list. Fails when the
    /// cooking target is not positive or the budget is negative.
    pub fn create_household(
        &mut self,
        household_id: &str,
        household_name: &str,
        cooking_time_max: f64,
        budget_weekly: f64,
        cuisine_preferences: &str,
    ) -> Result<&HouseholdProfile> {
        debug!(household_id, "creating household");
        let profile = HouseholdProfile {
            household_id: household_id.to_string(),
            household_name: household_name.to_string(),
            cooking_time_max,
            budget_weekly,
            cuisine_preferences: split_list(cuisine_preferences),
            members: Vec::new(),
        };
        profile.validate()?;
        self.households.insert(household_id.to_string(), profile);
        Ok(&self.households[household_id])
    }

    /// Add a member to a household. List arguments are comma-separated.
    pub fn add_member(
        &mut self,
        household_id: &str,
        name: &str,
        age: u32,
        dietary_restrictions: &str,
        allergies: &str,
        health_conditions: &str,
    ) -> Result<&Member> {
        let household = self
            .households
            .get_mut(household_id)
            .ok_or_else(|| MealError::HouseholdNotFound(household_id.to_string()))?;

        let index = household.members.len();
        household.members.push(Member {
            name: name.to_string(),
            age,
            dietary_restrictions: split_list(dietary_restrictions),
            allergies: split_list(allergies),
            health_conditions: split_list(health_conditions),
        });

        Ok(&household.members[index])
    }

    pub fn get(&self, household_id: &str) -> Option<&HouseholdProfile> {
        self.households.get(household_id)
    }

    /// Constraints aggregated across all members of a household.
    pub fn constraints(&self, household_id: &str) -> Result<HouseholdConstraints> {
        let profile = self
            .get(household_id)
            .ok_or_else(|| MealError::HouseholdNotFound(household_id.to_string()))?;

        let members = &profile.members;

        Ok(HouseholdConstraints {
            household_id: profile.household_id.clone(),
            dietary_restrictions: merged(members.iter().map(|m| &m.dietary_restrictions), false),
            allergies: merged(members.iter().map(|m| &m.allergies), true),
            health_conditions: merged(members.iter().map(|m| &m.health_conditions), true),
            cooking_time_max: profile.cooking_time_max,
            budget_weekly: profile.budget_weekly,
            cuisine_preferences: profile.cuisine_preferences.clone(),
            member_count: profile.members.len(),
        })
    }

    /// Household ids, sorted.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.households.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.households.len()
    }

    pub fn is_empty(&self) -> bool {
        self.households.is_empty()
    }
}

/// Union of several lists, sorted and deduplicated.
///
/// Allergies and conditions are matched case-insensitively downstream, so
/// they are lowercased before deduplication.
fn merged<'a>(lists: impl Iterator<Item = &'a Vec<String>>, lowercase: bool) -> Vec<String> {
    lists
        .flatten()
        .map(|s| if lowercase { s.to_lowercase() } else { s.clone() })
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> HouseholdStore {
        let mut store = HouseholdStore::new();
        store
            .create_household("smith", "The Smiths", 40.0, 180.0, "italian, , mexican")
            .unwrap();
        store
            .add_member("smith", "Alex", 41, "vegetarian", "peanut, shellfish", "diabetes")
            .unwrap();
        store
            .add_member("smith", "Sam", 9, "", "Peanut", "")
            .unwrap();
        store
    }

    #[test]
    fn test_create_household_splits_cuisines() {
        let store = sample_store();
        let profile = store.get("smith").unwrap();
        assert_eq!(profile.cuisine_preferences, vec!["italian", "mexican"]);
        assert_eq!(profile.members.len(), 2);
    }

    #[test]
    fn test_create_household_rejects_bad_limits() {
        let mut store = HouseholdStore::new();
        assert!(store.create_household("a", "A", 0.0, 100.0, "").is_err());
        assert!(store.create_household("b", "B", -10.0, 100.0, "").is_err());
        assert!(store.create_household("c", "C", 30.0, -1.0, "").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_member_unknown_household() {
        let mut store = HouseholdStore::new();
        let result = store.add_member("nobody", "Kim", 30, "", "", "");
        assert!(matches!(result, Err(MealError::HouseholdNotFound(id)) if id == "nobody"));
    }

    #[test]
    fn test_constraints_are_deduplicated_and_sorted() {
        let store = sample_store();
        let c = store.constraints("smith").unwrap();
        assert_eq!(c.allergies, vec!["peanut", "shellfish"]);
        assert_eq!(c.dietary_restrictions, vec!["vegetarian"]);
        assert_eq!(c.health_conditions, vec!["diabetes"]);
        assert_eq!(c.member_count, 2);
        assert_eq!(c.cooking_time_max, 40.0);
        assert_eq!(c.budget_weekly, 180.0);
    }

    #[test]
    fn test_constraints_unknown_household() {
        let store = HouseholdStore::new();
        assert!(store.constraints("x").is_err());
    }

    #[test]
    fn test_from_profiles_last_wins() {
        let mut store = sample_store();
        let mut replacement = store.get("smith").unwrap().clone();
        replacement.budget_weekly = 99.0;
        store = HouseholdStore::from_profiles(vec![store.get("smith").unwrap().clone(), replacement]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("smith").unwrap().budget_weekly, 99.0);
    }
}
