use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MealError, Result};
use crate::models::NutritionProfile;
use crate::planner::constants::{DEFAULT_BUDGET_WEEKLY, DEFAULT_COOKING_TIME_MAX};

/// Settings file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "mealmind.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub planning: PlanningSettings,
    pub tables: TableSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Household planning limits used when the CLI does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanningSettings {
    /// Target cooking time per day, in minutes.
    pub cooking_time_max: f64,
    /// Weekly grocery budget.
    pub budget_weekly: f64,
}

impl Default for PlanningSettings {
    fn default() -> Self {
        Self {
            cooking_time_max: DEFAULT_COOKING_TIME_MAX,
            budget_weekly: DEFAULT_BUDGET_WEEKLY,
        }
    }
}

/// Extra reference-table entries merged over the built-in tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
    /// Per-100 g nutrition profiles keyed by ingredient name.
    pub nutrition: HashMap<String, NutritionProfile>,
    /// Price per 100 g keyed by ingredient name.
    pub cost: HashMap<String, f64>,
    /// Guidelines keyed by health condition.
    pub health: HashMap<String, HealthEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthEntry {
    pub avoid: Vec<String>,
    pub prefer: Vec<String>,
}

impl Settings {
    /// Load settings from the default file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or the default location if None.
    ///
    /// An explicitly given path must exist; the default one is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let settings = match path {
            Some(p) => Self::read(p)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read(&default_path)?
                } else {
                    debug!("no {} found, using default settings", DEFAULT_CONFIG_FILE);
                    Settings::default()
                }
            }
        };

        settings.validate()?;
        Ok(settings)
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Reject limits the planner cannot work with.
    pub fn validate(&self) -> Result<()> {
        let planning = &self.planning;
        if !planning.cooking_time_max.is_finite() || planning.cooking_time_max <= 0.0 {
            return Err(MealError::Config(format!(
                "planning.cooking_time_max must be positive, got {}",
                planning.cooking_time_max
            )));
        }
        if !planning.budget_weekly.is_finite() || planning.budget_weekly < 0.0 {
            return Err(MealError::Config(format!(
                "planning.budget_weekly must be non-negative, got {}",
                planning.budget_weekly
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.planning.cooking_time_max, 45.0);
        assert_eq!(settings.planning.budget_weekly, 150.0);
        assert!(settings.tables.cost.is_empty());
    }

    #[test]
    fn test_load_partial_file() {
        let toml = r#"
[planning]
budget_weekly = 200.0

[tables.cost]
"greek yogurt" = 0.95

[tables.nutrition."greek yogurt"]
calories = 59.0
protein_g = 10.0
carbs_g = 3.6
fat_g = 0.4
fiber_g = 0.0
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let settings = Settings::load_from(Some(file.path())).unwrap();
        assert_eq!(settings.planning.budget_weekly, 200.0);
        assert_eq!(settings.planning.cooking_time_max, 45.0);
        assert_eq!(settings.tables.cost["greek yogurt"], 0.95);
        assert_eq!(settings.tables.nutrition["greek yogurt"].calories, 59.0);
    }

    #[test]
    fn test_rejects_non_positive_target() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"[planning]\ncooking_time_max = 0.0\n").unwrap();
        assert!(matches!(
            Settings::load_from(Some(file.path())),
            Err(MealError::Config(_))
        ));
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let result = Settings::load_from(Some(Path::new("/nonexistent/mealmind.toml")));
        assert!(matches!(result, Err(MealError::Io(_))));
    }
}
