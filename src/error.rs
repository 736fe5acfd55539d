use thiserror::Error;

#[derive(Debug, Error)]
pub enum MealError {
    /// The supplied plan or recipe could not be parsed or failed validation.
    #[error("Invalid {what} JSON: {detail}")]
    MalformedInput { what: &'static str, detail: String },

    #[error("Household not found: {0}")]
    HouseholdNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MealError {
    pub fn malformed(what: &'static str, detail: impl Into<String>) -> Self {
        MealError::MalformedInput {
            what,
            detail: detail.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MealError>;
