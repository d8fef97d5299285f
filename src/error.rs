// ⚠️ Error Layer - library error type

use crate::schema::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{type_name} failed validation with {} violation(s)", .errors.len())]
    Invalid {
        type_name: String,
        errors: Vec<ValidationError>,
    },

    #[error("unknown schema: {0}")]
    UnknownSchema(String),

    #[error("configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ModelError {
    /// Violations carried by an `Invalid` error, empty otherwise.
    pub fn violations(&self) -> &[ValidationError] {
        match self {
            ModelError::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
