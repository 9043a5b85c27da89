use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the skill duration engine and its adapters.
#[derive(Error, Debug)]
pub enum SkillError {
    /// A required payload field is absent.
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// A payload field is present but has the wrong JSON type.
    #[error("Invalid field {field}: expected {expected}")]
    InvalidField { field: String, expected: String },

    /// A date string could not be read at month granularity.
    #[error("Invalid date in {field}: {value}")]
    DateParse { field: String, value: String },

    /// A JSON document could not be parsed.
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A payload file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SkillError {
    /// `true` for errors caused by the content of the request itself, which a
    /// caller can only fix by resending corrected data.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            SkillError::MissingField(_)
                | SkillError::InvalidField { .. }
                | SkillError::DateParse { .. }
                | SkillError::JsonParse(_)
        )
    }
}

/// Convenience alias used throughout the skill crates.
pub type Result<T> = std::result::Result<T, SkillError>;
