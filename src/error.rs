use std::path::PathBuf;
use thiserror::Error;

/// Why an argument to [`longest_achievable_run`](crate::longest_achievable_run) was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("flip budget must be non-negative, got {k}")]
    NegativeBudget { k: i64 },

    #[error("element {value} at index {index} is not 0 or 1")]
    NonBinaryElement { index: usize, value: i64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl RunError {
    pub fn negative_budget(k: i64) -> Self {
        InvalidArgument::NegativeBudget { k }.into()
    }

    pub fn non_binary(index: usize, value: i64) -> Self {
        InvalidArgument::NonBinaryElement { index, value }.into()
    }
}

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse scenario file: {message}")]
    Parse { message: String },
}

impl From<serde_json::Error> for ScenarioError {
    fn from(err: serde_json::Error) -> Self {
        ScenarioError::Parse {
            message: format!("line {}, column {}: {err}", err.line(), err.column()),
        }
    }
}

impl From<toml::de::Error> for ScenarioError {
    fn from(err: toml::de::Error) -> Self {
        ScenarioError::Parse {
            message: err.to_string(),
        }
    }
}
