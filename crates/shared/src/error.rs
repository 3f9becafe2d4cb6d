use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by the kata server for non-2xx responses,
/// e.g. `{"detail": "Kata not found"}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("No kata selected")]
    MissingKata,
    #[error("Please write some code before submitting")]
    EmptyCode,
}
