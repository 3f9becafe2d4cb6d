use serde::{Deserialize, Serialize};

use crate::{
    domain::{KataId, ResultStatus},
    error::SubmissionError,
};

/// Entry of `GET /katas`. The server may send full katas; extra fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KataSummary {
    pub id: KataId,
    pub title: String,
}

/// Body of `GET /katas/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kata {
    pub id: KataId,
    pub title: String,
    pub description: String,
    pub starter_code: String,
}

impl Kata {
    pub fn summary(&self) -> KataSummary {
        KataSummary {
            id: self.id.clone(),
            title: self.title.clone(),
        }
    }
}

/// Body of `POST /submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub kata_id: KataId,
    pub code: String,
}

impl Submission {
    /// Builds a submission from raw editor contents. The code is trimmed and
    /// must not be empty afterwards.
    pub fn new(kata_id: KataId, code: &str) -> Result<Self, SubmissionError> {
        if kata_id.is_blank() {
            return Err(SubmissionError::MissingKata);
        }
        let code = code.trim();
        if code.is_empty() {
            return Err(SubmissionError::EmptyCode);
        }
        Ok(Self {
            kata_id,
            code: code.to_string(),
        })
    }
}

/// Message of the ERROR result shown when a submission could not be evaluated.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit code. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub status: ResultStatus,
    #[serde(default)]
    pub message: String,
}

impl SubmissionResult {
    pub fn new(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ResultStatus::Error, message)
    }

    /// Result of a submission that never reached an evaluation.
    pub fn submit_failed() -> Self {
        Self::error(SUBMIT_FAILED_MESSAGE)
    }

    /// `"✅ PASS"`, or just the status when it has no icon.
    pub fn headline(&self) -> String {
        match self.status.icon() {
            "" => self.status.to_string(),
            icon => format!("{icon} {}", self.status),
        }
    }
}

#[cfg(test)]
#[path = "tests/protocol_tests.rs"]
mod tests;
