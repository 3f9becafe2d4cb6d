use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a kata as assigned by the server (e.g. `add-numbers`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KataId(pub String);

impl KataId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for KataId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for KataId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for KataId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Outcome reported by the evaluator. Unrecognised values are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResultStatus {
    Pass,
    Fail,
    Error,
    Other(String),
}

impl ResultStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ResultStatus::Pass => "PASS",
            ResultStatus::Fail => "FAIL",
            ResultStatus::Error => "ERROR",
            ResultStatus::Other(raw) => raw,
        }
    }

    /// Icon shown next to the status; empty for statuses outside PASS/FAIL/ERROR.
    pub fn icon(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "✅",
            ResultStatus::Fail => "❌",
            ResultStatus::Error => "⚠️",
            ResultStatus::Other(_) => "",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ResultStatus::Pass)
    }
}

impl From<String> for ResultStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PASS" => ResultStatus::Pass,
            "FAIL" => ResultStatus::Fail,
            "ERROR" => ResultStatus::Error,
            _ => ResultStatus::Other(value),
        }
    }
}

impl From<ResultStatus> for String {
    fn from(value: ResultStatus) -> Self {
        match value {
            ResultStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
