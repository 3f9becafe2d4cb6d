//! UI/backend events and error modeling for desktop GUI controller.

use client_core::ClientError;
use shared::protocol::{Kata, KataSummary, SubmissionResult};

use crate::backend_bridge::commands::RequestId;

#[derive(Debug, Clone)]
pub enum UiEvent {
    Info(String),
    Error(UiError),
    KatasLoaded(Vec<KataSummary>),
    KataListFailed(UiError),
    KataLoaded {
        request: RequestId,
        kata: Kata,
    },
    KataLoadFailed {
        request: RequestId,
        error: UiError,
    },
    SubmissionEvaluated {
        request: RequestId,
        result: SubmissionResult,
    },
    SubmissionFailed {
        request: RequestId,
        error: UiError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    NotFound,
    Validation,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadKatas,
    LoadKata,
    Submit,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_client_error(context: UiErrorContext, err: &ClientError) -> Self {
        let category = match err {
            ClientError::NotFound { .. } => UiErrorCategory::NotFound,
            ClientError::Timeout | ClientError::Transport(_) => UiErrorCategory::Transport,
            ClientError::InvalidServerUrl(_) | ClientError::Decode(_) => {
                UiErrorCategory::Validation
            }
            ClientError::Status { status: 404, .. } => UiErrorCategory::NotFound,
            ClientError::Status { .. } => UiErrorCategory::Unknown,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("not found") || message_lower.contains("404") {
            UiErrorCategory::NotFound
        } else if message_lower.contains("invalid")
            || message_lower.contains("missing")
            || message_lower.contains("malformed")
        {
            UiErrorCategory::Validation
        } else if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("network")
            || message_lower.contains("transport")
            || message_lower.contains("disconnect")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn category(&self) -> UiErrorCategory {
        self.category
    }

    pub fn context(&self) -> UiErrorContext {
        self.context
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn err_label(category: UiErrorCategory) -> &'static str {
    match category {
        UiErrorCategory::Transport => "Transport",
        UiErrorCategory::NotFound => "Not found",
        UiErrorCategory::Validation => "Validation",
        UiErrorCategory::Unknown => "Unexpected",
    }
}
