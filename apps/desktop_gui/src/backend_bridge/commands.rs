//! Backend commands queued from UI to backend worker.

use std::fmt;

use shared::{domain::KataId, protocol::Submission};

/// Tags a detail fetch or submission so late outcomes can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    ListKatas,
    FetchKata {
        request: RequestId,
        kata_id: KataId,
    },
    Submit {
        request: RequestId,
        submission: Submission,
    },
    CancelSubmission {
        request: RequestId,
    },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::ListKatas => "list_katas",
            BackendCommand::FetchKata { .. } => "fetch_kata",
            BackendCommand::Submit { .. } => "submit",
            BackendCommand::CancelSubmission { .. } => "cancel_submission",
        }
    }
}
