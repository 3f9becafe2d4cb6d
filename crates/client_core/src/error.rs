use shared::domain::KataId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("server_url must be an absolute http:// or https:// URL: {0}")]
    InvalidServerUrl(String),
    #[error("kata {kata_id} not found (HTTP {status})")]
    NotFound { kata_id: KataId, status: u16 },
    #[error("server returned HTTP {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("request timed out")]
    Timeout,
    #[error("invalid response payload: {0}")]
    Decode(String),
    #[error("transport failure: {0}")]
    Transport(#[source] reqwest::Error),
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::NotFound { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Timeout | ClientError::Transport(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err)
        }
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|detail| format!(": {detail}"))
        .unwrap_or_default()
}
