use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::KataId,
    error::ApiErrorBody,
    protocol::{Kata, KataSummary, Submission, SubmissionResult},
};
use tracing::{debug, info, warn};
use url::Url;

pub mod config;
pub mod error;

pub use config::{load_settings, ClientSettings, ConfigError};
pub use error::ClientError;

pub type ClientResult<T> = Result<T, ClientError>;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// The three calls the kata server exposes.
#[async_trait]
pub trait KataApi: Send + Sync {
    async fn list_katas(&self) -> ClientResult<Vec<KataSummary>>;
    /// Any non-2xx answer is reported as [`ClientError::NotFound`].
    async fn fetch_kata(&self, kata_id: &KataId) -> ClientResult<Kata>;
    /// Never synthesizes a result; transport failures are returned to the caller.
    async fn submit_solution(&self, submission: &Submission) -> ClientResult<SubmissionResult>;
}

#[derive(Debug, Clone)]
pub struct HttpKataClient {
    http: Client,
    base_url: Url,
    request_timeout: Duration,
    submit_timeout: Duration,
}

impl HttpKataClient {
    pub fn new(server_url: &str) -> ClientResult<Self> {
        let settings = ClientSettings {
            server_url: server_url.to_string(),
            ..ClientSettings::default()
        };
        Self::from_settings(&settings)
    }

    pub fn from_settings(settings: &ClientSettings) -> ClientResult<Self> {
        let base_url = parse_server_url(&settings.server_url)?;
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(ClientError::Transport)?;
        Ok(Self {
            http,
            base_url,
            request_timeout: settings.request_timeout(),
            submit_timeout: settings.submit_timeout(),
        })
    }

    pub fn with_timeouts(mut self, request_timeout: Duration, submit_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self.submit_timeout = submit_timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // parse_server_url guarantees a base URL, so this never fails.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[async_trait]
impl KataApi for HttpKataClient {
    async fn list_katas(&self) -> ClientResult<Vec<KataSummary>> {
        let url = self.endpoint(&["katas"]);
        debug!(%url, "requesting kata list");
        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;
        let katas: Vec<KataSummary> = ensure_success(response).await?.json().await?;
        info!(count = katas.len(), "kata list loaded");
        Ok(katas)
    }

    async fn fetch_kata(&self, kata_id: &KataId) -> ClientResult<Kata> {
        let url = self.endpoint(&["katas", kata_id.as_str()]);
        debug!(%url, kata_id = %kata_id, "requesting kata");
        let response = self
            .http
            .get(url)
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(kata_id = %kata_id, status = status.as_u16(), "kata not found");
            return Err(ClientError::NotFound {
                kata_id: kata_id.clone(),
                status: status.as_u16(),
            });
        }

        let kata: Kata = response.json().await?;
        info!(kata_id = %kata.id, title = %kata.title, "kata loaded");
        Ok(kata)
    }

    async fn submit_solution(&self, submission: &Submission) -> ClientResult<SubmissionResult> {
        let url = self.endpoint(&["submit"]);
        debug!(
            %url,
            kata_id = %submission.kata_id,
            code_len = submission.code.len(),
            "submitting solution"
        );
        let response = self
            .http
            .post(url)
            .timeout(self.submit_timeout)
            .json(submission)
            .send()
            .await?;
        let result: SubmissionResult = ensure_success(response).await?.json().await?;
        info!(
            kata_id = %submission.kata_id,
            status = %result.status,
            "submission evaluated"
        );
        Ok(result)
    }
}

/// Validates a configured server URL; only absolute http(s) URLs are accepted.
pub fn parse_server_url(raw: &str) -> ClientResult<Url> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed)
        .map_err(|err| ClientError::InvalidServerUrl(format!("{trimmed} ({err})")))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ClientError::InvalidServerUrl(trimmed.to_string()));
    }
    Ok(url)
}

async fn ensure_success(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<ApiErrorBody>(&body)
            .map(|body| body.detail)
            .ok()
            .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string())),
        Err(_) => None,
    };
    warn!(status = status.as_u16(), detail = ?detail, "server rejected request");
    Err(ClientError::Status {
        status: status.as_u16(),
        detail,
    })
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
