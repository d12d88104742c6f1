use crate::config::RelayConfig;
use crate::contact::{interpret_response, ContactError, ContactSubmission, RelayRequest};

/// Forwards contact submissions to the third-party form relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: reqwest::Client,
    config: RelayConfig,
}

impl RelayClient {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// One attempt, no retries. Transport errors, non-2xx answers and relay
    /// refusals all come back as `Err`.
    pub async fn send(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        submission.validate()?;
        let body = RelayRequest::new(&self.config.access_key, submission);
        let res = self
            .http
            .post(&self.config.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        let status = res.status();
        let text = res
            .text()
            .await
            .map_err(|e| ContactError::Transport(e.to_string()))?;
        interpret_response(status, &text)
    }
}
