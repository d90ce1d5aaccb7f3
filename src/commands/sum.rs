//! Sum Submission
//!
//! POSTs the current sum as `{ "sum": <n> }`.

use gloo_net::http::Request;
use thiserror::Error;

use crate::models::SumPayload;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to encode request body: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Something that can deliver a sum
#[allow(async_fn_in_trait)]
pub trait SumTransport {
    async fn post_sum(&self, sum: u64) -> Result<(), SubmitError>;
}

/// Browser fetch transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    require_ok_status: bool,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>, require_ok_status: bool) -> Self {
        Self {
            endpoint: endpoint.into(),
            require_ok_status,
        }
    }
}

impl SumTransport for HttpTransport {
    async fn post_sum(&self, sum: u64) -> Result<(), SubmitError> {
        // `json` also sets Content-Type: application/json
        let request = Request::post(&self.endpoint)
            .json(&SumPayload { sum })
            .map_err(|e| SubmitError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        log::debug!("[SUBMIT] {} -> {}", self.endpoint, response.status());
        if self.require_ok_status && !response.ok() {
            return Err(SubmitError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(SubmitError::Status(503).to_string(), "server responded with status 503");
        assert_eq!(
            SubmitError::Transport("NetworkError".into()).to_string(),
            "request failed: NetworkError"
        );
    }
}
