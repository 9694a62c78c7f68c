use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;
use shared::protocol::ClassifyResponse;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Validation failure for user-entered request text.
///
/// Detected locally; submissions failing here must never reach the network.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid JSON")]
    MalformedJson(#[from] serde_json::Error),
    #[error("input has no array-typed \"data\" field")]
    MissingDataArray,
}

/// Failure of a classification round-trip.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("API returned status {status}")]
    Status { status: u16 },
    #[error("API request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("API response body was not classification JSON: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}

/// Checks that `raw` parses as JSON and carries an array-typed `data` field.
///
/// Element values are not validated; the endpoint owns their semantics.
pub fn validate_input(raw: &str) -> Result<(), InputError> {
    let parsed: Value = serde_json::from_str(raw)?;
    match parsed.get("data") {
        Some(Value::Array(_)) => Ok(()),
        _ => Err(InputError::MissingDataArray),
    }
}

/// HTTP client for the remote classification service.
///
/// One instance is shared across submissions so the underlying connection
/// pool is reused.
pub struct ClassifierClient {
    http: Client,
    endpoint: String,
}

impl ClassifierClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_http_client(Client::new(), endpoint)
    }

    pub fn with_http_client(http: Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POSTs the raw input text unmodified and decodes the three-bucket
    /// response.
    ///
    /// Input is re-validated at this seam so the library refuses malformed
    /// text even when the caller skipped its own check.
    pub async fn classify(&self, raw: &str) -> Result<ClassifyResponse, ClassifyError> {
        validate_input(raw)?;

        debug!(endpoint = %self.endpoint, bytes = raw.len(), "dispatching classification request");
        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(raw.to_owned())
            .send()
            .await
            .map_err(ClassifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "classification request rejected");
            return Err(ClassifyError::Status {
                status: status.as_u16(),
            });
        }

        let decoded = response
            .json::<ClassifyResponse>()
            .await
            .map_err(ClassifyError::MalformedResponse)?;
        info!(
            numbers = decoded.numbers.len(),
            alphabets = decoded.alphabets.len(),
            highest_alphabet = decoded.highest_alphabet.len(),
            "classification response received"
        );
        Ok(decoded)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
