//! Tutor service client
//!
//! Direct HTTP client for calling `POST {base_url}/teach`.

use crate::api::types::{TeachRequest, TutorResponse};
use crate::config::Config;
use crate::error::ClientError;
use crate::orchestrator::backend::TutorBackend;
use async_trait::async_trait;
use std::time::Instant;

/// HTTP client for the tutor service
///
/// Wraps a shared `reqwest::Client` (connection pooling) configured with
/// the request timeout from [`Config`].
#[derive(Debug, Clone)]
pub struct TutorClient {
    client: reqwest::Client,
    teach_url: String,
    timeout_secs: u64,
}

impl TutorClient {
    /// Create a client from configuration
    ///
    /// # Errors
    /// * Returns `ClientError::Transport` if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ClientError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_http_client(client, config))
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_http_client(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            teach_url: config.teach_url(),
            timeout_secs: config.request_timeout_secs,
        }
    }

    /// URL this client posts to
    pub fn teach_url(&self) -> &str {
        &self.teach_url
    }

    /// Ask the tutor service to explain a topic
    ///
    /// # Arguments
    /// * `subject` - The topic, sent verbatim
    ///
    /// # Returns
    /// * `Ok(TutorResponse)` - The typed response body
    /// * `Err(ClientError)` - If the subject was blank (no request is sent),
    ///   the request failed, the status was not 2xx, or the body could not be decoded
    pub async fn teach(&self, subject: &str) -> Result<TutorResponse, ClientError> {
        if subject.trim().is_empty() {
            return Err(ClientError::EmptyInput);
        }

        let request_body = TeachRequest {
            subject: subject.to_string(),
        };

        tracing::debug!(
            url = %self.teach_url,
            subject_len = subject.len(),
            "Calling tutor service"
        );

        let start = Instant::now();

        let response = self
            .client
            .post(&self.teach_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());

            tracing::error!(
                status_code = status_code,
                error_body = %error_body,
                "Tutor service returned error status"
            );

            return Err(ClientError::HttpStatus {
                status: status_code,
                body: error_body,
            });
        }

        let response_body = response.text().await.map_err(|e| self.map_send_error(e))?;

        let parsed: TutorResponse = serde_json::from_str(&response_body).map_err(|e| {
            tracing::error!(
                error = %e,
                body_len = response_body.len(),
                "Tutor service returned undecodable body"
            );
            ClientError::Decode(e.to_string())
        })?;

        tracing::debug!(
            response_len = parsed.response.len(),
            has_visual_aid = parsed.visual_aid().is_some(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Successfully received response from tutor service"
        );

        Ok(parsed)
    }

    fn map_send_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            tracing::warn!(timeout_secs = self.timeout_secs, "Tutor request timed out");
            ClientError::Timeout(self.timeout_secs)
        } else {
            tracing::warn!(error = %e, "Failed to reach tutor service");
            ClientError::Transport(e.to_string())
        }
    }
}

#[async_trait]
impl TutorBackend for TutorClient {
    async fn teach(&self, subject: &str) -> Result<TutorResponse, ClientError> {
        TutorClient::teach(self, subject).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> TutorClient {
        TutorClient::new(&Config::with_api_url(server.url())).unwrap()
    }

    #[tokio::test]
    async fn test_teach_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/teach")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "subject": "Kinetic Energy" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "response": "Energy of motion",
                    "source_data": "Use this local metaphor: a rolling yam (Source: Folk tale) (Region: Oyo)",
                    "visual_aid": "https://img.example.com/yam.png"
                }"#,
            )
            .create_async()
            .await;

        let result = client_for(&server).teach("Kinetic Energy").await;

        mock.assert_async().await;
        let response = result.unwrap();
        assert_eq!(response.response, "Energy of motion");
        assert_eq!(response.visual_aid(), Some("https://img.example.com/yam.png"));
    }

    #[tokio::test]
    async fn test_teach_sends_subject_verbatim() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/teach")
            .match_body(Matcher::Json(serde_json::json!({ "subject": "  Photosynthesis " })))
            .with_status(200)
            .with_body(r#"{"response": "ok", "source_data": "", "visual_aid": null}"#)
            .create_async()
            .await;

        let result = client_for(&server).teach("  Photosynthesis ").await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_teach_error_status() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/teach")
            .with_status(500)
            .with_body(r#"{"detail": "model crashed"}"#)
            .create_async()
            .await;

        let result = client_for(&server).teach("Gravity").await;

        mock.assert_async().await;
        match result {
            Err(ClientError::HttpStatus { status, body }) => {
                assert_eq!(status, 500);
                assert!(body.contains("model crashed"));
            }
            other => panic!("Expected HttpStatus error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_teach_invalid_json() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/teach")
            .with_status(200)
            .with_body("This is not JSON")
            .create_async()
            .await;

        let result = client_for(&server).teach("Gravity").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_teach_wrong_shape() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/teach")
            .with_status(200)
            .with_body(r#"{"answer": "missing the response field"}"#)
            .create_async()
            .await;

        let result = client_for(&server).teach("Gravity").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(ClientError::Decode(_))));
    }

    #[tokio::test]
    async fn test_teach_connection_refused() {
        // Nothing listens on port 9 (discard) in the test environment
        let client = TutorClient::new(&Config::with_api_url("http://127.0.0.1:9")).unwrap();
        let result = client.teach("Gravity").await;

        let err = result.unwrap_err();
        assert!(err.is_transport_failure());
        assert!(matches!(
            err,
            ClientError::Transport(_) | ClientError::Timeout(_)
        ));
    }

    #[tokio::test]
    async fn test_teach_blank_subject_sends_nothing() {
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/teach").expect(0).create_async().await;

        let result = client_for(&server).teach(" \t ").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        assert!(matches!(err, ClientError::EmptyInput));
        assert!(!err.is_transport_failure());
        assert_eq!(err.user_message(), "Please enter a topic.");
    }

    #[test]
    fn test_teach_url_from_config() {
        let client = TutorClient::new(&Config::with_api_url("http://localhost:8000/")).unwrap();
        assert_eq!(client.teach_url(), "http://localhost:8000/teach");
    }
}
