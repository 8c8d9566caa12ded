//! Generation service adapter for the petition backend REST API.

use async_trait::async_trait;
use reqwest::Response;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::GenerationId;
use crate::ports::{
    AuthError, EndeavorSuggestions, GeneratedDocument, GenerationError, GenerationRequest,
    GenerationService,
};

use super::ApiClient;

const SUGGEST_PATH: &str = "/api/endeavor/suggest";
const GENERATE_PATH: &str = "/api/petitions/generate";

/// [`GenerationService`] backed by the petition backend.
#[derive(Debug, Clone)]
pub struct HttpGenerationService {
    api: ApiClient,
}

impl HttpGenerationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn handle_status(&self, response: Response) -> Result<Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, body = %error_body, "generation request failed");

        match status.as_u16() {
            401 | 403 => Err(GenerationError::AuthenticationFailed),
            429 => Err(GenerationError::rate_limited(60)),
            400 | 422 => Err(GenerationError::InvalidRequest(error_body)),
            500..=599 => Err(GenerationError::unavailable(format!(
                "Server error {}: {}",
                status, error_body
            ))),
            _ => Err(GenerationError::network(format!(
                "Unexpected status {}: {}",
                status, error_body
            ))),
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_timeout() {
            GenerationError::Timeout {
                timeout_secs: self.api.timeout_secs(),
            }
        } else if e.is_connect() {
            GenerationError::network(format!("Connection failed: {}", e))
        } else {
            GenerationError::network(e.to_string())
        }
    }
}

impl From<AuthError> for GenerationError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Network(msg) => GenerationError::network(msg),
            AuthError::MissingCredentials | AuthError::SessionExpired => {
                GenerationError::AuthenticationFailed
            }
        }
    }
}

#[async_trait]
impl GenerationService for HttpGenerationService {
    async fn suggest_endeavors(
        &self,
        professional_background: &str,
        field: &str,
    ) -> Result<EndeavorSuggestions, GenerationError> {
        tracing::debug!(field = %field, "requesting endeavor suggestions");

        let response = self
            .api
            .post(SUGGEST_PATH)
            .await?
            .json(&SuggestRequest {
                professional_background,
                field,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body: SuggestResponse = self
            .handle_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse suggestions: {}", e)))?;

        tracing::debug!(
            endeavors = body.endeavors.len(),
            angles = body.national_interest_angles.len(),
            "received endeavor suggestions"
        );

        Ok(EndeavorSuggestions {
            endeavors: body.endeavors,
            national_interest_angles: body.national_interest_angles,
        })
    }

    async fn generate_document(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        tracing::debug!(
            client_id = %request.client_id,
            criterion = request.criterion.as_deref().unwrap_or("-"),
            "requesting document generation"
        );

        let response = self
            .api
            .post(GENERATE_PATH)
            .await?
            .json(&GenerateRequest {
                client_id: request.client_id.to_string(),
                visa_type: request.visa_type.as_str(),
                criterion: request.criterion.as_deref(),
                prompt: &request.prompt,
            })
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let body: GenerateResponse = self
            .handle_status(response)
            .await?
            .json()
            .await
            .map_err(|e| GenerationError::parse(format!("Failed to parse document: {}", e)))?;

        let generation_id = GenerationId::new(body.message_id)
            .map_err(|e| GenerationError::parse(format!("Bad generation id: {}", e)))?;

        Ok(GeneratedDocument {
            text: body.response,
            generation_id,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Wire DTOs
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SuggestRequest<'a> {
    professional_background: &'a str,
    field: &'a str,
}

#[derive(Debug, Deserialize)]
struct SuggestResponse {
    #[serde(default)]
    endeavors: Vec<String>,
    #[serde(default)]
    national_interest_angles: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    client_id: String,
    visa_type: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    criterion: Option<&'a str>,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
    message_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggest_response_tolerates_missing_arrays() {
        let body: SuggestResponse = serde_json::from_str("{}").unwrap();
        assert!(body.endeavors.is_empty());
        assert!(body.national_interest_angles.is_empty());
    }

    #[test]
    fn generate_request_omits_absent_criterion() {
        let request = GenerateRequest {
            client_id: "abc".to_string(),
            visa_type: "EB2NIW",
            criterion: None,
            prompt: "p",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("criterion"));
    }

    #[test]
    fn generate_response_parses_backend_shape() {
        let body: GenerateResponse =
            serde_json::from_str(r#"{"response":"Dear Officer","message_id":"msg-1"}"#).unwrap();
        assert_eq!(body.response, "Dear Officer");
        assert_eq!(body.message_id, "msg-1");
    }
}
