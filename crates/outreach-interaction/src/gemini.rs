//! GeminiBackend - Direct REST API implementation for Gemini.
//!
//! This backend calls the Gemini REST API directly without CLI dependency.
//! The chat endpoint is stateless, so every turn sends the full
//! conversation history mapped to Gemini's `user`/`model` roles.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use outreach_core::backend::GenerationBackend;
use outreach_core::error::{OutreachError, Result};
use outreach_core::session::{ConversationMessage, MessageRole};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const SERVICE: &str = "Gemini";

/// Generation backend that talks to the Gemini HTTP API.
#[derive(Clone)]
pub struct GeminiBackend {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiBackend {
    /// Creates a new backend with the provided API key and model.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Overrides the API base URL. Primarily for tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn send_request(&self, body: &GenerateContentRequest) -> Result<String> {
        let url = format!(
            "{}/{model}:generateContent?key={api_key}",
            self.base_url,
            model = self.model,
            api_key = self.api_key
        );

        let response = self.client.post(url).json(body).send().await.map_err(|err| {
            OutreachError::upstream_unavailable(SERVICE, format!("request failed: {err}"))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            return Err(map_http_error(status, body_text));
        }

        let parsed: GenerateContentResponse = response.json().await.map_err(|err| {
            OutreachError::Serialization {
                format: "JSON".to_string(),
                message: format!("failed to parse {SERVICE} response: {err}"),
            }
        })?;

        extract_text_response(parsed)
    }
}

#[async_trait::async_trait]
impl GenerationBackend for GeminiBackend {
    fn name(&self) -> &str {
        SERVICE
    }

    async fn generate(&self, history: &[ConversationMessage]) -> Result<String> {
        let contents = history
            .iter()
            .map(|message| Content {
                role: match message.role {
                    MessageRole::User => "user".to_string(),
                    MessageRole::Assistant => "model".to_string(),
                },
                parts: vec![Part {
                    text: message.content.clone(),
                }],
            })
            .collect();

        let request = GenerateContentRequest { contents };
        self.send_request(&request).await
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

fn extract_text_response(response: GenerateContentResponse) -> Result<String> {
    response
        .candidates
        .and_then(|mut candidates| candidates.pop())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .ok_or_else(|| {
            OutreachError::upstream_unavailable(
                SERVICE,
                "response contained no text candidates",
            )
        })
}

fn map_http_error(status: StatusCode, body: String) -> OutreachError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    OutreachError::upstream_rejected(SERVICE, status.as_u16(), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn backend(server: &MockServer) -> GeminiBackend {
        GeminiBackend::new("gm-key", "gemini-2.0-flash").with_base_url(server.uri())
    }

    fn history() -> Vec<ConversationMessage> {
        vec![
            ConversationMessage::now(MessageRole::User, "instruction"),
            ConversationMessage::now(MessageRole::Assistant, "ok"),
            ConversationMessage::now(MessageRole::User, "write the email"),
        ]
    }

    #[tokio::test]
    async fn test_generate_maps_roles_and_returns_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/gemini-2.0-flash:generateContent"))
            .and(query_param("key", "gm-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{"content": {"parts": [{"text": "Dear Ada, ..."}]}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = backend(&server).generate(&history()).await.unwrap();
        assert_eq!(reply, "Dear Ada, ...");

        // The full history went out, assistant turns mapped to `model`.
        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        let contents = body["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0]["role"], "user");
        assert_eq!(contents[1]["role"], "model");
        assert_eq!(contents[2]["role"], "user");
        assert_eq!(contents[2]["parts"][0]["text"], "write the email");
    }

    #[tokio::test]
    async fn test_http_error_maps_to_rejection_with_api_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
            })))
            .mount(&server)
            .await;

        let err = backend(&server).generate(&history()).await.unwrap_err();
        match err {
            OutreachError::UpstreamRejected { status, body, .. } => {
                assert_eq!(status, 429);
                assert!(body.contains("RESOURCE_EXHAUSTED"));
                assert!(body.contains("Quota exceeded"));
            }
            other => panic!("expected UpstreamRejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_candidates_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
            .mount(&server)
            .await;

        let err = backend(&server).generate(&history()).await.unwrap_err();
        assert!(matches!(err, OutreachError::UpstreamUnavailable { .. }));
    }
}
