//! Google AI (Gemini) client
//!
//! Thin typed layer over the Generative Language `generateContent` endpoint.
//! A [`GoogleAi`] value is a credential binding, not a connection: it borrows
//! the shared pooled HTTP client from [`crate::http`] and only carries the
//! API key and endpoint to use. That makes a scoped binding for a single
//! call as cheap as the process-wide default one.

use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{info, warn};

use crate::error::DispatchError;
use crate::http::get_client;

/// Model selector namespace served by this client
pub const GOOGLE_AI_PREFIX: &str = "googleai/";

/// API key and endpoint for one or more `generateContent` calls
#[derive(Debug, Clone)]
pub struct GoogleAi {
    api_key: Option<String>,
    base_url: String,
}

impl GoogleAi {
    #[must_use]
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
        }
    }

    /// Model name as it appears in the REST path, without our namespace
    /// prefix. Foreign selectors pass through unchanged and get rejected by
    /// the API itself.
    fn rest_model(model_id: &str) -> &str {
        model_id.strip_prefix(GOOGLE_AI_PREFIX).unwrap_or(model_id)
    }

    /// Issue one `generateContent` call and return the first candidate text
    ///
    /// The key travels in the `x-goog-api-key` header, never in the URL, so
    /// it cannot end up in logs that record request targets.
    pub async fn generate(&self, model_id: &str, prompt: &str) -> Result<String, DispatchError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(DispatchError::Provider(
                "Google AI API key is not configured".to_string(),
            ));
        };

        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            Self::rest_model(model_id)
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig::answer_json(),
        };

        let start = Instant::now();

        let response = get_client()
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(
                model = %model_id,
                status = %status,
                duration_ms = %start.elapsed().as_millis(),
                "Google AI API error"
            );
            return Err(DispatchError::Provider(format!(
                "Google AI API error {status}: {body}"
            )));
        }

        let body: GenerateContentResponse = response.json().await?;

        info!(
            model = %model_id,
            duration_ms = %start.elapsed().as_millis(),
            "Model call completed"
        );

        body.first_text()
            .ok_or_else(|| DispatchError::Provider("no output produced".to_string()))
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

impl GenerationConfig {
    /// Ask the model for JSON with a single required string field `answer`
    fn answer_json() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "answer": { "type": "string" }
                },
                "required": ["answer"],
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, `None` when the provider
    /// returned nothing usable (safety stop, empty parts, no candidates).
    fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_model_strips_namespace() {
        assert_eq!(
            GoogleAi::rest_model("googleai/gemini-2.0-flash"),
            "gemini-2.0-flash"
        );
        assert_eq!(GoogleAi::rest_model("openai/gpt-4o"), "openai/gpt-4o");
        assert_eq!(GoogleAi::rest_model("gemini-1.5-pro"), "gemini-1.5-pro");
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: "What is IDMC?".to_string(),
                }],
            }],
            generation_config: GenerationConfig::answer_json(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "What is IDMC?");
        assert_eq!(
            json["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(
            json["generationConfig"]["responseSchema"]["required"][0],
            "answer"
        );
    }

    #[test]
    fn test_first_text_from_typical_response() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    {
                        "content": {
                            "role": "model",
                            "parts": [{"text": "{\"answer\": \"CDI moves data.\"}"}]
                        },
                        "finishReason": "STOP"
                    }
                ],
                "modelVersion": "gemini-2.0-flash"
            }"#,
        )
        .unwrap();

        assert_eq!(
            response.first_text().as_deref(),
            Some(r#"{"answer": "CDI moves data."}"#)
        );
    }

    #[test]
    fn test_first_text_joins_split_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "{\"answer\": "}, {"text": "\"hi\"}"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(
            response.first_text().as_deref(),
            Some(r#"{"answer": "hi"}"#)
        );
    }

    #[test]
    fn test_first_text_empty_cases() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.first_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.first_text().is_none());

        // Candidate present but blocked before any content was produced
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(response.first_text().is_none());

        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": []}}]}"#).unwrap();
        assert!(response.first_text().is_none());
    }
}
