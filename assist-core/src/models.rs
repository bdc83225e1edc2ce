use serde::{Deserialize, Serialize};

/// A question on its way to the dispatcher.
///
/// Wire names match the web form contract (`modelId`, `apiKey`). The
/// ten-character minimum on `question` is the form's job; the dispatcher
/// only insists on a non-empty `model_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    /// The question about Informatica IDMC.
    pub question: String,
    /// Target model selector, e.g. `googleai/gemini-2.0-flash`.
    pub model_id: String,
    /// Optional per-call Google AI API key. Never persisted, never logged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AskRequest {
    /// Create a request that relies on the process-wide default credential.
    #[must_use]
    pub fn new(question: impl Into<String>, model_id: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            model_id: model_id.into(),
            api_key: None,
        }
    }

    /// Attach a per-call API key, scoping the provider client to this call.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// The model's answer. No token counts, no citations, just the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

/// A selectable model for the web dropdown and the CLI listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOption {
    /// Selector sent to the dispatcher.
    pub id: &'static str,
    /// Human-readable display name.
    pub label: &'static str,
}

/// Models offered by the form. The first entry is the default selection.
pub const MODEL_OPTIONS: &[ModelOption] = &[
    ModelOption {
        id: "googleai/gemini-2.0-flash",
        label: "Gemini 2.0 Flash (Fastest)",
    },
    ModelOption {
        id: "googleai/gemini-1.5-pro",
        label: "Gemini 1.5 Pro (Most Accurate)",
    },
    ModelOption {
        id: "googleai/gemini-1.5-flash",
        label: "Gemini 1.5 Flash",
    },
];
