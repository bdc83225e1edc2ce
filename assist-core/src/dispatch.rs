//! Request dispatch: one question in, one structured answer out
//!
//! The dispatcher validates the selector, binds the right credential for
//! the call, sends the templated prompt and parses the model's JSON reply.
//! It holds no mutable state, so one instance can serve every request of
//! the process.

use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::DispatchError;
use crate::googleai::{GOOGLE_AI_PREFIX, GoogleAi};
use crate::http::strip_markdown_json;
use crate::models::{Answer, AskRequest};

/// Fixed instruction template; only the question is interpolated
fn build_prompt(question: &str) -> String {
    format!(
        "You are an AI assistant that helps users learn Informatica IDMC. \
         Answer the following question accurately and concisely:\n\nQuestion: {question}"
    )
}

/// The per-call credential, if it applies to this selector
///
/// A caller key only counts when it is non-empty and the model is in the
/// Google AI namespace. A blank key means "use the default", same as an
/// absent one; for foreign selectors the caller's key is not sent anywhere.
fn scoped_credential<'a>(model_id: &str, api_key: Option<&'a str>) -> Option<&'a str> {
    match api_key {
        Some(key) if !key.is_empty() && model_id.starts_with(GOOGLE_AI_PREFIX) => Some(key),
        _ => None,
    }
}

/// JSON shape the model is instructed to return
#[derive(Debug, Deserialize)]
struct AnswerPayload {
    answer: String,
}

fn parse_answer(raw: &str) -> Result<Answer, DispatchError> {
    let cleaned = strip_markdown_json(raw);
    let payload: AnswerPayload = serde_json::from_str(cleaned)
        .map_err(|err| DispatchError::Provider(format!("failed to parse model output: {err}")))?;
    Ok(Answer {
        answer: payload.answer,
    })
}

/// Stateless front door for questions
///
/// Built once from [`Config`] and shared. Each call either reuses the
/// default provider binding or builds a scoped one from the caller's key;
/// neither path touches shared mutable state, so a scoped key can never
/// leak into the next request.
pub struct Dispatcher {
    config: Config,
    default_client: GoogleAi,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: Config) -> Self {
        let default_client = GoogleAi::new(config.gemini_api_key.clone(), config.base_url.clone());
        Self {
            config,
            default_client,
        }
    }

    /// Scoped binding for this call, or a handle to the default one
    fn client_for(&self, request: &AskRequest) -> GoogleAi {
        match scoped_credential(&request.model_id, request.api_key.as_deref()) {
            Some(key) => GoogleAi::new(Some(key.to_string()), self.config.base_url.clone()),
            None => {
                // A blank key needs no trace; a real key that did not scope
                // can only mean the selector is foreign.
                if request.api_key.as_deref().is_some_and(|key| !key.is_empty()) {
                    debug!(
                        model = %request.model_id,
                        "per-call API key ignored: selector is not a Google AI model"
                    );
                }
                self.default_client.clone()
            }
        }
    }

    /// Answer one question
    ///
    /// Fails with [`DispatchError::Configuration`] when the selector is
    /// empty, and with [`DispatchError::Provider`] for everything that goes
    /// wrong downstream. The error text is what the user should see.
    pub async fn dispatch(&self, request: &AskRequest) -> Result<Answer, DispatchError> {
        if request.model_id.is_empty() {
            return Err(DispatchError::Configuration(
                "modelId is required.".to_string(),
            ));
        }

        debug!(model = %request.model_id, question = %request.question, "Dispatching question");

        let client = self.client_for(request);
        let prompt = build_prompt(&request.question);
        let raw = client.generate(&request.model_id, &prompt).await?;

        parse_answer(&raw)
    }
}
