use assist_core::models::{Answer, MODEL_OPTIONS};
use leptos::prelude::*;

use crate::components::logo::Logo;

/// Minimum question length enforced by the form before anything is sent
const MIN_QUESTION_LEN: usize = 10;

#[server]
pub async fn ask_idmc_question(
    question: String,
    model_id: String,
    api_key: Option<String>,
) -> Result<Answer, ServerFnError> {
    use assist_core::models::AskRequest;
    use std::time::Instant;

    let request = AskRequest {
        question,
        model_id,
        api_key,
    };

    let start = Instant::now();
    let result = crate::server::dispatch::ask(&request).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(_) => {
            tracing::info!(
                model = %request.model_id,
                duration_ms = %duration_ms,
                "Question answered"
            );
        }
        Err(e) => {
            tracing::error!(
                model = %request.model_id,
                duration_ms = %duration_ms,
                error = %e,
                "Question failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

/// Thumbs feedback on an answer; clicking the active thumb clears it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Feedback {
    Up,
    Down,
}

#[component]
pub fn Home() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let (model_id, set_model_id) = signal(MODEL_OPTIONS[0].id.to_string());
    let (api_key, set_api_key) = signal(String::new());

    let (answer, set_answer) = signal(Option::<Answer>::None);
    let (answered_model, set_answered_model) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let (validation, set_validation) = signal(Option::<String>::None);
    let (feedback, set_feedback) = signal(Option::<Feedback>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if loading.get() {
            return;
        }

        let question_value = question.get();
        if question_value.chars().count() < MIN_QUESTION_LEN {
            set_validation.set(Some(
                "Question must be at least 10 characters.".to_string(),
            ));
            return;
        }
        set_validation.set(None);

        let model_value = model_id.get();
        let key_value = api_key.get();
        // An empty key field means "use the server's configured key"
        let key = if key_value.is_empty() {
            None
        } else {
            Some(key_value)
        };

        set_loading.set(true);
        set_error.set(None);
        set_answer.set(None);
        set_feedback.set(None);

        leptos::task::spawn_local(async move {
            match ask_idmc_question(question_value, model_value.clone(), key).await {
                Ok(result) => {
                    set_answered_model.set(model_value);
                    set_answer.set(Some(result));
                }
                Err(e) => {
                    // Unwrap the server-function framing so the dispatch
                    // error reads exactly as the server produced it
                    let message = match &e {
                        ServerFnError::ServerError(message) => message.clone(),
                        other => other.to_string(),
                    };
                    set_error.set(Some(message));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    let toggle_feedback = move |mark: Feedback| {
        set_feedback.update(|current| {
            *current = if *current == Some(mark) { None } else { Some(mark) };
        });
    };

    view! {
        <div class="home-container">
            <header class="hero">
                <Logo />
                <h1>"IDMC Assist"</h1>
                <p class="tagline">
                    "Ask questions about Informatica IDMC and get AI-powered answers."
                </p>
            </header>

            <section class="ask-card">
                <h2 class="card-title">"✨ Configure & Ask"</h2>

                <form on:submit=on_submit>
                    <div class="config-row">
                        <div class="form-group">
                            <label for="model-select">"Select AI Model"</label>
                            <select
                                id="model-select"
                                on:change=move |ev| set_model_id.set(event_target_value(&ev))
                                prop:value=model_id
                                prop:disabled=loading
                            >
                                {MODEL_OPTIONS
                                    .iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.id>{option.label}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label for="api-key">"Gemini API Key (Optional)"</label>
                            <input
                                id="api-key"
                                type="password"
                                placeholder="Enter Google AI API key"
                                prop:value=api_key
                                on:input=move |ev| set_api_key.set(event_target_value(&ev))
                                prop:disabled=loading
                            />
                        </div>
                    </div>

                    <div class="form-group">
                        <label for="question">"Your Question"</label>
                        <textarea
                            id="question"
                            rows="4"
                            placeholder="e.g., How do I configure a mapping in IDMC?"
                            prop:value=question
                            on:input=move |ev| set_question.set(event_target_value(&ev))
                            prop:disabled=loading
                        />
                        {move || validation.get().map(|message| view! {
                            <p class="field-error">{message}</p>
                        })}
                    </div>

                    <button type="submit" class="ask-button" prop:disabled=loading>
                        {move || if loading.get() {
                            "Consulting AI..."
                        } else {
                            "Ask AI Assistant"
                        }}
                    </button>
                </form>
            </section>

            // Errors
            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"⚠️"</span>
                    <span>{err}</span>
                </div>
            })}

            // The answer
            {move || answer.get().map(|result| view! {
                <section class="answer-card">
                    <div class="answer-header">
                        <h2 class="card-title">"AI Response"</h2>
                        <span class="model-badge">"Model: " {answered_model.get()}</span>
                    </div>

                    <p class="answer-text">{result.answer}</p>

                    <div class="answer-footer">
                        <span class="feedback-hint">"Was this helpful?"</span>
                        <FeedbackButton
                            mark=Feedback::Up
                            icon="👍"
                            label="Helpful"
                            feedback=feedback
                            on_click=toggle_feedback
                        />
                        <FeedbackButton
                            mark=Feedback::Down
                            icon="👎"
                            label="Not helpful"
                            feedback=feedback
                            on_click=toggle_feedback
                        />
                    </div>
                </section>
            })}

            <footer class="notice">
                <span class="icon">"ℹ️"</span>
                <span>
                    "Answers are generated by the selected Gemini model and may not always be "
                    "accurate. Verify against the official Informatica documentation."
                </span>
            </footer>
        </div>
    }
}

#[component]
fn FeedbackButton(
    mark: Feedback,
    icon: &'static str,
    label: &'static str,
    feedback: ReadSignal<Option<Feedback>>,
    on_click: impl Fn(Feedback) + Copy + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                if feedback.get() == Some(mark) {
                    "feedback-button active"
                } else {
                    "feedback-button"
                }
            }
            aria-label=label
            title=label
            on:click=move |_| on_click(mark)
        >
            {icon}
        </button>
    }
}
