/// Default model used when neither the form nor DEFAULT_MODEL picks one
pub const DEFAULT_MODEL: &str = "googleai/gemini-2.0-flash";

/// Default Google AI endpoint (Generative Language API)
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Application configuration from environment
#[derive(Debug, Clone)]
pub struct Config {
    /// Process-wide Google AI API key. `None` is allowed; dispatches without
    /// a per-call key then fail at the provider layer.
    pub gemini_api_key: Option<String>,
    pub default_model: String,
    pub base_url: String,
}

impl Config {
    /// Load configuration from .env file and environment
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Not an error if .env is missing

        // GEMINI_API_KEY is the documented name, GOOGLE_API_KEY the older one
        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .ok();

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let base_url =
            std::env::var("GOOGLE_AI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self {
            gemini_api_key,
            default_model,
            base_url,
        }
    }
}
