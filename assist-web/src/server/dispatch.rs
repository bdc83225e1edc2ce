//! Process-wide dispatcher for server functions

use assist_core::models::{Answer, AskRequest};
use assist_core::{Config, DispatchError, Dispatcher};
use std::sync::OnceLock;

/// Cached dispatcher so the environment is read once, not per request
static DISPATCHER: OnceLock<Dispatcher> = OnceLock::new();

fn dispatcher() -> &'static Dispatcher {
    DISPATCHER.get_or_init(|| Dispatcher::new(Config::from_env()))
}

/// Answer one question with the shared dispatcher
pub async fn ask(request: &AskRequest) -> Result<Answer, DispatchError> {
    dispatcher().dispatch(request).await
}
