use thiserror::Error;

/// Failure taxonomy for [`Dispatcher::dispatch`](crate::dispatch::Dispatcher::dispatch).
///
/// Only two cases exist on purpose. The web form and the CLI render
/// `Display` to the user unmodified, so each variant carries the final
/// human-readable reason and nothing else.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The caller omitted required configuration, e.g. an empty model selector.
    #[error("{0}")]
    Configuration(String),
    /// The provider call failed: no usable credential, transport error,
    /// non-success status, undecodable body, or an empty result.
    #[error("{0}")]
    Provider(String),
}

impl From<reqwest::Error> for DispatchError {
    fn from(err: reqwest::Error) -> Self {
        DispatchError::Provider(err.to_string())
    }
}
