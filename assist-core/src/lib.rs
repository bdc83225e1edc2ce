// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod dispatch;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod googleai;
#[cfg(feature = "server")]
pub mod http;

// Re-export commonly used types
pub use models::{Answer, AskRequest, MODEL_OPTIONS, ModelOption};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use dispatch::Dispatcher;
#[cfg(feature = "server")]
pub use error::DispatchError;
