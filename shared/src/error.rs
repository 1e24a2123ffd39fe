//! Error types shared by the widget and its collaborators

use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("List name must not be empty")]
    EmptyListName,

    #[error("Invalid properties: {0}")]
    Malformed(String),
}

/// Errors raised while fetching or rendering alerts
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("List store returned HTTP {status}: {status_text}")]
    RemoteStore { status: u16, status_text: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Render target not found: {0}")]
    RenderTargetMissing(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl WidgetError {
    /// Whether the error came from the outbound list request
    pub fn is_fetch_error(&self) -> bool {
        matches!(
            self,
            WidgetError::Network(_)
                | WidgetError::RemoteStore { .. }
                | WidgetError::InvalidResponse(_)
        )
    }
}
