use crate::id::EndpointId;
use thiserror::Error;

/// Errors surfaced by a drag session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DragError {
    /// The session's source endpoint left the board before the drop.
    #[error("source endpoint {0} is no longer on the board")]
    StaleSource(EndpointId),

    /// An update, drop or cancel arrived with no session running.
    #[error("no drag session is active")]
    Inactive,

    #[error("a drag session from {0} is already active")]
    AlreadyActive(EndpointId),

    #[error("endpoint {0} is not on the board")]
    UnknownEndpoint(EndpointId),
}

/// Errors loading a [`DragConfig`](crate::config::DragConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
