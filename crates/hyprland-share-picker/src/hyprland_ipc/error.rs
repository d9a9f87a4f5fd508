//! Error types for Hyprland IPC operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when querying the Hyprland compositor
#[derive(Debug, Error)]
pub enum HyprlandError {
    /// The HYPRLAND_INSTANCE_SIGNATURE environment variable is not set
    #[error("HYPRLAND_INSTANCE_SIGNATURE environment variable not set - is Hyprland running?")]
    SignatureNotSet,

    /// No request socket exists for the instance signature
    #[error("Hyprland socket not found at {path}")]
    SocketNotFound { path: PathBuf },

    /// Failed to connect to the Hyprland socket
    #[error("Failed to connect to Hyprland socket at {path}: {source}")]
    ConnectionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to send request to Hyprland
    #[error("Failed to send request to Hyprland: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Failed to receive response from Hyprland
    #[error("Failed to receive response from Hyprland: {0}")]
    ReceiveFailed(#[source] std::io::Error),

    /// Hyprland closed the connection without replying
    #[error("Hyprland sent an empty reply to `{command}`")]
    EmptyReply { command: String },

    /// The reply was JSON but not the expected shape
    #[error("Failed to deserialize response: {0}")]
    DeserializeFailed(#[source] serde_json::Error),

    /// Hyprland answered with a plain-text error message
    #[error("Hyprland returned error: {message}")]
    Hyprland { message: String },
}
