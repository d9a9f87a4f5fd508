//! Hyprland IPC client implementation
//!
//! This module provides the `HyprlandClient` for querying the Hyprland
//! compositor. The client handles socket discovery and the request/reply
//! exchange; decoding into picker types lives in `types`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UnixStream;
use tracing::{debug, trace};

use super::types::{ClientReply, MonitorReply};
use super::{HyprlandError, Monitor, Window};

/// Environment variable naming the running Hyprland instance
const SIGNATURE_ENV: &str = "HYPRLAND_INSTANCE_SIGNATURE";

/// Environment variable for the per-user runtime directory
const RUNTIME_DIR_ENV: &str = "XDG_RUNTIME_DIR";

/// Socket root used by Hyprland releases before 0.40
const LEGACY_SOCKET_ROOT: &str = "/tmp/hypr";

/// File name of the request socket inside the instance directory
const REQUEST_SOCKET_NAME: &str = ".socket.sock";

const MONITORS_COMMAND: &str = "j/monitors";
const CLIENTS_COMMAND: &str = "j/clients";

/// Locate the request socket for a Hyprland instance
///
/// Prefers `<runtime_dir>/hypr/<signature>/.socket.sock` and falls back to
/// the legacy `/tmp/hypr/<signature>/.socket.sock`.
///
/// # Errors
///
/// Returns `HyprlandError::SignatureNotSet` if `signature` is missing or empty.
/// Returns `HyprlandError::SocketNotFound` with the preferred candidate path
/// if none of the candidates exist.
pub fn resolve_socket_path(
    signature: Option<&str>,
    runtime_dir: Option<&Path>,
) -> Result<PathBuf, HyprlandError> {
    let signature = signature
        .filter(|s| !s.is_empty())
        .ok_or(HyprlandError::SignatureNotSet)?;

    let mut candidates = Vec::with_capacity(2);
    if let Some(dir) = runtime_dir {
        candidates.push(dir.join("hypr").join(signature).join(REQUEST_SOCKET_NAME));
    }
    candidates.push(
        Path::new(LEGACY_SOCKET_ROOT)
            .join(signature)
            .join(REQUEST_SOCKET_NAME),
    );

    if let Some(found) = candidates.iter().find(|path| path.exists()) {
        return Ok(found.clone());
    }

    Err(HyprlandError::SocketNotFound {
        path: candidates.swap_remove(0),
    })
}

/// Discover the Hyprland request socket from the environment
///
/// Reads `HYPRLAND_INSTANCE_SIGNATURE` and `XDG_RUNTIME_DIR`; see
/// [`resolve_socket_path`] for the lookup order.
pub fn get_socket_path() -> Result<PathBuf, HyprlandError> {
    let signature = std::env::var(SIGNATURE_ENV).ok();
    let runtime_dir = std::env::var_os(RUNTIME_DIR_ENV).map(PathBuf::from);

    resolve_socket_path(signature.as_deref(), runtime_dir.as_deref())
}

/// Client for read-only queries against the Hyprland compositor
///
/// Hyprland serves one request per connection, so the client only keeps the
/// socket path and opens a fresh connection for every query. Nothing is
/// cached between queries.
///
/// # Example
///
/// ```ignore
/// let client = HyprlandClient::from_env()?;
/// for monitor in client.monitors().await? {
///     println!("{} at {},{}", monitor.name, monitor.x, monitor.y);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HyprlandClient {
    socket_path: PathBuf,
}

impl HyprlandClient {
    /// Create a client for the Hyprland instance of the current session
    ///
    /// # Errors
    ///
    /// Returns `HyprlandError::SignatureNotSet` if `$HYPRLAND_INSTANCE_SIGNATURE`
    /// is not set, or `HyprlandError::SocketNotFound` if its socket is missing.
    pub fn from_env() -> Result<Self, HyprlandError> {
        Ok(Self::with_socket_path(get_socket_path()?))
    }

    /// Create a client for an explicit socket path
    pub fn with_socket_path(socket_path: impl Into<PathBuf>) -> Self {
        Self {
            socket_path: socket_path.into(),
        }
    }

    /// Send a raw command and return Hyprland's reply
    ///
    /// # Protocol
    ///
    /// 1. Client connects and writes the command (e.g., `j/monitors`)
    /// 2. Hyprland writes the reply and closes the connection
    ///
    /// # Errors
    ///
    /// Returns `HyprlandError::ConnectionFailed` if the socket cannot be reached.
    /// Returns `HyprlandError::SendFailed` / `ReceiveFailed` on I/O errors.
    /// Returns `HyprlandError::EmptyReply` if the connection closes with no data.
    pub async fn send_request(&self, command: &str) -> Result<String, HyprlandError> {
        let mut socket = UnixStream::connect(&self.socket_path)
            .await
            .map_err(|e| HyprlandError::ConnectionFailed {
                path: self.socket_path.clone(),
                source: e,
            })?;

        socket
            .write_all(command.as_bytes())
            .await
            .map_err(HyprlandError::SendFailed)?;
        socket.flush().await.map_err(HyprlandError::SendFailed)?;

        let mut reply = Vec::new();
        socket
            .read_to_end(&mut reply)
            .await
            .map_err(HyprlandError::ReceiveFailed)?;

        if reply.is_empty() {
            return Err(HyprlandError::EmptyReply {
                command: command.to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&reply).into_owned())
    }

    /// List monitors in Hyprland's enumeration order
    pub async fn monitors(&self) -> Result<Vec<Monitor>, HyprlandError> {
        let replies: Vec<MonitorReply> = self.query(MONITORS_COMMAND).await?;
        debug!(count = replies.len(), "Received monitor list");

        let monitors: Vec<Monitor> = replies.into_iter().map(Monitor::from).collect();
        for m in &monitors {
            trace!(
                name = %m.name,
                description = %m.description,
                x = m.x,
                y = m.y,
                width = m.width,
                height = m.height,
                focused = m.focused,
                "Monitor"
            );
        }
        Ok(monitors)
    }

    /// List client windows in Hyprland's enumeration order
    pub async fn windows(&self) -> Result<Vec<Window>, HyprlandError> {
        let replies: Vec<ClientReply> = self.query(CLIENTS_COMMAND).await?;
        debug!(count = replies.len(), "Received client list");

        let windows: Vec<Window> = replies.into_iter().map(Window::from).collect();
        for w in &windows {
            trace!(
                address = %w.address,
                class = %w.class,
                x = w.x,
                y = w.y,
                width = w.width,
                height = w.height,
                "Client"
            );
        }
        Ok(windows)
    }

    async fn query<T: DeserializeOwned>(&self, command: &str) -> Result<Vec<T>, HyprlandError> {
        let reply = self.send_request(command).await?;
        decode_reply(&reply)
    }
}

/// Decode a JSON list reply
///
/// Hyprland answers failed requests with plain text ("unknown request"), so
/// anything that is not JSON is surfaced as Hyprland's own error message.
fn decode_reply<T: DeserializeOwned>(reply: &str) -> Result<Vec<T>, HyprlandError> {
    let value: serde_json::Value =
        serde_json::from_str(reply).map_err(|_| HyprlandError::Hyprland {
            message: reply.trim().to_string(),
        })?;

    serde_json::from_value(value).map_err(HyprlandError::DeserializeFailed)
}
