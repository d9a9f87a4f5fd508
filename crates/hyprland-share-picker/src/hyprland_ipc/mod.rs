//! Hyprland IPC client for monitor and window enumeration
//!
//! This module provides read-only queries against the Hyprland compositor's
//! request socket. The picker uses it to:
//! - List the monitors that can be shared as a whole screen
//! - List the client windows that can be shared individually
//! - Find which monitor contains a selected region
//!
//! ## Architecture
//!
//! - `HyprlandClient`: sends one request per connection and decodes the reply
//! - `HyprlandError`: error types for IPC operations
//! - `Monitor` / `Window`: internal views of the compositor's records
//!
//! ## Protocol
//!
//! Hyprland exposes a Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`.
//! A client writes a single command (`j/monitors`, `j/clients`; the `j/`
//! prefix asks for JSON), Hyprland writes the reply and closes the
//! connection.

mod client;
mod error;
mod types;

pub use client::HyprlandClient;
pub use error::HyprlandError;
pub use types::{Monitor, Window};
