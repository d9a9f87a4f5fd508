//! Configuration parsing for hyprland-share-picker
//!
//! This crate handles the optional KDL configuration file: picker window
//! size, the region selection command and the default log level.

mod error;
mod model;
mod parser;

pub use error::ConfigError;
pub use model::*;
pub use parser::{parse_config, parse_config_str};
