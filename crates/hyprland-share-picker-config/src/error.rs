use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("Failed to parse KDL")]
    #[diagnostic(code(hyprland_share_picker::config::parse_error))]
    ParseError {
        #[source_code]
        src: String,
        #[label("here")]
        span: miette::SourceSpan,
        #[source]
        source: kdl::KdlError,
    },

    /// A value of the wrong type or out of range, pointing at the entry
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(hyprland_share_picker::config::invalid_value))]
    InvalidValue {
        message: String,
        expected: String,
        #[source_code]
        src: String,
        #[label("expected {expected}")]
        span: miette::SourceSpan,
    },

    #[error("Missing required field: {field}")]
    #[diagnostic(code(hyprland_share_picker::config::missing_field))]
    MissingField { field: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
