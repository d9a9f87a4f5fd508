//! Configuration data model

/// Default width of the picker window, in pixels
pub const DEFAULT_WINDOW_WIDTH: i32 = 400;

/// Default height of the picker window, in pixels
pub const DEFAULT_WINDOW_HEIGHT: i32 = 300;

/// Program used for interactive region selection when none is configured
pub const DEFAULT_REGION_SELECTOR: &str = "slurp";

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub log_level: LogLevel,
    pub window: WindowConfig,
    pub region_selector: SelectorConfig,
}

/// Initial size of the picker window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// External command that lets the user drag-select a screen area
///
/// The command must print `<x>,<y> <width>x<height>` on stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_REGION_SELECTOR.to_string(),
            args: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl LogLevel {
    /// Directive understood by `tracing_subscriber::EnvFilter`
    pub fn as_filter(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}
