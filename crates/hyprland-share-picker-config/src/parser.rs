//! KDL configuration parser

use std::path::Path;

use crate::error::ConfigError;
use crate::model::*;

/// Parse a configuration file from the given path
pub fn parse_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config_str(&content)
}

/// Parse configuration from a string
pub fn parse_config_str(content: &str) -> Result<Config, ConfigError> {
    let doc: kdl::KdlDocument = content.parse().map_err(|e: kdl::KdlError| {
        // kdl uses an older miette version, so we need to extract offset/len manually
        let offset = e.span.offset();
        let len = e.span.len();
        let span = miette::SourceSpan::from((offset, len));
        ConfigError::ParseError {
            src: content.to_string(),
            span,
            source: e,
        }
    })?;

    let mut config = Config::default();

    for node in doc.nodes() {
        match node.name().value() {
            "log-level" => {
                config.log_level = parse_log_level(node, content)?;
            }
            "window" => {
                config.window = parse_window(node, content)?;
            }
            "region-selector" => {
                config.region_selector = parse_selector(node)?;
            }
            name => {
                tracing::warn!("Unknown top-level node: {}", name);
            }
        }
    }

    Ok(config)
}

/// Build an `InvalidValue` error labelled at `entry`
fn invalid_value(
    entry: &kdl::KdlEntry,
    source: &str,
    message: String,
    expected: &str,
) -> ConfigError {
    let span = entry.span();
    ConfigError::InvalidValue {
        message,
        expected: expected.to_string(),
        src: source.to_string(),
        span: miette::SourceSpan::from((span.offset(), span.len())),
    }
}

fn parse_log_level(node: &kdl::KdlNode, source: &str) -> Result<LogLevel, ConfigError> {
    const EXPECTED: &str = "one of trace, debug, info, warn, error";

    let entry = node
        .entries()
        .first()
        .ok_or_else(|| ConfigError::MissingField {
            field: "log-level value (e.g., `log-level \"info\"`)".to_string(),
        })?;

    let value = entry.value().as_string().ok_or_else(|| {
        invalid_value(
            entry,
            source,
            format!("log-level must be a string, got {}", entry.value()),
            EXPECTED,
        )
    })?;

    value
        .parse()
        .map_err(|message| invalid_value(entry, source, message, EXPECTED))
}

fn parse_window(node: &kdl::KdlNode, source: &str) -> Result<WindowConfig, ConfigError> {
    let mut window = WindowConfig::default();

    if let Some(children) = node.children() {
        for child in children.nodes() {
            match child.name().value() {
                "width" => window.width = parse_dimension(child, "width", source)?,
                "height" => window.height = parse_dimension(child, "height", source)?,
                name => {
                    tracing::warn!("Unknown window config option: {}", name);
                }
            }
        }
    }

    Ok(window)
}

fn parse_dimension(node: &kdl::KdlNode, field: &str, source: &str) -> Result<i32, ConfigError> {
    const EXPECTED: &str = "a positive integer";

    let entry = node
        .entries()
        .first()
        .ok_or_else(|| ConfigError::MissingField {
            field: format!("window {} (e.g., `{} 400`)", field, field),
        })?;

    let value = entry.value().as_i64().ok_or_else(|| {
        invalid_value(
            entry,
            source,
            format!("window {} must be an integer, got {}", field, entry.value()),
            EXPECTED,
        )
    })?;

    match i32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(invalid_value(
            entry,
            source,
            format!("window {} must be a positive integer, got {}", field, value),
            EXPECTED,
        )),
    }
}

fn parse_selector(node: &kdl::KdlNode) -> Result<SelectorConfig, ConfigError> {
    let mut words = node
        .entries()
        .iter()
        .filter(|e| e.name().is_none())
        .filter_map(|e| e.value().as_string());

    let program = words
        .next()
        .filter(|p| !p.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingField {
            field: "region-selector program (e.g., `region-selector \"slurp\"`)".to_string(),
        })?;

    Ok(SelectorConfig {
        program: shellexpand::tilde(program).into_owned(),
        args: words.map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = r##"
            log-level "debug"
            window {
                width 640
                height 480
            }
            region-selector "slurp" "-d" "-b" "#00000080"
        "##;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result.log_level, LogLevel::Debug);
        assert_eq!(
            result.window,
            WindowConfig {
                width: 640,
                height: 480
            }
        );
        assert_eq!(result.region_selector.program, "slurp");
        assert_eq!(result.region_selector.args, vec!["-d", "-b", "#00000080"]);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let result = parse_config_str("").unwrap();
        assert_eq!(result, Config::default());
        assert_eq!(result.window.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(result.window.height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(result.region_selector.program, DEFAULT_REGION_SELECTOR);
        assert!(result.region_selector.args.is_empty());
        assert_eq!(result.log_level, LogLevel::Warn);
    }

    #[test]
    fn test_partial_window_keeps_other_default() {
        let config = r#"
            window {
                height 900
            }
        "#;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result.window.width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(result.window.height, 900);
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = r#"
            window {
                width 0
            }
        "#;

        match parse_config_str(config) {
            Err(ConfigError::InvalidValue { message, span, .. }) => {
                assert!(message.contains("width"), "message: {}", message);
                assert!(config[span.offset()..span.offset() + span.len()].contains('0'));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_window_size_as_string_rejected() {
        let config = r#"
            window {
                width "wide"
            }
        "#;

        match parse_config_str(config) {
            Err(ConfigError::InvalidValue { message, expected, .. }) => {
                assert!(message.contains("wide"), "message: {}", message);
                assert_eq!(expected, "a positive integer");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_window_size_without_value_is_missing_field() {
        let config = r#"
            window {
                height
            }
        "#;

        assert!(matches!(
            parse_config_str(config),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_region_selector_without_program_fails() {
        let result = parse_config_str("region-selector");
        match result {
            Err(ConfigError::MissingField { field }) => {
                assert!(field.contains("region-selector"));
            }
            other => panic!("Expected MissingField error, got: {:?}", other),
        }
    }

    #[test]
    fn test_region_selector_tilde_expansion() {
        let result = parse_config_str(r#"region-selector "~/bin/pick-area""#).unwrap();
        assert!(
            !result.region_selector.program.starts_with('~'),
            "Tilde should be expanded: {}",
            result.region_selector.program
        );
        assert!(result.region_selector.program.ends_with("/bin/pick-area"));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let config = r#"log-level "chatty""#;
        match parse_config_str(config) {
            Err(ConfigError::InvalidValue { message, span, .. }) => {
                assert!(message.contains("chatty"));
                assert!(config[span.offset()..span.offset() + span.len()].contains("chatty"));
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_non_string_log_level_rejected() {
        match parse_config_str("log-level 3") {
            Err(ConfigError::InvalidValue { message, .. }) => {
                assert!(message.contains("must be a string"), "message: {}", message);
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_log_level_without_value_is_missing_field() {
        assert!(matches!(
            parse_config_str("log-level"),
            Err(ConfigError::MissingField { .. })
        ));
    }

    #[test]
    fn test_unknown_nodes_are_ignored() {
        let config = r#"
            theme "dark"
            window {
                opacity 0.5
            }
        "#;

        let result = parse_config_str(config).unwrap();
        assert_eq!(result, Config::default());
    }

    #[test]
    fn test_invalid_kdl_reports_parse_error() {
        let result = parse_config_str("window {");
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn test_parse_config_from_file() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "log-level \"error\"").unwrap();

        let result = parse_config(file.path()).unwrap();
        assert_eq!(result.log_level, LogLevel::Error);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let result = parse_config(&dir.path().join("absent.kdl"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
