//! Miette-based error diagnostics for CLI error presentation.
//!
//! Config parse failures are rendered with the offending TOML span; every
//! other error becomes a plain report with an optional hint.

use miette::{Diagnostic, Report, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError as ConfigFailure, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(waitlens::config))]
pub struct ConfigError {
    /// Human-readable error message.
    pub message: String,

    /// Source content (typically the configuration file).
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigError {
    /// Create a new configuration error with source location.
    #[must_use]
    pub fn new(message: impl Into<String>, src: impl Into<String>, offset: usize, len: usize) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Add a help suggestion to the error.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Any other command failure.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(waitlens::command))]
pub struct CommandError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Turn a crate error into a report, attaching `source` for config parse
/// errors that carry a span.
pub fn report(error: Error, source: Option<&str>) -> Report {
    if let (Error::Config(ConfigFailure::Parse(parse)), Some(src)) = (&error, source) {
        if let Some(range) = parse.span() {
            let diagnostic = ConfigError::new(
                format!("failed to parse config: {}", parse.message()),
                src,
                range.start,
                range.end.saturating_sub(range.start),
            )
            .with_help("check the value against config.toml.example");
            return Report::new(diagnostic);
        }
    }

    let help = match &error {
        Error::Config(ConfigFailure::ReadFile(_)) => {
            Some("create one with `waitlens config init`".to_string())
        }
        Error::Connection(_) | Error::Database(_) => {
            Some("check the database path or WAITLENS_DATABASE".to_string())
        }
        _ => None,
    };
    Report::new(CommandError {
        message: error.to_string(),
        help,
    })
}
