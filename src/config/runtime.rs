// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

/// Runtime log level preference. Converted to the event-system level
/// when the logging service is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }

    fn from_env_str(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warning" | "warn" => Some(LogLevel::Warning),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to emit a debug event for every token created
    pub log_token_creation: bool,

    /// Whether to track per-label classification usage counts
    pub track_label_usage: bool,

    /// Whether to warn when a lexeme exceeds the length limit
    pub warn_on_long_lexemes: bool,

    /// Whether the table report includes attribute codes
    pub include_attributes_in_report: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            log_token_creation: env::var("LEXIC_LOG_TOKEN_CREATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            track_label_usage: env::var("LEXIC_TRACK_LABEL_USAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            warn_on_long_lexemes: env::var("LEXIC_WARN_ON_LONG_LEXEMES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_attributes_in_report: env::var("LEXIC_REPORT_ATTRIBUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Minimum level an event must have to be emitted
    pub min_log_level: LogLevel,

    /// Whether events are rendered as JSON instead of plain text
    pub use_structured_logging: bool,

    /// Whether console output is enabled at all
    pub enable_console_logging: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env::var("LEXIC_MIN_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::from_env_str(&v))
                .unwrap_or(LogLevel::Info),
            use_structured_logging: env::var("LEXIC_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("LEXIC_CONSOLE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}
