//! Global logging module for the tokenization engine
//!
//! Provides a thread-safe global logging service with code-tagged events
//! and a clean macro interface. Every diagnostic the engine emits flows
//! through here; when the global service is uninitialized the macros
//! degrade to no-ops so library behavior never depends on logging setup.

pub mod codes;
pub mod events;
pub mod macros;
pub mod service;

use std::sync::{Arc, OnceLock};

pub use codes::{Code, CodeMetadata, Severity};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, NullLogger, StructuredLogger};

/// Logging initialization errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoggingError {
    #[error("global logger already initialized")]
    AlreadyInitialized,
}

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

/// Initialize global logging from runtime preferences
pub fn init_global_logging() -> Result<(), LoggingError> {
    let preferences = crate::config::LoggingPreferences::default();
    let service = Arc::new(LoggingService::from_preferences(&preferences));

    GLOBAL_LOGGER
        .set(service.clone())
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with a custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), LoggingError> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

/// Safe access to the global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

fn log_with_context(mut event: LogEvent, context: Vec<(&str, &str)>) {
    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::error(code, message), context);
}

/// Log warning with context (used by log_warning! macro)
pub fn log_warning_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::warning_with_code(code, message), context);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::success(code, message), context);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::info(message), context);
}

/// Log debug with context (used by log_debug! macro)
pub fn log_debug_with_context(message: &str, context: Vec<(&str, &str)>) {
    log_with_context(LogEvent::debug(message), context);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uninitialized_logging_is_noop() {
        // Must not panic whether or not another test initialized the
        // global service first.
        log_error_with_context(codes::system::INTERNAL_ERROR, "Test error", vec![]);
        log_debug_with_context("Test debug", vec![("key", "value")]);
    }

    #[test]
    fn test_double_initialization_fails() {
        let logger = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(logger, LogLevel::Debug));

        let first = init_global_logging_with_service(service.clone());
        let second = init_global_logging_with_service(service);

        // Whichever test wins the race, the second call must fail.
        if first.is_ok() {
            assert!(matches!(second, Err(LoggingError::AlreadyInitialized)));
        } else {
            assert!(second.is_err());
        }
        assert!(is_initialized());
    }
}
