//! Configuration: compile-time limits and runtime user preferences.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{LexicalPreferences, LogLevel, LoggingPreferences};
