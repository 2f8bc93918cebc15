//! Lexical analysis driver

pub mod analyzer;

pub use analyzer::{LexicalAnalyzer, LexicalMetrics};
