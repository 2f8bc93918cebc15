//! Lexical category classification

pub mod registry;

pub use registry::{Classification, ClassificationError, ClassificationRegistry, LexemeClass};
