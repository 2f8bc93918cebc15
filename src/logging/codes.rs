//! Consolidated diagnostic codes and classification metadata
//!
//! Single source of truth for all codes emitted by the engine, with the
//! behavioral metadata (severity, recoverability) attached in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for a diagnostic code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

impl CodeMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        description: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            description,
        }
    }
}

// ============================================================================
// CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Classification table error codes
pub mod classification {
    use super::Code;

    pub const EMPTY_TABLE: Code = Code::new("E010");
    pub const INVALID_PATTERN: Code = Code::new("E011");
    pub const TABLE_TOO_LARGE: Code = Code::new("E012");
    pub const UNCLASSIFIED_LEXEME: Code = Code::new("E013");
}

/// Token creation error codes
pub mod lexical {
    use super::Code;

    pub const AUTOMATON_REJECTION: Code = Code::new("E020");
    pub const LEXEME_TOO_LONG: Code = Code::new("E021");
    pub const EMPTY_LEXEME: Code = Code::new("E022");
}

/// Symbol table error codes
pub mod symbols {
    use super::Code;

    pub const SYMBOL_TABLE_FULL: Code = Code::new("E030");
}

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");
    pub const REGISTRY_CONSTRUCTION_COMPLETE: Code = Code::new("I010");
    pub const TOKEN_CREATED: Code = Code::new("I020");
    pub const SYMBOL_STORED: Code = Code::new("I030");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        registry.insert(
            "ERR001",
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                "Critical internal system error",
            ),
        );
        registry.insert(
            "ERR002",
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                "Logging system initialization failure",
            ),
        );

        registry.insert(
            "E010",
            CodeMetadata::new(
                "E010",
                "Classification",
                Severity::High,
                true,
                "Classification table is empty; every lexeme will be unclassified",
            ),
        );
        registry.insert(
            "E011",
            CodeMetadata::new(
                "E011",
                "Classification",
                Severity::Medium,
                true,
                "Classification pattern is not a valid regular expression; entry skipped",
            ),
        );
        registry.insert(
            "E012",
            CodeMetadata::new(
                "E012",
                "Classification",
                Severity::Low,
                true,
                "Classification table exceeds the expected entry count",
            ),
        );
        registry.insert(
            "E013",
            CodeMetadata::new(
                "E013",
                "Classification",
                Severity::Low,
                true,
                "Accepted lexeme matched no classification entry",
            ),
        );

        registry.insert(
            "E020",
            CodeMetadata::new(
                "E020",
                "Lexical",
                Severity::Medium,
                true,
                "Lexeme rejected by the finite-automaton acceptor",
            ),
        );
        registry.insert(
            "E021",
            CodeMetadata::new(
                "E021",
                "Lexical",
                Severity::Low,
                true,
                "Lexeme exceeds the expected maximum length",
            ),
        );
        registry.insert(
            "E022",
            CodeMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                true,
                "Empty lexeme passed to token creation",
            ),
        );

        registry.insert(
            "E030",
            CodeMetadata::new(
                "E030",
                "Symbols",
                Severity::Low,
                true,
                "Symbol table exceeds the expected entry count",
            ),
        );

        registry.insert(
            "I004",
            CodeMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                "Logging system initialized successfully",
            ),
        );
        registry.insert(
            "I010",
            CodeMetadata::new(
                "I010",
                "Classification",
                Severity::Low,
                true,
                "Classification registry constructed",
            ),
        );
        registry.insert(
            "I020",
            CodeMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                "Token created",
            ),
        );
        registry.insert(
            "I030",
            CodeMetadata::new(
                "I030",
                "Symbols",
                Severity::Low,
                true,
                "Identifier token stored in symbol table",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity for a code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if a code represents a recoverable condition
pub fn is_recoverable(code: &str) -> bool {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Get human-readable description for a code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown code")
}

/// Get category for a code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}
