//! Classification registry
//!
//! Owns the ordered classification table, the deduplicated priority-label
//! sequence derived from it, and one compiled matcher per entry. Matching
//! is first-match-wins in table order over the entire lexeme, which is how
//! category priority is enforced: reserved words listed before the generic
//! identifier pattern win whenever both could match.
//!
//! Caller contract, documented rather than verified: the table's first
//! entries are the reserved-word category and the identifier category is
//! the last distinct label.

use crate::config::compile_time::classification::MAX_TABLE_ENTRIES;
use crate::logging::codes;
use crate::{log_debug, log_success, log_warning};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Label reported for lexemes no table entry matches
pub const UNCLASSIFIED_LABEL: &str = "LEXER ERROR";

/// Attribute reported for lexemes no table entry matches
pub const UNCLASSIFIED_ATTRIBUTE: i64 = -1;

/// A lexical category descriptor
///
/// Multiple entries may share a label: one logical category split across
/// several patterns, each with its own attribute code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    pub pattern: String,
    pub base_attribute: i64,
}

impl Classification {
    pub fn new(label: &str, pattern: &str, base_attribute: i64) -> Self {
        Self {
            label: label.to_string(),
            pattern: pattern.to_string(),
            base_attribute,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} /{}/ [{}]",
            self.label, self.pattern, self.base_attribute
        )
    }
}

/// Configuration-time defects detected while building the registry
#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("invalid pattern '{pattern}' for label '{label}'")]
    InvalidPattern {
        label: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Outcome of classifying a single lexeme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexemeClass<'a> {
    /// First table entry whose pattern matched the whole lexeme
    Matched(&'a Classification),
    /// No entry matched
    Unclassified,
}

impl<'a> LexemeClass<'a> {
    pub fn is_matched(&self) -> bool {
        matches!(self, LexemeClass::Matched(_))
    }

    pub fn label(&self) -> &str {
        match self {
            LexemeClass::Matched(classification) => &classification.label,
            LexemeClass::Unclassified => UNCLASSIFIED_LABEL,
        }
    }

    pub fn base_attribute(&self) -> i64 {
        match self {
            LexemeClass::Matched(classification) => classification.base_attribute,
            LexemeClass::Unclassified => UNCLASSIFIED_ATTRIBUTE,
        }
    }
}

/// Ordered classification table with derived priority sequence
pub struct ClassificationRegistry {
    table: Vec<Classification>,
    /// One compiled matcher per table entry; `None` marks a defective
    /// pattern, skipped during classification.
    matchers: Vec<Option<Regex>>,
    priority: Vec<String>,
    reserved: Vec<Classification>,
    identifier_label: String,
    defects: Vec<ClassificationError>,
}

impl ClassificationRegistry {
    /// Build the registry from an ordered classification table.
    ///
    /// Never fails: defective patterns are recorded in
    /// [`pattern_defects`](Self::pattern_defects), logged, and skipped
    /// during matching. An empty table is accepted; every lookup then
    /// resolves to [`LexemeClass::Unclassified`].
    pub fn new(table: Vec<Classification>) -> Self {
        if table.is_empty() {
            log_warning!(
                codes::classification::EMPTY_TABLE,
                "Classification table is empty; all lexemes will be unclassified"
            );
        }

        if table.len() > MAX_TABLE_ENTRIES {
            log_warning!(
                codes::classification::TABLE_TOO_LARGE,
                "Classification table exceeds expected entry count",
                "entries" => table.len(),
                "limit" => MAX_TABLE_ENTRIES
            );
        }

        let mut priority: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for entry in &table {
            if seen.insert(entry.label.as_str()) {
                priority.push(entry.label.clone());
            }
        }

        let mut matchers = Vec::with_capacity(table.len());
        let mut defects = Vec::new();
        for entry in &table {
            // Anchor so the whole lexeme must satisfy the pattern, not a
            // substring of it.
            match Regex::new(&format!("^(?:{})$", entry.pattern)) {
                Ok(regex) => matchers.push(Some(regex)),
                Err(source) => {
                    log_warning!(
                        codes::classification::INVALID_PATTERN,
                        "Classification pattern is not a valid regular expression; entry skipped",
                        "label" => entry.label,
                        "pattern" => entry.pattern
                    );
                    defects.push(ClassificationError::InvalidPattern {
                        label: entry.label.clone(),
                        pattern: entry.pattern.clone(),
                        source,
                    });
                    matchers.push(None);
                }
            }
        }

        let reserved: Vec<Classification> = match priority.first() {
            Some(reserved_label) => table
                .iter()
                .filter(|entry| entry.label == *reserved_label)
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        let identifier_label = priority.last().cloned().unwrap_or_default();

        log_success!(
            codes::success::REGISTRY_CONSTRUCTION_COMPLETE,
            "Classification registry constructed",
            "entries" => table.len(),
            "priority_levels" => priority.len(),
            "defective_patterns" => defects.len()
        );

        Self {
            table,
            matchers,
            priority,
            reserved,
            identifier_label,
            defects,
        }
    }

    /// Label at the requested zero-based priority level.
    ///
    /// Negative or out-of-range levels resolve to the last element, the
    /// identifier category; callers pass −1 deliberately to mean exactly
    /// that. Empty registry resolves to `""`.
    pub fn priority_label(&self, level: i64) -> &str {
        if level >= 0 {
            if let Ok(index) = usize::try_from(level) {
                if let Some(label) = self.priority.get(index) {
                    return label;
                }
            }
        }
        self.priority
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// First table entry whose pattern matches the entire lexeme, in
    /// original table order. Entries with defective patterns are skipped.
    pub fn classify(&self, lexeme: &str) -> LexemeClass<'_> {
        for (entry, matcher) in self.table.iter().zip(&self.matchers) {
            if let Some(regex) = matcher {
                if regex.is_match(lexeme) {
                    return LexemeClass::Matched(entry);
                }
            }
        }

        log_debug!("Lexeme matched no classification entry", "lexeme" => lexeme);
        LexemeClass::Unclassified
    }

    /// The identifier-category label (last distinct label in the table)
    pub fn identifier_label(&self) -> &str {
        &self.identifier_label
    }

    pub fn is_identifier_label(&self, label: &str) -> bool {
        !self.identifier_label.is_empty() && label == self.identifier_label
    }

    /// Entries belonging to the reserved-word category (priority level 0)
    pub fn reserved_words(&self) -> &[Classification] {
        &self.reserved
    }

    pub fn priority_count(&self) -> usize {
        self.priority.len()
    }

    pub fn table(&self) -> &[Classification] {
        &self.table
    }

    /// Pattern defects collected at construction, for callers that want
    /// to surface configuration problems programmatically.
    pub fn pattern_defects(&self) -> &[ClassificationError] {
        &self.defects
    }
}
