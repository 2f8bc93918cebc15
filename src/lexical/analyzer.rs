//! Token factory and analyzer state
//!
//! The analyzer is the cohesive object tying the pieces together: the
//! automaton acceptor, the classification registry, the identifier
//! counter, and the symbol table. Token creation never fails with an
//! error value; automaton rejection and unclassifiable lexemes are
//! ordinary token/attribute outcomes the caller inspects.

use crate::automaton::Automaton;
use crate::classification::{ClassificationRegistry, LexemeClass};
use crate::config::compile_time::lexical::MAX_LEXEME_LENGTH;
use crate::config::LexicalPreferences;
use crate::logging::codes;
use crate::symbols::SymbolTable;
use crate::{log_debug, log_success, log_warning};
use crate::tokens::Token;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Running tallies over the tokens produced by one analyzer instance
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct LexicalMetrics {
    pub tokens_created: usize,
    pub reserved_count: usize,
    pub identifier_count: usize,
    pub other_count: usize,
    pub unclassified_count: usize,
    pub rejected_count: usize,
    /// Per-label tallies, populated only when label tracking is enabled
    pub label_usage: HashMap<String, usize>,
}

impl LexicalMetrics {
    fn record(&mut self, registry: &ClassificationRegistry, class: &LexemeClass, track_labels: bool) {
        self.tokens_created += 1;

        match class {
            LexemeClass::Matched(entry) => {
                if entry.label == registry.priority_label(0) {
                    self.reserved_count += 1;
                } else if registry.is_identifier_label(&entry.label) {
                    self.identifier_count += 1;
                } else {
                    self.other_count += 1;
                }
                if track_labels {
                    *self.label_usage.entry(entry.label.clone()).or_insert(0) += 1;
                }
            }
            LexemeClass::Unclassified => {
                self.unclassified_count += 1;
            }
        }
    }

    fn record_rejection(&mut self) {
        self.tokens_created += 1;
        self.rejected_count += 1;
    }
}

/// Lexeme-to-token factory with identifier disambiguation
pub struct LexicalAnalyzer<A: Automaton> {
    automaton: A,
    registry: ClassificationRegistry,
    symbols: SymbolTable,
    /// Starts at −1; pre-incremented on every identifier-category token,
    /// including repeated lexemes, so each occurrence gets a fresh
    /// attribute.
    identifier_counter: i64,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl<A: Automaton> LexicalAnalyzer<A> {
    pub fn new(automaton: A, registry: ClassificationRegistry) -> Self {
        Self::with_preferences(automaton, registry, LexicalPreferences::default())
    }

    pub fn with_preferences(
        automaton: A,
        registry: ClassificationRegistry,
        preferences: LexicalPreferences,
    ) -> Self {
        Self {
            automaton,
            registry,
            symbols: SymbolTable::new(),
            identifier_counter: -1,
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    /// Manufacture a token for one lexeme occurrence.
    ///
    /// Automaton rejection yields [`Token::Error`] with the line number.
    /// An accepted lexeme is classified once; identifier-category lexemes
    /// bump the occurrence counter and fold it into the attribute, every
    /// other match carries its entry's base attribute, and an accepted
    /// lexeme no entry matches carries attribute −1.
    pub fn create_token(&mut self, lexeme: &str, line: u32) -> Token {
        if self.preferences.warn_on_long_lexemes && lexeme.len() > MAX_LEXEME_LENGTH {
            log_warning!(
                codes::lexical::LEXEME_TOO_LONG,
                "Lexeme exceeds expected maximum length",
                "length" => lexeme.len(),
                "line" => line
            );
        }

        if !self.automaton.accepts(lexeme) {
            log_debug!("Lexeme rejected by automaton",
                "lexeme" => lexeme,
                "line" => line
            );
            self.metrics.record_rejection();
            return Token::error(lexeme, line);
        }

        let class = self.registry.classify(lexeme);
        self.metrics
            .record(&self.registry, &class, self.preferences.track_label_usage);

        let attribute = if self.registry.is_identifier_label(class.label()) {
            self.identifier_counter += 1;
            class.base_attribute() + self.identifier_counter
        } else {
            class.base_attribute()
        };

        if self.preferences.log_token_creation {
            log_success!(
                codes::success::TOKEN_CREATED,
                "Token created",
                "lexeme" => lexeme,
                "label" => class.label(),
                "attribute" => attribute
            );
        }

        Token::valid(lexeme, attribute)
    }

    /// Forward a token to the symbol table; identifiers accumulate there,
    /// everything else is ignored.
    pub fn store_symbol(&mut self, token: &Token) -> bool {
        self.symbols.store(&self.registry, token)
    }

    pub fn registry(&self) -> &ClassificationRegistry {
        &self.registry
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Current value of the identifier occurrence counter (−1 until the
    /// first identifier is seen)
    pub fn identifier_count(&self) -> i64 {
        self.identifier_counter
    }

    /// Diagnostic dump of the reserved-word and symbol tables
    pub fn table_report(&self) -> String {
        crate::report::render_tables_with(
            &self.registry,
            &self.symbols,
            self.preferences.include_attributes_in_report,
        )
    }
}
