//! Deduplicated, insertion-ordered record of identifier tokens
//!
//! Populated by explicit calls from the token-consuming caller, never
//! automatically by token creation. Append-only; nothing is removed.

use crate::classification::ClassificationRegistry;
use crate::config::compile_time::symbols::MAX_SYMBOL_ENTRIES;
use crate::logging::codes;
use crate::tokens::Token;
use crate::{log_debug, log_warning};
use std::collections::HashSet;

/// Insertion-ordered collection of identifier tokens, at most one entry
/// per distinct lexeme text.
#[derive(Debug, Default)]
pub struct SymbolTable {
    entries: Vec<Token>,
    lexemes: HashSet<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a token if it is a valid identifier not yet recorded.
    ///
    /// No-op for error tokens, tokens outside the identifier category,
    /// and lexemes already present. Returns whether an entry was added.
    pub fn store(&mut self, registry: &ClassificationRegistry, token: &Token) -> bool {
        let Token::Valid { lexeme, .. } = token else {
            return false;
        };

        if !registry.is_identifier_label(registry.classify(lexeme).label()) {
            return false;
        }

        if self.lexemes.contains(lexeme) {
            return false;
        }

        if self.entries.len() >= MAX_SYMBOL_ENTRIES {
            log_warning!(
                codes::symbols::SYMBOL_TABLE_FULL,
                "Symbol table exceeds expected entry count",
                "entries" => self.entries.len(),
                "limit" => MAX_SYMBOL_ENTRIES
            );
        }

        log_debug!("Identifier stored in symbol table", "lexeme" => lexeme);

        self.lexemes.insert(lexeme.clone());
        self.entries.push(token.clone());
        true
    }

    /// Entries in first-insertion order
    pub fn entries(&self) -> &[Token] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_lexeme(&self, lexeme: &str) -> bool {
        self.lexemes.contains(lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classification::Classification;

    fn sample_registry() -> ClassificationRegistry {
        ClassificationRegistry::new(vec![
            Classification::new("RESERVED", "if|then|else", 1),
            Classification::new("ID", "[A-Za-z]+", 100),
        ])
    }

    #[test]
    fn test_store_identifier() {
        let registry = sample_registry();
        let mut table = SymbolTable::new();

        assert!(table.store(&registry, &Token::valid("x", 100)));
        assert_eq!(table.len(), 1);
        assert!(table.contains_lexeme("x"));
    }

    #[test]
    fn test_store_dedups_by_lexeme() {
        let registry = sample_registry();
        let mut table = SymbolTable::new();

        assert!(table.store(&registry, &Token::valid("x", 100)));
        // Same lexeme with a different attribute is the same symbol.
        assert!(!table.store(&registry, &Token::valid("x", 101)));

        assert_eq!(table.len(), 1);
        assert_eq!(table.entries()[0].attribute(), Some(100));
    }

    #[test]
    fn test_store_rejects_non_identifiers() {
        let registry = sample_registry();
        let mut table = SymbolTable::new();

        assert!(!table.store(&registry, &Token::valid("if", 1)));
        assert!(!table.store(&registry, &Token::error("@", 3)));
        // Lexeme that classifies to nothing at all.
        assert!(!table.store(&registry, &Token::valid("123", -1)));

        assert!(table.is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = sample_registry();
        let mut table = SymbolTable::new();

        table.store(&registry, &Token::valid("alpha", 100));
        table.store(&registry, &Token::valid("beta", 101));
        table.store(&registry, &Token::valid("alpha", 102));
        table.store(&registry, &Token::valid("gamma", 103));

        let lexemes: Vec<&str> = table.entries().iter().map(Token::lexeme).collect();
        assert_eq!(lexemes, vec!["alpha", "beta", "gamma"]);
    }
}
