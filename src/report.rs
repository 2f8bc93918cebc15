//! Human-readable table dump
//!
//! Read-only diagnostic projection over the registry and symbol table;
//! not a machine-readable format.

use crate::classification::ClassificationRegistry;
use crate::symbols::SymbolTable;
use std::fmt::Write;

/// Render the reserved-word sub-table followed by the symbol table, one
/// entry per line.
pub fn render_tables(registry: &ClassificationRegistry, symbols: &SymbolTable) -> String {
    render_tables_with(registry, symbols, true)
}

/// Same as [`render_tables`], with attribute codes optionally omitted.
pub fn render_tables_with(
    registry: &ClassificationRegistry,
    symbols: &SymbolTable,
    include_attributes: bool,
) -> String {
    let mut output = String::new();

    output.push_str("=== Reserved words ===\n");
    for entry in registry.reserved_words() {
        if include_attributes {
            let _ = writeln!(output, "{}", entry);
        } else {
            let _ = writeln!(output, "{} /{}/", entry.label, entry.pattern);
        }
    }

    output.push_str("=== Symbol table ===\n");
    for token in symbols.entries() {
        if include_attributes {
            let _ = writeln!(output, "{}", token);
        } else {
            let _ = writeln!(output, "{}", token.lexeme());
        }
    }

    output
}
