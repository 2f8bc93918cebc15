//! Identifier symbol table

pub mod table;

pub use table::SymbolTable;
