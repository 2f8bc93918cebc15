//! Lexeme classification and tokenization engine
//!
//! Given a candidate lexeme and an externally-supplied, priority-ordered
//! classification table, the engine determines which lexical category the
//! lexeme belongs to, validates it against a finite-automaton acceptor,
//! manufactures a token carrying a category-derived attribute code, and
//! maintains a deduplicated table of identifier tokens seen so far.
//!
//! Three cooperating components:
//! - [`classification::ClassificationRegistry`] owns the ordered table and
//!   the deduplicated priority-label sequence derived from it;
//! - [`lexical::LexicalAnalyzer`] validates lexemes via the automaton,
//!   consults the registry, and produces tokens, owning the identifier
//!   disambiguation counter;
//! - [`symbols::SymbolTable`] accumulates identifier tokens, deduplicated
//!   by lexeme text in insertion order.
//!
//! Failure is never an exception on the analysis path: automaton rejection
//! becomes [`tokens::Token::Error`] and an unmatched classification becomes
//! an ordinary attribute value the caller inspects.

#[macro_use]
pub mod logging;

pub mod automaton;
pub mod classification;
pub mod config;
pub mod lexical;
pub mod report;
pub mod symbols;
pub mod tokens;

pub use automaton::{Automaton, FnAutomaton};
pub use classification::{Classification, ClassificationRegistry, LexemeClass};
pub use lexical::{LexicalAnalyzer, LexicalMetrics};
pub use symbols::SymbolTable;
pub use tokens::Token;
