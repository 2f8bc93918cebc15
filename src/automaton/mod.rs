//! Finite-automaton acceptor seam
//!
//! The engine never inspects automaton internals; it only asks whether a
//! lexeme belongs to the accepted language. Callers supply any acceptor
//! implementing this trait.

/// External acceptor capability consumed by token creation
pub trait Automaton {
    /// Does this lexeme belong to the language accepted by this automaton?
    fn accepts(&self, lexeme: &str) -> bool;
}

impl<A: Automaton + ?Sized> Automaton for &A {
    fn accepts(&self, lexeme: &str) -> bool {
        (**self).accepts(lexeme)
    }
}

impl<A: Automaton + ?Sized> Automaton for Box<A> {
    fn accepts(&self, lexeme: &str) -> bool {
        (**self).accepts(lexeme)
    }
}

/// Acceptor backed by a plain predicate function, convenient for tests
/// and for hosts whose automaton is already expressed as a closure.
pub struct FnAutomaton<F>(F);

impl<F> FnAutomaton<F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F> Automaton for FnAutomaton<F>
where
    F: Fn(&str) -> bool,
{
    fn accepts(&self, lexeme: &str) -> bool {
        (self.0)(lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_automaton() {
        let ascii_only = FnAutomaton::new(|lexeme: &str| lexeme.is_ascii());

        assert!(ascii_only.accepts("if"));
        assert!(!ascii_only.accepts("café"));
    }

    #[test]
    fn test_blanket_impls() {
        let inner = FnAutomaton::new(|lexeme: &str| !lexeme.is_empty());
        let by_ref: &dyn Automaton = &inner;
        assert!(by_ref.accepts("x"));

        let boxed: Box<dyn Automaton> = Box::new(FnAutomaton::new(|_: &str| true));
        assert!(boxed.accepts("anything"));
    }
}
