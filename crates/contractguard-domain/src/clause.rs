//! Clause module - document-ordered units of contract text

use std::fmt;

/// Whitespace for clause trimming and boundary detection
///
/// Unicode whitespace plus the ASCII information separators
/// (U+001C to U+001F), which extracted text uses as field and record
/// breaks.
pub fn is_clause_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// A contiguous run of contract text
///
/// Clauses are trimmed and never empty. The index records the clause's
/// position in the document, starting at zero.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    index: usize,
    text: String,
}

impl Clause {
    /// Create a clause from a raw fragment
    ///
    /// Returns `None` when the fragment is empty after trimming.
    ///
    /// # Examples
    ///
    /// ```
    /// use contractguard_domain::Clause;
    ///
    /// let clause = Clause::new(0, "  Payment is due in 30 days.  ").unwrap();
    /// assert_eq!(clause.text(), "Payment is due in 30 days.");
    /// assert!(Clause::new(1, " \n\t ").is_none());
    /// ```
    pub fn new(index: usize, fragment: &str) -> Option<Self> {
        let text = fragment.trim_matches(is_clause_whitespace);
        if text.is_empty() {
            return None;
        }
        Some(Self {
            index,
            text: text.to_string(),
        })
    }

    /// Position of the clause in the document
    pub fn index(&self) -> usize {
        self.index
    }

    /// Trimmed clause text
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_is_trimmed() {
        let clause = Clause::new(3, "\n  Governing law shall be Delaware.\t").unwrap();
        assert_eq!(clause.text(), "Governing law shall be Delaware.");
        assert_eq!(clause.index(), 3);
    }

    #[test]
    fn test_blank_fragment_rejected() {
        assert!(Clause::new(0, "").is_none());
        assert!(Clause::new(0, "   \r\n").is_none());
        assert!(Clause::new(0, "\u{1c}\u{1f} ").is_none());
    }

    #[test]
    fn test_separators_are_trimmed() {
        let clause = Clause::new(0, "\u{1e}Late fee applies.\u{1f}").unwrap();
        assert_eq!(clause.text(), "Late fee applies.");
    }

    #[test]
    fn test_clause_whitespace() {
        for c in [' ', '\t', '\n', '\u{a0}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            assert!(is_clause_whitespace(c), "{:?}", c);
        }
        assert!(!is_clause_whitespace('\u{1b}'));
        assert!(!is_clause_whitespace('a'));
    }
}
