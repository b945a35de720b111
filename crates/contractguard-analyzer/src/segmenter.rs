//! Clause segmentation
//!
//! A boundary is a `.`, `!` or `?` immediately followed by a run of
//! whitespace (including the U+001C to U+001F separators) and then an
//! ASCII uppercase letter. The punctuation stays with the clause it ends;
//! the whitespace run is dropped. This is a heuristic: "Mr. Smith" splits,
//! "ends here. and continues" does not.

use contractguard_domain::{is_clause_whitespace, Clause};

/// Splits contract text into clauses
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter;

impl Segmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }

    /// Lazily split `text` into raw, untrimmed fragments
    pub fn fragments<'a>(&self, text: &'a str) -> Fragments<'a> {
        Fragments {
            text,
            pos: 0,
            done: false,
        }
    }

    /// Split `text` into trimmed, non-empty clauses in document order
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        self.fragments(text)
            .filter(|fragment| !fragment.trim_matches(is_clause_whitespace).is_empty())
            .enumerate()
            .filter_map(|(index, fragment)| Clause::new(index, fragment))
            .collect()
    }
}

/// Iterator over the raw fragments between clause boundaries
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match find_boundary(self.text, self.pos) {
            Some((end, next_start)) => {
                let fragment = &self.text[self.pos..end];
                self.pos = next_start;
                Some(fragment)
            }
            None => {
                self.done = true;
                Some(&self.text[self.pos..])
            }
        }
    }
}

/// Find the next boundary at or after byte offset `from`
///
/// Returns the end of the current fragment (just past the punctuation) and
/// the start of the next one (the uppercase letter).
fn find_boundary(text: &str, from: usize) -> Option<(usize, usize)> {
    let rest = &text[from..];

    for (offset, c) in rest.char_indices() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }

        let end = from + offset + c.len_utf8();
        let after = &text[end..];
        let gap: usize = after
            .chars()
            .take_while(|c| is_clause_whitespace(*c))
            .map(char::len_utf8)
            .sum();
        if gap == 0 {
            continue;
        }

        let starts_upper = after[gap..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase());
        if starts_upper {
            return Some((end, end + gap));
        }
    }

    None
}
