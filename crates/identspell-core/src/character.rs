// Character classification for identifier tokenization
//
// Only ASCII Latin letters take part in words. Everything else (digits,
// punctuation, underscore, non-Latin scripts, symbols) is a boundary.

/// Character class as seen by the boundary splitter and case segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `A-Z`
    Upper,
    /// `a-z`
    Lower,
    /// Anything that terminates a fragment.
    Boundary,
}

/// Returns the class of a character.
pub fn classify(c: char) -> CharClass {
    if c.is_ascii_uppercase() {
        CharClass::Upper
    } else if c.is_ascii_lowercase() {
        CharClass::Lower
    } else {
        CharClass::Boundary
    }
}

/// Check whether a character belongs inside a word (ASCII Latin letter).
pub fn is_word_char(c: char) -> bool {
    classify(c) != CharClass::Boundary
}

/// Check whether a character terminates a fragment.
pub fn is_boundary(c: char) -> bool {
    classify(c) == CharClass::Boundary
}

/// Lowercase an ASCII letter. Other characters are returned unchanged.
pub fn simple_lower(c: char) -> char {
    c.to_ascii_lowercase()
}
