// Identifier tokenizer: boundary splitting followed by case segmentation
//
// A raw token such as `parseHTTPResponse_v2` is first cut into alphabetic
// fragments (`parseHTTPResponse`, `v`) and each fragment is then split on
// case transitions into lowercase words.

mod segmenter;

use std::collections::VecDeque;

use identspell_core::WordError;
use identspell_core::character::{is_boundary, is_word_char};
use identspell_core::word::Word;

pub use segmenter::{CaseSegmenter, segment};

/// Error raised while turning a token into words.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenizeError {
    /// The case segmenter was handed a character that is neither an upper-
    /// nor a lowercase ASCII letter.
    #[error("unexpected character {ch:?} in fragment {fragment:?}")]
    MalformedInput { ch: char, fragment: String },

    #[error(transparent)]
    Word(#[from] WordError),
}

// ============================================================================
// Stage A: boundary splitting
// ============================================================================

/// Iterator over the maximal ASCII-alphabetic runs of a token.
///
/// Boundary characters are dropped and never produce empty fragments.
#[derive(Debug, Clone)]
pub struct Fragments<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Fragments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let Some(start) = self.rest.find(is_word_char) else {
            self.rest = "";
            return None;
        };
        let tail = &self.rest[start..];
        let end = tail.find(is_boundary).unwrap_or(tail.len());
        let (fragment, rest) = tail.split_at(end);
        self.rest = rest;
        Some(fragment)
    }
}

impl std::iter::FusedIterator for Fragments<'_> {}

/// Split a token into its alphabetic fragments, left to right.
///
/// `"test_string_01"` yields `"test"`, `"string"`.
pub fn fragments(token: &str) -> Fragments<'_> {
    Fragments { rest: token }
}

// ============================================================================
// Stage B driver: lazy word sequence
// ============================================================================

/// Lazy sequence of the words of one token.
///
/// Each fragment is segmented only when the iterator reaches it. After the
/// first error the iterator yields nothing more.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    fragments: Fragments<'a>,
    pending: VecDeque<Word>,
    failed: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Result<Word, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.pop_front() {
                return Some(Ok(word));
            }
            if self.failed {
                return None;
            }
            let fragment = self.fragments.next()?;
            if let Err(e) = segmenter::segment_into(fragment, &mut self.pending) {
                self.failed = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}

impl std::iter::FusedIterator for Tokens<'_> {}

/// Tokenize one whitespace-delimited token into lowercase words.
///
/// The function is pure: calling it again with the same token restarts the
/// sequence from the beginning.
pub fn tokenize(token: &str) -> Tokens<'_> {
    Tokens {
        fragments: fragments(token),
        pending: VecDeque::new(),
        failed: false,
    }
}

/// Collect all words of a token.
pub fn words(token: &str) -> Result<Vec<Word>, TokenizeError> {
    tokenize(token).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(token: &str) -> Vec<String> {
        words(token)
            .unwrap()
            .into_iter()
            .map(Word::into_string)
            .collect()
    }

    // -- Stage A --

    #[test]
    fn fragments_with_underscore() {
        assert_eq!(
            fragments("test_string").collect::<Vec<_>>(),
            vec!["test", "string"]
        );
    }

    #[test]
    fn fragments_with_numbers() {
        assert_eq!(
            fragments("test_string_01").collect::<Vec<_>>(),
            vec!["test", "string"]
        );
    }

    #[test]
    fn fragments_with_symbols() {
        assert_eq!(
            fragments("test(string)").collect::<Vec<_>>(),
            vec!["test", "string"]
        );
    }

    #[test]
    fn fragments_with_non_latin_script() {
        assert_eq!(
            fragments("test\u{304C}string\u{3088}").collect::<Vec<_>>(),
            vec!["test", "string"]
        );
    }

    #[test]
    fn fragments_keep_case() {
        assert_eq!(
            fragments("self.parseHTTP()").collect::<Vec<_>>(),
            vec!["self", "parseHTTP"]
        );
    }

    #[test]
    fn fragments_of_empty_token() {
        assert_eq!(fragments("").count(), 0);
    }

    #[test]
    fn fragments_of_boundary_only_token() {
        assert_eq!(fragments("__01:()--").count(), 0);
        assert_eq!(fragments("\u{3042}\u{3044}").count(), 0);
    }

    #[test]
    fn fragments_is_fused() {
        let mut it = fragments("a1");
        assert_eq!(it.next(), Some("a"));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    // -- tokenize --

    #[test]
    fn snake_case() {
        assert_eq!(strs("test_string"), vec!["test", "string"]);
    }

    #[test]
    fn pascal_case() {
        assert_eq!(strs("TestString"), vec!["test", "string"]);
    }

    #[test]
    fn camel_case() {
        assert_eq!(strs("testString"), vec!["test", "string"]);
    }

    #[test]
    fn with_numbers() {
        assert_eq!(strs("test_string_01"), vec!["test", "string"]);
    }

    #[test]
    fn with_non_alphabets() {
        assert_eq!(strs("test\u{304C}String\u{3067}"), vec!["test", "string"]);
    }

    #[test]
    fn with_capitalized_prefix() {
        assert_eq!(strs("TESTString"), vec!["t", "e", "s", "t", "string"]);
    }

    #[test]
    fn screaming_snake_case() {
        assert_eq!(
            strs("TEST_STRING"),
            vec!["t", "e", "s", "t", "s", "t", "r", "i", "n", "g"]
        );
    }

    #[test]
    fn trailing_capitals() {
        assert_eq!(
            strs("TESTStringGO"),
            vec!["t", "e", "s", "t", "string", "g", "o"]
        );
    }

    #[test]
    fn embedded_capitals() {
        assert_eq!(
            strs("testSTRINGGo"),
            vec!["test", "s", "t", "r", "i", "n", "g", "go"]
        );
    }

    #[test]
    fn lowercase_word_is_returned_unchanged() {
        assert_eq!(strs("grapefruit"), vec!["grapefruit"]);
    }

    #[test]
    fn token_without_letters_yields_nothing() {
        for token in ["", "0123", "__", "->", "\u{3042}", "(){}[]"] {
            assert!(words(token).unwrap().is_empty(), "{token:?}");
        }
    }

    #[test]
    fn words_reconstruct_alphabetic_characters() {
        for token in [
            "parseHTTPResponse_v2",
            "TESTStringGO",
            "a1B2c3",
            "XMLHttpRequest",
            "self.config['MaxRetries']",
        ] {
            let joined: String = strs(token).concat();
            let expected: String = token
                .chars()
                .filter(char::is_ascii_alphabetic)
                .map(|c| c.to_ascii_lowercase())
                .collect();
            assert_eq!(joined, expected, "{token:?}");
        }
    }

    #[test]
    fn tokenize_is_restartable() {
        let first: Vec<_> = tokenize("XMLHttpRequest").collect();
        let second: Vec<_> = tokenize("XMLHttpRequest").collect();
        assert_eq!(first, second);

        let it = tokenize("fooBarBaz");
        let cloned = it.clone();
        assert_eq!(it.count(), cloned.count());
    }

    #[test]
    fn tokenize_is_lazy_per_fragment() {
        let mut it = tokenize("alpha_betaGamma");
        assert_eq!(it.next().unwrap().unwrap(), "alpha");
        // Second fragment has not been segmented yet.
        assert!(it.pending.is_empty());
        assert_eq!(it.next().unwrap().unwrap(), "beta");
        assert_eq!(it.pending.len(), 1);
        assert_eq!(it.next().unwrap().unwrap(), "gamma");
        assert!(it.next().is_none());
    }
}
