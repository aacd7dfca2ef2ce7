// IdentSpellHandle: the tokenize -> filter -> check pipeline
//
// The handle owns the oracle and the oracle cache, and creates a
// LexicalChecker on the fly in each call so the checker can borrow both
// without self-referential lifetimes. The cache sits behind a RefCell so
// that `&self` methods can memoize lookups.

use std::cell::RefCell;
use std::io::BufRead;
use std::path::Path;

use identspell_core::enums::{DEFAULT_CACHE_CAPACITY, MIN_CHECKED_WORD_LEN, Verdict};
use identspell_core::word::Word;
use tracing::debug;

use crate::speller::cache::{CachingOracle, OracleCache};
use crate::speller::checker::LexicalChecker;
#[cfg(feature = "look")]
use crate::speller::look::LookOracle;
use crate::speller::wordlist::WordListOracle;
use crate::speller::{Oracle, OracleError};
use crate::tokenizer::{self, TokenizeError, Tokens};

/// Errors surfaced to the orchestrating caller.
#[derive(Debug, thiserror::Error)]
pub enum IdentSpellError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("failed to read input: {0}")]
    Input(std::io::Error),
}

/// Owns a dictionary oracle and flags unknown words in identifier tokens.
pub struct IdentSpellHandle {
    oracle: Box<dyn Oracle>,
    /// `None` when memoization is disabled.
    cache: Option<RefCell<OracleCache>>,
}

impl IdentSpellHandle {
    /// Create a handle around any oracle. Lookups are memoized.
    pub fn new(oracle: Box<dyn Oracle>) -> Self {
        Self {
            oracle,
            cache: Some(RefCell::new(OracleCache::new(DEFAULT_CACHE_CAPACITY))),
        }
    }

    /// Load a one-word-per-line dictionary into memory.
    pub fn from_word_list_path(path: impl AsRef<Path>) -> Result<Self, IdentSpellError> {
        let oracle = WordListOracle::from_path(path)?;
        Ok(Self::new(Box::new(oracle)))
    }

    /// Query the `look` utility for every word.
    #[cfg(feature = "look")]
    pub fn with_look(oracle: LookOracle) -> Self {
        Self::new(Box::new(oracle))
    }

    pub fn set_cache_enabled(&mut self, enabled: bool) {
        match (enabled, self.cache.is_some()) {
            (true, false) => {
                self.cache = Some(RefCell::new(OracleCache::new(DEFAULT_CACHE_CAPACITY)));
            }
            (false, true) => self.cache = None,
            _ => {}
        }
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// `(hits, misses)` of the oracle cache, if enabled.
    pub fn cache_stats(&self) -> Option<(u64, u64)> {
        self.cache.as_ref().map(|c| c.borrow().stats())
    }

    /// Words of one token, lazily.
    pub fn tokens<'t>(&self, token: &'t str) -> Tokens<'t> {
        tokenizer::tokenize(token)
    }

    fn with_checker<R>(&self, f: impl FnOnce(&LexicalChecker<'_>) -> R) -> R {
        match &self.cache {
            Some(cache) => {
                let oracle = CachingOracle::new(self.oracle.as_ref(), cache);
                f(&LexicalChecker::new(&oracle))
            }
            None => f(&LexicalChecker::new(self.oracle.as_ref())),
        }
    }

    /// Check a lowercase word, with morphological roll-backs.
    pub fn is_known(&self, word: &str) -> Result<bool, IdentSpellError> {
        Ok(self.with_checker(|checker| checker.is_known(word))?)
    }

    pub fn verdict(&self, word: &str) -> Result<Verdict, IdentSpellError> {
        Ok(self.with_checker(|checker| checker.verdict(word))?)
    }

    /// Unknown words of one token, in the order they appear.
    ///
    /// Words shorter than [`MIN_CHECKED_WORD_LEN`] are never checked.
    pub fn check_token(&self, token: &str) -> Result<Vec<Word>, IdentSpellError> {
        self.with_checker(|checker| -> Result<Vec<Word>, IdentSpellError> {
            let mut flagged = Vec::new();
            for word in tokenizer::tokenize(token) {
                let word = word?;
                if word.len() < MIN_CHECKED_WORD_LEN {
                    continue;
                }
                if !checker.is_known(word.as_str())? {
                    debug!(token, word = %word, "unknown word");
                    flagged.push(word);
                }
            }
            Ok(flagged)
        })
    }

    /// Unknown words of every whitespace-delimited token in `text`.
    pub fn check_text(&self, text: &str) -> Result<Vec<Word>, IdentSpellError> {
        let mut flagged = Vec::new();
        for token in text.split_whitespace() {
            flagged.extend(self.check_token(token)?);
        }
        Ok(flagged)
    }

    /// Stream `reader` line by line, calling `on_flag` for each unknown word.
    ///
    /// Returns the number of flagged words.
    pub fn check_reader<R, F>(&self, reader: R, mut on_flag: F) -> Result<usize, IdentSpellError>
    where
        R: BufRead,
        F: FnMut(&Word) -> Result<(), IdentSpellError>,
    {
        let mut count = 0;
        for line in reader.lines() {
            let line = line.map_err(IdentSpellError::Input)?;
            for word in self.check_text(&line)? {
                on_flag(&word)?;
                count += 1;
            }
        }
        Ok(count)
    }
}
