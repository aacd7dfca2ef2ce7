// Memoization of oracle lookups within a run

use std::cell::RefCell;

use hashbrown::HashMap;
use tracing::trace;

use crate::speller::{Oracle, OracleError};

/// Bounded memo of oracle results.
///
/// Both positive and negative answers are stored, since an oracle over a
/// fixed dictionary always gives the same answer. Errors are never stored.
/// Once `capacity` entries are held, new results are no longer recorded.
#[derive(Debug, Clone)]
pub struct OracleCache {
    capacity: usize,
    entries: HashMap<String, bool>,
    hits: u64,
    misses: u64,
}

impl OracleCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached answer for `word`, if any.
    pub fn get(&self, word: &str) -> Option<bool> {
        self.entries.get(word).copied()
    }

    /// Record the oracle's answer for `word`.
    pub fn set(&mut self, word: &str, known: bool) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(word) {
            return;
        }
        self.entries.insert(word.to_string(), known);
    }

    /// Look up `word` in the cache, consulting `oracle` on a miss.
    pub fn lookup_with_cache(
        &mut self,
        word: &str,
        oracle: &dyn Oracle,
    ) -> Result<bool, OracleError> {
        if let Some(known) = self.get(word) {
            self.hits += 1;
            trace!(word, known, "oracle cache hit");
            return Ok(known);
        }
        self.misses += 1;
        let known = oracle.contains(word)?;
        self.set(word, known);
        Ok(known)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(hits, misses)` since creation or the last `clear`.
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

/// Oracle adapter that routes lookups through a shared [`OracleCache`].
pub struct CachingOracle<'a> {
    inner: &'a dyn Oracle,
    cache: &'a RefCell<OracleCache>,
}

impl<'a> CachingOracle<'a> {
    pub fn new(inner: &'a dyn Oracle, cache: &'a RefCell<OracleCache>) -> Self {
        Self { inner, cache }
    }
}

impl Oracle for CachingOracle<'_> {
    fn contains(&self, word: &str) -> Result<bool, OracleError> {
        self.cache.borrow_mut().lookup_with_cache(word, self.inner)
    }
}
