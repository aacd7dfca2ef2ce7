// In-memory sorted word list oracle

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::speller::{Oracle, OracleError};

/// Oracle backed by a sorted, deduplicated, lowercased word list.
///
/// Lookup is a binary search for the exact lowercased word.
#[derive(Debug, Clone, Default)]
pub struct WordListOracle {
    words: Vec<String>,
}

impl WordListOracle {
    /// Build from an iterator of entries. Entries are trimmed and lowercased;
    /// blank entries are dropped.
    pub fn from_words<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: Vec<String> = entries
            .into_iter()
            .filter_map(|e| {
                let e = e.as_ref().trim();
                (!e.is_empty()).then(|| e.to_lowercase())
            })
            .collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Read a one-entry-per-line word list.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, OracleError> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_words(lines))
    }

    /// Load a word list file such as `/usr/share/dict/words`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OracleError> {
        let path = path.as_ref();
        let oracle = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(path = %path.display(), entries = oracle.len(), "loaded word list");
        Ok(oracle)
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Oracle for WordListOracle {
    fn contains(&self, word: &str) -> Result<bool, OracleError> {
        let key = word.to_lowercase();
        Ok(self.words.binary_search(&key).is_ok())
    }
}
