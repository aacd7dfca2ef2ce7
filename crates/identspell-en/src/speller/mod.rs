// Dictionary lookup and word checking

pub mod cache;
pub mod checker;
#[cfg(feature = "look")]
pub mod look;
pub mod rollback;
pub mod wordlist;

use std::process::ExitStatus;

/// Failure to consult a dictionary oracle.
///
/// A word that is simply absent from the dictionary is not an error; oracles
/// report it as `Ok(false)`.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    /// The oracle backend could not be started or reached.
    #[error("dictionary oracle `{program}` is unavailable: {source}")]
    Unavailable {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The backend ran but failed for a reason other than "not found".
    #[error("dictionary oracle `{program}` failed ({status}): {stderr}")]
    Invocation {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

/// A dictionary oracle answers whether a word is a known entry.
///
/// Matching is exact and case-insensitive. Prefix matches never count.
/// Callers pass lowercase ASCII words.
pub trait Oracle {
    /// Returns `Ok(true)` if `word` is a dictionary entry, `Ok(false)` if it
    /// is not, and an error if the oracle itself failed.
    fn contains(&self, word: &str) -> Result<bool, OracleError>;
}

impl<O: Oracle + ?Sized> Oracle for &O {
    fn contains(&self, word: &str) -> Result<bool, OracleError> {
        (**self).contains(word)
    }
}

impl<O: Oracle + ?Sized> Oracle for Box<O> {
    fn contains(&self, word: &str) -> Result<bool, OracleError> {
        (**self).contains(word)
    }
}
