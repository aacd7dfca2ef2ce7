// Lexical checker: dictionary lookup with morphological roll-backs

use identspell_core::enums::Verdict;
use tracing::debug;

use crate::speller::rollback::{ROLLBACK_RULES, RollbackRule, candidates};
use crate::speller::{Oracle, OracleError};

/// Decides whether a lowercase word is known, trying the word itself and
/// then each applicable [`RollbackRule`] against an injected oracle.
///
/// The word must already be lowercase. Mixed-case input is outside the
/// contract; whether it is accepted depends on the oracle.
pub struct LexicalChecker<'a> {
    oracle: &'a dyn Oracle,
    rules: &'a [RollbackRule],
}

impl<'a> LexicalChecker<'a> {
    /// Create a checker using the standard English roll-back rules.
    pub fn new(oracle: &'a dyn Oracle) -> Self {
        Self::with_rules(oracle, ROLLBACK_RULES)
    }

    pub fn with_rules(oracle: &'a dyn Oracle, rules: &'a [RollbackRule]) -> Self {
        Self { oracle, rules }
    }

    /// Returns `true` on the first candidate the oracle knows.
    ///
    /// Oracle failures are propagated; they never turn into "unknown".
    pub fn is_known(&self, word: &str) -> Result<bool, OracleError> {
        for candidate in candidates(word, self.rules) {
            if self.oracle.contains(&candidate)? {
                if candidate != word {
                    debug!(word, candidate = %candidate, "accepted via roll-back");
                }
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn verdict(&self, word: &str) -> Result<Verdict, OracleError> {
        self.is_known(word).map(Verdict::from)
    }
}
