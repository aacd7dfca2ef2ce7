// Verdicts and fixed policy constants

/// Outcome of checking one word against the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The word, or one of its morphological roll-backs, is a dictionary entry.
    Known,
    /// No candidate matched; the word should be reported.
    Unknown,
}

impl Verdict {
    pub fn is_known(self) -> bool {
        self == Verdict::Known
    }
}

impl From<bool> for Verdict {
    fn from(known: bool) -> Self {
        if known { Verdict::Known } else { Verdict::Unknown }
    }
}

/// Words shorter than this are never checked; they are treated as
/// abbreviations or acronym letters.
pub const MIN_CHECKED_WORD_LEN: usize = 5;

/// Default number of memoized oracle results kept per handle.
pub const DEFAULT_CACHE_CAPACITY: usize = 1 << 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_from_bool() {
        assert_eq!(Verdict::from(true), Verdict::Known);
        assert_eq!(Verdict::from(false), Verdict::Unknown);
    }

    #[test]
    fn verdict_is_known() {
        assert!(Verdict::Known.is_known());
        assert!(!Verdict::Unknown.is_known());
    }
}
