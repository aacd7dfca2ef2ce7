// Morphological roll-back rules for English inflections
//
// Each rule undoes one regular inflection by swapping a suffix. The rules
// are heuristics: irregular plurals and verbs are expected to be dictionary
// entries in their inflected form already.

/// Replace `suffix` at the end of a word with `replacement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollbackRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
}

impl RollbackRule {
    const fn new(suffix: &'static str, replacement: &'static str) -> Self {
        Self {
            suffix,
            replacement,
        }
    }

    /// Apply the rule to `word`.
    ///
    /// Returns `None` if the word does not end with the suffix, or if
    /// stripping it would leave nothing of the stem.
    pub fn apply(&self, word: &str) -> Option<String> {
        let stem = word.strip_suffix(self.suffix)?;
        if stem.is_empty() {
            return None;
        }
        let mut candidate = String::with_capacity(stem.len() + self.replacement.len());
        candidate.push_str(stem);
        candidate.push_str(self.replacement);
        Some(candidate)
    }
}

/// Roll-backs tried after the exact word, in order.
pub const ROLLBACK_RULES: &[RollbackRule] = &[
    // cherries -> cherry
    RollbackRule::new("ies", "y"),
    // passes -> pass
    RollbackRule::new("es", ""),
    // grapefruits -> grapefruit
    RollbackRule::new("s", ""),
    // twirled -> twirl
    RollbackRule::new("ed", ""),
    // circled -> circle
    RollbackRule::new("d", ""),
];

/// Dictionary candidates for `word`: the word itself followed by every
/// applicable roll-back, in rule order.
pub fn candidates<'a>(
    word: &'a str,
    rules: &'a [RollbackRule],
) -> impl Iterator<Item = String> + 'a {
    std::iter::once(word.to_string()).chain(rules.iter().filter_map(move |r| r.apply(word)))
}
