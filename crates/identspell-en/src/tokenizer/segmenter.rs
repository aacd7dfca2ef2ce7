// Case segmentation of a single alphabetic fragment
//
// Sticky uppercase runs: a run of capitals is read as an abbreviation whose
// letters are emitted one by one, except the last capital, which stays
// pending because it may start the next natural word (`HTTPResponse`).

use identspell_core::character::{CharClass, classify, simple_lower};
use identspell_core::word::Word;

use super::TokenizeError;

/// Two-buffer accumulator for one fragment.
///
/// `lower` collects the word being built. `pending_upper` holds lowercased
/// capitals seen since `lower` was last flushed. Whenever `pending_upper` is
/// non-empty, `lower` is empty.
#[derive(Debug, Default, Clone)]
pub struct CaseSegmenter {
    lower: String,
    pending_upper: Vec<char>,
}

impl CaseSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed an uppercase letter.
    pub fn push_upper<E: Extend<Word>>(
        &mut self,
        c: char,
        out: &mut E,
    ) -> Result<(), TokenizeError> {
        if self.pending_upper.is_empty() && !self.lower.is_empty() {
            self.flush_lower(out)?;
        }
        self.pending_upper.push(simple_lower(c));
        Ok(())
    }

    /// Feed a lowercase letter.
    pub fn push_lower<E: Extend<Word>>(
        &mut self,
        c: char,
        out: &mut E,
    ) -> Result<(), TokenizeError> {
        self.resolve_pending(out)?;
        self.lower.push(c);
        Ok(())
    }

    /// End of fragment: emit whatever is still buffered and reset.
    pub fn finish<E: Extend<Word>>(&mut self, out: &mut E) -> Result<(), TokenizeError> {
        self.resolve_pending(out)?;
        if !self.lower.is_empty() {
            self.flush_lower(out)?;
        }
        Ok(())
    }

    /// Emit all pending capitals but the last as single-letter words and
    /// move the last one into the word buffer.
    fn resolve_pending<E: Extend<Word>>(&mut self, out: &mut E) -> Result<(), TokenizeError> {
        let Some(last) = self.pending_upper.pop() else {
            return Ok(());
        };
        for c in self.pending_upper.drain(..) {
            out.extend(Some(Word::new(c)?));
        }
        self.lower.push(last);
        Ok(())
    }

    fn flush_lower<E: Extend<Word>>(&mut self, out: &mut E) -> Result<(), TokenizeError> {
        out.extend(Some(Word::new(std::mem::take(&mut self.lower))?));
        Ok(())
    }
}

/// Segment one fragment, appending its words to `out`.
///
/// Fails fast on any character that is not an ASCII letter; nothing is
/// silently dropped.
pub(super) fn segment_into<E: Extend<Word>>(
    fragment: &str,
    out: &mut E,
) -> Result<(), TokenizeError> {
    let mut segmenter = CaseSegmenter::new();
    for c in fragment.chars() {
        match classify(c) {
            CharClass::Upper => segmenter.push_upper(c, out)?,
            CharClass::Lower => segmenter.push_lower(c, out)?,
            CharClass::Boundary => {
                return Err(TokenizeError::MalformedInput {
                    ch: c,
                    fragment: fragment.to_string(),
                });
            }
        }
    }
    segmenter.finish(out)
}

/// Segment a single alphabetic fragment into lowercase words.
///
/// `"TESTStringGO"` becomes `t e s t string g o`.
pub fn segment(fragment: &str) -> Result<Vec<Word>, TokenizeError> {
    let mut out = Vec::new();
    segment_into(fragment, &mut out)?;
    Ok(out)
}
