//! Sequence extraction module.
//!
//! Provides extraction of fixed-length letter sequences from a normalized
//! word. Sequences are the keys of the sequence index.

use uniqseq_types::SequenceLength;

/// Extracts every `length`-byte window of `word`, left to right.
///
/// For a word shorter than `length`, no sequences are emitted.
/// For a word of length N, exactly N - length + 1 sequences are emitted.
///
/// The word is expected to be normalized ASCII; windows that would split a
/// multi-byte character are skipped.
///
/// # Example
///
/// ```
/// use uniqseq_core::analyzer::sequence::extract_sequences;
///
/// let mut sequences = Vec::new();
/// extract_sequences("carrots", 4, |s| sequences.push(s));
///
/// assert_eq!(sequences, ["carr", "arro", "rrot", "rots"]);
/// ```
#[inline(always)]
pub fn extract_sequences<'a, F>(word: &'a str, length: usize, mut callback: F)
where
    F: FnMut(&'a str),
{
    extract_sequences_with_pos(word, length, |sequence, _| callback(sequence));
}

/// Counts sequences without extracting them.
///
/// Returns 0 for words shorter than `length` and for a zero length.
#[inline(always)]
pub fn count_sequences(word: &str, length: usize) -> usize {
    if length == 0 || word.len() < length {
        0
    } else {
        word.len() - length + 1
    }
}

/// Extracts sequences with position information.
///
/// The callback receives (sequence, byte_offset) for each window.
#[inline(always)]
pub fn extract_sequences_with_pos<'a, F>(word: &'a str, length: usize, mut callback: F)
where
    F: FnMut(&'a str, usize),
{
    debug_assert!(word.is_ascii(), "sequence extraction expects ASCII input");

    for start in 0..count_sequences(word, length) {
        if let Some(sequence) = word.get(start..start + length) {
            callback(sequence, start);
        }
    }
}

/// Trait for types that can extract sequences.
///
/// The index is written against this trait so that alternative windowing
/// strategies can reuse the same accumulation code.
pub trait SequenceExtractor {
    /// Returns the length of the sequences produced.
    fn length(&self) -> usize;

    /// Extracts all sequences from a normalized word.
    fn extract<'a, F>(&self, word: &'a str, callback: F)
    where
        F: FnMut(&'a str);
}

/// Standard sliding-window extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowExtractor {
    length: SequenceLength,
}

impl SlidingWindowExtractor {
    /// Creates an extractor for the given length.
    pub const fn new(length: SequenceLength) -> Self {
        Self { length }
    }
}

impl SequenceExtractor for SlidingWindowExtractor {
    #[inline(always)]
    fn length(&self) -> usize {
        self.length.get()
    }

    #[inline(always)]
    fn extract<'a, F>(&self, word: &'a str, callback: F)
    where
        F: FnMut(&'a str),
    {
        extract_sequences(word, self.length.get(), callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(word: &str, length: usize) -> Vec<&str> {
        let mut out = Vec::new();
        extract_sequences(word, length, |s| out.push(s));
        out
    }

    #[test]
    fn extract_basic() {
        assert_eq!(collect("arrows", 4), ["arro", "rrow", "rows"]);
        assert_eq!(collect("arrows", 3), ["arr", "rro", "row", "ows"]);
    }

    #[test]
    fn extract_short_word() {
        assert!(collect("me", 3).is_empty());
        assert!(collect("", 4).is_empty());
        assert!(collect("abc", 4).is_empty());
    }

    #[test]
    fn extract_exact_length() {
        assert_eq!(collect("give", 4), ["give"]);
    }

    #[test]
    fn extract_length_one() {
        assert_eq!(collect("abca", 1), ["a", "b", "c", "a"]);
    }

    #[test]
    fn zero_length_yields_nothing() {
        assert!(collect("carrots", 0).is_empty());
        assert_eq!(count_sequences("carrots", 0), 0);
    }

    #[test]
    fn count_basic() {
        assert_eq!(count_sequences("carrots", 4), 4);
        assert_eq!(count_sequences("give", 4), 1);
        assert_eq!(count_sequences("me", 3), 0);
        assert_eq!(count_sequences("arrows", 3), 4);
    }

    #[test]
    fn extract_with_pos() {
        let mut results = Vec::new();
        extract_sequences_with_pos("carrots", 4, |s, pos| results.push((s, pos)));

        assert_eq!(
            results,
            [("carr", 0), ("arro", 1), ("rrot", 2), ("rots", 3)]
        );
    }

    #[test]
    fn repeated_windows_are_all_emitted() {
        // Deduplication is the index's job, not the extractor's.
        assert_eq!(collect("aaaaa", 4), ["aaaa", "aaaa"]);
    }

    #[test]
    fn sliding_window_extractor() {
        let length = SequenceLength::new(3).expect("valid length");
        let extractor = SlidingWindowExtractor::new(length);
        let mut sequences = Vec::new();
        extractor.extract("give", |s| sequences.push(s));

        assert_eq!(extractor.length(), 3);
        assert_eq!(sequences, ["giv", "ive"]);
    }
}
