//! Statistics and IndexStats.

use crate::index::types::SequenceIndex;

/// A snapshot of index statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Lines passed to `ingest_word`.
    pub lines: u64,
    /// Lines that were empty after trimming.
    pub blank_lines: u64,
    /// Words skipped for containing non-letter characters.
    pub rejected_words: u64,
    /// Eligible words shorter than the sequence length.
    pub short_words: u64,
    /// Words that contributed sequences, counting repeats.
    pub indexed_words: u64,
    /// Distinct original-cased words in the index.
    pub distinct_words: usize,
    /// Distinct sequences.
    pub sequences: usize,
    /// Sequences produced by exactly one word.
    pub unique_sequences: usize,
    /// Bytes of word text held by the arena.
    pub word_bytes: usize,
}

impl SequenceIndex {
    /// Returns index statistics.
    pub fn stats(&self) -> IndexStats {
        let c = self.counters;
        IndexStats {
            lines: c.lines,
            blank_lines: c.blank,
            rejected_words: c.rejected,
            short_words: c.too_short,
            indexed_words: c.indexed,
            distinct_words: self.words.len(),
            sequences: self.entries.len(),
            unique_sequences: self.entries.values().filter(|p| p.len() == 1).count(),
            word_bytes: self.words.text_bytes(),
        }
    }
}

impl IndexStats {
    /// Share of distinct sequences that are unique, in `0.0..=1.0`.
    pub fn unique_ratio(&self) -> f64 {
        if self.sequences == 0 {
            0.0
        } else {
            self.unique_sequences as f64 / self.sequences as f64
        }
    }
}

impl core::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} lines ({} indexed, {} rejected, {} too short, {} blank), {} distinct words, {} sequences, {} unique",
            self.lines,
            self.indexed_words,
            self.rejected_words,
            self.short_words,
            self.blank_lines,
            self.distinct_words,
            self.sequences,
            self.unique_sequences
        )
    }
}
