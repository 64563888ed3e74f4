//! Index types and constants.

use std::collections::BTreeMap;

use smallvec::SmallVec;
use uniqseq_types::{ExtractorConfig, SequenceLength, WordId};

use crate::analyzer::normalizer::WordNormalizer;
use crate::analyzer::sequence::{SequenceExtractor, SlidingWindowExtractor};
use crate::arena::WordArena;

/// Words that produced one sequence, in first-seen order.
///
/// Most sequences in a real dictionary are produced by one or two words, so
/// those lists stay inline.
pub type Postings = SmallVec<[WordId; 2]>;

/// Per-line counters gathered while ingesting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct IngestCounters {
    pub lines: u64,
    pub blank: u64,
    pub rejected: u64,
    pub too_short: u64,
    pub indexed: u64,
}

/// Mapping from sequence to the distinct words that produced it.
///
/// Keys are kept ordered so the unique filter can walk them in output order.
pub struct SequenceIndex {
    pub(crate) entries: BTreeMap<Box<str>, Postings>,
    pub(crate) words: WordArena,
    pub(crate) config: ExtractorConfig,
    pub(crate) extractor: SlidingWindowExtractor,
    pub(crate) normalizer: WordNormalizer,
    /// Reusable buffer for the lowercase form of the current word
    pub(crate) norm_buf: String,
    pub(crate) counters: IngestCounters,
}

impl Default for SequenceIndex {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl SequenceIndex {
    /// Creates a new, empty index.
    pub fn new(config: ExtractorConfig) -> Self {
        tracing::debug!(sequence_length = %config.sequence_length, "creating sequence index");
        Self {
            entries: BTreeMap::new(),
            words: WordArena::new(),
            config,
            extractor: SlidingWindowExtractor::new(config.sequence_length),
            normalizer: WordNormalizer::new(),
            norm_buf: String::with_capacity(64),
            counters: IngestCounters::default(),
        }
    }

    /// Creates a new index for the given sequence length.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `length` is zero or too long.
    pub fn with_length(length: usize) -> crate::Result<Self> {
        Ok(Self::new(ExtractorConfig::with_length(length)?))
    }

    /// Returns the configuration the index was built with.
    #[inline(always)]
    pub fn config(&self) -> ExtractorConfig {
        self.config
    }

    /// Returns the length of every sequence key.
    #[inline(always)]
    pub fn sequence_length(&self) -> SequenceLength {
        self.config.sequence_length
    }

    /// Returns the number of distinct sequences.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sequence has been recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of distinct words that contributed sequences.
    #[inline(always)]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Looks up a word by id.
    #[inline(always)]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id)
    }

    /// Returns the word ids recorded for `sequence`.
    pub fn postings(&self, sequence: &str) -> Option<&[WordId]> {
        self.entries.get(sequence).map(|p| p.as_slice())
    }

    /// Returns the words that produced `sequence`, in first-seen order.
    pub fn words_for<'a>(&'a self, sequence: &str) -> impl Iterator<Item = &'a str> + 'a {
        let ids: &'a [WordId] = self.postings(sequence).unwrap_or(&[]);
        ids.iter().filter_map(move |&id| self.words.get(id))
    }

    /// Iterates over all (sequence, word ids) entries in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WordId])> + '_ {
        self.entries
            .iter()
            .map(|(sequence, postings)| (&**sequence, postings.as_slice()))
    }

    /// Removes all sequences and words, keeping the configuration.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.words.clear();
        self.norm_buf.clear();
        self.counters = IngestCounters::default();
    }

    /// Returns the extractor's window length; equal to `sequence_length`.
    #[inline(always)]
    pub(crate) fn window(&self) -> usize {
        self.extractor.length()
    }
}
