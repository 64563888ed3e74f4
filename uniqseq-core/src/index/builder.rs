//! Index building logic.

use std::collections::BTreeMap;
use std::io::BufRead;

use smallvec::smallvec;
use uniqseq_types::{ConfigError, ExtractorConfig, IngestOutcome, WordId};

use crate::analyzer::normalizer::Normalized;
use crate::analyzer::sequence::SequenceExtractor;
use crate::index::types::{Postings, SequenceIndex};
use crate::source::{lines, INVALID_LINE};
use crate::Error;

/// Builds an index from an ordered list of raw words.
///
/// Ingestion order only decides which casing variant is stored first; the
/// unique-sequence result does not depend on it.
///
/// # Example
///
/// ```
/// use uniqseq_core::{build_index, filter_unique};
/// use uniqseq_types::ExtractorConfig;
///
/// let index = build_index(["arrows", "carrots"], ExtractorConfig::default());
/// let unique = filter_unique(&index);
///
/// assert_eq!(unique.get("rrow"), Some("arrows"));
/// assert_eq!(unique.get("arro"), None); // shared by both words
/// ```
pub fn build_index<I>(words: I, config: ExtractorConfig) -> SequenceIndex
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut index = SequenceIndex::new(config);
    index.extend(words);
    index
}

impl SequenceIndex {
    /// Adds one raw dictionary line to the index.
    ///
    /// The line is trimmed; blank lines and words containing anything other
    /// than ASCII letters are skipped. Eligible words are lowercased and
    /// every window of the configured length is recorded against the
    /// original-cased word, at most once per sequence.
    pub fn ingest_word(&mut self, raw: &str) -> IngestOutcome {
        self.counters.lines += 1;

        let word = match self.normalizer.normalize_into(raw, &mut self.norm_buf) {
            Normalized::Blank => {
                self.counters.blank += 1;
                return IngestOutcome::Blank;
            }
            Normalized::Rejected(word) => {
                tracing::trace!(word, "skipping word with non-letter characters");
                self.counters.rejected += 1;
                return IngestOutcome::Rejected;
            }
            Normalized::Word(word) => word,
        };

        if self.norm_buf.len() < self.window() {
            self.counters.too_short += 1;
            return IngestOutcome::TooShort;
        }

        let Some((id, new_word)) = self.words.intern(word) else {
            tracing::warn!(word, "word arena is full, skipping word");
            self.counters.rejected += 1;
            return IngestOutcome::Rejected;
        };

        let entries = &mut self.entries;
        let mut sequences = 0usize;
        self.extractor.extract(&self.norm_buf, |sequence| {
            sequences += 1;
            record(entries, sequence, id, new_word);
        });

        self.counters.indexed += 1;
        IngestOutcome::Indexed {
            sequences,
            new_word,
        }
    }

    /// Streams lines from `reader` into the index.
    ///
    /// Only the growing index is kept in memory. Lines that are not valid
    /// UTF-8 count as rejected words. `origin` names the source in errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputAcquisition`] if reading fails.
    pub fn ingest_reader<R: BufRead>(&mut self, mut reader: R, origin: &str) -> crate::Result<u64> {
        let mut buf = Vec::with_capacity(64);
        let mut read = 0u64;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| Error::input(origin, e))?;
            if n == 0 {
                break;
            }
            let line = std::str::from_utf8(&buf).unwrap_or(INVALID_LINE);
            self.ingest_word(line);
            read += 1;
        }

        tracing::debug!(origin, lines = read, stats = %self.stats(), "finished reading word list");
        Ok(read)
    }

    /// Ingests an in-memory buffer of newline-separated words.
    ///
    /// Returns the number of lines seen.
    pub fn ingest_bytes(&mut self, bytes: &[u8]) -> u64 {
        let mut read = 0u64;
        for line in lines(bytes) {
            self.ingest_word(line);
            read += 1;
        }
        tracing::debug!(lines = read, stats = %self.stats(), "finished ingesting buffer");
        read
    }

    /// Merges another index into this one.
    ///
    /// Word lists are concatenated per sequence, this index's words first,
    /// and each word is still recorded at most once per sequence. The set of
    /// unique sequences afterwards is the same as if all input had been
    /// ingested into a single index, whichever side is merged into which.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the sequence lengths differ.
    pub fn merge(&mut self, other: SequenceIndex) -> crate::Result<()> {
        if self.sequence_length() != other.sequence_length() {
            return Err(ConfigError::LengthMismatch {
                ours: self.sequence_length().get(),
                theirs: other.sequence_length().get(),
            }
            .into());
        }

        let remap: Vec<Option<WordId>> = other
            .words
            .iter()
            .map(|(_, word)| self.words.intern(word).map(|(id, _)| id))
            .collect();

        for (sequence, theirs) in other.entries {
            let mapped = theirs
                .iter()
                .filter_map(|&id| remap.get(id as usize).copied().flatten());

            match self.entries.get_mut(&sequence) {
                Some(ours) => {
                    for id in mapped {
                        if !ours.contains(&id) {
                            ours.push(id);
                        }
                    }
                }
                None => {
                    // Distinct words in `other` map to distinct ids here.
                    let postings: Postings = mapped.collect();
                    if !postings.is_empty() {
                        self.entries.insert(sequence, postings);
                    }
                }
            }
        }

        let theirs = other.counters;
        self.counters.lines += theirs.lines;
        self.counters.blank += theirs.blank;
        self.counters.rejected += theirs.rejected;
        self.counters.too_short += theirs.too_short;
        self.counters.indexed += theirs.indexed;
        Ok(())
    }
}

impl<S: AsRef<str>> Extend<S> for SequenceIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.ingest_word(word.as_ref());
        }
    }
}

/// Records `id` under `sequence`, creating the entry on first insert.
#[inline(always)]
fn record(entries: &mut BTreeMap<Box<str>, Postings>, sequence: &str, id: WordId, new_word: bool) {
    match entries.get_mut(sequence) {
        Some(postings) => {
            // A word seen for the first time can only collide with an earlier
            // window of itself, which is always the last entry.
            let seen = if new_word {
                postings.last() == Some(&id)
            } else {
                postings.contains(&id)
            };
            if !seen {
                postings.push(id);
            }
        }
        None => {
            entries.insert(sequence.into(), smallvec![id]);
        }
    }
}
