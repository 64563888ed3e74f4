//! Selection of sequences produced by exactly one word.

use uniqseq_types::{SequenceLength, UniqueSequence};

use crate::index::emit::{emit, Emission};
use crate::index::types::SequenceIndex;

/// Sequences produced by exactly one word, sorted ascending by sequence.
///
/// Borrows its text from the index it was filtered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueSequences<'a> {
    entries: Vec<UniqueSequence<'a>>,
    sequence_length: SequenceLength,
}

/// Selects the entries of `index` whose word list has exactly one member.
///
/// Pure: the index is not modified and repeated calls give equal results.
/// The index keeps its keys ordered, so the output is already sorted.
pub fn filter_unique(index: &SequenceIndex) -> UniqueSequences<'_> {
    let entries: Vec<UniqueSequence<'_>> = index
        .iter()
        .filter_map(|(sequence, postings)| match postings {
            [only] => index
                .word(*only)
                .map(|word| UniqueSequence::new(sequence, word)),
            _ => None,
        })
        .collect();

    debug_assert!(entries.windows(2).all(|w| w[0].sequence < w[1].sequence));

    UniqueSequences {
        entries,
        sequence_length: index.sequence_length(),
    }
}

impl SequenceIndex {
    /// Shorthand for [`filter_unique`].
    #[inline]
    pub fn unique(&self) -> UniqueSequences<'_> {
        filter_unique(self)
    }
}

impl<'a> UniqueSequences<'a> {
    /// Number of unique sequences.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no sequence is unique.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length of every sequence in the result.
    #[inline(always)]
    pub fn sequence_length(&self) -> SequenceLength {
        self.sequence_length
    }

    /// Returns the sole word that produced `sequence`, if it is unique.
    pub fn get(&self, sequence: &str) -> Option<&'a str> {
        self.entries
            .binary_search_by(|entry| entry.sequence.cmp(sequence))
            .ok()
            .map(|i| self.entries[i].word)
    }

    /// Returns `true` if `sequence` is in the result.
    pub fn contains(&self, sequence: &str) -> bool {
        self.get(sequence).is_some()
    }

    /// The sorted pairs.
    #[inline(always)]
    pub fn as_slice(&self) -> &[UniqueSequence<'a>] {
        &self.entries
    }

    /// Iterates over the pairs in sequence order.
    pub fn iter(&self) -> std::slice::Iter<'_, UniqueSequence<'a>> {
        self.entries.iter()
    }

    /// Projects the result into two aligned columns. See [`emit`].
    pub fn emit(&self) -> Emission<'a> {
        emit(self)
    }
}

impl<'a, 'r> IntoIterator for &'r UniqueSequences<'a> {
    type Item = &'r UniqueSequence<'a>;
    type IntoIter = std::slice::Iter<'r, UniqueSequence<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
