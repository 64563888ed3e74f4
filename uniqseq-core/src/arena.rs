//! Interning Arena for Dictionary Words
//!
//! Stores every distinct word once in a single contiguous buffer. Words are
//! referenced by [`WordId`], which indexes a table of (offset, length) spans.
//!
//! ## Memory Layout
//!
//! ```text
//! Arena Buffer: [arrows][carrots][give][Carrots]...[free space]
//!               ^       ^        ^     ^
//! Spans:       (0,6)   (6,7)    (13,4) (17,7) ...
//! ```
//!
//! ## Interning
//!
//! Lookups go through an `FxHashMap` from the word's hash to the ids sharing
//! that hash. Candidates are confirmed by comparing bytes, so a collision
//! costs a comparison and never merges two words. Comparison is exact:
//! `"Carrots"` and `"carrots"` are different words.

use std::hash::BuildHasher;

use rustc_hash::{FxBuildHasher, FxHashMap};
use smallvec::SmallVec;
use uniqseq_types::WordId;

/// Word reference - 8 bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordSpan {
    offset: u32,
    len: u32,
}

impl WordSpan {
    /// Creates a new word span.
    #[inline(always)]
    pub const fn new(offset: u32, len: u32) -> Self {
        Self { offset, len }
    }

    /// Returns the byte offset in the arena.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Returns the byte length.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len as usize
    }
}

/// Bump-allocated, deduplicating store of original-cased words.
pub struct WordArena {
    /// Contiguous storage buffer
    buffer: String,
    /// Word spans, indexed by `WordId`
    spans: Vec<WordSpan>,
    /// Word hash -> ids with that hash
    lookup: FxHashMap<u64, SmallVec<[WordId; 1]>>,
    hasher: FxBuildHasher,
}

impl Default for WordArena {
    fn default() -> Self {
        Self::new()
    }
}

impl WordArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self::with_capacity(64 * 1024, 1024)
    }

    /// Creates a new arena with pre-allocated capacity.
    pub fn with_capacity(buffer_cap: usize, word_cap: usize) -> Self {
        Self {
            buffer: String::with_capacity(buffer_cap),
            spans: Vec::with_capacity(word_cap),
            lookup: FxHashMap::default(),
            hasher: FxBuildHasher,
        }
    }

    /// Returns the number of distinct words stored.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if no words are stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Total bytes of word text held.
    #[inline(always)]
    pub fn text_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Clears all words but keeps capacity.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.spans.clear();
        self.lookup.clear();
    }

    /// Returns the id of `word`, storing it first if it is new.
    ///
    /// The flag is `true` when the word was not present before this call.
    /// Returns `None` only if the arena would outgrow 32-bit offsets or ids.
    pub fn intern(&mut self, word: &str) -> Option<(WordId, bool)> {
        let hash = self.hasher.hash_one(word);

        if let Some(ids) = self.lookup.get(&hash) {
            for &id in ids {
                if self.get(id) == Some(word) {
                    return Some((id, false));
                }
            }
        }

        let id = WordId::try_from(self.spans.len()).ok()?;
        let offset = u32::try_from(self.buffer.len()).ok()?;
        let len = u32::try_from(word.len()).ok()?;
        offset.checked_add(len)?;

        self.buffer.push_str(word);
        self.spans.push(WordSpan::new(offset, len));
        self.lookup.entry(hash).or_default().push(id);
        Some((id, true))
    }

    /// Returns the id of `word` if it has been interned.
    pub fn find(&self, word: &str) -> Option<WordId> {
        let hash = self.hasher.hash_one(word);
        self.lookup
            .get(&hash)?
            .iter()
            .copied()
            .find(|&id| self.get(id) == Some(word))
    }

    /// Gets a word by id.
    #[inline(always)]
    pub fn get(&self, id: WordId) -> Option<&str> {
        let span = self.spans.get(id as usize)?;
        let start = span.offset();
        self.buffer.get(start..start + span.len())
    }

    /// Iterates over all words in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &str)> + '_ {
        self.spans.iter().enumerate().map(move |(id, span)| {
            let start = span.offset();
            (id as WordId, &self.buffer[start..start + span.len()])
        })
    }
}
