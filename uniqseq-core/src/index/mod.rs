//! Sequence indexing infrastructure.
//!
//! The index maps every extracted sequence to the distinct words that
//! produced it. It is built in one pass over the word list, then queried for
//! the sequences that exactly one word produced.
//!
//! Memory Layout:
//! - Word text lives once in an interning arena; posting lists hold 4-byte
//!   [`WordId`](uniqseq_types::WordId)s
//! - Posting lists of one or two words stay inline (`SmallVec`)
//! - Keys are held in a `BTreeMap`, so filtering walks them in output order
//!
//! Threading:
//! - [`SequenceIndex`] keeps reusable mutable buffers and is built from a
//!   single thread. Independently built indexes can be combined with
//!   [`SequenceIndex::merge`].

mod builder;
mod emit;
mod filter;
mod stats;
mod types;

pub use builder::build_index;
pub use emit::{emit, Column, ColumnError, Emission};
pub use filter::{filter_unique, UniqueSequences};
pub use stats::IndexStats;
pub use types::{Postings, SequenceIndex};
