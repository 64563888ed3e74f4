//! Finds the letter sequences that belong to exactly one word.
//!
//! Given a word list, every eligible word (ASCII letters only) is lowercased
//! and cut into all of its contiguous windows of a fixed length. The
//! [`SequenceIndex`] records which distinct words produced each window;
//! [`filter_unique`] keeps the windows produced by a single word, sorted by
//! sequence, and [`emit`] splits them into the two aligned columns that
//! [`write_outputs`] saves as `sequences.txt` and `words.txt`.
//!
//! ```
//! use uniqseq_core::{build_index, filter_unique};
//! use uniqseq_types::ExtractorConfig;
//!
//! let words = ["arrows", "18th", "carrots", "give", "me", "Isn't"];
//! let index = build_index(words, ExtractorConfig::default());
//! let unique = filter_unique(&index);
//!
//! let emission = unique.emit();
//! assert_eq!(emission.sequences, ["carr", "give", "rots", "rows", "rrot", "rrow"]);
//! assert_eq!(emission.words, ["carrots", "give", "carrots", "arrows", "carrots", "arrows"]);
//! ```

pub mod analyzer;
pub mod arena;
pub mod error;
pub mod index;
pub mod sink;
pub mod source;

pub use error::{Error, Result};
pub use index::{build_index, emit, filter_unique, Emission, IndexStats, SequenceIndex, UniqueSequences};
pub use sink::write_outputs;
