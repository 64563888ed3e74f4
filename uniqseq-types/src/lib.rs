//! Core types shared across the uniqseq workspace.
//!
//! This crate holds the small value types that both the extractor core and
//! the command-line front end speak:
//!
//! - **Configuration**: [`SequenceLength`] and [`ExtractorConfig`]
//! - **Identifiers**: [`WordId`] for interned dictionary words
//! - **Results**: [`UniqueSequence`] pairs and per-word [`IngestOutcome`]s
//! - **Errors**: [`ConfigError`] for rejected configuration

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Identifier of a distinct (original-cased) word in the dictionary.
///
/// Two input lines with byte-identical text share one id; differently cased
/// spellings of the same word get different ids.
pub type WordId = u32;

/// Sequence length used when none is configured.
pub const DEFAULT_SEQUENCE_LENGTH: usize = 4;

/// Largest accepted sequence length.
pub const MAX_SEQUENCE_LENGTH: usize = 64;

/// Errors raised while validating extractor configuration.
///
/// These are detected before any input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Sequence length was zero or negative.
    #[error("sequence length must be a positive integer, got {length}")]
    NonPositive {
        /// The rejected length.
        length: i64,
    },
    /// Sequence length exceeded [`MAX_SEQUENCE_LENGTH`].
    #[error("sequence length {length} exceeds the maximum of {max}")]
    TooLong {
        /// The rejected length.
        length: usize,
        /// The maximum accepted length.
        max: usize,
    },
    /// Sequence length text was not an integer that fits in 64 bits.
    #[error("sequence length must be a positive integer")]
    NotAnInteger,
    /// Two indexes with different sequence lengths cannot be combined.
    #[error("cannot merge an index of length {theirs} into an index of length {ours}")]
    LengthMismatch {
        /// Length of the receiving index.
        ours: usize,
        /// Length of the index being merged in.
        theirs: usize,
    },
}

/// A validated sequence length in `1..=MAX_SEQUENCE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct SequenceLength(usize);

impl SequenceLength {
    /// Validates `length` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositive`] for zero and
    /// [`ConfigError::TooLong`] above [`MAX_SEQUENCE_LENGTH`].
    pub const fn new(length: usize) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::NonPositive { length: 0 });
        }
        if length > MAX_SEQUENCE_LENGTH {
            return Err(ConfigError::TooLong {
                length,
                max: MAX_SEQUENCE_LENGTH,
            });
        }
        Ok(Self(length))
    }

    /// Returns the length as a `usize`.
    #[inline(always)]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for SequenceLength {
    fn default() -> Self {
        Self(DEFAULT_SEQUENCE_LENGTH)
    }
}

impl TryFrom<usize> for SequenceLength {
    type Error = ConfigError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for SequenceLength {
    type Error = ConfigError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(ConfigError::NonPositive { length: value });
        }
        // Anything that does not fit a usize is certainly too long.
        let length = usize::try_from(value).unwrap_or(usize::MAX);
        Self::new(length)
    }
}

impl FromStr for SequenceLength {
    type Err = ConfigError;

    /// Parses a decimal length, as given on a command line.
    ///
    /// Text that is not an `i64` is rejected with
    /// [`ConfigError::NotAnInteger`]; integers go through the same checks as
    /// [`TryFrom<i64>`].
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let value: i64 = text.trim().parse().map_err(|_| ConfigError::NotAnInteger)?;
        Self::try_from(value)
    }
}

impl From<SequenceLength> for usize {
    #[inline(always)]
    fn from(length: SequenceLength) -> Self {
        length.0
    }
}

impl fmt::Display for SequenceLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Extractor configuration.
///
/// Every index carries its own configuration, so indexes built with
/// different lengths can live side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractorConfig {
    /// Length of the extracted sequences.
    pub sequence_length: SequenceLength,
}

impl ExtractorConfig {
    /// Creates a configuration for the given sequence length.
    ///
    /// # Errors
    ///
    /// Propagates the validation errors of [`SequenceLength::new`].
    pub const fn with_length(length: usize) -> Result<Self, ConfigError> {
        match SequenceLength::new(length) {
            Ok(sequence_length) => Ok(Self { sequence_length }),
            Err(e) => Err(e),
        }
    }
}

/// A sequence produced by exactly one word, paired with that word.
///
/// Ordered by sequence first, so a sorted slice of these is in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueSequence<'a> {
    /// The lowercase sequence text.
    pub sequence: &'a str,
    /// The original-cased word that produced it.
    pub word: &'a str,
}

impl<'a> UniqueSequence<'a> {
    /// Creates a new pair.
    #[inline(always)]
    pub const fn new(sequence: &'a str, word: &'a str) -> Self {
        Self { sequence, word }
    }
}

impl fmt::Display for UniqueSequence<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.sequence, self.word)
    }
}

/// What happened to a single input line during ingestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Line was empty after trimming.
    Blank,
    /// Word contained a character outside `[A-Za-z]`.
    Rejected,
    /// Word was valid but shorter than the sequence length.
    TooShort,
    /// Word contributed sequences to the index.
    Indexed {
        /// Number of sequence windows taken from the word.
        sequences: usize,
        /// `true` if this spelling had not been seen before.
        new_word: bool,
    },
}

impl IngestOutcome {
    /// Returns `true` if the word contributed to the index.
    #[inline(always)]
    pub const fn is_indexed(self) -> bool {
        matches!(self, IngestOutcome::Indexed { .. })
    }
}
