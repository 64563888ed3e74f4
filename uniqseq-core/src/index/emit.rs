//! Projection of the result into two aligned columns.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;

use crate::index::filter::UniqueSequences;

/// One of the two output columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// The sequence column.
    Sequences,
    /// The word column.
    Words,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Column::Sequences => "sequences",
            Column::Words => "words",
        })
    }
}

/// An I/O failure while writing one column.
#[derive(Error, Debug)]
#[error("failed to write the {column} column")]
pub struct ColumnError {
    /// Column whose writer failed.
    pub column: Column,
    /// Underlying I/O error.
    #[source]
    pub source: io::Error,
}

/// Sequences and their words as two parallel, equally long lists.
///
/// `sequences[i]` was produced only by `words[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Emission<'a> {
    /// Sequence column, ascending.
    pub sequences: Vec<&'a str>,
    /// Word column, aligned with `sequences`.
    pub words: Vec<&'a str>,
}

/// Splits the sorted result into its sequence and word columns.
///
/// No filtering or reordering happens here.
pub fn emit<'a>(result: &UniqueSequences<'a>) -> Emission<'a> {
    let (sequences, words) = result
        .iter()
        .map(|entry| (entry.sequence, entry.word))
        .unzip();
    Emission { sequences, words }
}

impl<'a> Emission<'a> {
    /// Number of lines in each column.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Returns `true` if both columns are empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Iterates over aligned (sequence, word) rows.
    pub fn rows(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.sequences.iter().copied().zip(self.words.iter().copied())
    }

    /// Writes one sequence per line to `sequences` and the matching word per
    /// line to `words`, then flushes both.
    ///
    /// # Errors
    ///
    /// Returns a [`ColumnError`] naming the writer that failed.
    pub fn write_to<A, B>(&self, mut sequences: A, mut words: B) -> Result<(), ColumnError>
    where
        A: Write,
        B: Write,
    {
        let on_sequences = |source| ColumnError {
            column: Column::Sequences,
            source,
        };
        let on_words = |source| ColumnError {
            column: Column::Words,
            source,
        };

        for (sequence, word) in self.rows() {
            writeln!(sequences, "{sequence}").map_err(on_sequences)?;
            writeln!(words, "{word}").map_err(on_words)?;
        }
        sequences.flush().map_err(on_sequences)?;
        words.flush().map_err(on_words)
    }
}
