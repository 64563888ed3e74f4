//! Parallel output files.
//!
//! The result is written as two line-aligned text files: line N of the
//! sequences file is produced only by the word on line N of the words file.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::index::{emit, Column, UniqueSequences};
use crate::Error;

/// Writes the sorted result to `sequences_path` and `words_path`.
///
/// Both files are created or truncated. Returns the number of lines written
/// to each.
///
/// # Errors
///
/// Returns [`Error::OutputWrite`] naming the file that failed.
pub fn write_outputs(
    result: &UniqueSequences<'_>,
    sequences_path: &Path,
    words_path: &Path,
) -> crate::Result<usize> {
    let emission = emit(result);

    let sequences = create(sequences_path)?;
    let words = create(words_path)?;

    emission
        .write_to(sequences, words)
        .map_err(|e| match e.column {
            Column::Sequences => Error::output(sequences_path, e.source),
            Column::Words => Error::output(words_path, e.source),
        })?;

    tracing::debug!(
        lines = emission.len(),
        sequences = %sequences_path.display(),
        words = %words_path.display(),
        "wrote output files"
    );
    Ok(emission.len())
}

fn create(path: &Path) -> crate::Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| Error::output(path, e))
}
