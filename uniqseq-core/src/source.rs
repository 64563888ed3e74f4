//! Line-oriented word sources.
//!
//! The index only needs a forward-only sequence of lines. Files are streamed
//! through a `BufReader`; buffers that are already in memory (a downloaded
//! dictionary, say) are split in place with `memchr`.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use memchr::memchr;

use crate::index::SequenceIndex;
use crate::Error;

/// Stand-in for a line that is not valid UTF-8.
///
/// It is not an ASCII letter, so such lines are always rejected as words.
pub const INVALID_LINE: &str = "\u{FFFD}";

/// Splits `bytes` on `\n` without allocating.
///
/// A trailing newline does not produce an empty final line. Carriage returns
/// are left in place; the normalizer trims them.
///
/// ```
/// use uniqseq_core::source::lines;
///
/// let words: Vec<_> = lines(b"arrows\r\ncarrots\ngive").collect();
/// assert_eq!(words, ["arrows\r", "carrots", "give"]);
/// ```
pub fn lines(bytes: &[u8]) -> Lines<'_> {
    Lines { bytes, pos: 0 }
}

/// Iterator returned by [`lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes: &'a [u8] = self.bytes;
        let rest = bytes.get(self.pos..).filter(|r| !r.is_empty())?;
        let line = match memchr(b'\n', rest) {
            Some(end) => {
                self.pos += end + 1;
                &rest[..end]
            }
            None => {
                self.pos = bytes.len();
                rest
            }
        };
        Some(std::str::from_utf8(line).unwrap_or(INVALID_LINE))
    }
}

/// Opens a word list for streaming.
///
/// # Errors
///
/// Returns [`Error::InputAcquisition`] naming the path if the file cannot
/// be opened.
pub fn open_word_file(path: &Path) -> crate::Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| Error::input(path.display().to_string(), e))?;
    Ok(BufReader::new(file))
}

impl SequenceIndex {
    /// Streams a word list file into the index, one word per line.
    ///
    /// Returns the number of lines read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InputAcquisition`] if the file cannot be opened or
    /// read.
    pub fn ingest_file(&mut self, path: &Path) -> crate::Result<u64> {
        let reader = open_word_file(path)?;
        self.ingest_reader(reader, &path.display().to_string())
    }
}
