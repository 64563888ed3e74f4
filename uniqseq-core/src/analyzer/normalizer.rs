//! Word validation and case folding.
//!
//! A raw dictionary line goes through three steps before it can be cut into
//! sequences:
//!
//! 1. surrounding ASCII whitespace and NUL bytes are trimmed,
//! 2. the word is rejected outright if any byte is not an ASCII letter,
//! 3. the surviving word is lowercased into a reusable buffer.
//!
//! The trimmed original is returned alongside so callers can record the word
//! with its input casing.

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Result of normalizing one raw line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized<'a> {
    /// Nothing left after trimming.
    Blank,
    /// Contains a byte outside `[A-Za-z]`.
    Rejected(&'a str),
    /// Eligible word; the trimmed original casing is carried here and the
    /// lowercase form has been written to the output buffer.
    Word(&'a str),
}

/// Validates dictionary words and folds them to lowercase.
///
/// # Examples
///
/// ```
/// use uniqseq_core::analyzer::normalizer::{Normalized, WordNormalizer};
///
/// let normalizer = WordNormalizer::new();
/// let mut buf = String::new();
///
/// assert_eq!(normalizer.normalize_into("  Carrots\n", &mut buf), Normalized::Word("Carrots"));
/// assert_eq!(buf, "carrots");
///
/// assert_eq!(normalizer.normalize_into("Isn't", &mut buf), Normalized::Rejected("Isn't"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Normalizes `raw` into `out`.
    ///
    /// `out` is cleared first and only holds meaningful content when
    /// [`Normalized::Word`] is returned.
    #[inline]
    pub fn normalize_into<'a>(&self, raw: &'a str, out: &mut String) -> Normalized<'a> {
        out.clear();

        let word = raw.trim_matches(is_padding);
        if word.is_empty() {
            return Normalized::Blank;
        }
        if !is_eligible(word) {
            return Normalized::Rejected(word);
        }

        out.reserve(word.len());
        // Every byte is an ASCII letter, so each maps to exactly one char.
        out.extend(
            word.bytes()
                .map(|b| LOWERCASE_TABLE[b as usize] as char),
        );
        Normalized::Word(word)
    }

    /// Normalizes `raw` and returns the lowercase form, or `None` if the
    /// word is blank or ineligible.
    pub fn normalize(&self, raw: &str) -> Option<String> {
        let mut out = String::with_capacity(raw.len());
        match self.normalize_into(raw, &mut out) {
            Normalized::Word(_) => Some(out),
            Normalized::Blank | Normalized::Rejected(_) => None,
        }
    }
}

/// Bytes stripped from both ends of a line: ASCII whitespace, vertical tab
/// and NUL. Unicode spaces such as U+00A0 are kept, so the word is rejected.
#[inline(always)]
fn is_padding(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\x0b' || c == '\0'
}

/// Returns `true` if every byte of `word` is an ASCII letter.
///
/// Digits, punctuation, apostrophes, inner whitespace and any non-ASCII
/// character make a word ineligible.
#[inline(always)]
pub fn is_eligible(word: &str) -> bool {
    word.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(input: &str) -> Option<String> {
        WordNormalizer::new().normalize(input)
    }

    #[test]
    fn lowercases_letters() {
        assert_eq!(norm("HELLO").as_deref(), Some("hello"));
        assert_eq!(norm("HeLlO").as_deref(), Some("hello"));
        assert_eq!(norm("carrots").as_deref(), Some("carrots"));
    }

    #[test]
    fn full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), Some(lower));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let n = WordNormalizer::new();
        let mut buf = String::new();
        assert_eq!(n.normalize_into("\t arrows \r\n", &mut buf), Normalized::Word("arrows"));
        assert_eq!(buf, "arrows");
    }

    #[test]
    fn trims_vertical_tab_and_nul() {
        let n = WordNormalizer::new();
        let mut buf = String::new();
        assert_eq!(n.normalize_into("\x0bgive\x0b", &mut buf), Normalized::Word("give"));
        assert_eq!(n.normalize_into("give\0", &mut buf), Normalized::Word("give"));
        assert_eq!(n.normalize_into("\0\x0c\0", &mut buf), Normalized::Blank);
    }

    #[test]
    fn unicode_spaces_are_not_trimmed() {
        let n = WordNormalizer::new();
        let mut buf = String::new();
        assert_eq!(
            n.normalize_into("\u{a0}carrots\u{a0}", &mut buf),
            Normalized::Rejected("\u{a0}carrots\u{a0}")
        );
        assert_eq!(
            n.normalize_into("\u{2003}arrows", &mut buf),
            Normalized::Rejected("\u{2003}arrows")
        );
        assert_eq!(n.normalize_into("\u{3000}", &mut buf), Normalized::Rejected("\u{3000}"));
    }

    #[test]
    fn keeps_original_casing() {
        let n = WordNormalizer::new();
        let mut buf = String::new();
        assert_eq!(n.normalize_into("Isabel", &mut buf), Normalized::Word("Isabel"));
        assert_eq!(buf, "isabel");
    }

    #[test]
    fn blank_lines() {
        let n = WordNormalizer::new();
        let mut buf = String::from("stale");
        assert_eq!(n.normalize_into("", &mut buf), Normalized::Blank);
        assert_eq!(n.normalize_into("   \t", &mut buf), Normalized::Blank);
        assert!(buf.is_empty());
    }

    #[test]
    fn rejects_digits() {
        assert_eq!(norm("18th"), None);
        assert_eq!(norm("abc1"), None);
    }

    #[test]
    fn rejects_punctuation_and_apostrophes() {
        assert_eq!(norm("Isn't"), None);
        assert_eq!(norm("co-op"), None);
        assert_eq!(norm("e.g"), None);
    }

    #[test]
    fn rejects_inner_whitespace() {
        assert_eq!(norm("ice cream"), None);
    }

    #[test]
    fn rejects_non_ascii() {
        assert_eq!(norm("café"), None);
        assert_eq!(norm("naïve"), None);
        assert_eq!(norm("\u{FFFD}"), None);
    }

    #[test]
    fn reuses_buffer() {
        let n = WordNormalizer::new();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        n.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        n.normalize_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn idempotent() {
        for s in ["Carrots", "arrows", "GIVE"] {
            let once = norm(s).expect("eligible");
            let twice = norm(&once).expect("eligible");
            assert_eq!(once, twice);
        }
    }
}
