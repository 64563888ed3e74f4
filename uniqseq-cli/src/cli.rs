//! CLI argument parsing for uniqseq

use std::path::PathBuf;

use clap::Parser;
use uniqseq_types::DEFAULT_SEQUENCE_LENGTH;

/// Word list used when neither `--input` nor `--url` is given.
pub const DEFAULT_DICTIONARY_URL: &str = "https://gist.githubusercontent.com/seanbiganski/8c657690b75a830e28557480690bb437/raw/061441e9a3253d6e890be410d0352eeeea40010a/dictionary%2520words";

#[derive(Parser, Debug)]
#[command(name = "uniqseq")]
#[command(version)]
#[command(
    about = "Find the letter sequences that occur in exactly one word of a dictionary",
    long_about = None
)]
pub struct Cli {
    /// Read the word list from a local file, one word per line
    #[arg(short, long, value_name = "PATH", conflicts_with = "url")]
    pub input: Option<PathBuf>,

    /// Download the word list from a URL (defaults to a public English word list)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Length of the extracted sequences
    // Kept as text so every bad value is reported as a configuration error.
    #[arg(
        short = 'n',
        long = "length",
        value_name = "N",
        default_value_t = DEFAULT_SEQUENCE_LENGTH.to_string(),
        allow_negative_numbers = true
    )]
    pub length: String,

    /// File receiving one unique sequence per line
    #[arg(long, value_name = "PATH", default_value = "sequences.txt")]
    pub sequences_out: PathBuf,

    /// File receiving the word for each line of the sequences file
    #[arg(long, value_name = "PATH", default_value = "words.txt")]
    pub words_out: PathBuf,

    /// Also save the downloaded word list to this path
    #[arg(long, value_name = "PATH", conflicts_with = "input")]
    pub save_download: Option<PathBuf>,

    /// Enable trace-level logging on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Where the word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Cli {
    pub fn source(&self) -> Source {
        match (&self.input, &self.url) {
            (Some(path), _) => Source::File(path.clone()),
            (None, Some(url)) => Source::Url(url.clone()),
            (None, None) => Source::Url(DEFAULT_DICTIONARY_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["uniqseq"]);
        assert_eq!(cli.length, "4");
        assert_eq!(cli.sequences_out, PathBuf::from("sequences.txt"));
        assert_eq!(cli.words_out, PathBuf::from("words.txt"));
        assert_eq!(cli.source(), Source::Url(DEFAULT_DICTIONARY_URL.to_string()));
        assert!(!cli.debug);
    }

    #[test]
    fn input_file() {
        let cli = Cli::parse_from(["uniqseq", "--input", "dict.txt", "-n", "3"]);
        assert_eq!(cli.source(), Source::File(PathBuf::from("dict.txt")));
        assert_eq!(cli.length, "3");
    }

    #[test]
    fn negative_length_parses() {
        let cli = Cli::parse_from(["uniqseq", "-n", "-2"]);
        assert_eq!(cli.length, "-2");
    }

    #[test]
    fn non_numeric_length_parses() {
        let cli = Cli::parse_from(["uniqseq", "-n", "abc"]);
        assert_eq!(cli.length, "abc");
        let cli = Cli::parse_from(["uniqseq", "--length", "99999999999999999999"]);
        assert_eq!(cli.length, "99999999999999999999");
    }

    #[test]
    fn input_conflicts_with_url() {
        let result = Cli::try_parse_from(["uniqseq", "-i", "a.txt", "-u", "http://example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn save_download_conflicts_with_input() {
        let result = Cli::try_parse_from(["uniqseq", "-i", "a.txt", "--save-download", "b.txt"]);
        assert!(result.is_err());
    }
}
