use std::process;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use uniqseq_core::{write_outputs, SequenceIndex};
use uniqseq_types::{ExtractorConfig, SequenceLength};

mod cli;
mod fetch;

use cli::{Cli, Source};

/// Initialize tracing subscriber; `--debug` overrides `RUST_LOG`
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.debug);

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Cli) -> Result<()> {
    // Validate before touching any input.
    let sequence_length: SequenceLength =
        args.length.parse().map_err(uniqseq_core::Error::from)?;
    let mut index = SequenceIndex::new(ExtractorConfig { sequence_length });

    match args.source() {
        Source::File(path) => {
            tracing::info!(path = %path.display(), "reading word list");
            index.ingest_file(&path)?;
        }
        Source::Url(url) => {
            tracing::info!(url = %url, "downloading word list");
            let bytes = fetch::fetch_word_list(&url)?;
            if let Some(path) = &args.save_download {
                fetch::save_download(path, &bytes)?;
            }
            index.ingest_bytes(&bytes);
        }
    }

    tracing::info!(stats = %index.stats(), "index built");

    let unique = index.unique();
    let written = write_outputs(&unique, &args.sequences_out, &args.words_out)?;
    tracing::info!(lines = written, "results written");

    println!(
        "Parsing complete! Check '{}' and '{}' for results.",
        args.sequences_out.display(),
        args.words_out.display()
    );
    Ok(())
}
