//! Dictionary Benchmarking Tool
//!
//! Measures the sequence pipeline on a real word list so changes to the
//! index can be compared on production-sized input.
//!
//! ## What It Benchmarks
//!
//! 1. **Ingest**: building a [`SequenceIndex`] from every line of the file
//! 2. **Filter**: selecting the sequences produced by exactly one word
//! 3. **Emit**: projecting the result into its two output columns
//!
//! ## Usage
//!
//! ```bash
//! # Default sequence length (4)
//! ./target/release/dict_bench /path/to/words.txt
//!
//! # Custom sequence length
//! ./target/release/dict_bench /path/to/words.txt 3
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Ingest ===
//! --------------------------------
//! Mode        : Ingest
//! Elapsed     : 0.092 s
//! Throughput  : 10.41 MiB/s
//! Items       : 466_550
//! Items/sec   : 5_071_195
//! --------------------------------
//! ```
//!
//! Run with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::fs;
use std::process;
use std::time::{Duration, Instant};

use uniqseq_core::{filter_unique, SequenceIndex};
use uniqseq_types::ExtractorConfig;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        return Err("Usage: dict_bench <path> [length]".into());
    }

    let path = &args[1];
    let config = match args.get(2) {
        Some(raw) => ExtractorConfig::with_length(raw.parse()?)?,
        None => ExtractorConfig::default(),
    };

    println!("Loading file...");
    let bytes = fs::read(path)?;

    println!("File size: {}", fmt_bytes(bytes.len() as u64));
    println!("Length:    {}\n", config.sequence_length);

    bench_ingest(&bytes, config);

    let mut index = SequenceIndex::new(config);
    index.ingest_bytes(&bytes);
    println!("{}\n", index.stats());

    bench_filter(&index, bytes.len());
    bench_emit(&index, bytes.len());

    Ok(())
}

fn bench_ingest(bytes: &[u8], config: ExtractorConfig) {
    println!("=== Ingest ===");

    warmup(|| {
        let mut index = SequenceIndex::new(config);
        std::hint::black_box(index.ingest_bytes(bytes));
    });

    let mut lines = 0u64;
    let elapsed = measure(|| {
        let mut index = SequenceIndex::new(config);
        lines = index.ingest_bytes(bytes);
        std::hint::black_box(&index);
    });

    print_perf("Ingest", bytes.len(), elapsed, lines);
}

fn bench_filter(index: &SequenceIndex, input_bytes: usize) {
    println!("=== Filter ===");

    warmup(|| {
        std::hint::black_box(filter_unique(index));
    });

    let mut unique = 0u64;
    let elapsed = measure(|| {
        let result = filter_unique(index);
        unique = result.len() as u64;
        std::hint::black_box(result);
    });

    print_perf("Filter", input_bytes, elapsed, unique);
}

fn bench_emit(index: &SequenceIndex, input_bytes: usize) {
    let result = filter_unique(index);

    println!("=== Emit ===");

    warmup(|| {
        std::hint::black_box(result.emit());
    });

    let mut rows = 0u64;
    let elapsed = measure(|| {
        let emission = result.emit();
        rows = emission.len() as u64;
        std::hint::black_box(emission);
    });

    print_perf("Emit", input_bytes, elapsed, rows);
}

fn warmup<F: FnMut()>(mut f: F) {
    (0..WARMUP_RUNS).for_each(|_| f());
}

/// Mean wall time of `f` over `MEASURE_RUNS` runs.
fn measure<F: FnMut()>(mut f: F) -> Duration {
    let total: Duration = (0..MEASURE_RUNS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .sum();
    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, items: u64) {
    let secs = elapsed.as_secs_f64();
    let rule = "-".repeat(32);

    println!("{rule}");
    println!("{:<12}: {label}", "Mode");
    println!("{:<12}: {secs:.3} s", "Elapsed");
    println!("{:<12}: {:.2} MiB/s", "Throughput", input_bytes as f64 / MIB / secs);
    if items > 0 {
        println!("{:<12}: {}", "Items", fmt_count(items));
        println!("{:<12}: {}", "Items/sec", fmt_count((items as f64 / secs) as u64));
    }
    println!("{rule}\n");
}

const KIB: f64 = 1024.0;
const MIB: f64 = KIB * 1024.0;

/// Word lists stay well under a gigabyte.
fn fmt_bytes(b: u64) -> String {
    let b = b as f64;
    if b >= MIB {
        format!("{:.2} MiB", b / MIB)
    } else if b >= KIB {
        format!("{:.2} KiB", b / KIB)
    } else {
        format!("{b} B")
    }
}

/// `1234567` becomes `1_234_567`.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    out.push_str(&digits[..head]);
    for (i, group) in digits.as_bytes()[head..].chunks(3).enumerate() {
        if head > 0 || i > 0 {
            out.push('_');
        }
        // ASCII digits
        out.extend(group.iter().map(|&d| d as char));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_are_grouped() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(1000), "1_000");
        assert_eq!(fmt_count(466_550), "466_550");
        assert_eq!(fmt_count(1_234_567), "1_234_567");
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(fmt_bytes(512), "512 B");
        assert_eq!(fmt_bytes(2048), "2.00 KiB");
        assert_eq!(fmt_bytes(4_718_592), "4.50 MiB");
    }
}
