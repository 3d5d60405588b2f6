//! huffpack CLI
//!
//! ## Usage
//!
//! ```bash
//! # Compress a file
//! huffpack input.bin compressed.bin
//!
//! # Keep the code table, which a decoder needs along with the input length
//! huffpack input.bin compressed.bin --print-table
//!
//! # Also estimate the coded size over 4-byte windows
//! huffpack input.bin compressed.bin --estimate-window 4
//! ```
//!
//! Log output is controlled with `RUST_LOG` (default `warn`).

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use huffpack::huffman::{bit_string, DegeneratePolicy, EncoderConfig, HuffmanEncoder};

#[derive(Parser, Debug)]
#[command(name = "huffpack")]
#[command(version)]
#[command(about = "Static Huffman compressor", long_about = None)]
struct Args {
    /// File to compress
    input: PathBuf,

    /// Where to write the packed bitstream
    output: PathBuf,

    /// Fail on input with a single distinct byte instead of using a 1-bit code
    #[arg(long)]
    reject_degenerate: bool,

    /// Print the code table after compressing
    #[arg(long)]
    print_table: bool,

    /// Also estimate the coded size using windows of this many bytes
    #[arg(long)]
    estimate_window: Option<usize>,
}

impl Args {
    fn config(&self) -> EncoderConfig {
        let policy = if self.reject_degenerate {
            DegeneratePolicy::Reject
        } else {
            DegeneratePolicy::SingleBit
        };
        EncoderConfig::new().with_degenerate_policy(policy)
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    // A second call (only possible in tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = Args::parse();

    let data = fs::read(&args.input)?;
    let encoder = HuffmanEncoder::new(args.config());
    let encoded = encoder.encode(&data)?;
    fs::write(&args.output, &encoded.bytes)?;

    println!(
        "Done. {} bytes -> {} bytes ({} code bits, {} padding bits, {} distinct symbols)",
        data.len(),
        encoded.bytes.len(),
        encoded.bit_len,
        encoded.padding_bits,
        encoded.code_table.len()
    );

    if args.print_table {
        for (symbol, code) in encoded.code_table.iter() {
            println!("{:3}\t{}", symbol, bit_string(code));
        }
    }

    if let Some(window) = args.estimate_window {
        let estimate = encoder.estimate_window_bits(&data, window)?;
        println!(
            "Window {}: {} windows, {} distinct, ~{} bits ({:.3} bits/window)",
            estimate.window,
            estimate.windows,
            estimate.distinct,
            estimate.estimated_bits,
            estimate.average_code_len
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_positional_paths_and_defaults() {
        let args = Args::try_parse_from(["huffpack", "in.bin", "out.bin"]).unwrap();
        assert_eq!(args.input, PathBuf::from("in.bin"));
        assert_eq!(args.output, PathBuf::from("out.bin"));
        assert!(!args.print_table);
        assert_eq!(args.estimate_window, None);
        assert_eq!(args.config().degenerate, DegeneratePolicy::SingleBit);
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "huffpack",
            "in.bin",
            "out.bin",
            "--reject-degenerate",
            "--print-table",
            "--estimate-window",
            "4",
        ])
        .unwrap();
        assert!(args.print_table);
        assert_eq!(args.estimate_window, Some(4));
        assert_eq!(args.config().degenerate, DegeneratePolicy::Reject);
    }

    #[test]
    fn test_estimate_window_requires_value() {
        let err = Args::try_parse_from(["huffpack", "in.bin", "out.bin", "--estimate-window"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn test_estimate_window_must_be_a_number() {
        let err = Args::try_parse_from([
            "huffpack",
            "in.bin",
            "out.bin",
            "--estimate-window",
            "four",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_missing_output_rejected() {
        assert!(Args::try_parse_from(["huffpack", "in.bin"]).is_err());
    }

    #[test]
    fn test_logging_forwards_log_records() {
        init_logging();
        assert_ne!(log::max_level(), log::LevelFilter::Off);
    }
}
