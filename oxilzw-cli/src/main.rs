//! OxiLZW CLI
//!
//! Thin command-line front end for the OxiLZW codec: maps the input file,
//! runs the codec and writes the result to stdout or a file.

mod commands;
mod utils;

use clap::{Args, Parser, Subcommand};
use commands::{cmd_decode, cmd_decode_single, cmd_encode, cmd_encode_single, cmd_stats};
use log::LevelFilter;
use oxilzw::{DEFAULT_MIN_CHUNK_LEN, ParallelConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxilzw")]
#[command(author, version, about = "Pure Rust parallel LZW codec")]
#[command(long_about = "
OxiLZW compresses files into 16-bit LZW codes. The parallel format stores
one escaped, newline-terminated line per independently compressed chunk.

Examples:
  oxilzw encode book.txt > book.lzw
  oxilzw decode book.lzw > book.txt
  oxilzw encode -j 8 --min-chunk 1048576 big.bin -o big.lzw
  oxilzw encode-single book.txt -o book.codes
  oxilzw decode-single book.codes
  oxilzw stats book.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parallel encode into the framed line format
    #[command(alias = "e")]
    Encode {
        /// File to encode
        input: PathBuf,

        #[command(flatten)]
        io: OutputArgs,

        #[command(flatten)]
        parallel: ParallelArgs,
    },

    /// Parallel decode from the framed line format
    #[command(alias = "d")]
    Decode {
        /// Framed file to decode
        input: PathBuf,

        #[command(flatten)]
        io: OutputArgs,

        #[command(flatten)]
        parallel: ParallelArgs,
    },

    /// Sequential encode into raw little-endian codes
    #[command(alias = "es")]
    EncodeSingle {
        /// File to encode
        input: PathBuf,

        #[command(flatten)]
        io: OutputArgs,
    },

    /// Sequential decode from raw little-endian codes
    #[command(alias = "ds")]
    DecodeSingle {
        /// Raw code file to decode
        input: PathBuf,

        #[command(flatten)]
        io: OutputArgs,
    },

    /// Show chunking and compression statistics for a file
    Stats {
        /// File to analyse
        input: PathBuf,

        #[command(flatten)]
        parallel: ParallelArgs,
    },
}

/// Output destination.
#[derive(Args)]
struct OutputArgs {
    /// Write to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Worker pool and chunking options.
#[derive(Args)]
struct ParallelArgs {
    /// Number of worker threads (default: available parallelism)
    #[arg(short = 'j', long)]
    workers: Option<usize>,

    /// Minimum chunk size in bytes
    #[arg(long = "min-chunk", default_value_t = DEFAULT_MIN_CHUNK_LEN)]
    min_chunk_len: usize,
}

impl ParallelArgs {
    fn config(&self) -> ParallelConfig {
        let config = ParallelConfig::default().with_min_chunk_len(self.min_chunk_len);
        match self.workers {
            Some(workers) => config.with_workers(workers),
            None => config,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_env("OXILZW_LOG");
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Encode {
            input,
            io,
            parallel,
        } => cmd_encode(&input, io.output.as_deref(), &parallel.config()),
        Commands::Decode {
            input,
            io,
            parallel,
        } => cmd_decode(&input, io.output.as_deref(), &parallel.config()),
        Commands::EncodeSingle { input, io } => cmd_encode_single(&input, io.output.as_deref()),
        Commands::DecodeSingle { input, io } => cmd_decode_single(&input, io.output.as_deref()),
        Commands::Stats { input, parallel } => cmd_stats(&input, &parallel.config()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
