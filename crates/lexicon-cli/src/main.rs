//! Lexicon command-line codec
//!
//! Compresses and decompresses files with the LZW codec.
//!
//! ## Usage
//!
//! ```bash
//! # Adaptive (framed) compression at the default width
//! lexicon compress input.txt input.lzw
//!
//! # Fixed 16-bit code stream
//! lexicon compress input.txt input.lzw --max-bits 16 --fixed
//!
//! # Decompress, settings from a config file
//! lexicon decompress input.lzw input.txt --config lexicon.json
//!
//! # Print the statistics as JSON
//! lexicon compress input.txt input.lzw --json
//! ```

use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use lexicon_core::{CompressionStats, Result};
use lexicon_lzw::LzwConfig;

#[derive(Parser, Debug)]
#[command(name = "lexicon")]
#[command(author = "Daemoniorum LLC")]
#[command(version)]
#[command(about = "Lexicon LZW file codec", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compress a file
    Compress(FileArgs),
    /// Decompress a file
    Decompress(FileArgs),
}

#[derive(ClapArgs, Debug, Clone)]
struct FileArgs {
    /// Input file
    input: PathBuf,

    /// Output file
    output: PathBuf,

    /// Code width in bits (9-16), overrides the config file
    #[arg(long)]
    max_bits: Option<u32>,

    /// Use the headerless fixed-width code stream
    #[arg(long)]
    fixed: bool,

    /// Configuration file path (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print statistics as JSON on stdout
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Compress,
    Decompress,
}

impl FileArgs {
    /// Config file (or defaults) with command-line overrides applied.
    fn resolve_config(&self) -> Result<LzwConfig> {
        let mut config = match &self.config {
            Some(path) => LzwConfig::from_file(path)?,
            None => LzwConfig::default(),
        };
        if let Some(max_bits) = self.max_bits {
            config = config.with_max_bits(max_bits);
        }
        if self.fixed {
            config = config.with_adaptive(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Run one file operation and return its statistics.
fn run(mode: Mode, args: &FileArgs) -> Result<CompressionStats> {
    let config = args.resolve_config()?;
    debug!(?config, ?mode, "resolved configuration");

    let codec = config.build_codec()?;
    let input = std::fs::read(&args.input)?;

    let (output, stats) = match mode {
        Mode::Compress => codec.compress_with_stats(&input)?,
        Mode::Decompress => codec.decompress_with_stats(&input)?,
    };
    write_output(&args.output, &output)?;

    Ok(stats)
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)?;
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_level(&args.log_level))
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let (mode, file_args) = match &args.command {
        Command::Compress(file_args) => (Mode::Compress, file_args),
        Command::Decompress(file_args) => (Mode::Decompress, file_args),
    };

    let stats = run(mode, file_args)?;

    info!("{}", stats.summary());
    info!("  Input:  {}", file_args.input.display());
    info!("  Output: {}", file_args.output.display());

    if file_args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
