//! stability-mine - label solvent-removal stability across a parsed corpus
//!
//! Usage:
//!   stability-mine corpus.json --output collapse_keyword_searches.json
//!   stability-mine corpus.json --mode thermal --parallel --compact
//!   RUST_LOG=layered_stability=trace stability-mine corpus.json --config engine.toml

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use layered_stability::EngineConfig;
use layered_stability_corpus::{
    read_documents, write_corpus, write_corpus_file, Corpus, CorpusDriver, DocumentMiner,
    SourceDocument, ThermalScanner,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Solvent-removal stability labels
    Solvent,
    /// Thermal-analysis sentences with nearby temperatures
    Thermal,
}

/// Mine stability evidence from a segmented, dependency-parsed corpus
#[derive(Parser, Debug)]
#[command(name = "stability-mine")]
#[command(about = "Mine MOF stability evidence from a parsed corpus")]
struct Args {
    /// JSON array of source documents
    corpus: PathBuf,

    /// Engine configuration (.toml or .ron)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "solvent")]
    mode: Mode,

    /// Mine documents on all cores
    #[arg(long)]
    parallel: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Debug-level logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run<M: DocumentMiner>(miner: &M, documents: &[SourceDocument], args: &Args) -> Result<()> {
    let corpus: Corpus<M::Record> = if args.parallel {
        miner.mine_parallel(documents)
    } else {
        miner.mine(documents)
    };

    let pretty = !args.compact;
    match &args.output {
        Some(path) => write_corpus_file(path, &corpus, pretty)
            .with_context(|| format!("writing {}", path.display()))?,
        None => write_corpus(io::stdout().lock(), &corpus, pretty).context("writing stdout")?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let documents = read_documents(&args.corpus)
        .with_context(|| format!("reading corpus {}", args.corpus.display()))?;

    match args.mode {
        Mode::Solvent => run(&CorpusDriver::from_config(&config), &documents, &args),
        Mode::Thermal => {
            let scanner = ThermalScanner::new().context("building thermal phrase matcher")?;
            run(&scanner, &documents, &args)
        }
    }
}
