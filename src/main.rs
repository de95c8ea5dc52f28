//! NearDup CLI: report near-duplicate pairs in a text corpus.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use neardup::{
    deduplicator, demo_corpus, load_corpus, write_json_report, write_text_report, InputFormat,
    NearDupConfig,
};

#[derive(Debug, Parser)]
#[command(name = "neardup", version, about = "Find near-duplicate documents with MinHash")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long, env = "NEARDUP_CONFIG")]
    config: Option<PathBuf>,

    /// Corpus file; the built-in demo corpus is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Corpus layout: lines, paragraphs or json
    #[arg(long, default_value_t = InputFormat::Lines)]
    format: InputFormat,

    /// Tokens per n-gram window
    #[arg(long, env = "NEARDUP_NGRAMS")]
    ngrams: Option<usize>,

    /// Signature length
    #[arg(long, env = "NEARDUP_NUM_HASHES")]
    num_hashes: Option<usize>,

    /// Report pairs with estimated distance strictly below this value
    #[arg(long, env = "NEARDUP_THRESHOLD")]
    threshold: Option<f64>,

    /// Feature space size (power of two recommended)
    #[arg(long, env = "NEARDUP_NUM_FEATURES")]
    num_features: Option<usize>,

    /// Hash family seed
    #[arg(long, env = "NEARDUP_SEED")]
    seed: Option<u64>,

    /// Sign documents and compare pairs on all cores
    #[arg(long)]
    parallel: bool,

    /// Emit one JSON object per pair instead of text blocks
    #[arg(long)]
    json: bool,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> anyhow::Result<NearDupConfig> {
        let mut cfg = match &self.config {
            Some(path) => NearDupConfig::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => NearDupConfig::default(),
        };
        if let Some(ngrams) = self.ngrams {
            cfg.perceptual.ngrams = ngrams;
        }
        if let Some(num_hashes) = self.num_hashes {
            cfg.perceptual.num_hashes = num_hashes;
        }
        if let Some(num_features) = self.num_features {
            cfg.perceptual.num_features = num_features;
        }
        if let Some(seed) = self.seed {
            cfg.perceptual.seed = seed;
        }
        if let Some(threshold) = self.threshold {
            cfg.matcher.threshold = threshold;
        }
        if self.parallel {
            cfg.perceptual.use_parallel = true;
            cfg.matcher.use_parallel = true;
        }
        Ok(cfg)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cfg = cli.resolve_config()?;
    let dedup = deduplicator(&cfg).context("invalid configuration")?;

    let docs: Vec<String> = match &cli.input {
        Some(path) => load_corpus(path, cli.format)
            .with_context(|| format!("loading corpus {}", path.display()))?,
        None => demo_corpus().iter().map(|d| d.to_string()).collect(),
    };
    tracing::info!(
        documents = docs.len(),
        ngrams = cfg.perceptual.ngrams,
        num_hashes = cfg.perceptual.num_hashes,
        threshold = cfg.matcher.threshold,
        "scanning corpus"
    );

    let pairs = dedup.find_duplicates(&docs);
    tracing::info!(duplicates = pairs.len(), "scan complete");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        write_json_report(&mut out, &pairs, &docs)?;
    } else {
        write_text_report(&mut out, &pairs, &docs)?;
    }
    out.flush()?;

    Ok(())
}
