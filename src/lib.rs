//! Workspace umbrella crate for NearDup near-duplicate detection.
//!
//! This crate stitches together tokenizing, perceptual signing and pairwise
//! matching so callers can go from a list of texts to a list of duplicate
//! pairs with a single call.
//!
//! ```
//! use neardup::{find_duplicates, NearDupConfig};
//!
//! let docs = [
//!     "The quick brown fox jumps over the lazy dog",
//!     "The quick brown fox jumps over the lazy dog",
//!     "different than the others",
//! ];
//! let pairs = find_duplicates(&docs, &NearDupConfig::default()).unwrap();
//! assert_eq!(pairs.len(), 1);
//! assert_eq!(pairs[0].similarity, 1.0);
//! ```

pub mod config;
pub mod corpus;
pub mod demo;
pub mod report;

pub use matcher::{
    jaccard_distance, jaccard_similarity, set_dedup_metrics, DedupMetrics, Deduplicator,
    DuplicatePair, MatchConfig, MatchError,
};
pub use perceptual::{
    fingerprint_text, DocumentFingerprint, FeatureExtractor, FeatureSet, Fingerprinter,
    HashFamily, MinHasher, PerceptualConfig, PerceptualError, Signature, HASH_PRIME,
    SIGNATURE_SENTINEL,
};
pub use tokenizer::{tokenize, DelimiterSet, Tokens};

pub use crate::config::{ConfigLoadError, MatchYamlConfig, NearDupConfig, PerceptualYamlConfig};
pub use crate::corpus::{load_corpus, parse_corpus, CorpusError, InputFormat};
pub use crate::demo::demo_corpus;
pub use crate::report::{format_similarity, write_json_report, write_text_report, PairReport};

use thiserror::Error;

/// Errors that can occur while running the duplicate pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration failure: {0}")]
    Config(#[from] ConfigLoadError),
    #[error("corpus failure: {0}")]
    Corpus(#[from] CorpusError),
    #[error("matching failure: {0}")]
    Match(#[from] MatchError),
}

impl From<PerceptualError> for PipelineError {
    fn from(value: PerceptualError) -> Self {
        PipelineError::Match(MatchError::Perceptual(value))
    }
}

/// Build a [`Deduplicator`] from a loaded configuration.
pub fn deduplicator(cfg: &NearDupConfig) -> Result<Deduplicator, PipelineError> {
    cfg.validate()?;
    Ok(Deduplicator::new(
        cfg.perceptual_config(),
        cfg.match_config(),
    )?)
}

/// Report every near-duplicate pair in `docs` under `cfg`.
pub fn find_duplicates<S>(docs: &[S], cfg: &NearDupConfig) -> Result<Vec<DuplicatePair>, PipelineError>
where
    S: AsRef<str> + Sync,
{
    Ok(deduplicator(cfg)?.find_duplicates(docs))
}

/// Same as [`find_duplicates`] with explicit stage configs.
pub fn find_duplicates_with_configs<S>(
    docs: &[S],
    perceptual_cfg: &PerceptualConfig,
    match_cfg: &MatchConfig,
) -> Result<Vec<DuplicatePair>, PipelineError>
where
    S: AsRef<str> + Sync,
{
    let dedup = Deduplicator::new(perceptual_cfg.clone(), match_cfg.clone())?;
    Ok(dedup.find_duplicates(docs))
}
