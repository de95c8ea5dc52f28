//! # NearDup Perceptual Fingerprinting
//!
//! This crate turns raw text into a compact, similarity-preserving MinHash
//! signature. Two signatures produced under the same configuration can be
//! compared slot by slot to estimate the Jaccard similarity of the documents'
//! n-gram sets.
//!
//! ## Contract
//!
//! - The API is a pure function of `(text, config)`: no I/O, no clocks, no
//!   global state.
//! - The hash family is built once per [`Fingerprinter`] and never mutated.
//!
//! Invariant: for the same text and the same [`PerceptualConfig`], the
//! signature is bit identical.
//!
//! ## Core Pipeline
//!
//! 1.  **Tokenizing**: text is split into alphanumeric ASCII tokens; every
//!     other byte is a delimiter.
//!
//! 2.  **Feature hashing**: a window of `ngrams` tokens slides over the
//!     stream. Each full window is joined, hashed with XXH32 and folded into
//!     `[0, num_features)`. Duplicate windows collapse.
//!
//! 3.  **MinHashing**: each of `num_hashes` seeded linear hash functions is
//!     applied to every feature and the minimum is kept. Documents with no
//!     full window keep every slot at [`SIGNATURE_SENTINEL`].
//!
//! ## Example Usage
//!
//! ```
//! use perceptual::{Fingerprinter, PerceptualConfig};
//!
//! let cfg = PerceptualConfig::default().with_ngrams(3);
//! let fingerprinter = Fingerprinter::new(&cfg).unwrap();
//!
//! let a = fingerprinter.fingerprint("The quick brown fox jumps over the lazy dog");
//! let b = fingerprinter.fingerprint("The quick brown fox jumps over the lazy dog");
//!
//! assert_eq!(a.signature, b.signature);
//! assert_eq!(a.signature.len(), cfg.num_hashes);
//! ```

pub mod config;
pub mod features;
pub mod fingerprint;
pub mod minhash;

use rayon::prelude::*;

pub use crate::config::{PerceptualConfig, PerceptualError, DEFAULT_NUM_FEATURES, DEFAULT_SEED};
pub use crate::features::FeatureExtractor;
pub use crate::fingerprint::{DocumentFingerprint, FeatureSet, FingerprintMeta, Signature};
pub use crate::minhash::{HashFamily, LinearHash, MinHasher, HASH_PRIME, SIGNATURE_SENTINEL};

/// Current perceptual algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const PERCEPTUAL_ALGORITHM: &str = "xxh32ngram_linearminhash_v1";

/// Feature extractor and MinHasher bound to one validated configuration.
#[derive(Debug, Clone)]
pub struct Fingerprinter {
    cfg: PerceptualConfig,
    extractor: FeatureExtractor,
    hasher: MinHasher,
}

impl Fingerprinter {
    /// Validate `cfg` and draw the hash family.
    pub fn new(cfg: &PerceptualConfig) -> Result<Self, PerceptualError> {
        cfg.validate()?;
        Ok(Self {
            cfg: cfg.clone(),
            extractor: FeatureExtractor::from_config(cfg)?,
            hasher: MinHasher::new(cfg.num_hashes, cfg.seed)?,
        })
    }

    pub fn config(&self) -> &PerceptualConfig {
        &self.cfg
    }

    pub fn extractor(&self) -> &FeatureExtractor {
        &self.extractor
    }

    pub fn hasher(&self) -> &MinHasher {
        &self.hasher
    }

    pub fn features(&self, text: &str) -> FeatureSet {
        self.extractor.extract(text)
    }

    pub fn signature(&self, text: &str) -> Signature {
        self.hasher.compute_signature(&self.extractor.extract(text))
    }

    /// Features, signature and metadata for one document.
    pub fn fingerprint(&self, text: &str) -> DocumentFingerprint {
        let features = self.extractor.extract(text);
        let signature = self.hasher.compute_signature(&features);
        DocumentFingerprint {
            features,
            signature,
            meta: self.meta(),
        }
    }

    /// One signature per document, in input order.
    ///
    /// Runs on the rayon pool when `use_parallel` is set. Output is identical
    /// either way.
    pub fn signatures<S>(&self, docs: &[S]) -> Vec<Signature>
    where
        S: AsRef<str> + Sync,
    {
        if self.cfg.use_parallel {
            docs.par_iter()
                .map(|doc| self.signature(doc.as_ref()))
                .collect()
        } else {
            docs.iter().map(|doc| self.signature(doc.as_ref())).collect()
        }
    }

    fn meta(&self) -> FingerprintMeta {
        FingerprintMeta {
            perceptual_version: PERCEPTUAL_VERSION,
            algorithm_name: PERCEPTUAL_ALGORITHM.to_string(),
            ngrams: self.cfg.ngrams,
            num_hashes: self.cfg.num_hashes,
            num_features: self.cfg.num_features,
            seed: self.cfg.seed,
            config_version: self.cfg.version,
        }
    }
}

/// Compute a fingerprint for a single document.
///
/// Builds a fresh hash family on every call; use [`Fingerprinter`] when
/// signing more than one document.
pub fn fingerprint_text(
    text: &str,
    cfg: &PerceptualConfig,
) -> Result<DocumentFingerprint, PerceptualError> {
    Ok(Fingerprinter::new(cfg)?.fingerprint(text))
}
