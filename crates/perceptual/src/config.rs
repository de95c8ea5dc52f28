//! Configuration and error types for NearDup perceptual fingerprinting.
//!
//! This module defines the public configuration surface for the perceptual
//! layer. It has no I/O or environment-dependent behavior, so a signature is
//! a pure function of `(text, config)`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default hash-family seed.
pub const DEFAULT_SEED: u64 = 7;

/// Default feature space size. Powers of two keep the modulus cheap.
pub const DEFAULT_NUM_FEATURES: usize = 262_144;

/// Configuration for feature extraction and signature generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualConfig {
    /// Configuration schema version.
    ///
    /// Any algorithmic change that can affect a signature must bump this
    /// version so stored signatures stay comparable.
    pub version: u32,
    /// Number of tokens per n-gram window.
    ///
    /// Larger values are stricter about word order; smaller values tolerate
    /// more local edits.
    pub ngrams: usize,
    /// Number of hash functions, i.e. the signature length.
    ///
    /// Estimator variance shrinks as `1 / num_hashes`.
    pub num_hashes: usize,
    /// Modulus of the feature hash space.
    pub num_features: usize,
    /// Seed for the hash family.
    ///
    /// Two configs with the same seed and parameters produce bit-identical
    /// signatures for the same text.
    pub seed: u64,
    /// Compute per-document signatures on the rayon pool.
    pub use_parallel: bool,
}

impl PerceptualConfig {
    /// Create a new configuration with sensible defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the n-gram window width. Typical values: 2-5.
    pub fn with_ngrams(mut self, ngrams: usize) -> Self {
        self.ngrams = ngrams;
        self
    }

    /// Set the signature length. More hashes = tighter estimate, slower signing.
    pub fn with_num_hashes(mut self, num_hashes: usize) -> Self {
        self.num_hashes = num_hashes;
        self
    }

    /// Set the feature space size. Should be a power of two.
    pub fn with_num_features(mut self, num_features: usize) -> Self {
        self.num_features = num_features;
        self
    }

    /// Set the hash-family seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable parallel signature computation across documents.
    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.ngrams < 1 {
            return Err(PerceptualError::InvalidConfigNgrams {
                ngrams: self.ngrams,
            });
        }
        if self.num_hashes < 1 {
            return Err(PerceptualError::InvalidConfigNumHashes {
                num_hashes: self.num_hashes,
            });
        }
        if self.num_features < 1 {
            return Err(PerceptualError::InvalidConfigNumFeatures {
                num_features: self.num_features,
            });
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            ngrams: 3,
            num_hashes: 13,
            num_features: DEFAULT_NUM_FEATURES,
            seed: DEFAULT_SEED,
            use_parallel: false,
        }
    }
}

/// Errors returned by the perceptual layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config: ngrams must be >= 1 (got {ngrams})")]
    InvalidConfigNgrams { ngrams: usize },

    #[error("invalid config: num_hashes must be >= 1 (got {num_hashes})")]
    InvalidConfigNumHashes { num_hashes: usize },

    #[error("invalid config: num_features must be >= 1 (got {num_features})")]
    InvalidConfigNumFeatures { num_features: usize },

    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },
}
