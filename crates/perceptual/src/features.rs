//! N-gram feature extraction for NearDup perceptual fingerprinting.
//!
//! A window of the last `ngrams` tokens slides over the token stream. Each
//! full window is joined as `tok1_tok2_..._tokN_`, hashed with XXH32 under a
//! fixed seed, and folded into `[0, num_features)`.

use std::collections::VecDeque;

use tokenizer::{tokenize, DelimiterSet};
use xxhash_rust::xxh32::xxh32;

use crate::config::{PerceptualConfig, PerceptualError};
use crate::fingerprint::FeatureSet;

/// Appended after every token of a window before hashing.
pub const WINDOW_SEPARATOR: char = '_';

/// Fixed seed for the window hash. Not tied to the hash-family seed.
pub const FEATURE_HASH_SEED: u32 = 0;

/// Maps text to the set of hashed n-gram windows it contains.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    ngrams: usize,
    num_features: u64,
    delims: DelimiterSet,
}

impl FeatureExtractor {
    pub fn new(ngrams: usize, num_features: usize) -> Result<Self, PerceptualError> {
        if ngrams == 0 {
            return Err(PerceptualError::InvalidConfigNgrams { ngrams });
        }
        if num_features == 0 {
            return Err(PerceptualError::InvalidConfigNumFeatures { num_features });
        }
        Ok(Self {
            ngrams,
            num_features: num_features as u64,
            delims: DelimiterSet::non_alphanumeric(),
        })
    }

    pub fn from_config(cfg: &PerceptualConfig) -> Result<Self, PerceptualError> {
        Self::new(cfg.ngrams, cfg.num_features)
    }

    /// Replace the delimiter set used by [`FeatureExtractor::extract`].
    pub fn with_delimiters(mut self, delims: DelimiterSet) -> Self {
        self.delims = delims;
        self
    }

    pub fn ngrams(&self) -> usize {
        self.ngrams
    }

    /// Tokenize `text` and extract its features.
    ///
    /// Fewer than `ngrams` tokens yields an empty set.
    pub fn extract(&self, text: &str) -> FeatureSet {
        self.extract_tokens(tokenize(text, &self.delims))
    }

    /// Extract features from an already tokenized stream.
    pub fn extract_tokens<'t, I>(&self, tokens: I) -> FeatureSet
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut window: VecDeque<&str> = VecDeque::with_capacity(self.ngrams + 1);
        let mut indices = Vec::new();
        let mut joined = String::new();

        for token in tokens {
            window.push_back(token);
            if window.len() > self.ngrams {
                window.pop_front();
            }
            if window.len() == self.ngrams {
                joined.clear();
                for t in &window {
                    joined.push_str(t);
                    joined.push(WINDOW_SEPARATOR);
                }
                indices.push(self.fold(xxh32(joined.as_bytes(), FEATURE_HASH_SEED)));
            }
        }

        FeatureSet::from_unsorted(indices)
    }

    #[inline]
    fn fold(&self, hash: u32) -> u32 {
        // The result is below both 2^32 and num_features.
        (u64::from(hash) % self.num_features) as u32
    }
}
