use perceptual::PerceptualError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the all-pairs duplicate pass.
///
/// Cheap to clone and serde-friendly so it can be embedded in higher-level
/// configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Maximum estimated Jaccard distance for a pair to be reported.
    /// Comparison is strict: a pair exactly at the threshold is not reported.
    #[serde(default = "MatchConfig::default_threshold")]
    pub threshold: f64,
    /// Evaluate pairs on the rayon pool.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_threshold() -> f64 {
        0.3
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    /// Reject thresholds outside `[0, 1]`, including NaN.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(MatchError::InvalidThreshold {
                threshold: self.threshold,
            });
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            threshold: Self::default_threshold(),
            use_parallel: false,
        }
    }
}

/// One reported near-duplicate pair.
///
/// `first < second`; both are positions in the input corpus.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DuplicatePair {
    pub first: usize,
    pub second: usize,
    /// Estimated Jaccard similarity, `1 - distance`.
    pub similarity: f64,
}

impl DuplicatePair {
    pub fn distance(&self) -> f64 {
        1.0 - self.similarity
    }

    /// Resolve both documents in the corpus the pair was computed from.
    ///
    /// Returns `None` if either index is out of range for `docs`.
    pub fn texts<'a, S: AsRef<str>>(&self, docs: &'a [S]) -> Option<(&'a str, &'a str)> {
        let a = docs.get(self.first)?;
        let b = docs.get(self.second)?;
        Some((a.as_ref(), b.as_ref()))
    }
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("invalid match config: threshold must be within [0, 1] (got {threshold})")]
    InvalidThreshold { threshold: f64 },

    #[error("perceptual error: {0}")]
    Perceptual(#[from] PerceptualError),
}
