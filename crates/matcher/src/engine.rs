use std::time::Instant;

use perceptual::{Fingerprinter, PerceptualConfig, Signature};
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::metrics::metrics_recorder;
use crate::similarity::jaccard_distance;
use crate::types::{DuplicatePair, MatchConfig, MatchError};

#[cfg(test)]
mod tests;

/// Brute-force near-duplicate detector.
///
/// Signs every document once with a shared, read-only hash family, then
/// compares every unordered pair. Cost is `O(n)` signatures plus `O(n²)`
/// comparisons; there is no candidate pruning.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    fingerprinter: Fingerprinter,
    match_cfg: MatchConfig,
}

impl Deduplicator {
    /// Validate both configs and draw the hash family.
    ///
    /// All configuration errors surface here, before any document is seen.
    pub fn new(perceptual_cfg: PerceptualConfig, match_cfg: MatchConfig) -> Result<Self, MatchError> {
        match_cfg.validate()?;
        let fingerprinter = Fingerprinter::new(&perceptual_cfg)?;
        Ok(Self {
            fingerprinter,
            match_cfg,
        })
    }

    pub fn perceptual_config(&self) -> &PerceptualConfig {
        self.fingerprinter.config()
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.match_cfg
    }

    pub fn fingerprinter(&self) -> &Fingerprinter {
        &self.fingerprinter
    }

    /// One signature per document, in corpus order.
    pub fn signatures<S>(&self, docs: &[S]) -> Vec<Signature>
    where
        S: AsRef<str> + Sync,
    {
        let signatures = self.fingerprinter.signatures(docs);
        let degenerate = signatures.iter().filter(|s| s.is_sentinel()).count();
        if degenerate > 0 {
            debug!(
                degenerate,
                ngrams = self.perceptual_config().ngrams,
                "documents shorter than one n-gram window; their signatures are all-sentinel"
            );
        }
        signatures
    }

    /// Estimated Jaccard distance between two raw texts.
    pub fn compare(&self, a: &str, b: &str) -> f64 {
        jaccard_distance(
            &self.fingerprinter.signature(a),
            &self.fingerprinter.signature(b),
        )
    }

    /// Evaluate every pair `(i, j)`, `i < j`, of precomputed signatures.
    ///
    /// Pairs are returned ordered by `(first, second)` whether or not the
    /// pass runs in parallel.
    pub fn duplicates_among(&self, signatures: &[Signature]) -> Vec<DuplicatePair> {
        let n = signatures.len();
        let threshold = self.match_cfg.threshold;

        if self.match_cfg.use_parallel {
            (0..n)
                .into_par_iter()
                .flat_map_iter(|i| {
                    ((i + 1)..n).filter_map(move |j| evaluate_pair(signatures, i, j, threshold))
                })
                .collect()
        } else {
            (0..n)
                .flat_map(|i| {
                    ((i + 1)..n).filter_map(move |j| evaluate_pair(signatures, i, j, threshold))
                })
                .collect()
        }
    }

    /// Sign the corpus and report every pair with distance strictly below
    /// the threshold.
    pub fn find_duplicates<S>(&self, docs: &[S]) -> Vec<DuplicatePair>
    where
        S: AsRef<str> + Sync,
    {
        let start = Instant::now();
        let signatures = self.signatures(docs);
        let pairs = self.duplicates_among(&signatures);

        let documents = docs.len();
        let pairs_compared = documents * documents.saturating_sub(1) / 2;
        let latency = start.elapsed();
        debug!(
            documents,
            pairs_compared,
            duplicates = pairs.len(),
            threshold = self.match_cfg.threshold,
            elapsed_us = latency.as_micros() as u64,
            "duplicate pass complete"
        );
        if let Some(recorder) = metrics_recorder() {
            recorder.record_run(documents, pairs_compared, pairs.len(), latency);
        }

        pairs
    }
}

fn evaluate_pair(
    signatures: &[Signature],
    i: usize,
    j: usize,
    threshold: f64,
) -> Option<DuplicatePair> {
    let distance = jaccard_distance(&signatures[i], &signatures[j]);
    if distance < threshold {
        trace!(first = i, second = j, distance, "duplicate pair");
        Some(DuplicatePair {
            first: i,
            second: j,
            similarity: 1.0 - distance,
        })
    } else {
        None
    }
}
