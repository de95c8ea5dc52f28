//! # NearDup Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the perceptual layer. It signs a corpus with one
//! shared hash family, estimates the Jaccard distance of every unordered
//! document pair from their signatures, and reports the pairs whose distance
//! falls strictly below a threshold.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: threshold and parallelism knobs.
//! - [`Deduplicator`]: validated configs + hash family; runs the all-pairs pass.
//! - [`DuplicatePair`]: corpus positions of both documents and the estimated
//!   similarity.
//! - [`jaccard_distance`]: slot-agreement distance between two signatures.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Deduplicator, MatchConfig};
//! use perceptual::PerceptualConfig;
//!
//! let dedup = Deduplicator::new(PerceptualConfig::default(), MatchConfig::default()).unwrap();
//! let docs = [
//!     "The quick brown fox jumps over the lazy dog",
//!     "different than the others",
//!     "The quick brown fox jumps over the lazy dog",
//! ];
//!
//! let pairs = dedup.find_duplicates(&docs);
//! assert_eq!(pairs.len(), 1);
//! assert_eq!((pairs[0].first, pairs[0].second), (0, 2));
//! assert_eq!(pairs[0].similarity, 1.0);
//! ```
//!
//! ## Observability
//!
//! Runs emit `tracing` events at `debug`/`trace` level. Install a
//! [`DedupMetrics`] implementation via [`set_dedup_metrics`] to record
//! per-run latency and hit counts.

pub mod engine;
pub mod metrics;
pub mod similarity;
pub mod types;

pub use crate::engine::Deduplicator;
pub use crate::metrics::{set_dedup_metrics, DedupMetrics};
pub use crate::similarity::{jaccard_distance, jaccard_similarity};
pub use crate::types::{DuplicatePair, MatchConfig, MatchError};
