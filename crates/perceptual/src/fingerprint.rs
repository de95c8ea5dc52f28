//! Feature set, signature and metadata types for the NearDup perceptual layer.
//!
//! These are the derived per-document values. They carry no reference to the
//! hash family that produced them; comparing signatures from different
//! families is meaningless and the caller owns that invariant.

use serde::{Deserialize, Serialize};

use crate::minhash::SIGNATURE_SENTINEL;

/// Distinct feature indices observed in one document.
///
/// Stored sorted and de-duplicated. Membership only, no multiplicity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct FeatureSet {
    indices: Vec<u32>,
}

impl FeatureSet {
    /// Build a set from indices in any order, collapsing duplicates.
    pub fn from_unsorted(mut indices: Vec<u32>) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn contains(&self, index: u32) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.indices
    }
}

impl FromIterator<u32> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::from_unsorted(iter.into_iter().collect())
    }
}

/// Fixed-length MinHash signature, one minimum per hash function.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u32>);

impl Signature {
    pub fn new(values: Vec<u32>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    /// True when no feature ever lowered a slot, i.e. the document had no
    /// complete n-gram window.
    pub fn is_sentinel(&self) -> bool {
        self.0.iter().all(|&v| v == SIGNATURE_SENTINEL)
    }
}

impl AsRef<[u32]> for Signature {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

/// Everything the perceptual layer derives from one document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentFingerprint {
    pub features: FeatureSet,
    pub signature: Signature,
    pub meta: FingerprintMeta,
}

/// Metadata for traceability and determinism.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FingerprintMeta {
    /// Perceptual algorithm version owned by this crate.
    pub perceptual_version: u16,
    /// Human-readable algorithm identifier.
    pub algorithm_name: String,
    pub ngrams: usize,
    pub num_hashes: usize,
    pub num_features: usize,
    pub seed: u64,
    /// Configuration schema version supplied by the caller.
    pub config_version: u32,
}
