//! MinHash computation for NearDup perceptual fingerprinting.
//!
//! Signatures come from a family of linear hash functions
//! `h_i(f) = ((1 + f) * a_i + b_i) mod P` over a fixed prime field. The
//! family is drawn once from a SplitMix64 stream and is read-only afterwards,
//! so one instance can be shared by reference across threads.

use crate::config::PerceptualError;
use crate::fingerprint::{FeatureSet, Signature};

/// Prime modulus shared by every hash function in a family.
pub const HASH_PRIME: u32 = 2_038_074_743;

/// Initial value of every signature slot. No hash output reaches it.
pub const SIGNATURE_SENTINEL: u32 = HASH_PRIME;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer.
#[inline]
pub(crate) fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic coefficient stream. Output depends only on the seed, never
/// on the platform or on a third-party generator's version.
#[derive(Debug, Clone)]
pub(crate) struct SeedStream {
    state: u64,
}

impl SeedStream {
    pub(crate) fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub(crate) fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        splitmix64(self.state)
    }

    /// Uniform draw from `[0, bound)` by rejection. `bound` must be non-zero.
    pub(crate) fn below(&mut self, bound: u64) -> u64 {
        let limit = u64::MAX - u64::MAX % bound;
        loop {
            let x = self.next_u64();
            if x < limit {
                return x % bound;
            }
        }
    }
}

/// One member of the family: `a ∈ [1, P-1]`, `b ∈ [0, P-1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearHash {
    pub a: u32,
    pub b: u32,
}

impl LinearHash {
    /// Hash a feature index. The `1 +` offset keeps index 0 from always
    /// mapping to `b`.
    #[inline]
    pub fn apply(&self, feature: u32) -> u32 {
        // (2^32) * (2^31) + 2^31 stays well inside u64.
        let x = (1 + u64::from(feature)) * u64::from(self.a) + u64::from(self.b);
        (x % u64::from(HASH_PRIME)) as u32
    }
}

/// Seeded, immutable collection of [`LinearHash`] functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFamily {
    seed: u64,
    functions: Vec<LinearHash>,
}

impl HashFamily {
    /// Draw `num_hashes` coefficient pairs from a stream seeded with `seed`.
    ///
    /// Pairs are drawn in order `a_0, b_0, a_1, b_1, ...`, so a family of
    /// length `n` is a prefix of the family of length `n + 1` for the same seed.
    pub fn new(num_hashes: usize, seed: u64) -> Result<Self, PerceptualError> {
        if num_hashes == 0 {
            return Err(PerceptualError::InvalidConfigNumHashes { num_hashes });
        }
        let prime = u64::from(HASH_PRIME);
        let mut stream = SeedStream::new(seed);
        let functions = (0..num_hashes)
            .map(|_| {
                let a = 1 + stream.below(prime - 1) as u32;
                let b = stream.below(prime) as u32;
                LinearHash { a, b }
            })
            .collect();
        Ok(Self { seed, functions })
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn functions(&self) -> &[LinearHash] {
        &self.functions
    }

    /// Apply hash function `i` to `feature`. Panics if `i >= len()`.
    #[inline]
    pub fn hash(&self, i: usize, feature: u32) -> u32 {
        self.functions[i].apply(feature)
    }
}

/// Produces signatures from feature sets using one [`HashFamily`].
#[derive(Debug, Clone)]
pub struct MinHasher {
    family: HashFamily,
}

impl MinHasher {
    pub fn new(num_hashes: usize, seed: u64) -> Result<Self, PerceptualError> {
        Ok(Self::from_family(HashFamily::new(num_hashes, seed)?))
    }

    pub fn from_family(family: HashFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> &HashFamily {
        &self.family
    }

    pub fn num_hashes(&self) -> usize {
        self.family.len()
    }

    /// Minimum of each hash function over the feature set.
    ///
    /// An empty set leaves every slot at [`SIGNATURE_SENTINEL`].
    pub fn compute_signature(&self, features: &FeatureSet) -> Signature {
        let mut sig = vec![SIGNATURE_SENTINEL; self.family.len()];
        for feature in features.iter() {
            for (slot, func) in sig.iter_mut().zip(self.family.functions()) {
                let h = func.apply(feature);
                if h < *slot {
                    *slot = h;
                }
            }
        }
        Signature::new(sig)
    }
}
