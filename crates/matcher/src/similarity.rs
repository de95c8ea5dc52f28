//! Signature distance estimation.

use perceptual::Signature;

/// Estimated Jaccard distance: the fraction of slots where the two
/// signatures disagree.
///
/// Both signatures must come from the same hash family, so their lengths are
/// equal. Panics otherwise. Zero-length signatures carry no evidence of
/// agreement and give `1.0`.
pub fn jaccard_distance(a: &Signature, b: &Signature) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "signatures from different hash families cannot be compared"
    );
    if a.is_empty() {
        return 1.0;
    }
    let matches = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .filter(|(x, y)| x == y)
        .count();
    1.0 - matches as f64 / a.len() as f64
}

/// Estimated Jaccard similarity, `1 - jaccard_distance`.
pub fn jaccard_similarity(a: &Signature, b: &Signature) -> f64 {
    1.0 - jaccard_distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use perceptual::SIGNATURE_SENTINEL;

    fn sig(values: &[u32]) -> Signature {
        Signature::new(values.to_vec())
    }

    #[test]
    fn self_distance_is_zero() {
        let s = sig(&[5, 1, 9, 2]);
        assert_eq!(jaccard_distance(&s, &s), 0.0);
    }

    #[test]
    fn disjoint_signatures_have_distance_one() {
        assert_eq!(jaccard_distance(&sig(&[1, 2, 3]), &sig(&[4, 5, 6])), 1.0);
    }

    #[test]
    fn partial_agreement_counts_positions() {
        let d = jaccard_distance(&sig(&[1, 2, 3, 4]), &sig(&[1, 9, 3, 8]));
        assert!((d - 0.5).abs() < 1e-12);
    }

    #[test]
    fn agreement_is_positional() {
        // Same values, shifted slots: nothing lines up.
        assert_eq!(jaccard_distance(&sig(&[1, 2, 3]), &sig(&[3, 1, 2])), 1.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = sig(&[1, 2, 3, 4, 5]);
        let b = sig(&[1, 0, 3, 0, 0]);
        assert_eq!(jaccard_distance(&a, &b), jaccard_distance(&b, &a));
    }

    #[test]
    fn sentinel_signatures_are_identical() {
        let a = sig(&[SIGNATURE_SENTINEL; 13]);
        let b = sig(&[SIGNATURE_SENTINEL; 13]);
        assert_eq!(jaccard_distance(&a, &b), 0.0);
        assert_eq!(jaccard_similarity(&a, &b), 1.0);
    }

    #[test]
    fn empty_signatures_have_distance_one() {
        assert_eq!(jaccard_distance(&sig(&[]), &sig(&[])), 1.0);
    }

    #[test]
    #[should_panic(expected = "different hash families")]
    fn unequal_lengths_panic() {
        jaccard_distance(&sig(&[1, 2]), &sig(&[1, 2, 3]));
    }
}
