use super::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use perceptual::PerceptualError;

use crate::metrics::{set_dedup_metrics, DedupMetrics};

const FOX: &str = "The quick brown fox jumps over the lazy dog";

fn dedup(threshold: f64) -> Deduplicator {
    Deduplicator::new(
        PerceptualConfig::default(),
        MatchConfig::default().with_threshold(threshold),
    )
    .expect("valid config")
}

#[test]
fn rejects_invalid_threshold_before_perceptual_config() {
    let err = Deduplicator::new(
        PerceptualConfig::default().with_ngrams(0),
        MatchConfig::default().with_threshold(1.5),
    )
    .expect_err("config should be invalid");
    assert!(matches!(err, MatchError::InvalidThreshold { .. }));
}

#[test]
fn surfaces_perceptual_config_errors() {
    let err = Deduplicator::new(
        PerceptualConfig::default().with_num_hashes(0),
        MatchConfig::default(),
    )
    .expect_err("config should be invalid");
    assert_eq!(
        err,
        MatchError::Perceptual(PerceptualError::InvalidConfigNumHashes { num_hashes: 0 })
    );
}

#[test]
fn empty_and_singleton_corpora_have_no_pairs() {
    let d = dedup(0.3);
    let empty: [&str; 0] = [];
    assert!(d.find_duplicates(&empty).is_empty());
    assert!(d.find_duplicates(&[FOX]).is_empty());
}

#[test]
fn identical_documents_are_reported_with_similarity_one() {
    let d = dedup(0.3);
    let pairs = d.find_duplicates(&[FOX, FOX]);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].first, 0);
    assert_eq!(pairs[0].second, 1);
    assert_eq!(pairs[0].similarity, 1.0);
}

#[test]
fn identical_documents_reported_for_any_positive_threshold() {
    for threshold in [1e-9, 0.01, 0.5, 1.0] {
        let pairs = dedup(threshold).find_duplicates(&[FOX, FOX]);
        assert_eq!(pairs.len(), 1, "threshold {threshold}");
    }
}

#[test]
fn zero_threshold_reports_nothing() {
    assert!(dedup(0.0).find_duplicates(&[FOX, FOX]).is_empty());
}

#[test]
fn pair_at_exact_threshold_is_not_reported() {
    let d = dedup(0.3);
    let sigs = d.signatures(&[FOX, "an unrelated line of text entirely"]);
    let distance = jaccard_distance(&sigs[0], &sigs[1]);

    let at = Deduplicator::new(
        PerceptualConfig::default(),
        MatchConfig::default().with_threshold(distance),
    )
    .unwrap();
    assert!(at.duplicates_among(&sigs).is_empty());

    if distance < 1.0 {
        let above = Deduplicator::new(
            PerceptualConfig::default(),
            MatchConfig::default().with_threshold((distance + 1e-9).min(1.0)),
        )
        .unwrap();
        assert_eq!(above.duplicates_among(&sigs).len(), 1);
    }
}

#[test]
fn strict_threshold_on_handmade_signatures() {
    // 7 of 10 slots agree.
    let a = Signature::new((0..10).collect());
    let b = Signature::new(vec![0, 1, 2, 3, 4, 5, 6, 90, 91, 92]);
    let distance = jaccard_distance(&a, &b);
    let sigs = vec![a, b];

    let at = dedup(distance);
    assert!(at.duplicates_among(&sigs).is_empty());

    let loose = dedup(0.31);
    let pairs = loose.duplicates_among(&sigs);
    assert_eq!(pairs.len(), 1);
    assert!((pairs[0].similarity - 0.7).abs() < 1e-12);
}

#[test]
fn short_documents_match_each_other() {
    let d = dedup(0.3);
    let pairs = d.find_duplicates(&["hi", "", "two words"]);
    // All three are shorter than one window, so all signatures are sentinel.
    assert_eq!(pairs.len(), 3);
    assert!(pairs.iter().all(|p| p.similarity == 1.0));
}

#[test]
fn pairs_are_ordered_and_first_below_second() {
    let d = dedup(0.5);
    let docs = [FOX, "unrelated words here and there", FOX, FOX];
    let pairs = d.find_duplicates(&docs);
    let keys: Vec<(usize, usize)> = pairs.iter().map(|p| (p.first, p.second)).collect();
    assert_eq!(keys, vec![(0, 2), (0, 3), (2, 3)]);
}

#[test]
fn parallel_pass_matches_sequential() {
    let docs: Vec<String> = (0..40)
        .map(|i| format!("shared prefix words for doc {} and suffix {}", i % 5, i % 3))
        .collect();
    let seq = Deduplicator::new(PerceptualConfig::default(), MatchConfig::default()).unwrap();
    let par = Deduplicator::new(
        PerceptualConfig::default().with_parallel(true),
        MatchConfig::default().with_parallel(true),
    )
    .unwrap();
    assert_eq!(seq.find_duplicates(&docs), par.find_duplicates(&docs));
}

#[test]
fn compare_identical_texts_is_zero() {
    let d = dedup(0.3);
    assert_eq!(d.compare(FOX, FOX), 0.0);
}

#[derive(Default)]
struct RecordingMetrics {
    runs: Mutex<Vec<(usize, usize, usize)>>,
}

impl DedupMetrics for RecordingMetrics {
    fn record_run(&self, documents: usize, pairs_compared: usize, duplicates: usize, _: Duration) {
        self.runs
            .lock()
            .unwrap()
            .push((documents, pairs_compared, duplicates));
    }
}

#[test]
fn metrics_recorder_sees_run() {
    let recorder = Arc::new(RecordingMetrics::default());
    set_dedup_metrics(Some(recorder.clone()));

    let d = dedup(0.3);
    d.find_duplicates(&[FOX, FOX, "metrics probe document with enough words"]);

    set_dedup_metrics(None);
    let runs = recorder.runs.lock().unwrap();
    assert!(runs.contains(&(3, 3, 1)));
}
