use neardup::{
    deduplicator, find_duplicates, find_duplicates_with_configs, ConfigLoadError, MatchConfig,
    MatchError, NearDupConfig, PerceptualConfig, PerceptualError, PipelineError,
};

const DOCS: [&str; 2] = ["one two three four", "one two three four"];

#[test]
fn zero_ngrams_in_loaded_config_fails_validation() {
    let mut cfg = NearDupConfig::default();
    cfg.perceptual.ngrams = 0;
    let result = find_duplicates(&DOCS, &cfg);
    assert!(matches!(
        result,
        Err(PipelineError::Config(ConfigLoadError::Validation(msg))) if msg.contains("ngrams")
    ));
}

#[test]
fn zero_ngrams_bubbles_up() {
    let result = find_duplicates_with_configs(
        &DOCS,
        &PerceptualConfig::default().with_ngrams(0),
        &MatchConfig::default(),
    );
    assert!(matches!(
        result,
        Err(PipelineError::Match(MatchError::Perceptual(
            PerceptualError::InvalidConfigNgrams { ngrams: 0 }
        )))
    ));
}

#[test]
fn zero_num_hashes_bubbles_up() {
    let result = find_duplicates_with_configs(
        &DOCS,
        &PerceptualConfig::default().with_num_hashes(0),
        &MatchConfig::default(),
    );
    assert!(matches!(
        result,
        Err(PipelineError::Match(MatchError::Perceptual(
            PerceptualError::InvalidConfigNumHashes { num_hashes: 0 }
        )))
    ));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    for threshold in [-0.1, 1.5, f64::NAN] {
        let result = find_duplicates_with_configs(
            &DOCS,
            &PerceptualConfig::default(),
            &MatchConfig::default().with_threshold(threshold),
        );
        assert!(
            matches!(
                result,
                Err(PipelineError::Match(MatchError::InvalidThreshold { .. }))
            ),
            "threshold {threshold} accepted"
        );
    }
}

#[test]
fn unsupported_config_version_is_rejected() {
    let mut cfg = NearDupConfig::default();
    cfg.version = "9.9".into();
    assert!(matches!(
        deduplicator(&cfg),
        Err(PipelineError::Config(ConfigLoadError::UnsupportedVersion(_)))
    ));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let result = NearDupConfig::from_yaml("perceptual: [not, a, map]");
    assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
}

#[test]
fn error_messages_name_the_field() {
    let err = PipelineError::from(PerceptualError::InvalidConfigNumFeatures { num_features: 0 });
    assert!(err.to_string().contains("num_features"));
}
