//! YAML configuration file support for NearDup.
//!
//! Both stage configurations (perceptual signing and pairwise matching) can
//! be described in a single YAML file and loaded at runtime.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # NearDup configuration
//! version: "1.0"
//!
//! perceptual:
//!   version: 1
//!   ngrams: 3
//!   num_hashes: 13
//!   num_features: 262144
//!   seed: 7
//!   use_parallel: false
//!
//! matcher:
//!   threshold: 0.3
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use matcher::MatchConfig;
use perceptual::{PerceptualConfig, DEFAULT_NUM_FEATURES, DEFAULT_SEED};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct NearDupConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Feature extraction and signature configuration
    #[serde(default)]
    pub perceptual: PerceptualYamlConfig,

    /// Pairwise matching configuration
    #[serde(default)]
    pub matcher: MatchYamlConfig,
}

impl NearDupConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: NearDupConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Render the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.perceptual.validate()?;
        self.matcher.validate()?;

        Ok(())
    }

    pub fn perceptual_config(&self) -> PerceptualConfig {
        self.perceptual.to_perceptual_config()
    }

    pub fn match_config(&self) -> MatchConfig {
        self.matcher.to_match_config()
    }
}

impl Default for NearDupConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            perceptual: PerceptualYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
        }
    }
}

/// Perceptual stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerceptualYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_ngrams")]
    pub ngrams: usize,

    #[serde(default = "default_num_hashes")]
    pub num_hashes: usize,

    #[serde(default = "default_num_features")]
    pub num_features: usize,

    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl PerceptualYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "perceptual.version must be >= 1".to_string(),
            ));
        }
        if self.ngrams == 0 {
            return Err(ConfigLoadError::Validation(
                "perceptual.ngrams must be >= 1".to_string(),
            ));
        }
        if self.num_hashes == 0 {
            return Err(ConfigLoadError::Validation(
                "perceptual.num_hashes must be >= 1".to_string(),
            ));
        }
        if self.num_features == 0 {
            return Err(ConfigLoadError::Validation(
                "perceptual.num_features must be >= 1".to_string(),
            ));
        }
        if !self.num_features.is_power_of_two() {
            tracing::warn!(
                num_features = self.num_features,
                "perceptual.num_features is not a power of two"
            );
        }
        Ok(())
    }

    pub fn to_perceptual_config(&self) -> PerceptualConfig {
        PerceptualConfig {
            version: self.version,
            ngrams: self.ngrams,
            num_hashes: self.num_hashes,
            num_features: self.num_features,
            seed: self.seed,
            use_parallel: self.use_parallel,
        }
    }
}

impl Default for PerceptualYamlConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            ngrams: default_ngrams(),
            num_hashes: default_num_hashes(),
            num_features: default_num_features(),
            seed: default_seed(),
            use_parallel: false,
        }
    }
}

/// Matcher stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchYamlConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigLoadError::Validation(format!(
                "matcher.threshold must be within [0, 1] (got {})",
                self.threshold
            )));
        }
        Ok(())
    }

    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            threshold: self.threshold,
            use_parallel: self.use_parallel,
        }
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            use_parallel: false,
        }
    }
}

// Default value functions
fn default_version() -> u32 {
    1
}
fn default_ngrams() -> usize {
    3
}
fn default_num_hashes() -> usize {
    13
}
fn default_num_features() -> usize {
    DEFAULT_NUM_FEATURES
}
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_threshold() -> f64 {
    0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
perceptual:
  ngrams: 4
  seed: 7
matcher:
  threshold: 0.25
"#;

        let config = NearDupConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.perceptual.ngrams, 4);
        assert_eq!(config.perceptual.seed, 7);
        assert_eq!(config.perceptual.num_hashes, 13);
        assert_eq!(config.matcher.threshold, 0.25);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1.0"
perceptual:
  num_hashes: 64
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = NearDupConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.perceptual.num_hashes, 64);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let result = NearDupConfig::from_file("/nonexistent/neardup.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config() {
        let config = NearDupConfig::default();
        assert_eq!(config.version, "1.0");
        assert!(config.name.is_none());
        assert_eq!(config.perceptual_config(), PerceptualConfig::default());
        assert_eq!(config.match_config(), MatchConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = NearDupConfig::from_yaml("version: \"2.0\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2.0"
        ));
    }

    #[test]
    fn test_perceptual_validation() {
        let yaml = r#"
version: "1.0"
perceptual:
  ngrams: 0
"#;

        let result = NearDupConfig::from_yaml(yaml);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("ngrams must be >= 1"));
    }

    #[test]
    fn test_num_features_validation() {
        let yaml = r#"
version: "1.0"
perceptual:
  num_features: 0
"#;

        let err = NearDupConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("num_features"));
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
matcher:
  threshold: 1.5
"#;

        let err = NearDupConfig::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("threshold"));
    }

    #[test]
    fn test_malformed_yaml() {
        let result = NearDupConfig::from_yaml("version: [unterminated");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = NearDupConfig::default();
        config.name = Some("roundtrip".into());
        config.perceptual.ngrams = 5;
        config.matcher.use_parallel = true;

        let yaml = config.to_yaml().unwrap();
        let parsed = NearDupConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
